use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown life value: {0}")]
    UnknownLife(String),

    #[error("unknown tag kind: {0}")]
    UnknownTagKind(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
