use deployer_model::RpcError;
use thiserror::Error;

use crate::caller::CallError;

/// Errors returned by client operations.
///
/// The three classes never overlap:
/// - `Transport`: the call did not complete; the result was never inspected.
/// - `Entity`: the call completed and the controller rejected this entity.
/// - `UnexpectedResultCount` / `MissingPayload`: the call completed but the
///   response does not line up with the request.
#[derive(Debug, Error)]
pub enum DeployerError {
    #[error("call failed: {0}")]
    Transport(#[from] CallError),

    #[error(transparent)]
    Entity(RpcError),

    #[error("protocol violation: expected {expected} result(s) from {method}, got {got}")]
    UnexpectedResultCount {
        method: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("protocol violation: result from {method} carries neither a value nor an error")]
    MissingPayload { method: &'static str },
}

impl DeployerError {
    pub fn is_transport(&self) -> bool {
        matches!(self, DeployerError::Transport(_))
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, DeployerError::Entity(_))
    }

    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            DeployerError::UnexpectedResultCount { .. } | DeployerError::MissingPayload { .. }
        )
    }

    /// Only transport failures may succeed when repeated unchanged.
    pub fn is_retryable(&self) -> bool {
        self.is_transport()
    }

    /// Entity-level error, if this is one.
    pub fn entity_error(&self) -> Option<&RpcError> {
        match self {
            DeployerError::Entity(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.entity_error().is_some_and(RpcError::is_not_found)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.entity_error().is_some_and(RpcError::is_unauthorized)
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DeployerError::Transport(_) => "transport",
            DeployerError::Entity(_) => "entity",
            DeployerError::UnexpectedResultCount { .. } | DeployerError::MissingPayload { .. } => {
                "protocol"
            }
        }
    }
}

pub type DeployerResult<T> = Result<T, DeployerError>;
