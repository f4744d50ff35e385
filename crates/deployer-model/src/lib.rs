mod domain;
pub use domain::{CODE_NOT_FOUND, CODE_UNAUTHORIZED};
pub use domain::{Life, RpcError};

mod error;
pub use error::{ModelError, ModelResult};

mod params;
pub use params::{
    BoolResult, BoolResults, BulkResults, Entities, Entity, EntityResult, ErrorResult,
    ErrorResults, LifeResult, LifeResults, PasswordChange, PasswordChanges,
};

mod tag;
pub use tag::{TagKind, decode_tag, encode_tag, unit_name_from_tag, unit_tag};
