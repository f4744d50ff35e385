//! Call channel used by the client to reach the controller.
//!
//! The transport itself (connection, session, wire encoding) lives outside
//! this crate. Implementations only need to move a JSON request to the named
//! facility method and hand back the JSON response.
use deployer_model::RpcError;
use serde_json::Value;
use thiserror::Error;

/// Failure of the call itself, as opposed to an error about one entity.
///
/// All variants are candidates for a retry by the caller.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The controller rejected the call as a whole.
    #[error("server error: {0}")]
    Server(#[from] RpcError),
}

/// Performs one named remote procedure call.
///
/// `facility` and `method` form the two-level operation name, `id` selects a
/// facility instance and is empty for facility-scoped calls.
/// On `Ok` the value is the decoded response body; on `Err` there is no body.
pub trait Caller: Send + Sync {
    fn call(&self, facility: &str, id: &str, method: &str, args: Value) -> Result<Value, CallError>;
}
