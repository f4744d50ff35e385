//! Well-known entity error codes.
//!
//! The controller attaches one of these to a per-entity [`crate::RpcError`].
//! Codes not listed here are passed through untouched.

/// The addressed entity does not exist on the controller.
pub const CODE_NOT_FOUND: &str = "not found";

/// The authenticated agent may not act on the addressed entity.
pub const CODE_UNAUTHORIZED: &str = "unauthorized access";
