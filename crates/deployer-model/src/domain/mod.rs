mod life;
pub use life::Life;

mod rpc_error;
pub use rpc_error::RpcError;

mod constants;
pub use constants::{CODE_NOT_FOUND, CODE_UNAUTHORIZED};
