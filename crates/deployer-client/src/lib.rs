pub mod caller;
pub mod error;
pub mod metrics;
mod state;
mod unit;

#[cfg(test)]
mod testing;

pub use caller::{CallError, Caller};
pub use error::{DeployerError, DeployerResult};
pub use metrics::{MetricsBackend, MetricsHandle, NoOpMetrics, noop_metrics};
pub use state::{FACILITY, State};
pub use unit::Unit;

pub mod prelude {
    pub use crate::caller::{CallError, Caller};
    pub use crate::error::DeployerError;
    pub use crate::state::State;
    pub use crate::unit::Unit;
    pub use deployer_model::{Life, RpcError};
}
