//! Facility-level handle onto the controller's deployer operations.
//!
//! Every operation is sent as a batch over a list of entities, even though
//! this client always addresses exactly one. [`State`] owns that convention:
//! build a one-entity request, issue it, then correlate the single result slot.
mod bulk;

use std::{fmt, sync::Arc};

use deployer_model::{BulkResults, Entities, EntityResult, Life, LifeResults, unit_tag};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};

use crate::{
    caller::{CallError, Caller},
    error::{DeployerError, DeployerResult},
    metrics::{MetricsHandle, noop_metrics},
    unit::Unit,
};

/// Name of the controller facility serving the deployer operations.
pub const FACILITY: &str = "Deployer";

pub(crate) const METHOD_LIFE: &str = "Life";
pub(crate) const METHOD_REMOVE: &str = "Remove";
pub(crate) const METHOD_SET_PASSWORDS: &str = "SetPasswords";
pub(crate) const METHOD_CAN_DEPLOY: &str = "CanDeploy";

/// Entry point for deployer calls, shared by every [`Unit`] it hands out.
///
/// Cloning is cheap; clones share the same call channel and metrics backend.
#[derive(Clone)]
pub struct State {
    caller: Arc<dyn Caller>,
    metrics: MetricsHandle,
}

impl State {
    /// Create a state bound to the given call channel.
    pub fn new(caller: Arc<dyn Caller>) -> Self {
        Self {
            caller,
            metrics: noop_metrics(),
        }
    }

    /// Replace the metrics backend.
    #[inline]
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    /// Look up the unit called `name` and fetch its current life.
    pub fn unit(&self, name: &str) -> DeployerResult<Unit> {
        let tag = unit_tag(name);
        let life = self.unit_life(&tag)?;
        Ok(Unit::new(tag, life, self.clone()))
    }

    /// Fetch the life of the entity with `tag`.
    pub(crate) fn unit_life(&self, tag: &str) -> DeployerResult<Life> {
        self.call_single::<_, LifeResults>(METHOD_LIFE, tag, &Entities::single(tag))
    }

    /// Issue a one-entity batch call and return the payload of its only slot.
    ///
    /// A failed call is returned before the response is looked at.
    #[instrument(level = "debug", skip(self, args), fields(facility = FACILITY))]
    pub(crate) fn call_single<A, R>(
        &self,
        method: &'static str,
        tag: &str,
        args: &A,
    ) -> DeployerResult<<R::Item as EntityResult>::Value>
    where
        A: Serialize,
        R: BulkResults,
    {
        self.metrics.record_call(method);

        let results: R = match self.call(method, args) {
            Ok(results) => results,
            Err(err) => {
                self.metrics.record_transport_error(method);
                debug!(error = %err, "call failed");
                return Err(DeployerError::Transport(err));
            }
        };

        let outcome = bulk::single_result(method, results.into_results());
        match &outcome {
            Ok(_) => debug!("call succeeded"),
            Err(DeployerError::Entity(err)) => {
                self.metrics.record_entity_error(method, &err.code);
                warn!(code = %err.code, error = %err, "controller rejected entity");
            }
            Err(err) => {
                self.metrics.record_protocol_violation(method);
                warn!(error = %err, "malformed batch response");
            }
        }
        outcome
    }

    /// Encode `args`, call `method` on the facility and decode the response.
    fn call<A, R>(&self, method: &str, args: &A) -> Result<R, CallError>
    where
        A: Serialize,
        R: DeserializeOwned,
    {
        let args = serde_json::to_value(args).map_err(CallError::Encode)?;
        let value = self.caller.call(FACILITY, "", method, args)?;
        serde_json::from_value(value).map_err(CallError::Decode)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").field("facility", &FACILITY).finish()
    }
}
