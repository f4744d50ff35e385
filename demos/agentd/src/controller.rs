//! In-process stand-in for the controller's Deployer facility.
//!
//! Answers every batch entity by entity, so multi-entity requests get
//! multi-slot responses just like the real facility.
use std::{collections::HashMap, sync::Mutex};

use deployer_client::{CallError, Caller, FACILITY};
use deployer_model::{
    BoolResult, BoolResults, Entities, ErrorResult, ErrorResults, Life, LifeResult, LifeResults,
    PasswordChanges, RpcError, unit_tag,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::config::UnitSeed;

struct UnitDoc {
    life: Life,
    deployable: bool,
}

pub struct LocalController {
    units: Mutex<HashMap<String, UnitDoc>>,
}

impl LocalController {
    pub fn new(seeds: &[UnitSeed]) -> Self {
        let units = seeds
            .iter()
            .map(|s| {
                let doc = UnitDoc {
                    life: s.life,
                    deployable: s.deployable,
                };
                (unit_tag(&s.name), doc)
            })
            .collect();
        Self {
            units: Mutex::new(units),
        }
    }

    fn not_found(tag: &str) -> RpcError {
        RpcError::not_found(format!("entity {tag:?} not found"))
    }

    fn life(&self, args: Entities) -> LifeResults {
        let units = self.lock();
        let results = args
            .entities
            .iter()
            .map(|e| match units.get(&e.tag) {
                Some(doc) => LifeResult {
                    life: Some(doc.life),
                    error: None,
                },
                None => LifeResult {
                    life: None,
                    error: Some(Self::not_found(&e.tag)),
                },
            })
            .collect();
        LifeResults { results }
    }

    fn can_deploy(&self, args: Entities) -> BoolResults {
        let units = self.lock();
        let results = args
            .entities
            .iter()
            .map(|e| match units.get(&e.tag) {
                Some(doc) if doc.deployable => BoolResult {
                    result: Some(true),
                    error: None,
                },
                _ => BoolResult {
                    result: None,
                    error: Some(RpcError::unauthorized("permission denied")),
                },
            })
            .collect();
        BoolResults { results }
    }

    fn set_passwords(&self, args: PasswordChanges) -> ErrorResults {
        let units = self.lock();
        let results = args
            .changes
            .iter()
            .map(|c| match units.get(&c.tag) {
                Some(_) => {
                    debug!(tag = %c.tag, "unit password changed");
                    ErrorResult::default()
                }
                None => ErrorResult {
                    error: Some(Self::not_found(&c.tag)),
                },
            })
            .collect();
        ErrorResults { results }
    }

    fn remove(&self, args: Entities) -> ErrorResults {
        let mut units = self.lock();
        let results = args
            .entities
            .iter()
            .map(|e| match units.get(&e.tag).map(|d| d.life) {
                None => ErrorResult {
                    error: Some(Self::not_found(&e.tag)),
                },
                Some(Life::Alive) => ErrorResult {
                    error: Some(RpcError::new("", format!("cannot remove {}: still alive", e.tag))),
                },
                Some(_) => {
                    units.remove(&e.tag);
                    ErrorResult::default()
                }
            })
            .collect();
        ErrorResults { results }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, UnitDoc>> {
        self.units.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn dispatch<A, R>(args: Value, handler: impl FnOnce(A) -> R) -> Result<Value, CallError>
where
    A: DeserializeOwned,
    R: Serialize,
{
    let args = serde_json::from_value(args).map_err(CallError::Decode)?;
    serde_json::to_value(handler(args)).map_err(CallError::Encode)
}

impl Caller for LocalController {
    fn call(&self, facility: &str, id: &str, method: &str, args: Value) -> Result<Value, CallError> {
        if facility != FACILITY || !id.is_empty() {
            return Err(CallError::Server(RpcError::new(
                "not implemented",
                format!("unknown facility {facility:?}"),
            )));
        }
        match method {
            "Life" => dispatch(args, |a: Entities| self.life(a)),
            "CanDeploy" => dispatch(args, |a: Entities| self.can_deploy(a)),
            "SetPasswords" => dispatch(args, |a: PasswordChanges| self.set_passwords(a)),
            "Remove" => dispatch(args, |a: Entities| self.remove(a)),
            other => Err(CallError::Server(RpcError::new(
                "not implemented",
                format!("unknown method {FACILITY}.{other}"),
            ))),
        }
    }
}
