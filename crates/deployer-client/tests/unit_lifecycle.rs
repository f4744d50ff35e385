//! Drives `State`/`Unit` against an in-memory controller that speaks the
//! batched protocol for any number of entities.
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use deployer_client::{CallError, Caller, DeployerError, FACILITY, State};
use deployer_model::{
    BoolResult, BoolResults, Entities, ErrorResult, ErrorResults, Life, LifeResult, LifeResults,
    PasswordChanges, RpcError, unit_name_from_tag,
};
use serde_json::Value;

#[derive(Debug, Clone)]
struct UnitDoc {
    life: Life,
    deployable: bool,
    password: Option<String>,
}

#[derive(Default)]
struct FakeController {
    units: Mutex<HashMap<String, UnitDoc>>,
}

impl FakeController {
    fn with_unit(self, tag: &str, life: Life, deployable: bool) -> Self {
        self.units.lock().unwrap().insert(
            tag.to_string(),
            UnitDoc {
                life,
                deployable,
                password: None,
            },
        );
        self
    }

    fn set_life(&self, tag: &str, life: Life) {
        if let Some(doc) = self.units.lock().unwrap().get_mut(tag) {
            doc.life = life;
        }
    }

    fn password(&self, tag: &str) -> Option<String> {
        self.units.lock().unwrap().get(tag).and_then(|d| d.password.clone())
    }

    fn contains(&self, tag: &str) -> bool {
        self.units.lock().unwrap().contains_key(tag)
    }

    fn not_found(tag: &str) -> RpcError {
        let name = unit_name_from_tag(tag).unwrap_or_else(|| tag.to_string());
        RpcError::not_found(format!("unit {name:?} not found"))
    }

    fn handle(&self, method: &str, args: Value) -> Result<Value, serde_json::Error> {
        let mut units = self.units.lock().unwrap();
        match method {
            "Life" => {
                let args: Entities = serde_json::from_value(args)?;
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
                serde_json::to_value(LifeResults { results })
            }
            "CanDeploy" => {
                let args: Entities = serde_json::from_value(args)?;
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
                serde_json::to_value(BoolResults { results })
            }
            "SetPasswords" => {
                let args: PasswordChanges = serde_json::from_value(args)?;
                let results = args
                    .changes
                    .iter()
                    .map(|c| match units.get_mut(&c.tag) {
                        Some(doc) => {
                            doc.password = Some(c.password.clone());
                            ErrorResult { error: None }
                        }
                        None => ErrorResult {
                            error: Some(Self::not_found(&c.tag)),
                        },
                    })
                    .collect();
                serde_json::to_value(ErrorResults { results })
            }
            "Remove" => {
                let args: Entities = serde_json::from_value(args)?;
                let results = args
                    .entities
                    .iter()
                    .map(|e| match units.get(&e.tag).map(|d| d.life) {
                        None => ErrorResult {
                            error: Some(Self::not_found(&e.tag)),
                        },
                        Some(Life::Alive) => ErrorResult {
                            error: Some(RpcError::new("", "cannot remove unit: unit is alive")),
                        },
                        Some(_) => {
                            units.remove(&e.tag);
                            ErrorResult { error: None }
                        }
                    })
                    .collect();
                serde_json::to_value(ErrorResults { results })
            }
            other => Ok(serde_json::json!({ "unknown": other })),
        }
    }
}

impl Caller for FakeController {
    fn call(&self, facility: &str, id: &str, method: &str, args: Value) -> Result<Value, CallError> {
        if facility != FACILITY || !id.is_empty() {
            return Err(CallError::Server(RpcError::new(
                "not implemented",
                format!("unknown facility {facility}({id})"),
            )));
        }
        self.handle(method, args).map_err(CallError::Decode)
    }
}

fn setup() -> (Arc<FakeController>, State) {
    let controller = Arc::new(
        FakeController::default()
            .with_unit("unit-myapp-0", Life::Alive, true)
            .with_unit("unit-other-3", Life::Alive, false),
    );
    let st = State::new(controller.clone());
    (controller, st)
}

#[test]
fn lookup_exposes_tag_name_and_life() {
    let (_, st) = setup();

    let unit = st.unit("myapp/0").unwrap();
    assert_eq!(unit.tag(), "unit-myapp-0");
    assert_eq!(unit.name().as_deref(), Some("myapp/0"));
    assert_eq!(unit.life(), Life::Alive);
}

#[test]
fn lookup_of_unknown_unit_is_not_found() {
    let (_, st) = setup();

    let err = st.unit("ghost/9").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "unit \"ghost/9\" not found");
}

#[test]
fn deploy_then_retire_lifecycle() {
    let (controller, st) = setup();
    let mut unit = st.unit("myapp/0").unwrap();

    assert!(unit.can_deploy().unwrap());
    unit.set_password("s3cr3t").unwrap();
    assert_eq!(controller.password("unit-myapp-0").as_deref(), Some("s3cr3t"));

    // controller-side changes are invisible until refresh
    controller.set_life("unit-myapp-0", Life::Dying);
    assert_eq!(unit.life(), Life::Alive);
    unit.refresh().unwrap();
    assert_eq!(unit.life(), Life::Dying);

    unit.remove().unwrap();
    assert!(!controller.contains("unit-myapp-0"));

    let err = unit.remove().unwrap_err();
    assert!(matches!(err, DeployerError::Entity(ref e) if e.is_not_found()));

    let err = unit.refresh().unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(unit.life(), Life::Dying);
}

#[test]
fn remove_of_alive_unit_is_rejected() {
    let (controller, st) = setup();
    let unit = st.unit("myapp/0").unwrap();

    let err = unit.remove().unwrap_err();
    assert!(err.is_entity());
    assert!(!err.is_not_found());
    assert!(controller.contains("unit-myapp-0"));
}

#[test]
fn unauthorized_deploy_is_entity_error() {
    let (_, st) = setup();
    let unit = st.unit("other/3").unwrap();

    let err = unit.can_deploy().unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!err.is_retryable());
}

#[test]
fn set_password_is_idempotent() {
    let (controller, st) = setup();
    let unit = st.unit("myapp/0").unwrap();

    unit.set_password("s3cr3t").unwrap();
    unit.set_password("s3cr3t").unwrap();
    assert_eq!(controller.password("unit-myapp-0").as_deref(), Some("s3cr3t"));
}

#[test]
fn shape_mismatch_surfaces_as_transport_decode_error() {
    struct Garbage;

    impl Caller for Garbage {
        fn call(&self, _: &str, _: &str, _: &str, _: Value) -> Result<Value, CallError> {
            Ok(serde_json::json!({"results": [{"life": "undead"}]}))
        }
    }

    let st = State::new(Arc::new(Garbage));
    let err = st.unit("myapp/0").unwrap_err();
    assert!(matches!(err, DeployerError::Transport(CallError::Decode(_))));
}
