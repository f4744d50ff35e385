use std::{path::PathBuf, sync::Arc};

use tracing::{info, warn};

use deployer_client::{DeployerError, State, Unit};
use deployer_model::Life;
use deployer_observe::init_logger;
use deployer_prometheus::{Encoder, PrometheusMetrics, TextEncoder};

mod config;
mod controller;

use config::AgentConfig;
use controller::LocalController;

/// What the agent did with one unit.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Deployed,
    Denied,
    Removed,
    Waiting(Life),
}

/// One pass of the deployer loop over a unit: deploy live units the agent
/// may run, remove units the controller has already finished with.
fn reconcile(unit: &mut Unit, password: &str) -> Result<Action, DeployerError> {
    unit.refresh()?;
    match unit.life() {
        Life::Alive => match unit.can_deploy() {
            Ok(true) => {
                unit.set_password(password)?;
                Ok(Action::Deployed)
            }
            Ok(false) => Ok(Action::Denied),
            Err(err) if err.is_unauthorized() => Ok(Action::Denied),
            Err(err) => Err(err),
        },
        Life::Dying => Ok(Action::Waiting(Life::Dying)),
        Life::Dead => {
            unit.remove()?;
            Ok(Action::Removed)
        }
    }
}

fn main() -> anyhow::Result<()> {
    // 1) config
    let mut cfg = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => AgentConfig::load(&path)?,
        None => AgentConfig::default(),
    };
    cfg.logger.level = cfg.logger.level.clone().or_env();

    // 2) logger
    init_logger(&cfg.logger)?;
    info!(format = %cfg.logger.format, "logger initialized");

    // 3) controller connection + metrics
    let metrics = PrometheusMetrics::new()?;
    let caller = Arc::new(LocalController::new(&cfg.units));
    let st = State::new(caller).with_metrics(Arc::new(metrics.clone()));

    // 4) deployer pass
    for seed in &cfg.units {
        let mut unit = match st.unit(&seed.name) {
            Ok(unit) => unit,
            Err(err) if err.is_not_found() => {
                warn!(unit = %seed.name, "unit vanished before lookup");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        match reconcile(&mut unit, &cfg.unit_password) {
            Ok(action) => info!(unit = %seed.name, ?action, "unit reconciled"),
            Err(err) if err.is_retryable() => return Err(err.into()),
            Err(err) => warn!(unit = %seed.name, kind = err.kind(), error = %err, "unit skipped"),
        }
    }

    // 5) metrics snapshot
    let mut buf = Vec::new();
    TextEncoder::new().encode(&metrics.gather(), &mut buf)?;
    print!("{}", String::from_utf8_lossy(&buf));
    Ok(())
}
