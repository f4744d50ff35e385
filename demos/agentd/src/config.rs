use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use deployer_model::Life;
use deployer_observe::LoggerConfig;
use serde::Deserialize;

/// Unit known to the local controller at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitSeed {
    pub name: String,
    pub life: Life,
    #[serde(default = "deployable_default")]
    pub deployable: bool,
}

fn deployable_default() -> bool {
    true
}

/// Agent configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub logger: LoggerConfig,
    /// Password handed to every unit the agent deploys.
    pub unit_password: String,
    pub units: Vec<UnitSeed>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        let seed = |name: &str, life, deployable| UnitSeed {
            name: name.to_string(),
            life,
            deployable,
        };
        Self {
            logger: LoggerConfig::default(),
            unit_password: "s3cr3t".to_string(),
            units: vec![
                seed("wordpress/0", Life::Alive, true),
                seed("mysql/0", Life::Alive, false),
                seed("wordpress/1", Life::Dying, true),
                seed("cache/3", Life::Dead, true),
            ],
        }
    }
}

impl AgentConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_file_fills_defaults() {
        let json = r#"{"units": [{"name": "myapp/0", "life": "alive"}]}"#;
        let cfg: AgentConfig = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.units.len(), 1);
        assert!(cfg.units[0].deployable);
        assert_eq!(cfg.unit_password, "s3cr3t");
        assert_eq!(cfg.logger.level.as_str(), "info");
    }

    #[test]
    fn logger_section_is_nested() {
        let json = r#"{"logger": {"format": "json", "level": "deployer_client=debug,info"}}"#;
        let cfg: AgentConfig = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.logger.format, deployer_observe::LoggerFormat::Json);
        assert_eq!(cfg.units.len(), 4);
    }
}
