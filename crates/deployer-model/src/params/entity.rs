use serde::{Deserialize, Serialize};

/// A single addressed entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub tag: String,
}

/// Batch of entities addressed by one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entities {
    pub entities: Vec<Entity>,
}

impl Entities {
    /// Batch containing exactly one entity.
    pub fn single(tag: impl Into<String>) -> Self {
        Self {
            entities: vec![Entity { tag: tag.into() }],
        }
    }
}

/// New credential for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub tag: String,
    pub password: String,
}

/// Batch of credential changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChanges {
    pub changes: Vec<PasswordChange>,
}

impl PasswordChanges {
    /// Batch containing exactly one change.
    pub fn single<T, P>(tag: T, password: P) -> Self
    where
        T: Into<String>,
        P: Into<String>,
    {
        Self {
            changes: vec![PasswordChange {
                tag: tag.into(),
                password: password.into(),
            }],
        }
    }
}
