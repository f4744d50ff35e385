use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Life, RpcError};

/// One slot of a batched response.
///
/// `into_result` splits the slot into its entity-level error or its payload.
/// `Ok(None)` means the slot carried neither, which the caller must treat as
/// a malformed response.
pub trait EntityResult {
    type Value;

    fn into_result(self) -> Result<Option<Self::Value>, RpcError>;
}

/// A batched response: an ordered list of per-entity slots.
pub trait BulkResults: DeserializeOwned {
    type Item: EntityResult;

    fn into_results(self) -> Vec<Self::Item>;
}

/// Outcome of an operation with no payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResults {
    #[serde(default)]
    pub results: Vec<ErrorResult>,
}

/// Yes/no answer for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoolResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoolResults {
    #[serde(default)]
    pub results: Vec<BoolResult>,
}

/// Lifecycle value for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life: Option<Life>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeResults {
    #[serde(default)]
    pub results: Vec<LifeResult>,
}

impl EntityResult for ErrorResult {
    type Value = ();

    fn into_result(self) -> Result<Option<()>, RpcError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(Some(())),
        }
    }
}

impl EntityResult for BoolResult {
    type Value = bool;

    fn into_result(self) -> Result<Option<bool>, RpcError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result),
        }
    }
}

impl EntityResult for LifeResult {
    type Value = Life;

    fn into_result(self) -> Result<Option<Life>, RpcError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.life),
        }
    }
}

impl BulkResults for ErrorResults {
    type Item = ErrorResult;

    fn into_results(self) -> Vec<ErrorResult> {
        self.results
    }
}

impl BulkResults for BoolResults {
    type Item = BoolResult;

    fn into_results(self) -> Vec<BoolResult> {
        self.results
    }
}

impl BulkResults for LifeResults {
    type Item = LifeResult;

    fn into_results(self) -> Vec<LifeResult> {
        self.results
    }
}
