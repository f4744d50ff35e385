use deployer_model::EntityResult;

use crate::error::{DeployerError, DeployerResult};

/// Correlates a batched response with a one-entity request.
///
/// The response must hold exactly one slot. Zero or several slots mean the
/// batch does not answer the request and nothing in it is trusted.
pub(crate) fn single_result<I>(method: &'static str, results: Vec<I>) -> DeployerResult<I::Value>
where
    I: EntityResult,
{
    let got = results.len();
    let mut slots = results.into_iter();
    let (Some(slot), None) = (slots.next(), slots.next()) else {
        return Err(DeployerError::UnexpectedResultCount {
            method,
            expected: 1,
            got,
        });
    };

    match slot.into_result() {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(DeployerError::MissingPayload { method }),
        Err(err) => Err(DeployerError::Entity(err)),
    }
}
