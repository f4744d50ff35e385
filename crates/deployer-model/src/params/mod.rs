//! Request and response shapes of the batched remote-call convention.
//!
//! Every request carries a list of entities and every response carries one
//! result slot per request entity, in request order.
mod entity;
pub use entity::{Entities, Entity, PasswordChange, PasswordChanges};

mod results;
pub use results::{
    BoolResult, BoolResults, BulkResults, EntityResult, ErrorResult, ErrorResults, LifeResult,
    LifeResults,
};
