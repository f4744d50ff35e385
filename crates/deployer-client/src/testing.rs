//! Scripted call channel shared by the unit tests.
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use serde_json::Value;

use crate::caller::{CallError, Caller};

/// One call as seen by the channel.
#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub facility: String,
    pub id: String,
    pub method: String,
    pub args: Value,
}

/// Replays queued responses in order and records every request.
///
/// A call with nothing queued fails with a connection error.
#[derive(Default)]
pub(crate) struct ScriptedCaller {
    responses: Mutex<VecDeque<Result<Value, CallError>>>,
    requests: Mutex<Vec<Recorded>>,
}

impl ScriptedCaller {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_ok(&self, response: Value) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_err(&self, err: CallError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

impl Caller for ScriptedCaller {
    fn call(&self, facility: &str, id: &str, method: &str, args: Value) -> Result<Value, CallError> {
        self.requests.lock().unwrap().push(Recorded {
            facility: facility.to_string(),
            id: id.to_string(),
            method: method.to_string(),
            args,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CallError::Connection("no scripted response".into())))
    }
}
