//! Domain wrappers over the envelope protocol.
//!
//! # Design
//! Each wrapper knows one `modelName` and turns typed arguments into
//! `methodProperties`. It never talks to HTTP itself: it holds a `&dyn
//! Caller`, which is either the bare [`ApiClient`](crate::ApiClient) or the
//! dispatching [`NovaPoshta`](crate::NovaPoshta) facade. The choice is made
//! when the wrapper is constructed.

mod address;
mod common;
mod counterparty;
mod document;
mod tracking;

pub use address::AddressApi;
pub use common::CommonApi;
pub use counterparty::CounterpartyApi;
pub use document::DocumentApi;
pub use tracking::TrackingApi;

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::envelope::{MethodProperties, ResponseEnvelope};
use crate::error::{ApiError, Result};

/// Something that can perform an API call.
pub trait Caller {
    fn call_full(
        &self,
        model_name: &str,
        called_method: &str,
        method_properties: &MethodProperties,
    ) -> Result<ResponseEnvelope>;

    fn call(
        &self,
        model_name: &str,
        called_method: &str,
        method_properties: &MethodProperties,
    ) -> Result<Value> {
        self.call_full(model_name, called_method, method_properties)
            .map(ResponseEnvelope::into_data)
    }
}

impl Caller for ApiClient {
    fn call_full(
        &self,
        model_name: &str,
        called_method: &str,
        method_properties: &MethodProperties,
    ) -> Result<ResponseEnvelope> {
        self.send_full(model_name, called_method, method_properties)
    }
}

/// Serialize typed arguments into a `methodProperties` object.
pub fn to_properties<T: Serialize + ?Sized>(params: &T) -> Result<MethodProperties> {
    match serde_json::to_value(params).map_err(ApiError::malformed_request)? {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::malformed_request(format!(
            "methodProperties must be an object, got {other}"
        ))),
    }
}

/// A caller bound to one model name.
#[derive(Clone, Copy)]
struct Model<'a> {
    caller: &'a dyn Caller,
    name: &'static str,
}

impl<'a> Model<'a> {
    fn new(caller: &'a dyn Caller, name: &'static str) -> Self {
        Self { caller, name }
    }

    fn call<T: Serialize + ?Sized>(&self, called_method: &str, params: &T) -> Result<Value> {
        let properties = to_properties(params)?;
        self.caller.call(self.name, called_method, &properties)
    }

    fn call_without_params(&self, called_method: &str) -> Result<Value> {
        self.caller.call(self.name, called_method, &MethodProperties::new())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use serde_json::{json, Value};

    use super::Caller;
    use crate::envelope::{MethodProperties, ResponseEnvelope};
    use crate::error::Result;

    /// Caller that records every call and answers with an empty success.
    #[derive(Default)]
    pub struct RecordingCaller {
        pub calls: RefCell<Vec<(String, String, Value)>>,
    }

    impl RecordingCaller {
        pub fn last(&self) -> (String, String, Value) {
            self.calls.borrow().last().cloned().expect("no call recorded")
        }
    }

    impl Caller for RecordingCaller {
        fn call_full(
            &self,
            model_name: &str,
            called_method: &str,
            method_properties: &MethodProperties,
        ) -> Result<ResponseEnvelope> {
            self.calls.borrow_mut().push((
                model_name.to_string(),
                called_method.to_string(),
                Value::Object(method_properties.clone()),
            ));
            ResponseEnvelope::from_value(json!({"success": true, "data": []}), 200)
        }
    }
}
