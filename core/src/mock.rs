//! Canned responses that short-circuit the transport.
//!
//! # Design
//! A [`MockTable`] maps an operation key (`"Model.method"`) to an ordered list
//! of candidate [`MockResponse`]s. A lookup walks the candidates in
//! registration order and returns the first whose `params` predicate is
//! satisfied by the call's `methodProperties`; an entry without `params`
//! always matches. When nothing matches the call falls through to the live
//! transport, which is not an error.
//!
//! The table is installed and cleared as a whole through `&mut` on the
//! facade, so it cannot change while a call is in flight.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::envelope::{MethodProperties, ResponseEnvelope};
use crate::error::Result;

/// Build the lookup key for an operation.
pub fn operation_key(model_name: &str, called_method: &str) -> String {
    format!("{model_name}.{called_method}")
}

/// One canned answer. `response` has the shape of a response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockResponse {
    pub response: Value,
    #[serde(default = "ok_status")]
    pub status_code: u16,
    #[serde(default)]
    pub params: Option<MethodProperties>,
}

fn ok_status() -> u16 {
    200
}

impl MockResponse {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            status_code: ok_status(),
            params: None,
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    /// Require `key` to equal `value` in the call's properties.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(MethodProperties::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_params(mut self, params: MethodProperties) -> Self {
        self.params = Some(params);
        self
    }

    /// Subset match with strict equality: `1` and `"1"` differ. A property
    /// that is present but `null` counts as absent.
    pub fn matches(&self, method_properties: &MethodProperties) -> bool {
        let Some(params) = &self.params else {
            return true;
        };
        params.iter().all(|(key, expected)| match method_properties.get(key) {
            None | Some(Value::Null) => false,
            Some(actual) => actual == expected,
        })
    }

    /// Validate the canned body exactly like a live one.
    pub fn to_envelope(&self) -> Result<ResponseEnvelope> {
        ResponseEnvelope::from_value(self.response.clone(), self.status_code)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Candidates {
    Many(Vec<MockResponse>),
    One(MockResponse),
}

/// Operation key -> candidate responses, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockTable {
    entries: HashMap<String, Vec<MockResponse>>,
}

impl MockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{"Model.method": entry}` or `{"Model.method": [entry, ...]}`.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        let keyed: serde_json::Map<String, Value> = serde_json::from_value(value)?;
        let mut table = Self::new();
        for (key, candidates) in keyed {
            match serde_json::from_value(candidates)? {
                Candidates::Many(list) => {
                    for entry in list {
                        table.insert(key.clone(), entry);
                    }
                }
                Candidates::One(entry) => table.insert(key, entry),
            }
        }
        Ok(table)
    }

    /// Append a candidate for `key`.
    pub fn insert(&mut self, key: impl Into<String>, entry: MockResponse) {
        self.entries.entry(key.into()).or_default().push(entry);
    }

    pub fn with(mut self, key: impl Into<String>, entry: MockResponse) -> Self {
        self.insert(key, entry);
        self
    }

    /// Total number of candidates across all keys.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First candidate for the operation that matches, or `None` to fall through.
    pub fn lookup(
        &self,
        model_name: &str,
        called_method: &str,
        method_properties: &MethodProperties,
    ) -> Option<&MockResponse> {
        self.entries
            .get(&operation_key(model_name, called_method))?
            .iter()
            .find(|entry| entry.matches(method_properties))
    }
}
