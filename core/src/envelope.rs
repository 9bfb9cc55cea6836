//! The request and response envelopes shared by every API operation.
//!
//! # Design
//! Every operation is a `POST` of
//! `{apiKey, modelName, calledMethod, methodProperties}` to one endpoint, and
//! every answer is `{success, data, errors, warnings, info}`. A
//! [`ResponseEnvelope`] is validated while it is constructed, so holding one
//! means the call succeeded. Validation is a strict chain and only the first
//! failing check is reported:
//!
//! 1. HTTP status other than 200 -> `Transport(Status)`, whatever the body.
//! 2. Body is not a JSON object -> `Transport(MalformedResponse)`.
//! 3. Non-empty `errors` -> `Application`, even when `success` is true.
//! 4. `success` false or absent -> `Application` with `"Unknown API error"`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, HttpResponse};

/// Ordered `methodProperties` mapping sent with each call.
pub type MethodProperties = Map<String, Value>;

/// Outbound envelope. Borrowed, built fresh for every call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope<'a> {
    pub api_key: &'a str,
    pub model_name: &'a str,
    pub called_method: &'a str,
    pub method_properties: &'a MethodProperties,
}

impl<'a> RequestEnvelope<'a> {
    pub fn new(
        api_key: &'a str,
        model_name: &'a str,
        called_method: &'a str,
        method_properties: &'a MethodProperties,
    ) -> Self {
        Self {
            api_key,
            model_name,
            called_method,
            method_properties,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ApiError::malformed_request)
    }

    /// Wrap the encoded envelope in a JSON `POST` to `url`.
    pub fn to_http_request(&self, url: &str) -> Result<HttpRequest> {
        Ok(HttpRequest {
            url: url.to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: self.to_json()?,
        })
    }
}

/// A successful, validated response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    success: bool,
    data: Value,
    errors: Vec<String>,
    warnings: Vec<String>,
    info: Vec<String>,
    status_code: u16,
    raw: Value,
}

impl ResponseEnvelope {
    /// Decode and validate a raw HTTP response.
    pub fn decode(response: &HttpResponse) -> Result<Self> {
        if response.status != 200 {
            return Err(ApiError::status(response.status));
        }
        let raw: Value = serde_json::from_slice(&response.body)
            .map_err(|e| ApiError::malformed_response(e, response.status))?;
        Self::from_value(raw, response.status)
    }

    /// Validate an already decoded body received with `status_code`.
    pub fn from_value(raw: Value, status_code: u16) -> Result<Self> {
        if status_code != 200 {
            return Err(ApiError::status(status_code));
        }
        let Some(body) = raw.as_object() else {
            return Err(ApiError::malformed_response(
                format!("expected a JSON object, got {}", kind_of(&raw)),
                status_code,
            ));
        };

        let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
        let data = match body.get("data") {
            None | Some(Value::Null) => Value::Array(Vec::new()),
            Some(data) => data.clone(),
        };
        let errors = string_list(body.get("errors"));
        let warnings = string_list(body.get("warnings"));
        let info = string_list(body.get("info"));

        if !errors.is_empty() {
            return Err(ApiError::reported(errors));
        }
        if !success {
            return Err(ApiError::unsuccessful());
        }

        Ok(Self {
            success,
            data,
            errors,
            warnings,
            info,
            status_code,
            raw,
        })
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn info(&self) -> &[String] {
        &self.info
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The decoded body exactly as received.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Flatten a message list. The API occasionally sends an object keyed by
/// code, or a bare string, instead of an array.
fn string_list(value: Option<&Value>) -> Vec<String> {
    fn text(item: &Value) -> String {
        match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(text).collect(),
        Some(Value::Object(items)) => items.values().map(text).collect(),
        Some(Value::String(s)) if s.is_empty() => Vec::new(),
        Some(other) => vec![text(other)],
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
