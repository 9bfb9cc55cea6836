//! Transport adapter: one envelope in, one validated envelope out.
//!
//! # Design
//! `ApiClient` owns the [`Config`] and an [`HttpTransport`]. Each call
//! encodes a [`RequestEnvelope`], executes it, and hands the raw response to
//! [`ResponseEnvelope::decode`]. Nothing is retried or cached; the first
//! failure is returned to the caller unchanged.

use std::fmt;

use serde_json::Value;

use crate::config::Config;
use crate::envelope::{MethodProperties, RequestEnvelope, ResponseEnvelope};
use crate::error::Result;
use crate::http::{HttpTransport, UreqTransport};

pub struct ApiClient {
    config: Config,
    transport: Box<dyn HttpTransport>,
}

impl ApiClient {
    /// Client over the default blocking `ureq` transport.
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }

    pub fn with_transport(config: Config, transport: impl HttpTransport + 'static) -> Self {
        Self {
            config,
            transport: Box::new(transport),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Perform a call and return only the `data` payload.
    pub fn send(
        &self,
        model_name: &str,
        called_method: &str,
        method_properties: &MethodProperties,
    ) -> Result<Value> {
        self.send_full(model_name, called_method, method_properties)
            .map(ResponseEnvelope::into_data)
    }

    /// Perform a call and return the whole validated envelope.
    pub fn send_full(
        &self,
        model_name: &str,
        called_method: &str,
        method_properties: &MethodProperties,
    ) -> Result<ResponseEnvelope> {
        let request = RequestEnvelope::new(
            self.config.api_key(),
            model_name,
            called_method,
            method_properties,
        )
        .to_http_request(self.config.api_url())?;

        let result = self
            .transport
            .execute(&request)
            .and_then(|response| ResponseEnvelope::decode(&response));

        if let Err(err) = &result {
            tracing::warn!(model = model_name, method = called_method, error = %err, "nova poshta call failed");
        }
        result
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_url", &self.config.api_url())
            .finish_non_exhaustive()
    }
}
