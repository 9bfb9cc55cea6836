//! The `NovaPoshta` facade and operation dispatcher.
//!
//! # Design
//! Every domain wrapper obtained from the facade calls back into
//! [`NovaPoshta::request_full`], the single chokepoint for all operations. A
//! call first consults the installed [`MockTable`], if any; a matching entry
//! is validated and returned without touching the network, anything else
//! falls through to the [`ApiClient`].

use serde_json::Value;

use crate::api::{AddressApi, Caller, CommonApi, CounterpartyApi, DocumentApi, TrackingApi};
use crate::client::ApiClient;
use crate::config::Config;
use crate::envelope::{MethodProperties, ResponseEnvelope};
use crate::error::Result;
use crate::http::HttpTransport;
use crate::mock::MockTable;

#[derive(Debug)]
pub struct NovaPoshta {
    client: ApiClient,
    mocks: Option<MockTable>,
}

impl NovaPoshta {
    /// Facade for the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(Config::new(api_key))
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            client: ApiClient::new(config),
            mocks: None,
        }
    }

    pub fn with_transport(config: Config, transport: impl HttpTransport + 'static) -> Self {
        Self {
            client: ApiClient::with_transport(config, transport),
            mocks: None,
        }
    }

    pub fn config(&self) -> &Config {
        self.client.config()
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.client.config_mut().set_api_key(api_key);
    }

    pub fn address(&self) -> AddressApi<'_> {
        AddressApi::new(self)
    }

    pub fn counterparty(&self) -> CounterpartyApi<'_> {
        CounterpartyApi::new(self)
    }

    pub fn document(&self) -> DocumentApi<'_> {
        DocumentApi::new(self)
    }

    pub fn tracking(&self) -> TrackingApi<'_> {
        TrackingApi::new(self)
    }

    pub fn common(&self) -> CommonApi<'_> {
        CommonApi::new(self)
    }

    /// Replace the mock table. Takes `&mut self`, so no call can be in flight.
    pub fn set_mock_responses(&mut self, mocks: MockTable) -> &mut Self {
        tracing::debug!(entries = mocks.len(), "installing mock responses");
        self.mocks = Some(mocks);
        self
    }

    pub fn clear_mock_responses(&mut self) -> &mut Self {
        self.mocks = None;
        self
    }

    pub fn has_mock_responses(&self) -> bool {
        self.mocks.is_some()
    }

    /// Call `model_name.called_method` and return the `data` payload.
    pub fn request(
        &self,
        model_name: &str,
        called_method: &str,
        method_properties: &MethodProperties,
    ) -> Result<Value> {
        self.request_full(model_name, called_method, method_properties)
            .map(ResponseEnvelope::into_data)
    }

    /// Call `model_name.called_method` and return the whole envelope.
    pub fn request_full(
        &self,
        model_name: &str,
        called_method: &str,
        method_properties: &MethodProperties,
    ) -> Result<ResponseEnvelope> {
        tracing::debug!(model = model_name, method = called_method, "dispatching");

        if let Some(mocks) = &self.mocks {
            match mocks.lookup(model_name, called_method, method_properties) {
                Some(entry) => {
                    tracing::debug!(
                        model = model_name,
                        method = called_method,
                        status = entry.status_code,
                        "answered from mock table"
                    );
                    return entry.to_envelope();
                }
                None => {
                    tracing::debug!(
                        model = model_name,
                        method = called_method,
                        "no matching mock, falling through"
                    );
                }
            }
        }

        self.client
            .send_full(model_name, called_method, method_properties)
    }
}

impl Caller for NovaPoshta {
    fn call_full(
        &self,
        model_name: &str,
        called_method: &str,
        method_properties: &MethodProperties,
    ) -> Result<ResponseEnvelope> {
        self.request_full(model_name, called_method, method_properties)
    }
}
