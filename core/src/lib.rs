//! Synchronous client for the Nova Poshta JSON API.
//!
//! # Overview
//! Every provider operation is the same `POST` of an envelope
//! `{apiKey, modelName, calledMethod, methodProperties}` to one endpoint, and
//! every answer is an envelope `{success, data, errors, warnings, info}`.
//! This crate encodes the former, validates the latter, and exposes typed
//! wrappers for the `Address`, `Counterparty`, `InternetDocument`,
//! `TrackingDocument` and `Common` models on top.
//!
//! # Design
//! - `envelope` is pure: it builds `HttpRequest`s and decodes `HttpResponse`s.
//! - `http::HttpTransport` executes requests; `UreqTransport` is the default.
//! - `ApiClient` joins the two. `NovaPoshta` adds the optional `MockTable`
//!   in front of it and is the single dispatch point for the wrappers.
//! - Failures are `ApiError::Transport` or `ApiError::Application`, returned
//!   immediately; there are no retries, caches or queues.
//!
//! ```no_run
//! use novaposhta_core::{CityQuery, NovaPoshta};
//!
//! let np = NovaPoshta::new("your-api-key");
//! let cities = np.address().get_cities(&CityQuery {
//!     find_by_string: Some("Київ".into()),
//!     ..Default::default()
//! })?;
//! # Ok::<(), novaposhta_core::ApiError>(())
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod mock;
pub mod sdk;
pub mod types;

pub use api::{AddressApi, Caller, CommonApi, CounterpartyApi, DocumentApi, TrackingApi};
pub use client::ApiClient;
pub use config::{Config, DEFAULT_API_URL, REQUEST_TIMEOUT};
pub use envelope::{MethodProperties, RequestEnvelope, ResponseEnvelope};
pub use error::{ApiError, ConfigError, Result, TransportFailure};
pub use http::{HttpRequest, HttpResponse, HttpTransport, UreqTransport};
pub use mock::{MockResponse, MockTable};
pub use sdk::NovaPoshta;
pub use types::*;
