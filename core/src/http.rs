//! HTTP exchange described as plain data, plus the transport that runs it.
//!
//! # Design
//! The envelope codec builds an `HttpRequest` and decodes an `HttpResponse`
//! without touching the network. Executing the request is delegated to an
//! [`HttpTransport`], so the codec and dispatcher stay deterministic and can
//! be tested against a scripted transport. [`UreqTransport`] is the blocking
//! implementation used in production.
//!
//! Non-200 statuses are returned as data, never as `Err`; the codec owns
//! status interpretation.

use ureq::Agent;

use crate::config::REQUEST_TIMEOUT;
use crate::error::ApiError;

/// A JSON POST described as plain data. The API has a single verb, so there
/// is no method field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Status and raw body bytes of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes an `HttpRequest`.
///
/// Implementations must return `Ok` for every completed exchange regardless
/// of status and map connection-level faults to a `Network` transport error.
pub trait HttpTransport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a shared `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.post(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.send(request.body.as_bytes()).map_err(network_error)?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_vec().map_err(network_error)?;

        Ok(HttpResponse { status, body })
    }
}

fn network_error(err: ureq::Error) -> ApiError {
    let code = match &err {
        ureq::Error::Io(io) => io.raw_os_error(),
        _ => None,
    };
    ApiError::network(err, code)
}
