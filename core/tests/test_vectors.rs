//! Verify envelope decoding and mock dispatch against JSON vectors stored in
//! `test-vectors/`.
//!
//! Each vector file lists inputs and the expected outcome: either the
//! unwrapped `data` or an error kind. Comparing parsed JSON (not raw strings)
//! avoids false negatives from field ordering.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use novaposhta_core::{
    ApiError, Config, HttpRequest, HttpResponse, HttpTransport, MethodProperties, MockTable,
    NovaPoshta, ResponseEnvelope, TransportFailure,
};
use serde_json::Value;

/// Transport that answers every request with the same body and counts calls.
#[derive(Clone)]
struct CannedTransport {
    body: String,
    calls: Arc<AtomicUsize>,
}

impl HttpTransport for CannedTransport {
    fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(HttpResponse {
            status: 200,
            body: self.body.clone().into_bytes(),
        })
    }
}

/// Assert that `err` matches an `expected_error` object from a vector file.
fn assert_error(name: &str, err: &ApiError, expected: &Value) {
    match expected["kind"].as_str().unwrap() {
        "Application" => {
            assert!(err.is_application(), "{name}: expected Application, got {err:?}");
            let errors: Vec<String> = serde_json::from_value(expected["errors"].clone()).unwrap();
            assert_eq!(err.errors(), errors.as_slice(), "{name}: errors");
        }
        kind => {
            let expected_kind = match kind {
                "Status" => TransportFailure::Status,
                "MalformedResponse" => TransportFailure::MalformedResponse,
                "Network" => TransportFailure::Network,
                other => panic!("{name}: unknown expected_error kind: {other}"),
            };
            match err {
                ApiError::Transport { kind, code, .. } => {
                    assert_eq!(*kind, expected_kind, "{name}: transport kind");
                    if let Some(expected_code) = expected.get("code") {
                        assert_eq!(
                            code.map(i64::from),
                            expected_code.as_i64(),
                            "{name}: code"
                        );
                    }
                }
                other => panic!("{name}: expected Transport, got {other:?}"),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

#[test]
fn decode_test_vectors() {
    let raw = include_str!("../../test-vectors/decode.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let response = HttpResponse {
            status: case["status"].as_u64().unwrap() as u16,
            body: case["body"].as_str().unwrap().as_bytes().to_vec(),
        };
        let result = ResponseEnvelope::decode(&response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.expect_err(name);
            assert_error(name, &err, expected_error);
        } else {
            let envelope = result.unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(envelope.data(), &case["expected_data"], "{name}: data");
        }
    }
}

// ---------------------------------------------------------------------------
// Mock dispatch
// ---------------------------------------------------------------------------

#[test]
fn mock_test_vectors() {
    let raw = include_str!("../../test-vectors/mocks.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let table = MockTable::from_json(vectors["mocks"].clone()).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let transport = CannedTransport {
            body: vectors["live"].as_str().unwrap().to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
        };
        let mut sdk = NovaPoshta::with_transport(Config::new("test_api_key"), transport.clone());
        sdk.set_mock_responses(table.clone());

        let properties: MethodProperties =
            serde_json::from_value(case["properties"].clone()).unwrap();
        let result = sdk.request(
            case["model"].as_str().unwrap(),
            case["method"].as_str().unwrap(),
            &properties,
        );

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.expect_err(name);
            assert_error(name, &err, expected_error);
        } else {
            let data = result.unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(data, case["expected_data"], "{name}: data");
        }

        let went_live = transport.calls.load(Ordering::SeqCst) > 0;
        assert_eq!(
            went_live,
            case["expected_live"].as_bool().unwrap(),
            "{name}: live transport used"
        );
    }
}
