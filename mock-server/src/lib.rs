//! In-memory stand-in for the Nova Poshta JSON endpoint.
//!
//! Speaks the envelope protocol on `POST /v2.0/json/` for a handful of
//! operations. `POST /broken/` and `POST /unavailable/` simulate a non-JSON
//! body and an HTTP 503 so clients can exercise their transport errors.
//! `POST /garbled/` and `POST /garbled-error/` send bytes that are not UTF-8
//! with HTTP 200 and 500.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const API_PATH: &str = "/v2.0/json/";

/// Inbound request envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default)]
    pub api_key: String,
    pub model_name: String,
    pub called_method: String,
    #[serde(default)]
    pub method_properties: Map<String, Value>,
}

/// Saved counterparties, in creation order.
pub type Db = Arc<RwLock<Vec<Value>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route(API_PATH, post(dispatch))
        .route("/broken/", post(broken))
        .route("/unavailable/", post(unavailable))
        .route("/garbled/", post(garbled))
        .route("/garbled-error/", post(garbled_error))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::OK, "<html><body>Bad gateway</body></html>")
}

async fn unavailable() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
}

/// Not valid UTF-8.
pub const GARBLED_BODY: &[u8] = &[0xff, 0xfe, 0x00, 0x80];

async fn garbled() -> (StatusCode, &'static [u8]) {
    (StatusCode::OK, GARBLED_BODY)
}

async fn garbled_error() -> (StatusCode, &'static [u8]) {
    (StatusCode::INTERNAL_SERVER_ERROR, GARBLED_BODY)
}

async fn dispatch(State(db): State<Db>, Json(request): Json<Envelope>) -> Json<Value> {
    tracing::info!(
        model = %request.model_name,
        method = %request.called_method,
        "request"
    );

    if request.api_key.is_empty() {
        return Json(failure(vec!["API key is not specified".to_string()]));
    }

    let props = &request.method_properties;
    let body = match (request.model_name.as_str(), request.called_method.as_str()) {
        ("Address", "getAreas") => success(areas()),
        ("Address", "getCities") => success(cities(text(props, "FindByString"))),
        ("TrackingDocument", "getStatusDocuments") => success(statuses(props)),
        ("Counterparty", "save") => save_counterparty(&db, props).await,
        ("Counterparty", "getCounterparties") => {
            find_counterparties(&db, text(props, "FindByString")).await
        }
        ("Counterparty", "delete") => delete_counterparty(&db, text(props, "Ref")).await,
        _ => failure(Vec::new()),
    };
    Json(body)
}

fn success(data: Vec<Value>) -> Value {
    json!({
        "success": true,
        "data": data,
        "errors": [],
        "warnings": [],
        "info": {"totalCount": data.len()}
    })
}

fn failure(errors: Vec<String>) -> Value {
    json!({
        "success": false,
        "data": [],
        "errors": errors,
        "warnings": [],
        "info": []
    })
}

fn text<'a>(props: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    props.get(key).and_then(Value::as_str)
}

pub fn areas() -> Vec<Value> {
    vec![
        json!({"Ref": "dcaadb64-4b33-11e4-ab6d-005056801329", "Description": "Київська", "AreasCenter": "8d5a980d-391c-11dd-90d9-001a92567626"}),
        json!({"Ref": "71508131-9b87-11de-822f-000c2965ae0e", "Description": "Львівська", "AreasCenter": "db5c88f5-391c-11dd-90d9-001a92567626"}),
        json!({"Ref": "71508137-9b87-11de-822f-000c2965ae0e", "Description": "Одеська", "AreasCenter": "db5c88d0-391c-11dd-90d9-001a92567626"}),
    ]
}

const CITIES: [(&str, &str, &str); 3] = [
    ("8d5a980d-391c-11dd-90d9-001a92567626", "Київ", "Kyiv"),
    ("db5c88f5-391c-11dd-90d9-001a92567626", "Львів", "Lviv"),
    ("db5c88d0-391c-11dd-90d9-001a92567626", "Одеса", "Odesa"),
];

/// Cities whose Ukrainian or Latin name contains `filter`, ignoring case.
pub fn cities(filter: Option<&str>) -> Vec<Value> {
    let needle = filter.map(str::to_lowercase);
    CITIES
        .iter()
        .filter(|(_, uk, en)| match &needle {
            None => true,
            Some(n) => uk.to_lowercase().contains(n) || en.to_lowercase().contains(n),
        })
        .map(|(r, uk, en)| json!({"Ref": r, "Description": uk, "DescriptionTranslit": en}))
        .collect()
}

/// Waybill numbers are 14 digits; anything else is reported as not found.
fn statuses(props: &Map<String, Value>) -> Vec<Value> {
    let documents = props
        .get("Documents")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    documents
        .iter()
        .map(|doc| {
            let number = doc.get("DocumentNumber").and_then(Value::as_str).unwrap_or("");
            if number.len() == 14 && number.bytes().all(|b| b.is_ascii_digit()) {
                json!({"Number": number, "StatusCode": "9", "Status": "Відправлення отримано"})
            } else {
                json!({"Number": number, "StatusCode": "3", "Status": "Номер не знайдено"})
            }
        })
        .collect()
}

async fn save_counterparty(db: &Db, props: &Map<String, Value>) -> Value {
    let description = match text(props, "CounterpartyType") {
        Some("PrivatePerson") => match (text(props, "LastName"), text(props, "FirstName")) {
            (Some(last), Some(first)) => format!("{last} {first}"),
            _ => return failure(vec!["FirstName and LastName are required".to_string()]),
        },
        Some("Organization") => match text(props, "CompanyName") {
            Some(name) => name.to_string(),
            None => return failure(vec!["CompanyName is required".to_string()]),
        },
        _ => return failure(vec!["CounterpartyType is not specified".to_string()]),
    };

    let counterparty = json!({
        "Ref": Uuid::new_v4(),
        "Description": description,
        "CounterpartyType": props.get("CounterpartyType"),
        "CounterpartyProperty": props.get("CounterpartyProperty"),
    });
    db.write().await.push(counterparty.clone());
    success(vec![counterparty])
}

async fn find_counterparties(db: &Db, filter: Option<&str>) -> Value {
    let needle = filter.unwrap_or("").to_lowercase();
    let found = db
        .read()
        .await
        .iter()
        .filter(|cp| {
            cp["Description"]
                .as_str()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    success(found)
}

async fn delete_counterparty(db: &Db, reference: Option<&str>) -> Value {
    let Some(reference) = reference else {
        return failure(vec!["Ref is not specified".to_string()]);
    };
    let mut counterparties = db.write().await;
    let before = counterparties.len();
    counterparties.retain(|cp| cp["Ref"].as_str() != Some(reference));
    if counterparties.len() == before {
        return failure(vec!["Counterparty not found".to_string()]);
    }
    success(vec![json!({"Ref": reference})])
}
