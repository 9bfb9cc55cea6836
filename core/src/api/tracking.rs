use serde_json::{json, Value};

use super::{Caller, Model};
use crate::error::Result;
use crate::types::TrackedDocument;

/// `TrackingDocument` model: shipment status lookups.
#[derive(Clone, Copy)]
pub struct TrackingApi<'a> {
    model: Model<'a>,
}

impl<'a> TrackingApi<'a> {
    pub const MODEL: &'static str = "TrackingDocument";

    pub fn new(caller: &'a dyn Caller) -> Self {
        Self {
            model: Model::new(caller, Self::MODEL),
        }
    }

    /// Status of a single waybill.
    pub fn get_status_documents(&self, document: &TrackedDocument) -> Result<Value> {
        self.get_status_documents_batch(std::slice::from_ref(document))
    }

    /// Status of several waybills in one call.
    pub fn get_status_documents_batch(&self, documents: &[TrackedDocument]) -> Result<Value> {
        self.model
            .call("getStatusDocuments", &json!({ "Documents": documents }))
    }

    pub fn get_status_history(&self, document_number: &str) -> Result<Value> {
        self.model.call(
            "getStatusHistory",
            &json!({ "Documents": [{ "DocumentNumber": document_number }] }),
        )
    }
}
