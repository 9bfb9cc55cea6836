use serde::Serialize;
use serde_json::{json, Value};

use super::{Caller, Model};
use crate::envelope::MethodProperties;
use crate::error::Result;
use crate::types::{DeliveryDateQuery, DocumentListQuery, PriceQuery};

/// `InternetDocument` model: waybills, pricing and delivery estimates.
#[derive(Clone, Copy)]
pub struct DocumentApi<'a> {
    model: Model<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PriceProperties<'a> {
    city_sender: &'a str,
    city_recipient: &'a str,
    weight: &'a str,
    cost: u32,
    service_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cargo_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seats_amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pack_calculate: Option<PackCalculate<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options_seat: Option<[OptionsSeat<'a>; 1]>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PackCalculate<'a> {
    pack_ref: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OptionsSeat<'a> {
    weight: &'a str,
    volumetric_width: u32,
    volumetric_height: u32,
    volumetric_length: u32,
}

impl<'a> PriceProperties<'a> {
    fn from_query(query: &'a PriceQuery) -> Self {
        Self {
            city_sender: &query.city_sender,
            city_recipient: &query.city_recipient,
            weight: &query.weight,
            cost: query.cost,
            service_type: &query.service_type,
            cargo_type: query.cargo_type.as_deref(),
            seats_amount: query.seats_amount,
            pack_calculate: query
                .pack_ref
                .as_deref()
                .map(|pack_ref| PackCalculate { pack_ref }),
            options_seat: query.dimensions.map(|d| {
                [OptionsSeat {
                    weight: &query.weight,
                    volumetric_width: d.width,
                    volumetric_height: d.height,
                    volumetric_length: d.length,
                }]
            }),
        }
    }
}

impl<'a> DocumentApi<'a> {
    pub const MODEL: &'static str = "InternetDocument";

    pub fn new(caller: &'a dyn Caller) -> Self {
        Self {
            model: Model::new(caller, Self::MODEL),
        }
    }

    /// Create a waybill. The property set is large and service-dependent, so
    /// it is passed through as is.
    pub fn save(&self, properties: &MethodProperties) -> Result<Value> {
        self.model.call("save", properties)
    }

    pub fn delete(&self, document_ref: &str) -> Result<Value> {
        self.model.call("delete", &json!({ "DocumentRefs": document_ref }))
    }

    pub fn get_document_price(&self, query: &PriceQuery) -> Result<Value> {
        self.model
            .call("getDocumentPrice", &PriceProperties::from_query(query))
    }

    pub fn get_document_delivery_date(&self, query: &DeliveryDateQuery) -> Result<Value> {
        self.model.call("getDocumentDeliveryDate", query)
    }

    pub fn get_document_list(&self, query: &DocumentListQuery) -> Result<Value> {
        self.model.call("getDocumentList", query)
    }

    pub fn get_document(&self, document_ref: &str) -> Result<Value> {
        self.model.call("getDocument", &json!({ "Ref": document_ref }))
    }

    /// Request a printable report; `report_type` is e.g. `"pdf"` or `"xls"`.
    pub fn generate_report(&self, document_ref: &str, report_type: Option<&str>) -> Result<Value> {
        let mut properties = MethodProperties::new();
        properties.insert("DocumentRefs".into(), json!(document_ref));
        if let Some(report_type) = report_type {
            properties.insert("Type".into(), json!(report_type));
        }
        self.model.call("generateReport", &properties)
    }
}
