//! Typed inputs for the domain wrappers.
//!
//! # Design
//! Each struct serializes straight into `methodProperties`. Field names map
//! to the API's PascalCase keys and `None` fields are skipped, so optional
//! arguments are omitted from the wire rather than sent as `null`.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// `Address.searchSettlements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettlementSearch {
    pub city_name: String,
    pub limit: u32,
    pub page: u32,
}

impl SettlementSearch {
    /// First page of 20 results.
    pub fn new(city_name: impl Into<String>) -> Self {
        Self {
            city_name: city_name.into(),
            limit: 20,
            page: 1,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// `Address.searchSettlementStreets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettlementStreetSearch {
    pub settlement_ref: String,
    pub street_name: String,
    pub limit: u32,
    pub page: u32,
}

impl SettlementStreetSearch {
    pub fn new(settlement_ref: impl Into<String>, street_name: impl Into<String>) -> Self {
        Self {
            settlement_ref: settlement_ref.into(),
            street_name: street_name.into(),
            limit: 20,
            page: 1,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// `Address.getCities`. All filters are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CityQuery {
    #[serde(rename = "Ref", skip_serializing_if = "Option::is_none")]
    pub city_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find_by_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// `Address.getWarehouses`. All filters are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WarehouseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find_by_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_of_warehouse_ref: Option<String>,
}

/// `Address.getStreet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreetQuery {
    pub city_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find_by_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl StreetQuery {
    pub fn new(city_ref: impl Into<String>) -> Self {
        Self {
            city_ref: city_ref.into(),
            find_by_string: None,
            page: None,
            limit: None,
        }
    }
}

/// `Address.save`: a street address attached to a counterparty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewAddress {
    pub counterparty_ref: String,
    pub street_ref: String,
    pub building_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NewAddress {
    pub fn new(
        counterparty_ref: impl Into<String>,
        street_ref: impl Into<String>,
        building_number: impl Into<String>,
    ) -> Self {
        Self {
            counterparty_ref: counterparty_ref.into(),
            street_ref: street_ref.into(),
            building_number: building_number.into(),
            flat: None,
            note: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Counterparty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CounterpartyType {
    PrivatePerson,
    Organization,
}

/// Role of a counterparty in a shipment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum CounterpartyProperty {
    #[default]
    Recipient,
    Sender,
    ThirdPerson,
}

/// `Counterparty.save` payload; the variant decides `CounterpartyType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NewCounterparty {
    #[serde(rename_all = "PascalCase")]
    PrivatePerson {
        first_name: String,
        last_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        middle_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        phone: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
    #[serde(rename_all = "PascalCase")]
    Organization {
        company_name: String,
        #[serde(rename = "EDRPOU")]
        edrpou: String,
    },
}

impl NewCounterparty {
    pub fn counterparty_type(&self) -> CounterpartyType {
        match self {
            NewCounterparty::PrivatePerson { .. } => CounterpartyType::PrivatePerson,
            NewCounterparty::Organization { .. } => CounterpartyType::Organization,
        }
    }
}

/// `Counterparty.update` payload. Only fields that are `Some` are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CounterpartyChanges {
    #[serde(rename_all = "PascalCase")]
    PrivatePerson {
        #[serde(skip_serializing_if = "Option::is_none")]
        first_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        middle_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        phone: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
    #[serde(rename_all = "PascalCase")]
    Organization {
        #[serde(skip_serializing_if = "Option::is_none")]
        company_name: Option<String>,
        #[serde(rename = "EDRPOU", skip_serializing_if = "Option::is_none")]
        edrpou: Option<String>,
    },
}

impl CounterpartyChanges {
    pub fn counterparty_type(&self) -> CounterpartyType {
        match self {
            CounterpartyChanges::PrivatePerson { .. } => CounterpartyType::PrivatePerson,
            CounterpartyChanges::Organization { .. } => CounterpartyType::Organization,
        }
    }
}

/// `Counterparty.getCounterparties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CounterpartySearch {
    pub find_by_string: String,
    pub counterparty_property: CounterpartyProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl CounterpartySearch {
    /// Search among recipients.
    pub fn new(find_by_string: impl Into<String>) -> Self {
        Self {
            find_by_string: find_by_string.into(),
            counterparty_property: CounterpartyProperty::default(),
            page: None,
            limit: None,
        }
    }
}

// ---------------------------------------------------------------------------
// InternetDocument
// ---------------------------------------------------------------------------

/// Parcel size used for volumetric pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatDimensions {
    pub width: u32,
    pub height: u32,
    pub length: u32,
}

/// Input of `InternetDocument.getDocumentPrice`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuery {
    pub city_sender: String,
    pub city_recipient: String,
    /// Weight in kilograms, as the API expects it (`"0.5"`).
    pub weight: String,
    pub cost: u32,
    pub service_type: String,
    pub cargo_type: Option<String>,
    pub seats_amount: Option<u32>,
    pub pack_ref: Option<String>,
    pub dimensions: Option<SeatDimensions>,
}

impl PriceQuery {
    pub fn new(
        city_sender: impl Into<String>,
        city_recipient: impl Into<String>,
        weight: impl Into<String>,
        cost: u32,
        service_type: impl Into<String>,
    ) -> Self {
        Self {
            city_sender: city_sender.into(),
            city_recipient: city_recipient.into(),
            weight: weight.into(),
            cost,
            service_type: service_type.into(),
            cargo_type: None,
            seats_amount: None,
            pack_ref: None,
            dimensions: None,
        }
    }
}

/// `InternetDocument.getDocumentDeliveryDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeliveryDateQuery {
    pub city_sender: String,
    pub city_recipient: String,
    pub service_type: String,
    /// `dd.mm.yyyy`; the API assumes today when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

impl DeliveryDateQuery {
    pub fn new(
        city_sender: impl Into<String>,
        city_recipient: impl Into<String>,
        service_type: impl Into<String>,
    ) -> Self {
        Self {
            city_sender: city_sender.into(),
            city_recipient: city_recipient.into(),
            service_type: service_type.into(),
            date_time: None,
        }
    }
}

/// `InternetDocument.getDocumentList`. All filters are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// ---------------------------------------------------------------------------
// TrackingDocument
// ---------------------------------------------------------------------------

/// A waybill to track. The sender's or recipient's phone unlocks full details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackedDocument {
    pub document_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl TrackedDocument {
    pub fn new(document_number: impl Into<String>) -> Self {
        Self {
            document_number: document_number.into(),
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Common
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CargoDescriptionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find_by_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeIntervalsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_city_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

/// Packaging filter; sizes are in millimetres, as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn city_query_omits_absent_filters() {
        let query = CityQuery {
            find_by_string: Some("Kyiv".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({"FindByString": "Kyiv"}));
    }

    #[test]
    fn city_ref_is_sent_as_ref() {
        let query = CityQuery {
            city_ref: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({"Ref": "abc"}));
    }

    #[test]
    fn settlement_search_defaults() {
        let search = SettlementSearch::new("Київ");
        assert_eq!(
            serde_json::to_value(&search).unwrap(),
            json!({"CityName": "Київ", "Limit": 20, "Page": 1})
        );
    }

    #[test]
    fn organization_uses_edrpou_key() {
        let org = NewCounterparty::Organization {
            company_name: "ТОВ Ромашка".into(),
            edrpou: "12345678".into(),
        };
        assert_eq!(org.counterparty_type(), CounterpartyType::Organization);
        assert_eq!(
            serde_json::to_value(&org).unwrap(),
            json!({"CompanyName": "ТОВ Ромашка", "EDRPOU": "12345678"})
        );
    }

    #[test]
    fn private_person_skips_missing_contacts() {
        let person = NewCounterparty::PrivatePerson {
            first_name: "Іван".into(),
            last_name: "Петренко".into(),
            middle_name: None,
            phone: Some("380501234567".into()),
            email: None,
        };
        assert_eq!(
            serde_json::to_value(&person).unwrap(),
            json!({"FirstName": "Іван", "LastName": "Петренко", "Phone": "380501234567"})
        );
    }

    #[test]
    fn counterparty_property_serializes_as_name() {
        assert_eq!(
            serde_json::to_value(CounterpartyProperty::ThirdPerson).unwrap(),
            json!("ThirdPerson")
        );
        assert_eq!(CounterpartyProperty::default(), CounterpartyProperty::Recipient);
    }

    #[test]
    fn tracked_document_with_phone() {
        let doc = TrackedDocument::new("20450000000000").with_phone("380501234567");
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({"DocumentNumber": "20450000000000", "Phone": "380501234567"})
        );
    }
}
