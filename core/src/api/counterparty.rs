use serde::Serialize;
use serde_json::{json, Value};

use super::{Caller, Model};
use crate::error::Result;
use crate::types::{
    CounterpartyChanges, CounterpartyProperty, CounterpartySearch, CounterpartyType,
    NewCounterparty,
};

/// `Counterparty` model: senders, recipients and their contacts.
#[derive(Clone, Copy)]
pub struct CounterpartyApi<'a> {
    model: Model<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SaveProperties<'a> {
    counterparty_type: CounterpartyType,
    counterparty_property: CounterpartyProperty,
    #[serde(flatten)]
    details: &'a NewCounterparty,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct UpdateProperties<'a> {
    #[serde(rename = "Ref")]
    counterparty_ref: &'a str,
    counterparty_type: CounterpartyType,
    counterparty_property: CounterpartyProperty,
    #[serde(flatten)]
    changes: &'a CounterpartyChanges,
}

impl<'a> CounterpartyApi<'a> {
    pub const MODEL: &'static str = "Counterparty";

    pub fn new(caller: &'a dyn Caller) -> Self {
        Self {
            model: Model::new(caller, Self::MODEL),
        }
    }

    /// Create a recipient.
    pub fn save(&self, counterparty: &NewCounterparty) -> Result<Value> {
        let properties = SaveProperties {
            counterparty_type: counterparty.counterparty_type(),
            counterparty_property: CounterpartyProperty::Recipient,
            details: counterparty,
        };
        self.model.call("save", &properties)
    }

    /// Update a recipient. Fields left as `None` keep their current value.
    pub fn update(&self, counterparty_ref: &str, changes: &CounterpartyChanges) -> Result<Value> {
        let properties = UpdateProperties {
            counterparty_ref,
            counterparty_type: changes.counterparty_type(),
            counterparty_property: CounterpartyProperty::Recipient,
            changes,
        };
        self.model.call("update", &properties)
    }

    pub fn delete(&self, counterparty_ref: &str) -> Result<Value> {
        self.model.call("delete", &json!({ "Ref": counterparty_ref }))
    }

    pub fn get_counterparty_addresses(
        &self,
        counterparty_ref: &str,
        property: CounterpartyProperty,
    ) -> Result<Value> {
        self.model.call(
            "getCounterpartyAddresses",
            &json!({ "Ref": counterparty_ref, "CounterpartyProperty": property }),
        )
    }

    pub fn get_counterparty_contact_persons(
        &self,
        counterparty_ref: &str,
        property: CounterpartyProperty,
    ) -> Result<Value> {
        self.model.call(
            "getCounterpartyContactPersons",
            &json!({ "Ref": counterparty_ref, "CounterpartyProperty": property }),
        )
    }

    pub fn get_counterparty_options(&self, counterparty_ref: &str) -> Result<Value> {
        self.model
            .call("getCounterpartyOptions", &json!({ "Ref": counterparty_ref }))
    }

    pub fn get_counterparties(&self, search: &CounterpartySearch) -> Result<Value> {
        self.model.call("getCounterparties", search)
    }
}
