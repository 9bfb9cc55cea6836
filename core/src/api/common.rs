use serde_json::Value;

use super::{Caller, Model};
use crate::error::Result;
use crate::types::{CargoDescriptionQuery, PackListQuery, TimeIntervalsQuery};

/// `Common` model: reference data.
#[derive(Clone, Copy)]
pub struct CommonApi<'a> {
    model: Model<'a>,
}

impl<'a> CommonApi<'a> {
    pub const MODEL: &'static str = "Common";

    pub fn new(caller: &'a dyn Caller) -> Self {
        Self {
            model: Model::new(caller, Self::MODEL),
        }
    }

    pub fn get_cargo_types(&self) -> Result<Value> {
        self.model.call_without_params("getCargoTypes")
    }

    pub fn get_cargo_description_list(&self, query: &CargoDescriptionQuery) -> Result<Value> {
        self.model.call("getCargoDescriptionList", query)
    }

    /// Texts for the numeric codes found in `errorCodes`/`warningCodes`.
    pub fn get_message_code_text(&self) -> Result<Value> {
        self.model.call_without_params("getMessageCodeText")
    }

    pub fn get_service_types(&self) -> Result<Value> {
        self.model.call_without_params("getServiceTypes")
    }

    pub fn get_pallets_list(&self) -> Result<Value> {
        self.model.call_without_params("getPalletsList")
    }

    pub fn get_types_of_payers(&self) -> Result<Value> {
        self.model.call_without_params("getTypesOfPayers")
    }

    pub fn get_types_of_payment(&self) -> Result<Value> {
        self.model.call_without_params("getTypesOfPayment")
    }

    pub fn get_payment_forms(&self) -> Result<Value> {
        self.model.call_without_params("getPaymentForms")
    }

    pub fn get_time_intervals(&self, query: &TimeIntervalsQuery) -> Result<Value> {
        self.model.call("getTimeIntervals", query)
    }

    pub fn get_pack_list(&self, query: &PackListQuery) -> Result<Value> {
        self.model.call("getPackList", query)
    }

    pub fn get_tires_wheels_list(&self) -> Result<Value> {
        self.model.call_without_params("getTiresWheelsList")
    }

    pub fn get_backward_delivery_cargo_types(&self) -> Result<Value> {
        self.model.call_without_params("getBackwardDeliveryCargoTypes")
    }

    pub fn get_ownership_forms_list(&self) -> Result<Value> {
        self.model.call_without_params("getOwnershipFormsList")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingCaller;
    use serde_json::json;

    #[test]
    fn parameterless_getters_use_method_names() {
        let caller = RecordingCaller::default();
        let api = CommonApi::new(&caller);
        api.get_cargo_types().unwrap();
        api.get_message_code_text().unwrap();
        api.get_service_types().unwrap();
        api.get_pallets_list().unwrap();
        api.get_types_of_payers().unwrap();
        api.get_types_of_payment().unwrap();
        api.get_payment_forms().unwrap();
        api.get_tires_wheels_list().unwrap();
        api.get_backward_delivery_cargo_types().unwrap();
        api.get_ownership_forms_list().unwrap();

        let methods: Vec<String> = caller
            .calls
            .borrow()
            .iter()
            .map(|(model, method, props)| {
                assert_eq!(model, "Common");
                assert_eq!(props, &json!({}));
                method.clone()
            })
            .collect();
        assert_eq!(
            methods,
            [
                "getCargoTypes",
                "getMessageCodeText",
                "getServiceTypes",
                "getPalletsList",
                "getTypesOfPayers",
                "getTypesOfPayment",
                "getPaymentForms",
                "getTiresWheelsList",
                "getBackwardDeliveryCargoTypes",
                "getOwnershipFormsList",
            ]
        );
    }

    #[test]
    fn cargo_description_filters() {
        let caller = RecordingCaller::default();
        let query = CargoDescriptionQuery {
            find_by_string: Some("абажур".into()),
            limit: Some(5),
            ..Default::default()
        };
        CommonApi::new(&caller)
            .get_cargo_description_list(&query)
            .unwrap();
        assert_eq!(caller.last().1, "getCargoDescriptionList");
        assert_eq!(caller.last().2, json!({"FindByString": "абажур", "Limit": 5}));
    }

    #[test]
    fn time_intervals_and_pack_list() {
        let caller = RecordingCaller::default();
        let api = CommonApi::new(&caller);

        api.get_time_intervals(&TimeIntervalsQuery {
            recipient_city_ref: Some("city-ref".into()),
            date_time: None,
        })
        .unwrap();
        assert_eq!(caller.last().2, json!({"RecipientCityRef": "city-ref"}));

        api.get_pack_list(&PackListQuery {
            length: Some("300".into()),
            width: None,
            height: Some("100".into()),
        })
        .unwrap();
        assert_eq!(caller.last().2, json!({"Length": "300", "Height": "100"}));
    }
}
