use serde_json::{json, Value};

use super::{Caller, Model};
use crate::error::Result;
use crate::types::{
    CityQuery, NewAddress, SettlementSearch, SettlementStreetSearch, StreetQuery, WarehouseQuery,
};

/// `Address` model: settlements, cities, warehouses, streets and saved addresses.
#[derive(Clone, Copy)]
pub struct AddressApi<'a> {
    model: Model<'a>,
}

impl<'a> AddressApi<'a> {
    pub const MODEL: &'static str = "Address";

    pub fn new(caller: &'a dyn Caller) -> Self {
        Self {
            model: Model::new(caller, Self::MODEL),
        }
    }

    /// Online settlement search; results include delivery availability.
    pub fn search_settlements(&self, search: &SettlementSearch) -> Result<Value> {
        self.model.call("searchSettlements", search)
    }

    pub fn search_settlement_streets(&self, search: &SettlementStreetSearch) -> Result<Value> {
        self.model.call("searchSettlementStreets", search)
    }

    pub fn get_areas(&self) -> Result<Value> {
        self.model.call_without_params("getAreas")
    }

    pub fn get_cities(&self, query: &CityQuery) -> Result<Value> {
        self.model.call("getCities", query)
    }

    pub fn get_warehouses(&self, query: &WarehouseQuery) -> Result<Value> {
        self.model.call("getWarehouses", query)
    }

    pub fn get_warehouse_types(&self) -> Result<Value> {
        self.model.call_without_params("getWarehouseTypes")
    }

    pub fn get_street(&self, query: &StreetQuery) -> Result<Value> {
        self.model.call("getStreet", query)
    }

    pub fn save(&self, address: &NewAddress) -> Result<Value> {
        self.model.call("save", address)
    }

    pub fn delete(&self, address_ref: &str) -> Result<Value> {
        self.model.call("delete", &json!({ "Ref": address_ref }))
    }
}
