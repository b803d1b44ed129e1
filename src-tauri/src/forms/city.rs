use serde::Deserialize;
use serde_json::json;

use super::{any_blank, EntityForm, FormMode, ValidationError};
use crate::api::multipart::Payload;
use crate::models::City;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityForm {
    pub city_name: String,
    pub country_name: String,
    pub country_code: String,
}

impl EntityForm for CityForm {
    type Entity = City;

    const CREATED: &'static str = "City added successfully!";
    const UPDATED: &'static str = "City updated successfully!";

    fn validate(&self, _mode: &FormMode) -> Result<Payload, ValidationError> {
        if any_blank(&[&self.city_name, &self.country_name]) {
            return Err(ValidationError::Required("City name and country name are required"));
        }

        Ok(Payload::Json(json!({
            "cityName": self.city_name.trim(),
            "countryName": self.country_name.trim(),
            "countryCode": self.country_code.trim().to_uppercase(),
        })))
    }
}
