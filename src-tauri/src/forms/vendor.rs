use serde::Deserialize;
use serde_json::{json, Value};

use super::{any_blank, is_blank, EntityForm, FormMode, ValidationError};
use crate::api::multipart::Payload;
use crate::models::Vendor;

/// Sign-in account of a vendor portal user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl EntityForm for VendorForm {
    type Entity = Vendor;

    const CREATED: &'static str = "Account added successfully!";
    const UPDATED: &'static str = "Account updated successfully!";

    fn validate(&self, mode: &FormMode) -> Result<Payload, ValidationError> {
        if any_blank(&[&self.name, &self.email, &self.role])
            || (!mode.is_edit() && is_blank(&self.password))
        {
            return Err(ValidationError::Required("All fields are required"));
        }

        let mut body = json!({
            "name": self.name,
            "email": self.email,
            "role": self.role,
        });
        if !is_blank(&self.password) {
            if let Value::Object(map) = &mut body {
                map.insert("password".to_string(), Value::String(self.password.clone()));
            }
        }
        Ok(Payload::Json(body))
    }
}
