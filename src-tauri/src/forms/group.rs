use serde::Deserialize;
use serde_json::json;

use super::{any_blank, EntityForm, FormMode, ValidationError};
use crate::api::multipart::Payload;
use crate::models::{ContactPerson, GroupAccount, GroupBrand};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupAccountForm {
    pub supplier_name: String,
    pub group_name: String,
    pub email: String,
    pub phone_number: String,
    pub cr_number: String,
    pub contract_holder: String,
    pub our_representative: String,
    pub contact_person: ContactPerson,
}

impl EntityForm for GroupAccountForm {
    type Entity = GroupAccount;

    const CREATED: &'static str = "Group Account added successfully!";
    const UPDATED: &'static str = "Group Account updated successfully!";

    fn validate(&self, _mode: &FormMode) -> Result<Payload, ValidationError> {
        if any_blank(&[&self.supplier_name, &self.group_name, &self.email, &self.phone_number]) {
            return Err(ValidationError::Required("All required fields must be filled!"));
        }

        Ok(Payload::Json(json!({
            "supplierName": self.supplier_name,
            "groupName": self.group_name,
            "email": self.email,
            "phoneNumber": self.phone_number,
            "crNumber": self.cr_number,
            "contractHolder": self.contract_holder,
            "ourRepresentative": self.our_representative,
            "contactPerson": {
                "name": self.contact_person.name,
                "phone": self.contact_person.phone,
                "email": self.contact_person.email,
                "position": self.contact_person.position,
            },
        })))
    }
}

/// A brand listed under a group account.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupBrandForm {
    pub group_id: String,
    pub brand_name: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    pub address: String,
    pub discount: String,
    pub subscription: String,
    pub start_at: String,
    pub end_at: String,
    pub category: String,
    pub city: String,
    pub country: String,
    pub img: String,
    pub pdf_url: String,
}

impl EntityForm for GroupBrandForm {
    type Entity = GroupBrand;

    const CREATED: &'static str = "Brand added successfully!";
    const UPDATED: &'static str = "Brand updated successfully!";

    fn validate(&self, _mode: &FormMode) -> Result<Payload, ValidationError> {
        if any_blank(&[
            &self.group_id,
            &self.brand_name,
            &self.phone_number,
            &self.address,
            &self.discount,
            &self.category,
        ]) {
            return Err(ValidationError::Required("Please fill all required fields!"));
        }

        Ok(Payload::Json(json!({
            "brandName": self.brand_name,
            "PhoneNumber": self.phone_number,
            "address": self.address,
            "discount": self.discount,
            "subscription": self.subscription,
            "startAt": self.start_at,
            "endAt": self.end_at,
            "category": self.category,
            "city": self.city,
            "country": self.country,
            "img": self.img,
            "pdfUrl": self.pdf_url,
            "groupId": self.group_id,
        })))
    }
}
