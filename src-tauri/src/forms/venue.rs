use serde::Deserialize;

use super::{is_blank, EntityForm, FormMode, ValidationError};
use crate::api::multipart::{MultipartPayload, Payload};
use crate::assets::UploadFile;
use crate::models::Venue;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VenueForm {
    pub venue_name: String,
    pub venue_name_ar: String,
    pub city: String,
    pub country: String,
    pub lat: String,
    pub long: String,
    pub status: String,
    pub logo: Option<UploadFile>,
}

impl EntityForm for VenueForm {
    type Entity = Venue;

    const CREATED: &'static str = "Venue added successfully!";
    const UPDATED: &'static str = "Venue updated successfully!";

    fn validate(&self, _mode: &FormMode) -> Result<Payload, ValidationError> {
        if is_blank(&self.venue_name) {
            return Err(ValidationError::Required("Please enter a name."));
        }
        if let Some(logo) = self.logo.as_ref().filter(|logo| !logo.is_image()) {
            return Err(ValidationError::NotAnImage(logo.file_name.clone()));
        }

        let status = if is_blank(&self.status) {
            "Active"
        } else {
            self.status.as_str()
        };

        let form = MultipartPayload::new()
            .text("venueName", self.venue_name.trim())
            .text("venueNameAr", self.venue_name_ar.trim())
            .text("city", self.city.as_str())
            .text("country", self.country.as_str())
            .text("lat", self.lat.as_str())
            .text("long", self.long.as_str())
            .text("status", status)
            .file("img", self.logo.clone());

        Ok(Payload::Multipart(form))
    }
}
