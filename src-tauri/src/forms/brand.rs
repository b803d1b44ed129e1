use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{any_blank, is_blank, parse_number, EntityForm, FormMode, ValidationError};
use crate::api::multipart::{MultipartPayload, Payload};
use crate::assets::UploadFile;
use crate::models::{Brand, DiscountUsageMode, Timings};

pub const MAX_GALLERY_IMAGES: usize = 3;

/// One discount line as typed in the form; the value is still text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscountRow {
    pub value: String,
    pub description_eng: String,
    pub description_arabic: String,
}

impl DiscountRow {
    fn is_filled(&self) -> bool {
        !is_blank(&self.value) && !is_blank(&self.description_eng)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandForm {
    pub name_eng: String,
    pub name_arabic: String,
    pub discount: String,
    pub discount_arabic: String,
    pub discounts: Vec<DiscountRow>,
    pub discount_usage_mode: DiscountUsageMode,
    pub vendor_group_id: String,
    /// `"Yes"` / `"No"`
    pub is_flat_offer: String,
    pub description_eng: String,
    pub description_arabic: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    pub longitude: String,
    pub latitude: String,
    pub address: String,
    pub menu_url: String,
    pub timings: Timings,
    pub start_at: String,
    pub end_at: String,
    pub selected_category: String,
    pub pin: String,
    pub selected_city: String,
    pub selected_country: String,
    pub selected_venue: String,
    pub status: String,
    pub is_best_seller: String,
    pub is_venue: String,

    /// Logo already stored on the server (edit only).
    pub existing_img: String,
    pub node_img: Option<UploadFile>,
    pub node_pdf: Option<UploadFile>,
    pub multi_images: Vec<UploadFile>,
    pub hero_image: Option<UploadFile>,
}

impl BrandForm {
    fn discounts_for_api(&self) -> Result<Value, ValidationError> {
        let mut rows = Vec::new();
        for row in self.discounts.iter().filter(|row| row.is_filled()) {
            let value = parse_number(&row.value)
                .ok_or_else(|| ValidationError::InvalidDiscount(row.value.trim().to_string()))?;
            rows.push(json!({
                "value": value,
                "descriptionEng": row.description_eng,
                "descriptionArabic": row.description_arabic,
            }));
        }

        if rows.is_empty() {
            return Err(ValidationError::NoDiscount);
        }
        Ok(Value::Array(rows))
    }

    fn check_logo(&self, mode: &FormMode) -> Result<(), ValidationError> {
        match &self.node_img {
            Some(file) if !file.is_image() => {
                Err(ValidationError::NotAnImage(file.file_name.clone()))
            }
            Some(_) => Ok(()),
            None if mode.is_edit() && !is_blank(&self.existing_img) => Ok(()),
            None => Err(ValidationError::MissingLogo),
        }
    }

    fn gallery(&self) -> Vec<UploadFile> {
        if self.multi_images.len() > MAX_GALLERY_IMAGES {
            tracing::warn!(
                selected = self.multi_images.len(),
                kept = MAX_GALLERY_IMAGES,
                "Only 3 gallery images are allowed. Extra files were ignored."
            );
        }
        self.multi_images
            .iter()
            .take(MAX_GALLERY_IMAGES)
            .cloned()
            .collect()
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if is_blank(value) {
        default
    } else {
        value
    }
}

impl EntityForm for BrandForm {
    type Entity = Brand;

    const CREATED: &'static str = "Service added successfully!";
    const UPDATED: &'static str = "Service updated successfully!";

    fn validate(&self, mode: &FormMode) -> Result<Payload, ValidationError> {
        if any_blank(&[
            &self.name_eng,
            &self.name_arabic,
            &self.description_eng,
            &self.description_arabic,
            &self.longitude,
            &self.latitude,
            &self.address,
            &self.phone_number,
            &self.selected_category,
            &self.selected_city,
        ]) {
            return Err(ValidationError::Required("All fields are required!"));
        }

        let discounts = self.discounts_for_api()?;
        self.check_logo(mode)?;

        let timings = serde_json::to_value(&self.timings).unwrap_or(Value::Null);

        let form = MultipartPayload::new()
            .text("nameEng", self.name_eng.as_str())
            .text("nameArabic", self.name_arabic.as_str())
            .text("discount", self.discount.as_str())
            .text("discountArabic", self.discount_arabic.as_str())
            .json("discounts", discounts)
            .text("discountUsageMode", self.discount_usage_mode.as_str())
            .text("vendorGroupId", self.vendor_group_id.as_str())
            .text("isFlatOffer", or_default(&self.is_flat_offer, "No"))
            .text("descriptionEng", self.description_eng.as_str())
            .text("descriptionArabic", self.description_arabic.as_str())
            .text("PhoneNumber", self.phone_number.as_str())
            .text("longitude", self.longitude.as_str())
            .text("latitude", self.latitude.as_str())
            .text("address", self.address.as_str())
            .text("menuUrl", self.menu_url.as_str())
            .json("timings", timings)
            .text("startAt", self.start_at.as_str())
            .text("endAt", self.end_at.as_str())
            .text("selectedCategory", self.selected_category.as_str())
            .text("pin", self.pin.as_str())
            .text("selectedCity", self.selected_city.as_str())
            .text("selectedCountry", self.selected_country.as_str())
            .text("selectedVenue", self.selected_venue.as_str())
            .text("status", or_default(&self.status, "Active"))
            .text("isBestSeller", self.is_best_seller.as_str())
            .text("isVenue", self.is_venue.as_str())
            .file("img", self.node_img.clone())
            .file("pdf", self.node_pdf.clone())
            .files("gallery", self.gallery())
            .file("heroImage", self.hero_image.clone());

        Ok(Payload::Multipart(form))
    }
}

/// Six-digit redemption PIN.
pub fn generate_pin() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo() -> UploadFile {
        UploadFile::new("logo.png", "image/png", vec![137, 80, 78, 71])
    }

    fn complete() -> BrandForm {
        BrandForm {
            name_eng: "Test".to_string(),
            name_arabic: "اختبار".to_string(),
            description_eng: "Coffee and cake".to_string(),
            description_arabic: "قهوة".to_string(),
            longitude: "51.53".to_string(),
            latitude: "25.28".to_string(),
            address: "West Walk, Doha".to_string(),
            phone_number: "+97455501234".to_string(),
            selected_category: "Food and Drink".to_string(),
            selected_city: "Doha".to_string(),
            discounts: vec![DiscountRow {
                value: "15".to_string(),
                description_eng: "15% off".to_string(),
                description_arabic: String::new(),
            }],
            node_img: Some(logo()),
            ..Default::default()
        }
    }

    fn multipart(payload: Payload) -> MultipartPayload {
        match payload {
            Payload::Multipart(form) => form,
            Payload::Json(_) => panic!("brand payload should be multipart"),
        }
    }

    #[test]
    fn test_missing_fields_rejected() {
        let form = BrandForm {
            description_eng: String::new(),
            ..complete()
        };
        assert_eq!(
            form.validate(&FormMode::Create).unwrap_err(),
            ValidationError::Required("All fields are required!")
        );
    }

    #[test]
    fn test_logo_required_on_create() {
        let form = BrandForm {
            node_img: None,
            ..complete()
        };
        assert_eq!(form.validate(&FormMode::Create).unwrap_err(), ValidationError::MissingLogo);

        let form = BrandForm {
            node_img: Some(UploadFile::new("menu.pdf", "application/pdf", vec![1])),
            ..complete()
        };
        assert_eq!(
            form.validate(&FormMode::Create).unwrap_err(),
            ValidationError::NotAnImage("menu.pdf".to_string())
        );
    }

    #[test]
    fn test_edit_may_keep_existing_logo() {
        let form = BrandForm {
            node_img: None,
            existing_img: "uploads/logo.png".to_string(),
            ..complete()
        };
        let edit = FormMode::Edit { id: "b1".to_string() };
        let payload = multipart(form.validate(&edit).unwrap());
        assert_eq!(payload.file_count("img"), 0);
    }

    #[test]
    fn test_discount_rows() {
        let form = BrandForm {
            discounts: vec![
                DiscountRow {
                    value: " ".to_string(),
                    description_eng: "ignored".to_string(),
                    description_arabic: String::new(),
                },
                DiscountRow {
                    value: "20.0".to_string(),
                    description_eng: "20% off drinks".to_string(),
                    description_arabic: "خصم".to_string(),
                },
            ],
            ..complete()
        };
        let payload = multipart(form.validate(&FormMode::Create).unwrap());
        assert_eq!(
            payload.text_value("discounts"),
            Some(r#"[{"value":20,"descriptionEng":"20% off drinks","descriptionArabic":"خصم"}]"#)
        );

        let form = BrandForm {
            discounts: vec![DiscountRow::default()],
            ..complete()
        };
        assert_eq!(form.validate(&FormMode::Create).unwrap_err(), ValidationError::NoDiscount);

        let form = BrandForm {
            discounts: vec![DiscountRow {
                value: "half".to_string(),
                description_eng: "half price".to_string(),
                description_arabic: String::new(),
            }],
            ..complete()
        };
        assert_eq!(
            form.validate(&FormMode::Create).unwrap_err(),
            ValidationError::InvalidDiscount("half".to_string())
        );
    }

    #[test]
    fn test_multipart_fields() {
        let form = BrandForm {
            multi_images: (0..5)
                .map(|i| UploadFile::new(&format!("g{}.png", i), "image/png", vec![i]))
                .collect(),
            ..complete()
        };
        let payload = multipart(form.validate(&FormMode::Create).unwrap());

        assert_eq!(payload.file_count("img"), 1);
        assert_eq!(payload.file_count("gallery"), MAX_GALLERY_IMAGES);
        assert_eq!(payload.file_count("pdf"), 0);
        assert_eq!(payload.text_value("isFlatOffer"), Some("No"));
        assert_eq!(payload.text_value("status"), Some("Active"));
        assert_eq!(payload.text_value("discountUsageMode"), Some("one-per-day"));
        assert_eq!(payload.text_value("PhoneNumber"), Some("+97455501234"));
        assert_eq!(
            payload.text_value("timings"),
            Some(r#"{"monday":"","tuesday":"","wednesday":"","thursday":"","friday":"","saturday":"","sunday":""}"#)
        );
    }

    #[test]
    fn test_generate_pin() {
        for _ in 0..100 {
            let pin = generate_pin();
            assert_eq!(pin.len(), 6);
            let n: u32 = pin.parse().unwrap();
            assert!((100_000..=999_999).contains(&n));
        }
    }

    #[test]
    fn test_form_from_frontend_json() {
        let form: BrandForm = serde_json::from_value(json!({
            "nameEng": "Coffee Cloud",
            "PhoneNumber": "+974",
            "discountUsageMode": "all-per-day",
            "discounts": [{ "value": "10", "descriptionEng": "10% off" }],
            "timings": { "monday": "9-5" }
        }))
        .unwrap();
        assert_eq!(form.phone_number, "+974");
        assert_eq!(form.discount_usage_mode, DiscountUsageMode::AllPerDay);
        assert_eq!(form.timings.monday, "9-5");
        assert!(form.node_img.is_none());
    }
}
