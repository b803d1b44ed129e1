//! Create/edit forms. Each form validates itself into the request body of a
//! single create or update call.

mod account;
mod brand;
mod city;
mod group;
mod vendor;
mod venue;

pub use account::AccountForm;
pub use brand::{generate_pin, BrandForm, DiscountRow};
pub use city::CityForm;
pub use group::{GroupAccountForm, GroupBrandForm};
pub use vendor::VendorForm;
pub use venue::VenueForm;

use serde::Deserialize;
use serde_json::Number;
use thiserror::Error;

use crate::api::multipart::Payload;
use crate::repository::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn from_id(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.trim().is_empty() => FormMode::Edit { id },
            _ => FormMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Required inputs left blank; carries the screen's own wording.
    #[error("{0}")]
    Required(&'static str),
    #[error("Please add at least one discount (value + description).")]
    NoDiscount,
    #[error("Discount value \"{0}\" is not a number.")]
    InvalidDiscount(String),
    #[error("Please upload a logo image.")]
    MissingLogo,
    #[error("{0} is not an image.")]
    NotAnImage(String),
}

pub trait EntityForm {
    type Entity: Entity;

    const CREATED: &'static str;
    const UPDATED: &'static str;

    fn validate(&self, mode: &FormMode) -> Result<Payload, ValidationError>;

    fn success_message(mode: &FormMode) -> &'static str {
        if mode.is_edit() {
            Self::UPDATED
        } else {
            Self::CREATED
        }
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn any_blank(values: &[&str]) -> bool {
    values.iter().any(|v| is_blank(v))
}

/// Numeric text as a JSON number. Whole values come out as integers, so
/// `"15"` and `"15.0"` both serialize as `15`.
pub fn parse_number(raw: &str) -> Option<Number> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(n) = raw.parse::<i64>() {
        return Some(Number::from(n));
    }

    let n = raw.parse::<f64>().ok().filter(|n| n.is_finite())?;
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Some(Number::from(n as i64))
    } else {
        Number::from_f64(n)
    }
}
