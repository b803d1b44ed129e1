use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend documents are loosely typed: numbers arrive as strings and flags as
/// `"Yes"`/`"No"`, depending on which screen wrote the record.
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => String::new(),
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => other.to_string(),
        })
    }

    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => b,
            Value::String(s) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "yes" | "true" | "1")
            }
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            _ => false,
        })
    }

    /// Arrays and objects may also arrive as JSON text (multipart saves). Any
    /// other unreadable shape decodes as the default.
    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = match Value::deserialize(deserializer)? {
            Value::String(text) => serde_json::from_str(&text).unwrap_or(Value::Null),
            other => other,
        };
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    pub fn number<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<serde_json::Number>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => Some(n),
            Value::String(s) => crate::forms::parse_number(&s),
            _ => None,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminAccount {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct City {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub city_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub country_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub country_code: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Discount {
    #[serde(deserialize_with = "lenient::number")]
    pub value: Option<serde_json::Number>,
    #[serde(deserialize_with = "lenient::string")]
    pub description_eng: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description_arabic: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Timings {
    #[serde(deserialize_with = "lenient::string")]
    pub monday: String,
    #[serde(deserialize_with = "lenient::string")]
    pub tuesday: String,
    #[serde(deserialize_with = "lenient::string")]
    pub wednesday: String,
    #[serde(deserialize_with = "lenient::string")]
    pub thursday: String,
    #[serde(deserialize_with = "lenient::string")]
    pub friday: String,
    #[serde(deserialize_with = "lenient::string")]
    pub saturday: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sunday: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiscountUsageMode {
    #[default]
    #[serde(rename = "one-per-day")]
    OnePerDay,
    #[serde(rename = "all-per-day")]
    AllPerDay,
}

impl DiscountUsageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountUsageMode::OnePerDay => "one-per-day",
            DiscountUsageMode::AllPerDay => "all-per-day",
        }
    }
}

/// A merchant listing ("service" on the admin screens).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Brand {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name_eng: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name_arabic: String,
    #[serde(deserialize_with = "lenient::string")]
    pub discount: String,
    #[serde(deserialize_with = "lenient::string")]
    pub discount_arabic: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub discounts: Vec<Discount>,
    #[serde(deserialize_with = "usage_mode")]
    pub discount_usage_mode: DiscountUsageMode,
    #[serde(deserialize_with = "lenient::string")]
    pub vendor_group_id: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_flat_offer: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub description_eng: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description_arabic: String,
    #[serde(rename = "PhoneNumber", deserialize_with = "lenient::string")]
    pub phone_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub longitude: String,
    #[serde(deserialize_with = "lenient::string")]
    pub latitude: String,
    #[serde(deserialize_with = "lenient::string")]
    pub address: String,
    #[serde(deserialize_with = "lenient::string")]
    pub menu_url: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub timings: Timings,
    #[serde(deserialize_with = "lenient::string")]
    pub start_at: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_at: String,
    #[serde(deserialize_with = "lenient::string")]
    pub pin: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_best_seller: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_venue: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub selected_venue: String,
    #[serde(deserialize_with = "lenient::string")]
    pub selected_category: String,
    #[serde(deserialize_with = "lenient::string")]
    pub selected_city: String,
    #[serde(deserialize_with = "lenient::string")]
    pub selected_country: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::string")]
    pub img: String,
    #[serde(deserialize_with = "lenient::string")]
    pub node_img: String,
    #[serde(deserialize_with = "lenient::string")]
    pub hero_image: String,
    #[serde(deserialize_with = "lenient::string")]
    pub pdf_url: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub multi_image_urls: Vec<String>,
}

fn usage_mode<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<DiscountUsageMode, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if s == "all-per-day" => DiscountUsageMode::AllPerDay,
        _ => DiscountUsageMode::OnePerDay,
    })
}

impl Brand {
    /// Text shown in the discount column of the services table.
    pub fn display_discount(&self) -> String {
        if !self.discount.trim().is_empty() {
            return self.discount.clone();
        }

        let Some(first) = self.discounts.first() else {
            return "-".to_string();
        };

        let value = first
            .value
            .as_ref()
            .map(|n| format!("{}%", n))
            .unwrap_or_default();

        match (value.is_empty(), first.description_eng.is_empty()) {
            (false, false) => format!("{} - {}", value, first.description_eng),
            (true, false) => first.description_eng.clone(),
            (false, true) => value,
            (true, true) => "-".to_string(),
        }
    }

    /// Logo path, preferring the current upload over the legacy node path.
    pub fn logo(&self) -> &str {
        if self.img.is_empty() {
            &self.node_img
        } else {
            &self.img
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Venue {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub venue_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub venue_name_ar: String,
    #[serde(deserialize_with = "lenient::string")]
    pub city: String,
    #[serde(deserialize_with = "lenient::string")]
    pub country: String,
    #[serde(deserialize_with = "lenient::string")]
    pub lat: String,
    #[serde(deserialize_with = "lenient::string")]
    pub long: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::string")]
    pub img: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPerson {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub position: String,
}

/// A supplier owning several brands.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupAccount {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub supplier_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub group_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub cr_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub contract_holder: String,
    #[serde(deserialize_with = "lenient::string")]
    pub our_representative: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub contact_person: ContactPerson,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupBrand {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub group_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub brand_name: String,
    #[serde(rename = "PhoneNumber", deserialize_with = "lenient::string")]
    pub phone_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub address: String,
    #[serde(deserialize_with = "lenient::string")]
    pub discount: String,
    #[serde(deserialize_with = "lenient::string")]
    pub subscription: String,
    #[serde(deserialize_with = "lenient::string")]
    pub start_at: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_at: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(deserialize_with = "lenient::string")]
    pub city: String,
    #[serde(deserialize_with = "lenient::string")]
    pub country: String,
    #[serde(deserialize_with = "lenient::string")]
    pub img: String,
    #[serde(deserialize_with = "lenient::string")]
    pub pdf_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Vendor {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub role: String,
}

/// A discount use recorded by the consumer app. Read-only here.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RedeemedDiscount {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(rename = "Username", deserialize_with = "lenient::string")]
    pub username: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub brand: String,
    #[serde(deserialize_with = "lenient::string")]
    pub address: String,
    #[serde(deserialize_with = "lenient::string")]
    pub percentage: String,
    pub created_at: Value,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct DeleteReceipt {
    #[serde(default)]
    pub message: Option<String>,
}
