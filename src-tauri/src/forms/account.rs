use serde::Deserialize;
use serde_json::json;

use super::{any_blank, is_blank, EntityForm, FormMode, ValidationError};
use crate::api::multipart::Payload;
use crate::models::AdminAccount;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: "User".to_string(),
        }
    }
}

impl EntityForm for AccountForm {
    type Entity = AdminAccount;

    const CREATED: &'static str = "Account added successfully!";
    const UPDATED: &'static str = "Account updated successfully!";

    fn validate(&self, mode: &FormMode) -> Result<Payload, ValidationError> {
        if any_blank(&[&self.name, &self.email, &self.role])
            || (!mode.is_edit() && is_blank(&self.password))
        {
            return Err(ValidationError::Required("All fields are required"));
        }

        // Passwords are only set on creation.
        let body = match mode {
            FormMode::Create => json!({
                "name": self.name,
                "email": self.email,
                "password": self.password,
                "role": self.role,
            }),
            FormMode::Edit { .. } => json!({
                "name": self.name,
                "email": self.email,
                "role": self.role,
            }),
        };
        Ok(Payload::Json(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AccountForm {
        AccountForm {
            name: "Ashraf".to_string(),
            email: "ashraf@westwalk.qa".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_requires_password() {
        let form = AccountForm {
            password: String::new(),
            ..form()
        };
        assert_eq!(
            form.validate(&FormMode::Create).unwrap_err().to_string(),
            "All fields are required"
        );
        assert!(form
            .validate(&FormMode::Edit { id: "a1".to_string() })
            .is_ok());
    }

    #[test]
    fn test_edit_never_sends_password() {
        let Payload::Json(body) = form().validate(&FormMode::Edit { id: "a1".to_string() }).unwrap() else {
            panic!("account payload should be json");
        };
        assert!(body.get("password").is_none());
        assert_eq!(body["role"], "User");
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let form = AccountForm {
            name: "   ".to_string(),
            ..form()
        };
        assert!(form.validate(&FormMode::Create).is_err());
    }
}
