use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::envelope::{normalize_id, unwrap_item};
use super::{ApiClient, ApiError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    fn body(&self) -> Value {
        json!({ "email": self.email.trim(), "password": self.password })
    }
}

/// `POST /admins/login`; the envelope-unwrapped admin document.
pub async fn login_admin(api: &ApiClient, credentials: &Credentials) -> Result<Value, ApiError> {
    let request = api
        .request(Method::POST, "admins/login")
        .json(&credentials.body());
    let body = api.send(request, "Failed to login").await?;
    Ok(strip_secrets(unwrap_item(body)))
}

/// `POST /H-Vender_Account/login`, answered with `{message, vendor}`.
pub async fn login_vendor(api: &ApiClient, credentials: &Credentials) -> Result<Value, ApiError> {
    let request = api
        .request(Method::POST, "H-Vender_Account/login")
        .json(&credentials.body());
    let mut body = api.send(request, "Login failed").await?;

    let vendor = match body.get_mut("vendor").map(Value::take) {
        Some(vendor) if vendor.is_object() => vendor,
        _ => unwrap_item(body),
    };
    Ok(strip_secrets(normalize_id(vendor)))
}

fn strip_secrets(mut profile: Value) -> Value {
    if let Some(map) = profile.as_object_mut() {
        map.remove("password");
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::TestServer;

    fn credentials() -> Credentials {
        Credentials {
            email: " vendor@coffeecloud.qa ".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_vendor_login_returns_vendor_profile() {
        let server = TestServer::start(
            200,
            Some(json!({
                "message": "Login successful",
                "vendor": { "_id": "v1", "name": "Coffee Cloud", "email": "vendor@coffeecloud.qa", "password": "secret" }
            })),
        )
        .await;

        let profile = login_vendor(&server.client, &credentials()).await.unwrap();
        assert_eq!(profile["id"], "v1");
        assert_eq!(profile["name"], "Coffee Cloud");
        assert!(profile.get("password").is_none());

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/api/hbs/H-Vender_Account/login");
        let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent["email"], "vendor@coffeecloud.qa");
    }

    #[tokio::test]
    async fn test_admin_login_failure_uses_server_message() {
        let server = TestServer::start(401, Some(json!({ "message": "Invalid email or password" }))).await;

        let err = login_admin(&server.client, &credentials()).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_admin_login_failure_without_body() {
        let server = TestServer::start(500, None).await;

        let err = login_admin(&server.client, &credentials()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to login");
    }
}
