//! REST client for the Hala B Saudi backend (`/api/hbs/*`).

pub mod auth;
pub mod envelope;
pub mod multipart;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde_json::Value;
use tauri::{AppHandle, Manager};
use thiserror::Error;

use crate::config::Config;
use multipart::Payload;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    /// Non-2xx response. The message is the server's `message` field when it
    /// sent one, otherwise the fallback text of the failed operation.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unreadable response: {0}")]
    Decode(String),
}

/// One REST collection and the texts used when a call against it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub path: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
    /// Noun in the create, update and delete texts.
    pub record: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Resource {
    pub fn fallback_message(&self, op: Operation) -> String {
        match op {
            Operation::List => format!("Failed to fetch {}", self.plural),
            Operation::Get => format!("Failed to fetch {}", self.singular),
            Operation::Create => format!("Failed to create {}", self.record),
            Operation::Update => format!("Failed to update {}", self.record),
            Operation::Delete => format!("Failed to delete {}", self.record),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut builder =
            Client::builder().user_agent(concat!("hbs-admin/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self::with_client(http, &config.api_base_url))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    pub fn with_payload(request: RequestBuilder, payload: Payload) -> RequestBuilder {
        match payload {
            Payload::Json(body) => request.json(&body),
            Payload::Multipart(form) => request.multipart(form.into_form()),
        }
    }

    /// Sends one request and returns the decoded JSON body. Empty success
    /// bodies decode to `Value::Null`. No retries.
    pub async fn send(&self, request: RequestBuilder, fallback: &str) -> Result<Value, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (method, path) = (request.method().clone(), request.url().path().to_string());

        let res = self.http.execute(request).await.map_err(|e| {
            tracing::error!(%method, %path, error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = res.status();
        tracing::debug!(%method, %path, status = status.as_u16(), "api response");

        let bytes = res
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(&bytes).unwrap_or_else(|| fallback.to_string());
            tracing::warn!(%method, %path, status = status.as_u16(), %message, "api call rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if bytes.is_empty() || status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

pub trait ApiExt {
    fn api(&self) -> ApiClient;
}

impl ApiExt for AppHandle {
    fn api(&self) -> ApiClient {
        self.state::<ApiClient>().inner().clone()
    }
}
