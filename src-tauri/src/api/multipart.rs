use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::assets::UploadFile;

/// Request body of a create/update call.
#[derive(Debug, Clone)]
pub enum Payload {
    Json(Value),
    Multipart(MultipartPayload),
}

#[derive(Debug, Clone)]
pub enum PartValue {
    Text(String),
    File(UploadFile),
}

/// Ordered multipart fields. Nulls are never added, objects and arrays travel
/// as JSON text, files under their backend field name.
#[derive(Debug, Clone, Default)]
pub struct MultipartPayload {
    parts: Vec<(String, PartValue)>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, key: &str, value: impl Into<String>) -> Self {
        self.parts.push((key.to_string(), PartValue::Text(value.into())));
        self
    }

    pub fn json(self, key: &str, value: Value) -> Self {
        match value {
            Value::Null => self,
            Value::String(s) => self.text(key, s),
            Value::Bool(_) | Value::Number(_) => self.text(key, value.to_string()),
            Value::Array(_) | Value::Object(_) => self.text(key, value.to_string()),
        }
    }

    pub fn file(mut self, key: &str, file: Option<UploadFile>) -> Self {
        if let Some(file) = file {
            self.parts.push((key.to_string(), PartValue::File(file)));
        }
        self
    }

    pub fn files(mut self, key: &str, files: impl IntoIterator<Item = UploadFile>) -> Self {
        for file in files {
            self.parts.push((key.to_string(), PartValue::File(file)));
        }
        self
    }

    pub fn parts(&self) -> &[(String, PartValue)] {
        &self.parts
    }

    pub fn text_value(&self, key: &str) -> Option<&str> {
        self.parts.iter().find_map(|(k, v)| match v {
            PartValue::Text(text) if k == key => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn file_count(&self, key: &str) -> usize {
        self.parts
            .iter()
            .filter(|(k, v)| k == key && matches!(v, PartValue::File(_)))
            .count()
    }

    pub fn into_form(self) -> Form {
        self.parts
            .into_iter()
            .fold(Form::new(), |form, (key, value)| match value {
                PartValue::Text(text) => form.text(key, text),
                PartValue::File(file) => form.part(key, file_part(file)),
            })
    }
}

fn file_part(file: UploadFile) -> Part {
    let UploadFile {
        file_name,
        content_type,
        bytes,
    } = file;

    let fallback = bytes.clone();
    Part::bytes(bytes)
        .file_name(file_name.clone())
        .mime_str(&content_type)
        .unwrap_or_else(|e| {
            tracing::warn!(
                file = %file_name,
                content_type = %content_type,
                error = %e,
                "sending upload without content type"
            );
            Part::bytes(fallback).file_name(file_name)
        })
}
