use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A file picked in the UI, read into memory for a multipart upload.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PathBuf")]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        let size = bytes.len();
        tracing::debug!(file = %file_name, content_type = %content_type, size, "read upload");
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

impl TryFrom<PathBuf> for UploadFile {
    type Error = std::io::Error;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        Self::from_path(&path)
    }
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Absolute URL for a stored upload. Relative paths are served by the API host.
pub fn resolve_url(raw: &str, base: &str) -> String {
    let url = raw.trim();
    if url.is_empty() {
        return String::new();
    }

    if ["http://", "https://", "blob:", "data:"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
    {
        return url.to_string();
    }

    let base = base.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{}{}", base, url)
    } else {
        format!("{}/{}", base, url)
    }
}

/// Where an upload lives: Firebase Storage or the Node.js upload folder.
pub fn source_label(url: &str) -> &'static str {
    if url.is_empty() {
        ""
    } else if url.starts_with("http")
        && url.to_lowercase().contains("firebasestorage.googleapis.com")
    {
        "Firebase"
    } else {
        "Node.js"
    }
}
