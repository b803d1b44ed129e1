use std::path::PathBuf;

use tauri::AppHandle;
use tauri_plugin_opener::OpenerExt;

use super::config;
use crate::assets::{self, UploadFile};

#[tauri::command]
pub fn resolve_asset_url(app: AppHandle, raw: String) -> String {
    assets::resolve_url(&raw, &config(&app).asset_base_url)
}

/// Metadata of a picked file, so the form can show it before saving.
#[tauri::command]
pub fn inspect_upload(path: PathBuf) -> Result<UploadFile, String> {
    UploadFile::from_path(&path).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn open_asset(app: AppHandle, url: String) -> Result<(), String> {
    let url = assets::resolve_url(&url, &config(&app).asset_base_url);
    if url.is_empty() {
        return Err("Nothing to open".to_string());
    }

    tracing::debug!(%url, "opening asset");
    app.opener()
        .open_url(url, None::<&str>)
        .map_err(|e| e.to_string())
}
