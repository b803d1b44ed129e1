use tauri::AppHandle;

use super::{config, notify, repo, saved_action, vendor_name, Action};
use crate::crud::{self, DialogConfirm, Saved};
use crate::forms::{self, BrandForm, FormMode};
use crate::listing::{self, BrandRow, ListQuery, Page};
use crate::models::{Brand, DeleteReceipt};
use crate::repository::Repository;

#[tauri::command]
pub async fn list_brands(app: AppHandle, query: ListQuery) -> Result<Page<BrandRow>, String> {
    let brands = repo::<Brand>(&app)
        .list()
        .await
        .map_err(|e| e.to_string())?;

    let asset_base = config(&app).asset_base_url;
    Ok(listing::list(brands, &query).map(|brand| BrandRow::new(brand, &asset_base)))
}

#[tauri::command]
pub async fn get_brand(app: AppHandle, id: String) -> Result<Brand, String> {
    repo::<Brand>(&app).get(&id).await.map_err(|e| e.to_string())
}

/// Also backs the public mobile add-brand screen, so no session is required.
#[tauri::command]
pub async fn save_brand(
    app: AppHandle,
    form: BrandForm,
    id: Option<String>,
) -> Result<Saved<Brand>, String> {
    let mode = FormMode::from_id(id);
    let saved = crud::save(&repo::<Brand>(&app), &form, &mode)
        .await
        .map_err(|e| e.to_string())?;

    notify::<Brand>(&app, saved_action(mode.is_edit()), &saved.entity.id);
    Ok(saved)
}

#[tauri::command]
pub async fn delete_brand(app: AppHandle, id: String) -> Result<DeleteReceipt, String> {
    let confirm = DialogConfirm::new(app.clone());
    let receipt = crud::delete(
        &repo::<Brand>(&app),
        &confirm,
        &id,
        "Are you sure you want to delete this service?",
    )
    .await
    .map_err(|e| e.to_string())?;

    notify::<Brand>(&app, Action::Deleted, &id);
    Ok(receipt)
}

#[tauri::command]
pub fn generate_brand_pin() -> String {
    forms::generate_pin()
}

#[tauri::command]
pub async fn list_vendor_brands(
    app: AppHandle,
    query: ListQuery,
) -> Result<Page<BrandRow>, String> {
    let name = vendor_name(&app).map_err(|e| e.to_string())?;
    let brands = repo::<Brand>(&app)
        .list()
        .await
        .map_err(|e| e.to_string())?;

    let asset_base = config(&app).asset_base_url;
    Ok(listing::list(listing::vendor_brands(brands, &name), &query)
        .map(|brand| BrandRow::new(brand, &asset_base)))
}
