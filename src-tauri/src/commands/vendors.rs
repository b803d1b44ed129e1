use tauri::AppHandle;

use super::{notify, repo, saved_action, Action};
use crate::crud::{self, DialogConfirm, Saved};
use crate::forms::{FormMode, VendorForm};
use crate::listing::{self, ListQuery, Page};
use crate::models::{DeleteReceipt, Vendor};
use crate::repository::Repository;

#[tauri::command]
pub async fn list_vendors(app: AppHandle, query: ListQuery) -> Result<Page<Vendor>, String> {
    let vendors = repo::<Vendor>(&app)
        .list()
        .await
        .map_err(|e| e.to_string())?;
    Ok(listing::list(vendors, &query))
}

#[tauri::command]
pub async fn save_vendor(
    app: AppHandle,
    form: VendorForm,
    id: Option<String>,
) -> Result<Saved<Vendor>, String> {
    let mode = FormMode::from_id(id);
    let saved = crud::save(&repo::<Vendor>(&app), &form, &mode)
        .await
        .map_err(|e| e.to_string())?;

    notify::<Vendor>(&app, saved_action(mode.is_edit()), &saved.entity.id);
    Ok(saved)
}

#[tauri::command]
pub async fn delete_vendor(app: AppHandle, id: String) -> Result<DeleteReceipt, String> {
    let confirm = DialogConfirm::new(app.clone());
    let receipt = crud::delete(
        &repo::<Vendor>(&app),
        &confirm,
        &id,
        "Are you sure you want to delete this account?",
    )
    .await
    .map_err(|e| e.to_string())?;

    notify::<Vendor>(&app, Action::Deleted, &id);
    Ok(receipt)
}
