use tauri::AppHandle;

use super::{notify, repo, saved_action, Action};
use crate::crud::{self, DialogConfirm, Saved};
use crate::forms::{FormMode, GroupAccountForm, GroupBrandForm};
use crate::listing::{self, ListQuery, Page};
use crate::models::{DeleteReceipt, GroupAccount, GroupBrand};
use crate::repository::Repository;

#[tauri::command]
pub async fn list_group_accounts(
    app: AppHandle,
    query: ListQuery,
) -> Result<Page<GroupAccount>, String> {
    let groups = repo::<GroupAccount>(&app)
        .list()
        .await
        .map_err(|e| e.to_string())?;
    Ok(listing::list(groups, &query))
}

#[tauri::command]
pub async fn get_group_account(app: AppHandle, id: String) -> Result<GroupAccount, String> {
    repo::<GroupAccount>(&app)
        .get(&id)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn save_group_account(
    app: AppHandle,
    form: GroupAccountForm,
    id: Option<String>,
) -> Result<Saved<GroupAccount>, String> {
    let mode = FormMode::from_id(id);
    let saved = crud::save(&repo::<GroupAccount>(&app), &form, &mode)
        .await
        .map_err(|e| e.to_string())?;

    notify::<GroupAccount>(&app, saved_action(mode.is_edit()), &saved.entity.id);
    Ok(saved)
}

#[tauri::command]
pub async fn delete_group_account(app: AppHandle, id: String) -> Result<DeleteReceipt, String> {
    let confirm = DialogConfirm::new(app.clone());
    let receipt = crud::delete(
        &repo::<GroupAccount>(&app),
        &confirm,
        &id,
        "Are you sure you want to delete this group account?",
    )
    .await
    .map_err(|e| e.to_string())?;

    notify::<GroupAccount>(&app, Action::Deleted, &id);
    Ok(receipt)
}

/// Brands of one group account (`/brands/:id`).
#[tauri::command]
pub async fn list_group_brands(
    app: AppHandle,
    group_id: String,
    query: ListQuery,
) -> Result<Page<GroupBrand>, String> {
    let brands = repo::<GroupBrand>(&app)
        .list()
        .await
        .map_err(|e| e.to_string())?;

    Ok(listing::list(listing::group_brands(brands, &group_id), &query))
}

#[tauri::command]
pub async fn save_group_brand(
    app: AppHandle,
    form: GroupBrandForm,
    id: Option<String>,
) -> Result<Saved<GroupBrand>, String> {
    let mode = FormMode::from_id(id);
    let saved = crud::save(&repo::<GroupBrand>(&app), &form, &mode)
        .await
        .map_err(|e| e.to_string())?;

    notify::<GroupBrand>(&app, saved_action(mode.is_edit()), &saved.entity.id);
    Ok(saved)
}

#[tauri::command]
pub async fn delete_group_brand(app: AppHandle, id: String) -> Result<DeleteReceipt, String> {
    let confirm = DialogConfirm::new(app.clone());
    let receipt = crud::delete(
        &repo::<GroupBrand>(&app),
        &confirm,
        &id,
        "Are you sure you want to delete this brand?",
    )
    .await
    .map_err(|e| e.to_string())?;

    notify::<GroupBrand>(&app, Action::Deleted, &id);
    Ok(receipt)
}
