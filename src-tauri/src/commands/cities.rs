use tauri::AppHandle;

use super::{notify, repo, saved_action, Action};
use crate::crud::{self, DialogConfirm, Saved};
use crate::forms::{CityForm, FormMode};
use crate::listing::{self, ListQuery, Page};
use crate::models::{City, DeleteReceipt};
use crate::repository::Repository;

#[tauri::command]
pub async fn list_cities(app: AppHandle, query: ListQuery) -> Result<Page<City>, String> {
    let cities = repo::<City>(&app)
        .list()
        .await
        .map_err(|e| e.to_string())?;
    Ok(listing::list(cities, &query))
}

#[tauri::command]
pub async fn save_city(
    app: AppHandle,
    form: CityForm,
    id: Option<String>,
) -> Result<Saved<City>, String> {
    let mode = FormMode::from_id(id);
    let saved = crud::save(&repo::<City>(&app), &form, &mode)
        .await
        .map_err(|e| e.to_string())?;

    notify::<City>(&app, saved_action(mode.is_edit()), &saved.entity.id);
    Ok(saved)
}

#[tauri::command]
pub async fn delete_city(app: AppHandle, id: String) -> Result<DeleteReceipt, String> {
    let confirm = DialogConfirm::new(app.clone());
    let receipt = crud::delete(
        &repo::<City>(&app),
        &confirm,
        &id,
        "Are you sure you want to delete this city?",
    )
    .await
    .map_err(|e| e.to_string())?;

    notify::<City>(&app, Action::Deleted, &id);
    Ok(receipt)
}
