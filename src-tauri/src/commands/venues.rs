use serde::Serialize;
use tauri::AppHandle;

use super::{config, notify, repo, saved_action, Action};
use crate::assets::resolve_url;
use crate::crud::{self, DialogConfirm, Saved};
use crate::forms::{FormMode, VenueForm};
use crate::listing::{self, ListQuery, Page};
use crate::models::{DeleteReceipt, Venue};
use crate::repository::Repository;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRow {
    #[serde(flatten)]
    pub venue: Venue,
    pub logo_url: String,
}

#[tauri::command]
pub async fn list_venues(app: AppHandle, query: ListQuery) -> Result<Page<VenueRow>, String> {
    let venues = repo::<Venue>(&app)
        .list()
        .await
        .map_err(|e| e.to_string())?;

    let asset_base = config(&app).asset_base_url;
    Ok(listing::list(venues, &query).map(|venue| VenueRow {
        logo_url: resolve_url(&venue.img, &asset_base),
        venue,
    }))
}

#[tauri::command]
pub async fn save_venue(
    app: AppHandle,
    form: VenueForm,
    id: Option<String>,
) -> Result<Saved<Venue>, String> {
    let mode = FormMode::from_id(id);
    let saved = crud::save(&repo::<Venue>(&app), &form, &mode)
        .await
        .map_err(|e| e.to_string())?;

    notify::<Venue>(&app, saved_action(mode.is_edit()), &saved.entity.id);
    Ok(saved)
}

#[tauri::command]
pub async fn delete_venue(app: AppHandle, id: String) -> Result<DeleteReceipt, String> {
    let confirm = DialogConfirm::new(app.clone());
    let receipt = crud::delete(
        &repo::<Venue>(&app),
        &confirm,
        &id,
        "Are you sure you want to delete this venue?",
    )
    .await
    .map_err(|e| e.to_string())?;

    notify::<Venue>(&app, Action::Deleted, &id);
    Ok(receipt)
}
