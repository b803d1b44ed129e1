pub mod accounts;
pub mod assets;
pub mod auth;
pub mod brands;
pub mod cities;
pub mod dropdowns;
pub mod group_accounts;
pub mod redeems;
pub mod vendors;
pub mod venues;

use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager};

use crate::api::ApiExt;
use crate::config::Config;
use crate::db::DatabaseExt;
use crate::error::{AppError, AppResult};
use crate::repository::{Entity, RestRepository};
use crate::session::{Portal, SessionStore};

pub const ENTITY_CHANGED: &str = "entity-changed";

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Created,
    Updated,
    Deleted,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityChanged {
    pub entity: &'static str,
    pub action: Action,
    pub id: String,
}

pub(crate) fn repo<E: Entity>(app: &AppHandle) -> RestRepository<E> {
    RestRepository::new(app.api())
}

pub(crate) fn config(app: &AppHandle) -> Config {
    app.state::<Config>().inner().clone()
}

/// Tells every open screen to reload its list.
pub(crate) fn notify<E: Entity>(app: &AppHandle, action: Action, id: &str) {
    let event = EntityChanged {
        entity: E::RESOURCE.path,
        action,
        id: id.to_string(),
    };
    if let Err(e) = app.emit(ENTITY_CHANGED, &event) {
        tracing::warn!(error = %e, "failed to emit {}", ENTITY_CHANGED);
    }
}

pub(crate) fn saved_action(edit: bool) -> Action {
    if edit {
        Action::Updated
    } else {
        Action::Created
    }
}

/// Name of the signed-in vendor; vendor screens only show its own records.
pub(crate) fn vendor_name(app: &AppHandle) -> AppResult<String> {
    let session = SessionStore::new(app.db()).require(Portal::Vendor, chrono::Utc::now())?;
    session
        .display_name()
        .map(str::to_string)
        .ok_or_else(|| AppError::Forbidden("Vendor account has no name".to_string()))
}
