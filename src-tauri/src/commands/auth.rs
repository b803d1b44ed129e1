use chrono::Utc;
use tauri::AppHandle;

use super::config;
use crate::api::auth::{self, Credentials};
use crate::api::ApiExt;
use crate::db::DatabaseExt;
use crate::routes::{self, RouteDecision};
use crate::session::{Portal, Session, SessionSource, SessionStore};

fn check(credentials: &Credentials) -> Result<(), String> {
    if credentials.is_complete() {
        Ok(())
    } else {
        Err("Please enter email and password".to_string())
    }
}

#[tauri::command]
pub async fn admin_login(
    app: AppHandle,
    email: String,
    password: String,
) -> Result<Session, String> {
    let credentials = Credentials { email, password };
    check(&credentials)?;

    let profile = auth::login_admin(&app.api(), &credentials)
        .await
        .map_err(|e| e.to_string())?;

    SessionStore::new(app.db())
        .start(Portal::Admin, profile, config(&app).session_ttl, Utc::now())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn vendor_login(
    app: AppHandle,
    email: String,
    password: String,
) -> Result<Session, String> {
    let credentials = Credentials { email, password };
    check(&credentials)?;

    let profile = auth::login_vendor(&app.api(), &credentials)
        .await
        .map_err(|e| e.to_string())?;

    SessionStore::new(app.db())
        .start(Portal::Vendor, profile, config(&app).session_ttl, Utc::now())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn logout(app: AppHandle, portal: Portal) -> Result<bool, String> {
    SessionStore::new(app.db())
        .end(portal)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn current_session(app: AppHandle, portal: Portal) -> Result<Option<Session>, String> {
    SessionStore::new(app.db())
        .current(portal, Utc::now())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn check_route(app: AppHandle, path: String) -> Result<RouteDecision, String> {
    let sessions = SessionStore::new(app.db());
    routes::guard(&path, &sessions, Utc::now()).map_err(|e| e.to_string())
}
