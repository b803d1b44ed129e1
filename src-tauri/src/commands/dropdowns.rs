use tauri::AppHandle;

use super::repo;
use crate::dropdown;
use crate::models::{City, Venue};

#[tauri::command]
pub async fn country_options(app: AppHandle) -> Vec<String> {
    let cities = dropdown::fetch_cities(&repo::<City>(&app)).await;
    dropdown::country_options(&cities)
}

#[tauri::command]
pub async fn city_options(app: AppHandle, selected_country: Option<String>) -> Vec<String> {
    let cities = dropdown::fetch_cities(&repo::<City>(&app)).await;
    dropdown::city_options(&cities, selected_country.as_deref())
}

#[tauri::command]
pub async fn venue_options(app: AppHandle) -> Vec<String> {
    let venues = dropdown::fetch_venues(&repo::<Venue>(&app)).await;
    dropdown::venue_options(&venues)
}

#[tauri::command]
pub fn category_options() -> Vec<String> {
    dropdown::category_options()
}
