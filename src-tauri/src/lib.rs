mod api;
mod assets;
mod commands;
mod config;
mod crud;
mod db;
mod dropdown;
mod error;
mod forms;
mod listing;
mod models;
mod repository;
mod routes;
mod session;
mod timestamp;

#[cfg(test)]
mod tests;

use api::ApiClient;
use commands::{accounts, auth, brands, cities, dropdowns, group_accounts, redeems, vendors, venues};
use config::Config;
use db::Database;
use tauri::Manager;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(config: &Config) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = Config::init();
    init_tracing(&config);

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .setup(move |app| {
            // Local session store
            let db = Database::new(app.handle())?;
            db.initialize()?;
            app.manage(db);

            let api = ApiClient::new(&config)?;
            tracing::info!(api = api.base_url(), "backend configured");
            app.manage(api);
            app.manage(config);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Sessions and routing
            auth::admin_login,
            auth::vendor_login,
            auth::logout,
            auth::current_session,
            auth::check_route,
            // Accounts
            accounts::list_accounts,
            accounts::save_account,
            accounts::delete_account,
            // Cities
            cities::list_cities,
            cities::save_city,
            cities::delete_city,
            // Services
            brands::list_brands,
            brands::get_brand,
            brands::save_brand,
            brands::delete_brand,
            brands::generate_brand_pin,
            brands::list_vendor_brands,
            // Venues
            venues::list_venues,
            venues::save_venue,
            venues::delete_venue,
            // Group accounts
            group_accounts::list_group_accounts,
            group_accounts::get_group_account,
            group_accounts::save_group_account,
            group_accounts::delete_group_account,
            group_accounts::list_group_brands,
            group_accounts::save_group_brand,
            group_accounts::delete_group_brand,
            // Vendors
            vendors::list_vendors,
            vendors::save_vendor,
            vendors::delete_vendor,
            // Redeem history
            redeems::list_redeems,
            redeems::list_vendor_redeems,
            // Dropdowns
            dropdowns::country_options,
            dropdowns::city_options,
            dropdowns::venue_options,
            dropdowns::category_options,
            // Assets
            commands::assets::resolve_asset_url,
            commands::assets::inspect_upload,
            commands::assets::open_asset,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
