use tauri::AppHandle;

use super::{repo, vendor_name};
use crate::listing::{self, ListQuery, Page, RedeemRow};
use crate::models::RedeemedDiscount;
use crate::repository::Repository;

#[tauri::command]
pub async fn list_redeems(app: AppHandle, query: ListQuery) -> Result<Page<RedeemRow>, String> {
    let redeems = repo::<RedeemedDiscount>(&app)
        .list()
        .await
        .map_err(|e| e.to_string())?;
    Ok(listing::list(redeems, &query).map(RedeemRow::from))
}

/// Redemptions of the signed-in vendor's brand.
#[tauri::command]
pub async fn list_vendor_redeems(
    app: AppHandle,
    query: ListQuery,
) -> Result<Page<RedeemRow>, String> {
    let name = vendor_name(&app).map_err(|e| e.to_string())?;
    let redeems = repo::<RedeemedDiscount>(&app)
        .list()
        .await
        .map_err(|e| e.to_string())?;

    Ok(listing::list(listing::vendor_redeems(redeems, &name), &query).map(RedeemRow::from))
}
