use tauri::AppHandle;

use super::{config, notify, repo, saved_action, Action};
use crate::crud::{self, DialogConfirm, Saved};
use crate::forms::{AccountForm, FormMode};
use crate::listing::{self, AccountRow, ListQuery, Page};
use crate::models::{AdminAccount, DeleteReceipt};
use crate::repository::Repository;

#[tauri::command]
pub async fn list_accounts(app: AppHandle, query: ListQuery) -> Result<Page<AccountRow>, String> {
    let accounts = repo::<AdminAccount>(&app)
        .list()
        .await
        .map_err(|e| e.to_string())?;

    let config = config(&app);
    Ok(listing::list(accounts, &query).map(|account| AccountRow::new(account, &config)))
}

#[tauri::command]
pub async fn save_account(
    app: AppHandle,
    form: AccountForm,
    id: Option<String>,
) -> Result<Saved<AdminAccount>, String> {
    let mode = FormMode::from_id(id);
    let saved = crud::save(&repo::<AdminAccount>(&app), &form, &mode)
        .await
        .map_err(|e| e.to_string())?;

    notify::<AdminAccount>(&app, saved_action(mode.is_edit()), &saved.entity.id);
    Ok(saved)
}

#[tauri::command]
pub async fn delete_account(
    app: AppHandle,
    id: String,
    email: String,
) -> Result<DeleteReceipt, String> {
    let confirm = DialogConfirm::new(app.clone());
    let receipt = crud::delete_account(
        &repo::<AdminAccount>(&app),
        &confirm,
        &config(&app),
        &id,
        &email,
    )
    .await
    .map_err(|e| e.to_string())?;

    notify::<AdminAccount>(&app, Action::Deleted, &id);
    Ok(receipt)
}
