use async_trait::async_trait;
use serde::Serialize;
use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};
use tokio::sync::oneshot;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::forms::{EntityForm, FormMode};
use crate::models::{AdminAccount, DeleteReceipt};
use crate::repository::{Entity, Repository};

#[derive(Debug, Clone, Serialize)]
pub struct Saved<E> {
    pub entity: E,
    pub message: &'static str,
}

/// Validates `form` and, only when it passes, issues exactly one create or
/// update call.
pub async fn save<F>(
    repo: &dyn Repository<F::Entity>,
    form: &F,
    mode: &FormMode,
) -> AppResult<Saved<F::Entity>>
where
    F: EntityForm + Sync,
{
    let payload = form.validate(mode).map_err(|e| {
        let resource = <F::Entity as Entity>::RESOURCE.path;
        tracing::debug!(resource, error = %e, "form rejected");
        e
    })?;

    let entity = match mode {
        FormMode::Create => repo.create(payload).await,
        FormMode::Edit { id } => repo.update(id, payload).await,
    }
    .map_err(|e| {
        let resource = <F::Entity as Entity>::RESOURCE.path;
        tracing::error!(resource, error = %e, "save failed");
        e
    })?;

    Ok(Saved {
        entity,
        message: F::success_message(mode),
    })
}

#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

pub async fn delete<E: Entity>(
    repo: &dyn Repository<E>,
    confirm: &dyn Confirm,
    id: &str,
    prompt: &str,
) -> AppResult<DeleteReceipt> {
    if !confirm.confirm(prompt).await {
        tracing::debug!(resource = E::RESOURCE.path, id, "delete cancelled");
        return Err(AppError::Cancelled);
    }

    repo.delete(id).await.map_err(|e| {
        tracing::error!(resource = E::RESOURCE.path, id, error = %e, "delete failed");
        AppError::from(e)
    })
}

/// Protected admin accounts are refused before the user is even asked. The
/// stored email is checked as well as the one shown on the row.
pub async fn delete_account(
    repo: &dyn Repository<AdminAccount>,
    confirm: &dyn Confirm,
    config: &Config,
    id: &str,
    email: &str,
) -> AppResult<DeleteReceipt> {
    let forbidden = || {
        tracing::warn!(id, email, "refusing to delete protected account");
        Err(AppError::Forbidden("This account cannot be deleted.".to_string()))
    };

    if config.is_protected_account(email) {
        return forbidden();
    }
    let stored = repo.get(id).await?;
    if config.is_protected_account(&stored.email) {
        return forbidden();
    }

    delete(repo, confirm, id, "Are you sure you want to delete this account?").await
}

/// OK/Cancel message box.
pub struct DialogConfirm<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> DialogConfirm<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

#[async_trait]
impl<R: Runtime> Confirm for DialogConfirm<R> {
    async fn confirm(&self, prompt: &str) -> bool {
        let (tx, rx) = oneshot::channel();
        self.app
            .dialog()
            .message(prompt)
            .title("Please confirm")
            .kind(MessageDialogKind::Warning)
            .buttons(MessageDialogButtons::OkCancel)
            .show(move |ok| {
                let _ = tx.send(ok);
            });

        rx.await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::TestServer;
    use crate::forms::{AccountForm, CityForm};
    use crate::models::City;
    use crate::repository::RestRepository;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Answer {
        ok: bool,
        asked: AtomicUsize,
    }

    impl Answer {
        fn new(ok: bool) -> Self {
            Self {
                ok,
                asked: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Confirm for Answer {
        async fn confirm(&self, _prompt: &str) -> bool {
            self.asked.fetch_add(1, Ordering::SeqCst);
            self.ok
        }
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_call() {
        let server = TestServer::start(201, Some(json!({ "data": {} }))).await;
        let repo = RestRepository::<City>::new(server.client.clone());

        let err = save(&repo, &CityForm::default(), &FormMode::Create)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_save_create_and_update() {
        let server = TestServer::start(
            200,
            Some(json!({
                "data": { "_id": "a1", "name": "Mona", "email": "mona@x.qa", "role": "Admin" }
            })),
        )
        .await;
        let repo = RestRepository::<AdminAccount>::new(server.client.clone());
        let form = AccountForm {
            name: "Mona".to_string(),
            email: "mona@x.qa".to_string(),
            password: "secret".to_string(),
            role: "Admin".to_string(),
        };

        let saved = save(&repo, &form, &FormMode::Create).await.unwrap();
        assert_eq!(saved.entity.id, "a1");
        assert_eq!(saved.message, "Account added successfully!");

        let saved = save(&repo, &form, &FormMode::Edit { id: "a1".to_string() })
            .await
            .unwrap();
        assert_eq!(saved.message, "Account updated successfully!");

        let requests = server.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/api/hbs/admins");
        assert_eq!(requests[1].method, "PUT");
        assert_eq!(requests[1].path, "/api/hbs/admins/a1");
    }

    #[tokio::test]
    async fn test_declined_delete_makes_no_call() {
        let server = TestServer::start(200, Some(json!({ "message": "deleted" }))).await;
        let repo = RestRepository::<City>::new(server.client.clone());
        let answer = Answer::new(false);

        let err = delete(&repo, &answer, "c1", "Delete this city?").await.unwrap_err();
        assert!(matches!(err, AppError::Cancelled));
        assert_eq!(answer.asked.load(Ordering::SeqCst), 1);
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_delete_makes_one_call() {
        let server = TestServer::start(200, Some(json!({ "message": "City deleted" }))).await;
        let repo = RestRepository::<City>::new(server.client.clone());

        let receipt = delete(&repo, &Answer::new(true), "c1", "Delete this city?")
            .await
            .unwrap();
        assert_eq!(receipt.message.as_deref(), Some("City deleted"));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].path, "/api/hbs/cities/c1");
    }

    #[tokio::test]
    async fn test_protected_account_is_never_deleted() {
        let server = TestServer::start(200, Some(json!({}))).await;
        let repo = RestRepository::<AdminAccount>::new(server.client.clone());
        let answer = Answer::new(true);

        let err = delete_account(&repo, &answer, &Config::default(), "a1", "Ashraf@WestWalk.qa")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "This account cannot be deleted.");
        assert_eq!(answer.asked.load(Ordering::SeqCst), 0);
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_stored_email_decides_protection() {
        let server = TestServer::start(
            200,
            Some(json!({ "data": { "_id": "a1", "email": "ashraf@westwalk.qa" } })),
        )
        .await;
        let repo = RestRepository::<AdminAccount>::new(server.client.clone());
        let answer = Answer::new(true);

        let err = delete_account(&repo, &answer, &Config::default(), "a1", "someone@x.qa")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(answer.asked.load(Ordering::SeqCst), 0);

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/api/hbs/admins/a1");
    }

    #[tokio::test]
    async fn test_unprotected_account_is_deleted_after_confirm() {
        let server = TestServer::start(
            200,
            Some(json!({ "message": "Admin deleted", "data": { "_id": "a2", "email": "mona@x.qa" } })),
        )
        .await;
        let repo = RestRepository::<AdminAccount>::new(server.client.clone());
        let answer = Answer::new(true);

        let receipt = delete_account(&repo, &answer, &Config::default(), "a2", "mona@x.qa")
            .await
            .unwrap();
        assert_eq!(receipt.message.as_deref(), Some("Admin deleted"));
        assert_eq!(answer.asked.load(Ordering::SeqCst), 1);

        let methods: Vec<String> = server.requests().into_iter().map(|r| r.method).collect();
        assert_eq!(methods, vec!["GET", "DELETE"]);
    }
}
