//! Integration tests for the session store, the route guard and the save flow
//! These tests use an in-memory SQLite database and an in-process backend

#[cfg(test)]
mod tests {
    use chrono::{Duration as ChronoDuration, TimeZone, Utc};
    use serde_json::json;
    use std::time::Duration;

    use crate::api::test_server::TestServer;
    use crate::assets::UploadFile;
    use crate::crud;
    use crate::db::Database;
    use crate::error::AppError;
    use crate::forms::{BrandForm, DiscountRow, FormMode};
    use crate::models::Brand;
    use crate::repository::RestRepository;
    use crate::routes::{self, RouteDecision, ADD_BRAND_PATH};
    use crate::session::{Portal, SessionSource, SessionStore};

    /// Create a test database with schema
    fn setup_test_db() -> Database {
        let db = Database::open_in_memory().expect("Failed to create in-memory database");
        db.initialize().expect("Failed to create schema");
        db
    }

    const TTL: Duration = Duration::from_secs(12 * 60 * 60);

    fn admin_profile() -> serde_json::Value {
        json!({ "id": "a1", "name": "Ashraf", "email": "ashraf@westwalk.qa", "role": "Admin" })
    }

    // ===== SESSION TESTS =====

    #[test]
    fn test_start_and_read_session() {
        let db = setup_test_db();
        let store = SessionStore::new(&db);
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();

        store.start(Portal::Admin, admin_profile(), TTL, now).unwrap();

        let session = store.current(Portal::Admin, now).unwrap().unwrap();
        assert_eq!(session.profile["email"], "ashraf@westwalk.qa");
        assert_eq!(session.expires_at, now + ChronoDuration::hours(12));
        assert_eq!(session.display_name(), Some("Ashraf"));

        // Admin and vendor sessions are separate
        assert!(store.current(Portal::Vendor, now).unwrap().is_none());
    }

    #[test]
    fn test_session_expires() {
        let db = setup_test_db();
        let store = SessionStore::new(&db);
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();

        store.start(Portal::Vendor, json!({ "name": "Coffee Cloud" }), TTL, now).unwrap();

        let later = now + ChronoDuration::hours(12);
        assert!(store.current(Portal::Vendor, later).unwrap().is_none());

        // Expired rows are removed
        let count: i32 = db
            .conn
            .lock()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_login_replaces_previous_session() {
        let db = setup_test_db();
        let store = SessionStore::new(&db);
        let now = Utc::now();

        store.start(Portal::Admin, json!({ "name": "First" }), TTL, now).unwrap();
        store.start(Portal::Admin, json!({ "name": "Second" }), TTL, now).unwrap();

        let count: i32 = db
            .conn
            .lock()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM sessions WHERE portal = 'admin'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);

        let session = store.require(Portal::Admin, now).unwrap();
        assert_eq!(session.display_name(), Some("Second"));
    }

    #[test]
    fn test_logout() {
        let db = setup_test_db();
        let store = SessionStore::new(&db);
        let now = Utc::now();

        store.start(Portal::Admin, admin_profile(), TTL, now).unwrap();
        assert!(store.end(Portal::Admin).unwrap());
        assert!(!store.end(Portal::Admin).unwrap());

        assert!(matches!(
            store.require(Portal::Admin, now),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn test_unreadable_session_is_discarded() {
        let db = setup_test_db();
        db.conn
            .lock()
            .unwrap()
            .execute(
                "INSERT INTO sessions (portal, profile, created_at, expires_at)
                 VALUES ('admin', '{', 'x', 'y')",
                [],
            )
            .unwrap();

        let store = SessionStore::new(&db);
        assert!(store.current(Portal::Admin, Utc::now()).unwrap().is_none());
    }

    // ===== ROUTE GUARD TESTS =====

    #[test]
    fn test_guard_redirects_without_session() {
        let db = setup_test_db();
        let store = SessionStore::new(&db);
        let now = Utc::now();

        assert_eq!(
            routes::guard("/services", &store, now).unwrap(),
            RouteDecision::Redirect { to: "/login" }
        );
        assert_eq!(
            routes::guard("/Vender-Brands", &store, now).unwrap(),
            RouteDecision::Redirect { to: "/vender-login" }
        );
        assert_eq!(
            routes::guard("/login", &store, now).unwrap(),
            RouteDecision::Render { screen: "Login" }
        );
        assert_eq!(
            routes::guard(ADD_BRAND_PATH, &store, now).unwrap(),
            RouteDecision::Render { screen: "AddBrand" }
        );
    }

    #[test]
    fn test_guard_renders_with_session() {
        let db = setup_test_db();
        let store = SessionStore::new(&db);
        let now = Utc::now();
        store.start(Portal::Admin, admin_profile(), TTL, now).unwrap();

        assert_eq!(
            routes::guard("/brands/g42", &store, now).unwrap(),
            RouteDecision::Render { screen: "BrandList" }
        );

        // An admin session does not open the vendor portal
        assert_eq!(
            routes::guard("/vendor-dashboard", &store, now).unwrap(),
            RouteDecision::Redirect { to: "/vender-login" }
        );

        // Once expired the guard sends the user back to the login page
        let later = now + ChronoDuration::hours(13);
        assert_eq!(
            routes::guard("/", &store, later).unwrap(),
            RouteDecision::Redirect { to: "/login" }
        );
    }

    // ===== BRAND SAVE FLOW =====

    fn discount_15() -> Vec<DiscountRow> {
        vec![DiscountRow {
            value: "15".to_string(),
            description_eng: "15% off".to_string(),
            description_arabic: String::new(),
        }]
    }

    #[tokio::test]
    async fn test_brand_create_end_to_end() {
        let server = TestServer::start(
            201,
            Some(json!({ "success": true, "data": { "_id": "b1", "nameEng": "Test" } })),
        )
        .await;
        let repo = RestRepository::<Brand>::new(server.client.clone());

        // Incomplete form without an image never reaches the backend
        let draft = BrandForm {
            name_eng: "Test".to_string(),
            discounts: discount_15(),
            ..Default::default()
        };
        let err = crud::save(&repo, &draft, &FormMode::Create).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(server.requests().is_empty());

        let form = BrandForm {
            name_arabic: "اختبار".to_string(),
            description_eng: "Coffee".to_string(),
            description_arabic: "قهوة".to_string(),
            longitude: "51.53".to_string(),
            latitude: "25.28".to_string(),
            address: "West Walk".to_string(),
            phone_number: "+97455501234".to_string(),
            selected_category: "Food and Drink".to_string(),
            selected_city: "Doha".to_string(),
            node_img: Some(UploadFile::new("logo.png", "image/png", vec![137, 80, 78, 71])),
            ..draft
        };
        let saved = crud::save(&repo, &form, &FormMode::Create).await.unwrap();
        assert_eq!(saved.entity.id, "b1");
        assert_eq!(saved.message, "Service added successfully!");

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/api/hbs/brands");
        assert!(requests[0].content_type.starts_with("multipart/form-data"));

        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains(r#"name="discounts""#));
        assert!(body.contains(r#"[{"value":15,"descriptionEng":"15% off","descriptionArabic":""}]"#));
        assert!(body.contains(r#"name="img"; filename="logo.png""#));
    }

    #[tokio::test]
    async fn test_brand_update_failure_reports_server_message() {
        let server = TestServer::start(422, Some(json!({ "message": "Invalid category" }))).await;
        let repo = RestRepository::<Brand>::new(server.client.clone());

        let form = BrandForm {
            name_eng: "Test".to_string(),
            name_arabic: "اختبار".to_string(),
            description_eng: "Coffee".to_string(),
            description_arabic: "قهوة".to_string(),
            longitude: "51.53".to_string(),
            latitude: "25.28".to_string(),
            address: "West Walk".to_string(),
            phone_number: "+97455501234".to_string(),
            selected_category: "Coffee".to_string(),
            selected_city: "Doha".to_string(),
            discounts: discount_15(),
            existing_img: "uploads/logo.png".to_string(),
            ..Default::default()
        };

        let err = crud::save(&repo, &form, &FormMode::Edit { id: "b1".to_string() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid category");

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, "/api/hbs/brands/b1");
    }
}
