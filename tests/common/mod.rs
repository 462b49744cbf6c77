use homeinv::db::store_service::StoreService;
use sea_orm::ConnectOptions;
use std::sync::Arc;

pub mod client;

pub struct TestContext {
    pub db: Arc<StoreService>,
}

impl TestContext {
    /// Fresh, migrated in-memory SQLite store. One connection so every query sees the same database.
    pub async fn new() -> TestContext {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Arc::new(
            StoreService::connect(options)
                .await
                .expect("Failed to initialize StoreService")
        );

        TestContext { db }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use actix_web::test::TestRequest;
    use serde_json::{json, Value};

    pub fn item_body(name: &str, quantity: i64) -> Value {
        json!({ "name": name, "quantity": quantity })
    }

    pub fn create(body: Value) -> TestRequest {
        TestRequest::post().uri("/").set_json(body)
    }

    pub fn update(id: &str, body: Value) -> TestRequest {
        TestRequest::put().uri(&format!("/{id}")).set_json(body)
    }

    pub fn delete(id: &str) -> TestRequest {
        TestRequest::delete().uri(&format!("/{id}"))
    }

    pub fn list() -> TestRequest {
        TestRequest::get().uri("/")
    }
}
