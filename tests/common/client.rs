use actix_web::{web, App};
use homeinv::db::store_service::StoreService;
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<StoreService>,
}

impl TestClient {
    pub fn new(db: Arc<StoreService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(homeinv::routes::configure_routes)
    }
}
