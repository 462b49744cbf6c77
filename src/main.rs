use actix_web::{middleware::Logger, web, App, HttpServer};
use homeinv::config::EnvConfig;
use homeinv::db::store_service::StoreService;
use homeinv::routes::configure_routes;
use homeinv::utils::webutils::cors;
use std::io;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EnvConfig::from_env().map_err(|e| {
        error!("invalid configuration: {e}");
        io::Error::other(e)
    })?;
    let addr = config.bind_address();

    let store_service = Arc::new(
        StoreService::new(&config.db_url)
            .await
            .map_err(|e| {
                error!("failed to initialize store: {e}");
                io::Error::other(e)
            })?
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors())
            .app_data(web::Data::new(Arc::clone(&store_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
