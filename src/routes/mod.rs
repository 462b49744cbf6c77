use crate::utils::webutils::json_error_handler;
use actix_web::web;

pub mod health;
pub mod item;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(item::list::list_items)
        .service(item::create::create_item)
        .service(item::update::update_item)
        .service(item::delete::delete_item);
}
