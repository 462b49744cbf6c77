use actix_web::{get, web};
use std::sync::Arc;

use crate::db::store_service::StoreService;
use crate::types::item::Item;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/")]
pub async fn list_items(
    db: web::Data<Arc<StoreService>>,
) -> ApiResult<Vec<Item>> {
    let items = db.list_items().await?;

    Ok(ApiResponse::Ok(items.into_iter().map(Item::from).collect()))
}
