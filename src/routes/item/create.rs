use actix_web::{post, web};
use std::sync::Arc;

use crate::db::store_service::StoreService;
use crate::types::item::{Item, RItemBody};
use crate::types::response::{ApiResponse, ApiResult};

#[post("/")]
pub async fn create_item(
    db: web::Data<Arc<StoreService>>,
    body: web::Json<RItemBody>,
) -> ApiResult<Item> {
    let new_item = body.into_inner().into_new_item()?;
    let created = db.create_item(new_item).await?;

    Ok(ApiResponse::Created(created.into()))
}
