use actix_web::{put, web};
use std::sync::Arc;

use crate::db::store_service::StoreService;
use crate::types::item::{Item, RItemBody};
use crate::types::response::{ApiResponse, ApiResult};

/// Responds `null` with 200 when the id is unknown.
#[put("/{id}")]
pub async fn update_item(
    db: web::Data<Arc<StoreService>>,
    path: web::Path<String>,
    body: web::Json<RItemBody>,
) -> ApiResult<Option<Item>> {
    let id = path.into_inner();
    let patch = body.into_inner().into_patch()?;
    let updated = db.update_item(&id, patch).await?;

    Ok(ApiResponse::Ok(updated.map(Item::from)))
}
