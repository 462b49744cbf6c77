use actix_web::{delete, web};
use std::sync::Arc;

use crate::db::store_service::StoreService;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};

#[delete("/{id}")]
pub async fn delete_item(
    db: web::Data<Arc<StoreService>>,
    path: web::Path<String>,
) -> ApiResult<MessageRes> {
    // Unknown ids are not an error.
    db.delete_item(&path.into_inner()).await?;

    Ok(ApiResponse::Ok(MessageRes {
        message: "Deleted successfully".to_string(),
    }))
}
