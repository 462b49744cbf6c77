use crate::db::store_service::StoreService;
use crate::types::error::AppError;
use crate::types::item::{ItemPatch, NewItem};
use chrono::Utc;
use entity::item::{ActiveModel as ItemActive, Column, Entity as Item, Model as ItemModel};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use tracing::debug;
use uuid::Uuid;

impl StoreService {
    /// Every item, most recently touched first.
    pub async fn list_items(&self) -> Result<Vec<ItemModel>, AppError> {
        Ok(Item::find()
            .order_by_desc(Column::LastUpdated)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_item(&self, id: &str) -> Result<Option<ItemModel>, AppError> {
        Ok(Item::find_by_id(id.to_string())
            .one(&self.database_connection)
            .await?)
    }

    pub async fn create_item(&self, item: NewItem) -> Result<ItemModel, AppError> {
        let created = ItemActive {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(item.name),
            quantity: Set(item.quantity),
            last_updated: Set(Utc::now()),
        }
        .insert(&self.database_connection)
        .await?;

        debug!(id = %created.id, "item created");
        Ok(created)
    }

    /// Applies the patch and refreshes `last_updated`. `None` when no item has that id.
    pub async fn update_item(
        &self,
        id: &str,
        patch: ItemPatch,
    ) -> Result<Option<ItemModel>, AppError> {
        let txn = self.database_connection.begin().await?;

        let Some(current) = Item::find_by_id(id.to_string()).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut am: ItemActive = current.into();
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(quantity) = patch.quantity {
            am.quantity = Set(quantity);
        }
        am.last_updated = Set(Utc::now());
        let updated = am.update(&txn).await?;

        txn.commit().await?;
        debug!(id = %updated.id, "item updated");
        Ok(Some(updated))
    }

    /// Hard delete. Returns how many rows went away (0 or 1).
    pub async fn delete_item(&self, id: &str) -> Result<u64, AppError> {
        let res = Item::delete_by_id(id.to_string())
            .exec(&self.database_connection)
            .await?;
        debug!(id, removed = res.rows_affected, "item delete");
        Ok(res.rows_affected)
    }
}
