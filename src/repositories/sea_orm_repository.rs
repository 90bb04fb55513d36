use super::Repository;
use crate::entities::record::{
    ActiveModel as RecordActiveModel, Column, Entity as RecordEntity, Model as RecordModel,
};
use crate::errors::ServiceError;
use crate::models::Record;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::marker::PhantomData;
use std::sync::Arc;

/// Stores one collection as JSON payload rows of the shared `records` table.
#[derive(Debug)]
pub struct SeaOrmRepository<T> {
    db: Arc<DatabaseConnection>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> SeaOrmRepository<T> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }

    fn decode(row: RecordModel) -> Result<T, ServiceError> {
        serde_json::from_str(&row.payload).map_err(|e| {
            ServiceError::SerializationError(format!(
                "corrupt {} payload for {}: {}",
                T::COLLECTION,
                row.id,
                e
            ))
        })
    }

    fn encode(record: &T) -> Result<String, ServiceError> {
        serde_json::to_string(record)
            .map_err(|e| ServiceError::SerializationError(e.to_string()))
    }

    async fn find_row(&self, id: &str) -> Result<Option<RecordModel>, ServiceError> {
        RecordEntity::find_by_id(id.to_string())
            .filter(Column::Collection.eq(T::COLLECTION))
            .one(self.db.as_ref())
            .await
            .map_err(ServiceError::DatabaseError)
    }
}

#[async_trait]
impl<T: Record> Repository<T> for SeaOrmRepository<T> {
    async fn get(&self, id: &str) -> Result<Option<T>, ServiceError> {
        self.find_row(id).await?.map(Self::decode).transpose()
    }

    async fn list(&self) -> Result<Vec<T>, ServiceError> {
        RecordEntity::find()
            .filter(Column::Collection.eq(T::COLLECTION))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(Self::decode)
            .collect()
    }

    async fn insert(&self, record: T) -> Result<T, ServiceError> {
        let meta = record.meta();
        let row = RecordActiveModel {
            id: Set(meta.id.clone()),
            collection: Set(T::COLLECTION.to_string()),
            payload: Set(Self::encode(&record)?),
            created_at: Set(meta.created_at),
            updated_at: Set(meta.updated_at),
        };
        row.insert(self.db.as_ref()).await?;
        tracing::debug!(collection = T::COLLECTION, id = %record.meta().id, "record inserted");
        Ok(record)
    }

    async fn update(&self, record: T) -> Result<Option<T>, ServiceError> {
        let Some(existing) = self.find_row(&record.meta().id).await? else {
            return Ok(None);
        };

        let mut row: RecordActiveModel = existing.into();
        row.payload = Set(Self::encode(&record)?);
        row.updated_at = Set(record.meta().updated_at);
        row.update(self.db.as_ref()).await?;
        Ok(Some(record))
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let result = RecordEntity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::Collection.eq(T::COLLECTION))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        crate::db::check_connection(&self.db).await
    }
}
