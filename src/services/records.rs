use crate::errors::ServiceError;
use crate::models::{has_required_fields, Record, RecordMeta};
use crate::repositories::Repository;
use chrono::{DateTime, Duration, Utc};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

/// Fields the server owns; client values for them are discarded.
const SERVER_FIELDS: [&str; 3] = ["_id", "createdAt", "updatedAt"];

/// CRUD over one collection: validation, id and timestamp stamping,
/// shallow-merge updates and derived-field recomputation.
pub struct RecordService<T: Record> {
    repository: Arc<dyn Repository<T>>,
}

impl<T: Record> Clone for RecordService<T> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<T: Record> RecordService<T> {
    pub fn new(repository: Arc<dyn Repository<T>>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<T>, ServiceError> {
        self.repository.list().await
    }

    pub async fn get(&self, id: &str) -> Result<T, ServiceError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(T::LABEL))
    }

    #[instrument(skip(self, body), fields(collection = T::COLLECTION))]
    pub async fn create(&self, body: Value) -> Result<T, ServiceError> {
        let mut fields = into_object(body)?;
        if !has_required_fields(&Value::Object(fields.clone()), T::REQUIRED) {
            return Err(ServiceError::ValidationError(T::REQUIRED_MESSAGE.to_string()));
        }
        let client_total = fields.contains_key("totalAmount");
        for key in SERVER_FIELDS {
            fields.remove(key);
        }

        let mut record: T = decode(Value::Object(fields))?;
        let now = Utc::now();
        *record.meta_mut() = RecordMeta {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
        };
        finish(&mut record, client_total)?;

        let record = self.repository.insert(record).await?;
        info!(id = %record.meta().id, "{} created", T::LABEL);
        Ok(record)
    }

    #[instrument(skip(self, patch), fields(collection = T::COLLECTION))]
    pub async fn update(&self, id: &str, patch: Value) -> Result<T, ServiceError> {
        let patch = into_object(patch)?;
        let existing = self.get(id).await?;
        let client_total = patch.contains_key("totalAmount");

        let mut record = merge_patch(&existing, patch)?;
        finish(&mut record, client_total)?;

        let record = self
            .repository
            .update(record)
            .await?
            .ok_or_else(|| ServiceError::not_found(T::LABEL))?;
        info!(id = %record.meta().id, "{} updated", T::LABEL);
        Ok(record)
    }

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if self.repository.delete(id).await? {
            info!(id = %id, "{} deleted", T::LABEL);
            Ok(())
        } else {
            Err(ServiceError::not_found(T::LABEL))
        }
    }

    /// True when the collection holds no records.
    pub async fn is_empty(&self) -> Result<bool, ServiceError> {
        Ok(self.repository.list().await?.is_empty())
    }

    pub async fn ping(&self) -> Result<(), ServiceError> {
        self.repository.ping().await
    }
}

/// Shallow-merges `patch` over `existing`.
///
/// Top-level keys in the patch replace the stored ones. `_id` and `createdAt`
/// keep their stored values and `updatedAt` moves strictly forward.
pub fn merge_patch<T: Record>(existing: &T, patch: Map<String, Value>) -> Result<T, ServiceError> {
    let mut merged = match serde_json::to_value(existing) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            return Err(ServiceError::SerializationError(format!(
                "{} did not serialize to an object",
                T::LABEL
            )))
        }
        Err(e) => return Err(ServiceError::SerializationError(e.to_string())),
    };

    for (key, value) in patch {
        if SERVER_FIELDS.contains(&key.as_str()) {
            continue;
        }
        merged.insert(key, value);
    }

    let mut record: T = decode(Value::Object(merged))?;
    let previous = existing.meta();
    *record.meta_mut() = RecordMeta {
        id: previous.id.clone(),
        created_at: previous.created_at,
        updated_at: next_timestamp(previous.updated_at),
    };
    Ok(record)
}

fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    let floor = previous + Duration::microseconds(1);
    if now > floor {
        now
    } else {
        floor
    }
}

fn into_object(body: Value) -> Result<Map<String, Value>, ServiceError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ServiceError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

fn decode<T: Record>(value: Value) -> Result<T, ServiceError> {
    serde_json::from_value(value).map_err(|e| {
        ServiceError::ValidationError(format!(
            "Invalid {} data: {}",
            T::LABEL.to_lowercase(),
            e
        ))
    })
}

/// Validates the record, then recomputes its derived fields.
fn finish<T: Record>(record: &mut T, client_total: bool) -> Result<(), ServiceError> {
    record.validate()?;
    if record.normalize()? && client_total {
        warn!(
            collection = T::COLLECTION,
            id = %record.meta().id,
            "client totalAmount disagreed with quantity x price; recomputed"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cattle, MilkRecord};
    use crate::repositories::InMemoryRepository;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn cattle_service() -> RecordService<Cattle> {
        RecordService::new(Arc::new(InMemoryRepository::<Cattle>::new()))
    }

    fn milk_service() -> RecordService<MilkRecord> {
        RecordService::new(Arc::new(InMemoryRepository::<MilkRecord>::new()))
    }

    #[tokio::test]
    async fn create_stamps_server_fields_and_ignores_client_id() {
        let service = cattle_service();
        let created = service
            .create(json!({
                "_id": "client-chosen",
                "name": "Ganga",
                "breed": "Holstein",
                "dateOfJoining": "2023-04-10"
            }))
            .await
            .unwrap();

        assert_ne!(created.meta.id, "client-chosen");
        assert!(Uuid::parse_str(&created.meta.id).is_ok());
        assert_eq!(created.meta.created_at, created.meta.updated_at);
    }

    #[tokio::test]
    async fn create_rejects_missing_required_fields_with_static_message() {
        let service = cattle_service();
        let err = service
            .create(json!({"name": "Ganga", "dateOfJoining": "2023-04-10"}))
            .await
            .unwrap_err();
        assert_eq!(
            err.response_message(),
            "Name, breed, and date of joining are required"
        );
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_non_object_body() {
        let err = cattle_service().create(json!([1, 2])).await.unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));
    }

    #[tokio::test]
    async fn create_rejects_wrong_types() {
        let err = milk_service()
            .create(json!({"cattleId": "c1", "date": "2024-11-23", "quantity": "lots"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::ValidationError(_)));
    }

    #[tokio::test]
    async fn update_merges_and_repins_identity() {
        let service = cattle_service();
        let created = service
            .create(json!({
                "name": "Ganga",
                "breed": "Holstein",
                "dateOfJoining": "2023-04-10"
            }))
            .await
            .unwrap();

        let updated = service
            .update(
                &created.meta.id,
                json!({"_id": "hijack", "createdAt": "2000-01-01T00:00:00Z", "breed": "Gir"}),
            )
            .await
            .unwrap();

        assert_eq!(updated.meta.id, created.meta.id);
        assert_eq!(updated.meta.created_at, created.meta.created_at);
        assert!(updated.meta.updated_at > created.meta.updated_at);
        assert_eq!(updated.breed, "Gir");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.date_of_joining, created.date_of_joining);
    }

    #[tokio::test]
    async fn update_revalidates_the_merged_record() {
        let service = cattle_service();
        let created = service
            .create(json!({
                "name": "Ganga",
                "breed": "Holstein",
                "dateOfJoining": "2023-04-10"
            }))
            .await
            .unwrap();

        let err = service
            .update(&created.meta.id, json!({"name": ""}))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::ValidationError(_)));

        // Stored record is untouched
        assert_eq!(service.get(&created.meta.id).await.unwrap().name, "Ganga");
    }

    #[tokio::test]
    async fn price_only_update_recomputes_total() {
        let service = milk_service();
        let created = service
            .create(json!({
                "cattleId": "c1",
                "date": "2024-11-23",
                "quantity": 12,
                "pricePerLiter": 45,
                "totalAmount": 1
            }))
            .await
            .unwrap();
        assert_eq!(created.total_amount, dec!(540));

        let updated = service
            .update(&created.meta.id, json!({"pricePerLiter": 50}))
            .await
            .unwrap();
        assert_eq!(updated.total_amount, dec!(600));
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let service = cattle_service();
        let err = service.get("nope").await.unwrap_err();
        assert_eq!(err.response_message(), "Cattle not found");
        assert!(matches!(
            service.update("nope", json!({})).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(
            service.delete("nope").await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }

    #[test]
    fn next_timestamp_always_advances() {
        let future = Utc::now() + Duration::hours(1);
        assert!(next_timestamp(future) > future);
        let past = Utc::now() - Duration::hours(1);
        assert!(next_timestamp(past) > past);
    }
}
