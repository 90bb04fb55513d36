use super::Repository;
use crate::errors::ServiceError;
use crate::models::Record;
use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};

/// Records kept in a sharded concurrent map. Last write wins.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    records: DashMap<String, T>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn get(&self, id: &str) -> Result<Option<T>, ServiceError> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<T>, ServiceError> {
        let mut all: Vec<T> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| {
            a.meta()
                .created_at
                .cmp(&b.meta().created_at)
                .then_with(|| a.meta().id.cmp(&b.meta().id))
        });
        Ok(all)
    }

    async fn insert(&self, record: T) -> Result<T, ServiceError> {
        match self.records.entry(record.meta().id.clone()) {
            Entry::Occupied(entry) => Err(ServiceError::Conflict(format!(
                "{} {} already exists",
                T::LABEL,
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                entry.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn update(&self, record: T) -> Result<Option<T>, ServiceError> {
        match self.records.get_mut(&record.meta().id) {
            Some(mut entry) => {
                *entry = record.clone();
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.records.remove(id).is_some())
    }
}
