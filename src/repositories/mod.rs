use crate::errors::ServiceError;
use crate::models::{
    Cattle, Customer, Expense, Feed, FeedTransaction, Medicine, MedicineApplication, MilkRecord,
    Record, Sale, Waste,
};
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub mod in_memory;
pub mod sea_orm_repository;

pub use in_memory::InMemoryRepository;
pub use sea_orm_repository::SeaOrmRepository;

/// Storage for one collection of records.
///
/// Records are written whole; the caller owns id and timestamp stamping.
/// `list` returns records ordered by `createdAt`, then `_id`.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<T>, ServiceError>;

    async fn list(&self) -> Result<Vec<T>, ServiceError>;

    async fn insert(&self, record: T) -> Result<T, ServiceError>;

    /// Replaces the stored record with the same `_id`. `None` when it does not exist.
    async fn update(&self, record: T) -> Result<Option<T>, ServiceError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;

    /// Storage reachability for the health endpoint.
    async fn ping(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}

/// Resolves the repository for one record type out of [`Repositories`].
pub trait ProvideRepository<T: Record> {
    fn repository(&self) -> Arc<dyn Repository<T>>;
}

macro_rules! repositories {
    ($($field:ident: $ty:ty),+ $(,)?) => {
        /// One repository per collection, shared by handlers and services.
        #[derive(Clone)]
        pub struct Repositories {
            $(pub $field: Arc<dyn Repository<$ty>>,)+
        }

        impl Repositories {
            /// Process-local storage; contents are lost on restart.
            pub fn in_memory() -> Self {
                Self {
                    $($field: Arc::new(InMemoryRepository::<$ty>::new()),)+
                }
            }

            /// Relational storage in the `records` table.
            pub fn sea_orm(db: Arc<DatabaseConnection>) -> Self {
                Self {
                    $($field: Arc::new(SeaOrmRepository::<$ty>::new(db.clone())),)+
                }
            }
        }

        $(
            impl ProvideRepository<$ty> for Repositories {
                fn repository(&self) -> Arc<dyn Repository<$ty>> {
                    self.$field.clone()
                }
            }
        )+
    };
}

repositories! {
    cattle: Cattle,
    milk: MilkRecord,
    feed: Feed,
    feed_transactions: FeedTransaction,
    medicine: Medicine,
    medicine_applications: MedicineApplication,
    expenses: Expense,
    waste: Waste,
    sales: Sale,
    customers: Customer,
}
