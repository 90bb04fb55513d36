//! Farm record types.
//!
//! Every collection is a flat camelCase JSON document carrying a [`RecordMeta`]
//! (`_id`, `createdAt`, `updatedAt`) plus its own fields.

use crate::errors::ServiceError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub mod cattle;
pub mod customer;
pub mod dates;
pub mod expense;
pub mod feed;
pub mod feed_transaction;
pub mod medicine;
pub mod medicine_application;
pub mod milk;
pub mod sale;
pub mod waste;

pub use cattle::{Cattle, CattleStatus, Gender};
pub use customer::{Customer, CustomerStatus};
pub use expense::Expense;
pub use feed::Feed;
pub use feed_transaction::{FeedTransaction, TransactionType};
pub use medicine::Medicine;
pub use medicine_application::{MedicineApplication, TreatmentStatus};
pub use milk::{MilkRecord, MilkRow, MilkSession};
pub use sale::Sale;
pub use waste::Waste;

/// Server-owned identity and timestamps shared by every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordMeta {
    #[serde(rename = "_id")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A record type stored in its own collection and served under `/api/<COLLECTION>`.
pub trait Record:
    Serialize + DeserializeOwned + Validate + Clone + Send + Sync + 'static
{
    /// Collection name; also the route segment.
    const COLLECTION: &'static str;
    /// Human label used in `"<Label> not found"` style messages.
    const LABEL: &'static str;
    /// Fields a create body must carry with a non-empty value.
    const REQUIRED: &'static [&'static str];
    /// Static 400 message when a required field is missing.
    const REQUIRED_MESSAGE: &'static str;

    fn meta(&self) -> &RecordMeta;
    fn meta_mut(&mut self) -> &mut RecordMeta;

    /// Recomputes derived fields. Returns true when a stored value was corrected.
    fn normalize(&mut self) -> Result<bool, ServiceError> {
        Ok(false)
    }
}

/// True when every field named in `required` is present, non-null and not a blank string.
pub fn has_required_fields(body: &Value, required: &[&str]) -> bool {
    required.iter().all(|field| match body.get(*field) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    })
}

/// `quantity × price` for a derived total, rejecting results outside the decimal range.
pub(crate) fn product(label: &str, quantity: Decimal, price: Decimal) -> Result<Decimal, ServiceError> {
    quantity.checked_mul(price).ok_or_else(|| {
        ServiceError::ValidationError(format!("{} total is out of range", label))
    })
}

/// Replaces `current` with `computed`, reporting whether they differed.
pub(crate) fn replace_derived(current: &mut Decimal, computed: Decimal) -> bool {
    if *current == computed {
        return false;
    }
    *current = computed;
    true
}

/// Payment state shared by milk records, sales and expenses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Partial,
}

/// Upper bound for any stored quantity, price or amount.
///
/// Products of two bounded values and sums over billions of them stay inside
/// the `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

pub(crate) fn validate_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value >= Decimal::ZERO && *value <= MAX_AMOUNT {
        Ok(())
    } else {
        let mut err = ValidationError::new("amount_range");
        err.message = Some(format!("must be between 0 and {}", MAX_AMOUNT).into());
        Err(err)
    }
}

pub(crate) fn default_unit_kg() -> String {
    "kg".to_string()
}
