use super::{dates, product, replace_derived, validate_amount, Record, RecordMeta};
use crate::analytics::period::Dated;
use crate::errors::ServiceError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Purchase,
    Consumption,
    Wastage,
    Adjustment,
}

/// A stock movement for one feed item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedTransaction {
    #[serde(flatten)]
    pub meta: RecordMeta,

    #[validate(length(min = 1, message = "feedId must not be empty"))]
    pub feed_id: String,

    pub transaction_type: TransactionType,

    #[serde(with = "dates::lenient")]
    pub date: NaiveDate,

    /// Animal the feed went to, for consumption entries
    #[serde(default)]
    pub cattle_id: Option<String>,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub quantity: Decimal,

    #[serde(default)]
    pub unit_of_measure: Option<String>,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub price_per_unit: Decimal,

    #[serde(default)]
    pub total_amount: Decimal,

    #[serde(default)]
    pub supplier: Option<String>,

    #[serde(default)]
    pub bill_number: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl FeedTransaction {
    pub fn is_consumption(&self) -> bool {
        self.transaction_type == TransactionType::Consumption
    }
}

impl Record for FeedTransaction {
    const COLLECTION: &'static str = "feed-transactions";
    const LABEL: &'static str = "Feed transaction";
    const REQUIRED: &'static [&'static str] = &["feedId", "transactionType", "date"];
    const REQUIRED_MESSAGE: &'static str = "Feed ID, transaction type, and date are required";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn normalize(&mut self) -> Result<bool, ServiceError> {
        let total = product(Self::LABEL, self.quantity, self.price_per_unit)?;
        Ok(replace_derived(&mut self.total_amount, total))
    }
}

impl Dated for FeedTransaction {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
