use super::{dates, product, replace_derived, validate_amount, PaymentStatus, Record, RecordMeta};
use crate::analytics::period::Dated;
use crate::errors::ServiceError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MilkSession {
    #[default]
    Morning,
    Evening,
    Night,
}

impl MilkSession {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilkSession::Morning => "morning",
            MilkSession::Evening => "evening",
            MilkSession::Night => "night",
        }
    }
}

/// One milking of one animal. `totalAmount` is always `quantity * pricePerLiter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MilkRecord {
    #[serde(flatten)]
    pub meta: RecordMeta,

    #[validate(length(min = 1, message = "cattleId must not be empty"))]
    pub cattle_id: String,

    #[serde(with = "dates::lenient")]
    pub date: NaiveDate,

    #[serde(default)]
    pub session: MilkSession,

    /// Liters
    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub quantity: Decimal,

    #[serde(default = "default_price_per_liter")]
    #[validate(custom = "validate_amount")]
    pub price_per_liter: Decimal,

    #[serde(default)]
    pub total_amount: Decimal,

    #[serde(default)]
    pub payment_status: PaymentStatus,

    /// dairy, direct-customer or self-use
    #[serde(default)]
    pub sold_to: Option<String>,

    #[serde(default)]
    pub customer_name: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

fn default_price_per_liter() -> Decimal {
    dec!(40)
}

impl Record for MilkRecord {
    const COLLECTION: &'static str = "milk";
    const LABEL: &'static str = "Milk record";
    const REQUIRED: &'static [&'static str] = &["cattleId", "date"];
    const REQUIRED_MESSAGE: &'static str = "Cattle ID and date are required";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn normalize(&mut self) -> Result<bool, ServiceError> {
        let total = product(Self::LABEL, self.quantity, self.price_per_liter)?;
        Ok(replace_derived(&mut self.total_amount, total))
    }
}

impl Dated for MilkRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A milk record joined with its animal's name for listing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MilkRow {
    #[serde(flatten)]
    pub record: MilkRecord,
    pub cattle_name: String,
}
