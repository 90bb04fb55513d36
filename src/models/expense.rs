use super::{dates, validate_amount, PaymentStatus, Record, RecordMeta};
use crate::analytics::period::Dated;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A ledger row for money spent on the farm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(flatten)]
    pub meta: RecordMeta,

    #[serde(with = "dates::lenient")]
    pub date: NaiveDate,

    /// feed, medicine, veterinary, labor, electricity, water, maintenance, equipment, transport or other
    #[validate(length(min = 1, max = 50))]
    pub category: String,

    #[validate(custom = "validate_amount")]
    pub amount: Decimal,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub paid_to: Option<String>,

    #[serde(default)]
    pub payment_method: Option<String>,

    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,

    #[serde(default)]
    pub bill_number: Option<String>,

    #[serde(default)]
    pub related_cattle_id: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl Record for Expense {
    const COLLECTION: &'static str = "expenses";
    const LABEL: &'static str = "Expense";
    const REQUIRED: &'static [&'static str] = &["date", "category", "amount"];
    const REQUIRED_MESSAGE: &'static str = "Date, category, and amount are required";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}

impl Dated for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
