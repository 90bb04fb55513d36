use super::{dates, default_unit_kg, validate_amount, Record, RecordMeta};
use crate::analytics::period::Dated;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Spoiled or discarded material and what it cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Waste {
    #[serde(flatten)]
    pub meta: RecordMeta,

    #[serde(with = "dates::lenient")]
    pub date: NaiveDate,

    /// feed, fodder, medicine or other
    #[validate(length(min = 1, max = 50))]
    pub waste_type: String,

    #[validate(custom = "validate_amount")]
    pub quantity: Decimal,

    #[serde(default = "default_unit_kg")]
    pub unit_of_measure: String,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub disposal_method: Option<String>,

    /// expired, spoiled, damaged, contaminated or excess
    #[serde(default)]
    pub reason: Option<String>,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub estimated_loss: Decimal,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl Record for Waste {
    const COLLECTION: &'static str = "waste";
    const LABEL: &'static str = "Waste record";
    const REQUIRED: &'static [&'static str] = &["date", "wasteType", "quantity"];
    const REQUIRED_MESSAGE: &'static str = "Date, waste type, and quantity are required";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}

impl Dated for Waste {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
