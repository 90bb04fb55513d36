use super::{dates, validate_amount, Record, RecordMeta};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A medicine kept in the farm store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    #[serde(flatten)]
    pub meta: RecordMeta,

    #[validate(length(min = 1, max = 200, message = "Medicine name must be between 1-200 characters"))]
    pub medicine_name: String,

    /// antibiotic, vaccine, vitamin, dewormer, pain-relief or other
    #[serde(default)]
    pub medicine_type: Option<String>,

    #[serde(default)]
    pub manufacturer: Option<String>,

    #[serde(default)]
    pub batch_number: Option<String>,

    #[serde(default, with = "dates::lenient_opt")]
    pub expiry_date: Option<NaiveDate>,

    #[serde(default)]
    pub unit_of_measure: Option<String>,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub current_stock: Decimal,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub minimum_stock: Decimal,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub price_per_unit: Decimal,

    #[serde(default)]
    pub supplier: Option<String>,
}

impl Medicine {
    pub fn is_low_stock(&self) -> bool {
        self.current_stock < self.minimum_stock
    }
}

impl Record for Medicine {
    const COLLECTION: &'static str = "medicine";
    const LABEL: &'static str = "Medicine";
    const REQUIRED: &'static [&'static str] = &["medicineName"];
    const REQUIRED_MESSAGE: &'static str = "Medicine name is required";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}
