use super::{dates, default_unit_kg, validate_amount, Record, RecordMeta};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A feed item held in stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    #[serde(flatten)]
    pub meta: RecordMeta,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1-100 characters"))]
    pub name: String,

    /// dry-fodder, green-fodder, concentrate, silage or mineral-mix
    #[validate(length(min = 1, max = 50))]
    pub feed_type: String,

    #[serde(default = "default_unit_kg")]
    pub unit_of_measure: String,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub current_stock: Decimal,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub minimum_stock: Decimal,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub average_daily_consumption: Decimal,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub price_per_unit: Decimal,

    #[serde(default)]
    pub supplier: Option<String>,

    #[serde(default)]
    pub storage_location: Option<String>,

    #[serde(default, with = "dates::lenient_opt")]
    pub last_purchase_date: Option<NaiveDate>,

    #[serde(default, with = "dates::lenient_opt")]
    pub expiry_date: Option<NaiveDate>,
}

impl Feed {
    pub fn is_low_stock(&self) -> bool {
        self.current_stock < self.minimum_stock
    }

    pub fn stock_value(&self) -> Decimal {
        self.current_stock.saturating_mul(self.price_per_unit)
    }

    /// Days the current stock lasts at the average daily consumption.
    pub fn days_of_stock_left(&self) -> Option<Decimal> {
        if self.average_daily_consumption > Decimal::ZERO {
            self.current_stock.checked_div(self.average_daily_consumption)
        } else {
            None
        }
    }
}

impl Record for Feed {
    const COLLECTION: &'static str = "feed";
    const LABEL: &'static str = "Feed";
    const REQUIRED: &'static [&'static str] = &["name", "feedType"];
    const REQUIRED_MESSAGE: &'static str = "Name and feed type are required";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}
