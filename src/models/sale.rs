use super::{dates, product, replace_derived, validate_amount, PaymentStatus, Record, RecordMeta};
use crate::analytics::period::Dated;
use crate::errors::ServiceError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A bulk milk sale. `totalAmount` is always `quantityInLiters * pricePerLiter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(flatten)]
    pub meta: RecordMeta,

    #[serde(with = "dates::lenient")]
    pub date: NaiveDate,

    #[validate(custom = "validate_amount")]
    pub quantity_in_liters: Decimal,

    #[validate(custom = "validate_amount")]
    pub price_per_liter: Decimal,

    #[serde(default)]
    pub total_amount: Decimal,

    #[serde(default)]
    pub customer_id: Option<String>,

    #[serde(default)]
    pub client_name: Option<String>,

    #[serde(default)]
    pub client_contact: Option<String>,

    #[serde(default)]
    pub payment_status: PaymentStatus,

    #[serde(default)]
    pub payment_method: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl Record for Sale {
    const COLLECTION: &'static str = "sales";
    const LABEL: &'static str = "Sale";
    const REQUIRED: &'static [&'static str] = &["date", "quantityInLiters", "pricePerLiter"];
    const REQUIRED_MESSAGE: &'static str =
        "Date, quantity in liters, and price per liter are required";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn normalize(&mut self) -> Result<bool, ServiceError> {
        let total = product(Self::LABEL, self.quantity_in_liters, self.price_per_liter)?;
        Ok(replace_derived(&mut self.total_amount, total))
    }
}

impl Dated for Sale {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
