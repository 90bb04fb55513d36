use super::{dates, validate_amount, Record, RecordMeta};
use crate::analytics::period::Dated;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CattleStatus {
    #[default]
    Active,
    Pregnant,
    Sick,
    Sold,
    Deceased,
}

/// An animal in the herd. `motherId` links calves to their mother.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cattle {
    #[serde(flatten)]
    pub meta: RecordMeta,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Breed must be between 1-100 characters"))]
    pub breed: String,

    /// cow, buffalo, heifer, calf or bull
    #[serde(default = "default_category")]
    #[validate(length(min = 1, max = 50))]
    pub category: String,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub status: CattleStatus,

    #[serde(with = "dates::lenient")]
    pub date_of_joining: NaiveDate,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub purchase_amount: Option<Decimal>,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub estimated_milk_production_daily: Option<Decimal>,

    #[serde(default)]
    pub mother_id: Option<String>,

    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    #[validate(length(max = 20))]
    pub seller_contact_number: Option<String>,

    #[serde(default)]
    #[validate(length(max = 500))]
    pub seller_address: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

fn default_category() -> String {
    "cow".to_string()
}

impl Record for Cattle {
    const COLLECTION: &'static str = "cattle";
    const LABEL: &'static str = "Cattle";
    const REQUIRED: &'static [&'static str] = &["name", "breed", "dateOfJoining"];
    const REQUIRED_MESSAGE: &'static str = "Name, breed, and date of joining are required";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}

impl Dated for Cattle {
    fn date(&self) -> NaiveDate {
        self.date_of_joining
    }
}
