use super::{dates, Record, RecordMeta};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
}

/// A regular milk buyer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(flatten)]
    pub meta: RecordMeta,

    #[validate(length(min = 1, max = 200, message = "Name must be between 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "Phone must be between 1-20 characters"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(max = 500))]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,

    #[serde(default = "today", with = "dates::lenient")]
    pub join_date: NaiveDate,

    #[serde(default)]
    pub status: CustomerStatus,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

impl Record for Customer {
    const COLLECTION: &'static str = "customers";
    const LABEL: &'static str = "Customer";
    const REQUIRED: &'static [&'static str] = &["name", "phone"];
    const REQUIRED_MESSAGE: &'static str = "Name and phone are required";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}
