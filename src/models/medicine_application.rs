use super::{dates, validate_amount, Record, RecordMeta};
use crate::analytics::period::Dated;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentStatus {
    #[default]
    Ongoing,
    Completed,
    Discontinued,
}

/// A dose of medicine given to one animal. Stock is not decremented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicineApplication {
    #[serde(flatten)]
    pub meta: RecordMeta,

    #[validate(length(min = 1, message = "cattleId must not be empty"))]
    pub cattle_id: String,

    #[validate(length(min = 1, message = "medicineId must not be empty"))]
    pub medicine_id: String,

    #[serde(with = "dates::lenient")]
    pub treatment_date: NaiveDate,

    #[serde(default)]
    pub reason_for_treatment: Option<String>,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub dosage: Option<Decimal>,

    #[serde(default)]
    pub unit_of_measure: Option<String>,

    #[serde(default)]
    #[validate(custom = "validate_amount")]
    pub cost: Decimal,

    #[serde(default)]
    pub veterinarian_name: Option<String>,

    #[serde(default, with = "dates::lenient_opt")]
    pub follow_up_date: Option<NaiveDate>,

    #[serde(default)]
    pub treatment_status: TreatmentStatus,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl Record for MedicineApplication {
    const COLLECTION: &'static str = "medicine-application";
    const LABEL: &'static str = "Medicine application";
    const REQUIRED: &'static [&'static str] = &["cattleId", "medicineId", "treatmentDate"];
    const REQUIRED_MESSAGE: &'static str =
        "Cattle ID, medicine ID, and treatment date are required";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}

impl Dated for MedicineApplication {
    fn date(&self) -> NaiveDate {
        self.treatment_date
    }
}
