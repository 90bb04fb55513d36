use super::records::RecordService;
use crate::analytics::resolve_label;
use crate::errors::ServiceError;
use crate::models::{Cattle, MilkRecord, MilkRow};
use chrono::NaiveDate;

/// Optional filters accepted by the milk listing.
#[derive(Debug, Clone, Default)]
pub struct MilkListFilter {
    pub date: Option<NaiveDate>,
    pub cattle_id: Option<String>,
}

/// Milk records joined with cattle names.
#[derive(Clone)]
pub struct MilkLedger {
    milk: RecordService<MilkRecord>,
    cattle: RecordService<Cattle>,
}

impl MilkLedger {
    pub fn new(milk: RecordService<MilkRecord>, cattle: RecordService<Cattle>) -> Self {
        Self { milk, cattle }
    }

    /// Matching rows, newest date first, then by cattle name.
    pub async fn list(&self, filter: &MilkListFilter) -> Result<Vec<MilkRow>, ServiceError> {
        let cattle = self.cattle.list().await?;
        let records = self
            .milk
            .list()
            .await?
            .into_iter()
            .filter(|m| filter.date.map_or(true, |date| m.date == date))
            .filter(|m| {
                filter
                    .cattle_id
                    .as_deref()
                    .map_or(true, |id| m.cattle_id == id)
            });

        let mut rows = join_cattle_names(records, &cattle);
        sort_rows(&mut rows);
        Ok(rows)
    }

    pub async fn get(&self, id: &str) -> Result<MilkRow, ServiceError> {
        let record = self.milk.get(id).await?;
        let cattle = self.cattle.list().await?;
        join_cattle_names(std::iter::once(record), &cattle)
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::not_found("Milk record"))
    }
}

pub(crate) fn cattle_id(c: &Cattle) -> &str {
    &c.meta.id
}

pub(crate) fn cattle_name(c: &Cattle) -> &str {
    &c.name
}

pub fn join_cattle_names<I>(records: I, cattle: &[Cattle]) -> Vec<MilkRow>
where
    I: IntoIterator<Item = MilkRecord>,
{
    records
        .into_iter()
        .map(|record| MilkRow {
            cattle_name: resolve_label(&record.cattle_id, cattle, cattle_id, cattle_name),
            record,
        })
        .collect()
}

/// Date descending, then cattle name ascending.
pub fn sort_rows(rows: &mut [MilkRow]) {
    rows.sort_by(|a, b| {
        b.record
            .date
            .cmp(&a.record.date)
            .then_with(|| a.cattle_name.cmp(&b.cattle_name))
            .then_with(|| a.record.session.cmp(&b.record.session))
    });
}
