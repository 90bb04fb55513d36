//! Pure derived-data logic behind the report endpoints.

pub mod format;
pub mod herd;
pub mod joiner;
pub mod period;

pub use format::{profit_margin, MetricFormatter, ProfitSummary};
pub use herd::{build_herd_tree, HerdNode, HerdTree};
pub use joiner::{resolve_label, resolve_labels};
pub use period::{
    aggregate, average_per_day, group_by_date, group_by_key, sum, within, DatePoint, Dated,
    PeriodAggregate, PeriodWindow,
};
