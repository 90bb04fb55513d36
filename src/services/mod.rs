//! Business logic between the HTTP handlers and the repositories.

pub mod analytics;
pub mod milk;
pub mod records;

pub use analytics::AnalyticsService;
pub use milk::{MilkLedger, MilkListFilter};
pub use records::RecordService;
