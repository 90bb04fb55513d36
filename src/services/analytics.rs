use super::milk::{cattle_id, cattle_name, join_cattle_names, sort_rows};
use crate::analytics::{
    aggregate, average_per_day, group_by_date, group_by_key, resolve_label, sum, DatePoint,
    MetricFormatter, PeriodWindow, ProfitSummary,
};
use crate::errors::ServiceError;
use crate::models::{
    Cattle, Expense, Feed, FeedTransaction, Medicine, MedicineApplication, MilkRecord, MilkRow,
    MilkSession, Sale, TreatmentStatus, Waste,
};
use crate::repositories::Repositories;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument};
use utoipa::ToSchema;

/// Detail lines shown per dashboard tile.
const TILE_DETAIL_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabeledTotal {
    pub id: String,
    pub label: String,
    pub total: Decimal,
}

// ---- milk ----

#[derive(Debug, Clone, Default)]
pub struct MilkReportFilter {
    pub window: PeriodWindow,
    pub cattle_id: Option<String>,
    pub session: Option<MilkSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MilkDailyPoint {
    pub date: NaiveDate,
    pub quantity: Decimal,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MilkDisplay {
    pub total_quantity: String,
    pub total_revenue: String,
    pub average_per_day: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MilkReport {
    pub window: PeriodWindow,
    pub total_quantity: Decimal,
    pub total_revenue: Decimal,
    pub average_per_day: Decimal,
    pub record_count: usize,
    pub daily: Vec<MilkDailyPoint>,
    pub by_session: BTreeMap<String, Decimal>,
    pub by_cattle: Vec<LabeledTotal>,
    pub records: Vec<MilkRow>,
    pub display: MilkDisplay,
}

// ---- feed ----

#[derive(Debug, Clone, Default)]
pub struct FeedReportFilter {
    pub window: PeriodWindow,
    pub feed_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedStockRow {
    pub id: String,
    pub name: String,
    pub feed_type: String,
    pub unit_of_measure: String,
    pub current_stock: Decimal,
    pub minimum_stock: Decimal,
    pub stock_value: Decimal,
    pub low_stock: bool,
    pub days_of_stock_left: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedConsumption {
    pub quantity: Decimal,
    pub cost: Decimal,
    pub count: usize,
    pub by_cattle: Vec<LabeledTotal>,
    pub by_feed: Vec<LabeledTotal>,
    pub daily: Vec<DatePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedDisplay {
    pub total_stock: String,
    pub total_stock_value: String,
    pub consumed: String,
    pub consumption_cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedReport {
    pub window: PeriodWindow,
    pub inventory: Vec<FeedStockRow>,
    pub total_stock: Decimal,
    pub total_stock_value: Decimal,
    pub low_stock_count: usize,
    pub consumption: FeedConsumption,
    pub display: FeedDisplay,
}

// ---- waste ----

#[derive(Debug, Clone, Default)]
pub struct WasteReportFilter {
    pub window: PeriodWindow,
    pub waste_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WasteDisplay {
    pub total_quantity: String,
    pub total_estimated_loss: String,
    pub average_per_day: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WasteReport {
    pub window: PeriodWindow,
    pub total_quantity: Decimal,
    pub total_estimated_loss: Decimal,
    pub average_per_day: Decimal,
    pub record_count: usize,
    pub by_type: BTreeMap<String, Decimal>,
    pub loss_by_type: BTreeMap<String, Decimal>,
    pub daily: Vec<DatePoint>,
    pub display: WasteDisplay,
}

// ---- profit ----

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProfit {
    /// `YYYY-MM`
    pub month: String,
    pub revenue: Decimal,
    pub expense: Decimal,
    pub profit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfitDisplay {
    pub revenue: String,
    pub expense: String,
    pub net: String,
    pub margin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfitReport {
    pub window: PeriodWindow,
    pub summary: ProfitSummary,
    pub sales_revenue: Decimal,
    pub milk_revenue: Decimal,
    pub monthly: Vec<MonthlyProfit>,
    pub expenses_by_category: BTreeMap<String, Decimal>,
    pub display: ProfitDisplay,
}

// ---- dashboard ----

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub total: String,
    pub details: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuickAnalytics {
    pub window: PeriodWindow,
    pub feed: Tile,
    pub milk: Tile,
    pub expense: Tile,
    pub profit: Tile,
    pub waste: Tile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAlert {
    pub kind: AlertKind,
    pub badge: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub date: NaiveDate,
    pub yesterday: QuickAnalytics,
    pub weekly: QuickAnalytics,
    pub monthly: QuickAnalytics,
    pub alerts: Vec<DashboardAlert>,
}

/// Every collection loaded once for a report.
struct Snapshot {
    cattle: Vec<Cattle>,
    milk: Vec<MilkRecord>,
    feed: Vec<Feed>,
    feed_transactions: Vec<FeedTransaction>,
    medicine: Vec<Medicine>,
    medicine_applications: Vec<MedicineApplication>,
    expenses: Vec<Expense>,
    waste: Vec<Waste>,
    sales: Vec<Sale>,
}

/// Read-only reports over the farm records.
#[derive(Clone)]
pub struct AnalyticsService {
    repositories: Repositories,
    formatter: MetricFormatter,
}

impl AnalyticsService {
    pub fn new(repositories: Repositories, formatter: MetricFormatter) -> Self {
        Self {
            repositories,
            formatter,
        }
    }

    async fn snapshot(&self) -> Result<Snapshot, ServiceError> {
        let r = &self.repositories;
        Ok(Snapshot {
            cattle: r.cattle.list().await?,
            milk: r.milk.list().await?,
            feed: r.feed.list().await?,
            feed_transactions: r.feed_transactions.list().await?,
            medicine: r.medicine.list().await?,
            medicine_applications: r.medicine_applications.list().await?,
            expenses: r.expenses.list().await?,
            waste: r.waste.list().await?,
            sales: r.sales.list().await?,
        })
    }

    #[instrument(skip(self))]
    pub async fn milk_report(&self, filter: MilkReportFilter) -> Result<MilkReport, ServiceError> {
        let cattle = self.repositories.cattle.list().await?;
        let milk: Vec<MilkRecord> = self
            .repositories
            .milk
            .list()
            .await?
            .into_iter()
            .filter(|m| {
                filter
                    .cattle_id
                    .as_deref()
                    .map_or(true, |id| m.cattle_id == id)
            })
            .filter(|m| filter.session.map_or(true, |s| m.session == s))
            .collect();

        let window = filter.window;
        let agg = aggregate(&milk, &window, |m| m.quantity);
        let total_revenue = sum(agg.filtered.iter().copied(), |m| m.total_amount);
        let average = average_per_day(agg.total, &window);

        let quantities = group_by_date(agg.filtered.iter().copied(), |m| m.quantity);
        let revenues = group_by_date(agg.filtered.iter().copied(), |m| m.total_amount);
        let daily = quantities
            .into_iter()
            .zip(revenues)
            .map(|(q, r)| MilkDailyPoint {
                date: q.date,
                quantity: q.value,
                revenue: r.value,
            })
            .collect();

        let by_session = group_by_key(
            agg.filtered.iter().copied(),
            |m| m.session.as_str().to_string(),
            |m| m.quantity,
        );
        let by_cattle = labeled(
            group_by_key(agg.filtered.iter().copied(), |m| m.cattle_id.clone(), |m| m.quantity),
            |id| resolve_label(id, &cattle, cattle_id, cattle_name),
        );

        let mut records = join_cattle_names(agg.filtered.iter().map(|m| (*m).clone()), &cattle);
        sort_rows(&mut records);

        let fmt = &self.formatter;
        debug!(records = agg.count, "milk report computed");
        Ok(MilkReport {
            window,
            total_quantity: agg.total,
            total_revenue,
            average_per_day: average,
            record_count: agg.count,
            daily,
            by_session,
            by_cattle,
            records,
            display: MilkDisplay {
                total_quantity: fmt.liters(agg.total),
                total_revenue: fmt.currency(total_revenue),
                average_per_day: fmt.liters(average),
            },
        })
    }

    #[instrument(skip(self))]
    pub async fn feed_report(&self, filter: FeedReportFilter) -> Result<FeedReport, ServiceError> {
        let cattle = self.repositories.cattle.list().await?;
        let feeds = self.repositories.feed.list().await?;
        let transactions = self.repositories.feed_transactions.list().await?;

        let type_matches = |feed_type: &str| {
            filter
                .feed_type
                .as_deref()
                .map_or(true, |wanted| feed_type.eq_ignore_ascii_case(wanted))
        };

        let inventory: Vec<FeedStockRow> = feeds
            .iter()
            .filter(|f| type_matches(&f.feed_type))
            .map(|f| FeedStockRow {
                id: f.meta.id.clone(),
                name: f.name.clone(),
                feed_type: f.feed_type.clone(),
                unit_of_measure: f.unit_of_measure.clone(),
                current_stock: f.current_stock,
                minimum_stock: f.minimum_stock,
                stock_value: f.stock_value(),
                low_stock: f.is_low_stock(),
                days_of_stock_left: f.days_of_stock_left(),
            })
            .collect();
        let total_stock = sum(&inventory, |row: &FeedStockRow| row.current_stock);
        let total_stock_value = sum(&inventory, |row: &FeedStockRow| row.stock_value);
        let low_stock_count = inventory.iter().filter(|row| row.low_stock).count();

        let consumption: Vec<FeedTransaction> = transactions
            .into_iter()
            .filter(FeedTransaction::is_consumption)
            .filter(|tx| {
                filter.feed_type.is_none()
                    || feeds
                        .iter()
                        .find(|f| f.meta.id == tx.feed_id)
                        .map_or(false, |f| type_matches(&f.feed_type))
            })
            .collect();

        let window = filter.window;
        let agg = aggregate(&consumption, &window, |tx| tx.quantity);
        let cost = sum(agg.filtered.iter().copied(), |tx| tx.total_amount);

        let by_cattle = labeled(
            group_by_key(
                agg.filtered.iter().copied(),
                |tx| tx.cattle_id.clone().unwrap_or_default(),
                |tx| tx.quantity,
            ),
            |id| {
                if id.is_empty() {
                    "Unknown".to_string()
                } else {
                    resolve_label(id, &cattle, cattle_id, cattle_name)
                }
            },
        );
        let by_feed = labeled(
            group_by_key(agg.filtered.iter().copied(), |tx| tx.feed_id.clone(), |tx| tx.quantity),
            |id| resolve_label(id, &feeds, feed_id, feed_name),
        );
        let daily = group_by_date(agg.filtered.iter().copied(), |tx| tx.quantity);

        let fmt = &self.formatter;
        Ok(FeedReport {
            window,
            display: FeedDisplay {
                total_stock: fmt.kilograms(total_stock),
                total_stock_value: fmt.currency(total_stock_value),
                consumed: fmt.kilograms(agg.total),
                consumption_cost: fmt.currency(cost),
            },
            inventory,
            total_stock,
            total_stock_value,
            low_stock_count,
            consumption: FeedConsumption {
                quantity: agg.total,
                cost,
                count: agg.count,
                by_cattle,
                by_feed,
                daily,
            },
        })
    }

    #[instrument(skip(self))]
    pub async fn waste_report(
        &self,
        filter: WasteReportFilter,
    ) -> Result<WasteReport, ServiceError> {
        let waste: Vec<Waste> = self
            .repositories
            .waste
            .list()
            .await?
            .into_iter()
            .filter(|w| {
                filter
                    .waste_type
                    .as_deref()
                    .map_or(true, |wanted| w.waste_type.eq_ignore_ascii_case(wanted))
            })
            .collect();

        let window = filter.window;
        let agg = aggregate(&waste, &window, |w| w.quantity);
        let loss = sum(agg.filtered.iter().copied(), |w| w.estimated_loss);
        let average = average_per_day(agg.total, &window);

        let fmt = &self.formatter;
        Ok(WasteReport {
            window,
            total_quantity: agg.total,
            total_estimated_loss: loss,
            average_per_day: average,
            record_count: agg.count,
            by_type: group_by_key(
                agg.filtered.iter().copied(),
                |w| w.waste_type.clone(),
                |w| w.quantity,
            ),
            loss_by_type: group_by_key(
                agg.filtered.iter().copied(),
                |w| w.waste_type.clone(),
                |w| w.estimated_loss,
            ),
            daily: group_by_date(agg.filtered.iter().copied(), |w| w.quantity),
            display: WasteDisplay {
                total_quantity: fmt.kilograms(agg.total),
                total_estimated_loss: fmt.currency(loss),
                average_per_day: fmt.kilograms(average),
            },
        })
    }

    #[instrument(skip(self))]
    pub async fn profit_report(&self, window: PeriodWindow) -> Result<ProfitReport, ServiceError> {
        let sales = self.repositories.sales.list().await?;
        let milk = self.repositories.milk.list().await?;
        let expenses = self.repositories.expenses.list().await?;

        let sales = aggregate(&sales, &window, |s| s.total_amount);
        let milk = aggregate(&milk, &window, |m| m.total_amount);
        let expenses = aggregate(&expenses, &window, |e| e.amount);

        let mut months: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
        for (month, value) in group_by_key(sales.filtered.iter().copied(), |s| month_key(s.date), |s| s.total_amount)
            .into_iter()
            .chain(group_by_key(milk.filtered.iter().copied(), |m| month_key(m.date), |m| m.total_amount))
        {
            let totals = months.entry(month).or_default();
            totals.0 = totals.0.saturating_add(value);
        }
        for (month, value) in group_by_key(expenses.filtered.iter().copied(), |e| month_key(e.date), |e| e.amount) {
            let totals = months.entry(month).or_default();
            totals.1 = totals.1.saturating_add(value);
        }
        let monthly = months
            .into_iter()
            .map(|(month, (revenue, expense))| MonthlyProfit {
                month,
                revenue,
                expense,
                profit: revenue.saturating_sub(expense),
            })
            .collect();

        let summary = ProfitSummary::new(sales.total.saturating_add(milk.total), expenses.total);
        let fmt = &self.formatter;
        Ok(ProfitReport {
            window,
            display: ProfitDisplay {
                revenue: fmt.currency(summary.revenue),
                expense: fmt.currency(summary.expense),
                net: fmt.signed_currency(summary.net),
                margin: fmt.percent(summary.margin),
            },
            summary,
            sales_revenue: sales.total,
            milk_revenue: milk.total,
            monthly,
            expenses_by_category: group_by_key(
                expenses.filtered.iter().copied(),
                |e| e.category.clone(),
                |e| e.amount,
            ),
        })
    }

    /// Quick-analytics tiles for the day before `date`, the week and the
    /// month ending on `date`, plus stock and care alerts.
    #[instrument(skip(self))]
    pub async fn dashboard(&self, date: Option<NaiveDate>) -> Result<Dashboard, ServiceError> {
        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        let snapshot = self.snapshot().await?;
        let yesterday = date - Duration::days(1);

        Ok(Dashboard {
            date,
            yesterday: self.quick(&snapshot, PeriodWindow::between(yesterday, yesterday)),
            weekly: self.quick(&snapshot, PeriodWindow::trailing_days(date, 7)),
            monthly: self.quick(&snapshot, PeriodWindow::trailing_days(date, 30)),
            alerts: self.alerts(&snapshot, date),
        })
    }

    fn quick(&self, s: &Snapshot, window: PeriodWindow) -> QuickAnalytics {
        let fmt = &self.formatter;

        // feed
        let consumption: Vec<&FeedTransaction> = s
            .feed_transactions
            .iter()
            .filter(|tx| tx.is_consumption() && window.contains(tx.date))
            .collect();
        let consumed = sum(consumption.iter().copied(), |tx| tx.quantity);
        let by_feed = group_by_key(
            consumption.iter().copied(),
            |tx| resolve_label(&tx.feed_id, &s.feed, feed_id, feed_name),
            |tx| tx.quantity,
        );
        let feed = Tile {
            total: fmt.kilograms(consumed),
            details: top_details(by_feed, |v| fmt.kilograms(v)),
            positive: None,
        };

        // milk
        let milk = aggregate(&s.milk, &window, |m| m.quantity);
        let milk_revenue = sum(milk.filtered.iter().copied(), |m| m.total_amount);
        let mut milk_details: Vec<String> = [MilkSession::Morning, MilkSession::Evening, MilkSession::Night]
            .into_iter()
            .filter_map(|session| {
                let qty = sum(
                    milk.filtered.iter().copied().filter(|m| m.session == session),
                    |m| m.quantity,
                );
                (!qty.is_zero()).then(|| format!("{}: {}", capitalize(session.as_str()), fmt.liters(qty)))
            })
            .collect();
        // checked_div is None for a zero total
        if let Some(rate) = milk_revenue.checked_div(milk.total) {
            milk_details.push(format!("Rate: {}/L", fmt.currency(rate)));
        }
        let milk_tile = Tile {
            total: fmt.liters(milk.total),
            details: milk_details,
            positive: None,
        };

        // expense
        let expenses = aggregate(&s.expenses, &window, |e| e.amount);
        let by_category = group_by_key(
            expenses.filtered.iter().copied(),
            |e| capitalize(&e.category),
            |e| e.amount,
        );
        let expense = Tile {
            total: fmt.currency(expenses.total),
            details: top_details(by_category, |v| fmt.currency(v)),
            positive: None,
        };

        // profit
        let sales_revenue = aggregate(&s.sales, &window, |sale| sale.total_amount).total;
        let summary = ProfitSummary::new(sales_revenue.saturating_add(milk_revenue), expenses.total);
        let profit = Tile {
            total: fmt.signed_currency(summary.net),
            details: vec![
                format!("Revenue: {}", fmt.currency(summary.revenue)),
                format!("Expenses: {}", fmt.currency(summary.expense)),
                format!("Margin: {}", fmt.percent(summary.margin)),
            ],
            positive: Some(summary.positive),
        };

        // waste
        let waste = aggregate(&s.waste, &window, |w| w.quantity);
        let loss = sum(waste.filtered.iter().copied(), |w| w.estimated_loss);
        let by_type = group_by_key(
            waste.filtered.iter().copied(),
            |w| capitalize(&w.waste_type),
            |w| w.quantity,
        );
        let mut waste_details = vec![format!("Value: {}", fmt.currency(loss))];
        waste_details.extend(top_details(by_type, |v| fmt.kilograms(v)));
        waste_details.truncate(TILE_DETAIL_LIMIT);
        let waste_tile = Tile {
            total: fmt.kilograms(waste.total),
            details: waste_details,
            positive: None,
        };

        QuickAnalytics {
            window,
            feed,
            milk: milk_tile,
            expense,
            profit,
            waste: waste_tile,
        }
    }

    fn alerts(&self, s: &Snapshot, date: NaiveDate) -> Vec<DashboardAlert> {
        let fmt = &self.formatter;
        let mut alerts = Vec::new();

        for app in &s.medicine_applications {
            let due = app.follow_up_date.map_or(false, |d| d <= date);
            if due && app.treatment_status == TreatmentStatus::Ongoing {
                let name = resolve_label(&app.cattle_id, &s.cattle, cattle_id, cattle_name);
                let reason = app.reason_for_treatment.as_deref().unwrap_or("treatment");
                alerts.push(DashboardAlert {
                    kind: AlertKind::Critical,
                    badge: "FOLLOW-UP".to_string(),
                    message: format!("Follow-up due: {} - {}", name, reason),
                });
            }
        }

        let yesterday = date - Duration::days(1);
        if !s.cattle.is_empty() && !s.milk.iter().any(|m| m.date == yesterday) {
            alerts.push(DashboardAlert {
                kind: AlertKind::Critical,
                badge: "MISSING".to_string(),
                message: format!("Milk data not recorded for {}", yesterday.format("%b %d, %Y")),
            });
        }

        for feed in s.feed.iter().filter(|f| f.is_low_stock()) {
            alerts.push(DashboardAlert {
                kind: AlertKind::Warning,
                badge: "LOW STOCK".to_string(),
                message: format!(
                    "{}: {} remaining (minimum {})",
                    feed.name,
                    fmt.kilograms(feed.current_stock),
                    fmt.kilograms(feed.minimum_stock)
                ),
            });
        }

        for medicine in s.medicine.iter().filter(|m| m.is_low_stock()) {
            let unit = medicine.unit_of_measure.as_deref().unwrap_or("units");
            alerts.push(DashboardAlert {
                kind: AlertKind::Warning,
                badge: "LOW STOCK".to_string(),
                message: format!(
                    "{}: {} {} remaining (minimum {})",
                    medicine.medicine_name,
                    medicine.current_stock.normalize(),
                    unit,
                    medicine.minimum_stock.normalize()
                ),
            });
        }

        alerts.sort_by_key(|a| a.kind);
        alerts
    }
}

fn feed_id(f: &Feed) -> &str {
    &f.meta.id
}

fn feed_name(f: &Feed) -> &str {
    &f.name
}

fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

fn labeled<F>(totals: BTreeMap<String, Decimal>, label_of: F) -> Vec<LabeledTotal>
where
    F: Fn(&str) -> String,
{
    totals
        .into_iter()
        .map(|(id, total)| LabeledTotal {
            label: label_of(&id),
            id,
            total,
        })
        .collect()
}

/// `"<key>: <value>"` lines, largest value first.
fn top_details<F>(totals: BTreeMap<String, Decimal>, render: F) -> Vec<String>
where
    F: Fn(Decimal) -> String,
{
    let mut entries: Vec<(String, Decimal)> = totals.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
        .into_iter()
        .take(TILE_DETAIL_LIMIT)
        .map(|(key, value)| format!("{}: {}", key, render(value)))
        .collect()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
