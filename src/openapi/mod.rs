use crate::{
    analytics::{DatePoint, PeriodWindow, ProfitSummary},
    errors::ErrorResponse,
    handlers::{analytics, cattle, health, milk},
    models::{
        Cattle, CattleStatus, Customer, CustomerStatus, Expense, Feed, FeedTransaction, Gender,
        Medicine, MedicineApplication, MilkRecord, MilkRow, MilkSession, PaymentStatus,
        RecordMeta, Sale, TransactionType, TreatmentStatus, Waste,
    },
    services::analytics::{
        AlertKind, Dashboard, DashboardAlert, FeedConsumption, FeedDisplay, FeedReport,
        FeedStockRow, LabeledTotal, MilkDailyPoint, MilkDisplay, MilkReport, MonthlyProfit,
        ProfitDisplay, ProfitReport, QuickAnalytics, Tile, WasteDisplay, WasteReport,
    },
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dairy Farm API",
        version = "1.0.0",
        description = r#"
# Dairy Farm Management API

Record keeping and reporting for a small dairy farm: cattle, milk production,
feed and medicine inventory, expenses, waste, sales and customers.

## Collections

Every collection supports `GET /api/<collection>`, `POST /api/<collection>`,
and `GET`, `PUT`, `DELETE /api/<collection>/{id}`. Collections: `cattle`,
`milk`, `feed`, `feed-transactions`, `medicine`, `medicine-application`,
`expenses`, `waste`, `sales`, `customers`.

`PUT` is a shallow merge: top-level fields in the body replace the stored ones.

## Responses

```json
{ "success": true, "data": {}, "meta": { "requestId": "...", "timestamp": "..." } }
```

```json
{ "success": false, "error": "Cattle not found", "timestamp": "..." }
```
        "#
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Cattle", description = "Herd records"),
        (name = "Milk", description = "Milk production records"),
        (name = "Analytics", description = "Period reports and dashboard"),
        (name = "Service", description = "Health and status")
    ),
    paths(
        milk::list_milk,
        milk::get_milk,
        cattle::herd_tree,
        analytics::milk_report,
        analytics::feed_report,
        analytics::waste_report,
        analytics::profit_report,
        analytics::dashboard,
        health::health_check,
        health::api_status,
    ),
    components(
        schemas(
            ErrorResponse,
            RecordMeta,
            PaymentStatus,
            Cattle,
            CattleStatus,
            Gender,
            MilkRecord,
            MilkRow,
            MilkSession,
            Feed,
            FeedTransaction,
            TransactionType,
            Medicine,
            MedicineApplication,
            TreatmentStatus,
            Expense,
            Waste,
            Sale,
            Customer,
            CustomerStatus,
            PeriodWindow,
            DatePoint,
            ProfitSummary,
            LabeledTotal,
            MilkDailyPoint,
            MilkDisplay,
            MilkReport,
            FeedStockRow,
            FeedConsumption,
            FeedDisplay,
            FeedReport,
            WasteDisplay,
            WasteReport,
            MonthlyProfit,
            ProfitDisplay,
            ProfitReport,
            Tile,
            QuickAnalytics,
            AlertKind,
            DashboardAlert,
            Dashboard,
            health::HealthReport,
            health::StatusReport,
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
