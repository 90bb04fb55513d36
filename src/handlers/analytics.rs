use super::common::{PeriodQuery, QueryParams};
use crate::{
    analytics::PeriodWindow,
    errors::ServiceError,
    models::{dates, MilkSession},
    services::analytics::{
        Dashboard, FeedReport, FeedReportFilter, MilkReport, MilkReportFilter, ProfitReport,
        WasteReport, WasteReportFilter,
    },
    ApiResponse, ApiResult, AppState,
};
use axum::{extract::State, response::Json, routing::get, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

/// Report routes, mounted under `/api/analytics`.
pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/milk", get(milk_report))
        .route("/feed", get(feed_report))
        .route("/waste", get(waste_report))
        .route("/profit", get(profit_report))
        .route("/dashboard", get(dashboard))
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MilkReportQuery {
    #[serde(default, with = "dates::lenient_opt")]
    #[param(value_type = Option<String>)]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "dates::lenient_opt")]
    #[param(value_type = Option<String>)]
    pub end_date: Option<NaiveDate>,
    pub cattle_id: Option<String>,
    pub session: Option<MilkSession>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FeedReportQuery {
    #[serde(default, with = "dates::lenient_opt")]
    #[param(value_type = Option<String>)]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "dates::lenient_opt")]
    #[param(value_type = Option<String>)]
    pub end_date: Option<NaiveDate>,
    /// Case-insensitive feed type, e.g. `concentrate`
    pub feed_type: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct WasteReportQuery {
    #[serde(default, with = "dates::lenient_opt")]
    #[param(value_type = Option<String>)]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "dates::lenient_opt")]
    #[param(value_type = Option<String>)]
    pub end_date: Option<NaiveDate>,
    pub waste_type: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Reference day, defaults to today (UTC)
    #[serde(default, with = "dates::lenient_opt")]
    #[param(value_type = Option<String>)]
    pub date: Option<NaiveDate>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn period(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<PeriodWindow, ServiceError> {
    PeriodQuery {
        start_date,
        end_date,
    }
    .window()
}

/// Milk production and revenue over a period
#[utoipa::path(
    get,
    path = "/api/analytics/milk",
    params(MilkReportQuery),
    responses(
        (status = 200, description = "Milk report", body = ApiResponse<MilkReport>),
        (status = 400, description = "Invalid query parameters", body = crate::errors::ErrorResponse)
    ),
    tag = "Analytics"
)]
pub async fn milk_report(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<MilkReportQuery>,
) -> ApiResult<MilkReport> {
    let filter = MilkReportFilter {
        window: period(query.start_date, query.end_date)?,
        cattle_id: non_blank(query.cattle_id),
        session: query.session,
    };
    let report = state.analytics.milk_report(filter).await?;
    Ok(Json(ApiResponse::success(report)))
}

/// Feed inventory and consumption over a period
#[utoipa::path(
    get,
    path = "/api/analytics/feed",
    params(FeedReportQuery),
    responses(
        (status = 200, description = "Feed report", body = ApiResponse<FeedReport>),
        (status = 400, description = "Invalid query parameters", body = crate::errors::ErrorResponse)
    ),
    tag = "Analytics"
)]
pub async fn feed_report(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<FeedReportQuery>,
) -> ApiResult<FeedReport> {
    let filter = FeedReportFilter {
        window: period(query.start_date, query.end_date)?,
        feed_type: non_blank(query.feed_type),
    };
    let report = state.analytics.feed_report(filter).await?;
    Ok(Json(ApiResponse::success(report)))
}

/// Waste quantities and estimated losses over a period
#[utoipa::path(
    get,
    path = "/api/analytics/waste",
    params(WasteReportQuery),
    responses(
        (status = 200, description = "Waste report", body = ApiResponse<WasteReport>),
        (status = 400, description = "Invalid query parameters", body = crate::errors::ErrorResponse)
    ),
    tag = "Analytics"
)]
pub async fn waste_report(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<WasteReportQuery>,
) -> ApiResult<WasteReport> {
    let filter = WasteReportFilter {
        window: period(query.start_date, query.end_date)?,
        waste_type: non_blank(query.waste_type),
    };
    let report = state.analytics.waste_report(filter).await?;
    Ok(Json(ApiResponse::success(report)))
}

/// Revenue, expenses and margin over a period
#[utoipa::path(
    get,
    path = "/api/analytics/profit",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Profit report", body = ApiResponse<ProfitReport>),
        (status = 400, description = "Invalid query parameters", body = crate::errors::ErrorResponse)
    ),
    tag = "Analytics"
)]
pub async fn profit_report(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PeriodQuery>,
) -> ApiResult<ProfitReport> {
    let report = state.analytics.profit_report(query.window()?).await?;
    Ok(Json(ApiResponse::success(report)))
}

/// Yesterday, weekly and monthly tiles plus alerts
#[utoipa::path(
    get,
    path = "/api/analytics/dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Dashboard", body = ApiResponse<Dashboard>),
        (status = 400, description = "Invalid query parameters", body = crate::errors::ErrorResponse)
    ),
    tag = "Analytics"
)]
pub async fn dashboard(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<DashboardQuery>,
) -> ApiResult<Dashboard> {
    let dashboard = state.analytics.dashboard(query.date).await?;
    Ok(Json(ApiResponse::success(dashboard)))
}
