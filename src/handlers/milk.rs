use super::{
    common::QueryParams,
    records::{create_record, delete_record, service, update_record},
};
use crate::{
    models::{dates, Cattle, MilkRecord, MilkRow},
    services::{MilkLedger, MilkListFilter},
    ApiResponse, ApiResult, AppState,
};
use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

/// Milk routes: listing and lookup join cattle names, writes are the
/// generic record handlers.
pub fn milk_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_milk).post(create_record::<MilkRecord>))
        .route(
            "/:id",
            get(get_milk)
                .put(update_record::<MilkRecord>)
                .delete(delete_record::<MilkRecord>),
        )
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MilkListQuery {
    /// Only records on this day, `YYYY-MM-DD`
    #[serde(default, with = "dates::lenient_opt")]
    #[param(value_type = Option<String>)]
    pub date: Option<NaiveDate>,
    /// Only records for this animal
    pub cattle_id: Option<String>,
}

fn ledger(state: &AppState) -> MilkLedger {
    MilkLedger::new(service::<MilkRecord>(state), service::<Cattle>(state))
}

/// List milk records with cattle names, newest first
#[utoipa::path(
    get,
    path = "/api/milk",
    params(MilkListQuery),
    responses(
        (status = 200, description = "Milk records with cattle names", body = ApiResponse<Vec<MilkRow>>),
        (status = 400, description = "Invalid query parameters", body = crate::errors::ErrorResponse)
    ),
    tag = "Milk"
)]
pub async fn list_milk(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<MilkListQuery>,
) -> ApiResult<Vec<MilkRow>> {
    let filter = MilkListFilter {
        date: query.date,
        cattle_id: query.cattle_id.filter(|id| !id.trim().is_empty()),
    };
    let rows = ledger(&state).list(&filter).await?;
    Ok(Json(ApiResponse::success(rows)))
}

/// Get one milk record with its cattle name
#[utoipa::path(
    get,
    path = "/api/milk/{id}",
    params(("id" = String, Path, description = "Milk record id")),
    responses(
        (status = 200, description = "Milk record", body = ApiResponse<MilkRow>),
        (status = 404, description = "Milk record not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Milk"
)]
pub async fn get_milk(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MilkRow> {
    let row = ledger(&state).get(&id).await?;
    Ok(Json(ApiResponse::success(row)))
}
