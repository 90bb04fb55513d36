use super::records::{record_routes, service};
use crate::{
    analytics::{build_herd_tree, HerdTree},
    models::Cattle,
    ApiResponse, ApiResult, AppState,
};
use axum::{extract::State, response::Json, routing::get, Router};

pub fn cattle_routes() -> Router<AppState> {
    record_routes::<Cattle>().route("/tree", get(herd_tree))
}

/// Herd arranged by `motherId`
#[utoipa::path(
    get,
    path = "/api/cattle/tree",
    responses(
        (status = 200, description = "Every animal exactly once, calves nested under their mothers")
    ),
    tag = "Cattle"
)]
pub async fn herd_tree(State(state): State<AppState>) -> ApiResult<HerdTree> {
    let cattle = service::<Cattle>(&state).list().await?;
    Ok(Json(ApiResponse::success(build_herd_tree(&cattle))))
}
