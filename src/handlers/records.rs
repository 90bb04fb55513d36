use super::common::JsonBody;
use crate::{
    errors::ServiceError,
    models::Record,
    repositories::{ProvideRepository, Repositories},
    services::RecordService,
    ApiResponse, ApiResult, AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;

/// Create, read, update and delete routes for one collection, relative to
/// the collection's mount point.
pub fn record_routes<T>() -> Router<AppState>
where
    T: Record,
    Repositories: ProvideRepository<T>,
{
    Router::new()
        .route("/", get(list_records::<T>).post(create_record::<T>))
        .route(
            "/:id",
            get(get_record::<T>)
                .put(update_record::<T>)
                .delete(delete_record::<T>),
        )
}

pub(crate) fn service<T>(state: &AppState) -> RecordService<T>
where
    T: Record,
    Repositories: ProvideRepository<T>,
{
    RecordService::new(state.repositories.repository())
}

pub async fn list_records<T>(State(state): State<AppState>) -> ApiResult<Vec<T>>
where
    T: Record,
    Repositories: ProvideRepository<T>,
{
    let records = service::<T>(&state).list().await?;
    Ok(Json(ApiResponse::success(records)))
}

pub async fn get_record<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<T>
where
    T: Record,
    Repositories: ProvideRepository<T>,
{
    let record = service::<T>(&state).get(&id).await?;
    Ok(Json(ApiResponse::success(record)))
}

pub async fn create_record<T>(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<(StatusCode, Json<ApiResponse<T>>), ServiceError>
where
    T: Record,
    Repositories: ProvideRepository<T>,
{
    let record = service::<T>(&state).create(body).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(record))))
}

pub async fn update_record<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<T>
where
    T: Record,
    Repositories: ProvideRepository<T>,
{
    let record = service::<T>(&state).update(&id, body).await?;
    Ok(Json(ApiResponse::success(record)))
}

pub async fn delete_record<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()>
where
    T: Record,
    Repositories: ProvideRepository<T>,
{
    service::<T>(&state).delete(&id).await?;
    Ok(Json(ApiResponse::message(format!(
        "{} deleted successfully",
        T::LABEL
    ))))
}
