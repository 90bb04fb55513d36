//! Dairy Farm API Library
//!
//! Record keeping and period reports for a dairy farm, served over HTTP.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod analytics;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod migrator;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod tracing;

use axum::{response::Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::analytics::MetricFormatter;
use crate::repositories::Repositories;
use crate::services::AnalyticsService;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub repositories: Repositories,
    pub config: config::AppConfig,
    pub analytics: AnalyticsService,
}

impl AppState {
    pub fn new(repositories: Repositories, config: config::AppConfig) -> Self {
        let formatter = MetricFormatter::new(config.currency_symbol.clone());
        Self {
            analytics: AnalyticsService::new(repositories.clone(), formatter),
            repositories,
            config,
        }
    }
}

// Common response wrappers
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

impl ResponseMeta {
    fn capture() -> Self {
        Self {
            request_id: crate::tracing::current_request_id().map(|rid| rid.as_str().to_string()),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            meta: Some(ResponseMeta::capture()),
        }
    }

    /// Success without a payload, e.g. after a delete.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            meta: Some(ResponseMeta::capture()),
        }
    }
}

#[cfg(test)]
mod response_tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn success_response_includes_request_metadata() {
        let response =
            crate::tracing::scope_request_id(crate::tracing::RequestId::new("meta-123"), async {
                ApiResponse::success("ok")
            })
            .await;

        let meta = response.meta.expect("metadata expected");
        assert_eq!(meta.request_id.as_deref(), Some("meta-123"));
        DateTime::parse_from_rfc3339(&meta.timestamp).expect("timestamp should parse");
    }

    #[tokio::test]
    async fn message_response_omits_data() {
        let response =
            crate::tracing::scope_request_id(crate::tracing::RequestId::new("meta-del"), async {
                ApiResponse::<()>::message("Cattle deleted successfully")
            })
            .await;

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Cattle deleted successfully");
        assert!(value.get("data").is_none());
        assert_eq!(value["meta"]["requestId"], "meta-del");
    }
}

/// Standard API result type for JSON responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, errors::ServiceError>;

/// Every `/api` route: one CRUD set per collection, reports, health and status.
pub fn api_routes() -> Router<AppState> {
    use handlers::records::record_routes;
    use models::{Customer, Expense, Feed, FeedTransaction, Medicine, MedicineApplication, Sale, Waste};

    Router::new()
        .merge(handlers::health::health_routes())
        .nest("/cattle", handlers::cattle::cattle_routes())
        .nest("/milk", handlers::milk::milk_routes())
        .nest("/feed", record_routes::<Feed>())
        .nest("/feed-transactions", record_routes::<FeedTransaction>())
        .nest("/medicine", record_routes::<Medicine>())
        .nest("/medicine-application", record_routes::<MedicineApplication>())
        .nest("/expenses", record_routes::<Expense>())
        .nest("/waste", record_routes::<Waste>())
        .nest("/sales", record_routes::<Sale>())
        .nest("/customers", record_routes::<Customer>())
        .nest("/analytics", handlers::analytics::analytics_routes())
}

/// The full application router with request ids, HTTP tracing and Swagger UI.
/// CORS is left to the binary.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(openapi::swagger_ui())
        .layer(crate::tracing::configure_http_tracing())
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
