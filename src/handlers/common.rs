use crate::analytics::PeriodWindow;
use crate::errors::ServiceError;
use crate::models::dates;
use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::request::Parts,
    Json,
};
use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize};
use utoipa::IntoParams;

/// JSON body whose rejections become a 400 error envelope.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> ServiceError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            ServiceError::BadRequest("Expected a JSON request body".to_string())
        }
        other => ServiceError::BadRequest(format!("Invalid JSON body: {}", other.body_text())),
    }
}

/// Query string whose rejections become a 400 error envelope.
#[derive(Debug, Clone, Default)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(query_rejection)
    }
}

fn query_rejection(rejection: QueryRejection) -> ServiceError {
    ServiceError::BadRequest(format!("Invalid query parameters: {}", rejection.body_text()))
}

/// Optional `startDate` / `endDate` bounds shared by the report endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    /// Inclusive lower bound, `YYYY-MM-DD`
    #[serde(default, with = "dates::lenient_opt")]
    #[param(value_type = Option<String>)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound, `YYYY-MM-DD`
    #[serde(default, with = "dates::lenient_opt")]
    #[param(value_type = Option<String>)]
    pub end_date: Option<NaiveDate>,
}

impl PeriodQuery {
    pub fn window(&self) -> Result<PeriodWindow, ServiceError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(ServiceError::BadRequest(
                    "startDate must not be after endDate".to_string(),
                ));
            }
        }
        Ok(PeriodWindow::new(self.start_date, self.end_date))
    }
}
