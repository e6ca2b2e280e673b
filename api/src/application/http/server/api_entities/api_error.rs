use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use glowguard_core::domain::common::entities::app_errors::CoreError;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::ValidationError(_) => (StatusCode::BAD_REQUEST, "E_VALIDATION"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::UnprocessableEntity(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_UNPROCESSABLE_ENTITY")
            }
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_BAD_GATEWAY"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::EmptyIngredientSet => ApiError::BadRequest(error.to_string()),
            CoreError::Lookup(lookup) => ApiError::NotFound(lookup.to_string()),
            CoreError::AllLookupsFailed { .. } => ApiError::UnprocessableEntity(error.to_string()),
            CoreError::ExternalServiceError(_) => {
                tracing::error!("external service failure: {}", error);
                ApiError::BadGateway("upstream ingredient source failed".to_string())
            }
            CoreError::Configuration(_) => {
                tracing::error!("configuration failure: {}", error);
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler sees the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}
