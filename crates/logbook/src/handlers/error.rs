//! Handler error type and the JSON error body.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use logbook_core::auth::AuthError;
use logbook_core::journal::ValidationError;
use logbook_core::storage::{repository_error_to_status_code, RepositoryError};

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad input, checked before any storage call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested row does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A fault from the storage engine, with the operation that hit it.
    #[error("{context}")]
    Storage {
        context: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ApiError {
    /// Returns a closure wrapping a storage fault, for use with `map_err`.
    pub fn storage(context: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Storage { context, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Storage { source, .. } => {
                StatusCode::from_u16(repository_error_to_status_code(source))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::MalformedBody(rejection.body_text()))
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub status_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let data = match &self {
            ApiError::Storage { source, .. } => Some(source.to_string()),
            _ => None,
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, data = ?data, "API error");
        } else {
            tracing::warn!(status = %status, error = %self, "API error");
        }

        let body = ErrorBody {
            status_code: status.as_u16(),
            status_message: self.to_string(),
            data,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_body() {
        let (status, json) = body_json(ValidationError::TextRequired.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({ "statusCode": 400, "statusMessage": "Text required" })
        );
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, json) = body_json(ApiError::NotFound("Todo")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["statusMessage"], "Todo not found");
    }

    #[tokio::test]
    async fn test_storage_fault_carries_diagnostic() {
        let error = ApiError::storage("Failed to fetch journals")(RepositoryError::QueryFailed(
            "disk I/O error".to_string(),
        ));

        let (status, json) = body_json(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["statusCode"], 500);
        assert_eq!(json["statusMessage"], "Failed to fetch journals");
        assert_eq!(json["data"], "Query failed: disk I/O error");
    }

    #[tokio::test]
    async fn test_auth_error_is_unauthorized() {
        let (status, json) = body_json(AuthError::InvalidCredentials.into()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["statusMessage"], "Invalid credentials");
    }
}
