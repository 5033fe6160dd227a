use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use models::validation::ValidationErrors;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const VALIDATION_PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";
pub const VALIDATION_PROBLEM_TITLE: &str = "One or more validation errors occurred.";

/// JSON error envelope for unexpected failures: `{"error": title, "detail": message}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &str, detail: Option<String>) -> Self {
        Self { status, title: title.to_string(), detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

/// `application/problem+json` body listing violations per field.
#[derive(Debug, Serialize)]
pub struct ValidationProblem {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub errors: ValidationErrors,
}

impl ValidationProblem {
    pub fn new(errors: ValidationErrors) -> Self {
        Self {
            kind: VALIDATION_PROBLEM_TYPE,
            title: VALIDATION_PROBLEM_TITLE,
            status: StatusCode::BAD_REQUEST.as_u16(),
            errors,
        }
    }
}

impl IntoResponse for ValidationProblem {
    fn into_response(self) -> Response {
        let mut res = (StatusCode::BAD_REQUEST, Json(self)).into_response();
        res.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/problem+json"));
        res
    }
}

/// Handler-boundary error: every service failure ends up as one of these.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Validation(ValidationProblem),
    /// Plain message body, used when a save touched no rows.
    BadRequest(String),
    Internal(JsonApiError),
}

impl ApiError {
    /// Metrics label for the failure class.
    pub fn outcome(&self) -> &'static str {
        match self {
            ApiError::NotFound => "not_found",
            ApiError::Validation(_) => "invalid",
            ApiError::BadRequest(_) => "persistence_failed",
            ApiError::Internal(_) => "error",
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Model(ModelError::Validation(errors)) => {
                ApiError::Validation(ValidationProblem::new(errors))
            }
            ServiceError::PersistenceFailed(msg) => ApiError::BadRequest(msg),
            ServiceError::Db(msg) => {
                error!(err = %msg, "database operation failed");
                ApiError::Internal(JsonApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database Error",
                    Some(msg),
                ))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Validation(problem) => problem.into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Json(msg)).into_response(),
            ApiError::Internal(e) => e.into_response(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error("database connection failed: {0}")]
    Database(String),
    #[error("server i/o: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::fornecedor::service::UPDATE_FAILED;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::not_found("fornecedor"), StatusCode::NOT_FOUND),
            (ServiceError::PersistenceFailed("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Db("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ServiceError::Model(ModelError::Validation(ValidationErrors::new())),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn validation_problem_uses_problem_json() {
        let mut errors = ValidationErrors::new();
        errors.add("nome", "The nome field is required.".into());
        let res = ApiError::Validation(ValidationProblem::new(errors)).into_response();
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/problem+json");
    }

    #[tokio::test]
    async fn persistence_failure_body_is_plain_message() {
        let err = ServiceError::PersistenceFailed(UPDATE_FAILED.into());
        let res = ApiError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!("Houve um problema ao atualizar o fornecedor"));
    }

    #[tokio::test]
    async fn database_failure_uses_error_envelope() {
        let res = ApiError::from(ServiceError::Db("connection reset".into())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Database Error");
        assert_eq!(body["detail"], "connection reset");
    }

    #[test]
    fn bind_failure_becomes_startup_error() {
        let err: StartupError = std::io::Error::new(std::io::ErrorKind::AddrInUse, "busy").into();
        assert!(matches!(err, StartupError::Io(_)));
        assert_eq!(err.to_string(), "server i/o: busy");
    }
}
