// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        if err.is_internal() {
            return Self::internal(err.to_string());
        }
        let status = match &err {
            ApplicationError::Validation(_) | ApplicationError::Domain(DomainError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            ApplicationError::Domain(DomainError::Conflict(_)) => StatusCode::CONFLICT,
            ApplicationError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApplicationError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApplicationError::Infrastructure(_) | ApplicationError::Domain(DomainError::Persistence(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, client_message(err))
    }

    /// The detail is logged; clients get a generic message.
    fn internal(detail: String) -> Self {
        tracing::error!(error = %detail, "request failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        )
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP reason phrase, e.g. `Conflict`.
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

/// The bare reason without the variant prefix added by `Display`.
fn client_message(err: ApplicationError) -> String {
    match err {
        ApplicationError::Validation(msg)
        | ApplicationError::NotFound(msg)
        | ApplicationError::Unauthorized(msg)
        | ApplicationError::Forbidden(msg)
        | ApplicationError::Infrastructure(msg)
        | ApplicationError::Domain(
            DomainError::Validation(msg)
            | DomainError::Conflict(msg)
            | DomainError::NotFound(msg)
            | DomainError::Persistence(msg),
        ) => msg,
    }
}

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_conflict_is_409() {
        let err = HttpError::from_error(DomainError::slug_taken().into());
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.message, "slug already in use");
    }

    #[test]
    fn persistence_detail_is_not_leaked() {
        let err = HttpError::from_error(
            DomainError::Persistence("relation \"blog_posts\" does not exist".into()).into(),
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "internal server error");
    }

    #[test]
    fn missing_record_is_404() {
        let err = HttpError::from_error(DomainError::not_found("footer link").into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
