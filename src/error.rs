use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Everything a request can fail with. Each variant is handled at the
/// operation boundary and rendered as a user-facing message; none of them
/// abort the session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing configuration key: {0}")]
    Configuration(&'static str),
    #[error("database unreachable: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("player roster unavailable: {0}")]
    DataUnavailable(#[source] sqlx::Error),
    #[error("{0}")]
    Validation(String),
    #[error("failed to persist entry: {0}")]
    Persistence(#[source] sqlx::Error),
    #[error("unknown session")]
    UnknownSession,
}

pub fn validation(msg: impl Into<String>) -> AppError {
    AppError::Validation(msg.into())
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) | AppError::Persistence(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Connection(_) | AppError::DataUnavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UnknownSession => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(msg) => warn!(%msg, "input rejected"),
            AppError::UnknownSession => warn!("unknown session"),
            other => error!(error = %other, "request failed"),
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_unprocessable_entity() {
        let err = validation("amount has to be larger than 0");
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "amount has to be larger than 0");
    }

    #[test]
    fn unknown_session_maps_to_not_found() {
        assert_eq!(AppError::UnknownSession.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn configuration_names_the_missing_key() {
        let err = AppError::Configuration("DB_USERNAME");
        assert!(err.to_string().contains("DB_USERNAME"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
