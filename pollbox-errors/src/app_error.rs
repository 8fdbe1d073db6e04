use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    DuplicateVote(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Forbidden(_) => 403,
            Self::DuplicateVote(_) => 409,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }
}

// Server function errors cross the wire as flat strings; classify them back
// so the client can distinguish a duplicate vote from a transport hiccup.
impl FromStr for AppError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if lower.contains("already voted") {
            Ok(AppError::DuplicateVote(s.to_string()))
        } else if lower.contains("not found") {
            Ok(AppError::NotFound(s.to_string()))
        } else if lower.contains("forbidden") || lower.contains("permission") {
            Ok(AppError::Forbidden(s.to_string()))
        } else if lower.contains("invalid") || lower.contains("required") || lower.contains("must be") {
            Ok(AppError::Validation(s.to_string()))
        } else {
            Ok(AppError::Internal(s.to_string()))
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorBody {
        status: &'static str,
        #[serde(rename = "statusCode")]
        status_code: u16,
        message: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let message = match &self {
                AppError::Database(msg) | AppError::Internal(msg) => {
                    tracing::error!("internal error: {msg}");
                    "Internal Server Error".to_string()
                }
                other => other.to_string(),
            };
            let status_code = self.status_code();
            let status = StatusCode::from_u16(status_code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            (
                status,
                Json(ErrorBody {
                    status: "error",
                    status_code,
                    message,
                }),
            )
                .into_response()
        }
    }
}
