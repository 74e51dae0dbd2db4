use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application error taxonomy.
///
/// Each variant maps to exactly one HTTP status code and carries a short
/// human-readable message plus structured details for diagnostics.
#[derive(Debug)]
pub enum AppError {
    /// The submitted URL does not parse as an absolute http/https URL.
    InvalidUrl { message: String, details: Value },
    /// The requested shortcode violates the allowed-character policy.
    InvalidShortcode { message: String, details: Value },
    /// The requested shortcode is already in use.
    ShortcodeTaken { message: String, details: Value },
    /// No record exists for the given shortcode.
    NotFound { message: String, details: Value },
    /// The record exists but its expiry has passed.
    Expired { message: String, details: Value },
    /// Persistence failure not classified above.
    Store { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_shortcode(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidShortcode {
            message: message.into(),
            details,
        }
    }
    pub fn shortcode_taken(message: impl Into<String>, details: Value) -> Self {
        Self::ShortcodeTaken {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }
    pub fn store(message: impl Into<String>, details: Value) -> Self {
        Self::Store {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::InvalidUrl { message, details } => {
                (StatusCode::BAD_REQUEST, "invalid_url", message, details)
            }
            AppError::InvalidShortcode { message, details } => (
                StatusCode::BAD_REQUEST,
                "invalid_shortcode",
                message,
                details,
            ),
            AppError::ShortcodeTaken { message, details } => {
                (StatusCode::CONFLICT, "shortcode_taken", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Expired { message, details } => {
                (StatusCode::GONE, "expired", message, details)
            }
            AppError::Store { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                message,
                details,
            ),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            AppError::InvalidUrl { message, .. }
            | AppError::InvalidShortcode { message, .. }
            | AppError::ShortcodeTaken { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Expired { message, .. }
            | AppError::Store { message, .. } => message,
        };
        f.write_str(message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Translates persistence errors into the application taxonomy.
///
/// A uniqueness violation means another caller won the race on the same
/// shortcode, so it surfaces as [`AppError::ShortcodeTaken`] rather than a
/// storage-specific error.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::shortcode_taken(
                "Shortcode already in use",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "database error");
        AppError::store("Database error", json!({}))
    }
}
