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

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application-wide error taxonomy.
///
/// Only `DuplicateKey` is ever handled internally (by the registry's retry
/// loop); every other variant propagates unchanged to the caller.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing input, rejected before any side effect.
    Validation { message: String, details: Value },
    /// Lookup miss. Expected and non-fatal.
    NotFound { message: String, details: Value },
    /// Unique-key violation on insert. The store is left unchanged.
    DuplicateKey { message: String, details: Value },
    /// The bounded collision-retry budget was exhausted. Indicates keyspace
    /// misconfiguration or pathological contention.
    ExhaustedRetries { message: String, details: Value },
    /// The OS randomness source is unavailable.
    Generation { message: String, details: Value },
    /// Underlying storage I/O failure.
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
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
    pub fn duplicate_key(message: impl Into<String>, details: Value) -> Self {
        Self::DuplicateKey {
            message: message.into(),
            details,
        }
    }
    pub fn exhausted_retries(message: impl Into<String>, details: Value) -> Self {
        Self::ExhaustedRetries {
            message: message.into(),
            details,
        }
    }
    pub fn generation(message: impl Into<String>, details: Value) -> Self {
        Self::Generation {
            message: message.into(),
            details,
        }
    }
    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::Validation { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::DuplicateKey { message, details } => {
                (StatusCode::CONFLICT, "duplicate_key", message, details)
            }
            AppError::ExhaustedRetries { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "exhausted_retries",
                message,
                details,
            ),
            AppError::Generation { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "generation_error",
                message,
                details,
            ),
            AppError::Storage { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                message,
                details,
            ),
        }
    }

    /// Converts the error into its serializable payload form.
    pub fn to_error_info(self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::DuplicateKey { message, .. }
            | AppError::ExhaustedRetries { message, .. }
            | AppError::Generation { message, .. }
            | AppError::Storage { message, .. } => message,
        };
        write!(f, "{message}")
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

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::duplicate_key(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::storage("Database error", json!({ "reason": e.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Short link not found", json!({ "short_id": "abc" }));
        assert_eq!(err.to_string(), "Short link not found");
    }

    #[test]
    fn test_to_error_info_carries_code() {
        let info = AppError::bad_request("Invalid URL", json!({})).to_error_info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "Invalid URL");
    }

    #[test]
    fn test_duplicate_key_maps_to_conflict() {
        let response =
            AppError::duplicate_key("Unique constraint violation", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_maps_to_unprocessable_entity() {
        let response = AppError::bad_request("Invalid URL", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
