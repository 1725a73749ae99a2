//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Command Function: Result<T, ApiError>                                  │
//! │         │                                                               │
//! │         ├── Catalog lookup failed? ── CoreError::ItemNotFound ───┐      │
//! │         ├── Sold out?              ── CoreError::ItemUnavailable ┤      │
//! │         ├── Form incomplete?       ── Vec<ValidationError> ──────┤      │
//! │         │                                                        ▼      │
//! │         │                                                    ApiError   │
//! │         ▼                                                        │      │
//! │  Success ───────────────────────────────────────────────────────►│      │
//! │                                                                         │
//! │  Frontend receives { code: "UNAVAILABLE", message: "...", fields: [] } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use atelier_core::{CoreError, ValidationError};
use serde::Serialize;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "email is required; cvv is required",
///   "fields": ["email", "cvv"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Form inputs to highlight, if the error came from a form
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown catalog item
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Item or panel is sold out, or the panel does not exist
    Unavailable,

    /// Something that should not happen (e.g. serialization failure)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => ApiError::not_found("Item", id),
            CoreError::ItemUnavailable { .. }
            | CoreError::PanelUnavailable { .. }
            | CoreError::PanelOutOfRange { .. } => {
                ApiError::new(ErrorCode::Unavailable, err.to_string())
            }
            CoreError::InvalidPrice { .. } => ApiError::validation(err.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        vec![err].into()
    }
}

/// All failing fields of a form, reported together.
impl From<Vec<ValidationError>> for ApiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        ApiError {
            code: ErrorCode::ValidationError,
            message,
            fields: errors.iter().map(|e| e.field().to_string()).collect(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Serialization failed: {}", err);
        ApiError::internal("Could not record submission")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::ItemNotFound(12).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item not found: 12");

        let err: ApiError = CoreError::ItemUnavailable {
            title: "Trade Winds Hoodie".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::Unavailable);
    }

    #[test]
    fn test_validation_errors_collect_fields() {
        let err: ApiError = vec![
            ValidationError::Required {
                field: "email".to_string(),
            },
            ValidationError::Required {
                field: "cvv".to_string(),
            },
        ]
        .into();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "email is required; cvv is required");
        assert_eq!(err.fields, vec!["email", "cvv"]);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("Item", 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "NOT_FOUND", "message": "Item not found: 3" })
        );
    }
}
