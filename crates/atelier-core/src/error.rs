//! # Error Types
//!
//! Domain-specific error types for atelier-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  atelier-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog / availability / price failures        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations themselves never fail; these errors come from the layers
//! around the cart (catalog lookups, price parsing, form checks).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Shop logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No catalog item has this id.
    #[error("Item not found: {0}")]
    ItemNotFound(u32),

    /// The item is marked sold out.
    #[error("{title} is sold out")]
    ItemUnavailable { title: String },

    /// Panel id outside the range offered for the item.
    #[error("Panel {panel} does not exist (choose 1-{max})")]
    PanelOutOfRange { panel: u32, max: u32 },

    /// The selected panel is out of stock.
    #[error("Panel {panel} of {title} is out of stock")]
    PanelUnavailable { title: String, panel: u32 },

    /// A display price string could not be turned into an amount.
    ///
    /// ## When This Occurs
    /// - Empty string, or only a currency symbol
    /// - Letters mixed into the digits (`"$abc"`)
    /// - More than two decimal places (`"$1.999"`)
    #[error("Invalid price '{input}': {reason}")]
    InvalidPrice { input: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These back the "required" markers on the contact and checkout forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g. an email without `@`).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
