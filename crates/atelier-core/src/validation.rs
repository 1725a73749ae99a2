//! # Validation Module
//!
//! Field-level rules behind the shop's forms and quantity pickers.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Browser                                                       │
//! │  └── `required` and `type="email"` attributes                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Required fields are present after trimming                         │
//! │  ├── Email looks like an address                                        │
//! │  └── Quantities are clamped to at least 1                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use atelier_core::validation::{clamp_quantity, validate_required};
//!
//! assert_eq!(validate_required("name", "  Ada ").unwrap(), "Ada");
//! assert!(validate_required("name", "   ").is_err());
//! assert_eq!(clamp_quantity(0), 1);
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Checks that a required field has content; returns it trimmed.
pub fn validate_required<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Checks a required email field.
///
/// ## Rules
/// - Must not be blank
/// - Exactly one `@`, with something on both sides
/// - A `.` somewhere in the domain, not at either end
/// - No whitespace
pub fn validate_email<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = validate_required(field, value)?;
    let invalid = || ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be an email address".to_string(),
    };

    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }

    Ok(value)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Clamps a quantity picker value to at least 1.
///
/// The item page's "−" button never goes below one; any value arriving from
/// elsewhere gets the same treatment.
pub fn clamp_quantity(qty: i64) -> u32 {
    u32::try_from(qty.max(1)).unwrap_or(u32::MAX)
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("city", "Kyoto").unwrap(), "Kyoto");
        assert_eq!(validate_required("city", "  Kyoto\n").unwrap(), "Kyoto");

        let err = validate_required("city", "").unwrap_err();
        assert_eq!(err.to_string(), "city is required");
        assert!(validate_required("city", " \t ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "artist@studio.com").is_ok());
        assert!(validate_email("email", " a.b@c.co.jp ").is_ok());

        assert!(matches!(
            validate_email("email", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_email("email", "no-at-sign.com").is_err());
        assert!(validate_email("email", "@studio.com").is_err());
        assert!(validate_email("email", "a@@studio.com").is_err());
        assert!(validate_email("email", "a@studio").is_err());
        assert!(validate_email("email", "a@studio.").is_err());
        assert!(validate_email("email", "a b@studio.com").is_err());
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(3), 3);
        assert_eq!(clamp_quantity(1), 1);
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(-4), 1);
        assert_eq!(clamp_quantity(i64::MAX), u32::MAX);
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(800).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }
}
