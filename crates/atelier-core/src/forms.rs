//! # Forms
//!
//! Payloads for the contact and checkout forms.
//!
//! Neither form is wired to a backend: the storefront validates a
//! submission, logs it and acknowledges it. Field names in errors use the
//! form's own input names (`firstName`, `zipCode`, ...) so the frontend can
//! highlight the right input.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::{validate_email, validate_required};

/// Collects every failing field instead of stopping at the first.
fn collect(checks: Vec<Result<&str, ValidationError>>) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// =============================================================================
// Contact Form
// =============================================================================

/// The "Get in touch" form. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        collect(vec![
            validate_required("name", &self.name),
            validate_email("email", &self.email),
            validate_required("subject", &self.subject),
            validate_required("message", &self.message),
        ])
    }
}

// =============================================================================
// Checkout Form
// =============================================================================

/// Shipping and payment details. Everything but `country` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub name_on_card: String,
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        collect(vec![
            validate_email("email", &self.email),
            validate_required("firstName", &self.first_name),
            validate_required("lastName", &self.last_name),
            validate_required("address", &self.address),
            validate_required("city", &self.city),
            validate_required("state", &self.state),
            validate_required("zipCode", &self.zip_code),
            validate_required("cardNumber", &self.card_number),
            validate_required("expiryDate", &self.expiry_date),
            validate_required("cvv", &self.cvv),
            validate_required("nameOnCard", &self.name_on_card),
        ])
    }

    /// A copy safe to write to logs: card number reduced to its last four
    /// digits, CVV and expiry dropped.
    pub fn redacted(&self) -> RedactedCheckout {
        RedactedCheckout {
            email: self.email.trim().to_string(),
            name: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            zip_code: self.zip_code.trim().to_string(),
            country: self.country.trim().to_string(),
            card: mask_card_number(&self.card_number),
        }
    }
}

/// Log-safe view of a [`CheckoutForm`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactedCheckout {
    pub email: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub card: String,
}

/// `"4242 4242 4242 4242"` → `"**** 4242"`.
pub fn mask_card_number(card_number: &str) -> String {
    let digits: Vec<char> = card_number.chars().filter(char::is_ascii_digit).collect();
    let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
    format!("**** {}", tail)
}

// =============================================================================
// Unit Tests
// =============================================================================
