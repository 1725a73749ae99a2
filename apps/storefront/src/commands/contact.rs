//! # Contact Commands
//!
//! The "Get in touch" form. Messages are validated and logged, not sent.

use atelier_core::forms::ContactForm;
use tracing::{debug, info};

use super::SubmissionReceipt;
use crate::error::ApiError;

/// Accepts a contact form submission.
pub fn submit_contact(form: &ContactForm) -> Result<SubmissionReceipt, ApiError> {
    debug!("submit_contact command");
    form.validate()?;

    let receipt = SubmissionReceipt::new(None);
    info!(
        reference = %receipt.reference,
        name = form.name.trim(),
        email = form.email.trim(),
        subject = form.subject.trim(),
        message_len = form.message.trim().len(),
        "Contact form submitted"
    );

    Ok(receipt)
}
