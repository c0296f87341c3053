use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::common::error::{BulkError, BulkResult, QrInputError};
use crate::common::limits::Limits;
use crate::validate::batch::split_capped;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Valid email regex"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("Valid phone regex"));

// QR content
//------------------------------------------------------------------------------

/// Form input for a single QR code, by content type.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum QrContent {
    Text(String),
    Wifi { ssid: String, password: String },
    Contact { email: String, phone: Option<String> },
}

/// Returns every problem with the form input, in field order.
pub fn validate_qr_content(content: &QrContent, limits: &Limits) -> Vec<QrInputError> {
    let mut errors = Vec::new();
    match content {
        QrContent::Text(text) => {
            if text.trim().is_empty() {
                errors.push(QrInputError::MissingContent);
            }
        }
        QrContent::Wifi { ssid, password } => {
            let ssid = ssid.trim();
            if ssid.is_empty() {
                errors.push(QrInputError::MissingSsid);
            } else if ssid.chars().count() > limits.max_ssid_len {
                errors.push(QrInputError::SsidTooLong(limits.max_ssid_len));
            }
            // Untrimmed, surrounding spaces are part of the password.
            if password.chars().count() > limits.max_wifi_password_len {
                errors.push(QrInputError::PasswordTooLong(limits.max_wifi_password_len));
            }
        }
        QrContent::Contact { email, phone } => {
            let email = email.trim();
            if email.is_empty() {
                errors.push(QrInputError::MissingEmail);
            } else if !is_valid_email(email) {
                errors.push(QrInputError::InvalidEmail);
            }
            let phone = phone.as_deref().map(str::trim).unwrap_or_default();
            if !phone.is_empty() && !PHONE_PATTERN.is_match(phone) {
                errors.push(QrInputError::InvalidPhone);
            }
        }
    }
    if !errors.is_empty() {
        debug!("QR input rejected with {} error(s)", errors.len());
    }
    errors
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Bulk QR entry point: one payload per line, capped in count and length.
pub fn validate_bulk_qr(text: &str, limits: &Limits) -> BulkResult<Vec<String>> {
    let items = split_capped(text, limits)?;
    if items.iter().any(|item| item.chars().count() > limits.max_qr_item_len) {
        return Err(BulkError::ItemsTooLong { max: limits.max_qr_item_len });
    }
    Ok(items)
}
