//! Phone number validation for the contact form.
//!
//! Visitors type numbers in any format (`(403) 555-1234`, `403.555.1234`,
//! `+1 403 555 1234`). Only the digit count and the presence of a `+` matter.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Digit count of a local number without country code.
pub const LOCAL_DIGITS: usize = 10;
/// Digit count of a number that carries a one-digit country code.
pub const INTERNATIONAL_DIGITS: usize = 11;

static NON_DIGIT: OnceLock<Regex> = OnceLock::new();

/// Why a phone number was rejected.
///
/// The `Display` text is shown to the visitor verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhoneRejection {
    #[error("Please enter a valid 10-digit phone number or 11-digit number with country code.")]
    InvalidLength { digits: usize },

    #[error("11-digit phone numbers must include a + for the country code.")]
    MissingCountryCodePrefix,
}

/// Validate a raw phone string, returning its digits when accepted.
pub fn validate_phone_number(raw: &str) -> Result<String, PhoneRejection> {
    let digits = extract_digits(raw);
    let count = digits.len();

    if count != LOCAL_DIGITS && count != INTERNATIONAL_DIGITS {
        return Err(PhoneRejection::InvalidLength { digits: count });
    }
    if count == INTERNATIONAL_DIGITS && !raw.contains('+') {
        return Err(PhoneRejection::MissingCountryCodePrefix);
    }

    Ok(digits)
}

/// Strip everything except ASCII digits.
pub fn extract_digits(raw: &str) -> String {
    let re = NON_DIGIT.get_or_init(|| Regex::new(r"[^0-9]").expect("Invalid regex"));
    re.replace_all(raw, "").into_owned()
}
