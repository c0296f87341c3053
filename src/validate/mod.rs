pub mod batch;
pub mod checksum;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::error::{FormatError, FormatResult};
use crate::symbology::Symbology;

// Validation result
//------------------------------------------------------------------------------

/// Verdict handed back to the UI layer.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self { valid: true, error: None }
    }
}

impl From<FormatResult<()>> for ValidationResult {
    fn from(res: FormatResult<()>) -> Self {
        match res {
            Ok(()) => Self::ok(),
            Err(e) => e.into(),
        }
    }
}

impl From<FormatError> for ValidationResult {
    fn from(e: FormatError) -> Self {
        Self { valid: false, error: Some(e.to_string()) }
    }
}

// Format validator
//------------------------------------------------------------------------------

/// Validates `raw` against the symbology named by `symbology_id`.
///
/// Identifiers the validator has no rule for are accepted as is.
pub fn validate(raw: &str, symbology_id: &str) -> ValidationResult {
    if raw.trim().is_empty() {
        return FormatError::MissingData.into();
    }
    match symbology_id.parse::<Symbology>() {
        Ok(symbology) => validate_symbology(raw, symbology),
        Err(e) => {
            debug!("{e}, skipping validation");
            ValidationResult::ok()
        }
    }
}

pub fn validate_symbology(raw: &str, symbology: Symbology) -> ValidationResult {
    check(raw, symbology).into()
}

/// Runs every check in order and stops at the first defect:
/// presence, length, characters, then the symbology specific verifier.
pub fn check(raw: &str, symbology: Symbology) -> FormatResult<()> {
    let value = raw.trim();
    let res = check_cleaned(value, symbology);
    if let Err(e) = &res {
        debug!("Rejected {symbology:?} value {value:?}: {e}");
    }
    res
}

fn check_cleaned(value: &str, symbology: Symbology) -> FormatResult<()> {
    if value.is_empty() {
        return Err(FormatError::MissingData);
    }

    let rule = symbology.rule();
    if !rule.accepts_length(value.chars().count()) {
        return Err(rule.length_error());
    }

    if !rule.matches(value) {
        return Err(FormatError::InvalidChars(rule.description));
    }

    match symbology.verifier() {
        Some(verify) => verify(value),
        None => Ok(()),
    }
}
