use thiserror::Error;

use crate::validate::batch::BatchReport;

// Format error
//------------------------------------------------------------------------------

/// Reason a value does not conform to its symbology's contract.
///
/// The `Display` text is the message shown next to the input field.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FormatError {
    #[error("Data is required")]
    MissingData,
    #[error("Must be exactly {0} characters")]
    FixedLength(usize),
    #[error("Must be {min}-{max} characters")]
    LengthRange { min: usize, max: usize },
    #[error("Invalid characters. {0}")]
    InvalidChars(&'static str),
    #[error("Invalid EAN-13 check digit")]
    Ean13CheckDigit,
    #[error("Invalid EAN-8 check digit")]
    Ean8CheckDigit,
    #[error("Invalid UPC-A check digit")]
    UpcaCheckDigit,
    #[error("ITF requires even number of digits")]
    ItfOddLength,
    #[error("Pharmacode must be between 3 and 131070")]
    PharmacodeRange,
}

pub type FormatResult<T> = Result<T, FormatError>;

// Symbology lookup
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown symbology: {0}")]
pub struct UnknownSymbology(pub String);

// Bulk input
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BulkError {
    #[error("Please enter at least one item (one per line)")]
    NoItems,
    #[error("Maximum {max} items allowed for bulk generation")]
    TooManyItems { max: usize, count: usize },
    #[error("Some items are too long (max {max} characters)")]
    ItemsTooLong { max: usize },
    #[error("{0}")]
    InvalidItems(BatchReport),
}

pub type BulkResult<T> = Result<T, BulkError>;

// QR input
//------------------------------------------------------------------------------

/// Form field a [`QrInputError`] belongs to.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QrField {
    Content,
    Ssid,
    Password,
    Email,
    Phone,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QrInputError {
    #[error("Please enter text or URL for the QR code")]
    MissingContent,
    #[error("WiFi network name (SSID) is required")]
    MissingSsid,
    #[error("SSID must be {0} characters or less")]
    SsidTooLong(usize),
    #[error("Password must be {0} characters or less")]
    PasswordTooLong(usize),
    #[error("Email address is required for contact QR")]
    MissingEmail,
    #[error("Please enter a valid email address (e.g., name@example.com)")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

impl QrInputError {
    pub fn field(&self) -> QrField {
        match self {
            Self::MissingContent => QrField::Content,
            Self::MissingSsid | Self::SsidTooLong(_) => QrField::Ssid,
            Self::PasswordTooLong(_) => QrField::Password,
            Self::MissingEmail | Self::InvalidEmail => QrField::Email,
            Self::InvalidPhone => QrField::Phone,
        }
    }
}

// Config
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
#[error("Invalid limits: {0}")]
pub struct LimitsError(#[from] serde_json::Error);
