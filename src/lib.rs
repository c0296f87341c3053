//! # symcheck
//!
//! A Rust library for validating barcode and QR code input before it is handed
//! to an encoder. It answers one question: can this text be rendered as the
//! selected symbology, and if not, what is the first thing wrong with it?
//!
//! ## Features
//!
//! - **Rule table**: Length bounds, character set and an example for 12 common 1D symbologies
//! - **Check digits**: EAN-13, EAN-8 and UPC-A weighted mod 10 verification and computation
//! - **Structural rules**: ITF even digit count, Pharmacode value range
//! - **Batch validation**: Line by line validation for bulk generation, with a capped boundary
//! - **QR form input**: Text, WiFi and contact payload checks
//!
//! ## Quick Start
//!
//! ### Validating a single value
//!
//! ```rust
//! use symcheck::validate;
//!
//! let res = validate("5901234123457", "EAN13");
//! assert!(res.valid);
//!
//! let res = validate("5901234123458", "EAN13");
//! assert_eq!(res.error.as_deref(), Some("Invalid EAN-13 check digit"));
//!
//! // Identifiers without a rule are accepted
//! assert!(validate("anything", "DATAMATRIX").valid);
//! ```
//!
//! ### Typed checks
//!
//! ```rust
//! use symcheck::{check, FormatError, Symbology};
//!
//! assert_eq!(check("123", Symbology::Itf), Err(FormatError::ItfOddLength));
//! assert_eq!(check("12", Symbology::Ean8).unwrap_err().to_string(), "Must be exactly 8 characters");
//! ```
//!
//! ### Bulk input
//!
//! ```rust
//! use symcheck::{validate_batch, validate_bulk_symbology, BulkError, Limits, Symbology};
//!
//! let failures = validate_batch(&["5901234123457", "bad"], "EAN13");
//! assert_eq!(failures[0].line_index, 2);
//!
//! match validate_bulk_symbology("1234\n123\n", Symbology::Itf, &Limits::default()) {
//!     Err(BulkError::InvalidItems(report)) => println!("{report}"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Validation order
//!
//! Input is trimmed, then checked for presence, length, characters and finally
//! the symbology specific rule. The first failing step is reported.
//!
//! ## Logging
//!
//! Rejections are logged at `debug` level through the [`log`] facade. Install any
//! logger in the host application to see them.

pub(crate) mod common;
pub mod qr;
pub mod symbology;
pub mod validate;

pub use common::error::{
    BulkError, BulkResult, FormatError, FormatResult, LimitsError, QrField, QrInputError,
    UnknownSymbology,
};
pub use common::limits::Limits;
pub use qr::{validate_bulk_qr, validate_qr_content, QrContent};
pub use symbology::{Symbology, SymbologyRule};
pub use validate::batch::{
    split_lines, validate_batch, validate_batch_symbology, validate_bulk, validate_bulk_symbology,
    BatchFailure, BatchReport,
};
pub use validate::checksum::{ean13_check_digit, ean8_check_digit, upca_check_digit};
pub use validate::{check, validate, validate_symbology, ValidationResult};
