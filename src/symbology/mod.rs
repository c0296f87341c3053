mod rules;

pub use rules::SymbologyRule;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::{FormatResult, UnknownSymbology};
use crate::validate::checksum;

// Symbology
//------------------------------------------------------------------------------

/// Barcode standards the validator has a rule for.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbology {
    #[serde(rename = "EAN13")]
    Ean13,
    #[serde(rename = "EAN8")]
    Ean8,
    #[serde(rename = "UPC")]
    Upca,
    #[serde(rename = "UPCE")]
    Upce,
    #[serde(rename = "CODE39")]
    Code39,
    #[serde(rename = "CODE39Extended")]
    Code39Extended,
    #[serde(rename = "CODE128")]
    Code128,
    #[serde(rename = "ITF14")]
    Itf14,
    #[serde(rename = "ITF")]
    Itf,
    #[serde(rename = "MSI")]
    Msi,
    Pharmacode,
    Codabar,
}

impl Symbology {
    pub const ALL: [Symbology; 12] = [
        Self::Ean13,
        Self::Ean8,
        Self::Upca,
        Self::Upce,
        Self::Code39,
        Self::Code39Extended,
        Self::Code128,
        Self::Itf14,
        Self::Itf,
        Self::Msi,
        Self::Pharmacode,
        Self::Codabar,
    ];

    /// Identifier used by the UI's format selector.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Ean13 => "EAN13",
            Self::Ean8 => "EAN8",
            Self::Upca => "UPC",
            Self::Upce => "UPCE",
            Self::Code39 => "CODE39",
            Self::Code39Extended => "CODE39Extended",
            Self::Code128 => "CODE128",
            Self::Itf14 => "ITF14",
            Self::Itf => "ITF",
            Self::Msi => "MSI",
            Self::Pharmacode => "Pharmacode",
            Self::Codabar => "Codabar",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ean13 => "EAN-13",
            Self::Ean8 => "EAN-8",
            Self::Upca => "UPC-A",
            Self::Upce => "UPC-E",
            Self::Code39 => "CODE39",
            Self::Code39Extended => "CODE39 Extended",
            Self::Code128 => "CODE128",
            Self::Itf14 => "ITF-14",
            Self::Itf => "ITF",
            Self::Msi => "MSI",
            Self::Pharmacode => "Pharmacode",
            Self::Codabar => "Codabar",
        }
    }

    pub fn rule(self) -> &'static SymbologyRule {
        rules::rule(self)
    }

    /// Symbology specific check run after length and character checks pass.
    pub fn verifier(self) -> Option<fn(&str) -> FormatResult<()>> {
        match self {
            Self::Ean13 => Some(checksum::verify_ean13),
            Self::Ean8 => Some(checksum::verify_ean8),
            Self::Upca => Some(checksum::verify_upca),
            Self::Itf => Some(checksum::verify_itf_parity),
            Self::Pharmacode => Some(checksum::verify_pharmacode_range),
            Self::Upce
            | Self::Code39
            | Self::Code39Extended
            | Self::Code128
            | Self::Itf14
            | Self::Msi
            | Self::Codabar => None,
        }
    }

    /// Case-insensitive lookup for format names that were upper-cased on the way in.
    pub fn from_normalized(format: &str) -> Option<Self> {
        let normalized = format.trim().to_uppercase();
        Self::ALL.into_iter().find(|s| s.id().to_uppercase() == normalized)
    }

    pub fn placeholder(self) -> String {
        format!("Enter {} data (e.g., {})", self.display_name(), self.rule().example)
    }

    pub fn bulk_placeholder(self) -> String {
        format!(
            "Enter {} data (one per line)\nExample:\n{}\nAnother item",
            self.display_name(),
            self.rule().example
        )
    }
}

impl FromStr for Symbology {
    type Err = UnknownSymbology;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|s| s.id() == id).ok_or_else(|| UnknownSymbology(id.to_string()))
    }
}

impl Display for Symbology {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
