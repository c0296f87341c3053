use serde::{Deserialize, Serialize};

use super::error::LimitsError;

pub const MAX_BULK_ITEMS: usize = 100;
pub const MAX_QR_ITEM_LEN: usize = 500;
pub const MAX_SSID_LEN: usize = 32;
pub const MAX_WIFI_PASSWORD_LEN: usize = 63;
pub const REPORT_PREVIEW: usize = 3;

// Limits
//------------------------------------------------------------------------------

/// Caps applied at the input boundary, before or around validation.
///
/// Fields missing from a JSON override keep their default.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_bulk_items: usize,
    pub max_qr_item_len: usize,
    pub max_ssid_len: usize,
    pub max_wifi_password_len: usize,
    /// Failing lines spelled out in a bulk report before the rest are counted.
    pub report_preview: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_bulk_items: MAX_BULK_ITEMS,
            max_qr_item_len: MAX_QR_ITEM_LEN,
            max_ssid_len: MAX_SSID_LEN,
            max_wifi_password_len: MAX_WIFI_PASSWORD_LEN,
            report_preview: REPORT_PREVIEW,
        }
    }
}

impl Limits {
    pub fn from_json(json: &str) -> Result<Self, LimitsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn max_bulk_items(mut self, max: usize) -> Self {
        self.max_bulk_items = max;
        self
    }
}
