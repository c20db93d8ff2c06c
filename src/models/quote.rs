//! Quote wizard payload and the validated, priced quote.

use super::contact::{ContactInfo, RawContact};
use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};

/// Package block as sent by the wizard. Zero and absent mean "not chosen".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RawPackage {
    pub hours: Option<u32>,
    pub price: Option<u32>,
}

/// Add-on block as sent by the wizard. Missing keys and `null` both mean
/// "not selected".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAddons {
    pub unlimited_prints: Option<bool>,
    pub glam_booth: Option<bool>,
    pub waiting_time: Option<u32>,
}

/// Full body of a quote submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QuotePayload {
    pub contact: Option<RawContact>,
    pub package: Option<RawPackage>,
    pub addons: Option<RawAddons>,

    /// Total the browser displayed; only compared, never trusted
    pub total: Option<u32>,
}

/// A chosen package tier from the website's price list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackagePick {
    pub hours: u32,
    pub price: u32,
}

impl PackagePick {
    /// Accept a package only when both hours and price are non-zero.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingPackage` otherwise.
    pub fn new(hours: u32, price: u32) -> Result<Self, ValidationError> {
        if hours == 0 || price == 0 {
            return Err(ValidationError::MissingPackage);
        }
        Ok(Self { hours, price })
    }
}

/// Selected add-ons. `waiting_time` is in hours, 0 when not selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonSelection {
    pub unlimited_prints: bool,
    pub glam_booth: bool,
    pub waiting_time: u32,
}

impl From<RawAddons> for AddonSelection {
    fn from(raw: RawAddons) -> Self {
        Self {
            unlimited_prints: raw.unlimited_prints.unwrap_or(false),
            glam_booth: raw.glam_booth.unwrap_or(false),
            waiting_time: raw.waiting_time.unwrap_or(0),
        }
    }
}

/// Line-item prices of a quote.
///
/// Only the engine can build one, and `total` is always the sum of the
/// four line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    base_price: u32,
    unlimited_prints_price: u32,
    glam_booth_price: u32,
    waiting_time_price: u32,
    total: u32,
}

impl PriceBreakdown {
    /// Sum the line items. `None` if the total overflows.
    pub(crate) fn from_line_items(
        base_price: u32,
        unlimited_prints_price: u32,
        glam_booth_price: u32,
        waiting_time_price: u32,
    ) -> Option<Self> {
        let total = base_price
            .checked_add(unlimited_prints_price)?
            .checked_add(glam_booth_price)?
            .checked_add(waiting_time_price)?;

        Some(Self {
            base_price,
            unlimited_prints_price,
            glam_booth_price,
            waiting_time_price,
            total,
        })
    }

    pub fn base_price(&self) -> u32 {
        self.base_price
    }

    pub fn unlimited_prints_price(&self) -> u32 {
        self.unlimited_prints_price
    }

    pub fn glam_booth_price(&self) -> u32 {
        self.glam_booth_price
    }

    pub fn waiting_time_price(&self) -> u32 {
        self.waiting_time_price
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}

/// A validated and priced quote, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub contact: ContactInfo,
    pub package: PackagePick,
    pub addons: AddonSelection,
    pub breakdown: PriceBreakdown,

    /// Human-readable add-on lines in fixed display order
    pub addon_lines: Vec<String>,

    /// Total the browser submitted, if any
    pub client_total: Option<u32>,

    /// Set when `client_total` disagrees with `breakdown.total()`
    pub total_mismatch: bool,
}
