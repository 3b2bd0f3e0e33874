//! Benjamin Graham's number: `sqrt(22.5 × EPS × BVPS)`.

use super::result::ValuationResult;
use crate::domain::values::valuation_method::ValuationMethod;
use serde::{Deserialize, Serialize};

/// 15 (max P/E) × 1.5 (max P/B).
pub const GRAHAM_MULTIPLIER: f64 = 22.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrahamInput {
    /// Earnings per share.
    pub lpa: f64,
    /// Book value per share.
    pub vpa: f64,
    pub current_price: f64,
    /// Desired safety margin, 0–100.
    pub safety_margin: f64,
}

pub fn calculate_graham(input: &GrahamInput) -> ValuationResult {
    let product = GRAHAM_MULTIPLIER * input.lpa * input.vpa;
    let intrinsic_value = if product > 0.0 { product.sqrt() } else { 0.0 };

    tracing::debug!(lpa = input.lpa, vpa = input.vpa, intrinsic_value, "graham valuation");

    ValuationResult::from_intrinsic(
        ValuationMethod::Graham,
        intrinsic_value,
        input.current_price,
        input.safety_margin,
    )
}
