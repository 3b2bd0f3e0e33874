//! Peter Lynch fair value (`EPS × growth`) with an optional PEG reading.

use super::result::ValuationResult;
use crate::domain::values::peg_classification::PegClassification;
use crate::domain::values::valuation_method::ValuationMethod;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeterLynchInput {
    pub lpa: f64,
    /// Expected earnings growth. Used as a raw multiplier, not divided by 100.
    pub growth_rate: f64,
    /// Price / earnings ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl_ratio: Option<f64>,
    pub current_price: f64,
    pub safety_margin: f64,
}

pub fn calculate_peter_lynch(input: &PeterLynchInput) -> ValuationResult {
    let intrinsic_value = input.lpa * input.growth_rate;

    let mut result = ValuationResult::from_intrinsic(
        ValuationMethod::Lynch,
        intrinsic_value,
        input.current_price,
        input.safety_margin,
    );

    // A zero or NaN P/E counts as not supplied.
    let pl_ratio = input.pl_ratio.filter(|pl| *pl != 0.0 && !pl.is_nan());
    if let Some(pl) = pl_ratio {
        if input.growth_rate > 0.0 {
            let peg = pl / input.growth_rate;
            result.peg = Some(peg);
            result.peg_classification = Some(PegClassification::from_peg(peg));
        }
    }

    tracing::debug!(
        lpa = input.lpa,
        growth_rate = input.growth_rate,
        peg = ?result.peg,
        "peter lynch valuation"
    );

    result
}
