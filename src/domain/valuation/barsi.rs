//! Luiz Barsi's dividend-yield method: rescale the price by the ratio of the
//! yield actually paid to the yield the investor wants.

use super::result::ValuationResult;
use crate::domain::values::valuation_method::ValuationMethod;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarsiInput {
    /// Current dividend yield, 0–100.
    #[serde(rename = "currentDY")]
    pub current_dy: f64,
    /// Desired dividend yield, 0–100.
    #[serde(rename = "desiredDY")]
    pub desired_dy: f64,
    pub current_price: f64,
    pub safety_margin: f64,
}

impl BarsiInput {
    /// Build an input from an annual dividend per share instead of a yield.
    pub fn from_annual_dividend(
        annual_dividend: f64,
        desired_dy: f64,
        current_price: f64,
        safety_margin: f64,
    ) -> Self {
        let current_dy = if current_price > 0.0 {
            annual_dividend / current_price * 100.0
        } else {
            0.0
        };
        Self {
            current_dy,
            desired_dy,
            current_price,
            safety_margin,
        }
    }
}

pub fn calculate_barsi(input: &BarsiInput) -> ValuationResult {
    let intrinsic_value = if input.current_dy > 0.0 && input.desired_dy > 0.0 {
        input.current_price * (input.current_dy / input.desired_dy)
    } else {
        0.0
    };

    tracing::debug!(
        current_dy = input.current_dy,
        desired_dy = input.desired_dy,
        intrinsic_value,
        "barsi valuation"
    );

    ValuationResult::from_intrinsic(
        ValuationMethod::Barsi,
        intrinsic_value,
        input.current_price,
        input.safety_margin,
    )
}
