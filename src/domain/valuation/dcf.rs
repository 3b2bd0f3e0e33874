//! Discounted cash flow with a fixed-growth perpetuity terminal value.

use super::result::ValuationResult;
use crate::domain::values::valuation_method::ValuationMethod;
use serde::{Deserialize, Serialize};

/// Perpetuity growth rate applied after the explicit projection window.
pub const TERMINAL_GROWTH: f64 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcfInput {
    /// Current annual free cash flow, absolute currency.
    pub free_cash_flow: f64,
    /// Annual FCF growth during the projection window, 0–100.
    pub growth_rate: f64,
    /// Discount rate, 0–100. Must exceed the terminal growth rate.
    pub discount_rate: f64,
    pub projection_years: u32,
    pub total_shares: f64,
    pub current_price: f64,
    pub safety_margin: f64,
}

impl DcfInput {
    /// The terminal value is only defined while the discount rate is above
    /// the perpetuity growth rate.
    pub fn has_valid_discount_rate(&self) -> bool {
        self.discount_rate / 100.0 > TERMINAL_GROWTH
    }
}

/// Present value of the projected cash flows plus the discounted terminal
/// value, divided by the share count.
///
/// When `discount_rate / 100 <= TERMINAL_GROWTH` the Gordon growth
/// denominator is zero or negative; the valuation degrades to zero instead of
/// reporting an infinite or negative price.
pub fn calculate_dcf(input: &DcfInput) -> ValuationResult {
    let growth = 1.0 + input.growth_rate / 100.0;
    let discount_rate = input.discount_rate / 100.0;
    let discount = 1.0 + discount_rate;

    if !input.has_valid_discount_rate() {
        tracing::warn!(
            discount_rate = input.discount_rate,
            "discount rate does not exceed terminal growth, DCF degrades to zero"
        );
        return ValuationResult::from_intrinsic(
            ValuationMethod::Dcf,
            0.0,
            input.current_price,
            input.safety_margin,
        );
    }

    let mut total_pv = 0.0;
    for year in 1..=input.projection_years {
        let n = f64::from(year);
        let future_cf = input.free_cash_flow * growth.powf(n);
        total_pv += future_cf / discount.powf(n);
    }

    let years = f64::from(input.projection_years);
    let last_cf = input.free_cash_flow * growth.powf(years);
    let terminal_value = last_cf * (1.0 + TERMINAL_GROWTH) / (discount_rate - TERMINAL_GROWTH);
    total_pv += terminal_value / discount.powf(years);

    let intrinsic_value = if input.total_shares > 0.0 {
        total_pv / input.total_shares
    } else {
        0.0
    };

    tracing::debug!(
        projection_years = input.projection_years,
        total_pv,
        intrinsic_value,
        "dcf valuation"
    );

    ValuationResult::from_intrinsic(
        ValuationMethod::Dcf,
        intrinsic_value,
        input.current_price,
        input.safety_margin,
    )
}
