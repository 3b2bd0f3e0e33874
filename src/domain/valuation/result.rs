use crate::domain::values::peg_classification::PegClassification;
use crate::domain::values::signal::Signal;
use crate::domain::values::valuation_method::ValuationMethod;
use serde::{Deserialize, Deserializer, Serialize};

/// Output shared by every valuation method.
///
/// Field names serialize in camelCase so stored history stays readable by
/// older versions of the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    #[serde(deserialize_with = "null_as_zero")]
    pub intrinsic_value: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub ceiling_price: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub safety_margin_percent: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub upside_percent: f64,
    pub signal: Signal,
    pub method: String,
    /// Only set by the Peter Lynch method when a P/E ratio was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peg_classification: Option<PegClassification>,
}

/// Older versions stored non-finite numbers, which JSON writes as `null`.
/// Those read back as zero, the same value a degenerate valuation gets today.
pub(crate) fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// `intrinsic_value × (1 − safety_margin / 100)`.
pub fn ceiling_price(intrinsic_value: f64, safety_margin: f64) -> f64 {
    intrinsic_value * (1.0 - safety_margin / 100.0)
}

impl ValuationResult {
    /// Derive ceiling price, safety margin, upside and signal from an
    /// intrinsic value.
    ///
    /// A non-finite intrinsic value is replaced by zero so the result can
    /// always be serialized to JSON.
    pub fn from_intrinsic(
        method: ValuationMethod,
        intrinsic_value: f64,
        current_price: f64,
        safety_margin: f64,
    ) -> Self {
        let intrinsic_value = if intrinsic_value.is_finite() {
            intrinsic_value
        } else {
            tracing::warn!(%method, "non-finite intrinsic value, degrading to zero");
            0.0
        };

        let ceiling_price = ceiling_price(intrinsic_value, safety_margin);
        let safety_margin_percent = if intrinsic_value > 0.0 {
            ((intrinsic_value - current_price) / intrinsic_value) * 100.0
        } else {
            0.0
        };
        let upside_percent = if current_price > 0.0 {
            ((ceiling_price - current_price) / current_price) * 100.0
        } else {
            0.0
        };

        Self {
            intrinsic_value,
            ceiling_price,
            safety_margin_percent,
            upside_percent,
            signal: Signal::classify(current_price, ceiling_price),
            method: method.display_name().to_string(),
            peg: None,
            peg_classification: None,
        }
    }

    /// True when the inputs were degenerate and the method fell back to zero.
    pub fn is_degenerate(&self) -> bool {
        self.intrinsic_value == 0.0
    }
}
