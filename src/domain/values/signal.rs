//! Buy / neutral / expensive classification of a price against a ceiling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound (as a fraction of the ceiling price) of the `Buy` band.
pub const BUY_THRESHOLD: f64 = 0.95;
/// Upper bound (as a fraction of the ceiling price) of the `Neutral` band.
pub const NEUTRAL_THRESHOLD: f64 = 1.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    #[serde(rename = "buy", alias = "comprar")]
    Buy,
    #[serde(rename = "neutral", alias = "neutro")]
    Neutral,
    #[serde(rename = "expensive", alias = "caro")]
    Expensive,
}

impl Signal {
    /// Classify `current_price` against `ceiling_price`.
    ///
    /// Bands are inclusive on their upper edge: a price of exactly 95% of the
    /// ceiling is still `Buy`, exactly 110% is still `Neutral`. Never fails;
    /// any pair of numbers maps to one of the three signals.
    pub fn classify(current_price: f64, ceiling_price: f64) -> Self {
        if current_price <= ceiling_price * BUY_THRESHOLD {
            Signal::Buy
        } else if current_price <= ceiling_price * NEUTRAL_THRESHOLD {
            Signal::Neutral
        } else {
            Signal::Expensive
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Buy => write!(f, "buy"),
            Signal::Neutral => write!(f, "neutral"),
            Signal::Expensive => write!(f, "expensive"),
        }
    }
}

impl FromStr for Signal {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" | "comprar" => Ok(Signal::Buy),
            "neutral" | "neutro" => Ok(Signal::Neutral),
            "expensive" | "caro" => Ok(Signal::Expensive),
            _ => Err(format!("Unknown signal: {s}")),
        }
    }
}
