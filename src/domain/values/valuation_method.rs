use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four valuation heuristics the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuationMethod {
    Graham,
    Barsi,
    Dcf,
    Lynch,
}

impl ValuationMethod {
    pub const ALL: [ValuationMethod; 4] = [
        ValuationMethod::Graham,
        ValuationMethod::Barsi,
        ValuationMethod::Dcf,
        ValuationMethod::Lynch,
    ];

    /// Human-readable name carried in `ValuationResult::method`.
    pub fn display_name(&self) -> &'static str {
        match self {
            ValuationMethod::Graham => "Benjamin Graham",
            ValuationMethod::Barsi => "Luiz Barsi",
            ValuationMethod::Dcf => "Discounted Cash Flow",
            ValuationMethod::Lynch => "Peter Lynch (PEG)",
        }
    }
}

impl fmt::Display for ValuationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuationMethod::Graham => write!(f, "graham"),
            ValuationMethod::Barsi => write!(f, "barsi"),
            ValuationMethod::Dcf => write!(f, "dcf"),
            ValuationMethod::Lynch => write!(f, "lynch"),
        }
    }
}

impl FromStr for ValuationMethod {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "graham" => Ok(ValuationMethod::Graham),
            "barsi" => Ok(ValuationMethod::Barsi),
            "dcf" => Ok(ValuationMethod::Dcf),
            "lynch" | "peg" => Ok(ValuationMethod::Lynch),
            _ => Err(format!("Unknown valuation method: {s}")),
        }
    }
}
