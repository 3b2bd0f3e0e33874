use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// PEG ratio bucket used by the Peter Lynch method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PegClassification {
    #[serde(rename = "cheap", alias = "Barato")]
    Cheap,
    #[serde(rename = "fair", alias = "Justo")]
    Fair,
    #[serde(rename = "expensive", alias = "Caro")]
    Expensive,
}

impl PegClassification {
    /// `peg < 1` is cheap, `1 <= peg <= 1.5` is fair, anything above is expensive.
    pub fn from_peg(peg: f64) -> Self {
        if peg < 1.0 {
            PegClassification::Cheap
        } else if peg <= 1.5 {
            PegClassification::Fair
        } else {
            PegClassification::Expensive
        }
    }
}

impl fmt::Display for PegClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PegClassification::Cheap => write!(f, "cheap"),
            PegClassification::Fair => write!(f, "fair"),
            PegClassification::Expensive => write!(f, "expensive"),
        }
    }
}

impl FromStr for PegClassification {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cheap" | "barato" => Ok(PegClassification::Cheap),
            "fair" | "justo" => Ok(PegClassification::Fair),
            "expensive" | "caro" => Ok(PegClassification::Expensive),
            _ => Err(format!("Unknown PEG classification: {s}")),
        }
    }
}
