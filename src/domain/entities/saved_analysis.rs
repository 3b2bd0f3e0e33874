use crate::domain::valuation::result::null_as_zero;
use crate::domain::valuation::ValuationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder written when the caller leaves ticker or company blank.
pub const UNKNOWN_LABEL: &str = "N/A";

/// A valuation snapshot kept in the history. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAnalysis {
    pub id: String,
    pub ticker: String,
    pub company: String,
    pub date: DateTime<Utc>,
    pub method: String,
    pub result: ValuationResult,
    #[serde(deserialize_with = "null_as_zero")]
    pub current_price: f64,
}

impl SavedAnalysis {
    pub fn new(ticker: &str, company: &str, result: ValuationResult, current_price: f64) -> Self {
        let ticker = ticker.trim().to_uppercase();
        let company = company.trim();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            ticker: if ticker.is_empty() {
                UNKNOWN_LABEL.to_string()
            } else {
                ticker
            },
            company: if company.is_empty() {
                UNKNOWN_LABEL.to_string()
            } else {
                company.to_string()
            },
            date: Utc::now(),
            method: result.method.clone(),
            result,
            current_price,
        }
    }

    /// One history row: ticker, method, price → ceiling, upside, date.
    pub fn summary_line(&self) -> String {
        format!(
            "{} [{}] {} | {:.2} -> ceiling {:.2} | {:+.1}% | {} | {}",
            self.ticker,
            self.result.signal,
            self.method,
            self.current_price,
            self.result.ceiling_price,
            self.result.upside_percent,
            self.date.format("%Y-%m-%d"),
            self.id,
        )
    }
}
