use crate::domain::error::DomainError;
use async_trait::async_trait;
use serde::Serialize;

/// Latest market quote for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub currency: Option<String>,
    pub open: f64,
    pub close: Option<f64>,
    pub previous_close: Option<f64>,
    pub percent_change: Option<f64>,
}

impl Quote {
    /// The price used to pre-fill a valuation.
    pub fn reference_price(&self) -> f64 {
        self.open
    }
}

/// External source of market quotes. The valuation engine never calls this;
/// it only pre-fills price and company name for callers.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn quote(&self, symbol: &str) -> Result<Quote, DomainError>;
}
