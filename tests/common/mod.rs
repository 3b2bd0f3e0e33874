//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use valoracao::domain::entities::saved_analysis::SavedAnalysis;
use valoracao::domain::error::DomainError;
use valoracao::domain::ports::quote_provider::{Quote, QuoteProvider};
use valoracao::domain::valuation::ValuationResult;
use valoracao::domain::values::valuation_method::ValuationMethod;
use valoracao::infrastructure::quotes::noop::NoopQuoteProvider;
use valoracao::infrastructure::storage::memory::MemoryStorage;
use valoracao::Valoracao;

pub fn setup() -> Valoracao {
    Valoracao::with_providers(Arc::new(MemoryStorage::new()), Arc::new(NoopQuoteProvider))
}

pub fn make_analysis(ticker: &str, intrinsic_value: f64, current_price: f64) -> SavedAnalysis {
    let result =
        ValuationResult::from_intrinsic(ValuationMethod::Graham, intrinsic_value, current_price, 25.0);
    SavedAnalysis::new(ticker, "Test Co", result, current_price)
}

/// Quote provider returning a fixed quote for one symbol.
pub struct StubQuoteProvider {
    pub quote: Quote,
}

impl StubQuoteProvider {
    pub fn new(symbol: &str, name: &str, open: f64) -> Self {
        Self {
            quote: Quote {
                symbol: symbol.to_string(),
                name: name.to_string(),
                currency: Some("BRL".into()),
                open,
                close: None,
                previous_close: None,
                percent_change: None,
            },
        }
    }
}

#[async_trait]
impl QuoteProvider for StubQuoteProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn quote(&self, symbol: &str) -> Result<Quote, DomainError> {
        if symbol == self.quote.symbol {
            Ok(self.quote.clone())
        } else {
            Err(DomainError::NotFound(format!("Unknown symbol: {symbol}")))
        }
    }
}
