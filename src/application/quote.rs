use crate::domain::error::DomainError;
use crate::domain::ports::quote_provider::{Quote, QuoteProvider};
use std::sync::Arc;

pub struct QuoteUseCase {
    provider: Arc<dyn QuoteProvider>,
}

impl QuoteUseCase {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    pub async fn lookup(&self, ticker: &str) -> Result<Quote, DomainError> {
        let symbol = ticker.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(DomainError::InvalidInput("ticker is required".into()));
        }
        tracing::debug!(provider = self.provider.name(), %symbol, "looking up quote");
        self.provider.quote(&symbol).await
    }
}
