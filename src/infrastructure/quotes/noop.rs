use crate::domain::error::DomainError;
use crate::domain::ports::quote_provider::{Quote, QuoteProvider};
use async_trait::async_trait;

/// Used when no quote API key is configured.
pub struct NoopQuoteProvider;

#[async_trait]
impl QuoteProvider for NoopQuoteProvider {
    fn name(&self) -> &str {
        "noop"
    }

    async fn quote(&self, _symbol: &str) -> Result<Quote, DomainError> {
        Err(DomainError::Config("no quote API key configured".into()))
    }
}
