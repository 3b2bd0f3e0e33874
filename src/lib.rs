pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

use crate::application::analysis_store::AnalysisStore;
use crate::application::quote::QuoteUseCase;
use crate::application::valuate::{
    MethodComparison, MethodOutcome, ValuateUseCase, ValuationRequest,
};
use crate::config::{AppConfig, StorageBackend};
use crate::domain::entities::saved_analysis::SavedAnalysis;
use crate::domain::error::DomainError;
use crate::domain::ports::key_value_storage::KeyValueStorage;
use crate::domain::ports::quote_provider::{Quote, QuoteProvider};
use crate::domain::values::valuation_method::ValuationMethod;
use crate::infrastructure::quotes::noop::NoopQuoteProvider;
use crate::infrastructure::quotes::twelvedata::TwelveDataProvider;
use crate::infrastructure::storage::file::FileStorage;
use crate::infrastructure::storage::memory::MemoryStorage;
use crate::infrastructure::storage::sqlite::SqliteStorage;
use std::sync::Arc;

pub struct Valoracao {
    valuate_uc: ValuateUseCase,
    store: AnalysisStore,
    quote_uc: QuoteUseCase,
}

impl Valoracao {
    pub fn new(config: &AppConfig) -> Result<Self, DomainError> {
        let storage: Arc<dyn KeyValueStorage> = match config.storage {
            StorageBackend::Sqlite => Arc::new(SqliteStorage::open(&config.db_path)?),
            StorageBackend::File => Arc::new(FileStorage::new(config.data_dir.clone())),
            StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        };

        let quotes: Arc<dyn QuoteProvider> = match &config.quote_api_key {
            Some(key) => Arc::new(TwelveDataProvider::new(key.clone())),
            None => Arc::new(NoopQuoteProvider),
        };

        tracing::debug!(storage = ?config.storage, quotes = quotes.name(), "initialized");
        Ok(Self::with_providers(storage, quotes))
    }

    pub fn with_providers(
        storage: Arc<dyn KeyValueStorage>,
        quotes: Arc<dyn QuoteProvider>,
    ) -> Self {
        Self {
            valuate_uc: ValuateUseCase::new(),
            store: AnalysisStore::new(storage),
            quote_uc: QuoteUseCase::new(quotes),
        }
    }

    pub fn evaluate(
        &self,
        method: ValuationMethod,
        request: &ValuationRequest,
    ) -> Result<MethodOutcome, DomainError> {
        self.valuate_uc.evaluate(method, request)
    }

    pub fn evaluate_all(&self, request: &ValuationRequest) -> Result<Vec<MethodOutcome>, DomainError> {
        self.valuate_uc.evaluate_all(request)
    }

    pub fn compare(&self, outcomes: &[MethodOutcome]) -> Option<MethodComparison> {
        self.valuate_uc.compare(outcomes)
    }

    /// Save one history entry per outcome, in order, so the last outcome ends
    /// up first in the history.
    pub fn save_outcomes(
        &self,
        ticker: &str,
        company: &str,
        outcomes: &[MethodOutcome],
    ) -> Result<Vec<SavedAnalysis>, DomainError> {
        let mut saved = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            let analysis = SavedAnalysis::new(
                ticker,
                company,
                outcome.result.clone(),
                outcome.current_price,
            );
            self.store.save(analysis.clone())?;
            saved.push(analysis);
        }
        Ok(saved)
    }

    pub fn save(&self, analysis: SavedAnalysis) -> Result<(), DomainError> {
        self.store.save(analysis)
    }

    pub fn history(&self, limit: Option<usize>) -> Vec<SavedAnalysis> {
        let mut saved = self.store.list();
        if let Some(limit) = limit {
            saved.truncate(limit);
        }
        saved
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.store.delete_by_id(id)
    }

    pub async fn quote(&self, ticker: &str) -> Result<Quote, DomainError> {
        self.quote_uc.lookup(ticker).await
    }
}
