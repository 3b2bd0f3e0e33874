mod common;

use common::{setup, StubQuoteProvider};
use std::sync::Arc;
use valoracao::application::valuate::{
    BarsiParams, DcfParams, DividendInput, GrahamParams, PeterLynchParams, ValuationRequest,
};
use valoracao::config::{AppConfig, StorageBackend};
use valoracao::domain::error::DomainError;
use valoracao::domain::values::signal::Signal;
use valoracao::domain::values::valuation_method::ValuationMethod;
use valoracao::infrastructure::storage::memory::MemoryStorage;
use valoracao::Valoracao;

fn request() -> ValuationRequest {
    ValuationRequest {
        current_price: 30.0,
        safety_margin: 25.0,
        graham: Some(GrahamParams { lpa: 3.0, vpa: 20.0 }),
        barsi: Some(BarsiParams {
            dividend: DividendInput::Yield(8.0),
            desired_dy: 6.0,
        }),
        dcf: Some(DcfParams {
            free_cash_flow: 2_000_000.0,
            growth_rate: 10.0,
            discount_rate: 12.0,
            projection_years: 10,
            total_shares: 1_000_000.0,
        }),
        peter_lynch: Some(PeterLynchParams {
            lpa: 3.0,
            growth_rate: 12.0,
            pl_ratio: Some(10.0),
        }),
    }
}

#[test]
fn test_evaluate_save_list_delete() {
    let app = setup();

    let outcome = app.evaluate(ValuationMethod::Graham, &request()).unwrap();
    // sqrt(22.5 * 3 * 20) = 36.74, ceiling 27.56; a price of 30 sits in the neutral band.
    assert!((outcome.result.intrinsic_value - 1350.0_f64.sqrt()).abs() < 1e-9);
    assert_eq!(outcome.result.signal, Signal::Neutral);

    let saved = app.save_outcomes("itsa4", "", &[outcome]).unwrap();
    assert_eq!(saved[0].ticker, "ITSA4");
    assert_eq!(saved[0].company, "N/A");

    let history = app.history(None);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0], saved[0]);

    app.delete(&saved[0].id).unwrap();
    assert!(app.history(None).is_empty());
}

#[test]
fn test_evaluate_all_then_save_puts_last_method_first() {
    let app = setup();
    let outcomes = app.evaluate_all(&request()).unwrap();
    assert_eq!(outcomes.len(), 4);

    app.save_outcomes("TAEE11", "Taesa", &outcomes).unwrap();
    let history = app.history(None);
    let methods: Vec<_> = history.iter().map(|a| a.method.as_str()).collect();
    assert_eq!(
        methods,
        vec![
            "Peter Lynch (PEG)",
            "Discounted Cash Flow",
            "Luiz Barsi",
            "Benjamin Graham"
        ]
    );
    assert_eq!(app.history(Some(2)).len(), 2);

    let cmp = app.compare(&outcomes).unwrap();
    assert_eq!(cmp.rows.len(), 4);
    assert_eq!(cmp.current_price, 30.0);
}

#[test]
fn test_missing_price_is_rejected() {
    let app = setup();
    let mut req = request();
    req.current_price = 0.0;
    let err = app.evaluate(ValuationMethod::Barsi, &req).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[tokio::test]
async fn test_quote_lookup_with_stub_provider() {
    let app = Valoracao::with_providers(
        Arc::new(MemoryStorage::new()),
        Arc::new(StubQuoteProvider::new("PETR4", "Petrobras", 37.25)),
    );
    let quote = app.quote(" petr4 ").await.unwrap();
    assert_eq!(quote.symbol, "PETR4");
    assert_eq!(quote.reference_price(), 37.25);

    assert!(matches!(
        app.quote("VALE3").await,
        Err(DomainError::NotFound(_))
    ));
    assert!(matches!(
        app.quote("  ").await,
        Err(DomainError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_quote_without_api_key_is_config_error() {
    let app = setup();
    assert!(matches!(app.quote("PETR4").await, Err(DomainError::Config(_))));
}

#[test]
fn test_new_from_config_memory_backend() {
    let config = AppConfig {
        storage: StorageBackend::Memory,
        ..AppConfig::default()
    };
    let app = Valoracao::new(&config).unwrap();
    let outcome = app.evaluate(ValuationMethod::Lynch, &request()).unwrap();
    app.save_outcomes("BBSE3", "BB Seguridade", &[outcome]).unwrap();
    assert_eq!(app.history(None).len(), 1);
}

#[test]
fn test_new_from_config_file_backend() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        storage: StorageBackend::File,
        data_dir: dir.path().to_path_buf(),
        ..AppConfig::default()
    };
    let app = Valoracao::new(&config).unwrap();
    let outcome = app.evaluate(ValuationMethod::Barsi, &request()).unwrap();
    app.save_outcomes("TRPL4", "ISA CTEEP", &[outcome]).unwrap();

    let reopened = Valoracao::new(&config).unwrap();
    assert_eq!(reopened.history(None).len(), 1);
}
