use crate::domain::error::DomainError;
use crate::domain::ports::quote_provider::{Quote, QuoteProvider};
use async_trait::async_trait;

const BASE_URL: &str = "https://api.twelvedata.com";

/// Twelve Data `/quote` endpoint.
pub struct TwelveDataProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TwelveDataProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

/// Twelve Data returns every number as a string, and errors in-band with
/// `status: "error"`.
#[derive(Debug, serde::Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    open: Option<String>,
    #[serde(default)]
    close: Option<String>,
    #[serde(default)]
    previous_close: Option<String>,
    #[serde(default)]
    percent_change: Option<String>,
}

fn parse_number(field: &Option<String>) -> Option<f64> {
    field
        .as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

pub(crate) fn parse_quote(symbol: &str, body: &str) -> Result<Quote, DomainError> {
    let data: QuoteResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::Quote(format!("Invalid quote payload: {e}")))?;

    if data.status.as_deref() == Some("error") {
        let message = data
            .message
            .unwrap_or_else(|| format!("Quote lookup failed for {symbol}"));
        return Err(match data.code {
            Some(404) => DomainError::NotFound(message),
            _ => DomainError::Quote(message),
        });
    }

    let open = parse_number(&data.open)
        .ok_or_else(|| DomainError::Quote(format!("No price for {symbol}")))?;

    Ok(Quote {
        symbol: data.symbol.unwrap_or_else(|| symbol.to_string()),
        name: data.name.unwrap_or_default(),
        currency: data.currency,
        open,
        close: parse_number(&data.close),
        previous_close: parse_number(&data.previous_close),
        percent_change: parse_number(&data.percent_change),
    })
}

#[async_trait]
impl QuoteProvider for TwelveDataProvider {
    fn name(&self) -> &str {
        "twelvedata"
    }

    async fn quote(&self, symbol: &str) -> Result<Quote, DomainError> {
        let url = format!("{}/quote", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("symbol", symbol), ("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| DomainError::Quote(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Quote(format!(
                "Twelve Data returned {} for {symbol}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| DomainError::Quote(e.to_string()))?;
        parse_quote(symbol, &body)
    }
}
