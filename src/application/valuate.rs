//! Caller-side validation and dispatch over the valuation engine.
//!
//! The engine itself never rejects input. This layer applies the form rules:
//! price and safety margin are mandatory, and a method only runs when every
//! one of its fields is filled in (non-zero).

use crate::domain::error::DomainError;
use crate::domain::valuation::{
    calculate_barsi, calculate_dcf, calculate_graham, calculate_peter_lynch, BarsiInput, DcfInput,
    GrahamInput, PeterLynchInput, ValuationResult, TERMINAL_GROWTH,
};
use crate::domain::values::signal::Signal;
use crate::domain::values::valuation_method::ValuationMethod;
use serde::{Deserialize, Serialize};

fn filled(x: f64) -> bool {
    x != 0.0 && x.is_finite()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrahamParams {
    pub lpa: f64,
    pub vpa: f64,
}

impl GrahamParams {
    fn is_complete(&self) -> bool {
        filled(self.lpa) && filled(self.vpa)
    }
}

/// How the current dividend is expressed for the Barsi method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividendInput {
    /// Current dividend yield, 0–100.
    Yield(f64),
    /// Annual dividend per share, converted to a yield at the current price.
    AnnualDividend(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarsiParams {
    pub dividend: DividendInput,
    pub desired_dy: f64,
}

impl BarsiParams {
    fn is_complete(&self) -> bool {
        let dividend = match self.dividend {
            DividendInput::Yield(v) | DividendInput::AnnualDividend(v) => v,
        };
        filled(dividend) && filled(self.desired_dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcfParams {
    pub free_cash_flow: f64,
    pub growth_rate: f64,
    pub discount_rate: f64,
    pub projection_years: u32,
    pub total_shares: f64,
}

impl DcfParams {
    fn is_complete(&self) -> bool {
        filled(self.free_cash_flow)
            && filled(self.growth_rate)
            && filled(self.discount_rate)
            && self.projection_years > 0
            && filled(self.total_shares)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeterLynchParams {
    pub lpa: f64,
    pub growth_rate: f64,
    pub pl_ratio: Option<f64>,
}

impl PeterLynchParams {
    fn is_complete(&self) -> bool {
        filled(self.lpa) && filled(self.growth_rate)
    }
}

/// Everything a caller knows about one stock. Methods without parameters
/// are skipped by `evaluate_all`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationRequest {
    pub current_price: f64,
    pub safety_margin: f64,
    pub graham: Option<GrahamParams>,
    pub barsi: Option<BarsiParams>,
    pub dcf: Option<DcfParams>,
    pub peter_lynch: Option<PeterLynchParams>,
}

impl ValuationRequest {
    pub fn new(current_price: f64, safety_margin: f64) -> Self {
        Self {
            current_price,
            safety_margin,
            ..Default::default()
        }
    }

    fn is_complete(&self, method: ValuationMethod) -> bool {
        match method {
            ValuationMethod::Graham => self.graham.is_some_and(|p| p.is_complete()),
            ValuationMethod::Barsi => self.barsi.is_some_and(|p| p.is_complete()),
            ValuationMethod::Dcf => self.dcf.is_some_and(|p| p.is_complete()),
            ValuationMethod::Lynch => self.peter_lynch.is_some_and(|p| p.is_complete()),
        }
    }
}

/// One method's result together with the price it was computed against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodOutcome {
    pub key: ValuationMethod,
    pub result: ValuationResult,
    pub current_price: f64,
}

fn validate_common(request: &ValuationRequest) -> Result<(), DomainError> {
    if !filled(request.current_price) || !filled(request.safety_margin) {
        return Err(DomainError::InvalidInput(
            "current price and safety margin are required".into(),
        ));
    }
    Ok(())
}

fn run(method: ValuationMethod, request: &ValuationRequest) -> Result<MethodOutcome, DomainError> {
    let price = request.current_price;
    let margin = request.safety_margin;

    let result = match (method, request) {
        (ValuationMethod::Graham, ValuationRequest { graham: Some(p), .. }) => {
            calculate_graham(&GrahamInput {
                lpa: p.lpa,
                vpa: p.vpa,
                current_price: price,
                safety_margin: margin,
            })
        }
        (ValuationMethod::Barsi, ValuationRequest { barsi: Some(p), .. }) => {
            let input = match p.dividend {
                DividendInput::Yield(current_dy) => BarsiInput {
                    current_dy,
                    desired_dy: p.desired_dy,
                    current_price: price,
                    safety_margin: margin,
                },
                DividendInput::AnnualDividend(dividend) => {
                    BarsiInput::from_annual_dividend(dividend, p.desired_dy, price, margin)
                }
            };
            calculate_barsi(&input)
        }
        (ValuationMethod::Dcf, ValuationRequest { dcf: Some(p), .. }) => {
            let input = DcfInput {
                free_cash_flow: p.free_cash_flow,
                growth_rate: p.growth_rate,
                discount_rate: p.discount_rate,
                projection_years: p.projection_years,
                total_shares: p.total_shares,
                current_price: price,
                safety_margin: margin,
            };
            if !input.has_valid_discount_rate() {
                return Err(DomainError::InvalidInput(format!(
                    "discount rate must be above the {:.0}% terminal growth rate",
                    TERMINAL_GROWTH * 100.0
                )));
            }
            calculate_dcf(&input)
        }
        (ValuationMethod::Lynch, ValuationRequest { peter_lynch: Some(p), .. }) => {
            calculate_peter_lynch(&PeterLynchInput {
                lpa: p.lpa,
                growth_rate: p.growth_rate,
                pl_ratio: p.pl_ratio,
                current_price: price,
                safety_margin: margin,
            })
        }
        _ => {
            return Err(DomainError::InvalidInput(format!(
                "missing parameters for method {method}"
            )))
        }
    };

    Ok(MethodOutcome {
        key: method,
        result,
        current_price: price,
    })
}

/// Run a single method.
pub fn evaluate(
    method: ValuationMethod,
    request: &ValuationRequest,
) -> Result<MethodOutcome, DomainError> {
    validate_common(request)?;
    if !request.is_complete(method) {
        return Err(DomainError::InvalidInput(format!(
            "fill all fields of the {method} method"
        )));
    }
    run(method, request)
}

/// Run every method whose fields are complete, in Graham, Barsi, DCF, Lynch order.
pub fn evaluate_all(request: &ValuationRequest) -> Result<Vec<MethodOutcome>, DomainError> {
    validate_common(request)?;
    let outcomes = ValuationMethod::ALL
        .into_iter()
        .filter(|m| request.is_complete(*m))
        .map(|m| run(m, request))
        .collect::<Result<Vec<_>, _>>()?;
    if outcomes.is_empty() {
        return Err(DomainError::InvalidInput(
            "fill all fields of at least one method".into(),
        ));
    }
    Ok(outcomes)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    /// Last word of the method name, e.g. "Graham" or "(PEG)".
    pub label: String,
    pub method: String,
    pub intrinsic_value: f64,
    pub ceiling_price: f64,
    pub signal: Signal,
}

/// Side-by-side view of several methods against one current price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodComparison {
    pub current_price: f64,
    pub rows: Vec<ComparisonRow>,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl MethodComparison {
    /// `None` when there is nothing to compare.
    pub fn from_outcomes(outcomes: &[MethodOutcome]) -> Option<Self> {
        let first = outcomes.first()?;
        let rows = outcomes
            .iter()
            .map(|o| ComparisonRow {
                label: o
                    .result
                    .method
                    .split_whitespace()
                    .last()
                    .unwrap_or_default()
                    .to_string(),
                method: o.result.method.clone(),
                intrinsic_value: round2(o.result.intrinsic_value),
                ceiling_price: round2(o.result.ceiling_price),
                signal: o.result.signal,
            })
            .collect();
        Some(Self {
            current_price: first.current_price,
            rows,
        })
    }
}

/// Validation, dispatch and comparison behind one handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValuateUseCase;

impl ValuateUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(
        &self,
        method: ValuationMethod,
        request: &ValuationRequest,
    ) -> Result<MethodOutcome, DomainError> {
        tracing::debug!(%method, price = request.current_price, "evaluating");
        evaluate(method, request)
    }

    pub fn evaluate_all(&self, request: &ValuationRequest) -> Result<Vec<MethodOutcome>, DomainError> {
        let outcomes = evaluate_all(request)?;
        tracing::debug!(methods = outcomes.len(), "evaluated complete methods");
        Ok(outcomes)
    }

    pub fn compare(&self, outcomes: &[MethodOutcome]) -> Option<MethodComparison> {
        MethodComparison::from_outcomes(outcomes)
    }
}
