use crate::application::valuate::{
    BarsiParams, DcfParams, DividendInput, GrahamParams, MethodOutcome, PeterLynchParams,
    ValuationRequest,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "valoracao",
    about = "Stock fair value and ceiling price with Graham, Barsi, DCF and Peter Lynch"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every valuation command.
#[derive(Args, Debug, Clone)]
pub struct StockArgs {
    /// Stock ticker (e.g. PETR4)
    #[arg(long, default_value = "")]
    pub ticker: String,
    /// Company name
    #[arg(long, default_value = "")]
    pub company: String,
    /// Current market price
    #[arg(long)]
    pub price: Option<f64>,
    /// Safety margin in percent
    #[arg(long, default_value = "25")]
    pub margin: f64,
    /// Save the result to the history
    #[arg(long)]
    pub save: bool,
    /// Fill price and company from the quote provider
    #[arg(long)]
    pub fetch: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GrahamArgs {
    /// Earnings per share (LPA)
    #[arg(long)]
    pub lpa: f64,
    /// Book value per share (VPA)
    #[arg(long)]
    pub vpa: f64,
}

impl GrahamArgs {
    pub fn params(&self) -> GrahamParams {
        GrahamParams {
            lpa: self.lpa,
            vpa: self.vpa,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct BarsiArgs {
    /// Current dividend yield in percent
    #[arg(long, conflicts_with = "annual_dividend", required_unless_present = "annual_dividend")]
    pub current_dy: Option<f64>,
    /// Annual dividend per share (converted to a yield at the current price)
    #[arg(long)]
    pub annual_dividend: Option<f64>,
    /// Desired dividend yield in percent
    #[arg(long, default_value = "6")]
    pub desired_dy: f64,
}

impl BarsiArgs {
    pub fn params(&self) -> BarsiParams {
        let dividend = match (self.current_dy, self.annual_dividend) {
            (Some(dy), _) => DividendInput::Yield(dy),
            (None, Some(div)) => DividendInput::AnnualDividend(div),
            (None, None) => DividendInput::Yield(0.0),
        };
        BarsiParams {
            dividend,
            desired_dy: self.desired_dy,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct DcfArgs {
    /// Annual free cash flow
    #[arg(long)]
    pub fcf: f64,
    /// FCF growth rate in percent
    #[arg(long, default_value = "10")]
    pub growth: f64,
    /// Discount rate in percent
    #[arg(long, default_value = "12")]
    pub discount: f64,
    /// Projection years
    #[arg(long, default_value = "10")]
    pub years: u32,
    /// Total shares outstanding
    #[arg(long)]
    pub shares: f64,
}

impl DcfArgs {
    pub fn params(&self) -> DcfParams {
        DcfParams {
            free_cash_flow: self.fcf,
            growth_rate: self.growth,
            discount_rate: self.discount,
            projection_years: self.years,
            total_shares: self.shares,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct LynchArgs {
    /// Earnings per share (LPA)
    #[arg(long)]
    pub lpa: f64,
    /// Expected earnings growth (used as a raw multiplier)
    #[arg(long)]
    pub growth: f64,
    /// Price / earnings ratio, enables the PEG reading
    #[arg(long)]
    pub pl: Option<f64>,
}

impl LynchArgs {
    pub fn params(&self) -> PeterLynchParams {
        PeterLynchParams {
            lpa: self.lpa,
            growth_rate: self.growth,
            pl_ratio: self.pl,
        }
    }
}

/// Every method's inputs, all optional. Methods with missing fields are skipped.
#[derive(Args, Debug, Clone)]
pub struct AllArgs {
    /// Earnings per share, shared by Graham and Peter Lynch
    #[arg(long)]
    pub lpa: Option<f64>,
    #[arg(long)]
    pub vpa: Option<f64>,
    #[arg(long, conflicts_with = "annual_dividend")]
    pub current_dy: Option<f64>,
    #[arg(long)]
    pub annual_dividend: Option<f64>,
    #[arg(long, default_value = "6")]
    pub desired_dy: f64,
    #[arg(long)]
    pub fcf: Option<f64>,
    #[arg(long, default_value = "10")]
    pub growth: f64,
    #[arg(long, default_value = "12")]
    pub discount: f64,
    #[arg(long, default_value = "10")]
    pub years: u32,
    #[arg(long)]
    pub shares: Option<f64>,
    /// Peter Lynch growth (raw multiplier)
    #[arg(long)]
    pub lynch_growth: Option<f64>,
    #[arg(long)]
    pub pl: Option<f64>,
}

impl AllArgs {
    pub fn apply(&self, request: &mut ValuationRequest) {
        if let (Some(lpa), Some(vpa)) = (self.lpa, self.vpa) {
            request.graham = Some(GrahamParams { lpa, vpa });
        }
        let dividend = match (self.current_dy, self.annual_dividend) {
            (Some(dy), _) => Some(DividendInput::Yield(dy)),
            (None, Some(div)) => Some(DividendInput::AnnualDividend(div)),
            (None, None) => None,
        };
        if let Some(dividend) = dividend {
            request.barsi = Some(BarsiParams {
                dividend,
                desired_dy: self.desired_dy,
            });
        }
        if let (Some(fcf), Some(shares)) = (self.fcf, self.shares) {
            request.dcf = Some(DcfParams {
                free_cash_flow: fcf,
                growth_rate: self.growth,
                discount_rate: self.discount,
                projection_years: self.years,
                total_shares: shares,
            });
        }
        if let (Some(lpa), Some(growth)) = (self.lpa, self.lynch_growth) {
            request.peter_lynch = Some(PeterLynchParams {
                lpa,
                growth_rate: growth,
                pl_ratio: self.pl,
            });
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Benjamin Graham: sqrt(22.5 x LPA x VPA)
    Graham {
        #[command(flatten)]
        stock: StockArgs,
        #[command(flatten)]
        args: GrahamArgs,
    },
    /// Luiz Barsi: price scaled by current / desired dividend yield
    Barsi {
        #[command(flatten)]
        stock: StockArgs,
        #[command(flatten)]
        args: BarsiArgs,
    },
    /// Discounted cash flow with a 3% perpetuity
    Dcf {
        #[command(flatten)]
        stock: StockArgs,
        #[command(flatten)]
        args: DcfArgs,
    },
    /// Peter Lynch: LPA x growth, with PEG when --pl is given
    Lynch {
        #[command(flatten)]
        stock: StockArgs,
        #[command(flatten)]
        args: LynchArgs,
    },
    /// Run every method with complete inputs and compare them
    All {
        #[command(flatten)]
        stock: StockArgs,
        #[command(flatten)]
        args: AllArgs,
    },
    /// List saved analyses, newest first
    History {
        #[arg(long)]
        limit: Option<usize>,
        /// Print raw JSON instead of summary lines
        #[arg(long)]
        json: bool,
    },
    /// Delete a saved analysis
    Delete {
        /// Analysis ID
        id: String,
    },
    /// Look up a market quote
    Quote {
        ticker: String,
    },
}

/// Notices for outcomes whose inputs collapsed to a zero valuation.
pub fn degenerate_notices(outcomes: &[MethodOutcome]) -> Vec<String> {
    outcomes
        .iter()
        .filter(|o| o.result.is_degenerate())
        .map(|o| {
            format!(
                "Warning: {} produced no fair value for these inputs; check them before relying on the signal",
                o.result.method
            )
        })
        .collect()
}
