use clap::Parser;
use valoracao::application::valuate::{MethodOutcome, ValuationRequest};
use valoracao::cli::commands::{degenerate_notices, Cli, Commands, StockArgs};
use valoracao::config::AppConfig;
use valoracao::domain::error::DomainError;
use valoracao::domain::values::valuation_method::ValuationMethod;
use valoracao::logging::init_logging;
use valoracao::Valoracao;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    init_logging(&config.log_level, &config.log_format);

    let app = match Valoracao::new(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error initializing valoracao: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(app, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(app: Valoracao, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Graham { mut stock, args } => {
            let mut request = prepare(&app, &mut stock).await?;
            request.graham = Some(args.params());
            let outcome = app.evaluate(ValuationMethod::Graham, &request)?;
            finish(&app, &stock, vec![outcome])?;
        }
        Commands::Barsi { mut stock, args } => {
            let mut request = prepare(&app, &mut stock).await?;
            request.barsi = Some(args.params());
            let outcome = app.evaluate(ValuationMethod::Barsi, &request)?;
            finish(&app, &stock, vec![outcome])?;
        }
        Commands::Dcf { mut stock, args } => {
            let mut request = prepare(&app, &mut stock).await?;
            request.dcf = Some(args.params());
            let outcome = app.evaluate(ValuationMethod::Dcf, &request)?;
            finish(&app, &stock, vec![outcome])?;
        }
        Commands::Lynch { mut stock, args } => {
            let mut request = prepare(&app, &mut stock).await?;
            request.peter_lynch = Some(args.params());
            let outcome = app.evaluate(ValuationMethod::Lynch, &request)?;
            finish(&app, &stock, vec![outcome])?;
        }
        Commands::All { mut stock, args } => {
            let mut request = prepare(&app, &mut stock).await?;
            args.apply(&mut request);
            let outcomes = app.evaluate_all(&request)?;
            let comparison = app.compare(&outcomes);
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "outcomes": outcomes,
                    "comparison": comparison,
                }))?
            );
            warn_degenerate(&outcomes);
            save_if_requested(&app, &stock, &outcomes)?;
        }
        Commands::History { limit, json } => {
            let saved = app.history(limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&saved)?);
            } else if saved.is_empty() {
                println!("No saved analyses yet.");
            } else {
                for a in &saved {
                    println!("{}", a.summary_line());
                }
            }
        }
        Commands::Delete { id } => {
            let existed = app.history(None).iter().any(|a| a.id == id);
            app.delete(&id)?;
            if existed {
                println!("Deleted analysis {id}");
            } else {
                println!("No analysis with id {id}");
            }
        }
        Commands::Quote { ticker } => {
            let quote = app.quote(&ticker).await?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
    }
    Ok(())
}

/// Apply `--fetch` and build the base request from the shared stock arguments.
async fn prepare(app: &Valoracao, stock: &mut StockArgs) -> Result<ValuationRequest, DomainError> {
    if stock.fetch {
        let quote = app.quote(&stock.ticker).await?;
        if stock.price.is_none() {
            stock.price = Some(quote.reference_price());
        }
        if stock.company.trim().is_empty() {
            stock.company = quote.name;
        }
    }
    Ok(ValuationRequest::new(
        stock.price.unwrap_or_default(),
        stock.margin,
    ))
}

fn finish(
    app: &Valoracao,
    stock: &StockArgs,
    outcomes: Vec<MethodOutcome>,
) -> Result<(), Box<dyn std::error::Error>> {
    for outcome in &outcomes {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    }
    warn_degenerate(&outcomes);
    save_if_requested(app, stock, &outcomes)
}

fn warn_degenerate(outcomes: &[MethodOutcome]) {
    for notice in degenerate_notices(outcomes) {
        eprintln!("{notice}");
    }
}

fn save_if_requested(
    app: &Valoracao,
    stock: &StockArgs,
    outcomes: &[MethodOutcome],
) -> Result<(), Box<dyn std::error::Error>> {
    if stock.save {
        for a in app.save_outcomes(&stock.ticker, &stock.company, outcomes)? {
            eprintln!("Saved analysis {} ({})", a.id, a.method);
        }
    }
    Ok(())
}
