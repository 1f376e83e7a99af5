//! Clause QA Server
//!
//! Structural validation for clause lists produced by document extraction.
//! Checks numbering continuity, blank titles and page references.
//!
//! - `serve` (default): REST API (`POST /api/analyze`, `GET /health`)
//! - `check <FILE>`: validate a JSON file from the command line
//!
//! ## Architecture
//!
//! All validation lives in `clause-engine`. This binary only parses input,
//! applies request limits and renders the engine's results:
//!
//! - Rate limiting via tower-governor
//! - Body size and clause count limits
//! - Text or JSON reports for the CLI

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::anyhow;
use axum::Router;
use clap::{Args, Parser, Subcommand};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod cli;
mod error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_RATE_LIMIT: u32 = 10;
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_MAX_CLAUSES: usize = 50_000;

/// Command-line arguments for the Clause QA server
#[derive(Parser, Debug)]
#[command(name = "clause-qa-server")]
#[command(about = "Structural QA for extracted clause lists")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve(ServeArgs),
    /// Validate a JSON file of clauses and print a report
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value_t = DEFAULT_RATE_LIMIT)]
    rate_limit: u32,

    /// Maximum request body size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,

    /// Maximum number of clauses per request
    #[arg(long, default_value_t = DEFAULT_MAX_CLAUSES)]
    max_clauses: usize,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            rate_limit: DEFAULT_RATE_LIMIT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_clauses: DEFAULT_MAX_CLAUSES,
        }
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON file: an array of clauses or `{ "clauses": [...] }`
    pub file: PathBuf,

    /// Print the JSON analysis instead of the text report
    #[arg(long)]
    pub json: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Largest clause list a single request may carry
    pub max_clauses: usize,
    /// Largest accepted request body
    pub max_body_bytes: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => {
            serve(args).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(args) => Ok(cli::run_check(&args)),
    }
}

/// Build the full application: API routes behind the per-IP rate limiter.
///
/// Clients are keyed by `X-Forwarded-For`, `X-Real-Ip` or `Forwarded` when a
/// proxy sets them, otherwise by peer address.
fn app(args: &ServeArgs) -> anyhow::Result<Router> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit.saturating_mul(2))
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow!("Invalid rate limit: {}", args.rate_limit))?,
    );

    let state = AppState {
        max_clauses: args.max_clauses,
        max_body_bytes: args.max_body_bytes,
    };

    Ok(api::router(state).layer(GovernorLayer {
        config: governor_conf,
    }))
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    info!("Starting Clause QA server on {}:{}", args.host, args.port);

    let app = app(&args)?;

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!(
        "Limits: {} bytes per body, {} clauses per request",
        args.max_body_bytes, args.max_clauses
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
