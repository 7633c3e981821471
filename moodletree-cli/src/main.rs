// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! moodletree CLI - list every downloadable file in your Moodle courses.
//!
//! # Examples
//!
//! ```bash
//! # Print the course → section → file tree
//! moodletree -u student -p secret
//!
//! # Another Moodle site
//! moodletree -u student -p secret --url https://moodle.example.edu
//!
//! # JSON output with download URLs
//! moodletree -u student -p secret --format json --pretty
//!
//! # Only acquire a token
//! moodletree -u student -p secret --token-only
//! ```

mod config;
mod output;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use moodletree_core::Credentials;
use moodletree_fetch::{Authenticator, FetchError, HttpTransport, TreeBuilder};

use output::{JsonFormatter, TextFormatter};

// ============================================================================
// CLI Definition
// ============================================================================

/// moodletree - list downloadable Moodle course files.
#[derive(Parser)]
#[command(name = "moodletree")]
#[command(about = "List every downloadable file in your Moodle courses")]
#[command(version)]
pub struct Cli {
    /// Moodle username.
    #[arg(long, short, env = "MOODLE_USERNAME")]
    pub username: String,

    /// Moodle password.
    #[arg(long, short, env = "MOODLE_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Moodle site root (overrides the config file).
    #[arg(long, env = "MOODLETREE_URL")]
    pub url: Option<String>,

    /// Path to a JSON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum concurrent course fetches (0 = unbounded).
    #[arg(long)]
    pub max_concurrency: Option<usize>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Show download URLs in text output.
    #[arg(long)]
    pub urls: bool,

    /// Print the acquired token and exit.
    #[arg(long)]
    pub token_only: bool,

    /// Verbose output (show debug info).
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no logging).
    #[arg(long, short)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable tree.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// The service rejected a request.
    ServiceError = 3,
    /// The service could not be reached.
    TransportError = 4,
}

impl ExitCode {
    fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<FetchError>() {
            Some(e) if e.is_transport() => Self::TransportError,
            Some(e) if e.is_service() => Self::ServiceError,
            _ => Self::Error,
        }
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("moodletree=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moodletree=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli).await {
        report_error(&e, &cli);
        std::process::exit(ExitCode::for_error(&e) as i32);
    }
}

/// Authenticates, builds the tree, and prints it.
async fn run(cli: &Cli) -> Result<()> {
    let config = config::resolve(&config::Overrides {
        config_path: cli.config.as_deref(),
        base_url: cli.url.as_deref(),
        timeout_secs: cli.timeout,
        max_concurrency: cli.max_concurrency,
    })
    .await?;

    let transport = HttpTransport::new(&config)?;
    let credentials = Credentials::new(cli.username.as_str(), cli.password.as_str());

    info!(site = %config.base_url, "Logging in");
    let token = Authenticator::new(&config, &transport)
        .login(&credentials)
        .await?;

    if cli.token_only {
        println!("{}", token.as_str());
        return Ok(());
    }

    let tree = TreeBuilder::new(&config, &transport)
        .get_file_tree(&token)
        .await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(use_colors(cli)).with_urls(cli.urls);
            println!("{}", formatter.format_tree(&tree));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_tree(&tree)?);
        }
    }

    Ok(())
}

fn report_error(err: &anyhow::Error, cli: &Cli) {
    let message = format!("{err:#}");

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color && std::io::stderr().is_terminal());
            eprintln!("{}", formatter.format_error(&message));
        }
        OutputFormat::Json => {
            let kind = match ExitCode::for_error(err) {
                ExitCode::TransportError => "transport",
                ExitCode::ServiceError => "service",
                ExitCode::Error => "error",
            };
            match JsonFormatter::new(cli.pretty).format_error(kind, &message) {
                Ok(json) => println!("{json}"),
                Err(_) => eprintln!("Error: {message}"),
            }
        }
    }
}

fn use_colors(cli: &Cli) -> bool {
    !cli.no_color && std::io::stdout().is_terminal()
}
