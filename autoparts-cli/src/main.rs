//! `autoparts` - terminal front-end for the used auto-parts lookup service.
//!
//! One-shot `catalog` and `search` commands print and exit; `browse` opens an
//! interactive shell over the vendor → part → image navigation.

mod config;
mod render;
mod shell;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use autoparts_core::{PartsSession, SearchCriteria, ServiceContext};
use autoparts_provider::create_api;

use config::Config;

#[derive(Parser)]
#[command(name = "autoparts")]
#[command(about = "Search used auto parts by brand, model and part", long_about = None)]
#[command(version)]
struct Cli {
    /// Service base URL (overrides config file and AUTOPARTS_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Config file (default: <config dir>/autoparts/config.json)
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List brands, or the models of one brand
    Catalog {
        /// Brand whose models to list
        brand: Option<String>,
    },

    /// Search a part and print the results grouped by vendor
    Search {
        brand: String,
        model: String,
        /// Part to look for (e.g. "filtro de aire")
        part: String,

        /// Print the vendor groups as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive browsing shell
    Browse,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays clean for results.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref(), cli.base_url.as_deref())?;
    tracing::debug!("Using service at {}", config.api.normalized_base_url());

    let api = create_api(&config.api).context("create parts service client")?;
    let ctx = Arc::new(ServiceContext::new(api));
    let session = PartsSession::with_options(ctx, config.catalog);

    match cli.command {
        Commands::Catalog { brand } => {
            let catalog = session.load_catalog().await?;
            print!("{}", render::catalog(&catalog, brand.as_deref()));
        }
        Commands::Search {
            brand,
            model,
            part,
            json,
        } => {
            session
                .search(&SearchCriteria::new(brand, model, part))
                .await?;
            let snapshot = session.snapshot().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot.groups)?);
            } else {
                print!("{}", render::vendor_list(&snapshot.groups));
            }
        }
        Commands::Browse => shell::run(&session).await?,
    }
    Ok(())
}
