//! Garage CLI - Command line interface and server for the vehicle catalog

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, config as config_cmd, query, schema, serve};
use config::{config_file_path, Config};
use garage_graphql::{build_schema, CatalogSchema, SharedStore};
use garage_storage::MemoryStorage;

#[derive(Parser)]
#[command(name = "garage")]
#[command(author, version, about = "GraphQL API over an in-memory vehicle catalog")]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "GARAGE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format: pretty, json
    #[arg(short, long, default_value = "pretty", global = true)]
    pub format: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config_file_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve(serve::ServeArgs),
    /// Run one query or mutation against a freshly seeded catalog
    Query(query::QueryArgs),
    /// Print the GraphQL schema (SDL)
    Schema,
    /// Manage configuration
    Config(config_cmd::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded config and the entity store
pub struct AppContext {
    pub config: Config,
    pub store: SharedStore,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = cli.config_path();
        tracing::debug!("Using config file at: {:?}", config_path);

        let config = Config::load(&config_path)?;
        let store: SharedStore = Arc::new(MemoryStorage::seeded());

        Ok(Self { config, store })
    }

    pub fn schema(&self) -> CatalogSchema {
        build_schema(self.store.clone(), self.config.limits())
    }
}

/// Log filter used when `RUST_LOG` is unset.
///
/// The server announces its URL at info, so `serve` keeps the transport
/// target at info even with `--quiet`.
fn default_filter(verbose: u8, quiet: bool, serving: bool) -> &'static str {
    match verbose {
        0 if quiet && serving => "error,garage_graphql::http=info",
        0 if quiet => "error",
        0 if serving => "info",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = default_filter(
        cli.verbose,
        cli.quiet,
        matches!(cli.command, Commands::Serve(_)),
    );

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting garage CLI");

    match &cli.command {
        Commands::Config(args) => return config_cmd::run(args, &cli),
        Commands::Completions(args) => return completions::run(args),
        _ => {}
    }

    let ctx = AppContext::new(&cli)?;

    match &cli.command {
        Commands::Serve(args) => serve::run(args, &ctx).await?,
        Commands::Query(args) => query::run(args, &cli, &ctx).await?,
        Commands::Schema => schema::run(&ctx),
        Commands::Config(_) | Commands::Completions(_) => {}
    }

    Ok(())
}
