//! CLI entry point for the mealpick tool.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mealpick_core::{Catalog, Pacing, Recommender};
use tracing::{debug, info};

mod app_config;
mod cli;
mod commands;
mod output;

use app_config::{FileConfig, LoadedConfig, load_default_file_config};
use cli::{Cli, Command, ConfigCommand};

/// Where the active recipe catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = verbosity_level(cli.verbose, cli.quiet);
    init_tracing(default_level, no_color_env_requested() || is_dumb_terminal());

    debug!(?cli, "CLI arguments parsed");

    let loaded_config = load_default_file_config()?;
    let file_config = loaded_config.effective();
    let catalog_source = resolve_catalog_source(cli.catalog.as_ref(), &file_config);
    let recommender = build_recommender(&cli, &file_config, &catalog_source)?;
    info!(
        dishes = recommender.catalog().len(),
        catalog = %catalog_source,
        "Catalog ready"
    );

    dispatch(&cli, &loaded_config, &recommender, &catalog_source).await
}

async fn dispatch(
    cli: &Cli,
    loaded_config: &LoadedConfig,
    recommender: &Recommender,
    catalog_source: &CatalogSource,
) -> Result<()> {
    match &cli.command {
        Command::Recommend(args) => commands::run_recommend_command(recommender, args).await,
        Command::Replace(args) => commands::run_replace_command(recommender, args).await,
        Command::Search(args) => commands::run_search_command(recommender.catalog(), args),
        Command::Ingredients(args) => commands::run_ingredients_command(args),
        Command::Config {
            command: ConfigCommand::Show,
        } => commands::run_config_show_command(loaded_config, recommender, catalog_source),
    }
}

fn verbosity_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn no_color_env_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

fn is_dumb_terminal() -> bool {
    std::env::var("TERM")
        .map(|value| value.eq_ignore_ascii_case("dumb"))
        .unwrap_or(false)
}

fn init_tracing(default_level: &str, no_color: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    // Logs go to stderr so --json output on stdout stays parseable.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_env_filter(filter)
        .try_init();
}

/// CLI `--catalog` wins over the config file; otherwise the built-in catalog.
fn resolve_catalog_source(cli_catalog: Option<&PathBuf>, file_config: &FileConfig) -> CatalogSource {
    cli_catalog
        .or(file_config.catalog_path.as_ref())
        .map_or(CatalogSource::Builtin, |path| CatalogSource::File(path.clone()))
}

fn build_recommender(
    cli: &Cli,
    file_config: &FileConfig,
    catalog_source: &CatalogSource,
) -> Result<Recommender> {
    let catalog = match catalog_source {
        CatalogSource::Builtin => Catalog::builtin().context("Built-in catalog is invalid")?,
        CatalogSource::File(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog '{}'", path.display()))?,
    };
    let pacing = if cli.no_pacing {
        Pacing::none()
    } else {
        file_config.pacing()
    };
    Ok(Recommender::new(catalog)
        .with_weights(file_config.weights())
        .with_pacing(pacing))
}
