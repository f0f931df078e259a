//! CLI entry point for the `mcat` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use movie_catalog::cli::commands;
use movie_catalog::{CatalogConfig, CatalogError};

#[derive(Parser)]
#[command(name = "mcat", about = "Movie catalog lookup and search")]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dataset JSON file (overrides config and MOVIE_CATALOG_DATASET)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every movie in the catalog
    List,
    /// Show a single movie by ID
    Get {
        /// Movie ID
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Search by name, ID and/or genre (at least one is required)
    Search {
        /// Case-insensitive name fragment
        #[arg(long)]
        name: Option<String>,
        /// Exact movie ID
        #[arg(long, allow_hyphen_values = true)]
        id: Option<String>,
        /// Case-insensitive genre fragment
        #[arg(long)]
        genre: Option<String>,
    },
    /// Catalog statistics
    Info,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let config = match &cli.config {
        Some(path) => CatalogConfig::load(path),
        None => Ok(CatalogConfig::default()),
    };
    let config = match config {
        Ok(config) => config.with_env_overrides().with_dataset_override(cli.dataset),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(exit_code(&e));
        }
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let catalog = config.build_catalog();

    let result = match cli.command {
        Commands::List => commands::cmd_list(&catalog, json),
        Commands::Get { id } => commands::cmd_get(&catalog, &id, json),
        Commands::Search { name, id, genre } => commands::cmd_search(
            &catalog,
            name.as_deref(),
            id.as_deref(),
            genre.as_deref(),
            json,
        ),
        Commands::Info => commands::cmd_info(&catalog, json),
    };

    if let Err(e) = result {
        if !json {
            eprintln!("Error: {}", e);
        }
        process::exit(exit_code(&e));
    }
}

fn exit_code(e: &CatalogError) -> i32 {
    match e {
        CatalogError::Io(_) => 1,
        CatalogError::Json(_)
        | CatalogError::NotAnArray
        | CatalogError::InvalidRecord { .. }
        | CatalogError::InvalidId { .. }
        | CatalogError::Config(_) => 2,
        CatalogError::InvalidSearch => 3,
        CatalogError::MovieNotFound(_) => 4,
        CatalogError::InvalidIdFormat(_) => 5,
    }
}
