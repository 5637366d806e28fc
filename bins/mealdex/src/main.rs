//! Mealdex CLI - Recipe Browser
//!
//! Search a public meal database by ingredient, category, and cuisine,
//! with cached results, "did you mean" corrections, and local favorites.

use clap::{Parser, Subcommand, ValueEnum};
use mealdex_session::SortOrder;
use owo_colors::OwoColorize;
use std::process::ExitCode;

mod commands;
mod output;

use commands::{browse, detail, fav, search, suggest};

/// Recipe browser for the public meal database
#[derive(Parser)]
#[command(name = "mealdex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search meals by ingredients, with optional category and cuisine filters
    Search {
        /// Comma-separated ingredient list; empty shows the trending set
        #[arg(default_value = "")]
        query: String,

        /// Restrict to one category (e.g. Seafood, Dessert)
        #[arg(short, long)]
        category: Option<String>,

        /// Restrict to one cuisine/area (e.g. Italian, Thai)
        #[arg(short, long)]
        area: Option<String>,

        /// Page of results to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Results per page
        #[arg(long, default_value = "12")]
        per_page: usize,

        /// Sort order for results
        #[arg(short, long, value_enum, default_value_t = SortArg::NameAsc)]
        sort: SortArg,
    },

    /// Rank "did you mean" candidates for a partial or misspelled term
    Suggest {
        /// The term to correct
        query: String,

        /// Maximum suggestions to show
        #[arg(short, long, default_value = "6")]
        limit: usize,
    },

    /// Show the full recipe for one meal
    Detail {
        /// Meal id
        id: String,
    },

    /// Show one random meal
    Random,

    /// Show a trending set of random picks
    Trending {
        /// Number of concurrent random picks
        #[arg(short, long, default_value = "8")]
        count: usize,
    },

    /// List known categories
    Categories,

    /// List known cuisines/areas
    Areas,

    /// Manage locally stored favorite meals
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
}

#[derive(Subcommand)]
enum FavAction {
    /// Add a meal to favorites
    Add {
        /// Meal id
        id: String,
    },

    /// Remove a meal from favorites
    Remove {
        /// Meal id
        id: String,
    },

    /// Add the meal if absent, remove it if present
    Toggle {
        /// Meal id
        id: String,
    },

    /// List favorite meals
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    /// A to Z by meal name
    NameAsc,
    /// Z to A by meal name
    NameDesc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::NameAsc => SortOrder::NameAsc,
            SortArg::NameDesc => SortOrder::NameDesc,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "mealdex=debug,mealdex_session=debug,mealdex_api_client=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let result = match cli.command {
        Commands::Search {
            query,
            category,
            area,
            page,
            per_page,
            sort,
        } => {
            search::run(
                &query,
                category.as_deref(),
                area.as_deref(),
                page,
                per_page,
                sort.into(),
                &cli.format,
            )
            .await
        }

        Commands::Suggest { query, limit } => suggest::run(&query, limit, &cli.format).await,

        Commands::Detail { id } => detail::run(&id, &cli.format).await,

        Commands::Random => browse::run_random(&cli.format).await,

        Commands::Trending { count } => browse::run_trending(count, &cli.format).await,

        Commands::Categories => browse::run_categories(&cli.format).await,

        Commands::Areas => browse::run_areas(&cli.format).await,

        Commands::Fav { action } => match action {
            FavAction::Add { id } => fav::run_add(&id, &cli.format).await,
            FavAction::Remove { id } => fav::run_remove(&id, &cli.format).await,
            FavAction::Toggle { id } => fav::run_toggle(&id, &cli.format).await,
            FavAction::List => fav::run_list(&cli.format).await,
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
