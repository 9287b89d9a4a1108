//! sfx - search and manage a sound-effect library from the terminal
//!
//! Sounds are the built-in set merged with the owner's custom sounds from the
//! remote store, or from the local cache when the store is unavailable.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use sfx_cli::{OutputFormat, Status};
use sfx_core::config::Config;
use sfx_core::error::exit_codes;
use sfx_library::{LibraryError, Theme};
use sfx_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod context;

use commands::{categories, edit, favorite, list, metrics, search, settings, transfer};
use context::Context;

/// Search and manage a sound-effect library
#[derive(Parser)]
#[command(name = "sfx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to an sfx.toml configuration file
    #[arg(long, global = true, env = "SFX_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search sounds by relevance
    Search {
        /// Search text (lists everything when omitted)
        #[arg(default_value = "")]
        query: String,

        /// Only sounds in this category ("All" for every category)
        #[arg(short, long, default_value = sfx_search::ALL_CATEGORIES)]
        category: String,

        /// Exact mode: name or category must equal the query
        #[arg(long, overrides_with = "no_exact")]
        exact: bool,

        /// Ranked mode even when `search.exact_match` is set in the config
        #[arg(long, overrides_with = "exact")]
        no_exact: bool,

        /// Only search favorites
        #[arg(long)]
        favorites: bool,

        /// Show relevance scores
        #[arg(long)]
        scores: bool,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Typeahead suggestions for a partial query
    Suggest {
        /// Partial search text
        partial: String,

        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List all sounds in display order
    List {
        /// Only sounds in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List known categories
    Categories,

    /// Show one sound
    Show {
        /// Sound id
        id: u32,
    },

    /// Add a new sound
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Category
        #[arg(long)]
        category: String,

        /// Audio file path or URL
        #[arg(long)]
        file: String,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Icon color (#rgb or #rrggbb)
        #[arg(long)]
        icon_color: Option<String>,
    },

    /// Edit an existing sound
    Edit {
        /// Sound id
        id: u32,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New audio file path or URL
        #[arg(long)]
        file: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New icon color (empty to clear)
        #[arg(long)]
        icon_color: Option<String>,
    },

    /// Delete a sound
    Delete {
        /// Sound id
        id: u32,
    },

    /// Move a sound to another sound's position
    Move {
        /// Sound to move
        id: u32,

        /// Sound whose position it takes
        over: u32,
    },

    /// Add a category
    Category {
        /// Category name
        name: String,

        /// Put this sound in the new category instead of creating a placeholder
        #[arg(long)]
        attach: Option<u32>,
    },

    /// Toggle a favorite
    Favorite {
        /// Sound id
        id: u32,
    },

    /// List favorites
    Favorites,

    /// Export custom sounds as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import sounds from a JSON file
    Import {
        /// JSON file containing an array of sounds
        file: PathBuf,
    },

    /// Show or set the theme preference
    Theme {
        /// light, dark or system
        theme: Option<Theme>,
    },

    /// Show the owner id and where data is stored
    Whoami,

    /// Run a search workload and print the collected metrics
    Metrics {
        /// Query to run
        #[arg(default_value = "rain")]
        query: String,

        /// Number of searches
        #[arg(short = 'n', long, default_value = "100")]
        iterations: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let code = e.code.exit_code();
            report(&anyhow::Error::new(e), cli.format);
            return exit(code);
        }
    };

    let telemetry = TelemetryConfig::from(&config.schema.logging).verbose(cli.verbose);
    let _guard = match sfx_telemetry::init_with_config(telemetry) {
        Ok(guard) => Some(guard),
        Err(e) => {
            Status::warning(&format!("Failed to initialise logging: {e}"));
            None
        }
    };

    let ctx = Context::new(config, cli.format);
    let result = run(cli.command, &ctx).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, ctx.format);
            exit(exit_code_for(&e))
        }
    }
}

async fn run(command: Commands, ctx: &Context) -> anyhow::Result<()> {
    match command {
        Commands::Search { query, category, exact, no_exact, favorites, scores, limit } => {
            let options =
                search::SearchOptions { category, exact, no_exact, favorites, scores, limit };
            search::run(ctx, &query, &options).await
        }
        Commands::Suggest { partial, limit } => search::suggest(ctx, &partial, limit).await,
        Commands::List { category } => list::run(ctx, category.as_deref()).await,
        Commands::Categories => categories::run(ctx).await,
        Commands::Show { id } => list::show(ctx, id).await,
        Commands::Add { name, category, file, description, icon_color } => {
            let fields = edit::SoundFields {
                name: Some(name),
                category: Some(category),
                file: Some(file),
                description: Some(description),
                icon_color,
            };
            edit::add(ctx, fields).await
        }
        Commands::Edit { id, name, category, file, description, icon_color } => {
            let fields = edit::SoundFields { name, category, file, description, icon_color };
            edit::update(ctx, id, fields).await
        }
        Commands::Delete { id } => edit::delete(ctx, id).await,
        Commands::Move { id, over } => edit::reorder(ctx, id, over).await,
        Commands::Category { name, attach } => categories::add(ctx, &name, attach).await,
        Commands::Favorite { id } => favorite::toggle(ctx, id).await,
        Commands::Favorites => favorite::list(ctx).await,
        Commands::Export { output } => transfer::export(ctx, output.as_deref()).await,
        Commands::Import { file } => transfer::import(ctx, &file).await,
        Commands::Theme { theme } => settings::theme(ctx, theme),
        Commands::Whoami => settings::whoami(ctx),
        Commands::Metrics { query, iterations } => metrics::run(ctx, &query, iterations).await,
    }
}

/// Map an error to a process exit code
fn exit_code_for(error: &anyhow::Error) -> i32 {
    if let Some(e) = error.downcast_ref::<LibraryError>() {
        return e.code().exit_code();
    }
    if let Some(e) = error.downcast_ref::<sfx_core::Error>() {
        return e.code.exit_code();
    }
    exit_codes::FAILURE
}

/// Hint to print under the error; core errors already include theirs
fn suggestion_for(error: &anyhow::Error) -> Option<String> {
    match error.downcast_ref::<LibraryError>() {
        Some(LibraryError::Core(_)) | None => None,
        Some(e) => e.suggestion().map(str::to_string),
    }
}

fn report(error: &anyhow::Error, format: OutputFormat) {
    if format.is_json() {
        let body = serde_json::json!({
            "status": "error",
            "exit_code": exit_code_for(error),
            "message": format!("{error:#}"),
            "suggestion": suggestion_for(error),
        });
        println!("{body}");
        return;
    }

    Status::error(&format!("{error:#}"));
    if let Some(suggestion) = suggestion_for(error) {
        eprintln!("  {} {suggestion}", "hint:".cyan());
    }
}

fn exit(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
