//! Toque CLI - browse, filter and export the admin listings from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Get a token and keep it for the session
//! export TOQUE_ACCESS_TOKEN=$(toque login -e chef@toque.app)
//!
//! # Search users, keep only Google sign-ins
//! toque list users --search martin --filter provider=google
//!
//! # Export the filtered administrators to ./exports/administrators.csv
//! toque export administrators --filter role=admin --output exports
//!
//! # Work offline on a listing saved from `GET /food-style`
//! toque list food-styles --input food-styles.json
//! ```
//!
//! # Commands
//!
//! - `login` - Exchange credentials for an access token
//! - `list` - Print a filtered listing
//! - `export` - Write a filtered listing to CSV
//! - `profile` - Show a user's profile
//! - `food-style` - Manage food styles
//!
//! # Environment Variables
//!
//! - `BACKEND_URL` - Backend REST API base URL (required unless `--input` is used)
//! - `TOQUE_ACCESS_TOKEN` - Bearer token from `login`
//! - `TOQUE_EXPORT_DIR` - Default export directory
//! - `TOQUE_LOG_JSON` - Emit logs as JSON
//! - `RUST_LOG` - Log filter (default: `toque=info,toque_admin=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use error::CliError;

#[derive(Parser)]
#[command(name = "toque")]
#[command(author, version, about = "Toque admin dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exchange credentials for an access token (printed to stdout)
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long, env = "TOQUE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print a filtered listing
    List {
        /// Listing to show
        entity: Entity,

        #[command(flatten)]
        table: TableArgs,

        /// Print the rendered table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a filtered listing to a CSV file
    Export {
        /// Listing to export
        entity: Entity,

        #[command(flatten)]
        table: TableArgs,

        /// Directory to write into (default: `TOQUE_EXPORT_DIR` or `.`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show a user's profile
    Profile {
        /// User ID
        id: i64,
    },
    /// Manage food styles
    FoodStyle {
        #[command(subcommand)]
        action: FoodStyleAction,
    },
}

/// Listings available to `list` and `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    /// Regular users
    Users,
    /// Administrators
    Administrators,
    /// Food styles
    FoodStyles,
}

impl Entity {
    /// Name as typed on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Administrators => "administrators",
            Self::FoodStyles => "food-styles",
        }
    }
}

/// Search and filter options shared by `list` and `export`.
#[derive(Debug, Default, Args)]
pub struct TableArgs {
    /// Free-text search over the listing's searchable fields
    #[arg(short, long)]
    pub search: Option<String>,

    /// Field filter as `field=value` (repeatable)
    #[arg(short, long = "filter", value_name = "FIELD=VALUE")]
    pub filters: Vec<String>,

    /// Read a saved backend listing (JSON array) instead of calling the backend
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum FoodStyleAction {
    /// Create a food style
    Add {
        /// Display name
        name: String,
    },
    /// Rename a food style
    Rename {
        /// Food style ID
        id: i64,
        /// New display name
        name: String,
    },
    /// Delete a food style
    Delete {
        /// Food style ID
        id: i64,
    },
    /// Replace the food styles attached to a user
    Assign {
        /// User ID
        user_id: i64,
        /// Food style IDs
        ids: Vec<i64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            output::report_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Logs go to stderr so stdout stays clean for tables, JSON and tokens.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("toque=info,toque_admin=info"));

    let json = std::env::var_os("TOQUE_LOG_JSON").is_some();
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Login { email, password } => commands::login::run(&email, &password).await,
        Commands::List {
            entity,
            table,
            json,
        } => commands::list::run(entity, &table, json).await,
        Commands::Export {
            entity,
            table,
            output,
        } => commands::export::run(entity, &table, output).await,
        Commands::Profile { id } => commands::profile::run(id).await,
        Commands::FoodStyle { action } => match action {
            FoodStyleAction::Add { name } => commands::food_style::add(&name).await,
            FoodStyleAction::Rename { id, name } => commands::food_style::rename(id, &name).await,
            FoodStyleAction::Delete { id } => commands::food_style::delete(id).await,
            FoodStyleAction::Assign { user_id, ids } => {
                commands::food_style::assign(user_id, &ids).await
            }
        },
    }
}
