//! listkit CLI - render typed UI components from the command line
//!
//! Subcommands:
//! - `app`, `list`, `greet`, `form`: render a component as text, HTML or JSON
//! - `posts`: fetch posts once and render them
//! - `modes`: list or validate program modes
//! - `tui`: interactive terminal view of every component

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listkit_core::ListkitConfig;
use tracing::debug;

mod commands;
mod tracing_setup;
mod tui;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "listkit",
    author,
    version,
    about = "Render typed UI component trees as text, HTML or JSON",
    long_about = "Render the generic list, greeting, form, post fetcher and app shell \
                  components from the command line, or browse them in a terminal UI."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.listkit/config.toml)
    #[arg(long, global = true, value_name = "PATH", env = "LISTKIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the app shell (numbers and fruits lists)
    App(commands::render::AppArgs),
    /// Render the given items with the generic list renderer
    List(commands::render::ListArgs),
    /// Render a greeting
    Greet(commands::render::GreetArgs),
    /// Render the controlled input form, optionally submitting it
    Form(commands::render::FormArgs),
    /// Fetch posts once and render them
    Posts(commands::posts::PostsArgs),
    /// List or validate program modes
    Modes(commands::modes::ModesArgs),
    /// Interactive terminal UI
    Tui(tui::TuiArgs),
}

/// Load .env files (cwd first, then ~/.listkit/.env); existing variables win
fn load_dotenv() {
    let _ = dotenvy::dotenv();
    if let Some(home) = dirs::home_dir() {
        let _ = dotenvy::from_path(home.join(".listkit/.env"));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();
    let cli = Cli::parse();

    // The TUI owns the terminal; console logging would corrupt the screen
    if !matches!(cli.command, Commands::Tui(_)) {
        tracing_setup::init(&TracingConfig { debug: cli.debug })?;
    }

    let config = match &cli.config {
        Some(path) => ListkitConfig::load_from(path),
        None => ListkitConfig::load(),
    }
    .context("Failed to load configuration")?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::App(args) => commands::render::run_app(args),
        Commands::List(args) => commands::render::run_list(args),
        Commands::Greet(args) => commands::render::run_greet(args, &config),
        Commands::Form(args) => commands::render::run_form(args),
        Commands::Posts(args) => commands::posts::run_posts(args, &config).await,
        Commands::Modes(args) => commands::modes::run_modes(args),
        Commands::Tui(args) => tui::run(args, &config),
    }
}
