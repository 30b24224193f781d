//! listkit TUI - browse every component in the terminal
//!
//! - Tabs for the app shell lists, greeting, form, posts and program modes
//! - Normal/Edit mode switching for the controlled form input
//! - Posts are fetched on a background task while "Loading..." is shown

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listkit_core::{ListkitConfig, PostSource};

use app::App;

use crate::commands::posts::post_source;

#[derive(Parser, Debug)]
pub struct TuiArgs {
    /// Posts endpoint (default: fetch.posts_url from config)
    #[arg(long, value_name = "URL", conflicts_with = "offline")]
    pub url: Option<String>,

    /// Use built-in sample posts instead of the network
    #[arg(long)]
    pub offline: bool,
}

/// Start the interactive UI
pub fn run(args: TuiArgs, config: &ListkitConfig) -> Result<()> {
    let source: Arc<dyn PostSource> = Arc::from(post_source(args.url, args.offline, config));
    terminal::run(App::new(config), source)
}
