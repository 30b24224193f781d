//! Command implementations for the listkit CLI

pub mod modes;
pub mod posts;
pub mod render;

use anyhow::{Context, Result};
use clap::ValueEnum;
use listkit_core::{render_html, render_text, Node};

/// How a rendered node tree is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one line per block
    #[default]
    Text,
    /// Compact HTML
    Html,
    /// Node tree as pretty JSON
    Json,
}

/// Serialize a node in the requested format
pub fn format_node(node: &Node, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(node)),
        OutputFormat::Html => Ok(render_html(node)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(node).context("Failed to serialize node tree to JSON")
        }
    }
}

/// Print a node to stdout in the requested format
pub fn print_node(node: &Node, format: OutputFormat) -> Result<()> {
    println!("{}", format_node(node, format)?);
    Ok(())
}
