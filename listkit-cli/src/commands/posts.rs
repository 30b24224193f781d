use anyhow::Result;
use clap::Parser;
use listkit_core::{
    Component, DataFetcher, HttpPostSource, ListkitConfig, PostSource, StaticPostSource,
};
use tracing::info;

use super::{print_node, OutputFormat};

#[derive(Parser, Debug)]
pub struct PostsArgs {
    /// Posts endpoint (default: fetch.posts_url from config)
    #[arg(long, value_name = "URL", conflicts_with = "offline")]
    pub url: Option<String>,

    /// Use built-in sample posts instead of the network
    #[arg(long)]
    pub offline: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Pick the post source for the given flags
pub fn post_source(
    url: Option<String>,
    offline: bool,
    config: &ListkitConfig,
) -> Box<dyn PostSource> {
    if offline {
        Box::new(StaticPostSource::sample())
    } else {
        let url = url.unwrap_or_else(|| config.fetch.posts_url.clone());
        Box::new(HttpPostSource::new(url))
    }
}

pub async fn run_posts(args: PostsArgs, config: &ListkitConfig) -> Result<()> {
    let source = post_source(args.url, args.offline, config);
    info!(source = %source.describe(), "loading posts");

    let mut fetcher = DataFetcher::new();
    fetcher.load(source.as_ref()).await;

    print_node(&fetcher.render(), args.format)
}
