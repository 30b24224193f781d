//! One-shot post fetcher component
//!
//! Starts in `Loading`, performs a single fetch, and settles in `Ready`.
//! A failed fetch is logged and settles with no posts.

use tracing::{error, info, instrument};

use crate::component::Component;
use crate::node::{Element, Key, Node};
use crate::posts::{Post, PostSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Ready(Vec<Post>),
}

#[derive(Debug, Clone)]
pub struct DataFetcher {
    state: FetchState,
}

impl Default for DataFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DataFetcher {
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
        }
    }

    /// Fetcher already settled with the given posts
    pub fn ready(posts: Vec<Post>) -> Self {
        Self {
            state: FetchState::Ready(posts),
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    /// Loaded posts (empty while loading or after a failure)
    pub fn posts(&self) -> &[Post] {
        match &self.state {
            FetchState::Loading => &[],
            FetchState::Ready(posts) => posts,
        }
    }

    /// Fetch once from `source` and settle
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub async fn load<S>(&mut self, source: &S)
    where
        S: PostSource + ?Sized,
    {
        self.state = FetchState::Loading;

        match source.fetch_posts().await {
            Ok(posts) => {
                info!(count = posts.len(), "fetched posts");
                self.state = FetchState::Ready(posts);
            }
            Err(err) => {
                error!(error = %err, "Error fetching data");
                self.state = FetchState::Ready(Vec::new());
            }
        }
    }
}

impl Component for DataFetcher {
    fn render(&self) -> Node {
        let posts = match &self.state {
            FetchState::Loading => return Node::element("p", ["Loading..."]),
            FetchState::Ready(posts) => posts,
        };

        let items = posts.iter().map(|post| {
            Element::new("li")
                .key(Key::Id(post.id.to_string()))
                .child(Node::element("h2", [post.title.as_str()]))
                .child(Node::element("p", [post.body.as_str()]))
        });

        Element::new("div")
            .child(Node::element("h1", ["Posts"]))
            .child(Element::new("ul").children(items))
            .into()
    }
}
