//! listkit-core - typed UI node tree and example components
//!
//! This crate provides:
//! - `Node`/`Element`: a plain renderable tree with positional or id keys
//! - The generic list renderer (`render_list`, `try_render_list`, `GenericList`)
//! - Components: `Greeting`, `InputForm`, `DataFetcher`, `AppShell`
//! - `ProgramMode`: closed enum of program modes with string identifiers
//! - HTML and plain-text renderers (`Node` also serializes to JSON)
//! - TOML configuration and the `PostSource` seam for fetching posts

pub mod component;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod form;
pub mod greeting;
pub mod list;
pub mod node;
pub mod posts;
pub mod program_mode;
pub mod render_html;
pub mod render_text;
pub mod shell;

pub use component::Component;
pub use config::ListkitConfig;
pub use error::{ListkitError, Result};
pub use fetcher::{DataFetcher, FetchState};
pub use form::{InputForm, Submission};
pub use greeting::Greeting;
pub use list::{render_list, span, try_render_list, GenericList};
pub use node::{Element, Key, Node};
#[cfg(feature = "http")]
pub use posts::HttpPostSource;
pub use posts::{Post, PostSource, StaticPostSource};
pub use program_mode::ProgramMode;
pub use render_html::render_html;
pub use render_text::render_text;
pub use shell::AppShell;
