//! Item comment client library.
//!
//! Fetches player comments about game items from two third-party sites:
//! the legacy HTML item database and the threaded JSON comment API.
//! Both are best-effort: any network or format failure surfaces as an
//! empty comment list, never as an error to the caller.

pub mod fetch;
pub mod legacy;
pub mod merge;
pub mod models;
pub mod render;
pub mod tree;

pub use fetch::{EmptyReason, FetchTimeouts, Fetched, Fetcher};
pub use legacy::LegacySource;
pub use merge::merge;
pub use models::{FlatComment, TreeComment};
pub use render::{RenderedTree, render_flat, render_tree};
pub use tree::TreeSource;

/// Legacy HTML item page, queried with `?id=<item id>`.
pub const LEGACY_BASE: &str = "https://auno.org/ao/db.php";

/// Threaded comment API, queried with `?itemAOID=<item id>`.
pub const TREE_BASE: &str = "https://www.aogalaxy.com/_items/get_item_comments.php";

/// Unified error type for the comment-client crate.
///
/// Only used inside the crate's source wrappers, which log it and
/// degrade to "no comments".
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Request timed out")]
    Timeout,

    #[error("Empty response body")]
    EmptyBody,

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Comment section markers not found in page")]
    MissingRegion,

    #[error("Comment tree nested {depth} levels deep (limit {limit})")]
    TooDeep { depth: usize, limit: usize },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}
