//! Threaded comments from the JSON comment API.


use chat_markup::ItemLookup;
use url::Url;

use crate::SourceError;
use crate::fetch::{Fetched, Fetcher};
use crate::models::TreeComment;

/// Deepest reply chain accepted from the API.
pub const MAX_TREE_DEPTH: usize = 32;

/// Decode a JSON array of comment threads.
///
/// Any schema mismatch or bad date anywhere in the tree fails the whole
/// decode; partial trees are never returned.
pub fn hydrate(json: &[u8]) -> Result<Vec<TreeComment>, SourceError> {
    let comments: Vec<TreeComment> = serde_json::from_slice(json)?;
    let depth = forest_depth(&comments);
    if depth > MAX_TREE_DEPTH {
        return Err(SourceError::TooDeep {
            depth,
            limit: MAX_TREE_DEPTH,
        });
    }
    Ok(comments)
}

fn forest_depth(comments: &[TreeComment]) -> usize {
    comments
        .iter()
        .map(|c| 1 + forest_depth(&c.children))
        .max()
        .unwrap_or(0)
}

/// The threaded comment source, keyed by item id.
#[derive(Debug, Clone)]
pub struct TreeSource {
    fetcher: Fetcher,
    base: Url,
}

impl TreeSource {
    pub fn new(fetcher: Fetcher, base_url: &str) -> Result<Self, SourceError> {
        Ok(Self {
            fetcher,
            base: Url::parse(base_url)?,
        })
    }

    pub fn url_for(&self, item_id: u32) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("itemAOID", &item_id.to_string());
        url
    }

    /// Sanitized comment threads for an item. Empty on any failure.
    pub async fn comments(
        &self,
        item_id: u32,
        lookup: &(dyn ItemLookup + Sync),
    ) -> Vec<TreeComment> {
        let Fetched::Body(json) = self.fetcher.fetch(&self.url_for(item_id)).await else {
            return Vec::new();
        };
        match hydrate(&json) {
            Ok(comments) => {
                tracing::debug!(item_id, threads = comments.len(), "Hydrated comment threads");
                comments
                    .into_iter()
                    .map(|comment| comment.sanitized(lookup))
                    .collect()
            }
            Err(e) => {
                tracing::warn!(item_id, error = %e, "Failed to decode comment threads");
                Vec::new()
            }
        }
    }
}
