//! Scraper for the legacy HTML item page.
//!
//! The page has no API, so comments are cut out of its markup. The
//! expected layout is:
//!
//! ```text
//! <legend>Comments</legend> ... <table>
//!   <tr><td ...><b>AUTHOR</b> @ YYYY-MM-DD HH:MM</td></tr>
//!   <tr><td ...>COMMENT HTML</td></tr>
//!   ...
//! </table>
//! ```
//!
//! The region runs from [`REGION_START`] to the first [`REGION_END`] after
//! it (both matched case-insensitively). If either marker is missing the
//! page layout has changed and parsing fails with
//! [`SourceError::MissingRegion`].

use std::sync::LazyLock;

use chat_markup::{ItemLookup, clean_author, clean_legacy_body};
use regex::Regex;
use url::Url;

use crate::fetch::{Fetched, Fetcher};
use crate::models::FlatComment;
use crate::SourceError;

pub const REGION_START: &str = "<legend>comments</legend>";
pub const REGION_END: &str = "</table>";

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<b>\s*(?P<author>[^<]+?)\s*</b>\s*@\s*(?P<time>\d{4}-\d{2}-\d{2} \d{2}:\d{2})\s*</td>\s*</tr>\s*<tr[^>]*>\s*<td[^>]*>(?P<comment>.*?)</td>",
    )
    .unwrap()
});

/// Cut the comment table out of a page.
pub fn comment_region(page: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets identical.
    let lower = page.to_ascii_lowercase();
    let start = lower.find(REGION_START)? + REGION_START.len();
    let end = start + lower[start..].find(REGION_END)?;
    Some(&page[start..end])
}

/// Extract comments in document order, each body already sanitized.
pub fn parse_comments(
    page: &[u8],
    lookup: &dyn ItemLookup,
) -> Result<Vec<FlatComment>, SourceError> {
    let page = String::from_utf8_lossy(page);
    let region = comment_region(&page).ok_or(SourceError::MissingRegion)?;

    let comments = RE_COMMENT
        .captures_iter(region)
        .map(|caps| FlatComment {
            author: clean_author(&caps["author"]),
            timestamp_raw: caps["time"].to_string(),
            body: clean_legacy_body(&caps["comment"], lookup),
        })
        .collect();
    Ok(comments)
}

/// The legacy comment source, keyed by a single item id.
#[derive(Debug, Clone)]
pub struct LegacySource {
    fetcher: Fetcher,
    base: Url,
}

impl LegacySource {
    pub fn new(fetcher: Fetcher, base_url: &str) -> Result<Self, SourceError> {
        Ok(Self {
            fetcher,
            base: Url::parse(base_url)?,
        })
    }

    pub fn url_for(&self, item_id: u32) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("id", &item_id.to_string());
        url
    }

    /// Comments for one item id. Empty when the site is down or the page
    /// cannot be parsed.
    pub async fn comments(
        &self,
        item_id: u32,
        lookup: &(dyn ItemLookup + Sync),
    ) -> Vec<FlatComment> {
        let Fetched::Body(page) = self.fetcher.fetch(&self.url_for(item_id)).await else {
            return Vec::new();
        };
        match parse_comments(&page, lookup) {
            Ok(comments) => {
                tracing::debug!(item_id, count = comments.len(), "Parsed legacy comments");
                comments
            }
            Err(e) => {
                tracing::warn!(item_id, error = %e, "Failed to parse legacy comment page");
                Vec::new()
            }
        }
    }
}
