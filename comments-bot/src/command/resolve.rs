//! Turn the user's argument into exactly one item, or explain why not.

use std::collections::HashSet;

use item_db::{DbError, ItemSearchResult};

use super::CommentsCommand;
use crate::item_ref::{ItemRef, parse_item_ref};
use crate::resolver::ItemResolver;

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Item(ItemRef),
    NotFound,
    /// Several candidates and no single exact name match.
    Ambiguous(Vec<ItemSearchResult>),
}

impl<R: ItemResolver> CommentsCommand<R> {
    /// A pasted item link wins. Otherwise the item database is searched.
    pub fn resolve(&self, query: &str) -> Result<Resolution, DbError> {
        if let Some(item) = parse_item_ref(query) {
            return Ok(Resolution::Item(item));
        }
        let results = dedup_by_ids(self.items.search(query)?);
        Ok(pick(results))
    }
}

/// Keep the first result of every `(low_id, high_id)` pair.
fn dedup_by_ids(results: Vec<ItemSearchResult>) -> Vec<ItemSearchResult> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|r| seen.insert((r.item.low_id, r.item.high_id)))
        .collect()
}

fn pick(mut results: Vec<ItemSearchResult>) -> Resolution {
    match results.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Item(ItemRef::from(&results.remove(0))),
        _ => {
            let mut exact = results.iter().filter(|r| r.exact_match_percent == 100);
            match (exact.next(), exact.next()) {
                (Some(only), None) => Resolution::Item(ItemRef::from(only)),
                _ => Resolution::Ambiguous(results),
            }
        }
    }
}
