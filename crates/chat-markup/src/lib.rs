//! In-game chat markup helpers and comment text sanitation.
//!
//! The game client renders a small HTML-like markup (item references,
//! chat commands, text blobs). Everything that ends up in a bot reply
//! is built through [`markup`], and untrusted third-party text is
//! reduced to that subset by [`sanitize`].

pub mod markup;
pub mod sanitize;

pub use sanitize::{clean_author, clean_legacy_body, clean_tree_body};

/// An item row pair as known to the local item database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedItem {
    pub low_id: u32,
    pub high_id: u32,
    pub low_ql: u32,
    pub high_ql: u32,
    pub name: String,
}

impl LinkedItem {
    /// Quality level of the database row that `id` refers to.
    pub fn ql_for(&self, id: u32) -> u32 {
        if id == self.low_id {
            self.low_ql
        } else {
            self.high_ql
        }
    }

    /// Item reference link at the given QL.
    pub fn link(&self, ql: u32) -> String {
        markup::item_link(self.low_id, self.high_id, ql, &self.name)
    }
}

/// Capability to resolve a numeric item id found in comment text.
///
/// Injected into the sanitizer so it never reaches for global state.
pub trait ItemLookup {
    /// Look up the item whose low or high id equals `id`.
    fn find_by_id(&self, id: u32) -> Option<LinkedItem>;
}

impl<T: ItemLookup + ?Sized> ItemLookup for &T {
    fn find_by_id(&self, id: u32) -> Option<LinkedItem> {
        (**self).find_by_id(id)
    }
}

impl<T: ItemLookup + ?Sized> ItemLookup for std::sync::Arc<T> {
    fn find_by_id(&self, id: u32) -> Option<LinkedItem> {
        (**self).find_by_id(id)
    }
}
