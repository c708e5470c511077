//! Item search as seen by the command.

use chat_markup::{ItemLookup, LinkedItem};
use item_db::{Database, DbError, ItemSearchResult};

/// Free-text item search plus id lookup for comment link rewriting.
pub trait ItemResolver: ItemLookup + Send + Sync {
    fn search(&self, query: &str) -> Result<Vec<ItemSearchResult>, DbError>;

    /// The search result cap. Hitting it exactly means results were cut off.
    fn max_search_results(&self) -> usize;
}

/// [`ItemResolver`] backed by the local SQLite item database.
#[derive(Clone)]
pub struct LocalItems {
    db: Database,
    max_results: usize,
}

impl LocalItems {
    pub fn new(db: Database, max_results: usize) -> Self {
        Self { db, max_results }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl ItemLookup for LocalItems {
    fn find_by_id(&self, id: u32) -> Option<LinkedItem> {
        self.db.find_by_id(id)
    }
}

impl ItemResolver for LocalItems {
    fn search(&self, query: &str) -> Result<Vec<ItemSearchResult>, DbError> {
        self.db.search_items(query, self.max_results)
    }

    fn max_search_results(&self) -> usize {
        self.max_results
    }
}
