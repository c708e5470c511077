//! The `comments` chat command.
//!
//! Resolves the item the user asked about, fetches comments from both
//! sources concurrently and replies with one blob.

mod message;
mod resolve;

use chat_markup::ItemLookup;
use comment_client::{
    FlatComment, Fetcher, LegacySource, SourceError, TreeComment, TreeSource, merge,
};

use crate::config::BotConfig;
use crate::item_ref::ItemRef;
use crate::reply::ReplyChannel;
use crate::resolver::ItemResolver;

pub use resolve::Resolution;

/// Name the command is registered under.
pub const COMMAND_NAME: &str = "comments";

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Item search failed: {0}")]
    Items(#[from] item_db::DbError),

    #[error("Comment source setup failed: {0}")]
    Source(#[from] SourceError),
}

/// Everything fetched for one item, collected before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentHarvest {
    /// Legacy comments for the low and high id, merged oldest first.
    pub legacy: Vec<FlatComment>,
    /// Threaded comments in source order.
    pub tree: Vec<TreeComment>,
}

impl CommentHarvest {
    pub fn total(&self) -> usize {
        self.legacy.len() + self.tree.iter().map(TreeComment::node_count).sum::<usize>()
    }
}

pub struct CommentsCommand<R> {
    items: R,
    legacy: LegacySource,
    tree: TreeSource,
}

impl<R: ItemResolver> CommentsCommand<R> {
    pub fn new(items: R, config: &BotConfig) -> Result<Self, CommandError> {
        let fetcher = Fetcher::new(config.fetch_timeouts())?;
        Ok(Self {
            items,
            legacy: LegacySource::new(fetcher.clone(), &config.legacy_url)?,
            tree: TreeSource::new(fetcher, &config.tree_url)?,
        })
    }

    /// Handle one invocation with the user's argument.
    pub async fn run(&self, query: &str, reply: &impl ReplyChannel) -> Result<(), CommandError> {
        let query = query.trim();
        let resolution = match self.resolve(query) {
            Ok(resolution) => resolution,
            Err(e) => {
                tracing::error!(query, error = %e, "Item search failed");
                reply.reply(message::SEARCH_FAILED.to_string());
                return Err(e.into());
            }
        };
        let item = match resolution {
            Resolution::Item(item) => item,
            Resolution::NotFound => {
                tracing::info!(query, "No items matched");
                reply.reply(message::not_found(query));
                return Ok(());
            }
            Resolution::Ambiguous(results) => {
                tracing::info!(query, count = results.len(), "Asking user to pick an item");
                reply.reply(message::choose_item(
                    query,
                    &results,
                    self.items.max_search_results(),
                ));
                return Ok(());
            }
        };

        tracing::info!(
            low_id = item.low_id,
            high_id = item.high_id,
            name = %item.name,
            "Fetching comments"
        );
        let harvest = self.gather(&item).await;
        tracing::info!(
            legacy = harvest.legacy.len(),
            total = harvest.total(),
            "Comments collected"
        );
        reply.reply(message::comments(&item, &harvest));
        Ok(())
    }

    /// Fetch both sources at once. The legacy page is fetched for the high
    /// id too when it differs from the low id.
    pub async fn gather(&self, item: &ItemRef) -> CommentHarvest {
        let lookup: &(dyn ItemLookup + Sync) = &self.items;

        let legacy_low = self.legacy.comments(item.low_id, lookup);
        let legacy_high = async {
            if item.high_id != item.low_id {
                self.legacy.comments(item.high_id, lookup).await
            } else {
                Vec::new()
            }
        };
        let tree = self.tree.comments(item.low_id, lookup);

        let (low, high, tree) = tokio::join!(legacy_low, legacy_high, tree);
        CommentHarvest {
            legacy: merge(low, high),
            tree,
        }
    }
}
