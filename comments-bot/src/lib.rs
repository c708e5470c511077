//! The `comments` chat command: item lookup, concurrent comment fetching
//! from both comment sites, and the reply blob.

pub mod bootstrap;
pub mod command;
pub mod config;
pub mod item_ref;
pub mod reply;
pub mod resolver;

pub use bootstrap::init_foundation;
pub use command::{CommandError, CommentHarvest, CommentsCommand, Resolution};
pub use config::BotConfig;
pub use item_ref::{ItemRef, parse_item_ref};
pub use reply::{ReplyChannel, StdoutReply};
pub use resolver::{ItemResolver, LocalItems};
