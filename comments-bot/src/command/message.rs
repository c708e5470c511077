//! Reply texts for the comments command.

use chat_markup::markup::{PAGE_BREAK, blob, chat_command, highlight};
use comment_client::{render_flat, render_tree};
use item_db::ItemSearchResult;

use super::{COMMAND_NAME, CommentHarvest};
use crate::item_ref::ItemRef;

pub(super) const SEARCH_FAILED: &str = "Item search failed, try again later.";

pub(super) fn not_found(query: &str) -> String {
    format!("No items found matching {}.", highlight(query))
}

/// Disambiguation blob with one "See Comments" link per candidate.
pub(super) fn choose_item(query: &str, results: &[ItemSearchResult], max_results: usize) -> String {
    let mut body = format!("Search: {}\n", highlight(query));
    for result in results {
        let link = ItemRef::from(result).link();
        let rerun = chat_command(
            "See Comments",
            &format!("/tell <myname> {COMMAND_NAME} {link}"),
        );
        body.push_str(&format!("[{rerun}] {link}\n"));
    }
    if results.len() == max_results {
        body.push_str(&format!(
            "\n\n{}",
            highlight(&format!(
                "*Results have been limited to the first {max_results} results."
            ))
        ));
    }
    body.push_str("\n\n");
    blob(
        &format!("Item Search Results ({})", results.len()),
        &body,
        Some("Choose item for which to display comments"),
    )
}

pub(super) fn comments(item: &ItemRef, harvest: &CommentHarvest) -> String {
    let link = item.link();
    let tree = render_tree(&harvest.tree);
    let total = tree.count + harvest.legacy.len();
    if total == 0 {
        return format!("No comments found for {link}");
    }

    let mut sections = Vec::new();
    if tree.count > 0 {
        sections.push(format!(
            "<header2>AO Galaxy ({})<end>\n\n{}",
            tree.count, tree.text
        ));
    }
    if !harvest.legacy.is_empty() {
        sections.push(format!(
            "<header2>Auno ({})<end>\n\n{}",
            harvest.legacy.len(),
            render_flat(&harvest.legacy)
        ));
    }
    let body = sections.join(&format!("\n\n{PAGE_BREAK}"));

    let mut msg = blob(
        &format!("{total} comments"),
        &body,
        Some(&format!("{total} Comments for {link}")),
    );
    msg.push_str(&format!(" found for {link}"));
    msg
}
