//! Turn comments into blob text.

use chat_markup::markup::{PAGE_BREAK, TAB, highlight};

use crate::models::{FlatComment, TreeComment};

/// Rendered comment threads and the number of comments in them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedTree {
    pub text: String,
    pub count: usize,
}

fn separator() -> String {
    format!("\n\n{PAGE_BREAK}")
}

/// Flatten threads depth-first (parent before replies).
///
/// Every comment gets the next number of one counter shared by the whole
/// forest, and is indented one tab per reply level.
pub fn render_tree(comments: &[TreeComment]) -> RenderedTree {
    let mut count = 0;
    let blocks: Vec<String> = comments
        .iter()
        .map(|comment| render_node(comment, 0, &mut count))
        .collect();
    RenderedTree {
        text: blocks.join(&separator()),
        count,
    }
}

fn render_node(comment: &TreeComment, level: usize, counter: &mut usize) -> String {
    let indent = TAB.repeat(level);
    *counter += 1;
    let body = comment
        .body
        .split('\n')
        .map(|line| format!("{indent}{}", line.trim()))
        .collect::<Vec<_>>()
        .join("\n");
    let mut text = format!(
        "{indent}{:02} - {} - <orange>{}<end>\n{body}",
        *counter,
        highlight(&comment.timestamp.format("%Y-%m-%d").to_string()),
        comment.author,
    );
    for child in &comment.children {
        text.push_str(&separator());
        text.push_str(&render_node(child, level + 1, counter));
    }
    text
}

/// Render merged legacy comments, one page-breakable block each.
pub fn render_flat(comments: &[FlatComment]) -> String {
    comments
        .iter()
        .map(|comment| {
            let body = comment
                .body
                .split('\n')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(&format!("\n{TAB}"));
            format!(
                "{} <grey>[{}]<end>\n{TAB}{body}",
                highlight(&comment.author),
                comment.timestamp_raw
            )
        })
        .collect::<Vec<_>>()
        .join(&separator())
}
