//! The item a command invocation is about.

use std::sync::LazyLock;

use chat_markup::markup;
use item_db::ItemSearchResult;
use regex::Regex;

static RE_ITEM_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)^\s*<a\s+href\s*=\s*["']?itemref://(\d+)/(\d+)/(\d+)["']?\s*>(.+?)</a>\s*$"#,
    )
    .unwrap()
});

/// An item across its low-QL and high-QL database rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRef {
    pub low_id: u32,
    pub high_id: u32,
    pub ql: u32,
    pub name: String,
}

impl ItemRef {
    pub fn link(&self) -> String {
        markup::item_link(self.low_id, self.high_id, self.ql, &self.name)
    }
}

impl From<&ItemSearchResult> for ItemRef {
    fn from(result: &ItemSearchResult) -> Self {
        Self {
            low_id: result.item.low_id,
            high_id: result.item.high_id,
            ql: result.item.high_ql,
            name: result.item.name.clone(),
        }
    }
}

/// Parse an item link pasted into chat, e.g.
/// `<a href="itemref://246660/246660/300">Combined Commando's Jacket</a>`.
pub fn parse_item_ref(text: &str) -> Option<ItemRef> {
    let caps = RE_ITEM_REF.captures(text)?;
    let name = caps[4].trim();
    if name.is_empty() {
        return None;
    }
    Some(ItemRef {
        low_id: caps[1].parse().ok()?,
        high_id: caps[2].parse().ok()?,
        ql: caps[3].parse().ok()?,
        name: name.to_string(),
    })
}
