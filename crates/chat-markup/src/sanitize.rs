//! Reduce third-party comment HTML to the bot's own markup.
//!
//! Every step is a plain string rewrite. A pattern that does not match
//! leaves the text alone, so sanitation cannot fail.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{ItemLookup, markup};

static RE_LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static RE_NEWLINE_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\n\s*").unwrap());
static RE_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*?href\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))[^>]*>(.*?)</a\s*>"#)
        .unwrap()
});
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static RE_ITEM_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)https?://(?:(?:www\.)?auno\.org/ao/db\.php\?id=|(?:www\.)?aogalaxy\.com/_items/item\.php\?aoid=)(?P<id>\d+)(?:&(?:amp;)?ql=(?P<ql>\d+))?",
    )
    .unwrap()
});
static RE_WAYPOINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/waypoint\s*(\d+)\s+(\d+)\s+(\d+)").unwrap());
static RE_BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^'"\s<>]+"#).unwrap());

/// Clean a comment body from the threaded JSON source.
pub fn clean_tree_body(raw: &str, lookup: &dyn ItemLookup) -> String {
    let text = strip_line_breaks(raw);
    let text = unwrap_anchors(&text);
    let text = strip_tags(&text);
    rewrite_links(&text, lookup)
}

/// Clean a comment body scraped from the legacy HTML page.
///
/// These bodies are prose with hard-wrapped source lines, so source
/// newlines are dropped and only `<br>` tags become line breaks.
pub fn clean_legacy_body(raw: &str, lookup: &dyn ItemLookup) -> String {
    let text = RE_NEWLINE_WS.replace_all(raw, "");
    let text = RE_LINE_BREAK.replace_all(&text, "\n");
    let text = unwrap_anchors(&text);
    let text = strip_tags(&text);
    rewrite_links(text.trim(), lookup)
}

/// Reduce an author name to plain text. Tags are dropped and any stray
/// angle brackets left over are removed.
pub fn clean_author(raw: &str) -> String {
    strip_tags(raw)
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect::<String>()
        .trim()
        .to_string()
}

fn rewrite_links(text: &str, lookup: &dyn ItemLookup) -> String {
    let text = rewrite_item_links(text, lookup);
    let text = rewrite_waypoints(&text);
    linkify_urls(&text)
}

pub fn strip_line_breaks(text: &str) -> String {
    RE_LINE_BREAK.replace_all(text, "").into_owned()
}

/// Replace each anchor by its href when that is an absolute http(s) URL,
/// otherwise by its label.
pub fn unwrap_anchors(text: &str) -> String {
    RE_ANCHOR
        .replace_all(text, |caps: &Captures| {
            let href = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            if is_absolute_url(href) {
                href.to_string()
            } else {
                caps[4].to_string()
            }
        })
        .into_owned()
}

pub fn strip_tags(text: &str) -> String {
    RE_TAG.replace_all(text, "").into_owned()
}

/// Turn item database URLs into item links. Ids the lookup does not know
/// are left exactly as they were.
pub fn rewrite_item_links(text: &str, lookup: &dyn ItemLookup) -> String {
    RE_ITEM_URL
        .replace_all(text, |caps: &Captures| {
            let Ok(id) = caps["id"].parse::<u32>() else {
                return caps[0].to_string();
            };
            let Some(item) = lookup.find_by_id(id) else {
                tracing::debug!(item_id = id, "Unknown item in comment link, keeping URL");
                return caps[0].to_string();
            };
            let ql = caps
                .name("ql")
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .unwrap_or_else(|| item.ql_for(id));
            item.link(ql)
        })
        .into_owned()
}

pub fn rewrite_waypoints(text: &str) -> String {
    RE_WAYPOINT
        .replace_all(text, |caps: &Captures| {
            let command = format!("/waypoint {} {} {}", &caps[1], &caps[2], &caps[3]);
            markup::chat_command(&command, &command)
        })
        .into_owned()
}

/// Make every bare http(s) URL open in the client's browser.
pub fn linkify_urls(text: &str) -> String {
    RE_BARE_URL
        .replace_all(text, |caps: &Captures| {
            let url = &caps[0];
            markup::chat_command(url, &format!("/start {url}"))
        })
        .into_owned()
}

fn is_absolute_url(href: &str) -> bool {
    let lower = href.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
