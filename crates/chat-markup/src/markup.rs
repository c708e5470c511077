//! Builders for the chat client's markup.

pub const PAGE_BREAK: &str = "<pagebreak>";
pub const TAB: &str = "<tab>";

/// Link to an item at a specific quality level.
pub fn item_link(low_id: u32, high_id: u32, ql: u32, name: &str) -> String {
    format!("<a href=\"itemref://{low_id}/{high_id}/{ql}\">{name}</a>")
}

/// Clickable link that runs `command` (e.g. `/tell <myname> help`) in the client.
///
/// Single quotes delimit the href, so any inside the command are escaped.
pub fn chat_command(label: &str, command: &str) -> String {
    let command = command.replace('\'', "&#39;");
    format!("<a href='chatcmd://{command}'>{label}</a>")
}

/// Popup text window opened by clicking `title`.
///
/// The body is embedded in a double-quoted href, so double quotes in it are
/// entity-encoded. The client decodes them when it opens the window.
pub fn blob(title: &str, body: &str, header: Option<&str>) -> String {
    let content = match header {
        Some(header) => format!("<header>{header}<end>\n\n{body}"),
        None => body.to_string(),
    };
    let content = content.replace('"', "&quot;");
    format!("<a href=\"text://{content}\">{title}</a>")
}

pub fn highlight(text: &str) -> String {
    format!("<highlight>{text}<end>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_link_format() {
        assert_eq!(
            item_link(246660, 246660, 300, "Combined Commando's Jacket"),
            "<a href=\"itemref://246660/246660/300\">Combined Commando's Jacket</a>"
        );
    }

    #[test]
    fn chat_command_escapes_single_quotes() {
        let link = chat_command("See", "/tell <myname> comments Sergeant's Hat");
        assert_eq!(
            link,
            "<a href='chatcmd:///tell <myname> comments Sergeant&#39;s Hat'>See</a>"
        );
    }

    #[test]
    fn blob_escapes_double_quotes_and_adds_header() {
        let body = item_link(1, 2, 3, "Thing");
        let out = blob("1 comments", &body, Some("Comments"));
        assert_eq!(
            out,
            "<a href=\"text://<header>Comments<end>\n\n<a href=&quot;itemref://1/2/3&quot;>Thing</a>\">1 comments</a>"
        );
    }

    #[test]
    fn blob_without_header() {
        assert_eq!(blob("t", "body", None), "<a href=\"text://body\">t</a>");
    }
}
