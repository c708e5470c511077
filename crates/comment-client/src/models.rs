use chat_markup::{ItemLookup, clean_author, clean_tree_body};
use chrono::NaiveDate;
use serde::Deserialize;

/// A comment from the legacy HTML source.
///
/// `timestamp_raw` is always `YYYY-MM-DD HH:MM`, so comparing the strings
/// orders comments chronologically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlatComment {
    pub author: String,
    pub timestamp_raw: String,
    pub body: String,
}

/// A node of a threaded comment from the JSON source.
///
/// `id` is the source's internal id and says nothing about age. Children
/// keep the order the source delivered them in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeComment {
    pub id: i64,
    #[serde(rename = "rawText")]
    pub raw_body: String,
    /// Sanitized `raw_body`, filled in by [`TreeComment::sanitized`].
    #[serde(skip)]
    pub body: String,
    pub author: String,
    #[serde(rename = "score")]
    pub rank_score: i64,
    #[serde(deserialize_with = "comment_date::deserialize")]
    pub timestamp: NaiveDate,
    #[serde(default)]
    pub children: Vec<TreeComment>,
}

impl TreeComment {
    /// Clean this comment and all of its replies. The author is reduced
    /// to plain text.
    pub fn sanitized(self, lookup: &dyn ItemLookup) -> Self {
        let body = clean_tree_body(&self.raw_body, lookup);
        let author = clean_author(&self.author);
        let children = self
            .children
            .into_iter()
            .map(|child| child.sanitized(lookup))
            .collect();
        Self {
            body,
            author,
            children,
            ..self
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeComment::node_count).sum::<usize>()
    }
}

/// `"Mar 05, 2021"` style dates.
pub(crate) mod comment_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, de};

    pub const FORMAT: &str = "%b %d, %Y";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(raw.trim(), FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid comment date {raw:?}: {e}")))
    }
}
