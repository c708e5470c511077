//! Item rows, name search and id lookup.

use chat_markup::LinkedItem;
use rusqlite::Row;
use serde::Deserialize;

use crate::{Database, DbError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemRecord {
    #[serde(alias = "lowid")]
    pub low_id: u32,
    #[serde(alias = "highid")]
    pub high_id: u32,
    #[serde(alias = "lowql")]
    pub low_ql: u32,
    #[serde(alias = "highql")]
    pub high_ql: u32,
    pub name: String,
}

impl ItemRecord {
    pub fn into_linked(self) -> LinkedItem {
        LinkedItem {
            low_id: self.low_id,
            high_id: self.high_id,
            low_ql: self.low_ql,
            high_ql: self.high_ql,
            name: self.name,
        }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            low_id: row.get(0)?,
            high_id: row.get(1)?,
            low_ql: row.get(2)?,
            high_ql: row.get(3)?,
            name: row.get(4)?,
        })
    }
}

/// A name search hit.
///
/// `exact_match_percent` is the share of search words that appear as whole
/// words in the item name; 100 means every word did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSearchResult {
    pub item: ItemRecord,
    pub exact_match_percent: u8,
}

impl Database {
    pub fn insert_items(&self, items: &[ItemRecord]) -> Result<usize, DbError> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let mut inserted = 0;
            {
                let mut stmt = tx.prepare(
                    "INSERT OR REPLACE INTO items (lowid, highid, lowql, highql, name)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )?;
                for item in items {
                    if item.name.trim().is_empty() {
                        return Err(DbError::InvalidData(format!(
                            "item {}/{} has no name",
                            item.low_id, item.high_id
                        )));
                    }
                    inserted += stmt.execute(rusqlite::params![
                        item.low_id,
                        item.high_id,
                        item.low_ql,
                        item.high_ql,
                        item.name
                    ])?;
                }
            }
            tx.commit()?;
            Ok(inserted)
        })
    }

    /// Import a JSON array of item rows.
    pub fn import_json(&self, json: &str) -> Result<usize, DbError> {
        let items: Vec<ItemRecord> =
            serde_json::from_str(json).map_err(|e| DbError::InvalidData(e.to_string()))?;
        let inserted = self.insert_items(&items)?;
        tracing::info!(count = inserted, "Imported items");
        Ok(inserted)
    }

    pub fn count_items(&self) -> Result<usize, DbError> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
            Ok(count as usize)
        })
    }

    /// The item whose low or high id is `id`, preferring the highest QL range.
    pub fn get_item_by_id(&self, id: u32) -> Result<Option<ItemRecord>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT lowid, highid, lowql, highql, name FROM items
                 WHERE lowid = ?1 OR highid = ?1
                 ORDER BY highql DESC
                 LIMIT 1",
            )?;
            let mut rows = stmt.query_map([id], ItemRecord::from_row)?;
            rows.next().transpose().map_err(Into::into)
        })
    }

    /// Items whose name contains every word of `query`, case-insensitively.
    pub fn search_items(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ItemSearchResult>, DbError> {
        let words: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if words.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let clause = (1..=words.len())
            .map(|i| format!("LOWER(name) LIKE ?{i} ESCAPE '\\'"))
            .collect::<Vec<_>>()
            .join(" AND ");
        let sql = format!(
            "SELECT lowid, highid, lowql, highql, name FROM items
             WHERE {clause}
             ORDER BY name ASC, highql DESC
             LIMIT {limit}"
        );
        let patterns: Vec<String> = words
            .iter()
            .map(|w| format!("%{}%", escape_like(w)))
            .collect();

        let items = self.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(rusqlite::params_from_iter(patterns.iter()), ItemRecord::from_row)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        })?;

        Ok(items
            .into_iter()
            .map(|item| {
                let exact_match_percent = exact_match_percent(&item.name, &words);
                ItemSearchResult {
                    item,
                    exact_match_percent,
                }
            })
            .collect())
    }
}

fn escape_like(word: &str) -> String {
    word.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn exact_match_percent(name: &str, words: &[String]) -> u8 {
    let name_words: Vec<String> = name
        .split(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | ',' | ':' | '-'))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    let matched = words
        .iter()
        .filter(|w| name_words.iter().any(|n| n == *w))
        .count();
    (matched * 100 / words.len()) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_percent_counts_whole_words() {
        let words = |q: &str| q.split_whitespace().map(str::to_lowercase).collect::<Vec<_>>();
        assert_eq!(exact_match_percent("Combined Commando's Jacket", &words("jacket")), 100);
        assert_eq!(exact_match_percent("Combined Commando's Jacket", &words("jack")), 0);
        assert_eq!(exact_match_percent("Ofab Shark Mk 1", &words("shark mk 2")), 66);
        assert_eq!(exact_match_percent("Notum Tree (Clan)", &words("tree clan")), 100);
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_a\\b"), "50\\%\\_a\\\\b");
    }
}
