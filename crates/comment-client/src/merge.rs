use std::collections::HashSet;

use crate::models::FlatComment;

/// Merge the legacy comments fetched for an item's low and high id.
///
/// The result is ordered oldest first. The sort is stable, so equal
/// timestamps keep their input order (`first` before `second`). A comment
/// listed under both ids is kept once.
pub fn merge(first: Vec<FlatComment>, second: Vec<FlatComment>) -> Vec<FlatComment> {
    let mut seen = HashSet::new();
    let mut merged: Vec<FlatComment> = first
        .into_iter()
        .chain(second)
        .filter(|comment| seen.insert(comment.clone()))
        .collect();
    merged.sort_by(|a, b| a.timestamp_raw.cmp(&b.timestamp_raw));
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(author: &str, time: &str, body: &str) -> FlatComment {
        FlatComment {
            author: author.into(),
            timestamp_raw: time.into(),
            body: body.into(),
        }
    }

    #[test]
    fn orders_ascending_regardless_of_input_order() {
        let newer = comment("a", "2006-01-02 10:00", "new");
        let older = comment("b", "2004-12-31 23:59", "old");
        assert_eq!(
            merge(vec![newer.clone()], vec![older.clone()]),
            vec![older.clone(), newer.clone()]
        );
        assert_eq!(merge(vec![older.clone()], vec![newer.clone()]), vec![older, newer]);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let t = "2005-05-05 05:05";
        let merged = merge(
            vec![comment("x", t, "1"), comment("y", t, "2")],
            vec![comment("z", t, "3"), comment("w", "2001-01-01 00:00", "0")],
        );
        let bodies: Vec<&str> = merged.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn drops_comment_listed_under_both_ids() {
        let shared = comment("a", "2005-01-01 00:00", "same");
        let merged = merge(
            vec![shared.clone(), comment("b", "2006-01-01 00:00", "low only")],
            vec![shared.clone()],
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], shared);
    }

    #[test]
    fn same_time_different_body_is_not_a_duplicate() {
        let merged = merge(
            vec![comment("a", "2005-01-01 00:00", "one")],
            vec![comment("a", "2005-01-01 00:00", "two")],
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn empty_inputs() {
        assert!(merge(Vec::new(), Vec::new()).is_empty());
    }
}
