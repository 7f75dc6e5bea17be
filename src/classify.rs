// src/classify.rs
//
// Classification of mixed-source records: the group activity export
// interleaves posts and comments in one file, distinguishable only by
// fixed phrases in the category and body text.

use crate::data::ActivityRecord;

/// Where a mixed-source record lands after classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Comment,
    Post,
    /// Neither marker matched. Dropped from both collections; the runner
    /// logs a per-load count of these.
    Unmatched,
}

/// Category names a reply/comment action and the body names a group.
/// Case-sensitive: the export phrases these markers verbatim.
pub fn is_group_comment(record: &ActivityRecord) -> bool {
    let category_matches = record
        .category
        .as_deref()
        .is_some_and(|c| c.contains("replied") || c.contains("commented"));
    let text_matches = record.text.as_deref().is_some_and(|t| t.contains("Group:"));
    category_matches && text_matches
}

/// Body says the user posted something.
pub fn is_group_post(record: &ActivityRecord) -> bool {
    record.text.as_deref().is_some_and(|t| t.contains("posted"))
}

/// Assign a record to exactly one collection, or neither. The comment
/// predicate wins when both match.
pub fn classify(record: &ActivityRecord) -> Classification {
    if is_group_comment(record) {
        Classification::Comment
    } else if is_group_post(record) {
        Classification::Post
    } else {
        Classification::Unmatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Option<&str>, text: Option<&str>) -> ActivityRecord {
        ActivityRecord {
            category: category.map(String::from),
            text: text.map(String::from),
            timestamp: None,
        }
    }

    #[test]
    fn comment_needs_both_markers() {
        let r = record(Some("Jane commented"), Some("Group: Book Club"));
        assert_eq!(classify(&r), Classification::Comment);

        // "replied" works too
        let r = record(Some("Jane replied to a thread"), Some("Group: Book Club"));
        assert_eq!(classify(&r), Classification::Comment);

        // Comment-ish category without a group body is not a group comment
        let r = record(Some("Jane commented"), Some("nice weather"));
        assert_eq!(classify(&r), Classification::Unmatched);

        // Group body without a comment-ish category is not one either
        let r = record(Some("liked a photo"), Some("Group: Book Club"));
        assert_eq!(classify(&r), Classification::Unmatched);
    }

    #[test]
    fn post_matches_on_body_alone() {
        let r = record(None, Some("John posted a photo"));
        assert_eq!(classify(&r), Classification::Post);
    }

    #[test]
    fn neither_marker_is_unmatched() {
        let r = record(Some("liked a photo"), Some("a sunset"));
        assert_eq!(classify(&r), Classification::Unmatched);

        let r = record(None, None);
        assert_eq!(classify(&r), Classification::Unmatched);
    }

    #[test]
    fn comment_predicate_wins_over_post() {
        // Body carries both "Group:" and "posted"; category says comment.
        let r = record(Some("Jane commented"), Some("Group: Photos, reposted by admin"));
        assert!(is_group_comment(&r));
        assert!(is_group_post(&r));
        assert_eq!(classify(&r), Classification::Comment);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let r = record(Some("Jane Commented"), Some("Group: Book Club"));
        assert_eq!(classify(&r), Classification::Unmatched);

        let r = record(None, Some("John Posted a photo"));
        assert_eq!(classify(&r), Classification::Unmatched);
    }
}
