// src/data.rs
//
// Canonical in-memory dataset: the three unified activity collections.
// Loaded from cache at startup when possible; otherwise built by the
// runner from the archive sources and cached for the next run.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One entry recovered from an archive page.
///
/// Any subset of the fields may be missing. An entry with all three
/// missing never leaves the extractor (see `specs::entries`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub category: Option<String>,
    pub text: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
}

impl ActivityRecord {
    pub fn is_blank(&self) -> bool {
        self.category.is_none() && self.text.is_none() && self.timestamp.is_none()
    }
}

/// Likes, comments and posts after merge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityData {
    pub likes: Vec<ActivityRecord>,
    pub comments: Vec<ActivityRecord>,
    pub posts: Vec<ActivityRecord>,
}

impl ActivityData {
    pub fn count_likes(&self) -> usize { self.likes.len() }
    pub fn count_comments(&self) -> usize { self.comments.len() }
    pub fn count_posts(&self) -> usize { self.posts.len() }

    /// True when all three collections are empty. An all-empty cached
    /// dataset counts as a miss so a bad earlier run can't stick around.
    pub fn is_empty(&self) -> bool {
        self.likes.is_empty() && self.comments.is_empty() && self.posts.is_empty()
    }

    /// Likes per calendar month, zero-filled over the continuous range
    /// from the earliest to the latest timestamped like. Likes without a
    /// timestamp count toward the overview total but not the trend.
    pub fn monthly_likes(&self) -> Vec<MonthCount> {
        let stamps: Vec<NaiveDateTime> =
            self.likes.iter().filter_map(|r| r.timestamp).collect();

        let (first, last) = match (stamps.iter().min(), stamps.iter().max()) {
            (Some(a), Some(b)) => (*a, *b),
            _ => return Vec::new(),
        };

        let mut out = Vec::new();
        let (mut year, mut month) = (first.year(), first.month());
        loop {
            let count = stamps
                .iter()
                .filter(|t| t.year() == year && t.month() == month)
                .count();
            out.push(MonthCount { year, month, count });

            if year == last.year() && month == last.month() { break; }
            month += 1;
            if month > 12 { month = 1; year += 1; }
        }
        out
    }
}

/// One bucket of the monthly likes trend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCount {
    pub year: i32,
    pub month: u32,
    pub count: usize,
}
