// src/specs/entries.rs
//
// Entry extractor for archive pages. All five source files share one
// structure: a `_4t5n` container holding one `uiBoxWhite` box per
// activity entry, with up to three field divs inside:
//
//   _2lel  category label ("Likes", "Jane commented on ...")
//   _2let  free-text body
//   _2lem  timestamp, e.g. "Jan 5, 2020, 3:45 PM"
//
// Any field may be missing. An entry with all three missing means the
// class markers have shifted (newer export format); abort the whole file
// instead of producing an all-empty dataset.

use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::core::sanitize::normalize_ws;
use crate::data::ActivityRecord;
use crate::error::{LoadError, LoadResult};

/// The one date format the archive uses, fixed locale.
pub const TIMESTAMP_FORMAT: &str = "%b %d, %Y, %I:%M %p";

static CONTAINER: LazyLock<Selector> = LazyLock::new(|| sel("div._4t5n"));
static ENTRY: LazyLock<Selector> = LazyLock::new(|| sel("div.uiBoxWhite"));
static CATEGORY: LazyLock<Selector> = LazyLock::new(|| sel("div._2lel"));
static TEXT: LazyLock<Selector> = LazyLock::new(|| sel("div._2let"));
static TIMESTAMP: LazyLock<Selector> = LazyLock::new(|| sel("div._2lem"));

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("hardcoded selector")
}

/// Extract one record per entry box, in document order.
///
/// `path` is only used for error reporting. Returns exactly as many
/// records as there are entry boxes. Fails on a missing entry container,
/// on the first entry with no recoverable field, and on the first
/// malformed timestamp; a single bad entry signals a structural mismatch
/// that likely affects the whole file.
pub fn extract(doc: &Html, path: &Path) -> LoadResult<Vec<ActivityRecord>> {
    let container = doc.select(&CONTAINER).next().ok_or_else(|| {
        LoadError::UnparseableEntry {
            path: path.to_path_buf(),
            detail: "entry container (_4t5n) not found".into(),
        }
    })?;

    let mut records = Vec::new();
    for (index, entry) in container.select(&ENTRY).enumerate() {
        let category = field_text(entry, &CATEGORY);
        let text = field_text(entry, &TEXT);

        // For the timestamp, present-but-garbled is fatal while absent is
        // fine: the format is assumed stable across the archive.
        let timestamp = match entry.select(&TIMESTAMP).next() {
            Some(el) => {
                let raw = element_text(el);
                Some(parse_timestamp(&raw).map_err(|e| {
                    LoadError::UnparseableTimestamp {
                        path: path.to_path_buf(),
                        index,
                        value: raw.clone(),
                        source: e,
                    }
                })?)
            }
            None => None,
        };

        let record = ActivityRecord { category, text, timestamp };
        if record.is_blank() {
            return Err(LoadError::UnparseableEntry {
                path: path.to_path_buf(),
                detail: format!("entry {index} has no recoverable fields"),
            });
        }
        records.push(record);
    }

    debug!(entries = records.len(), path = %path.display(), "extracted");
    Ok(records)
}

pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
}

/* ---------- helpers ---------- */

/// First matching field div's text, or None when the div is absent or
/// holds nothing but whitespace.
fn field_text(entry: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let el = entry.select(selector).next()?;
    let joined = element_text(el);
    (!joined.is_empty()).then_some(joined)
}

/// All text nodes under the element, joined and whitespace-collapsed.
fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}
