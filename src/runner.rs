// src/runner.rs
//
// Top-level load pipeline: cache short-circuit, per-source extraction,
// classification split of the mixed source, merge.

use std::{fs, path::Path};

use scraper::Html;
use tracing::{debug, info, warn};

use crate::classify::{self, Classification};
use crate::data::{ActivityData, ActivityRecord};
use crate::error::{LoadError, LoadResult};
use crate::params::Params;
use crate::specs::entries;
use crate::specs::sources::{ARCHIVE_SOURCES, SourceRole, SourceSpec};
use crate::store;

/// Load the dataset, consulting the cache first.
///
/// A corrupted cache is a miss, not a failure. An all-empty cached
/// dataset is also a miss: re-extract rather than echo a bad run.
pub fn load(params: &Params) -> LoadResult<ActivityData> {
    if !params.refresh {
        match store::load(&params.cache_path) {
            Ok(Some(data)) if !data.is_empty() => {
                info!(path = %params.cache_path.display(), "using cached dataset");
                return Ok(data);
            }
            Ok(Some(_)) => debug!("cached dataset is empty; rebuilding"),
            Ok(None) => {}
            Err(e) => warn!("ignoring cache: {e}"),
        }
    }

    let data = build_dataset(&params.archive_dir)?;

    // Cache for next time; a failed write must not fail the run.
    if let Err(e) = store::save(&params.cache_path, &data) {
        warn!(path = %params.cache_path.display(), "could not write cache: {e}");
    }

    Ok(data)
}

/// Build the three unified collections from the archive sources.
///
/// Merge order is fixed: dedicated-source records first, then the
/// classified subset of the mixed source, each in document order. Any
/// extraction failure aborts the whole build with no partial dataset.
pub fn build_dataset(archive_dir: &Path) -> LoadResult<ActivityData> {
    let mut data = ActivityData::default();
    let mut mixed: Vec<ActivityRecord> = Vec::new();

    for spec in ARCHIVE_SOURCES {
        let records = extract_source(archive_dir, spec)?;
        match spec.role {
            SourceRole::Likes => data.likes.extend(records),
            SourceRole::Comments => data.comments.extend(records),
            SourceRole::Posts => data.posts.extend(records),
            SourceRole::Mixed => mixed.extend(records),
        }
    }

    let mut dropped = 0usize;
    for record in mixed {
        match classify::classify(&record) {
            Classification::Comment => data.comments.push(record),
            Classification::Post => data.posts.push(record),
            Classification::Unmatched => dropped += 1,
        }
    }
    if dropped > 0 {
        // Known classification gap: the group export phrases some
        // activities with neither marker. Counted, not guessed at.
        debug!(dropped, "mixed-source records matched no predicate");
    }

    info!(
        likes = data.likes.len(),
        comments = data.comments.len(),
        posts = data.posts.len(),
        "dataset built"
    );
    Ok(data)
}

fn extract_source(archive_dir: &Path, spec: &SourceSpec) -> LoadResult<Vec<ActivityRecord>> {
    let path = spec.path_in(archive_dir);
    let text = fs::read_to_string(&path).map_err(|e| LoadError::MissingSource {
        path: path.clone(),
        source: e,
    })?;
    let doc = Html::parse_document(&text);
    entries::extract(&doc, &path)
}
