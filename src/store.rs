// src/store.rs
//
// Dataset cache. One JSON file holding the merged ActivityData; the
// runner consults it before touching the archive and rewrites it after a
// successful build.

use std::{fs, io, path::Path};

use tracing::debug;

use crate::data::ActivityData;
use crate::error::{LoadError, LoadResult};

/// Default cache location, relative to the working directory.
pub const DEFAULT_CACHE_FILE: &str = ".store/activity_data.json";

/// Load a previously cached dataset.
///
/// An absent file is a plain miss (`Ok(None)`). A file that exists but
/// can't be read or decoded is `CorruptedCache`; whether that is fatal
/// is the caller's call (the runner treats it as a miss).
pub fn load(path: &Path) -> LoadResult<Option<ActivityData>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(LoadError::CorruptedCache {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };

    let data = serde_json::from_str(&text).map_err(|e| LoadError::CorruptedCache {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), "cache hit");
    Ok(Some(data))
}

/// Write the dataset, creating parent directories as needed.
pub fn save(path: &Path, data: &ActivityData) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string(data)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ActivityRecord;

    fn sample() -> ActivityData {
        ActivityData {
            likes: vec![ActivityRecord {
                category: Some("Likes".into()),
                text: Some("a page".into()),
                timestamp: crate::specs::entries::parse_timestamp("Jan 5, 2020, 3:45 PM").ok(),
            }],
            comments: vec![],
            posts: vec![],
        }
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/cache.json");

        let data = sample();
        save(&path, &data).unwrap();
        let loaded = load(&path).unwrap().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn absent_file_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("nope.json")).unwrap().is_none());
    }

    #[test]
    fn garbage_is_corrupted_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "not json {").unwrap();

        match load(&path) {
            Err(LoadError::CorruptedCache { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected CorruptedCache, got {other:?}"),
        }
    }

    #[test]
    fn wrong_shape_is_corrupted_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, r#"{"likes": 3}"#).unwrap();

        assert!(matches!(load(&path), Err(LoadError::CorruptedCache { .. })));
    }
}
