// src/params.rs

use std::path::PathBuf;

use crate::store::DEFAULT_CACHE_FILE;

/// Everything one load needs to know. Built from the CLI in normal runs;
/// tests construct it directly so nothing leans on shared on-disk state.
#[derive(Clone, Debug)]
pub struct Params {
    /// Root of the decompressed export, e.g. `data/facebook-johndoe`.
    pub archive_dir: PathBuf,
    /// Where the merged-dataset cache lives.
    pub cache_path: PathBuf,
    /// Ignore an existing cache and rebuild from the archive.
    pub refresh: bool,
}

impl Params {
    pub fn new(archive_dir: impl Into<PathBuf>) -> Self {
        Self {
            archive_dir: archive_dir.into(),
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
            refresh: false,
        }
    }
}
