// src/error.rs
//
// Error taxonomy for the load pipeline. Extraction errors are fatal for
// the whole load; cache corruption is downgraded to a miss by the runner
// (see runner::load).

use std::path::PathBuf;

use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The document's structural markers don't line up: either the entry
    /// container is missing, or an entry carries no recoverable field at
    /// all. Either way the export format has shifted and the whole file
    /// is unsupported input.
    #[error("this file cannot be parsed: {}: {detail}", path.display())]
    UnparseableEntry { path: PathBuf, detail: String },

    /// A timestamp element was present but its text didn't match the
    /// archive's fixed format ("Jan 5, 2020, 3:45 PM").
    #[error("bad timestamp {value:?} in entry {index} of {}: {source}", path.display())]
    UnparseableTimestamp {
        path: PathBuf,
        index: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// An expected archive source file is absent or unreadable.
    #[error("cannot read archive source {}", path.display())]
    MissingSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A cached dataset exists but won't deserialize. Callers may treat
    /// this as a cache miss rather than a failure.
    #[error("cache file {} is corrupted: {reason}", path.display())]
    CorruptedCache { path: PathBuf, reason: String },
}
