// src/cli.rs

use std::path::PathBuf;

use clap::Parser;

use crate::params::Params;
use crate::store::DEFAULT_CACHE_FILE;

/// Parse likes, comments and posts out of a Facebook data export and
/// print counts plus a monthly likes trend.
#[derive(Debug, Parser)]
#[command(name = "fb_activity", version, about)]
pub struct Cli {
    /// Root of the decompressed archive, e.g. data/facebook-johndoe
    pub archive_dir: PathBuf,

    /// Cache file for the merged dataset
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,

    /// Rebuild from the archive even if a usable cache exists
    #[arg(long)]
    pub refresh: bool,
}

impl Cli {
    pub fn into_params(self) -> Params {
        Params {
            archive_dir: self.archive_dir,
            cache_path: self.cache,
            refresh: self.refresh,
        }
    }
}
