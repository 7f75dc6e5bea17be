// src/specs/sources.rs

use std::path::{Path, PathBuf};

/// What a source file contributes to the merged dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceRole {
    Likes,
    Comments,
    Posts,
    /// Group activity export: posts and comments interleaved, assigned
    /// per entry by `classify`.
    Mixed,
}

/// One known source file inside a decompressed archive.
#[derive(Clone, Copy, Debug)]
pub struct SourceSpec {
    pub rel_path: &'static str,
    pub role: SourceRole,
}

impl SourceSpec {
    pub fn path_in(&self, archive_dir: &Path) -> PathBuf {
        archive_dir.join(self.rel_path)
    }
}

/// The five source files every archive export is expected to carry.
/// List order is merge order: dedicated sources land in their collection
/// before the classified subsets of the mixed source.
pub const ARCHIVE_SOURCES: &[SourceSpec] = &[
    SourceSpec { rel_path: "likes_and_reactions/pages.html", role: SourceRole::Likes },
    SourceSpec { rel_path: "likes_and_reactions/posts_and_comments.html", role: SourceRole::Likes },
    SourceSpec { rel_path: "comments/comments.html", role: SourceRole::Comments },
    SourceSpec { rel_path: "posts/your_posts_1.html", role: SourceRole::Posts },
    SourceSpec { rel_path: "groups/your_posts_and_comments_in_groups.html", role: SourceRole::Mixed },
];
