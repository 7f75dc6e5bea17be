// src/specs/mod.rs
//! # Archive "specs" module
//!
//! Page-specific knowledge about the export archive lives here: *where
//! the ground truth sits in the markup* and *how to read it robustly*.
//!
//! - `sources` — the fixed relative paths of the five source files and
//!   the role each plays (likes-only, comments-only, posts-only, mixed).
//! - `entries` — the entry extractor shared by all five pages; every
//!   page wraps its entries in the same box markup with the same three
//!   field classes, so one extractor covers the lot.
//!
//! Specs only extract. Caching lives in `store`, classification in
//! `classify`, and cross-source merging in `runner`.

pub mod entries;
pub mod sources;
