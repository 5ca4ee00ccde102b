// src/load/mod.rs
//
// Source-priority loader chain: CSV table → PDF document → index.txt.
// Each source is a probe that either claims the directory (it found its
// file) or passes. First claim wins; a claimed-but-empty source still
// wins and yields an empty catalog. Nothing in here panics past its own
// boundary: malformed rows are skipped, unreadable sources degrade to a
// warning or a silent fall-through.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;

pub mod document;
pub mod index;
pub mod table;

/// Which source format produced the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Table(PathBuf),
    Document(PathBuf),
    Index(PathBuf),
}

/// Outcome of one load pass. `warnings` are user-visible, non-fatal
/// messages (currently only unreadable PDF documents produce them).
#[derive(Debug, Default)]
pub struct Loaded {
    pub catalog: Catalog,
    pub source: Option<Source>,
    pub warnings: Vec<String>,
}

/// Load the catalog from `dir`, trying source formats in priority order.
/// A missing directory is not an error; it yields an empty catalog.
pub fn load_catalog(dir: &Path) -> Loaded {
    let mut out = Loaded::default();

    if !dir.is_dir() {
        logd!("Load: {} is not a directory, empty catalog", dir.display());
        return out;
    }

    if let Some((path, records)) = table::try_load(dir) {
        logf!("Load: table {} ({} records)", path.display(), records.len());
        out.catalog = Catalog::new(records);
        out.source = Some(Source::Table(path));
        return out;
    }

    if let Some((path, records)) = document::try_load(dir, &mut out.warnings) {
        logf!("Load: document {} ({} records)", path.display(), records.len());
        out.catalog = Catalog::new(records);
        out.source = Some(Source::Document(path));
        return out;
    }

    if let Some((path, records)) = index::try_load(dir) {
        logf!("Load: index {} ({} records)", path.display(), records.len());
        out.catalog = Catalog::new(records);
        out.source = Some(Source::Index(path));
        return out;
    }

    logd!("Load: no recognized source in {}", dir.display());
    out
}

/// First file in `dir` with the given extension (case-insensitive).
/// Candidates are sorted by name so "first" is deterministic across
/// platforms; read_dir order is not.
pub(crate) fn first_with_ext(dir: &Path, ext: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .and_then(|s| s.to_str())
                    .map(|s| s.eq_ignore_ascii_case(ext))
                    .unwrap_or(false)
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}
