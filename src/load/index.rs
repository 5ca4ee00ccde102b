// src/load/index.rs
//
// Plain-text index source: one file path per line, dish name inferred
// from the filename convention
//
//   <numericPrefix>_<name-with-underscores>[_<8+digit-timestamp>].<ext>
//
// Only the display name is recoverable from an index entry; province
// falls back to "Unknown" and the remaining fields stay empty.

use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::INDEX_FILE;
use crate::record::Record;

/// Probe for `index.txt`. None = file absent or unreadable.
pub fn try_load(dir: &Path) -> Option<(PathBuf, Vec<Record>)> {
    let path = dir.join(INDEX_FILE);
    if !path.is_file() {
        return None;
    }

    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            logd!("Index: unreadable {} ({})", path.display(), e);
            return None;
        }
    };

    let records = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Record::normalized(Some(&display_name(line.trim())), None, None, None, None))
        .collect();

    Some((path, records))
}

/// Derive a display name from an indexed file path.
///
/// The stem is split on `_`. A purely numeric first segment is an order
/// prefix and is dropped; when it is, a trailing segment of 8+ digits is
/// treated as a timestamp suffix and dropped too. What remains is joined
/// with spaces, and hyphens inside segments become spaces as well.
pub fn display_name(path: &str) -> String {
    let stem = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut parts: Vec<&str> = stem.split('_').collect();

    if parts.len() > 1 && all_digits(parts[0]) {
        parts.remove(0);
        if parts.len() > 1 {
            let last = parts[parts.len() - 1];
            if last.len() >= 8 && all_digits(last) {
                parts.pop();
            }
        }
    }

    parts.join(" ").replace('-', " ")
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_and_timestamp_are_stripped() {
        assert_eq!(display_name("001_pad-thai_20230101.jpg"), "pad thai");
    }

    #[test]
    fn plain_name_keeps_everything_but_hyphens() {
        assert_eq!(display_name("som-tum.jpg"), "som tum");
    }

    #[test]
    fn prefix_without_timestamp() {
        assert_eq!(display_name("07_khao_soi.png"), "khao soi");
    }

    #[test]
    fn short_numeric_tail_is_not_a_timestamp() {
        // 2023 has fewer than 8 digits; it stays part of the name
        assert_eq!(display_name("001_massaman_2023.jpg"), "massaman 2023");
    }

    #[test]
    fn timestamp_kept_without_numeric_prefix() {
        // The suffix rule only applies once an order prefix was dropped
        assert_eq!(display_name("gaeng-som_20230101.jpg"), "gaeng som 20230101");
    }

    #[test]
    fn directories_are_ignored() {
        assert_eq!(display_name("photos/north/003_khao-soi_20230211.jpg"), "khao soi");
    }

    #[test]
    fn all_numeric_single_segment_survives() {
        assert_eq!(display_name("123.jpg"), "123");
    }
}
