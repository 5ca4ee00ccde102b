// src/load/document.rs
//
// PDF source. Extracted text is treated as one record per line, fields
// separated by a literal " - ":
//
//   name - province - ingredients - description
//
// Lines with fewer than MIN_SEGMENTS separators' worth of fields are
// skipped; extra segments beyond the fourth are dropped, not merged.
// Extraction failure is the one loader condition the user gets told
// about: it produces a warning and falls through to the next source.

use std::path::{Path, PathBuf};

use crate::consts::{DOCUMENT_EXT, MIN_SEGMENTS, SEGMENT_SEP};
use crate::record::Record;

/// Probe for a PDF file. None = no PDF, or extraction failed (in which
/// case a warning was pushed and the chain moves on).
pub fn try_load(dir: &Path, warnings: &mut Vec<String>) -> Option<(PathBuf, Vec<Record>)> {
    let path = super::first_with_ext(dir, DOCUMENT_EXT)?;

    match pdf_extract::extract_text(&path) {
        Ok(text) => Some((path, records_from_text(&text))),
        Err(e) => {
            loge!("Document: extraction failed for {} ({})", path.display(), e);
            warnings.push(format!("อ่านเอกสารไม่ได้: {}", path.display()));
            None
        }
    }
}

/// Line heuristic over extracted text. Pure; tested without a PDF.
pub fn records_from_text(text: &str) -> Vec<Record> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let segments: Vec<&str> = line.split(SEGMENT_SEP).collect();
            if segments.len() < MIN_SEGMENTS {
                return None;
            }
            // First four segments only; image_path never comes from a PDF.
            Some(Record::normalized(
                Some(segments[0]),
                Some(segments[1]),
                Some(segments[2]),
                Some(segments[3]),
                None,
            ))
        })
        .collect()
}
