// src/load/table.rs
//
// CSV source. Columns are located by header name so column order in the
// file does not matter; columns the header lacks simply take the Record
// defaults. Rows map 1:1 onto Records with no reordering.

use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{
    COL_DESCRIPTION, COL_IMAGE_PATH, COL_INGREDIENTS, COL_NAME, COL_PROVINCE, TABLE_EXT,
};
use crate::csv::{column_index, parse_rows};
use crate::record::Record;

/// Probe for a CSV file. None = no CSV present, or it failed to parse
/// (unreadable, or no usable header); both fall through silently.
pub fn try_load(dir: &Path) -> Option<(PathBuf, Vec<Record>)> {
    let path = super::first_with_ext(dir, TABLE_EXT)?;

    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            logd!("Table: unreadable {} ({})", path.display(), e);
            return None;
        }
    };

    let records = parse_table(&text)?;
    Some((path, records))
}

/// Parse CSV text into records. None means the table is malformed enough
/// to reject the source entirely: no header row, or a header without a
/// `name` column. An empty body is a legal (empty) catalog.
pub fn parse_table(text: &str) -> Option<Vec<Record>> {
    let mut rows = parse_rows(text, ',');
    if rows.is_empty() {
        logd!("Table: no header row");
        return None;
    }

    let header = rows.remove(0);
    let name_ix = match column_index(&header, COL_NAME) {
        Some(ix) => ix,
        None => {
            logd!("Table: header has no '{}' column", COL_NAME);
            return None;
        }
    };
    let province_ix = column_index(&header, COL_PROVINCE);
    let ingredients_ix = column_index(&header, COL_INGREDIENTS);
    let description_ix = column_index(&header, COL_DESCRIPTION);
    let image_ix = column_index(&header, COL_IMAGE_PATH);

    let cell = |row: &[String], ix: Option<usize>| -> Option<String> {
        ix.and_then(|i| row.get(i)).cloned()
    };

    let records = rows
        .iter()
        .map(|row| {
            Record::normalized(
                row.get(name_ix).map(|s| s.as_str()),
                cell(row, province_ix).as_deref(),
                cell(row, ingredients_ix).as_deref(),
                cell(row, description_ix).as_deref(),
                cell(row, image_ix).as_deref(),
            )
        })
        .collect();

    Some(records)
}
