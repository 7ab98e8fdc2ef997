use crate::error::Result;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The dataset as read from disk: a header row plus untyped rows.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
}

impl RawTable {
    /// Position of a column, matching header names after trimming.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub blank_rows_skipped: usize,
}

pub fn load_table<P: AsRef<Path>>(path: P) -> Result<(RawTable, LoadReport)> {
    let path = path.as_ref();
    debug!("opening dataset {}", path.display());
    let file = File::open(path)?;
    load_table_from_reader(file)
}

pub fn load_table_from_reader<R: Read>(reader: R) -> Result<(RawTable, LoadReport)> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();
    let mut total_rows = 0usize;
    let mut blank_rows_skipped = 0usize;

    for result in rdr.records() {
        let record = result?;
        total_rows += 1;
        if record.iter().all(|f| f.trim().is_empty()) {
            blank_rows_skipped += 1;
            continue;
        }
        rows.push(record);
    }

    info!(
        "loaded {} rows ({} columns, {} blank rows skipped)",
        rows.len(),
        headers.len(),
        blank_rows_skipped
    );
    let report = LoadReport {
        total_rows,
        blank_rows_skipped,
    };
    Ok((RawTable { headers, rows }, report))
}
