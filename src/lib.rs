//! Socioeconomic indicators for Indonesian provinces.
//!
//! The pipeline is `loader` (CSV into a raw table), `metrics` (per-row
//! derived columns), then optionally `regional` (island-level sums).
//! `reports` and `output` turn those results into console pages and
//! exports.

pub mod error;
pub mod island;
pub mod loader;
pub mod metrics;
pub mod output;
pub mod regional;
pub mod reports;
pub mod schema;
pub mod selection;
pub mod types;
pub mod util;

use error::Result;
use selection::Dataset;
use std::io::Read;
use std::path::Path;

/// Load a CSV file and derive every province's metrics.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let (table, report) = loader::load_table(path)?;
    let rows = metrics::derive_metrics(&table)?;
    Ok(Dataset { rows, report })
}

pub fn load_dataset_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let (table, report) = loader::load_table_from_reader(reader)?;
    let rows = metrics::derive_metrics(&table)?;
    Ok(Dataset { rows, report })
}
