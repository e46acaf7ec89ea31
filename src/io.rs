use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::{fs::File, io::Read, path::Path};

use crate::forrest::{EyeEvent, Shot};
use crate::scanpath::Fixation;

/// Fixations from a TSV file with `start_x`, `start_y` and `duration` columns.
pub fn read_fixations(path: &Path) -> Result<Vec<Fixation>> {
    read_tsv_file(path)
}

/// Shot annotation from a TSV file with `onset` and `duration` columns.
pub fn read_shots(path: &Path) -> Result<Vec<Shot>> {
    read_tsv_file(path)
}

/// Classified eye-movement events from a TSV file with `onset`, `duration`,
/// `label`, `start_x`, `start_y`, `end_x` and `end_y` columns.
pub fn read_events(path: &Path) -> Result<Vec<EyeEvent>> {
    read_tsv_file(path)
}

/// Deserialize every row of a tab-separated table with a header line.
/// Columns the row type does not name are ignored.
pub fn read_tsv<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut tsv = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .from_reader(reader);

    tsv.deserialize()
        .enumerate()
        .map(|(row, record)| record.with_context(|| format!("Failed to parse data row {}", row + 1)))
        .collect()
}

fn read_tsv_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_tsv(file).with_context(|| format!("Failed to read {}", path.display()))
}
