//! Dataset loader - CSV parsing and validation

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::models::{columns, IncidentRecord};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV at row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("dataset is missing required column(s): {}", .0.join(", "))]
    MissingColumn(Vec<String>),

    #[error("invalid value in column '{column}' at row {row}")]
    InvalidValue { row: usize, column: &'static str },

    #[error("dataset contains no records")]
    Empty,
}

/// Open `path` and parse every record.
pub fn load_file(path: &Path) -> Result<Vec<IncidentRecord>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_records(file)
}

/// Parse CSV from any reader. The header row must contain every column in
/// [`columns::REQUIRED`]; extra columns are ignored.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<IncidentRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Csv { row: 0, source })?
        .clone();

    let missing: Vec<String> = columns::REQUIRED
        .iter()
        .filter(|name| !headers.iter().any(|h| h == **name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumn(missing));
    }

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<IncidentRecord>().enumerate() {
        // 1-based data rows, header excluded
        let row = idx + 1;
        let record = result.map_err(|source| DatasetError::Csv { row, source })?;
        if let Some(column) = record.invalid_numeric_column() {
            return Err(DatasetError::InvalidValue { row, column });
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    Ok(records)
}
