use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while opening a visibility table or decoding its rows.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to open table {table} at {path}: {source}")]
    Open {
        path: PathBuf,
        table: String,
        #[source]
        source: rubbl_casatables::TableError,
    },

    #[error("table {table} has neither a UVW column nor U/V columns (columns: {columns:?})")]
    MissingColumns { table: String, columns: Vec<String> },

    #[error("malformed row {row}: {reason}")]
    MalformedRow { row: u64, reason: String },

    #[error(transparent)]
    Casa(#[from] rubbl_casatables::TableError),

    #[error(transparent)]
    Casacore(#[from] rubbl_casatables::CasacoreError),
}
