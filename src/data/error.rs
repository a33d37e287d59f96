use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy of the data layer
// ---------------------------------------------------------------------------

/// Any failure that prevents the dashboard from being built.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {} as CSV: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// A table does not have the shape its record type expects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("table '{table}' has no '{column}' column")]
    MissingColumn { table: String, column: &'static str },

    #[error("table '{table}', row {row}: '{value}' in column '{column}' is not a number")]
    InvalidValue {
        table: String,
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("table '{table}', row {row}: unknown model label '{value}'")]
    UnknownModel {
        table: String,
        row: usize,
        value: String,
    },
}
