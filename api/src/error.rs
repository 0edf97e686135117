//! Error types for loading the launch dataset.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the dashboard from getting a usable dataset.
///
/// All of these are startup conditions: once a [`crate::Dataset`] exists,
/// the resolvers cannot fail.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required column `{column}`")]
    MissingColumn { column: &'static str },

    #[error("Row {row}: payload mass `{value}` is not a finite number")]
    InvalidPayload { row: usize, value: String },

    #[error("Row {row}: outcome class must be 0 or 1, found `{value}`")]
    InvalidOutcome { row: usize, value: String },

    #[error("Row {row}: launch site `{site}` is reserved for the all-sites option")]
    ReservedSite { row: usize, site: String },

    #[error("Dataset has not been loaded")]
    NotLoaded,
}
