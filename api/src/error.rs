//! Error taxonomy for dataset loading.
//!
//! Fetch and date failures are fatal to the session; unknown platform codes
//! are not errors at all (see `model::Platform::from_code`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dataset endpoint returned HTTP {0}")]
    Status(u16),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column {0}")]
    MissingColumn(&'static str),

    #[error("row {row}: unrecognizable date {value:?}")]
    BadDate { row: usize, value: String },

    #[error("row {row}: bad number in {column}: {value:?}")]
    BadNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}
