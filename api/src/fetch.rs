//! One-shot retrieval of the published advertising export.
//!
//! The dataset is fetched once per session and the decoded rows are held
//! read-only by the UI afterwards; every filter change recomputes the
//! derived views from this in-memory copy.

use crate::dataset::decode_records;
use crate::error::DataError;
use crate::model::MetricRecord;

/// Fixed location of the published CSV export.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/eugenio9445/mkt_test/refs/heads/main/2026-01-21%205_28pm_2026-01-21-1915.csv";

/// Fetch and decode the dataset from the fixed export URL.
pub async fn fetch_dataset() -> Result<Vec<MetricRecord>, DataError> {
    fetch_from(DATA_URL).await
}

/// Fetch and decode a dataset from an arbitrary URL.
pub async fn fetch_from(url: &str) -> Result<Vec<MetricRecord>, DataError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DataError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    decode_records(&body)
}
