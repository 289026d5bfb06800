//! Data access for the Adpulse dashboard: the dataset schema, CSV decoding,
//! and retrieval of the published export.

pub mod dataset;
pub mod error;
pub mod fetch;
pub mod model;

pub use error::DataError;
pub use model::{Metric, MetricRecord, Platform};
