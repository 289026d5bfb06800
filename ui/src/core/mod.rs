//! The filter-aggregate pipeline: pure functions of `(rows, selection)`.

pub mod aggregate;
pub mod filter;
pub mod format;
pub mod kpi;
