//! CSV decoding for the advertising export.
//!
//! Headers arrive in arbitrary case; they are canonicalized to upper-case
//! before the expected columns are resolved, so `fecha` and `FECHA` are the
//! same column. Dates must parse; platform codes degrade to unknown.

use std::collections::HashMap;

use csv::{ReaderBuilder, StringRecord, Trim};
use time::{macros::format_description, Date};

use crate::error::DataError;
use crate::model::{MetricRecord, Platform};

struct Columns {
    fecha: usize,
    plataforma: usize,
    group: usize,
    campaign: usize,
    impressions: usize,
    clicks: usize,
    cost: usize,
    conversions: usize,
}

fn resolve_columns(headers: &StringRecord) -> Result<Columns, DataError> {
    let by_name: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| (header.trim().to_uppercase(), index))
        .collect();
    let find = |name: &'static str| {
        by_name
            .get(name)
            .copied()
            .ok_or(DataError::MissingColumn(name))
    };

    Ok(Columns {
        fecha: find("FECHA")?,
        plataforma: find("PLATAFORMA")?,
        group: find("GROUP_NAME")?,
        campaign: find("CAMPAIGN_NAME")?,
        impressions: find("IMPRESSIONS")?,
        clicks: find("CLICKS")?,
        cost: find("COST")?,
        conversions: find("CONVERSIONS")?,
    })
}

/// Decode the raw CSV text into normalized records.
pub fn decode_records(text: &str) -> Result<Vec<MetricRecord>, DataError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let columns = resolve_columns(reader.headers()?)?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // +2: one for the header line, one for 1-based numbering.
        rows.push(decode_row(index + 2, &record, &columns)?);
    }
    Ok(rows)
}

fn decode_row(row: usize, record: &StringRecord, columns: &Columns) -> Result<MetricRecord, DataError> {
    let field = |index: usize| record.get(index).unwrap_or("");

    Ok(MetricRecord {
        date: parse_date(row, field(columns.fecha))?,
        platform: field(columns.plataforma)
            .parse::<i64>()
            .ok()
            .and_then(Platform::from_code),
        group: field(columns.group).to_string(),
        campaign: field(columns.campaign).to_string(),
        impressions: parse_count(row, "IMPRESSIONS", field(columns.impressions))?,
        clicks: parse_count(row, "CLICKS", field(columns.clicks))?,
        cost: parse_amount(row, "COST", field(columns.cost))?,
        conversions: parse_count(row, "CONVERSIONS", field(columns.conversions))?,
    })
}

/// Parse `YYYY-MM-DD`, tolerating a trailing time component separated by
/// `T` or a space (the export is an ISO timestamp dump).
fn parse_date(row: usize, value: &str) -> Result<Date, DataError> {
    let date_part = value
        .split_once(['T', ' '])
        .map(|(date, _)| date)
        .unwrap_or(value);
    Date::parse(date_part, format_description!("[year]-[month]-[day]")).map_err(|_| {
        DataError::BadDate {
            row,
            value: value.to_string(),
        }
    })
}

fn parse_count(row: usize, column: &'static str, value: &str) -> Result<u64, DataError> {
    if value.is_empty() {
        return Ok(0);
    }
    value.parse::<u64>().map_err(|_| DataError::BadNumber {
        row,
        column,
        value: value.to_string(),
    })
}

fn parse_amount(row: usize, column: &'static str, value: &str) -> Result<f64, DataError> {
    if value.is_empty() {
        return Ok(0.0);
    }
    value.parse::<f64>().map_err(|_| DataError::BadNumber {
        row,
        column,
        value: value.to_string(),
    })
}
