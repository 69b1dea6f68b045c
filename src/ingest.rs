//! Coordinate ingestion from uploaded CSV bytes.
//!
//! The header must name `lat` and `lng` columns (exact, case-sensitive).
//! Rows that cannot produce a finite coordinate are skipped and reported,
//! they never abort the parse.

use csv::{ReaderBuilder, StringRecord};

use crate::coordinate::Coordinate;
use crate::error::PlannerError;

const LAT_COLUMN: &str = "lat";
const LNG_COLUMN: &str = "lng";
const UTF8_BOM: char = '\u{feff}';

/// Declared character encoding of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    /// ISO-8859-1. Every byte is a valid character, so decoding cannot fail.
    Latin1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The row has no value for `lat` or `lng`.
    MissingField,
    /// A value is present but is not a number.
    InvalidNumber,
    /// The value parsed but is NaN or infinite.
    NonFinite,
}

/// A data row left out of the working set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line in the decoded text.
    pub line: u64,
    pub reason: SkipReason,
}

/// Result of a successful ingestion.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub coordinates: Vec<Coordinate>,
    pub skipped: Vec<SkippedRow>,
}

impl Ingested {
    /// Number of data rows seen, valid or not.
    pub fn rows(&self) -> usize {
        self.coordinates.len() + self.skipped.len()
    }
}

/// Parse UTF-8 encoded CSV bytes.
pub fn parse_utf8(raw: &[u8]) -> Result<Ingested, PlannerError> {
    parse(raw, Encoding::Utf8)
}

/// Parse CSV bytes in the given encoding into validated coordinates.
///
/// Fails only when the text cannot be decoded or the header is absent or
/// lacks a required column.
pub fn parse(raw: &[u8], encoding: Encoding) -> Result<Ingested, PlannerError> {
    let text = decode(raw, encoding)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(PlannerError::format("missing header row"));
    }
    let lat_idx = column_index(&headers, LAT_COLUMN)?;
    let lng_idx = column_index(&headers, LNG_COLUMN)?;

    let mut ingested = Ingested::default();
    // Decoded text is valid UTF-8 and field counts are flexible, so records
    // only fail on I/O, which an in-memory reader does not raise.
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);
        match read_coordinate(&record, lat_idx, lng_idx) {
            Ok(coordinate) => ingested.coordinates.push(coordinate),
            Err(reason) => {
                tracing::debug!(line, ?reason, "skipping row");
                ingested.skipped.push(SkippedRow { line, reason });
            }
        }
    }

    Ok(ingested)
}

fn decode(raw: &[u8], encoding: Encoding) -> Result<String, PlannerError> {
    match encoding {
        Encoding::Utf8 => {
            let text = std::str::from_utf8(raw)
                .map_err(|err| PlannerError::format(format!("input is not valid UTF-8: {}", err)))?;
            Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
        }
        Encoding::Latin1 => Ok(raw.iter().map(|&byte| byte as char).collect()),
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, PlannerError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| PlannerError::format(format!("header has no '{}' column", name)))
}

fn read_coordinate(record: &StringRecord, lat_idx: usize, lng_idx: usize) -> Result<Coordinate, SkipReason> {
    let lat = read_value(record, lat_idx)?;
    let lng = read_value(record, lng_idx)?;
    Coordinate::new(lat, lng).ok_or(SkipReason::NonFinite)
}

fn read_value(record: &StringRecord, idx: usize) -> Result<f64, SkipReason> {
    let raw = record
        .get(idx)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(SkipReason::MissingField)?;
    raw.parse::<f64>().map_err(|_| SkipReason::InvalidNumber)
}
