//! Cruise record conversion.
//!
//! Reads a legacy cruise export (one record or an array of records) and
//! remaps each record into the import schema. Conversion is all-or-nothing:
//! one malformed record discards the whole batch.

use std::{fs, io, path::Path};

use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::model::{Cruise, CruiseDocument, LegacyCruise};

/// Errors that can occur while converting cruise records.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a cruise record or an array of cruise records, found {0}")]
    UnexpectedShape(&'static str),

    #[error("issue at {record}: {source}")]
    MalformedRecord {
        record: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = core::result::Result<T, ConvertError>;

/// Converts the cruise export at `path`.
///
/// Always returns a sequence, even when the file holds a single record.
pub fn convert(path: &Path) -> Result<Vec<Cruise>> {
    let contents = fs::read_to_string(path)?;
    convert_str(&contents)
}

/// Converts a cruise export already held in memory.
pub fn convert_str(contents: &str) -> Result<Vec<Cruise>> {
    convert_value(serde_json::from_str(contents)?)
}

/// Converts a parsed cruise export.
pub fn convert_value(value: Value) -> Result<Vec<Cruise>> {
    let document = parse_document(value)?;
    document
        .into_records()
        .into_iter()
        .enumerate()
        .map(|(index, record)| convert_record(index, record))
        .collect()
}

/// Serializes converted cruises as a JSON array indented by two spaces.
pub fn to_json(cruises: &[Cruise]) -> Result<String> {
    Ok(serde_json::to_string_pretty(cruises)?)
}

/// Classifies the top level of an export as one record or many.
pub fn parse_document(value: Value) -> Result<CruiseDocument> {
    match value {
        Value::Object(record) => Ok(CruiseDocument::Single(record)),
        Value::Array(values) => values
            .into_iter()
            .map(|value| match value {
                Value::Object(record) => Ok(record),
                other => Err(ConvertError::UnexpectedShape(kind(&other))),
            })
            .collect::<Result<Vec<_>>>()
            .map(CruiseDocument::Many),
        other => Err(ConvertError::UnexpectedShape(kind(&other))),
    }
}

fn convert_record(index: usize, record: Map<String, Value>) -> Result<Cruise> {
    let label = record_label(index, &record);
    debug!("Processing Cruise: {label}");

    let legacy: LegacyCruise =
        serde_json::from_value(Value::Object(record)).map_err(move |source| {
            error!("issue at: {label}");
            error!("{source}");
            ConvertError::MalformedRecord {
                record: label,
                source,
            }
        })?;

    Ok(Cruise::from(legacy))
}

/// Best available name for a record: its cruise ID, its ID, or its position.
fn record_label(index: usize, record: &Map<String, Value>) -> String {
    ["cruise_id", "id"]
        .iter()
        .find_map(|key| match record.get(*key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| format!("record #{}", index + 1))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
