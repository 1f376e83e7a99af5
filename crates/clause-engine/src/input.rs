//! Call-level input parsing
//!
//! Individual records never fail to load (see [`ClauseRecord`]), but the
//! surrounding document still has to be a sequence of records. That is the
//! only input problem surfaced to callers as an error.

use serde_json::Value;
use shared_types::ClauseRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of clause objects, found {0}")]
    NotASequence(&'static str),

    #[error("Missing \"clauses\" array")]
    MissingClauses,
}

/// Accepts either a bare array of records or `{ "clauses": [...] }`
pub fn parse_clauses(value: &Value) -> Result<Vec<ClauseRecord>, InputError> {
    match value {
        Value::Array(items) => Ok(records(items)),
        Value::Object(map) => match map.get("clauses") {
            Some(Value::Array(items)) => Ok(records(items)),
            Some(other) => Err(InputError::NotASequence(kind(other))),
            None => Err(InputError::MissingClauses),
        },
        other => Err(InputError::NotASequence(kind(other))),
    }
}

/// Same as [`parse_clauses`], starting from JSON text
pub fn parse_clauses_str(text: &str) -> Result<Vec<ClauseRecord>, InputError> {
    let value: Value = serde_json::from_str(text)?;
    parse_clauses(&value)
}

fn records(items: &[Value]) -> Vec<ClauseRecord> {
    items.iter().cloned().map(ClauseRecord::from).collect()
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
