use serde_json::Value;

use crate::coerce;

/// Placeholder used in issue records when a clause carries no number
pub const NO_NUMBER: &str = "(no number)";

/// One clause as delivered by the upstream extraction step.
///
/// Every field is optional and loosely typed on the wire. Deserialization
/// goes through [`serde_json::Value`] so a record never fails to load:
/// numbers, booleans and nested values are coerced to text, and a value that
/// is not an object at all becomes a record with every field absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Value")]
pub struct ClauseRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_number: Option<String>, // e.g., "6.1.2"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_page: Option<String>,
    pub clause_path: Vec<String>, // e.g., ["6", "6.1", "6.1.2"]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_content: Option<String>,
}

impl ClauseRecord {
    /// Record with only a clause number set (handy for numbering-only checks)
    pub fn numbered(number: &str) -> Self {
        Self {
            clause_number: Some(number.to_string()),
            ..Self::default()
        }
    }

    /// The clause number as text, `""` when absent
    pub fn number_text(&self) -> &str {
        self.clause_number.as_deref().unwrap_or("")
    }

    /// The clause number for issue records, [`NO_NUMBER`] when absent or empty
    pub fn number_label(&self) -> &str {
        match self.clause_number.as_deref() {
            Some(number) if !number.is_empty() => number,
            _ => NO_NUMBER,
        }
    }

    pub fn title_text(&self) -> &str {
        self.clause_title.as_deref().unwrap_or("")
    }

    pub fn page_text(&self) -> &str {
        self.clause_page.as_deref().unwrap_or("")
    }

    pub fn content_text(&self) -> &str {
        self.clause_content.as_deref().unwrap_or("")
    }
}

impl From<Value> for ClauseRecord {
    fn from(value: Value) -> Self {
        let field = |key: &str| value.get(key).and_then(coerce::text);

        Self {
            clause_number: field("clause_number"),
            clause_title: field("clause_title"),
            clause_page: field("clause_page"),
            clause_path: value.get("clause_path").map(coerce::path).unwrap_or_default(),
            clause_content: field("clause_content"),
        }
    }
}

/// Presentation view of a clause. Carries no validation semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DisplayClause {
    pub clause_number: String, // Normalized (trailing dots stripped)
    pub clause_title: String,
    pub clause_page: String,
    pub clause_path: Vec<String>,
    pub clause_content: String,
}
