// Page reference validation
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ClauseRecord, InvalidPageIssue};
use thiserror::Error;

lazy_static! {
    /// An underscore that is not sitting between two digits
    static ref LOOSE_UNDERSCORE: Regex = Regex::new(r"(^|[^0-9])_|_($|[^0-9])").unwrap();
}

/// Why a page reference was rejected. The `Display` form is the issue reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageDefect {
    #[error("empty")]
    Empty,

    #[error("non-numeric: '{0}'")]
    NonNumeric(String),
}

/// Parse a page reference.
///
/// The value is trimmed first. Integer and decimal forms are accepted, as
/// are exponents and the `inf`/`nan` spellings a float parser understands.
/// Single underscores between digits group them (`"1_000"`).
pub fn inspect_page(raw: &str) -> Result<f64, PageDefect> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PageDefect::Empty);
    }

    let non_numeric = || PageDefect::NonNumeric(trimmed.to_string());
    if trimmed.contains('_') {
        if LOOSE_UNDERSCORE.is_match(trimmed) {
            return Err(non_numeric());
        }
        return trimmed.replace('_', "").parse::<f64>().map_err(|_| non_numeric());
    }

    trimmed.parse::<f64>().map_err(|_| non_numeric())
}

/// Flags a clause whose page is missing or not a number
pub fn check_page(index: usize, record: &ClauseRecord) -> Option<InvalidPageIssue> {
    let defect = inspect_page(record.page_text()).err()?;

    Some(InvalidPageIssue {
        index,
        clause_number: record.number_label().to_string(),
        reason: defect.to_string(),
    })
}
