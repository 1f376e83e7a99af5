//! Issue records produced by clause validation
//!
//! All indices are 0-based positions in the input sequence. The text
//! rendering switches to 1-based row numbers for human readers.

use serde::{Deserialize, Serialize};

/// Numbering transition that is not a valid move in the clause tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuityGapIssue {
    pub prev_index: usize,
    pub curr_index: usize,
    /// Original text of the last parsable clause number before the gap
    pub after_clause: String,
    /// Original text of the clause number that broke continuity
    pub before_clause: String,
    pub reason: String,
    /// Clause number that would have been valid, when unambiguous
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyTitleIssue {
    pub index: usize,
    pub clause_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidPageIssue {
    pub index: usize,
    pub clause_number: String,
    pub reason: String, // "empty" or "non-numeric: '<value>'"
}

/// Every finding of one validation pass, grouped by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReport {
    pub continuity_gaps: Vec<ContinuityGapIssue>,
    pub empty_titles: Vec<EmptyTitleIssue>,
    pub invalid_pages: Vec<InvalidPageIssue>,
}

impl IssueReport {
    /// Total number of issues across all categories
    pub fn total(&self) -> usize {
        self.continuity_gaps.len() + self.empty_titles.len() + self.invalid_pages.len()
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Generate a text report
    pub fn to_text(&self) -> String {
        if self.is_clean() {
            return "No structural issues detected\n".to_string();
        }

        let mut output = String::new();

        if !self.continuity_gaps.is_empty() {
            output.push_str(&format!(
                "Clause Number Continuity Gaps ({})\n",
                self.continuity_gaps.len()
            ));
            for gap in &self.continuity_gaps {
                output.push_str(&format!(
                    "  Row {}: \"{}\" after \"{}\": {}\n",
                    gap.curr_index + 1,
                    gap.before_clause,
                    gap.after_clause,
                    gap.reason
                ));
            }
        }

        if !self.empty_titles.is_empty() {
            output.push_str(&format!(
                "Missing or Empty Titles ({})\n",
                self.empty_titles.len()
            ));
            for item in &self.empty_titles {
                output.push_str(&format!(
                    "  Row {}: Clause \"{}\" has no title\n",
                    item.index + 1,
                    item.clause_number
                ));
            }
        }

        if !self.invalid_pages.is_empty() {
            output.push_str(&format!(
                "Invalid or Missing Page Numbers ({})\n",
                self.invalid_pages.len()
            ));
            for item in &self.invalid_pages {
                output.push_str(&format!(
                    "  Row {}: Clause \"{}\" - {}\n",
                    item.index + 1,
                    item.clause_number,
                    item.reason
                ));
            }
        }

        output
    }
}
