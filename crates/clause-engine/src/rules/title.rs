// Missing or blank clause titles
use shared_types::{ClauseRecord, EmptyTitleIssue};

/// Flags a clause whose title is absent, empty, or whitespace only
pub fn check_title(index: usize, record: &ClauseRecord) -> Option<EmptyTitleIssue> {
    if !record.title_text().trim().is_empty() {
        return None;
    }

    Some(EmptyTitleIssue {
        index,
        clause_number: record.number_label().to_string(),
    })
}
