//! Display projection of clause records

use shared_types::{ClauseRecord, DisplayClause};

use crate::numbering::normalize;

/// Project every record for presentation, one-to-one and in input order
pub fn project(clauses: &[ClauseRecord]) -> Vec<DisplayClause> {
    clauses.iter().map(display_clause).collect()
}

pub fn display_clause(record: &ClauseRecord) -> DisplayClause {
    DisplayClause {
        clause_number: normalize(record.number_text()).to_string(),
        clause_title: record.title_text().to_string(),
        clause_page: record.page_text().to_string(),
        clause_path: record.clause_path.clone(),
        clause_content: record.content_text().to_string(),
    }
}
