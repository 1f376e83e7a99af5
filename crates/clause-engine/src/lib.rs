//! Structural QA for extracted clause lists
//!
//! Checks an ordered list of clause records for numbering gaps, blank titles
//! and bad page references. Detection only: nothing is corrected.

pub mod input;
pub mod numbering;
pub mod projection;
pub mod rules;
pub mod transition;

pub use input::{parse_clauses, parse_clauses_str, InputError};
pub use numbering::ClauseNumber;
pub use transition::{Gap, Transition};

use serde::{Deserialize, Serialize};
use shared_types::{ClauseRecord, DisplayClause, IssueReport};
use tracing::debug;

use rules::Baseline;

/// Projection and issue report for one clause list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub clauses: Vec<DisplayClause>,
    pub issues: IssueReport,
}

/// ClauseEngine entry point
pub struct ClauseEngine;

impl ClauseEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run every check over the clause list in a single pass.
    ///
    /// The running numbering baseline is the fold accumulator, so each call
    /// is independent of every other.
    pub fn validate(&self, clauses: &[ClauseRecord]) -> IssueReport {
        let (_, report) = clauses.iter().enumerate().fold(
            (None::<Baseline>, IssueReport::default()),
            |(baseline, mut report), (index, record)| {
                report
                    .empty_titles
                    .extend(rules::check_title(index, record));
                report
                    .invalid_pages
                    .extend(rules::check_page(index, record));

                let (baseline, gap) = rules::check_continuity(baseline, index, record);
                if let Some(gap) = gap {
                    debug!(
                        "Continuity gap at {}: '{}' after '{}' ({})",
                        gap.curr_index, gap.before_clause, gap.after_clause, gap.reason
                    );
                    report.continuity_gaps.push(gap);
                }

                (baseline, report)
            },
        );

        report
    }

    /// Presentation view of the clause list, independent of validation
    pub fn project(&self, clauses: &[ClauseRecord]) -> Vec<DisplayClause> {
        projection::project(clauses)
    }

    pub fn analyze(&self, clauses: &[ClauseRecord]) -> Analysis {
        Analysis {
            clauses: self.project(clauses),
            issues: self.validate(clauses),
        }
    }
}

impl Default for ClauseEngine {
    fn default() -> Self {
        Self::new()
    }
}
