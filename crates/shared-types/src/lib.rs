pub mod coerce;
pub mod report;
pub mod types;

pub use report::{ContinuityGapIssue, EmptyTitleIssue, InvalidPageIssue, IssueReport};
pub use types::{ClauseRecord, DisplayClause, NO_NUMBER};
