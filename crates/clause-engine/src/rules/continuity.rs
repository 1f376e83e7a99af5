// Clause numbering continuity
use shared_types::{ClauseRecord, ContinuityGapIssue};

use crate::numbering::ClauseNumber;
use crate::transition;

/// The last parsable clause seen during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    pub index: usize,
    pub number: ClauseNumber,
    /// Clause number as it appeared in the input
    pub text: String,
}

/// Compare one clause against the running baseline.
///
/// Returns the baseline for the next clause together with the gap found, if
/// any. A clause whose number does not parse is skipped: no gap, and the
/// baseline is handed back unchanged. A parsable clause always becomes the
/// new baseline, gap or not.
pub fn check_continuity(
    baseline: Option<Baseline>,
    index: usize,
    record: &ClauseRecord,
) -> (Option<Baseline>, Option<ContinuityGapIssue>) {
    let Some(number) = ClauseNumber::parse(record.number_text()) else {
        return (baseline, None);
    };

    let gap = baseline.and_then(|prev| {
        transition::validate(&prev.number, &number)
            .err()
            .map(|gap| ContinuityGapIssue {
                prev_index: prev.index,
                curr_index: index,
                after_clause: prev.text,
                before_clause: record.number_text().to_string(),
                reason: gap.to_string(),
                expected: gap.expected().map(|n| n.to_string()),
            })
    });

    let next = Baseline {
        index,
        number,
        text: record.number_text().to_string(),
    };

    (Some(next), gap)
}
