//! Property-based tests for the clause engine
//!
//! Test categories:
//! - Projection shape (length, order)
//! - Per-clause title/page issues
//! - Clause number parsing stability
//! - Numbering continuity over generated well-formed outlines

use clause_engine::{ClauseEngine, ClauseNumber};
use proptest::prelude::*;
use shared_types::ClauseRecord;

// ============================================================
// Strategies
// ============================================================

/// Arbitrary, mostly junk clause records
fn loose_record() -> impl Strategy<Value = ClauseRecord> {
    (
        proptest::option::of("[0-9.]{0,8}|[A-Za-z/ ]{0,6}"),
        proptest::option::of("[ \t]{0,3}|[A-Za-z ]{1,20}"),
        proptest::option::of("[ ]{0,2}[0-9]{0,3}[ ]{0,2}|[a-z]{1,4}"),
    )
        .prop_map(|(number, title, page)| ClauseRecord {
            clause_number: number,
            clause_title: title,
            clause_page: page,
            ..ClauseRecord::default()
        })
}

/// A well-formed outline: each step descends to a first child, moves to the
/// next sibling, or returns to some ancestor level and increments there.
fn outline() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec((0u8..3, 0usize..4), 1..40).prop_map(|moves| {
        let mut current: Vec<u64> = vec![1];
        let mut numbers = vec!["1".to_string()];

        for (kind, up) in moves {
            match kind {
                0 if current.len() < 5 => current.push(1),
                1 => {
                    let depth = current.len().saturating_sub(up).max(1);
                    current.truncate(depth);
                    if let Some(last) = current.last_mut() {
                        *last += 1;
                    }
                }
                _ => {
                    if let Some(last) = current.last_mut() {
                        *last += 1;
                    }
                }
            }
            numbers.push(
                current
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join("."),
            );
        }

        numbers
    })
}

fn records_for(numbers: &[String]) -> Vec<ClauseRecord> {
    numbers
        .iter()
        .map(|n| ClauseRecord {
            clause_number: Some(n.clone()),
            clause_title: Some("Title".to_string()),
            clause_page: Some("1".to_string()),
            ..ClauseRecord::default()
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================================
    // Projection
    // ============================================================

    #[test]
    fn projection_preserves_length_and_order(records in proptest::collection::vec(loose_record(), 0..30)) {
        let projected = ClauseEngine::new().project(&records);
        prop_assert_eq!(projected.len(), records.len());
        for (display, record) in projected.iter().zip(&records) {
            prop_assert_eq!(&display.clause_title, record.title_text());
            prop_assert_eq!(display.clause_number.as_str(), record.number_text().trim_end_matches('.'));
        }
    }

    // ============================================================
    // Title and page checks
    // ============================================================

    #[test]
    fn one_title_issue_per_blank_title(records in proptest::collection::vec(loose_record(), 0..30)) {
        let report = ClauseEngine::new().validate(&records);
        let blank: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.title_text().trim().is_empty())
            .map(|(i, _)| i)
            .collect();
        let flagged: Vec<usize> = report.empty_titles.iter().map(|t| t.index).collect();
        prop_assert_eq!(flagged, blank);
    }

    #[test]
    fn page_issue_reasons_match_trimmed_value(records in proptest::collection::vec(loose_record(), 0..30)) {
        let report = ClauseEngine::new().validate(&records);
        for issue in &report.invalid_pages {
            let trimmed = records[issue.index].page_text().trim();
            if trimmed.is_empty() {
                prop_assert_eq!(issue.reason.as_str(), "empty");
            } else {
                prop_assert_eq!(issue.reason.clone(), format!("non-numeric: '{}'", trimmed));
            }
        }
        let mut indices: Vec<usize> = report.invalid_pages.iter().map(|p| p.index).collect();
        indices.dedup();
        prop_assert_eq!(indices.len(), report.invalid_pages.len());
    }

    #[test]
    fn at_most_one_gap_per_clause(records in proptest::collection::vec(loose_record(), 0..30)) {
        let report = ClauseEngine::new().validate(&records);
        let mut indices: Vec<usize> = report.continuity_gaps.iter().map(|g| g.curr_index).collect();
        let total = indices.len();
        indices.dedup();
        prop_assert_eq!(indices.len(), total);
        for gap in &report.continuity_gaps {
            prop_assert!(gap.prev_index < gap.curr_index);
        }
    }

    // ============================================================
    // Parsing
    // ============================================================

    #[test]
    fn parse_is_stable(raw in "[0-9]{1,4}(\\.[0-9]{1,4}){0,4}\\.{0,2}") {
        let parsed = ClauseNumber::parse(&raw);
        prop_assert!(parsed.is_some());
        let reparsed = parsed.as_ref().and_then(|n| ClauseNumber::parse(&n.to_string()));
        prop_assert_eq!(reparsed, parsed);
    }

    #[test]
    fn letters_never_parse(raw in "[0-9.]{0,4}[A-Za-z]{1,3}[0-9.]{0,4}") {
        prop_assert!(ClauseNumber::parse(&raw).is_none());
    }

    // ============================================================
    // Continuity
    // ============================================================

    #[test]
    fn well_formed_outlines_have_no_gaps(numbers in outline()) {
        let report = ClauseEngine::new().validate(&records_for(&numbers));
        prop_assert!(report.continuity_gaps.is_empty(), "{:?} -> {:?}", numbers, report.continuity_gaps);
    }

    #[test]
    fn interleaved_unparseable_numbers_are_ignored(numbers in outline()) {
        let mut noisy = Vec::new();
        for number in &numbers {
            noisy.push(number.clone());
            noisy.push("N/A".to_string());
        }
        let report = ClauseEngine::new().validate(&records_for(&noisy));
        prop_assert!(report.continuity_gaps.is_empty());
    }

    #[test]
    fn repeated_number_is_always_a_gap(numbers in outline(), pick in any::<prop::sample::Index>()) {
        let at = pick.index(numbers.len());
        let mut with_repeat = numbers.clone();
        with_repeat.insert(at + 1, numbers[at].clone());

        let report = ClauseEngine::new().validate(&records_for(&with_repeat));
        prop_assert!(report.continuity_gaps.iter().any(|g| g.curr_index == at + 1));
    }
}
