//! Numbering transitions between consecutive parsable clauses
//!
//! A clause list is a pre-order walk of an implicit tree. Between two
//! consecutive numbers only three kinds of move are allowed:
//!
//! - the next sibling at the same depth ("6.1" -> "6.2")
//! - the first child one level down ("6" -> "6.1")
//! - a return to an ancestor level with an increment there ("6.1.2" -> "6.2",
//!   "6.1.2" -> "7.1")
//!
//! Everything else is a [`Gap`].

use std::cmp::Ordering;

use thiserror::Error;

use crate::numbering::ClauseNumber;

/// A valid move from one clause number to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Same depth, same parent, last segment incremented by one
    Sibling,
    /// One level deeper, numbered 1
    FirstChild,
    /// Back up to `level` (1-based depth) and increment there
    Ascend { level: usize },
    /// New top-level branch: first segment incremented
    RootRestart,
}

/// An invalid move, with the reason rendered through `Display`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Gap {
    #[error("expected {} at level {level}, found {found}", .expected.last())]
    SiblingMismatch {
        expected: ClauseNumber,
        level: usize,
        found: u64,
    },

    #[error("child should start at 1, found {found}")]
    ChildStart { parent: ClauseNumber, found: u64 },

    #[error("invalid child: expected {parent}.1")]
    InvalidChild { parent: ClauseNumber },

    #[error("skipped hierarchy levels, expected {parent}.1")]
    SkippedLevels { parent: ClauseNumber },

    #[error("invalid return to ancestor level")]
    InvalidAncestorReturn,
}

impl Gap {
    /// The clause number that would have been valid, when there is exactly one
    pub fn expected(&self) -> Option<ClauseNumber> {
        match self {
            Gap::SiblingMismatch { expected, .. } => Some(expected.clone()),
            Gap::ChildStart { parent, .. }
            | Gap::InvalidChild { parent }
            | Gap::SkippedLevels { parent } => Some(parent.child(1)),
            Gap::InvalidAncestorReturn => None,
        }
    }
}

/// Decide whether `curr` may directly follow `prev`
pub fn validate(prev: &ClauseNumber, curr: &ClauseNumber) -> Result<Transition, Gap> {
    let (p, c) = (prev.segments(), curr.segments());

    match c.len().cmp(&p.len()) {
        Ordering::Equal => {
            let depth = c.len();
            if c[..depth - 1] == p[..depth - 1] && is_successor(prev.last(), curr.last()) {
                Ok(Transition::Sibling)
            } else {
                Err(Gap::SiblingMismatch {
                    expected: prev.with_last(prev.last().saturating_add(1)),
                    level: depth,
                    found: curr.last(),
                })
            }
        }
        Ordering::Greater if c.len() == p.len() + 1 => {
            if c[..p.len()] != *p {
                Err(Gap::InvalidChild {
                    parent: prev.clone(),
                })
            } else if curr.last() != 1 {
                Err(Gap::ChildStart {
                    parent: prev.clone(),
                    found: curr.last(),
                })
            } else {
                Ok(Transition::FirstChild)
            }
        }
        Ordering::Greater => Err(Gap::SkippedLevels {
            parent: prev.clone(),
        }),
        Ordering::Less => ascend(p, c),
    }
}

/// `curr` is shallower than `prev`. The deepest matching ancestor level wins;
/// the root restart is only tried after every deeper level failed.
/// Segments of `curr` below the incremented level are not constrained.
fn ascend(p: &[u64], c: &[u64]) -> Result<Transition, Gap> {
    for level in (1..c.len()).rev() {
        if c[..level] == p[..level] && is_successor(p[level], c[level]) {
            return Ok(Transition::Ascend { level: level + 1 });
        }
    }

    if is_successor(p[0], c[0]) {
        return Ok(Transition::RootRestart);
    }

    Err(Gap::InvalidAncestorReturn)
}

fn is_successor(prev: u64, curr: u64) -> bool {
    curr.checked_sub(1) == Some(prev)
}
