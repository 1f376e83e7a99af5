//! Dotted hierarchical clause numbers ("6", "6.1", "6.1.2.")

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One numeric segment; whitespace around the digits is tolerated
    static ref SEGMENT: Regex = Regex::new(r"^\s*([0-9]+)\s*$").unwrap();
}

/// Strip trailing dots ("6.1." and "6.1.." both become "6.1")
pub fn normalize(raw: &str) -> &str {
    raw.trim_end_matches('.')
}

/// A parsed clause number: one or more non-negative integer segments.
///
/// Unparseable numbers never become a `ClauseNumber`; [`ClauseNumber::parse`]
/// returns `None` for them instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClauseNumber {
    segments: Vec<u64>,
}

impl ClauseNumber {
    /// Parse a raw clause number.
    ///
    /// Returns `None` for empty input and whenever any segment is not a plain
    /// base-10 integer. Partial parses are never returned.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }

        let segments = normalized
            .split('.')
            .map(parse_segment)
            .collect::<Option<Vec<u64>>>()?;

        Some(Self { segments })
    }

    /// Build from raw segments, `None` if there are none
    pub fn from_segments(segments: Vec<u64>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Number of segments ("6.1.2" has depth 3)
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn last(&self) -> u64 {
        self.segments.last().copied().unwrap_or_default()
    }

    /// Same number with the last segment replaced
    pub fn with_last(&self, last: u64) -> Self {
        let mut segments = self.segments.clone();
        if let Some(slot) = segments.last_mut() {
            *slot = last;
        }
        Self { segments }
    }

    /// Child number one level deeper ("6.1" -> "6.1.<n>")
    pub fn child(&self, n: u64) -> Self {
        let mut segments = self.segments.clone();
        segments.push(n);
        Self { segments }
    }
}

impl fmt::Display for ClauseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .segments
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&joined)
    }
}

fn parse_segment(segment: &str) -> Option<u64> {
    SEGMENT
        .captures(segment)
        .and_then(|cap| cap.get(1))
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
}
