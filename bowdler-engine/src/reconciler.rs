//! Candidate reconciliation: overlap removal and severity
//!
//! Both scan passes dump raw candidates into one pool; this module turns
//! the pool into the final non-overlapping match list and its severity.

use std::collections::HashSet;

use crate::result::Severity;

/// A surviving candidate span, in original-text char offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatchCandidate {
    /// Canonical dictionary word that matched
    pub word: String,
    /// Char offset of the first matched char
    pub start: usize,
    /// Char offset one past the last matched char
    pub end: usize,
}

/// Keep the longest match at each start offset and drop anything
/// overlapping an already-kept span: sort `(start asc, end desc)`, then
/// sweep left to right keeping a candidate iff it starts at or after the
/// end of the last kept one.
pub(crate) fn deduplicate(mut candidates: Vec<MatchCandidate>) -> Vec<MatchCandidate> {
    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut kept: Vec<MatchCandidate> = Vec::with_capacity(candidates.len());
    let mut last_end = 0;
    for candidate in candidates {
        if kept.is_empty() || candidate.start >= last_end {
            last_end = candidate.end;
            kept.push(candidate);
        }
    }
    kept
}

/// Monotone in both total matches and distinct words
pub(crate) fn severity(matches: &[MatchCandidate]) -> Severity {
    if matches.is_empty() {
        return Severity::Mild;
    }

    let total = matches.len();
    let distinct = matches
        .iter()
        .map(|m| m.word.as_str())
        .collect::<HashSet<_>>()
        .len();

    if total >= 5 || distinct >= 4 {
        Severity::Extreme
    } else if total >= 3 || distinct >= 3 {
        Severity::Severe
    } else if total >= 2 || distinct >= 2 {
        Severity::Moderate
    } else {
        Severity::Mild
    }
}
