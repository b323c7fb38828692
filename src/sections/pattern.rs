//! Pattern analysis sections - detects obvious sequences and repeated characters.

use crate::report::{OutcomeSource, RuleOutcome};
use super::HeuristicResult;

/// Raw-score points removed for an obvious sequence.
pub const SEQUENCE_PENALTY: usize = 10;
/// Raw-score points removed for a run of repeated characters.
pub const REPETITION_PENALTY: usize = 10;

const SEQUENCES: [&str; 5] = ["abc", "123", "qwe", "asd", "zxc"];

/// Checks for well-known alphabet, digit and keyboard sequences anywhere in
/// the password (case-insensitive). Reports once however many match.
pub fn sequence_section(password: &str) -> HeuristicResult {
    let lowered = password.to_lowercase();
    if SEQUENCES.iter().any(|seq| lowered.contains(seq)) {
        return Some(RuleOutcome::new(
            OutcomeSource::Sequence,
            "No obvious sequences",
            false,
            "Contains sequences like abc, 123, etc.",
        ));
    }
    None
}

/// Checks for one character repeated 3 or more times in a row.
///
/// Newlines never start a run, matching `(.)\1{2,}` in a regex engine where
/// `.` excludes `\n`.
pub fn repetition_section(password: &str) -> HeuristicResult {
    let mut prev: Option<char> = None;
    let mut run = 0;

    for c in password.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run >= 3 && c != '\n' {
            return Some(RuleOutcome::new(
                OutcomeSource::Repetition,
                "No repeated characters",
                false,
                "Contains 3+ repeated characters",
            ));
        }
    }
    None
}
