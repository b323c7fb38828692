//! Length sections - minimum and maximum character counts.

use crate::report::{OutcomeSource, RuleOutcome};
use crate::rules::RuleSpec;

/// Checks the password has at least `min` characters.
///
/// Length is measured in Unicode scalar values, not bytes.
pub fn min_length_section(password: &str, min: usize) -> RuleOutcome {
    let len = password.chars().count();
    RuleOutcome::new(
        OutcomeSource::Rule(RuleSpec::MinLength(min)),
        format!("Minimum {} characters", min),
        len >= min,
        format!("Current length: {}", len),
    )
}

/// Checks the password has at most `max` characters.
pub fn max_length_section(password: &str, max: usize) -> RuleOutcome {
    let len = password.chars().count();
    RuleOutcome::new(
        OutcomeSource::Rule(RuleSpec::MaxLength(max)),
        format!("Maximum {} characters", max),
        len <= max,
        format!("Current length: {}", len),
    )
}
