//! Common password section - checks the password against the denylist.

use crate::denylist::Denylist;
use crate::report::{OutcomeSource, RuleOutcome};
use super::HeuristicResult;

/// Raw-score points removed when the password is on the denylist.
pub const COMMON_PASSWORD_PENALTY: usize = 20;

/// Checks if the whole password is on the denylist (case-insensitive).
pub fn common_password_section(password: &str, denylist: &Denylist) -> HeuristicResult {
    if denylist.contains(password) {
        return Some(RuleOutcome::new(
            OutcomeSource::CommonPassword,
            "No common passwords",
            false,
            "This is a very common password",
        ));
    }
    None
}
