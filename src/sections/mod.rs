//! Password evaluation sections
//!
//! Rule sections turn one configured [`RuleSpec`](crate::RuleSpec) into an
//! outcome. Heuristic sections run on every password and only report when
//! they find a weakness.

mod common;
mod length;
mod pattern;
mod variety;

pub use common::{COMMON_PASSWORD_PENALTY, common_password_section};
pub use length::{max_length_section, min_length_section};
pub use pattern::{REPETITION_PENALTY, SEQUENCE_PENALTY, repetition_section, sequence_section};
pub use variety::{character_class_section, no_spaces_section};

use crate::report::RuleOutcome;

/// Result type for heuristic sections.
/// - `Some(outcome)` - Check failed, `outcome` carries the penalty reason
/// - `None` - Check passed
pub type HeuristicResult = Option<RuleOutcome>;
