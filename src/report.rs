//! Evaluation results and strength tiers.

use std::fmt;

use crate::rules::RuleSpec;

/// What produced a [`RuleOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OutcomeSource {
    /// A rule configured in the [`RuleSet`](crate::RuleSet).
    Rule(RuleSpec),
    /// The password is on the common-password denylist.
    CommonPassword,
    /// The password contains a well-known keyboard or alphabet sequence.
    Sequence,
    /// The password repeats one character three or more times in a row.
    Repetition,
}

impl OutcomeSource {
    pub fn is_heuristic(&self) -> bool {
        !matches!(self, OutcomeSource::Rule(_))
    }
}

/// Verdict for one rule or heuristic check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RuleOutcome {
    pub source: OutcomeSource,
    pub label: String,
    pub passed: bool,
    pub detail: String,
}

impl RuleOutcome {
    pub(crate) fn new(
        source: OutcomeSource,
        label: impl Into<String>,
        passed: bool,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            source,
            label: label.into(),
            passed,
            detail: detail.into(),
        }
    }
}

/// Result of validating one password against a [`RuleSet`](crate::RuleSet).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport {
    /// Every configured rule passed. Heuristic penalties never affect this.
    pub all_passed: bool,
    /// Configured-rule outcomes in insertion order, then failed heuristics.
    pub outcomes: Vec<RuleOutcome>,
    /// Normalized score, 0 to 100.
    pub score: u8,
}

impl ValidationReport {
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }

    pub fn failures(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

/// Text tier shown next to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => Strength::VeryWeak,
            40..=59 => Strength::Weak,
            60..=79 => Strength::Medium,
            80..=94 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a score to its tier label.
pub fn strength_label(score: u8) -> &'static str {
    Strength::from_score(score).label()
}
