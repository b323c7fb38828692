//! Password evaluator - applies a rule set and the heuristic checks.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::CharClass;
use crate::denylist::Denylist;
use crate::report::{RuleOutcome, ValidationReport};
use crate::rules::{RuleSet, RuleSpec};
use crate::sections::{
    COMMON_PASSWORD_PENALTY, REPETITION_PENALTY, SEQUENCE_PENALTY, character_class_section,
    common_password_section, max_length_section, min_length_section, no_spaces_section,
    repetition_section, sequence_section,
};

/// Raw-score points earned by each passing configured rule.
const RULE_CREDIT: usize = 10;

impl RuleSet {
    /// Validates a password against this rule set and the built-in denylist.
    ///
    /// Never fails: every input, including the empty string, produces a report.
    ///
    /// # Returns
    /// A `ValidationReport` with one outcome per configured rule in insertion
    /// order, followed by an outcome for each heuristic that flagged the password.
    pub fn validate(&self, password: &SecretString) -> ValidationReport {
        self.validate_with(password, &Denylist::builtin())
    }

    /// Same as [`RuleSet::validate`] with a caller-supplied denylist.
    pub fn validate_with(&self, password: &SecretString, denylist: &Denylist) -> ValidationReport {
        let pwd = password.expose_secret();

        let mut outcomes: Vec<RuleOutcome> = self
            .rules()
            .iter()
            .map(|rule| rule_section(pwd, rule))
            .collect();

        let all_passed = outcomes.iter().all(|o| o.passed);
        let mut raw = outcomes.iter().filter(|o| o.passed).count() * RULE_CREDIT;
        let max = self.len() * RULE_CREDIT;

        // Fixed order: common password, sequence, repetition
        let heuristics = [
            (common_password_section(pwd, denylist), COMMON_PASSWORD_PENALTY),
            (sequence_section(pwd), SEQUENCE_PENALTY),
            (repetition_section(pwd), REPETITION_PENALTY),
        ];
        for (flagged, penalty) in heuristics {
            if let Some(outcome) = flagged {
                raw = raw.saturating_sub(penalty);
                outcomes.push(outcome);
            }
        }

        let score = (raw * 100 / max.max(1)) as u8;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Validated password against {} rules: all_passed={}, score={}",
            self.len(),
            all_passed,
            score
        );

        ValidationReport {
            all_passed,
            outcomes,
            score,
        }
    }
}

fn rule_section(pwd: &str, rule: &RuleSpec) -> RuleOutcome {
    match *rule {
        RuleSpec::MinLength(n) => min_length_section(pwd, n),
        RuleSpec::MaxLength(n) => max_length_section(pwd, n),
        RuleSpec::NoWhitespace => no_spaces_section(pwd),
        RuleSpec::MinUppercase(n) => character_class_section(pwd, CharClass::Uppercase, n),
        RuleSpec::MinLowercase(n) => character_class_section(pwd, CharClass::Lowercase, n),
        RuleSpec::MinDigits(n) => character_class_section(pwd, CharClass::Digit, n),
        RuleSpec::MinSymbols(n) => character_class_section(pwd, CharClass::Symbol, n),
    }
}

/// Async version that sends the validation report via channel.
///
/// Nothing is evaluated or sent if `token` is already cancelled.
#[cfg(feature = "async")]
pub async fn validate_tx(
    rules: &RuleSet,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationReport>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("Validation cancelled before start");
        return;
    }

    let report = rules.validate(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send validation report: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{OutcomeSource, Strength};

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_validate_default_policy_strong_password() {
        let report = RuleSet::default_validation().validate(&secret("Xk9#mQ2!"));

        assert!(report.all_passed);
        assert_eq!(report.outcomes.len(), 7);
        assert_eq!(report.score, 100);
        assert_eq!(report.strength(), Strength::VeryStrong);
    }

    #[test]
    fn test_validate_outcomes_follow_insertion_order() {
        let rules = RuleSet::new().no_spaces().digits(2).min_length(4);
        let report = rules.validate(&secret("Zz9 x"));

        let sources: Vec<_> = report.outcomes.iter().map(|o| o.source).collect();
        assert_eq!(
            sources,
            vec![
                OutcomeSource::Rule(RuleSpec::NoWhitespace),
                OutcomeSource::Rule(RuleSpec::MinDigits(2)),
                OutcomeSource::Rule(RuleSpec::MinLength(4)),
            ]
        );
        assert_eq!(
            report.outcomes.iter().map(|o| o.passed).collect::<Vec<_>>(),
            vec![false, false, true]
        );
        assert!(!report.all_passed);
        assert_eq!(report.score, 33);
    }

    #[test]
    fn test_validate_empty_rule_set() {
        let report = RuleSet::new().validate(&secret("Xk9#mQ2!"));
        assert!(report.all_passed);
        assert!(report.outcomes.is_empty());
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_validate_empty_rule_set_still_reports_heuristics() {
        let report = RuleSet::new().validate(&secret("password"));
        assert!(report.all_passed);
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].source, OutcomeSource::CommonPassword);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_validate_empty_password() {
        let report = RuleSet::default_validation().validate(&secret(""));
        assert!(!report.all_passed);
        assert_eq!(report.outcomes.len(), 7);
        // max length, no spaces pass
        assert_eq!(report.score, 28);
        assert_eq!(report.strength(), Strength::VeryWeak);
    }

    #[test]
    fn test_validate_common_password() {
        let rules = RuleSet::default_validation();
        let common = rules.validate(&secret("password"));
        let strong = rules.validate(&secret("Xk9#mQ2!"));

        let flagged = common
            .outcomes
            .iter()
            .find(|o| o.source == OutcomeSource::CommonPassword)
            .expect("common password outcome");
        assert!(!flagged.passed);
        assert!(common.score < strong.score);
    }

    #[test]
    fn test_validate_heuristics_do_not_affect_all_passed() {
        let rules = RuleSet::new().min_length(6);
        let report = rules.validate(&secret("aaa123"));

        assert!(report.all_passed);
        let sources: Vec<_> = report.outcomes.iter().map(|o| o.source).collect();
        assert_eq!(
            sources,
            vec![
                OutcomeSource::Rule(RuleSpec::MinLength(6)),
                OutcomeSource::Sequence,
                OutcomeSource::Repetition,
            ]
        );
        // 10 - 10 - 10, floored at 0
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_validate_repetition_detection() {
        let rules = RuleSet::new().min_length(6);
        let repeated = rules.validate(&secret("aaa123"));
        let plain = rules.validate(&secret("abc123"));

        assert!(repeated.outcomes.iter().any(|o| o.source == OutcomeSource::Repetition));
        assert!(!plain.outcomes.iter().any(|o| o.source == OutcomeSource::Repetition));
    }

    #[test]
    fn test_validate_sequence_detection() {
        let report = RuleSet::new().min_length(6).validate(&secret("abc999"));
        let seq = report
            .outcomes
            .iter()
            .find(|o| o.source == OutcomeSource::Sequence)
            .expect("sequence outcome");
        assert!(!seq.passed);
    }

    #[test]
    fn test_validate_all_heuristics_in_fixed_order() {
        let report = RuleSet::new().validate(&secret("123123"));
        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.outcomes[0].source, OutcomeSource::CommonPassword);
        assert_eq!(report.outcomes[1].source, OutcomeSource::Sequence);
    }

    #[test]
    fn test_validate_penalty_floor() {
        // 5 of 7 rules pass (50 raw), minus 20 common password
        let rules = RuleSet::default_validation();
        let report = rules.validate(&secret("passw0rd"));
        assert_eq!(report.score, 42);
        assert_eq!(report.strength(), Strength::Weak);
    }

    #[test]
    fn test_validate_duplicate_rules_evaluated_independently() {
        let rules = RuleSet::new().uppercase(1).uppercase(3);
        let report = rules.validate(&secret("ABxy"));
        assert_eq!(report.outcomes.len(), 2);
        assert!(report.outcomes[0].passed);
        assert!(!report.outcomes[1].passed);
        assert_eq!(report.score, 50);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let rules = RuleSet::default_validation();
        let pwd = secret("Qwerty 111!");
        assert_eq!(rules.validate(&pwd), rules.validate(&pwd));
    }

    #[test]
    fn test_validate_score_boundaries() {
        let rules = RuleSet::default_validation();
        for pwd in ["", "a", "password", "aaa", "MyPass123!", "VeryStrongPassword123!@#"] {
            let report = rules.validate(&secret(pwd));
            assert!(report.score <= 100, "score {} out of bounds for '{}'", report.score, pwd);
            assert_eq!(
                report.all_passed,
                report
                    .outcomes
                    .iter()
                    .filter(|o| !o.source.is_heuristic())
                    .all(|o| o.passed)
            );
        }
    }

    #[test]
    fn test_validate_with_custom_denylist() {
        let denylist: Denylist = ["Tr0ub4dor&3"].into_iter().collect();
        let rules = RuleSet::new().min_length(8);

        let report = rules.validate_with(&secret("tr0ub4dor&3"), &denylist);
        assert!(report.outcomes.iter().any(|o| o.source == OutcomeSource::CommonPassword));
        assert_eq!(report.score, 0);

        let report = rules.validate_with(&secret("password"), &denylist);
        assert!(report.outcomes.iter().all(|o| o.source != OutcomeSource::CommonPassword));
    }
}
