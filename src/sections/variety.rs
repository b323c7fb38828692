//! Character variety sections - per-class minimum counts and the space ban.

use crate::charset::CharClass;
use crate::report::{OutcomeSource, RuleOutcome};
use crate::rules::RuleSpec;

/// Checks the password contains at least `min` characters of `class`.
pub fn character_class_section(password: &str, class: CharClass, min: usize) -> RuleOutcome {
    let (rule, what) = match class {
        CharClass::Uppercase => (RuleSpec::MinUppercase(min), "uppercase letter(s)"),
        CharClass::Lowercase => (RuleSpec::MinLowercase(min), "lowercase letter(s)"),
        CharClass::Digit => (RuleSpec::MinDigits(min), "digit(s)"),
        CharClass::Symbol => (RuleSpec::MinSymbols(min), "symbol(s)"),
    };
    let found = class.count(password);

    RuleOutcome::new(
        OutcomeSource::Rule(rule),
        format!("At least {} {}", min, what),
        found >= min,
        format!("Found: {}", found),
    )
}

/// Checks the password has no ASCII space. Other whitespace is not checked.
pub fn no_spaces_section(password: &str) -> RuleOutcome {
    let passed = !password.contains(' ');
    RuleOutcome::new(
        OutcomeSource::Rule(RuleSpec::NoWhitespace),
        "No spaces",
        passed,
        if passed { "OK" } else { "Spaces found" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_missing_uppercase() {
        let outcome = character_class_section("lowercase123!", CharClass::Uppercase, 1);
        assert!(!outcome.passed);
        assert_eq!(outcome.label, "At least 1 uppercase letter(s)");
        assert_eq!(outcome.detail, "Found: 0");
    }

    #[test]
    fn test_variety_counts_digits() {
        let outcome = character_class_section("a1b2c3", CharClass::Digit, 3);
        assert!(outcome.passed);
        assert_eq!(outcome.source, OutcomeSource::Rule(RuleSpec::MinDigits(3)));
        assert_eq!(outcome.detail, "Found: 3");
    }

    #[test]
    fn test_variety_digits_exclude_fractions_and_numerals() {
        let outcome = character_class_section("½Ⅻ", CharClass::Digit, 1);
        assert!(!outcome.passed);
        assert_eq!(outcome.detail, "Found: 0");

        // Arabic-Indic three
        let outcome = character_class_section("٣", CharClass::Digit, 1);
        assert!(outcome.passed);
    }

    #[test]
    fn test_variety_symbols_are_ascii_punctuation() {
        let outcome = character_class_section("pass€word", CharClass::Symbol, 1);
        assert!(!outcome.passed);

        let outcome = character_class_section("pass~word", CharClass::Symbol, 1);
        assert!(outcome.passed);
    }

    #[test]
    fn test_variety_zero_minimum_always_passes() {
        assert!(character_class_section("", CharClass::Lowercase, 0).passed);
    }

    #[test]
    fn test_no_spaces() {
        let outcome = no_spaces_section("has space");
        assert!(!outcome.passed);
        assert_eq!(outcome.detail, "Spaces found");

        let outcome = no_spaces_section("nospace");
        assert!(outcome.passed);
        assert_eq!(outcome.detail, "OK");
    }

    #[test]
    fn test_no_spaces_ignores_tabs_and_newlines() {
        assert!(no_spaces_section("tab\there\nnewline").passed);
    }
}
