//! Rule specifications and the chained policy builder.

use crate::charset::CharClass;

/// Length requested from the generator when the caller does not supply one.
pub const DEFAULT_GENERATED_LENGTH: usize = 12;

/// One declarative password constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RuleSpec {
    MinLength(usize),
    MaxLength(usize),
    MinUppercase(usize),
    MinLowercase(usize),
    MinDigits(usize),
    MinSymbols(usize),
    NoWhitespace,
}

impl RuleSpec {
    /// Character class and minimum count, for the four class rules.
    pub fn class_requirement(&self) -> Option<(CharClass, usize)> {
        match *self {
            RuleSpec::MinUppercase(n) => Some((CharClass::Uppercase, n)),
            RuleSpec::MinLowercase(n) => Some((CharClass::Lowercase, n)),
            RuleSpec::MinDigits(n) => Some((CharClass::Digit, n)),
            RuleSpec::MinSymbols(n) => Some((CharClass::Symbol, n)),
            RuleSpec::MinLength(_) | RuleSpec::MaxLength(_) | RuleSpec::NoWhitespace => None,
        }
    }
}

/// Ordered password policy.
///
/// Insertion order is the evaluation order and the order outcomes are
/// reported in. Duplicate rules are kept and evaluated independently.
///
/// ```rust
/// use pwd_policy::RuleSet;
///
/// let rules = RuleSet::new()
///     .min_length(8)
///     .uppercase(1)
///     .digits(1)
///     .no_spaces();
/// assert_eq!(rules.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<RuleSpec>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy applied to candidate passwords by the web front end.
    pub fn default_validation() -> Self {
        Self::new()
            .min_length(8)
            .max_length(50)
            .uppercase(1)
            .lowercase(1)
            .digits(1)
            .symbols(1)
            .no_spaces()
    }

    /// Policy used when generating passwords for the web front end.
    ///
    /// The length rule has no effect on generation.
    pub fn default_generation() -> Self {
        Self::new()
            .min_length(8)
            .uppercase(2)
            .lowercase(2)
            .digits(2)
            .symbols(1)
    }

    pub fn push(mut self, rule: RuleSpec) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn min_length(self, length: usize) -> Self {
        self.push(RuleSpec::MinLength(length))
    }

    pub fn max_length(self, length: usize) -> Self {
        self.push(RuleSpec::MaxLength(length))
    }

    pub fn uppercase(self, count: usize) -> Self {
        self.push(RuleSpec::MinUppercase(count))
    }

    pub fn lowercase(self, count: usize) -> Self {
        self.push(RuleSpec::MinLowercase(count))
    }

    pub fn digits(self, count: usize) -> Self {
        self.push(RuleSpec::MinDigits(count))
    }

    pub fn symbols(self, count: usize) -> Self {
        self.push(RuleSpec::MinSymbols(count))
    }

    /// Requires at least one uppercase letter.
    pub fn has_uppercase(self) -> Self {
        self.uppercase(1)
    }

    /// Requires at least one lowercase letter.
    pub fn has_lowercase(self) -> Self {
        self.lowercase(1)
    }

    /// Requires at least one digit.
    pub fn has_digits(self) -> Self {
        self.digits(1)
    }

    /// Requires at least one ASCII punctuation character.
    pub fn has_symbols(self) -> Self {
        self.symbols(1)
    }

    /// Forbids the ASCII space character. Tabs and other whitespace are allowed.
    pub fn no_spaces(self) -> Self {
        self.push(RuleSpec::NoWhitespace)
    }

    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total number of characters the class rules force into a generated password.
    pub fn required_chars(&self) -> usize {
        self.rules
            .iter()
            .filter_map(RuleSpec::class_requirement)
            .map(|(_, n)| n)
            .sum()
    }
}

impl FromIterator<RuleSpec> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RuleSpec>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<RuleSpec> for RuleSet {
    fn extend<I: IntoIterator<Item = RuleSpec>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
