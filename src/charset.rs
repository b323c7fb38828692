//! Character classes shared by the evaluator and the generator.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Union pool used to pad a generated password up to the requested length.
pub(crate) const ALL: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A class of characters a rule can require a minimum count of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Whether `c` is counted towards this class during validation.
    ///
    /// Letter classes follow Unicode case properties and digits are general
    /// category Nd; symbols are the 32 ASCII punctuation characters only.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Uppercase => c.is_uppercase(),
            CharClass::Lowercase => c.is_lowercase(),
            CharClass::Digit => c.general_category() == GeneralCategory::DecimalNumber,
            CharClass::Symbol => c.is_ascii_punctuation(),
        }
    }

    /// Counts the characters of `s` belonging to this class.
    pub fn count(self, s: &str) -> usize {
        s.chars().filter(|&c| self.contains(c)).count()
    }

    /// ASCII pool the generator draws from for this class.
    pub(crate) fn pool(self) -> &'static [u8] {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_pool_is_ascii_punctuation() {
        assert_eq!(SYMBOLS.len(), 32);
        assert!(SYMBOLS.iter().all(|b| b.is_ascii_punctuation()));
    }

    #[test]
    fn test_union_pool_covers_every_class() {
        assert_eq!(ALL.len(), 94);
        for class in [
            CharClass::Uppercase,
            CharClass::Lowercase,
            CharClass::Digit,
            CharClass::Symbol,
        ] {
            assert!(class.pool().iter().all(|b| ALL.contains(b)));
        }
    }

    #[test]
    fn test_count_unicode_letters() {
        assert_eq!(CharClass::Uppercase.count("ÁbC"), 2);
        assert_eq!(CharClass::Lowercase.count("ÁbCé"), 2);
    }

    #[test]
    fn test_digit_is_decimal_number_only() {
        assert_eq!(CharClass::Digit.count("7٣½Ⅻ²"), 2);
    }

    #[test]
    fn test_symbol_excludes_non_ascii() {
        assert_eq!(CharClass::Symbol.count("€!§?"), 2);
    }
}
