//! Letter-to-number mapping for the Pythagorean and Chaldean systems.
//!
//! Only ASCII letters carry a value. Spaces, punctuation, digits and
//! non-ASCII characters map to `None` and are filtered out before summing.

use serde::{Deserialize, Serialize};

/// Letter-value system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterSystem {
    /// A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8.
    #[default]
    Pythagorean,
    /// Babylonian table, values 1..=8 (9 is never assigned).
    Chaldean,
}

impl LetterSystem {
    /// Value of `ch` in this system, case-insensitive.
    pub const fn value(self, ch: char) -> Option<u8> {
        match self {
            Self::Pythagorean => letter_value(ch),
            Self::Chaldean => chaldean_letter_value(ch),
        }
    }

    /// Lowercase identifier used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pythagorean => "pythagorean",
            Self::Chaldean => "chaldean",
        }
    }
}

/// How the letter Y is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YRule {
    /// Y is always a consonant.
    #[default]
    Consonant,
    /// Y is a vowel in a word that has no A, E, I, O or U ("LYNN", "GWYN").
    VowelWhenAlone,
}

impl YRule {
    /// Identifier used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Consonant => "consonant",
            Self::VowelWhenAlone => "vowel_when_alone",
        }
    }
}

/// Vowel or consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Vowel,
    Consonant,
}

/// Pythagorean value: `((code - 'A') mod 9) + 1`.
pub const fn letter_value(ch: char) -> Option<u8> {
    if !ch.is_ascii_alphabetic() {
        return None;
    }
    let idx = ch.to_ascii_uppercase() as u8 - b'A';
    Some(idx % 9 + 1)
}

/// Chaldean value table, indexed A..Z.
const CHALDEAN_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, // A-I
    1, 2, 3, 4, 5, 7, 8, 1, 2, // J-R
    3, 4, 6, 6, 6, 5, 1, 7, // S-Z
];

/// Chaldean value of `ch`.
pub const fn chaldean_letter_value(ch: char) -> Option<u8> {
    if !ch.is_ascii_alphabetic() {
        return None;
    }
    let idx = (ch.to_ascii_uppercase() as u8 - b'A') as usize;
    Some(CHALDEAN_VALUES[idx])
}

/// A, E, I, O, U (case-insensitive).
pub const fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Classify every letter of a single word, honouring the Y rule.
///
/// Non-letters are dropped. The returned pairs are `(uppercase letter, class)`.
pub fn classify_word(word: &str, y_rule: YRule) -> Vec<(char, LetterClass)> {
    let letters: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let y_is_vowel = match y_rule {
        YRule::Consonant => false,
        YRule::VowelWhenAlone => !letters.iter().any(|&c| is_vowel(c)),
    };
    letters
        .into_iter()
        .map(|c| {
            let class = if is_vowel(c) || (c == 'Y' && y_is_vowel) {
                LetterClass::Vowel
            } else {
                LetterClass::Consonant
            };
            (c, class)
        })
        .collect()
}

/// Letter system and Y policy used by the name calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameConfig {
    pub system: LetterSystem,
    pub y_rule: YRule,
}

impl NameConfig {
    pub const fn new(system: LetterSystem, y_rule: YRule) -> Self {
        Self { system, y_rule }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pythagorean_cycles() {
        assert_eq!(letter_value('A'), Some(1));
        assert_eq!(letter_value('I'), Some(9));
        assert_eq!(letter_value('J'), Some(1));
        assert_eq!(letter_value('R'), Some(9));
        assert_eq!(letter_value('S'), Some(1));
        assert_eq!(letter_value('Y'), Some(7));
        assert_eq!(letter_value('Z'), Some(8));
    }

    #[test]
    fn case_insensitive() {
        for (lo, up) in ('a'..='z').zip('A'..='Z') {
            assert_eq!(letter_value(lo), letter_value(up));
            assert_eq!(chaldean_letter_value(lo), chaldean_letter_value(up));
        }
    }

    #[test]
    fn non_letters_have_no_value() {
        for ch in [' ', '-', '\'', '7', '.', 'ș', 'é'] {
            assert_eq!(letter_value(ch), None, "{ch:?}");
        }
    }

    #[test]
    fn chaldean_never_nine() {
        for ch in 'A'..='Z' {
            let v = chaldean_letter_value(ch).unwrap();
            assert!((1..=8).contains(&v), "{ch} = {v}");
        }
        assert_eq!(chaldean_letter_value('F'), Some(8));
        assert_eq!(chaldean_letter_value('O'), Some(7));
        assert_eq!(chaldean_letter_value('Y'), Some(1));
    }

    #[test]
    fn y_consonant_by_default() {
        let classes = classify_word("Lynn", YRule::Consonant);
        assert!(classes.iter().all(|&(_, c)| c == LetterClass::Consonant));
    }

    #[test]
    fn y_vowel_when_alone() {
        let classes = classify_word("Lynn", YRule::VowelWhenAlone);
        assert_eq!(classes[1], ('Y', LetterClass::Vowel));
        // Word already has a vowel: Y stays a consonant.
        let classes = classify_word("Mary", YRule::VowelWhenAlone);
        assert_eq!(classes[3], ('Y', LetterClass::Consonant));
    }

    #[test]
    fn classify_drops_punctuation() {
        let classes = classify_word("O'Neil", YRule::Consonant);
        let letters: String = classes.iter().map(|&(c, _)| c).collect();
        assert_eq!(letters, "ONEIL");
    }
}
