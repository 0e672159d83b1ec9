//! Character classes shared by the scorer and the generator.

use unicode_general_category::{GeneralCategory, get_general_category};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// The 32 ASCII punctuation characters.
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four character classes used for scoring and generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Class membership as the scorer sees it.
    ///
    /// `Digit` accepts any Unicode decimal digit (category Nd), so `'٣'` and
    /// `'１'` count; the generator still only emits ASCII `0-9`.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Digit => {
                c.is_ascii_digit() || get_general_category(c) == GeneralCategory::DecimalNumber
            }
            CharacterClass::Special => c.is_ascii_punctuation(),
        }
    }
}
