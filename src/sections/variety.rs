//! Character variety sections - one check per character class.

use super::SectionScore;
use crate::charset::CharacterClass;
use crate::types::Feedback;

const CLASS_POINTS: u8 = 15;

fn class_section(password: &str, class: CharacterClass, missing: Feedback) -> SectionScore {
    if password.chars().any(|c| class.contains(c)) {
        SectionScore::pass(CLASS_POINTS)
    } else {
        SectionScore::fail(missing)
    }
}

pub fn uppercase_section(password: &str) -> SectionScore {
    class_section(password, CharacterClass::Uppercase, Feedback::MissingUppercase)
}

pub fn lowercase_section(password: &str) -> SectionScore {
    class_section(password, CharacterClass::Lowercase, Feedback::MissingLowercase)
}

pub fn digit_section(password: &str) -> SectionScore {
    class_section(password, CharacterClass::Digit, Feedback::MissingDigit)
}

/// Only ASCII punctuation counts; spaces and non-ASCII symbols do not.
pub fn special_section(password: &str) -> SectionScore {
    class_section(password, CharacterClass::Special, Feedback::MissingSpecial)
}
