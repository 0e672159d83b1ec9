//! Length section - awards points by character count.

use super::SectionScore;
use crate::types::Feedback;

pub const MIN_LENGTH: usize = 8;
pub const RECOMMENDED_LENGTH: usize = 12;

const RECOMMENDED_POINTS: u8 = 25;
const MIN_POINTS: u8 = 15;

/// Scores the password length, counted in characters rather than bytes.
///
/// - 12 or more: +25
/// - 8 to 11: +15, suggests 12+
/// - under 8: +0, reports too short
pub fn length_section(password: &str) -> SectionScore {
    let len = password.chars().count();
    if len >= RECOMMENDED_LENGTH {
        SectionScore::pass(RECOMMENDED_POINTS)
    } else if len >= MIN_LENGTH {
        SectionScore::partial(MIN_POINTS, Feedback::BelowRecommendedLength)
    } else {
        SectionScore::fail(Feedback::TooShort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let result = length_section("Short1!");
        assert_eq!(result, SectionScore::fail(Feedback::TooShort));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let result = length_section("12345678");
        assert_eq!(result.points, 15);
        assert_eq!(result.feedback, Some(Feedback::BelowRecommendedLength));
    }

    #[test]
    fn test_length_section_just_below_recommended() {
        let result = length_section("abcdefghijk");
        assert_eq!(result.points, 15);
    }

    #[test]
    fn test_length_section_recommended() {
        assert_eq!(length_section("LongEnough12"), SectionScore::pass(25));
        assert_eq!(length_section("LongEnough123!"), SectionScore::pass(25));
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 7 characters, 14 bytes
        let result = length_section("ééééééé");
        assert_eq!(result, SectionScore::fail(Feedback::TooShort));
    }
}
