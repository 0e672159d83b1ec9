//! Score, label and feedback types returned by the evaluator.

use std::fmt;

/// Highest value a [`PasswordScore`] can hold.
pub const MAX_SCORE: u8 = 100;

/// A strength score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Builds a score, clamping out-of-range values into `0..=100`.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, MAX_SCORE as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn strength(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.0)
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => StrengthLabel::Strong,
            60..=79 => StrengthLabel::Moderate,
            30..=59 => StrengthLabel::Weak,
            _ => StrengthLabel::VeryWeak,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// A single deficiency reported by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Fewer than 8 characters.
    TooShort,
    /// 8 to 11 characters.
    BelowRecommendedLength,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
    /// Replaces every other item when the password is on the deny-list.
    CommonPassword,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Feedback::TooShort => "Password is too short (minimum 8 characters recommended)",
            Feedback::BelowRecommendedLength => {
                "Make your password longer (12+ characters recommended)"
            }
            Feedback::MissingUppercase => "Add uppercase letters",
            Feedback::MissingLowercase => "Add lowercase letters",
            Feedback::MissingDigit => "Add numbers",
            Feedback::MissingSpecial => "Add special characters (!@#$%^&*)",
            Feedback::CommonPassword => "This is a commonly used password and very insecure",
        };
        f.write_str(message)
    }
}

/// Outcome of scoring one password. Built fresh per evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: PasswordScore,
    pub feedback: Vec<Feedback>,
}

impl ScoreResult {
    pub fn strength(&self) -> StrengthLabel {
        self.score.strength()
    }

    /// Feedback rendered as display strings, in rubric order.
    pub fn messages(&self) -> Vec<String> {
        self.feedback.iter().map(ToString::to_string).collect()
    }

    /// True when the password met every recommended criterion.
    pub fn is_clean(&self) -> bool {
        self.feedback.is_empty()
    }
}
