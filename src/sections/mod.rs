//! Scoring rubric sections
//!
//! Each section checks one independent rule and reports the points it awards
//! plus an optional deficiency. The common-password check is not additive and
//! overrides the total instead.

mod blacklist;
mod length;
mod variety;

use crate::types::Feedback;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Points awarded by a section and the deficiency it found, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionScore {
    pub points: u8,
    pub feedback: Option<Feedback>,
}

impl SectionScore {
    pub fn pass(points: u8) -> Self {
        Self { points, feedback: None }
    }

    pub fn partial(points: u8, feedback: Feedback) -> Self {
        Self { points, feedback: Some(feedback) }
    }

    pub fn fail(feedback: Feedback) -> Self {
        Self::partial(0, feedback)
    }
}

/// Signature shared by every additive section.
pub type Section = fn(&str) -> SectionScore;
