//! Blacklist section - checks if password is a common password.

use crate::blacklist::is_blacklisted;
use crate::types::Feedback;

/// Returns `Some(Feedback::CommonPassword)` when the lowercase form of the
/// password is on the deny-list.
pub fn blacklist_section(password: &str) -> Option<Feedback> {
    is_blacklisted(password).then_some(Feedback::CommonPassword)
}
