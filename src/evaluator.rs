//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    Section, SectionScore, blacklist_section, digit_section, length_section, lowercase_section,
    special_section, uppercase_section,
};
use crate::types::{Feedback, PasswordScore, ScoreResult};

/// Why a password produced no [`ScoreResult`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    /// Empty input is "not evaluated" rather than scored.
    #[error("Password is empty, nothing to evaluate")]
    EmptyInput,
    #[error("Evaluation cancelled")]
    Cancelled,
}

/// Additive sections, in feedback order.
const SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_section),
];

#[derive(Default)]
struct Tally {
    points: i64,
    feedback: Vec<Feedback>,
}

impl Tally {
    fn add(&mut self, section: SectionScore) {
        self.points += i64::from(section.points);
        self.feedback.extend(section.feedback);
    }

    fn finish(self, password: &str) -> ScoreResult {
        if let Some(common) = blacklist_section(password) {
            return ScoreResult {
                score: PasswordScore::new(0),
                feedback: vec![common],
            };
        }
        ScoreResult {
            score: PasswordScore::new(self.points),
            feedback: self.feedback,
        }
    }
}

/// Scores a password against the additive rubric.
///
/// Every section is always evaluated. A password on the common-password list
/// scores 0 and its feedback is replaced by a single
/// [`Feedback::CommonPassword`]. Total over any input; callers that want
/// empty input treated as "not evaluated" should use
/// [`evaluate_password_strength`].
pub fn score(password: &str) -> ScoreResult {
    let mut tally = Tally::default();
    for (_, section) in SECTIONS {
        tally.add(section(password));
    }
    tally.finish(password)
}

/// Evaluates password strength for a caller holding the password as a secret.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only), checked
///   before each section
///
/// # Errors
/// * [`EvaluationError::EmptyInput`] for an empty password
/// * [`EvaluationError::Cancelled`] if the token fired mid-evaluation
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<ScoreResult, EvaluationError> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Err(EvaluationError::EmptyInput);
    }

    let mut tally = Tally::default();
    for (_section_name, section) in SECTIONS {
        #[cfg(feature = "async")]
        {
            if token.as_ref().is_some_and(CancellationToken::is_cancelled) {
                #[cfg(feature = "tracing")]
                tracing::debug!("evaluation cancelled before section: {}", _section_name);
                return Err(EvaluationError::Cancelled);
            }
        }
        tally.add(section(pwd));
    }

    #[cfg(feature = "async")]
    {
        if token.as_ref().is_some_and(CancellationToken::is_cancelled) {
            return Err(EvaluationError::Cancelled);
        }
    }

    let result = tally.finish(pwd);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: score={} strength={} feedback_items={}",
        result.score.value(),
        result.strength(),
        result.feedback.len()
    );

    Ok(result)
}

/// Async version that debounces briefly, then sends the outcome via channel.
///
/// Intended for UIs that re-evaluate on every keystroke: cancel the previous
/// token when new input arrives.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<ScoreResult, EvaluationError>>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let evaluation = evaluate_password_strength(password, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
