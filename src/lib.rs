//! Password strength scoring and random password generation
//!
//! Two independent, stateless pieces:
//!
//! - a scorer mapping a password to a 0–100 score, a strength label and an
//!   ordered list of deficiencies, with a common-password override
//! - a generator drawing uniformly random passwords from the enabled
//!   character classes
//!
//! # Features
//!
//! - `async` (default): Enables cancellable evaluation and a debounced,
//!   channel-based evaluator
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Optional extra deny-list file loaded by
//!   [`init_blacklist`] (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{GenerationConfig, StrengthLabel, generate, score};
//! use secrecy::ExposeSecret;
//!
//! let result = score("Tr0ub4dor&3xyz");
//! assert_eq!(result.score.value(), 85);
//! assert_eq!(result.strength(), StrengthLabel::Strong);
//!
//! let config = GenerationConfig::from_flags(16, true, true, true, true);
//! let password = generate(&config).expect("at least one class enabled");
//! println!("{}", score(password.expose_secret()).strength());
//! ```

mod blacklist;
mod charset;
mod evaluator;
mod generator;
mod sections;
mod session;
mod types;

// Public API
pub use blacklist::{
    BUILTIN_COMMON_PASSWORDS, BlacklistError, get_blacklist, init_blacklist,
    init_blacklist_from_path, is_blacklisted,
};
pub use charset::CharacterClass;
pub use evaluator::{EvaluationError, evaluate_password_strength, score};
pub use generator::{GenerationConfig, GenerationError, generate, generate_with_rng};
pub use session::SessionStore;
pub use types::{Feedback, MAX_SCORE, PasswordScore, ScoreResult, StrengthLabel};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
