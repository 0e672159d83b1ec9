//! Per-session slot holding the most recently generated password.
//!
//! Lets a presentation layer offer "use generated password" without keeping
//! global mutable state. Memory only; nothing outlives the process.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};

/// Single-slot cache keyed by session identity.
#[derive(Debug, Default)]
pub struct SessionStore {
    slots: RwLock<HashMap<String, SecretString>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `password` for `session`, replacing any previous one.
    pub fn store(&self, session: &str, password: SecretString) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.insert(session.to_string(), password);
    }

    /// Returns a copy of the last password generated for `session`.
    pub fn last_generated(&self, session: &str) -> Option<SecretString> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots
            .get(session)
            .map(|pwd| SecretString::new(pwd.expose_secret().into()))
    }

    /// Removes and returns the slot for `session`.
    pub fn take(&self, session: &str) -> Option<SecretString> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.remove(session)
    }

    /// Ends a session, dropping its slot.
    pub fn clear(&self, session: &str) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.remove(session);
    }

    pub fn len(&self) -> usize {
        self.slots.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
