//! Random password generation from configurable character classes.
//!
//! Characters are drawn independently and uniformly, with replacement, from
//! the union of the enabled classes. Nothing forces every enabled class to
//! appear in the output: a short password may, by chance, omit one.

use std::collections::BTreeSet;

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::CharacterClass;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Please select at least one character type")]
    NoCharacterClassSelected,
}

/// Length and enabled character classes for one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: BTreeSet<CharacterClass>,
}

impl GenerationConfig {
    /// A config with no classes enabled.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: BTreeSet::new(),
        }
    }

    pub fn all_classes(length: usize) -> Self {
        Self {
            length,
            classes: CharacterClass::ALL.into_iter().collect(),
        }
    }

    /// Builds a config from the four include toggles a form would expose.
    pub fn from_flags(
        length: usize,
        uppercase: bool,
        lowercase: bool,
        digits: bool,
        special: bool,
    ) -> Self {
        let flags = [
            (CharacterClass::Uppercase, uppercase),
            (CharacterClass::Lowercase, lowercase),
            (CharacterClass::Digit, digits),
            (CharacterClass::Special, special),
        ];
        Self {
            length,
            classes: flags
                .into_iter()
                .filter_map(|(class, enabled)| enabled.then_some(class))
                .collect(),
        }
    }

    pub fn with_class(mut self, class: CharacterClass) -> Self {
        self.classes.insert(class);
        self
    }

    /// Union of the enabled classes: lowercase, uppercase, digits, then special.
    pub fn alphabet(&self) -> Vec<char> {
        self.classes
            .iter()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }
}

/// Generates a password using the thread-local generator.
///
/// `rand::thread_rng` is a cryptographically secure, automatically reseeded
/// generator, but this function makes no stronger promise than "random enough
/// for a user picking a password". Issuers of real credentials should supply
/// their own vetted source through [`generate_with_rng`].
///
/// # Errors
/// [`GenerationError::NoCharacterClassSelected`] if `config.classes` is empty,
/// whatever the requested length.
pub fn generate(config: &GenerationConfig) -> Result<SecretString, GenerationError> {
    generate_with_rng(config, &mut rand::thread_rng())
}

/// Generates a password drawing from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<SecretString, GenerationError> {
    let alphabet = config.alphabet();
    if alphabet.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("password generation rejected: no character class selected");
        return Err(GenerationError::NoCharacterClassSelected);
    }

    let password: String = (0..config.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "generated password: length={} alphabet_size={}",
        config.length,
        alphabet.len()
    );

    Ok(SecretString::new(password.into_boxed_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    #[test]
    fn test_no_class_selected_for_any_length() {
        for length in [0, 1, 8, 32, 1000] {
            assert_eq!(
                generate(&GenerationConfig::new(length)).map(|_| ()),
                Err(GenerationError::NoCharacterClassSelected)
            );
        }
        let config = GenerationConfig::from_flags(16, false, false, false, false);
        assert!(matches!(
            generate(&config),
            Err(GenerationError::NoCharacterClassSelected)
        ));
    }

    #[test]
    fn test_generate_all_classes_sixteen_chars() {
        let config = GenerationConfig::from_flags(16, true, true, true, true);
        assert_eq!(config, GenerationConfig::all_classes(16));

        let alphabet = config.alphabet();
        assert_eq!(alphabet.len(), 94);

        let password = generate(&config).expect("classes enabled");
        let password = password.expose_secret();
        assert_eq!(password.chars().count(), 16);
        assert!(password.chars().all(|c| alphabet.contains(&c)));
    }

    #[test]
    fn test_generate_respects_selected_classes() {
        let mut rng = StdRng::seed_from_u64(7);
        let cases = [
            GenerationConfig::new(40).with_class(CharacterClass::Digit),
            GenerationConfig::new(40).with_class(CharacterClass::Special),
            GenerationConfig::from_flags(40, true, false, true, false),
            GenerationConfig::from_flags(40, false, true, false, false),
        ];
        for config in cases {
            let password = generate_with_rng(&config, &mut rng).unwrap();
            let password = password.expose_secret();
            assert_eq!(password.len(), 40);
            assert!(
                password
                    .chars()
                    .all(|c| config.classes.iter().any(|class| class.contains(c))),
                "{password} escapes {:?}",
                config.classes
            );
        }
    }

    #[test]
    fn test_generate_various_lengths() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in [1, 8, 12, 32, 257] {
            let config = GenerationConfig::all_classes(length);
            let password = generate_with_rng(&config, &mut rng).unwrap();
            assert_eq!(password.expose_secret().chars().count(), length);
        }
    }

    #[test]
    fn test_zero_length_with_classes_is_empty() {
        let password = generate(&GenerationConfig::all_classes(0)).unwrap();
        assert_eq!(password.expose_secret(), "");
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let config = GenerationConfig::all_classes(24);
        let a = generate_with_rng(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_with_rng(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn test_alphabet_order() {
        let config = GenerationConfig::from_flags(8, true, true, false, false);
        let alphabet: String = config.alphabet().into_iter().collect();
        assert_eq!(
            alphabet,
            "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"
        );
    }

    #[test]
    fn test_distribution_is_roughly_uniform() {
        let config = GenerationConfig::all_classes(16);
        let alphabet = config.alphabet();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<char, usize> = HashMap::new();

        for _ in 0..1000 {
            let password = generate_with_rng(&config, &mut rng).unwrap();
            for c in password.expose_secret().chars() {
                *counts.entry(c).or_default() += 1;
            }
        }

        // 16_000 draws over 94 symbols: about 170 each.
        let expected = 16_000 / alphabet.len();
        for c in &alphabet {
            let seen = counts.get(c).copied().unwrap_or(0);
            assert!(
                seen > expected / 2 && seen < expected * 2,
                "{c:?} seen {seen} times, expected about {expected}"
            );
        }
        assert_eq!(counts.len(), alphabet.len());
    }
}
