//! Safe password generation: draw only from the common character set.
//!
//! The generator takes the RNG as an explicit parameter rather than reaching
//! for a global source.  A compliance run seeds a single `StdRng` and threads
//! it through every call, so an entire run is exactly reproducible from its
//! seed.

use rand::Rng;
use thiserror::Error;

use crate::charset::CommonCharset;

/// Error type for generation requests that cannot be satisfied.
///
/// Fatal to the single generation call only; the caller may recover by
/// skipping the offending configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The requested length is zero.
    #[error("requested password length must be greater than zero")]
    ZeroLength,

    /// No characters are available to draw from: either no alphabet was
    /// selected, or every selected alphabet is empty.
    #[error("candidate pool is empty: no alphabet selected or selected alphabets are empty")]
    EmptyPool,
}

/// What to draw from, and how much.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of characters to produce.  Must be greater than zero.
    pub length: usize,
    /// Include the lowercase alphabet in the candidate pool.
    pub include_lowercase: bool,
    /// Include the uppercase alphabet in the candidate pool.
    pub include_uppercase: bool,
    /// Include the special-character alphabet in the candidate pool.
    pub include_special: bool,
}

/// Generates a password of exactly `config.length` characters, each drawn
/// independently and uniformly from the selected alphabets.
///
/// The candidate pool is the selected alphabets concatenated in a fixed
/// order (lowercase, uppercase, special), so output is reproducible for a
/// given RNG state.  Sampling is with replacement; repeats are expected.
///
/// Every output character is by construction a member of
/// `charset.all_characters()`, so the result always passes
/// [`crate::password::validate::validate`].
///
/// # Errors
///
/// Returns [`ConfigurationError::ZeroLength`] when `config.length == 0` and
/// [`ConfigurationError::EmptyPool`] when the selected alphabets contribute
/// no characters.
pub fn generate<R: Rng + ?Sized>(
    charset: &CommonCharset,
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<String, ConfigurationError> {
    if config.length == 0 {
        return Err(ConfigurationError::ZeroLength);
    }

    let mut pool: Vec<char> = Vec::new();
    if config.include_lowercase {
        pool.extend_from_slice(charset.lowercase().as_slice());
    }
    if config.include_uppercase {
        pool.extend_from_slice(charset.uppercase().as_slice());
    }
    if config.include_special {
        pool.extend_from_slice(charset.special().as_slice());
    }

    if pool.is_empty() {
        return Err(ConfigurationError::EmptyPool);
    }

    let password = (0..config.length)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect();
    Ok(password)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::store::load_builtin;
    use crate::charset::{Alphabet, CommonCharset};
    use crate::password::validate::validate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn builtin() -> CommonCharset {
        load_builtin().expect("bundled charset must load")
    }

    fn config(length: usize, lower: bool, upper: bool, special: bool) -> GenerationConfig {
        GenerationConfig {
            length,
            include_lowercase: lower,
            include_uppercase: upper,
            include_special: special,
        }
    }

    #[test]
    fn test_generate_produces_exact_requested_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let password = generate(&builtin(), &config(16, true, true, true), &mut rng).unwrap();
        assert_eq!(password.chars().count(), 16);
    }

    #[test]
    fn test_generate_fails_with_zero_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate(&builtin(), &config(0, true, false, false), &mut rng);
        assert_eq!(result, Err(ConfigurationError::ZeroLength));
    }

    #[test]
    fn test_generate_fails_when_no_alphabet_selected() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate(&builtin(), &config(10, false, false, false), &mut rng);
        assert_eq!(result, Err(ConfigurationError::EmptyPool));
    }

    #[test]
    fn test_generate_fails_when_selected_alphabets_are_empty() {
        let charset = CommonCharset::new(
            Alphabet::new("bc".chars()),
            Alphabet::new("".chars()),
            Alphabet::new("".chars()),
        );
        let mut rng = StdRng::seed_from_u64(1);
        // Uppercase is selected but empty.
        let result = generate(&charset, &config(10, false, true, false), &mut rng);
        assert_eq!(result, Err(ConfigurationError::EmptyPool));
    }

    #[test]
    fn test_generate_lowercase_only_draws_only_lowercase() {
        let charset = builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let password = generate(&charset, &config(64, true, false, false), &mut rng).unwrap();
        for ch in password.chars() {
            assert!(
                charset.lowercase().as_slice().contains(&ch),
                "{ch:?} is not in the lowercase alphabet"
            );
        }
    }

    #[test]
    fn test_generate_output_always_passes_validation() {
        // Generator/validator agreement across configurations and seeds.
        let charset = builtin();
        let configs = [
            config(10, true, false, false),
            config(10, false, true, false),
            config(10, false, false, true),
            config(32, true, true, true),
        ];
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for cfg in &configs {
                let password = generate(&charset, cfg, &mut rng).unwrap();
                let result = validate(&password, &charset);
                assert!(
                    result.passed(),
                    "seed {seed}: generated password {password:?} failed: {}",
                    result.detail()
                );
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic_for_identical_seed() {
        let charset = builtin();
        let cfg = config(10, true, false, false);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let first = generate(&charset, &cfg, &mut rng_a).unwrap();
        let second = generate(&charset, &cfg, &mut rng_b).unwrap();

        assert_eq!(first, second, "same seed must produce the same password");
    }

    #[test]
    fn test_generate_differs_across_seeds() {
        // Not a strict guarantee, but with a 21-character pool and length 32
        // a collision between two seeds would be astronomically unlikely and
        // would indicate the RNG is not actually being consumed.
        let charset = builtin();
        let cfg = config(32, true, false, false);
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);
        let a = generate(&charset, &cfg, &mut rng_a).unwrap();
        let b = generate(&charset, &cfg, &mut rng_b).unwrap();
        assert_ne!(a, b);
    }
}
