//! TOML-based run configuration for the compliance harness.
//!
//! Every field carries a serde default, so running without a config file (or
//! with a file that only overrides one value) yields a fully working run.
//! Example:
//!
//! ```toml
//! seed = 42
//! min_length = 8
//! max_length = 32
//! max_reported_failures = 10
//!
//! [[profiles]]
//! name = "Lowercase only"
//! lowercase = true
//! uppercase = false
//! special = false
//! count = 25
//! ```
//!
//! The default profile set ports the original three configurations:
//! lowercase-only ×25, uppercase-only ×25, mixed-case ×50.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.  An explicitly supplied config path
    /// must exist; a missing file is an error, not a fallback to defaults.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The length range is inverted.
    #[error("min_length {min} exceeds max_length {max}")]
    InvalidLengthRange { min: usize, max: usize },
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level harness run configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarnessConfig {
    /// Seed for the phase-2 pseudo-random source.  Identical seed, config,
    /// and charset produce an identical run.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Minimum generated password length (inclusive).
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Maximum generated password length (inclusive).
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Cap on printed failure examples; the remainder is reported as a count.
    #[serde(default = "default_max_reported_failures")]
    pub max_reported_failures: usize,
    /// Optional path to a charset JSON document.  Absent → bundled
    /// QWERTY/AZERTY set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset_path: Option<PathBuf>,
    /// Named generation profiles exercised in phase 2.
    #[serde(default = "default_profiles")]
    pub profiles: Vec<GenerationProfile>,
}

/// One named phase-2 generation profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationProfile {
    /// Display name shown in the report.
    pub name: String,
    /// Draw from the lowercase alphabet.
    pub lowercase: bool,
    /// Draw from the uppercase alphabet.
    pub uppercase: bool,
    /// Draw from the special-character alphabet.
    pub special: bool,
    /// Number of passwords to generate and validate for this profile.
    pub count: usize,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_seed() -> u64 {
    42
}
fn default_min_length() -> usize {
    8
}
fn default_max_length() -> usize {
    32
}
fn default_max_reported_failures() -> usize {
    10
}
fn default_profiles() -> Vec<GenerationProfile> {
    vec![
        GenerationProfile {
            name: "Lowercase only".to_string(),
            lowercase: true,
            uppercase: false,
            special: false,
            count: 25,
        },
        GenerationProfile {
            name: "Uppercase only".to_string(),
            lowercase: false,
            uppercase: true,
            special: false,
            count: 25,
        },
        GenerationProfile {
            name: "Mixed case (lowercase + uppercase)".to_string(),
            lowercase: true,
            uppercase: true,
            special: false,
            count: 50,
        },
    ]
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            min_length: default_min_length(),
            max_length: default_max_length(),
            max_reported_failures: default_max_reported_failures(),
            charset_path: None,
            profiles: default_profiles(),
        }
    }
}

// ── Load operation ────────────────────────────────────────────────────────────

/// Loads the run configuration.
///
/// `None` yields [`HarnessConfig::default()`].  An explicit path is read and
/// parsed; the length range is checked after parsing.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read,
/// [`ConfigError::Parse`] for malformed TOML, and
/// [`ConfigError::InvalidLengthRange`] when `min_length > max_length`.
pub fn load_config(path: Option<&Path>) -> Result<HarnessConfig, ConfigError> {
    let config = match path {
        None => HarnessConfig::default(),
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            toml::from_str(&content)?
        }
    };

    if config.min_length > config.max_length {
        return Err(ConfigError::InvalidLengthRange {
            min: config.min_length,
            max: config.max_length,
        });
    }
    Ok(config)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_expected_seed_and_lengths() {
        let cfg = HarnessConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.min_length, 8);
        assert_eq!(cfg.max_length, 32);
        assert_eq!(cfg.max_reported_failures, 10);
        assert!(cfg.charset_path.is_none());
    }

    #[test]
    fn test_default_config_ports_the_three_original_profiles() {
        let cfg = HarnessConfig::default();
        assert_eq!(cfg.profiles.len(), 3);
        assert_eq!(cfg.profiles[0].name, "Lowercase only");
        assert_eq!(cfg.profiles[0].count, 25);
        assert_eq!(cfg.profiles[2].count, 50);
        assert!(cfg.profiles[2].lowercase && cfg.profiles[2].uppercase);
        assert!(!cfg.profiles.iter().any(|p| p.special));
    }

    #[test]
    fn test_load_config_without_path_returns_defaults() {
        let cfg = load_config(None).expect("defaults must be valid");
        assert_eq!(cfg, HarnessConfig::default());
    }

    #[test]
    fn test_load_config_fails_for_missing_explicit_path() {
        let result = load_config(Some(Path::new("/nonexistent/harness.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let cfg: HarnessConfig = toml::from_str("").expect("empty TOML must deserialize");
        assert_eq!(cfg, HarnessConfig::default());
    }

    #[test]
    fn test_deserialize_partial_toml_overrides_seed_only() {
        let cfg: HarnessConfig = toml::from_str("seed = 7").expect("partial TOML");
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.min_length, 8);
        assert_eq!(cfg.profiles.len(), 3);
    }

    #[test]
    fn test_deserialize_custom_profile_list_replaces_defaults() {
        let toml_str = r#"
[[profiles]]
name = "Everything"
lowercase = true
uppercase = true
special = true
count = 5
"#;
        let cfg: HarnessConfig = toml::from_str(toml_str).expect("profile TOML");
        assert_eq!(cfg.profiles.len(), 1);
        assert_eq!(cfg.profiles[0].name, "Everything");
        assert!(cfg.profiles[0].special);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut cfg = HarnessConfig::default();
        cfg.seed = 99;
        cfg.charset_path = Some(PathBuf::from("layouts.json"));

        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: HarnessConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_inverted_length_range_is_rejected() {
        let dir = std::env::temp_dir().join(format!("layoutsafe_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "min_length = 20\nmax_length = 10\n").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidLengthRange { min: 20, max: 10 })
        ));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_deserialize_invalid_toml_returns_parse_error() {
        let result: Result<HarnessConfig, toml::de::Error> = toml::from_str("[[[ not toml");
        assert!(result.is_err());
    }
}
