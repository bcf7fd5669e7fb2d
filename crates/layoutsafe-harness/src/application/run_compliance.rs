//! RunComplianceUseCase: the two-phase compliance run.
//!
//! The run is two sequential phases with a hard gate between them:
//!
//! - **Phase 1 (self-check)** validates the fixed negative battery.  Every
//!   case must fail validation.  A case that passes indicates the common
//!   charset or the validator itself is broken, so the run stops there —
//!   a phase-2 result produced on top of a broken self-check would be
//!   meaningless.
//!
//! - **Phase 2 (generative check)** generates passwords from a seeded RNG
//!   for each configured profile and validates each one.  Generation draws
//!   only from the common set, so any failure here is a contract violation
//!   between generator and validator, not an expected outcome.
//!
//! The whole run is synchronous, single-threaded, and — given a seed —
//! exactly reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use layoutsafe_core::charset::CommonCharset;
use layoutsafe_core::password::generate::{generate, GenerationConfig};
use layoutsafe_core::password::validate::validate;

use crate::domain::battery::{NegativeCase, NEGATIVE_CASES};
use crate::infrastructure::config::{GenerationProfile, HarnessConfig};

/// Terminal state of a compliance run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every negative case correctly failed and every generated password
    /// correctly passed.
    AllPass,
    /// At least one negative case unexpectedly passed validation.  The
    /// charset/validator contract itself is suspect; phase 2 did not run.
    Phase1Bug,
    /// At least one generated password failed validation — a bug in the
    /// generator/validator contract.
    Phase2FailuresFound,
}

/// Outcome of one negative battery case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryOutcome {
    /// The battery case that was exercised.
    pub case: NegativeCase,
    /// `true` when the case failed validation, as every case must.
    pub correctly_failed: bool,
    /// Incompatible-character detail for the report (empty when the case
    /// unexpectedly passed).
    pub detail: String,
}

/// Aggregated phase-1 results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase1Report {
    pub outcomes: Vec<BatteryOutcome>,
}

impl Phase1Report {
    /// Total number of battery cases exercised.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of cases that correctly failed validation.
    pub fn correctly_failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.correctly_failed).count()
    }

    /// Number of cases that unexpectedly passed validation.
    pub fn unexpectedly_passed(&self) -> usize {
        self.total() - self.correctly_failed()
    }

    /// `true` when the self-check is clean.
    pub fn passed(&self) -> bool {
        self.unexpectedly_passed() == 0
    }
}

/// One phase-2 contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase2Failure {
    /// Profile the password was generated under.
    pub profile: String,
    /// The generated password that failed validation.
    pub password: String,
    /// Incompatible-character detail.
    pub detail: String,
}

/// Aggregated phase-2 results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase2Report {
    /// Passwords generated and validated.
    pub total: usize,
    /// Passwords that validated cleanly.
    pub passed: usize,
    /// Every contract violation, in generation order.
    pub failures: Vec<Phase2Failure>,
    /// Profiles skipped because their candidate pool was empty.
    pub skipped_profiles: Vec<String>,
}

impl Phase2Report {
    /// Passwords that failed validation.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Full result of a compliance run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceReport {
    pub phase1: Phase1Report,
    /// `None` when phase 1 found a bug and gated phase 2 off.
    pub phase2: Option<Phase2Report>,
}

impl ComplianceReport {
    /// Maps the aggregated results to the terminal state.
    pub fn verdict(&self) -> Verdict {
        if !self.phase1.passed() {
            return Verdict::Phase1Bug;
        }
        match &self.phase2 {
            Some(p2) if p2.failures.is_empty() => Verdict::AllPass,
            Some(_) => Verdict::Phase2FailuresFound,
            // Phase 1 passed but phase 2 produced nothing (e.g. no profiles
            // configured): nothing failed, so the run is clean.
            None => Verdict::AllPass,
        }
    }
}

/// Runs the full two-phase compliance check against `charset`.
pub fn run(charset: &CommonCharset, config: &HarnessConfig) -> ComplianceReport {
    let phase1 = run_phase1(charset);
    if !phase1.passed() {
        warn!(
            unexpectedly_passed = phase1.unexpectedly_passed(),
            "phase 1 self-check failed; skipping phase 2"
        );
        return ComplianceReport {
            phase1,
            phase2: None,
        };
    }

    let phase2 = run_phase2(charset, config);
    ComplianceReport {
        phase1,
        phase2: Some(phase2),
    }
}

/// Phase 1: validate every negative battery case.
fn run_phase1(charset: &CommonCharset) -> Phase1Report {
    let outcomes = NEGATIVE_CASES
        .iter()
        .map(|case| {
            let result = validate(case.password, charset);
            BatteryOutcome {
                case: *case,
                correctly_failed: !result.passed(),
                detail: result.detail(),
            }
        })
        .collect();
    Phase1Report { outcomes }
}

/// Phase 2: generate and validate passwords for every profile.
///
/// A single `StdRng` is seeded from the config and threaded through every
/// generation call, so the run is reproducible from the seed alone.  Length
/// draws and character draws both consume the same RNG, in profile order.
fn run_phase2(charset: &CommonCharset, config: &HarnessConfig) -> Phase2Report {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut report = Phase2Report {
        total: 0,
        passed: 0,
        failures: Vec::new(),
        skipped_profiles: Vec::new(),
    };

    for profile in &config.profiles {
        info!(profile = %profile.name, count = profile.count, "running generation profile");
        for _ in 0..profile.count {
            let length = rng.random_range(config.min_length..=config.max_length);
            let gen_config = generation_config(profile, length);

            let password = match generate(charset, &gen_config, &mut rng) {
                Ok(password) => password,
                Err(e) => {
                    // Recoverable: an empty pool dooms every draw for this
                    // profile, so skip the rest of it.
                    warn!(profile = %profile.name, error = %e, "skipping profile");
                    report.skipped_profiles.push(profile.name.clone());
                    break;
                }
            };

            report.total += 1;
            let result = validate(&password, charset);
            if result.passed() {
                report.passed += 1;
            } else {
                report.failures.push(Phase2Failure {
                    profile: profile.name.clone(),
                    password,
                    detail: result.detail(),
                });
            }
        }
    }

    report
}

fn generation_config(profile: &GenerationProfile, length: usize) -> GenerationConfig {
    GenerationConfig {
        length,
        include_lowercase: profile.lowercase,
        include_uppercase: profile.uppercase,
        include_special: profile.special,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
