//! Stdout reporting for the compliance run.
//!
//! The harness is itself a test tool, so the report goes to stdout in plain
//! text; operational events (charset loaded, profile skipped) go through
//! `tracing` instead.  Writes are blocking and order-preserving.
//!
//! Failure details are capped at `max_reported_failures` printed examples,
//! with the remainder summarised as a suppressed count — a run with
//! thousands of contract violations must still produce a readable report.

use layoutsafe_core::charset::CommonCharset;

use crate::application::run_compliance::{ComplianceReport, Phase2Report, Verdict};
use crate::infrastructure::config::HarnessConfig;

const BANNER_WIDTH: usize = 80;

/// Prints a full-width section banner.
fn banner(title: &str) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(BANNER_WIDTH));
}

/// Prints the charset summary shown at the start of a run.
pub fn print_charset_summary(charset: &CommonCharset) {
    println!("Loaded common character set");
    println!("  Lowercase: {} characters", charset.lowercase().len());
    println!("  Uppercase: {} characters", charset.uppercase().len());
    println!("  Special:   {} characters", charset.special().len());
    println!();
}

/// Prints the complete compliance report.
pub fn print_report(report: &ComplianceReport, config: &HarnessConfig) {
    print_phase1(report);

    match &report.phase2 {
        Some(phase2) => print_phase2(phase2, config),
        None => {
            println!();
            println!("Phase 2 skipped: the self-check failed, so generated-password");
            println!("results would be meaningless until the charset/validator bug is fixed.");
        }
    }

    println!();
    match report.verdict() {
        Verdict::AllPass => println!("All checks passed: every generated password is layout-safe."),
        Verdict::Phase1Bug => {
            println!("SELF-CHECK BUG: incompatible passwords passed validation.")
        }
        Verdict::Phase2FailuresFound => {
            println!("CONTRACT VIOLATION: generated passwords failed validation.")
        }
    }
}

fn print_phase1(report: &ComplianceReport) {
    banner("PHASE 1: NEGATIVE BATTERY (self-check)");
    println!();
    println!("These passwords use incompatible characters and must fail validation:");
    println!();

    for outcome in &report.phase1.outcomes {
        let mark = if outcome.correctly_failed { "ok " } else { "BUG" };
        println!("[{mark}] {}", outcome.case.name);
        println!("      Password: {:?}", outcome.case.password);
        println!("      Expected: FAIL — {}", outcome.case.rationale);
        if outcome.correctly_failed {
            println!("      Result:   correctly failed — {}", outcome.detail);
        } else {
            println!("      Result:   INCORRECTLY PASSED (self-check bug)");
        }
        println!();
    }

    let p1 = &report.phase1;
    println!(
        "Battery: {} cases, {} correctly failed, {} unexpectedly passed",
        p1.total(),
        p1.correctly_failed(),
        p1.unexpectedly_passed()
    );
}

fn print_phase2(phase2: &Phase2Report, config: &HarnessConfig) {
    println!();
    banner("PHASE 2: GENERATED PASSWORDS");
    println!();
    println!(
        "Total passwords tested: {} (lengths {}..={}, seed {})",
        phase2.total, config.min_length, config.max_length, config.seed
    );
    println!("  Passed: {}", phase2.passed);
    println!("  Failed: {}", phase2.failed());

    for skipped in &phase2.skipped_profiles {
        println!("  Skipped profile (empty candidate pool): {skipped}");
    }

    if !phase2.failures.is_empty() {
        println!();
        banner("FAILURE DETAILS");
        let cap = config.max_reported_failures;
        for (i, failure) in phase2.failures.iter().take(cap).enumerate() {
            println!();
            println!("Failure #{}:", i + 1);
            println!("  Profile:  {}", failure.profile);
            println!("  Password: {:?}", failure.password);
            println!("  Detail:   {}", failure.detail);
        }
        if phase2.failures.len() > cap {
            println!();
            println!("... and {} more failures", phase2.failures.len() - cap);
        }
    }
}
