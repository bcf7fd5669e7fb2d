//! Infrastructure for the compliance harness: configuration and reporting.
//!
//! These are the only parts of the harness that touch the outside world —
//! a blocking read of the TOML run configuration at startup and blocking,
//! order-preserving writes of the final report.  The phases themselves are
//! pure in-memory computation.

pub mod config;
pub mod report;
