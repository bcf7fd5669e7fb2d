//! Application layer of the compliance harness.
//!
//! One use case: drive the generator and validator through the two-phase
//! compliance run and aggregate the results.

pub mod run_compliance;
