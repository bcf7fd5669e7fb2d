//! Domain data for the compliance harness.
//!
//! The only domain concept the harness owns is the fixed negative battery:
//! passwords deliberately chosen to be layout-unsafe.  Everything else the
//! harness does is orchestration over the `layoutsafe-core` operations.

/// The fixed battery of known layout-incompatible passwords.
///
/// See [`battery::NEGATIVE_CASES`].
pub mod battery;
