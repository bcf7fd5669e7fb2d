//! The negative battery: passwords that must fail validation.
//!
//! Each case carries a rationale naming the offending character(s) and why
//! the character diverges between QWERTY and AZERTY — either the physical
//! key maps to a different printed character on the other layout, or the
//! character requires a different modifier state (digits are unshifted on
//! QWERTY but shifted on AZERTY).
//!
//! The battery is the harness's self-check.  A case that *passes* validation
//! does not mean the password is safe; it means the common charset or the
//! validator is broken, and no phase-2 result can be trusted.

/// One deliberately layout-unsafe input, defined at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeCase {
    /// Short descriptive name shown in the report.
    pub name: &'static str,
    /// The password under test.
    pub password: &'static str,
    /// Why this password must fail validation.
    pub rationale: &'static str,
}

/// The fixed battery.  Every case must fail validation with at least one
/// reported incompatible position.
pub const NEGATIVE_CASES: &[NegativeCase] = &[
    NegativeCase {
        name: "Password with letter 'a'",
        password: "Password",
        rationale: "the 'a' key produces 'q' on AZERTY (QWERTY scan 30 = VK_A, AZERTY scan 30 = VK_Q)",
    },
    NegativeCase {
        name: "Password with letter 'q'",
        password: "quick",
        rationale: "the 'q' key produces 'a' on AZERTY (QWERTY scan 16 = VK_Q, AZERTY scan 16 = VK_A)",
    },
    NegativeCase {
        name: "Password with letter 'w'",
        password: "window",
        rationale: "the 'w' key produces 'z' on AZERTY (QWERTY scan 17 = VK_W, AZERTY scan 17 = VK_Z)",
    },
    NegativeCase {
        name: "Password with letter 'z'",
        password: "puzzle",
        rationale: "the 'z' key produces 'w' on AZERTY (QWERTY scan 44 = VK_Z, AZERTY scan 44 = VK_W)",
    },
    NegativeCase {
        name: "Password with letter 'm'",
        password: "example",
        rationale: "'a' and 'm' sit on different physical keys on the two layouts",
    },
    NegativeCase {
        name: "Password with digits",
        password: "Test123",
        rationale: "digits 1, 2, 3 are unshifted on QWERTY but require Shift on AZERTY",
    },
    NegativeCase {
        name: "Password with @ symbol",
        password: "user@host",
        rationale: "'@' requires a different modifier state on each layout",
    },
    NegativeCase {
        name: "Password with # symbol",
        password: "Pass#word",
        rationale: "'#' requires a different modifier state on each layout",
    },
    NegativeCase {
        name: "Password with special characters",
        password: "Hello!World",
        rationale: "'!' and several letters sit at incompatible positions",
    },
    NegativeCase {
        name: "All digits",
        password: "0123456789",
        rationale: "every character is a digit; the whole string diverges on AZERTY",
    },
];

// ── Tests ─────────────────────────────────────────────────────────────────────
