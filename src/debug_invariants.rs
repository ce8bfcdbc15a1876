//! Structural self-checks for the boundary containers.
//!
//! [`Boundary`](crate::boundary::Boundary) implements [`DebugInvariants`] to
//! verify that segment endpoints exist, stored lengths match endpoint
//! distances and point adjacency agrees with segment incidence. Checks run
//! automatically at the end of every discretisation pass in debug builds, or
//! in release builds with the `strict-invariants` or `check-invariants`
//! feature.

use crate::lsm_error::LsmError;

/// Types whose internal consistency can be verified on demand.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation found.
    fn validate_invariants(&self) -> Result<(), LsmError>;

    /// Panic on the first violation when invariant checking is enabled;
    /// a no-op otherwise.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "invariants");
    }
}

/// Run a fallible check and panic with `context` on error, only when
/// invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $($context:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(violation) = $check {
            panic!(concat!("[lsm-boundary] ", $($context)*, ": {}"), violation);
        }
    };
}
