//! Tunable options for boundary discretisation and the level-set collaborator.
//!
//! All option structs implement [`Default`] with the values the kernel was
//! calibrated with, and derive serde traits so drivers can load them from
//! JSON (or any serde format) alongside their own configuration.

use serde::{Deserialize, Serialize};

use crate::lsm_error::LsmError;

/// Options controlling a discretisation pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryOptions {
    /// Tolerance for "on the zero contour" and for point deduplication.
    pub epsilon: f64,
    /// Fraction of the node count reserved up front for points and segments.
    pub capacity_fraction: f64,
    /// Lower bound on the reserved point/segment capacity.
    pub min_capacity: usize,
    /// Number of zeroed sensitivity slots given to each new point
    /// (objective plus constraints).
    pub initial_sensitivities: usize,
    /// Distance (in grid units) to the domain edge below which the inward
    /// movement limit is clamped.
    pub domain_margin: f64,
}

impl Default for BoundaryOptions {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            capacity_fraction: 0.2,
            min_capacity: 4,
            initial_sensitivities: 2,
            domain_margin: 0.5,
        }
    }
}

impl BoundaryOptions {
    /// Check that every option is in its admissible range.
    pub fn validate(&self) -> Result<(), LsmError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(LsmError::InvalidOptions(format!(
                "epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        if !(self.capacity_fraction.is_finite() && self.capacity_fraction >= 0.0) {
            return Err(LsmError::InvalidOptions(format!(
                "capacity_fraction must be non-negative, got {}",
                self.capacity_fraction
            )));
        }
        if !(self.domain_margin.is_finite() && self.domain_margin >= 0.0) {
            return Err(LsmError::InvalidOptions(format!(
                "domain_margin must be non-negative, got {}",
                self.domain_margin
            )));
        }
        Ok(())
    }

    /// Number of points/segments to reserve for a grid with `n_nodes` nodes.
    pub fn initial_capacity(&self, n_nodes: usize) -> usize {
        let estimate = (self.capacity_fraction * n_nodes as f64) as usize;
        estimate.max(self.min_capacity)
    }
}

/// Options for the scalar-field collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelSetOptions {
    /// CFL-style bound on boundary movement per iteration (grid units).
    pub move_limit: f64,
    /// Half-width of the narrow band (grid units).
    pub band_width: f64,
}

impl Default for LevelSetOptions {
    fn default() -> Self {
        Self {
            move_limit: 0.5,
            band_width: 6.0,
        }
    }
}

impl LevelSetOptions {
    /// Check that every option is in its admissible range.
    pub fn validate(&self) -> Result<(), LsmError> {
        if !(self.move_limit.is_finite() && self.move_limit > 0.0) {
            return Err(LsmError::InvalidOptions(format!(
                "move_limit must be positive, got {}",
                self.move_limit
            )));
        }
        if !(self.band_width.is_finite() && self.band_width > 0.0) {
            return Err(LsmError::InvalidOptions(format!(
                "band_width must be positive, got {}",
                self.band_width
            )));
        }
        Ok(())
    }
}
