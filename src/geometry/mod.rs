//! Geometry utilities for lsm-boundary.
//!
//! This module provides the planar [`Coord`] type and the polygon helpers
//! used to integrate material area in cut cells.

pub mod coord;
pub mod polygon;

pub use coord::Coord;
