//! LsmError: Unified error type for lsm-boundary public APIs
//!
//! Every fallible operation in the crate (grid construction, field checks,
//! boundary extraction, measurement) reports through this type instead of
//! panicking or silently producing NaN.

use thiserror::Error;

/// Unified error type for lsm-boundary operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LsmError {
    /// Grid construction was given invalid dimensions or coordinates.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    /// A per-node field does not have one value per grid node.
    #[error("Field length mismatch: expected {expected} nodal values, found {found}")]
    FieldLengthMismatch { expected: usize, found: usize },
    /// A per-node field holds NaN or an infinity.
    #[error("Non-finite field value {value} at node {node}")]
    NonFiniteField { node: usize, value: f64 },
    /// Target-field discretisation was requested but no target field is set.
    #[error("No target signed-distance field is attached to the level set")]
    MissingTargetField,
    /// An options struct failed validation.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
    /// A cell produced a cut-edge count with no extraction rule (only 0, 1, 2 and 4 are valid).
    #[error("Element {element} has {n_cut} cut edges; expected 0, 1, 2 or 4")]
    UnexpectedCutCount { element: usize, n_cut: usize },
    /// A mixed cell with no cut edge did not expose two boundary corners.
    #[error("Element {element} is mixed with no cut edges but has {found} boundary corner(s)")]
    MissingBoundaryCorners { element: usize, found: usize },
    /// Linear interpolation along a cut edge produced a non-finite fraction.
    #[error("Degenerate interpolation on edge {edge} of element {element}: φ({n1}) == φ({n2})")]
    DegenerateInterpolation {
        element: usize,
        edge: usize,
        n1: usize,
        n2: usize,
    },
    /// The central-difference gradient vanished at a narrow-band node.
    #[error("Degenerate gradient at node {node}: zero gradient magnitude")]
    DegenerateGradient { node: usize },
    /// The weighted normal at a boundary point cancelled to zero.
    #[error("Degenerate normal at boundary point {point}: contributions cancel")]
    DegenerateNormal { point: usize },
    /// A node needed for central differences has no axis neighbour in the grid.
    #[error("Node {node} has no axis neighbour at ({x}, {y})")]
    MissingAxisNeighbour { node: usize, x: i64, y: i64 },
    /// A boundary point index is out of range.
    #[error("Boundary point {point} out of range (have {len})")]
    PointOutOfRange { point: usize, len: usize },
    /// A structural invariant of the discretised boundary does not hold.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}
