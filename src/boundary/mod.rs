//! The discretised boundary of a level-set field.
//!
//! [`Boundary`] owns the points and segments produced by one discretisation
//! pass. A pass runs in fixed order:
//!
//! 1. [`status::compute_mesh_status`] classifies nodes and elements;
//! 2. extraction walks every non-outside element and emits points/segments,
//!    writing node→point and element→segment back-references into the mesh;
//! 3. point integral lengths and adjacency are accumulated from segments.
//!
//! Measurement ([`Boundary::compute_area_fractions`],
//! [`Boundary::compute_normal_vectors`]) and topology
//! ([`Boundary::compute_holes`]) are separate calls made after a pass.
//!
//! Every pass rebuilds the containers from scratch; nothing leaks from one
//! pass to the next. If a pass returns an error the contents of the boundary
//! are unspecified until the next successful pass.

mod extract;
pub mod measure;
pub mod point;
pub mod status;
pub mod topology;

pub use point::{BoundaryPoint, BoundarySegment};
pub use topology::BoundaryGraph;

use crate::config::BoundaryOptions;
use crate::debug_invariants::DebugInvariants;
use crate::level_set::{FieldSource, LevelSet};
use crate::lsm_error::LsmError;
use crate::mesh::Mesh;

const LENGTH_TOL: f64 = 1e-9;

/// Discretised boundary: points, segments and aggregate measures.
#[derive(Clone, Debug, Default)]
pub struct Boundary {
    /// Boundary points.
    pub points: Vec<BoundaryPoint>,
    /// Boundary segments.
    pub segments: Vec<BoundarySegment>,
    /// Total boundary length.
    pub length: f64,
    /// Total material area (sum of element fractions, in cell units).
    pub area: f64,
    /// Number of closed loops from the last [`Boundary::compute_holes`] call.
    pub n_holes: usize,
    options: BoundaryOptions,
}

impl Boundary {
    /// Empty boundary with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty boundary with validated `options`.
    pub fn with_options(options: BoundaryOptions) -> Result<Self, LsmError> {
        options.validate()?;
        Ok(Self {
            options,
            ..Self::default()
        })
    }

    #[inline]
    pub fn options(&self) -> &BoundaryOptions {
        &self.options
    }

    #[inline]
    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn n_segments(&self) -> usize {
        self.segments.len()
    }

    /// Rebuild the boundary from the field selected by `source`.
    ///
    /// Overwrites node/element status and back-references in `mesh`.
    pub fn discretise(
        &mut self,
        mesh: &mut Mesh,
        level_set: &LevelSet,
        source: FieldSource,
    ) -> Result<(), LsmError> {
        let field = level_set.field(source)?;
        mesh.check_field(field)?;

        status::compute_mesh_status(mesh, field, self.options.epsilon);

        let capacity = self.options.initial_capacity(mesh.n_nodes());
        self.points = Vec::with_capacity(capacity);
        self.segments = Vec::with_capacity(capacity);
        self.length = 0.0;
        self.area = 0.0;
        self.n_holes = 0;

        extract::extract(
            self,
            mesh,
            field,
            source == FieldSource::Target,
            level_set.move_limit,
        )?;

        if self.points.len() > capacity || self.segments.len() > capacity {
            log::debug!(
                "boundary outgrew its estimate: {} points, {} segments (reserved {capacity})",
                self.points.len(),
                self.segments.len()
            );
        }
        self.points.shrink_to_fit();
        self.segments.shrink_to_fit();

        self.compute_point_lengths();

        log::debug!(
            "discretised boundary: {} points, {} segments, length {:.6}",
            self.points.len(),
            self.segments.len(),
            self.length
        );
        crate::debug_invariants!(self.validate_invariants(), "Boundary::discretise");
        Ok(())
    }

    /// Check the back-references and per-element measures written into
    /// `mesh` by the last pass against this boundary.
    pub fn validate_mesh(&self, mesh: &Mesh) -> Result<(), LsmError> {
        let eps = self.options().epsilon;
        let mut total_area = 0.0;
        for (e, element) in mesh.elements.iter().enumerate() {
            if !(-eps..=1.0 + eps).contains(&element.area) {
                return Err(LsmError::InvariantViolation(format!(
                    "element {e} area {} outside [0, 1]",
                    element.area
                )));
            }
            total_area += element.area;
            for &s in &element.boundary_segments {
                let segment = self.segments.get(s).ok_or_else(|| {
                    LsmError::InvariantViolation(format!("element {e} references missing segment {s}"))
                })?;
                if segment.element != e {
                    return Err(LsmError::InvariantViolation(format!(
                        "segment {s} owned by element {} but listed on element {e}",
                        segment.element
                    )));
                }
            }
        }
        if (total_area - self.area).abs() > LENGTH_TOL * total_area.max(1.0) {
            return Err(LsmError::InvariantViolation(format!(
                "total area {} differs from element sum {total_area}",
                self.area
            )));
        }

        for (s, segment) in self.segments.iter().enumerate() {
            let element = mesh.elements.get(segment.element).ok_or_else(|| {
                LsmError::InvariantViolation(format!("segment {s} owned by missing element"))
            })?;
            if !element.boundary_segments.contains(&s) {
                return Err(LsmError::InvariantViolation(format!(
                    "segment {s} missing from element {} back-references",
                    segment.element
                )));
            }
            let lo = mesh.nodes[element.nodes[0]].coord;
            let hi = mesh.nodes[element.nodes[2]].coord;
            for p in [segment.start, segment.end] {
                let c = self.points[p].coord;
                if c.x < lo.x - eps || c.x > hi.x + eps || c.y < lo.y - eps || c.y > hi.y + eps {
                    return Err(LsmError::InvariantViolation(format!(
                        "point {p} of segment {s} lies outside element {}",
                        segment.element
                    )));
                }
            }
        }

        for (n, node) in mesh.nodes.iter().enumerate() {
            for &p in &node.boundary_points {
                if p >= self.points.len() {
                    return Err(LsmError::InvariantViolation(format!(
                        "node {n} references missing point {p}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl DebugInvariants for Boundary {
    fn validate_invariants(&self) -> Result<(), LsmError> {
        let n_points = self.points.len();
        let mut total = 0.0;
        for (s, segment) in self.segments.iter().enumerate() {
            if segment.start >= n_points || segment.end >= n_points {
                return Err(LsmError::InvariantViolation(format!(
                    "segment {s} references a missing point"
                )));
            }
            if segment.start == segment.end {
                return Err(LsmError::InvariantViolation(format!(
                    "segment {s} starts and ends at point {}",
                    segment.start
                )));
            }
            let expected = self.points[segment.start]
                .coord
                .distance(self.points[segment.end].coord);
            if (expected - segment.length).abs() > LENGTH_TOL {
                return Err(LsmError::InvariantViolation(format!(
                    "segment {s} length {} != endpoint distance {expected}",
                    segment.length
                )));
            }
            total += segment.length;
        }
        if (total - self.length).abs() > LENGTH_TOL * total.max(1.0) {
            return Err(LsmError::InvariantViolation(format!(
                "total length {} != segment sum {total}",
                self.length
            )));
        }

        for (p, point) in self.points.iter().enumerate() {
            let half_sum: f64 = point
                .segments
                .iter()
                .map(|&s| 0.5 * self.segments[s].length)
                .sum();
            if (half_sum - point.length).abs() > LENGTH_TOL {
                return Err(LsmError::InvariantViolation(format!(
                    "point {p} integral length {} != half incident sum {half_sum}",
                    point.length
                )));
            }
            if point.neighbours.len() != point.segments.len() {
                return Err(LsmError::InvariantViolation(format!(
                    "point {p} has {} neighbours but {} segments",
                    point.neighbours.len(),
                    point.segments.len()
                )));
            }
            for (&s, &n) in point.segments.iter().zip(&point.neighbours) {
                if self.segments[s].other(p) != Some(n) {
                    return Err(LsmError::InvariantViolation(format!(
                        "point {p} lists neighbour {n} across segment {s}"
                    )));
                }
            }
        }
        Ok(())
    }
}
