//! Boundary point and segment records.

use serde::{Deserialize, Serialize};

use crate::config::BoundaryOptions;
use crate::geometry::Coord;

/// A vertex of the discretised boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPoint {
    /// Position in grid units.
    pub coord: Coord,
    /// Integral length: half the summed length of the incident segments.
    pub length: f64,
    /// Movement limit inwards (non-positive).
    pub negative_limit: f64,
    /// Movement limit outwards (non-negative).
    pub positive_limit: f64,
    /// Whether the point sits exactly on the domain edge.
    pub is_domain: bool,
    /// Objective and constraint sensitivities, filled by the optimiser.
    pub sensitivities: Vec<f64>,
    /// Unit normal along the field gradient (pointing into material).
    /// Zero for domain-pinned points and points no narrow-band node reaches.
    pub normal: Coord,
    /// Indices of incident segments.
    pub segments: Vec<usize>,
    /// Indices of the points sharing a segment with this one.
    pub neighbours: Vec<usize>,
}

impl BoundaryPoint {
    /// Create a point with movement limits seeded from `move_limit`.
    ///
    /// `edge_distance` is the distance from `coord` to the nearest domain
    /// edge. Inside `domain_margin` the inward limit is clamped to that
    /// distance so the point can never be pushed out of the domain; within
    /// `epsilon` the point is flagged as pinned to the domain edge.
    pub fn new(
        coord: Coord,
        move_limit: f64,
        edge_distance: f64,
        options: &BoundaryOptions,
    ) -> Self {
        let mut point = Self {
            coord,
            length: 0.0,
            negative_limit: -move_limit,
            positive_limit: move_limit,
            is_domain: false,
            sensitivities: vec![0.0; options.initial_sensitivities],
            normal: Coord::zero(),
            segments: Vec::with_capacity(2),
            neighbours: Vec::with_capacity(2),
        };

        if edge_distance < options.domain_margin {
            point.negative_limit = -edge_distance;
            if edge_distance < options.epsilon {
                point.is_domain = true;
            }
        }
        point
    }
}

/// A straight piece of boundary inside one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundarySegment {
    /// Index of the start point.
    pub start: usize,
    /// Index of the end point.
    pub end: usize,
    /// Index of the owning element.
    pub element: usize,
    /// Euclidean length.
    pub length: f64,
    /// Weighting factor (1 unless a consumer overrides it).
    pub weight: f64,
}

impl BoundarySegment {
    /// The point at the other end of the segment from `point`, if `point`
    /// is one of its endpoints.
    #[inline]
    pub fn other(&self, point: usize) -> Option<usize> {
        if point == self.start {
            Some(self.end)
        } else if point == self.end {
            Some(self.start)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_point_uses_cfl_limits() {
        let opts = BoundaryOptions::default();
        let p = BoundaryPoint::new(Coord::new(3.5, 4.0), 0.5, 3.5, &opts);
        assert_eq!(p.negative_limit, -0.5);
        assert_eq!(p.positive_limit, 0.5);
        assert!(!p.is_domain);
        assert_eq!(p.sensitivities, vec![0.0, 0.0]);
    }

    #[test]
    fn near_edge_clamps_inward_limit() {
        let opts = BoundaryOptions::default();
        let p = BoundaryPoint::new(Coord::new(0.25, 4.0), 0.5, 0.25, &opts);
        assert_eq!(p.negative_limit, -0.25);
        assert_eq!(p.positive_limit, 0.5);
        assert!(!p.is_domain);
    }

    #[test]
    fn on_edge_is_pinned() {
        let opts = BoundaryOptions::default();
        let p = BoundaryPoint::new(Coord::new(0.0, 4.0), 0.5, 0.0, &opts);
        assert!(p.is_domain);
        assert_eq!(p.negative_limit, 0.0);
    }

    #[test]
    fn other_endpoint() {
        let s = BoundarySegment {
            start: 3,
            end: 7,
            element: 0,
            length: 1.0,
            weight: 1.0,
        };
        assert_eq!(s.other(3), Some(7));
        assert_eq!(s.other(7), Some(3));
        assert_eq!(s.other(5), None);
    }
}
