//! Boundary extraction: turn a classified grid into points and segments.
//!
//! Each element that is not fully outside has its four edges walked in the
//! order bottom, right, top, left. A cut edge (one corner inside, the other
//! outside) yields an interpolated point at the linear zero crossing; an edge
//! whose two corners both lie on the contour yields a segment directly. The
//! cell's segments are then resolved from the number of cut edges:
//!
//! | cut edges | segments                                                        |
//! |-----------|-----------------------------------------------------------------|
//! | 2         | the two crossings                                               |
//! | 1         | the crossing and a boundary corner with an outside neighbour     |
//! | 4         | two, paired by the sign of the corner sum (saddle)              |
//! | 0         | the two boundary corners on the diagonal (mixed cells only)     |
//!
//! Points are shared between cells: before creating one, the points already
//! attached to the edge's first node are searched for a coordinate match
//! within `epsilon`.

use crate::geometry::Coord;
use crate::lsm_error::LsmError;
use crate::mesh::{ElementStatus, Mesh};

use super::Boundary;
use super::point::{BoundaryPoint, BoundarySegment};

/// Mutable state for one extraction walk.
struct Extractor<'a> {
    boundary: &'a mut Boundary,
    mesh: &'a mut Mesh,
    field: &'a [f64],
    ignore_band: bool,
    move_limit: f64,
}

/// Populate `boundary.points`/`boundary.segments` from a classified `mesh`.
///
/// `ignore_band` disables narrow-band gating of edges (target-field mode).
pub(super) fn extract(
    boundary: &mut Boundary,
    mesh: &mut Mesh,
    field: &[f64],
    ignore_band: bool,
    move_limit: f64,
) -> Result<(), LsmError> {
    let mut walker = Extractor {
        boundary,
        mesh,
        field,
        ignore_band,
        move_limit,
    };
    for element in 0..walker.mesh.elements.len() {
        walker.process_element(element)?;
    }
    Ok(())
}

impl Extractor<'_> {
    fn process_element(&mut self, element: usize) -> Result<(), LsmError> {
        if self.mesh.elements[element].status.is_outside() {
            return Ok(());
        }
        let nodes = self.mesh.elements[element].nodes;

        let mut cut_points = [0usize; 4];
        let mut n_cut = 0;
        let mut gated = false;

        for edge in 0..4 {
            let n1 = nodes[edge];
            let n2 = nodes[(edge + 1) % 4];

            if !self.ignore_band && !(self.mesh.nodes[n1].is_active && self.mesh.nodes[n2].is_active)
            {
                gated = true;
                continue;
            }

            let s1 = self.mesh.nodes[n1].status;
            let s2 = self.mesh.nodes[n2].status;

            if s1.is_cut_with(s2) {
                let (phi1, phi2) = (self.field[n1], self.field[n2]);
                let d = phi1 / (phi1 - phi2);
                if !d.is_finite() {
                    return Err(LsmError::DegenerateInterpolation {
                        element,
                        edge,
                        n1,
                        n2,
                    });
                }
                let coord = self.mesh.nodes[n1].coord.lerp(self.mesh.nodes[n2].coord, d);
                let index = match self.find_point(n1, coord) {
                    Some(index) => index,
                    None => {
                        let index = self.create_point(coord);
                        self.mesh.nodes[n1].boundary_points.push(index);
                        self.mesh.nodes[n2].boundary_points.push(index);
                        index
                    }
                };
                cut_points[n_cut] = index;
                n_cut += 1;
            } else if s1.is_boundary() && s2.is_boundary() {
                let start = self.node_point(n1);
                let end = self.node_point(n2);
                self.push_segment(element, start, end);
            }
        }

        match n_cut {
            2 => self.push_segment(element, cut_points[0], cut_points[1]),
            1 => self.connect_to_boundary_corner(element, nodes, cut_points[0]),
            4 => self.resolve_saddle(element, nodes, cut_points),
            0 if self.mesh.elements[element].status.is_inside() => {}
            0 if gated => {
                log::trace!("mixed element {element} lies outside the narrow band");
            }
            0 => self.connect_diagonal(element, nodes)?,
            _ => return Err(LsmError::UnexpectedCutCount { element, n_cut }),
        }
        Ok(())
    }

    /// One crossing: the boundary leaves the cell through a corner that lies
    /// on the contour next to an outside corner.
    fn connect_to_boundary_corner(&mut self, element: usize, nodes: [usize; 4], cut: usize) {
        for j in 0..4 {
            let node = nodes[j];
            if !self.mesh.nodes[node].status.is_boundary() {
                continue;
            }
            let after = self.mesh.nodes[nodes[(j + 1) % 4]].status;
            let before = self.mesh.nodes[nodes[(j + 3) % 4]].status;
            if after.is_outside() || before.is_outside() {
                let end = self.node_point(node);
                self.push_segment(element, cut, end);
            }
        }
    }

    /// Four crossings: pair them by the sign of the corner sum and record
    /// whether the cell centre is in material.
    fn resolve_saddle(&mut self, element: usize, nodes: [usize; 4], cut: [usize; 4]) {
        let lsf_sum: f64 = nodes.iter().map(|&n| self.field[n]).sum();
        let first = self.mesh.nodes[nodes[0]].status;

        let pair_adjacent =
            (first.is_inside() && lsf_sum > 0.0) || (first.is_outside() && lsf_sum < 0.0);
        if pair_adjacent {
            self.push_segment(element, cut[0], cut[1]);
            self.push_segment(element, cut[2], cut[3]);
        } else {
            self.push_segment(element, cut[0], cut[3]);
            self.push_segment(element, cut[1], cut[2]);
        }

        let status = ElementStatus::from_saddle_sum(lsf_sum);
        log::trace!("saddle element {element}: corner sum {lsf_sum:e} -> {status:?}");
        self.mesh.elements[element].status = status;
    }

    /// No crossings in a mixed cell: the contour runs along the diagonal
    /// through two boundary corners.
    fn connect_diagonal(&mut self, element: usize, nodes: [usize; 4]) -> Result<(), LsmError> {
        let corners: Vec<usize> = nodes
            .iter()
            .copied()
            .filter(|&n| self.mesh.nodes[n].status.is_boundary())
            .collect();
        if corners.len() < 2 {
            return Err(LsmError::MissingBoundaryCorners {
                element,
                found: corners.len(),
            });
        }
        let start = self.node_point(corners[0]);
        let end = self.node_point(corners[1]);
        self.push_segment(element, start, end);
        Ok(())
    }

    /// Existing point attached to `node` at `coord`, if any.
    fn find_point(&self, node: usize, coord: Coord) -> Option<usize> {
        let eps = self.boundary.options().epsilon;
        self.mesh.nodes[node]
            .boundary_points
            .iter()
            .copied()
            .find(|&p| self.boundary.points[p].coord.approx_eq(coord, eps))
    }

    /// Point located exactly on `node`, created on first use.
    fn node_point(&mut self, node: usize) -> usize {
        let coord = self.mesh.nodes[node].coord;
        if let Some(index) = self.find_point(node, coord) {
            return index;
        }
        let index = self.create_point(coord);
        self.mesh.nodes[node].boundary_points.push(index);
        index
    }

    fn create_point(&mut self, coord: Coord) -> usize {
        let edge_distance = self.mesh.distance_to_domain_edge(coord);
        let point = BoundaryPoint::new(
            coord,
            self.move_limit,
            edge_distance,
            self.boundary.options(),
        );
        self.boundary.points.push(point);
        self.boundary.points.len() - 1
    }

    fn push_segment(&mut self, element: usize, start: usize, end: usize) {
        let length = self.boundary.points[start]
            .coord
            .distance(self.boundary.points[end].coord);
        let index = self.boundary.segments.len();
        self.boundary.segments.push(BoundarySegment {
            start,
            end,
            element,
            length,
            weight: 1.0,
        });
        self.boundary.length += length;
        self.mesh.elements[element].boundary_segments.push(index);
    }
}
