//! Measurements derived from the discretised boundary.
//!
//! - integral length and adjacency of each point (run by every pass);
//! - material area fraction of each element;
//! - unit normal of each point, interpolated from nodal gradients;
//! - perimeter of a point (distance to its neighbours).

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::geometry::Coord;
use crate::geometry::polygon::polygon_area;
use crate::level_set::LevelSet;
use crate::lsm_error::LsmError;
use crate::mesh::{Element, Mesh, NodeStatus};

use super::Boundary;

impl Boundary {
    /// Accumulate half of each segment's length onto its endpoints and record
    /// point→segment and point→point adjacency.
    pub(super) fn compute_point_lengths(&mut self) {
        for (i, segment) in self.segments.iter().enumerate() {
            let half = 0.5 * segment.length;

            let start = &mut self.points[segment.start];
            start.length += half;
            start.segments.push(i);
            start.neighbours.push(segment.end);

            let end = &mut self.points[segment.end];
            end.length += half;
            end.segments.push(i);
            end.neighbours.push(segment.start);
        }
    }

    /// Compute the material area fraction of every element, store it on the
    /// element and return the total.
    ///
    /// Inside elements contribute `1`, outside elements `0`; cut elements
    /// are integrated polygonally by [`Boundary::cut_area`].
    pub fn compute_area_fractions(&mut self, mesh: &mut Mesh) -> f64 {
        let areas = self.element_areas(mesh);
        for (element, area) in mesh.elements.iter_mut().zip(areas) {
            element.area = area;
        }
        self.area = mesh.elements.iter().map(|e| e.area).sum();
        self.area
    }

    #[cfg(not(feature = "rayon"))]
    fn element_areas(&self, mesh: &Mesh) -> Vec<f64> {
        mesh.elements
            .iter()
            .map(|e| self.element_area(mesh, e))
            .collect()
    }

    #[cfg(feature = "rayon")]
    fn element_areas(&self, mesh: &Mesh) -> Vec<f64> {
        mesh.elements
            .par_iter()
            .map(|e| self.element_area(mesh, e))
            .collect()
    }

    fn element_area(&self, mesh: &Mesh, element: &Element) -> f64 {
        if element.status.is_inside() {
            1.0
        } else if element.status.is_outside() {
            0.0
        } else {
            self.cut_area(mesh, element)
        }
    }

    /// Material area of an element crossed by the boundary.
    ///
    /// The polygon is made of the corners on the material side (the void
    /// side for `CentreOutside` saddles), any contour corner whose two
    /// neighbours are both on that side, and the endpoints of every segment
    /// owned by the element. For `CentreOutside` the polygon is the void lobe
    /// and `1 - area` is returned.
    pub fn cut_area(&self, mesh: &Mesh, element: &Element) -> f64 {
        let centre_outside = element.status.is_centre_outside();
        let target = if centre_outside {
            NodeStatus::Outside
        } else {
            NodeStatus::Inside
        };

        let mut vertices: Vec<Coord> =
            Vec::with_capacity(4 + 2 * element.boundary_segments.len());
        for (j, &node) in element.nodes.iter().enumerate() {
            let status = mesh.nodes[node].status;
            if status == target {
                vertices.push(mesh.nodes[node].coord);
            } else if status.is_boundary() {
                let after = mesh.nodes[element.nodes[(j + 1) % 4]].status;
                let before = mesh.nodes[element.nodes[(j + 3) % 4]].status;
                if after == target && before == target {
                    vertices.push(mesh.nodes[node].coord);
                }
            }
        }
        for &s in &element.boundary_segments {
            let segment = &self.segments[s];
            vertices.push(self.points[segment.start].coord);
            vertices.push(self.points[segment.end].coord);
        }

        let area = polygon_area(&mut vertices, element.coord);
        if centre_outside { 1.0 - area } else { area }
    }

    /// Interpolate a unit normal at every boundary point.
    ///
    /// For each narrow-band node that carries boundary points and is not on
    /// the domain edge, the gradient of the signed distance is estimated by
    /// central differences and normalised. A point lying on such a node takes
    /// that node's normal outright; other points average the normals of their
    /// nodes weighted by inverse squared distance. Domain-pinned points, and
    /// points no node contributes to, end up with the zero vector.
    pub fn compute_normal_vectors(
        &mut self,
        mesh: &Mesh,
        level_set: &LevelSet,
    ) -> Result<(), LsmError> {
        let phi = &level_set.signed_distance;
        mesh.check_field(phi)?;
        let eps = self.options().epsilon;

        let n_points = self.points.len();
        let mut is_set = vec![false; n_points];
        let mut weight = vec![0.0; n_points];
        for point in &mut self.points {
            point.normal = Coord::zero();
        }

        for &node in &level_set.narrow_band {
            let nd = &mesh.nodes[node];
            if nd.boundary_points.is_empty() || nd.is_domain {
                continue;
            }

            let normal = nodal_normal(mesh, phi, node)?;

            for &p in &nd.boundary_points {
                let point = &mut self.points[p];
                let r_sqd = nd.coord.distance_squared(point.coord);
                if r_sqd < eps {
                    point.normal = normal;
                    weight[p] = 1.0;
                    is_set[p] = true;
                } else if !is_set[p] {
                    point.normal += normal * (1.0 / r_sqd);
                    weight[p] += 1.0 / r_sqd;
                }
            }
        }

        for (p, point) in self.points.iter_mut().enumerate() {
            if point.is_domain {
                point.normal = Coord::zero();
                continue;
            }
            if weight[p] == 0.0 {
                log::warn!("boundary point {p} at {:?} has no normal contribution", point.coord);
                continue;
            }
            let averaged = point.normal * (1.0 / weight[p]);
            let norm = averaged.norm();
            if norm < f64::EPSILON {
                return Err(LsmError::DegenerateNormal { point: p });
            }
            point.normal = averaged * (1.0 / norm);
        }
        Ok(())
    }

    /// Sum of the distances from `point` to each of its neighbours.
    pub fn perimeter(&self, point: usize) -> Result<f64, LsmError> {
        let p = self.points.get(point).ok_or(LsmError::PointOutOfRange {
            point,
            len: self.points.len(),
        })?;
        Ok(p
            .segments
            .iter()
            .filter_map(|&s| self.segments[s].other(point))
            .map(|n| p.coord.distance(self.points[n].coord))
            .sum())
    }
}

/// Unit gradient of `phi` at `node` by central differences.
fn nodal_normal(mesh: &Mesh, phi: &[f64], node: usize) -> Result<Coord, LsmError> {
    let coord = mesh.nodes[node].coord;
    let (x, y) = (coord.x.round() as i64, coord.y.round() as i64);
    let at = |dx: i64, dy: i64| {
        mesh.xy_to_index(x + dx, y + dy)
            .map(|i| phi[i])
            .ok_or(LsmError::MissingAxisNeighbour {
                node,
                x: x + dx,
                y: y + dy,
            })
    };

    let grad = Coord::new(0.5 * (at(1, 0)? - at(-1, 0)?), 0.5 * (at(0, 1)? - at(0, -1)?));
    let magnitude = grad.norm();
    if magnitude < f64::EPSILON {
        return Err(LsmError::DegenerateGradient { node });
    }
    Ok(grad * (1.0 / magnitude))
}
