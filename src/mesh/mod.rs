//! Structured quadrilateral grid with per-node and per-cell boundary state.
//!
//! The grid has unit spacing: node `(i, j)` sits at `(i, j)` for
//! `0 <= i <= width`, `0 <= j <= height`, numbered row by row. Cell corners
//! follow the counter-clockwise ordering
//!
//! ```text
//!  v3 ---- v2
//!   |      |
//!  v0 ---- v1
//! ```
//!
//! so the edge walk `0 → 1 → 2 → 3 → 0` visits the bottom, right, top and
//! left edges in turn.
//!
//! Besides geometry, nodes and elements carry the mutable state written by a
//! discretisation pass: classification status, back-references to incident
//! boundary points/segments, and per-element material area.

pub mod status;

pub use status::{ElementStatus, NodeStatus};

use crate::geometry::Coord;
use crate::lsm_error::LsmError;

/// A grid node.
#[derive(Clone, Debug, Default)]
pub struct Node {
    /// Position in grid units.
    pub coord: Coord,
    /// Classification from the last discretisation pass.
    pub status: NodeStatus,
    /// Whether the node belongs to the active narrow band.
    pub is_active: bool,
    /// Whether the node lies on the edge of the simulation domain.
    pub is_domain: bool,
    /// Indices of boundary points attached to this node.
    pub boundary_points: Vec<usize>,
}

/// A quadrilateral grid cell.
#[derive(Clone, Debug, Default)]
pub struct Element {
    /// Corner node indices, counter-clockwise from the lower-left corner.
    pub nodes: [usize; 4],
    /// Cell centre.
    pub coord: Coord,
    /// Classification from the last discretisation pass.
    pub status: ElementStatus,
    /// Material area fraction in `[0, 1]`.
    pub area: f64,
    /// Indices of boundary segments owned by this cell.
    pub boundary_segments: Vec<usize>,
}

/// A structured, unit-spaced quadrilateral grid.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Number of cells in x.
    pub width: usize,
    /// Number of cells in y.
    pub height: usize,
    pub nodes: Vec<Node>,
    pub elements: Vec<Element>,
}

fn invalid_geometry(message: impl Into<String>) -> LsmError {
    LsmError::InvalidGeometry(message.into())
}

impl Mesh {
    /// Generate a `width`×`height` cell grid over `[0, width] × [0, height]`.
    pub fn new(width: usize, height: usize) -> Result<Self, LsmError> {
        if width == 0 || height == 0 {
            return Err(invalid_geometry("width and height must be positive"));
        }

        let row_stride = width + 1;
        let mut nodes = Vec::with_capacity(row_stride * (height + 1));
        for j in 0..=height {
            for i in 0..=width {
                nodes.push(Node {
                    coord: Coord::new(i as f64, j as f64),
                    is_domain: i == 0 || i == width || j == 0 || j == height,
                    ..Node::default()
                });
            }
        }

        let mut elements = Vec::with_capacity(width * height);
        for j in 0..height {
            for i in 0..width {
                let v0 = j * row_stride + i;
                let v1 = v0 + 1;
                let v3 = v0 + row_stride;
                let v2 = v3 + 1;
                elements.push(Element {
                    nodes: [v0, v1, v2, v3],
                    coord: Coord::new(i as f64 + 0.5, j as f64 + 0.5),
                    ..Element::default()
                });
            }
        }

        Ok(Self {
            width,
            height,
            nodes,
            elements,
        })
    }

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn n_elements(&self) -> usize {
        self.elements.len()
    }

    /// Node index at integer grid position `(x, y)`, if inside the grid.
    #[inline]
    pub fn xy_to_index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x > self.width as i64 || y > self.height as i64 {
            return None;
        }
        Some(y as usize * (self.width + 1) + x as usize)
    }

    /// Distance from `coord` to the nearest edge of the domain.
    #[inline]
    pub fn distance_to_domain_edge(&self, coord: Coord) -> f64 {
        let min_x = coord.x.min(self.width as f64 - coord.x);
        let min_y = coord.y.min(self.height as f64 - coord.y);
        min_x.min(min_y)
    }

    /// Check that `field` holds exactly one finite value per node.
    pub fn check_field(&self, field: &[f64]) -> Result<(), LsmError> {
        if field.len() != self.nodes.len() {
            return Err(LsmError::FieldLengthMismatch {
                expected: self.nodes.len(),
                found: field.len(),
            });
        }
        if let Some((node, &value)) = field.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(LsmError::NonFiniteField { node, value });
        }
        Ok(())
    }

    /// Evaluate `f` at every node position.
    pub fn sample<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(Coord) -> f64,
    {
        self.nodes.iter().map(|n| f(n.coord)).collect()
    }
}
