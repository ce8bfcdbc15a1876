//! Connectivity of the discretised boundary.
//!
//! Boundary points form an undirected graph whose edges are the segments.
//! The graph is stored CSR-style: `xadj[i] .. xadj[i+1]` indexes the sorted,
//! deduplicated, self-free neighbour list of point `i` in `adjncy`.
//!
//! Each connected component of a well-formed boundary is one closed loop, so
//! the component count is the number of holes.

use super::Boundary;
use super::point::BoundaryPoint;

/// CSR adjacency graph over boundary points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryGraph {
    /// CSR offsets into `adjncy` for each point.
    pub xadj: Vec<usize>,
    /// Concatenated neighbour lists.
    pub adjncy: Vec<usize>,
}

impl BoundaryGraph {
    /// Build the graph from the neighbour lists of `points`.
    pub fn from_points(points: &[BoundaryPoint]) -> Self {
        let mut xadj = Vec::with_capacity(points.len() + 1);
        let mut adjncy = Vec::with_capacity(2 * points.len());
        xadj.push(0);
        for (i, point) in points.iter().enumerate() {
            let mut list = point.neighbours.clone();
            list.sort_unstable();
            list.dedup();
            list.retain(|&n| n != i);
            adjncy.extend(list);
            xadj.push(adjncy.len());
        }
        Self { xadj, adjncy }
    }

    /// Number of vertices (boundary points).
    #[inline]
    pub fn n_vertices(&self) -> usize {
        self.xadj.len().saturating_sub(1)
    }

    /// Return the neighbor index slice for vertex `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjncy[self.xadj[i]..self.xadj[i + 1]]
    }

    /// Component label for every vertex, numbered in order of discovery.
    ///
    /// Depth-first with an explicit stack, so arbitrarily long loops do not
    /// grow the call stack.
    pub fn component_labels(&self) -> Vec<usize> {
        let n = self.n_vertices();
        let mut label = vec![usize::MAX; n];
        let mut stack = Vec::new();
        let mut next = 0;

        for root in 0..n {
            if label[root] != usize::MAX {
                continue;
            }
            label[root] = next;
            stack.push(root);
            while let Some(v) = stack.pop() {
                for &w in self.neighbors(v) {
                    if label[w] == usize::MAX {
                        label[w] = next;
                        stack.push(w);
                    }
                }
            }
            next += 1;
        }
        label
    }

    /// Number of connected components.
    pub fn connected_components(&self) -> usize {
        self.component_labels()
            .into_iter()
            .max()
            .map_or(0, |m| m + 1)
    }
}

impl Boundary {
    /// Adjacency graph of the current boundary points.
    pub fn graph(&self) -> BoundaryGraph {
        BoundaryGraph::from_points(&self.points)
    }

    /// Count the closed loops of the boundary and store it in `n_holes`.
    pub fn compute_holes(&mut self) -> usize {
        self.n_holes = self.graph().connected_components();
        log::debug!("boundary has {} closed loop(s)", self.n_holes);
        self.n_holes
    }
}
