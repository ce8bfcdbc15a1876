//! Node and element classification against a nodal scalar field.
//!
//! Classification is a pure function of the field: every call overwrites
//! the status of every node and element and clears the boundary
//! back-references, so nothing from a previous pass survives.

use crate::mesh::{ElementStatus, Mesh, NodeStatus};

/// Classify every node and element of `mesh` against `field`.
///
/// Nodes with `|φ| < epsilon` are [`NodeStatus::Boundary`]. An element is
/// inside when none of its corners is outside, outside when none is inside,
/// and mixed otherwise.
pub fn compute_mesh_status(mesh: &mut Mesh, field: &[f64], epsilon: f64) {
    for (node, &phi) in mesh.nodes.iter_mut().zip(field) {
        node.boundary_points.clear();
        node.status = NodeStatus::classify(phi, epsilon);
    }

    let nodes = &mesh.nodes;
    for element in mesh.elements.iter_mut() {
        element.boundary_segments.clear();
        let mut n_inside = 0;
        let mut n_outside = 0;
        for &n in &element.nodes {
            match nodes[n].status {
                NodeStatus::Inside => n_inside += 1,
                NodeStatus::Outside => n_outside += 1,
                NodeStatus::Boundary => {}
            }
        }
        element.status = ElementStatus::from_tally(n_inside, n_outside);
    }
}
