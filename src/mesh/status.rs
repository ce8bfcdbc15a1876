//! Node and element classification against the zero contour.

use serde::{Deserialize, Serialize};

/// Position of a grid node relative to the zero contour.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum NodeStatus {
    /// Signed distance above `epsilon` (material).
    #[default]
    Inside,
    /// Signed distance below `-epsilon` (void).
    Outside,
    /// Within `epsilon` of zero: the node lies on the boundary.
    Boundary,
}

impl NodeStatus {
    /// Classify a signed-distance value with tolerance `epsilon`.
    #[inline]
    pub fn classify(value: f64, epsilon: f64) -> Self {
        if value.abs() < epsilon {
            NodeStatus::Boundary
        } else if value < 0.0 {
            NodeStatus::Outside
        } else {
            NodeStatus::Inside
        }
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self == NodeStatus::Inside
    }

    #[inline]
    pub fn is_outside(self) -> bool {
        self == NodeStatus::Outside
    }

    #[inline]
    pub fn is_boundary(self) -> bool {
        self == NodeStatus::Boundary
    }

    /// `true` when one status is inside and the other outside, i.e. the
    /// edge joining two such nodes is crossed by the zero contour.
    #[inline]
    pub fn is_cut_with(self, other: NodeStatus) -> bool {
        matches!(
            (self, other),
            (NodeStatus::Inside, NodeStatus::Outside) | (NodeStatus::Outside, NodeStatus::Inside)
        )
    }
}

/// Position of a grid cell relative to the zero contour.
///
/// `CentreInside` and `CentreOutside` refine `Mixed` for saddle cells (all
/// four edges cut) once extraction has decided which diagonal pairing forms
/// the boundary.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ElementStatus {
    /// No corner is outside.
    #[default]
    Inside,
    /// No corner is inside.
    Outside,
    /// Corners on both sides of the contour.
    Mixed,
    /// Saddle cell whose centre lies in material.
    CentreInside,
    /// Saddle cell whose centre lies in void.
    CentreOutside,
}

impl ElementStatus {
    /// Classify a cell from the tally of its inside/outside corners.
    #[inline]
    pub fn from_tally(n_inside: usize, n_outside: usize) -> Self {
        if n_outside == 0 {
            ElementStatus::Inside
        } else if n_inside == 0 {
            ElementStatus::Outside
        } else {
            ElementStatus::Mixed
        }
    }

    /// Saddle refinement from the sum of the four corner values.
    #[inline]
    pub fn from_saddle_sum(lsf_sum: f64) -> Self {
        if lsf_sum > 0.0 {
            ElementStatus::CentreInside
        } else {
            ElementStatus::CentreOutside
        }
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self == ElementStatus::Inside
    }

    #[inline]
    pub fn is_outside(self) -> bool {
        self == ElementStatus::Outside
    }

    /// Crossed by the boundary (mixed or a resolved saddle).
    #[inline]
    pub fn is_cut(self) -> bool {
        matches!(
            self,
            ElementStatus::Mixed | ElementStatus::CentreInside | ElementStatus::CentreOutside
        )
    }

    #[inline]
    pub fn is_centre_inside(self) -> bool {
        self == ElementStatus::CentreInside
    }

    #[inline]
    pub fn is_centre_outside(self) -> bool {
        self == ElementStatus::CentreOutside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_respects_epsilon() {
        assert_eq!(NodeStatus::classify(5e-7, 1e-6), NodeStatus::Boundary);
        assert_eq!(NodeStatus::classify(-5e-7, 1e-6), NodeStatus::Boundary);
        assert_eq!(NodeStatus::classify(2e-6, 1e-6), NodeStatus::Inside);
        assert_eq!(NodeStatus::classify(-2e-6, 1e-6), NodeStatus::Outside);
    }

    #[test]
    fn cut_requires_opposite_sides() {
        use NodeStatus::*;
        assert!(Inside.is_cut_with(Outside));
        assert!(Outside.is_cut_with(Inside));
        assert!(!Inside.is_cut_with(Boundary));
        assert!(!Boundary.is_cut_with(Outside));
        assert!(!Inside.is_cut_with(Inside));
    }

    #[test]
    fn element_tally() {
        assert_eq!(ElementStatus::from_tally(4, 0), ElementStatus::Inside);
        assert_eq!(ElementStatus::from_tally(2, 0), ElementStatus::Inside);
        assert_eq!(ElementStatus::from_tally(0, 3), ElementStatus::Outside);
        assert_eq!(ElementStatus::from_tally(1, 1), ElementStatus::Mixed);
        assert!(ElementStatus::from_saddle_sum(0.0).is_centre_outside());
        assert!(ElementStatus::from_saddle_sum(0.1).is_centre_inside());
    }
}
