//! Polygon utilities for cut-cell area integration.
//!
//! The vertices collected for a cut cell (material corners plus segment
//! endpoints) arrive unordered. [`angular_cmp`] orders them by angle about
//! the cell centre and [`polygon_area`] integrates the resulting ring with the
//! shoelace formula.
//!
//! # Ordering
//! Vertices left of the centre (`dx < 0`) come first, then vertices with
//! `dx >= 0`. Inside each half the cross product of the centre-relative
//! vectors decides, which gives a counter-clockwise sweep starting just past
//! twelve o'clock. Points on the same ray from the centre are ordered nearest
//! first; the two points straight above and below the centre order
//! bottom-first. The comparator is a total order, so `sort_by` is
//! well-defined even for duplicated vertices.

use std::cmp::Ordering;

use itertools::Itertools;

use super::coord::Coord;

/// Compare two vertices by angular position about `centre`.
pub fn angular_cmp(a: Coord, b: Coord, centre: Coord) -> Ordering {
    let da = a - centre;
    let db = b - centre;

    let half = |dx: f64| u8::from(dx >= 0.0);
    match half(da.x).cmp(&half(db.x)) {
        Ordering::Equal => {}
        other => return other,
    }

    let det = da.cross(db);
    if det > 0.0 {
        return Ordering::Less;
    }
    if det < 0.0 {
        return Ordering::Greater;
    }

    // Opposite rays on the vertical through the centre.
    if da.x == 0.0 && db.x == 0.0 && (da.y < 0.0) != (db.y < 0.0) {
        return da.y.total_cmp(&db.y);
    }

    da.norm_squared().total_cmp(&db.norm_squared())
}

/// Sort `vertices` in place by [`angular_cmp`] about `centre`.
pub fn sort_about(vertices: &mut [Coord], centre: Coord) {
    vertices.sort_by(|a, b| angular_cmp(*a, *b, centre));
}

/// Unsigned shoelace area of an ordered ring of vertices.
pub fn shoelace_area(ring: &[Coord]) -> f64 {
    let twice: f64 = ring
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| a.cross(*b))
        .sum();
    (0.5 * twice).abs()
}

/// Order `vertices` about `centre` and return the enclosed area.
pub fn polygon_area(vertices: &mut [Coord], centre: Coord) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    sort_about(vertices, centre);
    shoelace_area(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Coord = Coord::new(0.5, 0.5);

    #[test]
    fn unit_square_in_any_order() {
        let mut v = vec![
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 0.0),
            Coord::new(0.0, 1.0),
            Coord::new(1.0, 0.0),
        ];
        assert!((polygon_area(&mut v, C) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn corner_triangle() {
        let mut v = vec![
            Coord::new(0.5, 0.0),
            Coord::new(0.0, 0.0),
            Coord::new(0.0, 0.5),
        ];
        assert!((polygon_area(&mut v, C) - 0.125).abs() < 1e-12);
    }

    #[test]
    fn hexagonal_band_through_centre() {
        // Material on corners (0,0) and (1,1), connected through the centre.
        let mut v = vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.5, 0.0),
            Coord::new(1.0, 0.5),
            Coord::new(0.5, 1.0),
            Coord::new(0.0, 0.5),
        ];
        assert!((polygon_area(&mut v, C) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn duplicates_compare_equal() {
        let p = Coord::new(0.25, 0.0);
        assert_eq!(angular_cmp(p, p, C), Ordering::Equal);
    }

    #[test]
    fn left_half_precedes_right_half() {
        assert_eq!(
            angular_cmp(Coord::new(0.0, 0.5), Coord::new(1.0, 0.5), C),
            Ordering::Less
        );
    }

    #[test]
    fn same_ray_orders_nearest_first() {
        let near = Coord::new(0.75, 0.75);
        let far = Coord::new(1.0, 1.0);
        assert_eq!(angular_cmp(near, far, C), Ordering::Less);
        assert_eq!(angular_cmp(far, near, C), Ordering::Greater);
    }

    #[test]
    fn degenerate_rings_have_zero_area() {
        let mut two = vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)];
        assert_eq!(polygon_area(&mut two, C), 0.0);
        assert_eq!(shoelace_area(&[]), 0.0);
    }
}
