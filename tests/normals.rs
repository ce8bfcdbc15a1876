use lsm_boundary::prelude::*;

fn discretised(
    width: usize,
    height: usize,
    f: impl Fn(Coord) -> f64,
) -> (Mesh, LevelSet, Boundary) {
    let mut mesh = Mesh::new(width, height).unwrap();
    let ls = LevelSet::from_fn(&mut mesh, f, LevelSetOptions::default()).unwrap();
    let mut boundary = Boundary::new();
    boundary
        .discretise(&mut mesh, &ls, FieldSource::SignedDistance)
        .unwrap();
    (mesh, ls, boundary)
}

#[test]
fn disk_normals_point_towards_centre() {
    let centre = Coord::new(10.0, 10.0);
    let (mesh, ls, mut boundary) = discretised(20, 20, |c| 5.3 - c.distance(centre));
    boundary.compute_normal_vectors(&mesh, &ls).unwrap();

    for point in &boundary.points {
        assert!((point.normal.norm() - 1.0).abs() < 1e-9);
        let inward = centre - point.coord;
        let cos = (point.normal.x * inward.x + point.normal.y * inward.y) / inward.norm();
        assert!(cos > 0.95, "normal {:?} at {:?}", point.normal, point.coord);
    }
}

#[test]
fn void_disk_normals_point_away_from_centre() {
    let centre = Coord::new(8.0, 8.0);
    let (mesh, ls, mut boundary) = discretised(16, 16, |c| c.distance(centre) - 3.6);
    boundary.compute_normal_vectors(&mesh, &ls).unwrap();
    for point in &boundary.points {
        let outward = point.coord - centre;
        assert!(point.normal.x * outward.x + point.normal.y * outward.y > 0.0);
    }
}

#[test]
fn domain_points_get_zero_normal() {
    let (mesh, ls, mut boundary) = discretised(3, 3, |c| 1.5 - c.x);
    boundary.compute_normal_vectors(&mesh, &ls).unwrap();

    let pinned: Vec<_> = boundary.points.iter().filter(|p| p.is_domain).collect();
    assert_eq!(pinned.len(), 2);
    assert!(pinned.iter().all(|p| p.normal == Coord::zero()));

    for point in boundary.points.iter().filter(|p| !p.is_domain) {
        assert!((point.normal.x + 1.0).abs() < 1e-12);
        assert!(point.normal.y.abs() < 1e-12);
    }
}

#[test]
fn point_on_node_takes_node_normal() {
    // The contour runs through the node column x = 2.
    let (mesh, ls, mut boundary) = discretised(4, 4, |c| 2.0 - c.x + 0.25 * (c.y - 2.0));
    boundary.compute_normal_vectors(&mesh, &ls).unwrap();

    let node = mesh.xy_to_index(2, 2).unwrap();
    assert!(mesh.nodes[node].status.is_boundary());
    let p = mesh.nodes[node].boundary_points[0];
    let expected = Coord::new(-1.0, 0.25) * (1.0 / Coord::new(-1.0, 0.25).norm());
    assert!(boundary.points[p].normal.approx_eq(expected, 1e-12));
}

#[test]
fn normals_are_reset_between_calls() {
    let (mesh, ls, mut boundary) = discretised(3, 3, |c| 1.5 - c.x);
    for point in &mut boundary.points {
        point.normal = Coord::new(3.0, 4.0);
    }
    boundary.compute_normal_vectors(&mesh, &ls).unwrap();
    for point in boundary.points.iter().filter(|p| p.is_domain) {
        assert_eq!(point.normal, Coord::zero());
    }
}

#[test]
fn field_length_is_checked() {
    let (_, ls, mut boundary) = discretised(3, 3, |c| 1.5 - c.x);
    let other = Mesh::new(2, 2).unwrap();
    assert!(matches!(
        boundary.compute_normal_vectors(&other, &ls),
        Err(LsmError::FieldLengthMismatch { .. })
    ));
}
