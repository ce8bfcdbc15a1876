use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use static_assertions::assert_impl_all;

use lsm_boundary::DebugInvariants;
use lsm_boundary::prelude::*;

assert_impl_all!(Boundary: Send, Sync, Clone);
assert_impl_all!(Mesh: Send, Sync, Clone);
assert_impl_all!(LevelSet: Send, Sync);

const WIDE_BAND: LevelSetOptions = LevelSetOptions {
    move_limit: 0.5,
    band_width: 1e6,
};

fn run(width: usize, height: usize, values: Vec<f64>) -> (Mesh, LevelSet, Boundary) {
    let mut mesh = Mesh::new(width, height).unwrap();
    let ls = LevelSet::new(&mut mesh, values, WIDE_BAND).unwrap();
    let mut boundary = Boundary::new();
    boundary
        .discretise(&mut mesh, &ls, FieldSource::SignedDistance)
        .unwrap();
    boundary.compute_area_fractions(&mut mesh);
    (mesh, ls, boundary)
}

/// No node on, or numerically next to, the zero contour.
fn no_node_on_contour(values: &[f64]) -> bool {
    values.iter().all(|v| v.abs() > 1e-3)
}

/// Sum of random Gaussian bumps, shifted so roughly half the grid is void.
fn bump_field(mesh: &Mesh, seed: u64) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let bumps: Vec<(Coord, f64, f64)> = (0..6)
        .map(|_| {
            let c = Coord::new(
                rng.gen_range(0.0..mesh.width as f64),
                rng.gen_range(0.0..mesh.height as f64),
            );
            (c, rng.gen_range(0.5..2.0), rng.gen_range(1.5..4.0))
        })
        .collect();
    mesh.sample(|p| {
        bumps
            .iter()
            .map(|&(c, h, s)| h * (-p.distance_squared(c) / (s * s)).exp())
            .sum::<f64>()
            - 0.6
    })
}

#[test]
fn random_bump_fields_are_consistent() {
    for seed in 0..32u64 {
        let mut mesh = Mesh::new(14, 11).unwrap();
        let values = bump_field(&mesh, seed);
        if !no_node_on_contour(&values) {
            continue;
        }

        let ls = LevelSet::new(&mut mesh, values, WIDE_BAND).unwrap();
        let mut boundary = Boundary::new();
        boundary
            .discretise(&mut mesh, &ls, FieldSource::SignedDistance)
            .unwrap();
        boundary.compute_area_fractions(&mut mesh);
        boundary.validate_invariants().unwrap();
        boundary.validate_mesh(&mesh).unwrap();

        // Away from contour nodes every point joins exactly two segments,
        // except where the contour leaves the domain.
        for point in &boundary.points {
            if !point.is_domain {
                assert_eq!(point.segments.len(), 2, "seed {seed}");
            }
        }

        let loops = boundary.compute_holes();
        assert!(loops <= boundary.n_points());
    }
}

proptest! {
    #[test]
    fn linear_fields_satisfy_invariants(
        a in -4.0f64..10.0,
        b in -2.0f64..2.0,
        c in -2.0f64..2.0,
    ) {
        let mesh = Mesh::new(6, 5).unwrap();
        let values = mesh.sample(|p| a + b * p.x + c * p.y);
        prop_assume!(no_node_on_contour(&values));

        let (mesh, _, boundary) = run(6, 5, values);
        prop_assert!(boundary.validate_invariants().is_ok());
        prop_assert!(boundary.validate_mesh(&mesh).is_ok());
        for element in &mesh.elements {
            prop_assert!((0.0..=1.0).contains(&element.area));
        }
        // A straight interface is at most one open polyline.
        prop_assert!(boundary.graph().connected_components() <= 1);
    }

    #[test]
    fn complementary_fields_partition_each_cell(seed in 0u64..1_000) {
        let mesh = Mesh::new(9, 7).unwrap();
        let values = bump_field(&mesh, seed);
        prop_assume!(no_node_on_contour(&values));
        let negated: Vec<f64> = values.iter().map(|v| -v).collect();

        let (material, _, _) = run(9, 7, values);
        let (void, _, _) = run(9, 7, negated);
        for (m, v) in material.elements.iter().zip(&void.elements) {
            prop_assert!((m.area + v.area - 1.0).abs() < 1e-9,
                "element at {:?}: {} + {}", m.coord, m.area, v.area);
        }
    }

    #[test]
    fn boundary_length_is_invariant_under_negation(seed in 0u64..1_000) {
        let mesh = Mesh::new(8, 8).unwrap();
        let values = bump_field(&mesh, seed);
        prop_assume!(no_node_on_contour(&values));
        let negated: Vec<f64> = values.iter().map(|v| -v).collect();

        let (_, _, material) = run(8, 8, values);
        let (_, _, void) = run(8, 8, negated);
        prop_assert_eq!(material.n_points(), void.n_points());
        prop_assert!((material.length - void.length).abs() < 1e-9);
    }
}
