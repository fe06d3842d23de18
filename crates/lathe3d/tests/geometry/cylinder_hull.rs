use lathe::math::{Real, Vector};
use lathe::profile::{Constant, Linear};
use lathe::shape::{ConvexHull, RevolutionMesh};
use lathe::transformation::check_convex_hull;
use lathe::transformation::revolution::{generate, GenerationParameters};
use lathe::utils::cw_unit_face_normal;

/// Asserts that no vertex of `mesh` lies in front of a triangle of `hull`.
fn assert_hull_encloses_mesh(mesh: &RevolutionMesh, hull: &ConvexHull, name: &str) {
    let tolerance = hull.local_aabb().diagonal() * 1.0e-4;
    let planes: Vec<_> = hull
        .indices()
        .iter()
        .filter_map(|idx| {
            let [a, b, c] = idx.map(|i| hull.points()[i as usize]);
            cw_unit_face_normal(&a, &b, &c).map(|normal| (a, normal))
        })
        .collect();

    for pt in mesh.points() {
        for (origin, normal) in &planes {
            let distance = normal.dot(&(pt - origin));
            assert!(
                distance <= tolerance,
                "{}: {:?} is {} in front of the hull",
                name,
                pt,
                distance
            );
        }
    }
}

#[test]
fn cylinder_hull_is_made_of_its_end_rings() {
    let params = GenerationParameters::new(Constant(1.0))
        .with_rings(9)
        .with_segments(9);
    let (mesh, hull) = generate(&params).unwrap();

    assert_eq!(hull.dimension(), 3);
    assert_eq!(hull.points().len(), 18);
    assert!(hull.points().iter().all(|pt| relative_eq!(pt.y.abs(), 1.0)));

    let end_rings: Vec<_> = mesh
        .ring(0)
        .unwrap()
        .chain(mesh.ring(8).unwrap())
        .map(|i| mesh.points()[i])
        .collect();

    for pt in hull.points() {
        assert!(end_rings.contains(pt));
    }

    // 9 quads on the side, and two fans of 7 triangles.
    assert_eq!(hull.indices().len(), 2 * 9 + 2 * 7);
    assert_eq!(check_convex_hull(hull.points(), hull.indices()), Ok(()));
}

#[test]
fn hull_contains_the_whole_mesh() {
    let params = GenerationParameters::new(|t: Real| 0.2 + t * (1.0 - t))
        .with_rings(10)
        .with_segments(13);
    let (mesh, hull) = generate(&params).unwrap();

    assert!(hull.points().len() <= mesh.points().len());
    assert_eq!(check_convex_hull(hull.points(), hull.indices()), Ok(()));

    for pt in mesh.points() {
        assert!(hull.contains_point(pt), "{:?} is outside of the hull", pt);
    }

    // The convex hull cannot be smaller than the capped mesh it encloses.
    let mesh_volume: Real = mesh
        .indices()
        .iter()
        .map(|idx| {
            let [a, b, c] = idx.map(|i| mesh.points()[i as usize].coords);
            a.dot(&c.cross(&b)) / 6.0
        })
        .sum();
    assert!(mesh_volume > 0.0);
    assert!(hull.volume() >= mesh_volume * (1.0 - 1.0e-4));
}

#[test]
fn hulls_enclose_their_mesh_for_every_resolution_and_scale() {
    let profiles: [(&str, fn(Real) -> Real); 4] = [
        ("constant", |_| 1.0),
        ("sine", |t| (t * core::f64::consts::PI as Real).sin()),
        ("frustum", |t| 0.5 + 0.5 * t),
        ("hourglass", |t| 1.0 - 0.5 * (t * core::f64::consts::PI as Real).sin()),
    ];
    let resolutions = [
        (3, 3),
        (5, 16),
        (9, 9),
        (17, 8),
        (9, 32),
        (3, 64),
        (33, 50),
        (64, 100),
    ];
    let scales = [
        Vector::new(1.0, 1.0, 1.0),
        Vector::new(3.0, 0.1, 0.5),
        Vector::new(0.5, 2.0, 4.0),
    ];

    for (name, profile) in profiles {
        for (rings, segments) in resolutions {
            for scale in scales {
                let params = GenerationParameters::new(profile)
                    .with_rings(rings)
                    .with_segments(segments)
                    .with_axis_scale(scale);
                let (mesh, hull) = generate(&params).unwrap();
                let name = format!("{} {}x{} {:?}", name, rings, segments, scale);

                assert_eq!(hull.dimension(), 3, "{}", name);
                assert_eq!(
                    check_convex_hull(hull.points(), hull.indices()),
                    Ok(()),
                    "{}",
                    name
                );
                assert_hull_encloses_mesh(&mesh, &hull, &name);
            }
        }
    }
}

#[test]
fn frustum_hull_is_made_of_its_end_rings() {
    for (rings, segments) in [(17, 8), (9, 32), (3, 64)] {
        let params = GenerationParameters::new(Linear {
            start: 0.5,
            end: 1.0,
        })
        .with_rings(rings)
        .with_segments(segments);
        let (mesh, hull) = generate(&params).unwrap();
        let segments = segments as usize;

        assert_eq!(hull.points().len(), 2 * segments);
        assert_eq!(hull.indices().len(), 2 * segments + 2 * (segments - 2));
        assert!(hull.points().iter().all(|pt| relative_eq!(pt.y.abs(), 1.0)));
        assert_hull_encloses_mesh(&mesh, &hull, "frustum");
    }
}

#[test]
fn flattened_cylinder_keeps_every_end_ring_vertex() {
    let params = GenerationParameters::new(Constant(1.0))
        .with_rings(3)
        .with_segments(100)
        .with_axis_scale(Vector::new(3.0, 0.1, 0.5));
    let (mesh, hull) = generate(&params).unwrap();

    assert_eq!(hull.points().len(), 200);
    assert_eq!(hull.indices().len(), 2 * 100 + 2 * 98);
    assert_eq!(check_convex_hull(hull.points(), hull.indices()), Ok(()));
    assert_hull_encloses_mesh(&mesh, &hull, "flattened cylinder");
}

#[test]
fn flat_solid_has_a_flat_hull() {
    let params = GenerationParameters::new(Constant(1.0))
        .with_rings(4)
        .with_segments(6)
        .with_axis_scale(Vector::new(1.0, 0.0, 1.0));
    let (_, hull) = generate(&params).unwrap();

    assert_eq!(hull.dimension(), 2);
    assert_eq!(hull.points().len(), 6);
    assert_eq!(hull.indices().len(), 2 * 4);
    assert_eq!(hull.volume(), 0.0);
}
