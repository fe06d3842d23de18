use lathe::math::{Point, Real};
use lathe::shape::ConvexHull;
use lathe::transformation::{check_convex_hull, try_convex_hull};

fn random_points(rng: &mut oorandom::Rand32, n: usize, scale: [Real; 3]) -> Vec<Point<Real>> {
    (0..n)
        .map(|_| {
            Point::new(
                (rng.rand_float() as Real * 2.0 - 1.0) * scale[0],
                (rng.rand_float() as Real * 2.0 - 1.0) * scale[1],
                (rng.rand_float() as Real * 2.0 - 1.0) * scale[2],
            )
        })
        .collect()
}

#[test]
fn random_clouds_have_valid_hulls() {
    let mut rng = oorandom::Rand32::new(1234);

    for n in [4, 10, 50, 300, 1000] {
        let points = random_points(&mut rng, n, [1.0, 2.0, 0.5]);
        let (vertices, indices) = try_convex_hull(&points).unwrap();

        assert!(vertices.len() >= 4);
        assert_eq!(check_convex_hull(&vertices, &indices), Ok(()));

        let hull = ConvexHull::try_from_points(&points).unwrap();
        assert_eq!(hull.points(), &vertices[..]);

        for pt in &points {
            assert!(hull.contains_point(pt));
        }
    }
}

#[test]
fn random_points_on_a_sphere_are_all_hull_vertices() {
    let mut rng = oorandom::Rand32::new(42);
    let points: Vec<_> = random_points(&mut rng, 60, [1.0; 3])
        .into_iter()
        .filter_map(|pt| {
            let norm = pt.coords.norm();
            (norm > 0.1).then(|| Point::from(pt.coords / norm))
        })
        .collect();

    let (vertices, indices) = try_convex_hull(&points).unwrap();

    assert_eq!(vertices.len(), points.len());
    assert_eq!(indices.len(), 2 * points.len() - 4);
    assert_eq!(check_convex_hull(&vertices, &indices), Ok(()));
}
