use lathe::math::{Point, Real, Vector};
use lathe::profile::{Bicone, Constant, Linear, Sine};
use lathe::shape::RevolutionMesh;
use lathe::transformation::revolution::{generate, CapFlags, GenerationParameters};
use lathe::utils::hashmap::HashMap;
use lathe::utils::{cw_face_normal, SortedPair};

fn edge_valences(mesh: &RevolutionMesh) -> HashMap<SortedPair<u32>, usize> {
    let mut edges = HashMap::new();

    for tri in mesh.indices() {
        for i in 0..3 {
            *edges
                .entry(SortedPair::new(tri[i], tri[(i + 1) % 3]))
                .or_insert(0) += 1;
        }
    }

    edges
}

#[test]
fn vertex_and_triangle_counts() {
    for (rings, segments) in [(3, 3), (5, 4), (9, 9), (16, 24), (4, 31)] {
        let params = GenerationParameters::new(Constant(0.75))
            .with_rings(rings)
            .with_segments(segments);
        let (mesh, _) = generate(&params).unwrap();

        let rings = rings as usize;
        let segments = segments as usize;
        assert_eq!(mesh.points().len(), rings * segments);
        assert_eq!(mesh.uvs().len(), rings * segments);
        assert_eq!(mesh.normals().len(), rings * segments);
        assert_eq!(mesh.num_caps(), 2);
        assert_eq!(
            mesh.indices().len(),
            2 * segments * (rings - 1) + 2 * (segments - 2)
        );
    }
}

#[test]
fn seam_pair_appears_once_per_ring_transition() {
    let (rings, segments) = (6, 7);
    let params = GenerationParameters::new(Sine)
        .with_rings(rings)
        .with_segments(segments);
    let (mesh, _) = generate(&params).unwrap();

    for ring in 1..rings {
        let prev = mesh.vertex_id(ring - 1, 0);
        let this = mesh.vertex_id(ring, 0);
        let upper = [prev + segments - 1, prev, this + segments - 1];
        let lower = [prev, this, this + segments - 1];

        assert_eq!(mesh.indices().iter().filter(|t| **t == upper).count(), 1);
        assert_eq!(mesh.indices().iter().filter(|t| **t == lower).count(), 1);
    }

    // Both poles are open: only the edges of the end rings are on the boundary.
    assert_eq!(mesh.caps(), CapFlags::empty());
    let boundary: Vec<usize> = mesh
        .ring(0)
        .unwrap()
        .chain(mesh.ring(rings - 1).unwrap())
        .collect();

    for (edge, valence) in edge_valences(&mesh) {
        let on_boundary = boundary.contains(&(*edge.first() as usize))
            && boundary.contains(&(*edge.second() as usize))
            && (edge.first() / segments == edge.second() / segments);

        if on_boundary {
            assert_eq!(valence, 1, "boundary edge {:?}", edge);
        } else {
            assert_eq!(valence, 2, "interior edge {:?}", edge);
        }
    }
}

#[test]
fn capped_solid_is_closed() {
    let params = GenerationParameters::new(Linear {
        start: 0.5,
        end: 1.5,
    })
    .with_rings(7)
    .with_segments(12);
    let (mesh, _) = generate(&params).unwrap();

    assert_eq!(mesh.caps(), CapFlags::TOP | CapFlags::BOTTOM);
    assert!(edge_valences(&mesh).values().all(|valence| *valence == 2));
}

#[test]
fn triangles_face_away_from_the_axis() {
    let params = GenerationParameters::new(|t: Real| (t * core::f64::consts::PI as Real).sin())
        .with_rings(12)
        .with_segments(17);
    let (mesh, _) = generate(&params).unwrap();
    let mut num_checked = 0;

    for tri in mesh.indices() {
        let [a, b, c] = tri.map(|i| mesh.points()[i as usize]);
        let normal = cw_face_normal(&a, &b, &c);

        if normal.norm_squared() < 1.0e-10 {
            continue;
        }

        let centroid = Point::from((a.coords + b.coords + c.coords) / 3.0);
        let radial = Vector::new(centroid.x, 0.0, centroid.z);

        assert!(normal.dot(&radial) > 0.0, "triangle {:?}", tri);
        num_checked += 1;
    }

    // Only the triangles touching the poles twice are degenerate.
    assert_eq!(num_checked, mesh.indices().len() - 2 * 17);
}

#[test]
fn positions_scale_linearly() {
    let base = GenerationParameters::new(Sine).with_rings(8).with_segments(10);
    let (unit, _) = generate(&base).unwrap();

    let scale = Vector::new(2.0, 0.5, 3.0);
    let (scaled, _) = generate(&base.with_axis_scale(scale)).unwrap();
    let (uniform, _) = generate(&base.with_axis_scale(Vector::repeat(2.5))).unwrap();

    assert_eq!(unit.indices(), scaled.indices());
    assert_eq!(unit.uvs(), scaled.uvs());

    for i in 0..unit.points().len() {
        assert_relative_eq!(
            unit.points()[i].coords.component_mul(&scale),
            scaled.points()[i].coords,
            epsilon = 1.0e-5
        );
        assert_relative_eq!(scaled.normals()[i].norm(), 1.0, epsilon = 1.0e-5);
        assert_relative_eq!(uniform.normals()[i], unit.normals()[i], epsilon = 1.0e-5);
    }
}

#[test]
fn bicone_end_to_end() {
    let params = GenerationParameters::new(Bicone)
        .with_rings(3)
        .with_segments(3);
    let (mesh, hull) = generate(&params).unwrap();

    assert_eq!(mesh.points().len(), 9);
    assert_eq!(mesh.num_caps(), 0);
    assert_eq!(mesh.indices().len(), 12);

    for i in mesh.ring(1).unwrap() {
        let pt = mesh.points()[i];
        assert_relative_eq!(pt.y, 0.0);
        assert_relative_eq!(pt.xz().coords.norm(), 0.5, epsilon = 1.0e-6);
    }

    for i in mesh.ring(0).unwrap() {
        assert_relative_eq!(mesh.points()[i], Point::new(0.0, 1.0, 0.0));
    }

    assert_eq!(hull.points().len(), 5);
}

#[test]
fn texture_coordinates() {
    let params = GenerationParameters::new(Constant(1.0))
        .with_rings(5)
        .with_segments(8);
    let (mesh, _) = generate(&params).unwrap();

    for ring in 0..5 {
        for segment in 0..8 {
            let uv = mesh.uvs()[mesh.vertex_id(ring, segment) as usize];
            assert_relative_eq!(uv.x, 1.0 - segment as Real / 8.0);
            assert_relative_eq!(uv.y, ring as Real / 4.0);
        }
    }
}

#[test]
fn zero_radius_profile_has_no_normals() {
    let params = GenerationParameters::new(Constant(0.0))
        .with_rings(4)
        .with_segments(5);
    let (mesh, hull) = generate(&params).unwrap();

    assert_eq!(mesh.num_caps(), 0);
    assert_eq!(mesh.degenerate_normals().len(), 20);
    assert!(mesh.normals().iter().all(|n| *n == Vector::zeros()));

    // All the vertices are on the axis.
    assert_eq!(hull.dimension(), 1);
    assert!(hull.indices().is_empty());
    assert_eq!(hull.points().len(), 2);
}
