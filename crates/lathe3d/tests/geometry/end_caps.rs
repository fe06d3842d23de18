use lathe::math::{Real, Vector};
use lathe::profile::Constant;
use lathe::transformation::revolution::{generate, CapFlags, GenerationParameters, CAP_EPSILON};
use lathe::utils::cw_face_normal;

#[test]
fn identity_profile_only_closes_the_bottom() {
    let params = GenerationParameters::new(|t: Real| t)
        .with_rings(5)
        .with_segments(5);
    let (mesh, _) = generate(&params).unwrap();

    assert_eq!(mesh.caps(), CapFlags::BOTTOM);
    assert_eq!(mesh.indices().len(), 2 * 5 * 4 + 3);

    // The bottom fan is pushed last, around the first vertex of the last ring.
    let fan = &mesh.indices()[40..];
    assert_eq!(fan, &[[20, 21, 22], [20, 22, 23], [20, 23, 24]]);
}

#[test]
fn constant_profile_closes_both_ends() {
    let params = GenerationParameters::new(Constant(0.5))
        .with_rings(5)
        .with_segments(5);
    let (mesh, _) = generate(&params).unwrap();

    assert_eq!(mesh.caps(), CapFlags::TOP | CapFlags::BOTTOM);
    assert_eq!(mesh.num_caps(), 2);
    assert_eq!(mesh.indices().len(), 2 * 5 * 4 + 2 * 3);

    let top = &mesh.indices()[40..43];
    assert_eq!(top, &[[2, 1, 0], [3, 2, 0], [4, 3, 0]]);

    // Caps face away from the solid along the axis.
    for (tris, expected) in [(&mesh.indices()[40..43], 1.0), (&mesh.indices()[43..], -1.0)] {
        for tri in tris {
            let [a, b, c] = tri.map(|i| mesh.points()[i as usize]);
            let normal = cw_face_normal(&a, &b, &c).normalize();
            assert_relative_eq!(normal, Vector::y() * expected, epsilon = 1.0e-5);
        }
    }
}

#[test]
fn caps_threshold() {
    // Squash the solid so that its hull is well-conditioned.
    let scale = Vector::new(1.0, 0.001, 1.0);
    let below = GenerationParameters::new(Constant(CAP_EPSILON))
        .with_rings(3)
        .with_segments(4)
        .with_axis_scale(scale);
    let (mesh, _) = generate(&below).unwrap();
    assert_eq!(mesh.num_caps(), 0);
    assert_eq!(mesh.indices().len(), 2 * 4 * 2);

    let above = GenerationParameters::new(Constant(CAP_EPSILON * 2.0))
        .with_rings(3)
        .with_segments(4)
        .with_axis_scale(scale);
    let (mesh, _) = generate(&above).unwrap();
    assert_eq!(mesh.num_caps(), 2);
    assert_eq!(mesh.indices().len(), 2 * 4 * 2 + 2 * 2);
}
