use lathe::math::{Real, Vector};
use lathe::na::Point2;
use lathe::profile::{Constant, Polyline, ProfileError};
use lathe::transformation::revolution::{generate, GenerationError, GenerationParameters};
use lathe::transformation::ConvexHullError;

#[test]
fn degenerate_parameters_are_rejected() {
    for (rings, segments) in [(0, 9), (2, 9), (9, 2), (9, 0), (1, 1)] {
        let params = GenerationParameters::new(Constant(1.0))
            .with_rings(rings)
            .with_segments(segments);

        assert_eq!(
            generate(&params).err(),
            Some(GenerationError::DegenerateParameters { rings, segments })
        );
    }
}

#[test]
fn nan_profile_aborts_generation() {
    let params = GenerationParameters::new(|t: Real| if t == 0.5 { Real::NAN } else { 1.0 });
    let err = generate(&params).err();

    assert!(matches!(
        err,
        Some(GenerationError::Profile(ProfileError::NonFinite { t, value }))
            if t == 0.5 && value.is_nan()
    ));
}

#[test]
fn undefined_profile_aborts_generation() {
    let profile = Polyline::new(vec![Point2::new(0.0, 0.5), Point2::new(0.8, 1.0)]).unwrap();
    let params = GenerationParameters::new(profile).with_rings(6);

    assert_eq!(
        generate(&params).err(),
        Some(GenerationError::Profile(ProfileError::Undefined { t: 1.0 }))
    );
}

#[test]
fn solid_collapsed_to_a_point_has_no_hull() {
    let params = GenerationParameters::new(Constant(0.0))
        .with_rings(4)
        .with_segments(5)
        .with_axis_scale(Vector::new(1.0, 0.0, 1.0));

    assert_eq!(
        generate(&params).err(),
        Some(GenerationError::ConvexHull(ConvexHullError::SinglePoint))
    );
}

#[test]
fn errors_are_displayable() {
    let err = GenerationError::DegenerateParameters {
        rings: 2,
        segments: 9,
    };
    assert!(err.to_string().contains("2 rings"));
}
