use super::{Profile, ProfileError};
use crate::math::{Point2, Real};
use na::RealField;

/// A profile with the same radius everywhere: a cylinder.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Constant(pub Real);

impl Profile for Constant {
    #[inline]
    fn radius_at(&self, _: Real) -> Result<Real, ProfileError> {
        Ok(self.0)
    }
}

/// A profile interpolating linearly between the top and the bottom radius: a truncated cone.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Linear {
    /// The radius at `t = 0`.
    pub start: Real,
    /// The radius at `t = 1`.
    pub end: Real,
}

impl Profile for Linear {
    #[inline]
    fn radius_at(&self, t: Real) -> Result<Real, ProfileError> {
        Ok(self.start + (self.end - self.start) * t)
    }
}

/// The profile `r(t) = sin(πt)`, closed at both poles.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Sine;

impl Profile for Sine {
    #[inline]
    fn radius_at(&self, t: Real) -> Result<Real, ProfileError> {
        Ok((Real::pi() * t).sin())
    }
}

/// Two cones joined by their base at `t = 0.5`, with a radius of `0.5` there.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Bicone;

impl Profile for Bicone {
    #[inline]
    fn radius_at(&self, t: Real) -> Result<Real, ProfileError> {
        Ok(if t < 0.5 { t } else { 1.0 - t })
    }
}

/// A piecewise-linear profile.
///
/// Each knot is a `(t, radius)` pair. The profile is undefined outside of
/// the parameter range spanned by its knots.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Polyline {
    knots: Vec<Point2<Real>>,
}

impl Polyline {
    /// Creates a piecewise-linear profile from its knots.
    ///
    /// Returns `None` if `knots` is empty, contains non-finite coordinates, or
    /// is not sorted by strictly increasing parameter.
    pub fn new(knots: Vec<Point2<Real>>) -> Option<Self> {
        if knots.is_empty() || knots.iter().any(|k| !k.x.is_finite() || !k.y.is_finite()) {
            return None;
        }

        if knots.windows(2).any(|w| w[0].x >= w[1].x) {
            return None;
        }

        Some(Self { knots })
    }

    /// The knots of this profile.
    pub fn knots(&self) -> &[Point2<Real>] {
        &self.knots
    }
}

impl Profile for Polyline {
    fn radius_at(&self, t: Real) -> Result<Real, ProfileError> {
        let first = self.knots[0];
        let last = self.knots[self.knots.len() - 1];

        if !(t >= first.x && t <= last.x) {
            return Err(ProfileError::Undefined { t });
        }

        // Index of the first knot strictly after `t`.
        let i = self.knots.partition_point(|k| k.x <= t);

        if i == self.knots.len() {
            return Ok(last.y);
        }

        let a = self.knots[i - 1];
        let b = self.knots[i];
        let s = (t - a.x) / (b.x - a.x);
        Ok(a.y + (b.y - a.y) * s)
    }
}
