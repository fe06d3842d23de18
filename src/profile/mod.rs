//! Radius profiles of surfaces of revolution.
//!
//! A profile maps the normalized height parameter `t ∈ [0, 1]` to the distance
//! between the surface and its axis of revolution. `t = 0` is the top ring of
//! the generated mesh and `t = 1` its bottom ring.
//!
//! Any `Fn(Real) -> Real` closure is a profile. Profiles that may be undefined
//! for some parameters implement [`Profile`] directly and report an error.

pub use self::presets::{Bicone, Constant, Linear, Polyline, Sine};

use crate::math::Real;

mod presets;

/// Error raised while evaluating a radius profile.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ProfileError {
    /// The profile has no value at this parameter.
    #[error("the profile is undefined at t = {t}")]
    Undefined {
        /// The parameter the profile was evaluated at.
        t: Real,
    },
    /// The profile evaluated to NaN or to an infinite radius.
    #[error("the profile evaluated to the non-finite radius {value} at t = {t}")]
    NonFinite {
        /// The parameter the profile was evaluated at.
        t: Real,
        /// The value returned by the profile.
        value: Real,
    },
}

/// A function giving the radius of a surface of revolution along its axis.
pub trait Profile {
    /// Evaluates the radius at the normalized height `t ∈ [0, 1]`.
    fn radius_at(&self, t: Real) -> Result<Real, ProfileError>;
}

impl<F> Profile for F
where
    F: Fn(Real) -> Real,
{
    #[inline]
    fn radius_at(&self, t: Real) -> Result<Real, ProfileError> {
        Ok(self(t))
    }
}
