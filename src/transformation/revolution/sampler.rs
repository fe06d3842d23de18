use crate::math::Real;
use crate::profile::{Profile, ProfileError};

/// The radii of a profile sampled at evenly spaced heights.
///
/// Entry `i` of a table with `n` radii is the value of the profile at `t = i / (n - 1)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RadiusTable {
    radii: Vec<Real>,
}

impl RadiusTable {
    /// The sampled radii, from the top ring to the bottom ring.
    #[inline]
    pub fn radii(&self) -> &[Real] {
        &self.radii
    }

    /// The number of sampled radii.
    #[inline]
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// Is this table empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// The radius of the top ring.
    #[inline]
    pub fn first(&self) -> Option<Real> {
        self.radii.first().copied()
    }

    /// The radius of the bottom ring.
    #[inline]
    pub fn last(&self) -> Option<Real> {
        self.radii.last().copied()
    }
}

/// Evaluates `profile` at `rings` evenly spaced parameters of `[0, 1]`.
///
/// The profile is evaluated exactly once per ring, the first ring at `t = 0` and
/// the last one at `t = 1`. Sampling stops at the first parameter where the
/// profile fails or returns a non-finite radius.
pub fn sample_profile<P: Profile + ?Sized>(
    profile: &P,
    rings: u32,
) -> Result<RadiusTable, ProfileError> {
    let denom = rings.saturating_sub(1).max(1) as Real;
    let radii = (0..rings)
        .map(|i| {
            let t = i as Real / denom;
            let value = profile.radius_at(t)?;

            if value.is_finite() {
                Ok(value)
            } else {
                Err(ProfileError::NonFinite { t, value })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("sampled {} radii from the profile", radii.len());
    Ok(RadiusTable { radii })
}
