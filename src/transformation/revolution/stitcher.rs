use crate::math::Real;
use crate::transformation::utils;

/// Rings with a radius below this threshold are considered to be a single point:
/// no cap is built to close them.
pub const CAP_EPSILON: Real = 0.001;

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// The end caps of a surface of revolution.
pub struct CapFlags(u8);

bitflags::bitflags! {
    impl CapFlags: u8 {
        /// The top ring (`t = 0`) is closed by a triangle fan.
        const TOP = 1;
        /// The bottom ring (`t = 1`) is closed by a triangle fan.
        const BOTTOM = 1 << 1;
    }
}

/// The index of the first vertex of `ring`.
#[inline]
pub fn ring_base(ring: u32, segments: u32) -> u32 {
    ring * segments
}

/// The segment index `j` wrapped around the texture seam.
#[inline]
pub fn wrap(j: u32, segments: u32) -> u32 {
    j % segments
}

/// The corners `[ul, ur, dl, dr]` of the `j`-th quad between two rings.
///
/// The quad spans segments `j - 1` and `j` of the upper ring (starting at `prev_base`)
/// and of the lower ring (starting at `this_base`). For `j = segments` this is
/// the seam quad, closing the ring back on its first segment.
#[inline]
pub fn quad_corners(prev_base: u32, this_base: u32, j: u32, segments: u32) -> [u32; 4] {
    let left = wrap(j - 1, segments);
    let right = wrap(j, segments);
    [
        prev_base + left,
        prev_base + right,
        this_base + left,
        this_base + right,
    ]
}

/// Pushes the `2 * segments` triangles linking `ring - 1` to `ring`, seam included.
pub fn push_ring_transition(ring: u32, segments: u32, out: &mut Vec<[u32; 3]>) {
    let prev_base = ring_base(ring - 1, segments);
    let this_base = ring_base(ring, segments);

    for j in 1..=segments {
        let [ul, ur, dl, dr] = quad_corners(prev_base, this_base, j, segments);
        utils::push_quad_indices(ul, ur, dl, dr, out);
    }
}

/// Computes the triangles of a surface of revolution with the given ring radii.
///
/// The side surface is made of `2 * segments * (rings - 1)` triangles. The top
/// (resp. bottom) ring is closed with `segments - 2` more triangles if its radius
/// is greater than [`CAP_EPSILON`].
pub fn stitch(radii: &[Real], segments: u32) -> (Vec<[u32; 3]>, CapFlags) {
    let rings = radii.len() as u32;

    if rings == 0 || segments < 3 {
        return (Vec::new(), CapFlags::empty());
    }

    let mut caps = CapFlags::empty();
    caps.set(CapFlags::TOP, radii[0] > CAP_EPSILON);
    caps.set(CapFlags::BOTTOM, radii[rings as usize - 1] > CAP_EPSILON);

    let ntriangles = 2 * segments as usize * (rings as usize - 1)
        + (segments as usize - 2) * caps.bits().count_ones() as usize;
    let mut indices = Vec::with_capacity(ntriangles);

    for ring in 1..rings {
        push_ring_transition(ring, segments, &mut indices);
    }

    if caps.contains(CapFlags::TOP) {
        let start = indices.len();
        utils::push_filled_circle_indices(0, segments, &mut indices);
        utils::reverse_clockwising(&mut indices[start..]);
    }

    if caps.contains(CapFlags::BOTTOM) {
        utils::push_filled_circle_indices(ring_base(rings - 1, segments), segments, &mut indices);
    }

    log::debug!(
        "stitched {} triangles, caps: {:?}",
        indices.len(),
        caps
    );

    (indices, caps)
}
