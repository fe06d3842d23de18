use crate::math::{Point, Real};

/// Given an index buffer, remove from `points` every point that is not indexed.
///
/// The relative order of the remaining points is preserved and `idx` is
/// rewritten to address the compacted buffer.
pub fn remove_unused_points(points: &mut Vec<Point<Real>>, idx: &mut [[u32; 3]]) {
    let mut remap = vec![u32::MAX; points.len()];

    for tri in idx.iter() {
        for &i in tri {
            remap[i as usize] = 0;
        }
    }

    let mut kept = 0u32;
    let mut k = 0;
    points.retain(|_| {
        let used = remap[k] != u32::MAX;
        if used {
            remap[k] = kept;
            kept += 1;
        }
        k += 1;
        used
    });

    for tri in idx.iter_mut() {
        for i in tri.iter_mut() {
            *i = remap[*i as usize];
        }
    }
}
