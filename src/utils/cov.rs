use crate::math::{Matrix, Point, Real};
use na;

/// Computes the covariance matrix of a set of points.
///
/// Returns `None` if `pts` is empty.
pub fn cov(pts: &[Point<Real>]) -> Option<Matrix<Real>> {
    center_cov(pts).map(|(_, cov)| cov)
}

/// Computes the center and the covariance matrix of a set of points.
pub fn center_cov(pts: &[Point<Real>]) -> Option<(Point<Real>, Matrix<Real>)> {
    let center = crate::utils::center(pts)?;
    let mut cov: Matrix<Real> = na::zero();
    let normalizer: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));

    for p in pts.iter() {
        let cp = *p - center;
        // NOTE: this is more numerically stable than using cov.syger.
        cov += cp * (cp * normalizer).transpose();
    }

    Some((center, cov))
}
