use super::error::AlignError;
use nalgebra::{Matrix3, MatrixXx3};

/// Computes the optimal rigid rotation superimposing `mobile` onto `target`.
///
/// Both matrices must already be centered on their own centroids, and row `i`
/// of each must describe the same atom. Coordinates are row vectors, so the
/// result is applied as `mobile * rotation`.
///
/// The covariance `C = target^T * mobile` is decomposed by SVD and the
/// rotation assembled from its factors. When `det(C)` is negative the last
/// diagonal of the correction matrix flips sign, which keeps the result a
/// proper rotation instead of a mirror image for near-degenerate point sets.
pub fn optimal_rotation(
    target: &MatrixXx3<f64>,
    mobile: &MatrixXx3<f64>,
) -> Result<Matrix3<f64>, AlignError> {
    if target.nrows() != mobile.nrows() {
        return Err(AlignError::LengthMismatch {
            target: target.nrows(),
            mobile: mobile.nrows(),
        });
    }
    if target.nrows() == 0 {
        return Err(AlignError::EmptyPointSet);
    }

    let covariance = target.transpose() * mobile;
    let determinant = covariance.determinant();
    let svd = covariance.svd(true, true);
    // Both factors were requested, so they are present.
    let u = svd.u.unwrap();
    let v_t = svd.v_t.unwrap();

    let mut correction = Matrix3::identity();
    if determinant < 0.0 {
        correction[(2, 2)] = -1.0;
    }
    Ok(v_t.transpose() * correction * u.transpose())
}
