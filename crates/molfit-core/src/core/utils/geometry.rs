use nalgebra::{Matrix3, MatrixXx3};

pub fn rotation_about_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
}

pub fn rotation_about_y(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
}

pub fn rotation_about_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
}

pub fn euler_rotation(rx: f64, ry: f64, rz: f64) -> Matrix3<f64> {
    rotation_about_x(rx) * rotation_about_y(ry) * rotation_about_z(rz)
}

pub fn rmsd(coords1: &MatrixXx3<f64>, coords2: &MatrixXx3<f64>) -> Option<f64> {
    if coords1.nrows() != coords2.nrows() || coords1.nrows() == 0 {
        return None;
    }
    let n = coords1.nrows() as f64;
    let squared_dist_sum: f64 = coords1
        .row_iter()
        .zip(coords2.row_iter())
        .map(|(r1, r2)| (r1 - r2).norm_squared())
        .sum();
    // Reported to three decimal places.
    Some(((squared_dist_sum / n).sqrt() * 1000.0).round() / 1000.0)
}
