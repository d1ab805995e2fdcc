use super::atom::AtomView;
use crate::core::utils::geometry;
use nalgebra::{Matrix3, MatrixXx3, Vector3};
use std::fmt;

/// One parsed conformation: a columnar atom table plus an N×3 coordinate matrix.
///
/// A `Frame` is produced by [`super::builder::FrameBuilder::finalize`] and is
/// frozen from then on in everything except its coordinates: transforms mutate
/// the coordinate matrix in place but never change the atom count or the
/// identity columns. Its identity within a [`super::structure::Structure`] is
/// its position in the frame list (creation order).
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub(crate) indices: Vec<Option<i64>>,
    pub(crate) names: Vec<String>,
    pub(crate) elements: Vec<Option<String>>,
    pub(crate) chains: Vec<char>,
    pub(crate) res_names: Vec<String>,
    pub(crate) res_ids: Vec<Option<i64>>,
    pub(crate) occupancies: Vec<f64>,
    pub(crate) temp_factors: Vec<f64>,
    pub(crate) charges: Vec<f64>,
    pub(crate) radii: Vec<f64>,
    pub(crate) coordinates: MatrixXx3<f64>,
}

impl Frame {
    /// Returns the number of atoms in the frame.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the frame contains no atoms.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns a borrowed view of the atom at `row`, or `None` if out of range.
    pub fn atom(&self, row: usize) -> Option<AtomView<'_>> {
        (row < self.len()).then_some(AtomView { frame: self, row })
    }

    /// Iterates over all atoms as borrowed row views.
    pub fn atoms(&self) -> impl Iterator<Item = AtomView<'_>> {
        (0..self.len()).map(|row| AtomView { frame: self, row })
    }

    pub fn indices(&self) -> &[Option<i64>] {
        &self.indices
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn elements(&self) -> &[Option<String>] {
        &self.elements
    }

    pub fn chains(&self) -> &[char] {
        &self.chains
    }

    pub fn res_names(&self) -> &[String] {
        &self.res_names
    }

    pub fn res_ids(&self) -> &[Option<i64>] {
        &self.res_ids
    }

    pub fn occupancies(&self) -> &[f64] {
        &self.occupancies
    }

    pub fn temp_factors(&self) -> &[f64] {
        &self.temp_factors
    }

    pub fn charges(&self) -> &[f64] {
        &self.charges
    }

    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// The N×3 coordinate matrix (one row per atom, columns x/y/z).
    pub fn coordinates(&self) -> &MatrixXx3<f64> {
        &self.coordinates
    }

    /// Computes the arithmetic mean of each coordinate axis across all atoms.
    ///
    /// # Return
    ///
    /// The centroid as a vector; the origin for an empty frame.
    pub fn centroid(&self) -> Vector3<f64> {
        if self.is_empty() {
            return Vector3::zeros();
        }
        let n = self.len() as f64;
        Vector3::new(
            self.coordinates.column(0).sum() / n,
            self.coordinates.column(1).sum() / n,
            self.coordinates.column(2).sum() / n,
        )
    }

    /// Computes the per-axis extent (max − min) of the coordinates.
    pub fn dimensions(&self) -> Vector3<f64> {
        if self.is_empty() {
            return Vector3::zeros();
        }
        Vector3::new(
            self.coordinates.column(0).max() - self.coordinates.column(0).min(),
            self.coordinates.column(1).max() - self.coordinates.column(1).min(),
            self.coordinates.column(2).max() - self.coordinates.column(2).min(),
        )
    }

    /// Adds `(dx, dy, dz)` to every atom's coordinates, in place.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        for mut row in self.coordinates.row_iter_mut() {
            row[0] += dx;
            row[1] += dy;
            row[2] += dz;
        }
    }

    /// Translates the frame so its centroid lands on the origin.
    pub fn center(&mut self) {
        let c = self.centroid();
        self.translate(-c.x, -c.y, -c.z);
    }

    /// Rotates the frame about its own centroid by Euler angles in radians,
    /// composing the X, Y, and Z axis rotations in that order.
    pub fn rotate(&mut self, rx: f64, ry: f64, rz: f64) {
        self.rotate_matrix(&geometry::euler_rotation(rx, ry, rz), false);
    }

    /// Applies an arbitrary 3×3 rotation matrix to the coordinates (row-vector
    /// convention, `coords · R`).
    ///
    /// # Arguments
    ///
    /// * `rotation` - The rotation matrix to apply.
    /// * `at_origin` - When `false`, the frame is re-centered first and its
    ///   centroid restored afterward, so the rotation pivots about the frame's
    ///   own centroid. When `true`, the matrix is applied directly; the caller
    ///   guarantees the coordinates are already centered.
    pub fn rotate_matrix(&mut self, rotation: &Matrix3<f64>, at_origin: bool) {
        if at_origin {
            self.coordinates = &self.coordinates * rotation;
        } else {
            let c = self.centroid();
            self.translate(-c.x, -c.y, -c.z);
            self.coordinates = &self.coordinates * rotation;
            self.translate(c.x, c.y, c.z);
        }
    }

    /// Computes the RMSD against another frame of the same atom count and
    /// ordering (see [`geometry::rmsd`]); `None` on length mismatch or when
    /// either frame is empty.
    pub fn rmsd(&self, other: &Frame) -> Option<f64> {
        geometry::rmsd(&self.coordinates, &other.coordinates)
    }
}

/// Minimal synthetic record dump: one `ATOM` line per atom, then `TER`.
///
/// A debug aid, not a faithful writer; occupancy, temperature factor, charge,
/// and radius are not re-emitted. Absent index/residue id render as blanks.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len() {
            let index = self.indices[i].map_or(String::new(), |v| v.to_string());
            let res_id = self.res_ids[i].map_or(String::new(), |v| v.to_string());
            writeln!(
                f,
                "ATOM  {:>5}  {:>3} {:>3} {} {:>3}    {:8.3}{:8.3}{:8.3}  1.00  0.00",
                index,
                self.names[i],
                self.res_names[i],
                self.chains[i],
                res_id,
                self.coordinates[(i, 0)],
                self.coordinates[(i, 1)],
                self.coordinates[(i, 2)],
            )?;
        }
        writeln!(f, "TER")
    }
}
