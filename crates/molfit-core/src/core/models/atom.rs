use super::frame::Frame;
use nalgebra::Point3;

/// Represents one fully-parsed atom line, ready to be appended to a frame.
///
/// This struct is the unit of transfer between the dialect parser and the
/// frame builder: the parser resolves every dialect-specific field rule
/// (sentinels, defaults, canonicalized types) before constructing a record,
/// so the builder can append it column-by-column without further logic.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The atom index from the file (decimal or hex-decoded), or `None` when
    /// the field was blank-and-unassignable or unparsable.
    pub index: Option<i64>,
    /// The trimmed atom name (e.g., "CA", "O2"); `"X"` when the field was blank.
    pub name: String,
    /// The element type: derived from the name with digits stripped, or taken
    /// from a dialect-specific trailing column. `None` when neither yields one.
    pub element: Option<String>,
    /// The chain identifier, explicit or inherited from the running default.
    pub chain: char,
    /// The trimmed residue name; `"X"` when the field was blank.
    pub res_name: String,
    /// The residue id (decimal or hex-decoded), or `None` when blank/unparsable.
    pub res_id: Option<i64>,
    /// The occupancy value (dialect default 1.0).
    pub occupancy: f64,
    /// The temperature factor (dialect default 0.0).
    pub temp_factor: f64,
    /// The partial charge in elementary charge units (dialect default 0.0).
    pub charge: f64,
    /// The atomic radius in Angstroms (PQR dialect; 0.0 elsewhere).
    pub radius: f64,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

/// A borrowed, per-atom view over one row of a frame's column arrays.
///
/// Field access goes straight to the owning [`Frame`]'s columnar storage by
/// row index; no per-atom data is copied unless a caller asks for an owned
/// value (e.g. [`AtomView::position`]).
#[derive(Debug, Clone, Copy)]
pub struct AtomView<'a> {
    pub(crate) frame: &'a Frame,
    pub(crate) row: usize,
}

impl<'a> AtomView<'a> {
    /// The atom index as parsed from the file, if one could be determined.
    pub fn index(&self) -> Option<i64> {
        self.frame.indices[self.row]
    }

    /// The atom name.
    pub fn name(&self) -> &'a str {
        &self.frame.names[self.row]
    }

    /// The element type, if one could be determined.
    pub fn element(&self) -> Option<&'a str> {
        self.frame.elements[self.row].as_deref()
    }

    /// The chain identifier.
    pub fn chain(&self) -> char {
        self.frame.chains[self.row]
    }

    /// The residue name.
    pub fn res_name(&self) -> &'a str {
        &self.frame.res_names[self.row]
    }

    /// The residue id, if one could be determined.
    pub fn res_id(&self) -> Option<i64> {
        self.frame.res_ids[self.row]
    }

    /// The occupancy value.
    pub fn occupancy(&self) -> f64 {
        self.frame.occupancies[self.row]
    }

    /// The temperature factor.
    pub fn temp_factor(&self) -> f64 {
        self.frame.temp_factors[self.row]
    }

    /// The partial charge.
    pub fn charge(&self) -> f64 {
        self.frame.charges[self.row]
    }

    /// The atomic radius.
    pub fn radius(&self) -> f64 {
        self.frame.radii[self.row]
    }

    /// The atom's coordinates, copied out of the frame's coordinate matrix.
    pub fn position(&self) -> Point3<f64> {
        let row = self.frame.coordinates.row(self.row);
        Point3::new(row[0], row[1], row[2])
    }
}
