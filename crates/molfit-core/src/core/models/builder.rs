use super::atom::AtomRecord;
use super::frame::Frame;
use nalgebra::{MatrixXx3, Point3, RowVector3};

/// Accumulates atoms column-by-column during parsing and freezes them into a
/// [`Frame`] exactly once. `finalize` takes the builder by value, so further
/// appends after finalization are rejected at compile time.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    indices: Vec<Option<i64>>,
    names: Vec<String>,
    elements: Vec<Option<String>>,
    chains: Vec<char>,
    res_names: Vec<String>,
    res_ids: Vec<Option<i64>>,
    occupancies: Vec<f64>,
    temp_factors: Vec<f64>,
    charges: Vec<f64>,
    radii: Vec<f64>,
    positions: Vec<Point3<f64>>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one atom. All columns grow together, keeping the equal-length
    /// invariant without per-call checks.
    pub fn push(&mut self, record: AtomRecord) -> &mut Self {
        self.indices.push(record.index);
        self.names.push(record.name);
        self.elements.push(record.element);
        self.chains.push(record.chain);
        self.res_names.push(record.res_name);
        self.res_ids.push(record.res_id);
        self.occupancies.push(record.occupancy);
        self.temp_factors.push(record.temp_factor);
        self.charges.push(record.charge);
        self.radii.push(record.radius);
        self.positions.push(record.position);
        self
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Freezes the accumulated columns and allocates the N×3 coordinate matrix.
    pub fn finalize(self) -> Frame {
        let mut coordinates = MatrixXx3::zeros(self.positions.len());
        for (i, p) in self.positions.iter().enumerate() {
            coordinates.set_row(i, &RowVector3::new(p.x, p.y, p.z));
        }
        Frame {
            indices: self.indices,
            names: self.names,
            elements: self.elements,
            chains: self.chains,
            res_names: self.res_names,
            res_ids: self.res_ids,
            occupancies: self.occupancies,
            temp_factors: self.temp_factors,
            charges: self.charges,
            radii: self.radii,
            coordinates,
        }
    }
}
