use std::fmt;
use std::path::Path;

/// A named variant of trailing-column interpretation within the shared
/// fixed-column layout of the PDB/MOL2 family.
///
/// All dialects read the record keyword, index, name, residue, chain, and
/// coordinate columns identically; they differ only in how the text after the
/// coordinates is interpreted (see the parser's field rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Plain PDB or MOL2: occupancy/temp-factor columns, trailing
    /// element/charge region.
    #[default]
    Plain,
    /// PQR: the last two whitespace tokens after the coordinates are charge
    /// and radius.
    Pqr,
    /// AutoDock PDBQT: the trailing tokens end with charge and a pseudo-type.
    Pdbqt,
    /// AutoDock-typed MOL2 (same trailing semantics as [`Dialect::Pdbqt`]).
    Mol2qt,
}

impl Dialect {
    /// Selects a dialect from a file extension, case-insensitively:
    /// `.pqr` → PQR, `.pdbqt` → PDBQT, `.mol2qt` → MOL2QT, anything else plain.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pqr") => Dialect::Pqr,
            Some("pdbqt") => Dialect::Pdbqt,
            Some("mol2qt") => Dialect::Mol2qt,
            _ => Dialect::Plain,
        }
    }

    /// Whether the text after the coordinate columns is whitespace-tokenized
    /// (PQR and the AutoDock dialects) rather than fixed-column.
    pub fn uses_trailing_tokens(&self) -> bool {
        matches!(self, Dialect::Pqr | Dialect::Pdbqt | Dialect::Mol2qt)
    }

    /// Whether the last trailing token is an AutoDock pseudo-type.
    pub fn is_autodock(&self) -> bool {
        matches!(self, Dialect::Pdbqt | Dialect::Mol2qt)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Plain => "PDB",
            Dialect::Pqr => "PQR",
            Dialect::Pdbqt => "PDBQT",
            Dialect::Mol2qt => "MOL2QT",
        };
        write!(f, "{}", name)
    }
}
