use phf::{Map, phf_map};

static AUTODOCK_TYPE_ALIASES: Map<&'static str, &'static str> = phf_map! {
    "A" => "C",
    "OA" => "O",
    "NA" => "N",
    "HD" => "H",
};

/// Canonicalizes an AutoDock pseudo-type token (PDBQT/MOL2QT trailing column)
/// to its plain element type. Tokens without an alias pass through unchanged.
pub fn canonical_autodock_type(raw: &str) -> &str {
    AUTODOCK_TYPE_ALIASES.get(raw).copied().unwrap_or(raw)
}

/// Derives the element type from an atom name by removing ASCII digits
/// (`"C4"` → `"C"`, `"HG12"` → `"HG"`). May be empty for all-digit names.
pub fn element_from_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Whether an element type denotes hydrogen. Absent types are not hydrogens.
pub fn is_hydrogen_type(element: Option<&str>) -> bool {
    element == Some("H")
}
