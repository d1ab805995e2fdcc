use crate::cli::DialectArg;
use crate::error::{CliError, Result};
use molfit::core::io::pdb::PdbFile;
use molfit::core::models::structure::Structure;
use std::path::Path;

pub mod align;
pub mod measure;

fn load_structure(path: &Path, dialect: Option<DialectArg>) -> Result<Structure> {
    let parsed = match dialect {
        Some(dialect) => PdbFile::read_from_path_with(path, dialect.to_dialect()),
        None => PdbFile::read_from_path(path),
    };
    parsed.map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

fn missing_frame(what: &str, requested: usize, available: usize) -> CliError {
    CliError::Argument(format!(
        "{} frame {} does not exist; the file holds {} frame(s)",
        what, requested, available
    ))
}
