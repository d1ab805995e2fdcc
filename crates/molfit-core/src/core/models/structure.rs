use super::frame::Frame;
use crate::core::io::dialect::Dialect;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A parsed structure file: an ordered sequence of frames (one per model
/// block) plus the header metadata accumulated during the parse.
///
/// A `Structure` is created by one parse call over one file and is immutable
/// afterward, except for the frames it owns: their coordinate matrices stay
/// mutable through [`Frame`]'s transform methods, reachable via
/// [`Structure::frame_mut`]. Every instance owns freshly-allocated containers;
/// nothing is shared between structures.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    pub(crate) dialect: Dialect,
    pub(crate) path: Option<PathBuf>,
    pub(crate) frames: Vec<Frame>,
    pub(crate) title: String,
    pub(crate) authors: Vec<String>,
    pub(crate) journal: BTreeMap<String, String>,
}

impl Structure {
    /// The dialect the file was parsed with.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The source path, when the structure was parsed from a file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All frames, in file order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the frame at `index`, or `None` if out of range.
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Returns the frame at `index` mutably, for in-place transforms.
    pub fn frame_mut(&mut self, index: usize) -> Option<&mut Frame> {
        self.frames.get_mut(index)
    }

    /// The accumulated multi-line `TITLE` text (empty when the file had none).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The `AUTHOR` entries, comma-split and trimmed.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// The `JRNL` subkey → accumulated value mapping.
    pub fn journal(&self) -> &BTreeMap<String, String> {
        &self.journal
    }

    /// Returns the accumulated value of one `JRNL` subkey (e.g. `"TITL"`).
    pub fn journal_entry(&self, key: &str) -> Option<&str> {
        self.journal.get(key).map(String::as_str)
    }
}

/// Short human-readable summary: dialect, source, frame count, and title.
impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => writeln!(f, "* {} structure ({})", self.dialect, path.display())?,
            None => writeln!(f, "* {} structure (in-memory)", self.dialect)?,
        }
        writeln!(f, "  + {} frame(s)", self.frames.len())?;
        for (i, line) in self.title.lines().enumerate() {
            if i == 0 {
                writeln!(f, "  + {}", line)?;
            } else {
                writeln!(f, "    {}", line)?;
            }
        }
        Ok(())
    }
}
