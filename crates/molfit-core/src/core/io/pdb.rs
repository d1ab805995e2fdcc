use crate::core::io::dialect::Dialect;
use crate::core::models::atom::AtomRecord;
use crate::core::models::builder::FrameBuilder;
use crate::core::models::structure::Structure;
use crate::core::utils::identifiers::{canonical_autodock_type, element_from_name};
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Missing {axis} coordinate in columns {columns}")]
    MissingCoordinate {
        axis: char,
        columns: &'static str,
    },
    #[error("Coordinate recovery failed: {reason}")]
    UnrecoverableCoordinates { reason: String },
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    slice_clamped(line, start, end).trim()
}

// Mirrors lenient text slicing: a column range starting past the end of the
// line is empty, one extending past it is clamped.
fn slice_clamped(line: &str, start: usize, end: usize) -> &str {
    if start >= line.len() {
        return "";
    }
    line.get(start..end.min(line.len())).unwrap_or("")
}

// Index-like fields switch from decimal to hexadecimal once they overflow
// their fixed column width, so any alphabetic character selects base 16.
fn parse_numeric_field(field: &str, line_num: usize, what: &str) -> Option<i64> {
    let parsed = if field.chars().any(|c| c.is_ascii_alphabetic()) {
        i64::from_str_radix(field, 16).ok()
    } else {
        field.parse().ok()
    };
    if parsed.is_none() {
        warn!(
            "Unparsable {} field '{}' on line {}; recording as absent.",
            what, field, line_num
        );
    }
    parsed
}

fn parse_fixed_float(
    line: &str,
    start: usize,
    end: usize,
    default: f64,
    line_num: usize,
    what: &str,
) -> f64 {
    let field = slice_and_trim(line, start, end);
    if field.is_empty() {
        return default;
    }
    field.parse().unwrap_or_else(|_| {
        debug!(
            "Unparsable {} '{}' on line {}; defaulting to {}.",
            what, field, line_num, default
        );
        default
    })
}

// Two-character charge field where the sign may trail the digit ("2+", "2-").
fn parse_plain_charge(line: &str, line_num: usize) -> f64 {
    let field = slice_clamped(line, 78, 80);
    let chars: Vec<char> = field.chars().collect();
    if chars.len() != 2 {
        return 0.0;
    }
    let value = match chars[1] {
        '+' => chars[0].to_string().parse::<f64>().ok(),
        '-' => chars[0].to_string().parse::<f64>().ok().map(|v| -v),
        _ => field.trim().parse::<f64>().ok(),
    };
    value.unwrap_or_else(|| {
        if !field.trim().is_empty() {
            debug!(
                "Unparsable charge field '{}' on line {}; defaulting to 0.0.",
                field, line_num
            );
        }
        0.0
    })
}

fn parse_trailing_token(tokens: &[&str], from_end: usize, line_num: usize, what: &str) -> f64 {
    let value = tokens
        .len()
        .checked_sub(from_end)
        .and_then(|i| tokens.get(i))
        .and_then(|t| t.parse::<f64>().ok());
    value.unwrap_or_else(|| {
        debug!(
            "Missing or unparsable trailing {} token on line {}; defaulting to 0.0.",
            what, line_num
        );
        0.0
    })
}

struct CoordinateCapture {
    position: Point3<f64>,
    extra: String,
}

const COORDINATE_COLUMNS: [(char, usize, usize, &str); 3] = [
    ('x', 30, 38, "31-38"),
    ('y', 38, 46, "39-46"),
    ('z', 46, 54, "47-54"),
];

fn parse_coordinates(line: &str, line_num: usize) -> Result<CoordinateCapture, PdbError> {
    let mut values = [0.0f64; 3];
    let mut strict_ok = true;
    for (i, &(axis, start, end, columns)) in COORDINATE_COLUMNS.iter().enumerate() {
        let raw = slice_clamped(line, start, end);
        if raw.is_empty() {
            return Err(PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::MissingCoordinate { axis, columns },
            });
        }
        match raw.trim().parse::<f64>() {
            Ok(v) => values[i] = v,
            Err(_) => strict_ok = false,
        }
    }
    if strict_ok {
        return Ok(CoordinateCapture {
            position: Point3::new(values[0], values[1], values[2]),
            extra: line.get(54..).unwrap_or("").to_string(),
        });
    }
    recover_shifted_coordinates(line, line_num)
}

// Drifted columns: locate the three decimal points after column 30, infer the
// field width from the span between the first two, and slice a symmetric
// window around each point.
fn recover_shifted_coordinates(line: &str, line_num: usize) -> Result<CoordinateCapture, PdbError> {
    let block = line.get(30..).unwrap_or("");
    let dots: Vec<usize> = block.match_indices('.').map(|(i, _)| i).take(3).collect();
    if dots.len() < 3 {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::UnrecoverableCoordinates {
                reason: format!(
                    "expected 3 decimal points after column 30, found {}",
                    dots.len()
                ),
            },
        });
    }
    let span = dots[1] - dots[0];
    let half = span.saturating_sub(1) / 2;

    let mut values = [0.0f64; 3];
    for (i, &dot) in dots.iter().enumerate() {
        let start = dot.saturating_sub(half);
        let end = (dot + half + 1).min(block.len());
        let window = block.get(start..end).unwrap_or("");
        values[i] = window.trim().parse().map_err(|_| PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::UnrecoverableCoordinates {
                reason: format!(
                    "no number in the window around the decimal point at column {}",
                    30 + dot + 1
                ),
            },
        })?;
    }
    debug!(
        "Recovered shifted coordinate columns on line {} (inferred field width {}).",
        line_num, span
    );
    Ok(CoordinateCapture {
        position: Point3::new(values[0], values[1], values[2]),
        extra: block.get(dots[2] + half + 1..).unwrap_or("").to_string(),
    })
}

/// Reader for the PDB/MOL2 family of fixed-column formats.
///
/// One single-pass state machine covers all four dialects; see
/// [`Dialect`] for how the trailing columns differ.
pub struct PdbFile;

impl PdbFile {
    /// Reads a structure from `reader` using the given dialect.
    pub fn read_from(reader: &mut impl BufRead, dialect: Dialect) -> Result<Structure, PdbError> {
        let mut structure = Structure {
            dialect,
            ..Default::default()
        };
        let mut builder = FrameBuilder::new();
        let mut author_text = String::new();
        let mut next_auto_index: i64 = 1;
        let mut default_chain = 'A';

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            if line.len() < 3 {
                continue;
            }

            let record = slice_and_trim(&line, 0, 6);
            match record {
                "TITLE" => {
                    if !structure.title.is_empty() {
                        structure.title.push('\n');
                    }
                    structure.title.push_str(line.get(10..).unwrap_or("").trim_end());
                }
                "AUTHOR" => {
                    author_text.push_str(line.get(10..).unwrap_or("").trim_end());
                }
                "JRNL" => {
                    let key = slice_and_trim(&line, 12, 17).to_string();
                    let value = line.get(19..).unwrap_or("").trim_end();
                    structure
                        .journal
                        .entry(key)
                        .and_modify(|accumulated| {
                            accumulated.push('\n');
                            accumulated.push_str(value);
                        })
                        .or_insert_with(|| value.to_string());
                }
                "TER" => {
                    // One code point forward; holds at the end of the char range.
                    default_chain =
                        char::from_u32(default_chain as u32 + 1).unwrap_or(default_chain);
                }
                "END" | "ENDMDL" => {
                    if !builder.is_empty() {
                        let finished = std::mem::take(&mut builder);
                        structure.frames.push(finished.finalize());
                    }
                }
                "ATOM" | "HETATM" => {
                    let index_field = slice_and_trim(&line, 6, 11);
                    let index = if index_field.is_empty() {
                        let assigned = next_auto_index;
                        next_auto_index += 1;
                        Some(assigned)
                    } else {
                        parse_numeric_field(index_field, line_num, "atom index")
                    };

                    let mut name = slice_and_trim(&line, 12, 16).to_string();
                    if name.is_empty() {
                        name = "X".to_string();
                    }
                    let type_from_name = element_from_name(&name);

                    let mut res_name = slice_and_trim(&line, 17, 21).to_string();
                    if res_name.is_empty() {
                        res_name = "X".to_string();
                    }

                    let chain = slice_and_trim(&line, 21, 22)
                        .chars()
                        .next()
                        .unwrap_or(default_chain);

                    let res_id_field = slice_and_trim(&line, 22, 26);
                    let res_id = if res_id_field.is_empty() {
                        None
                    } else {
                        parse_numeric_field(res_id_field, line_num, "residue id")
                    };

                    let capture = parse_coordinates(&line, line_num)?;

                    let (occupancy, temp_factor, charge, radius, element);
                    if dialect.uses_trailing_tokens() {
                        let tokens: Vec<&str> = capture.extra.split_whitespace().collect();
                        charge = parse_trailing_token(&tokens, 2, line_num, "charge");
                        occupancy = 1.0;
                        temp_factor = 0.0;
                        if dialect.is_autodock() {
                            radius = 0.0;
                            element = match tokens.last() {
                                Some(token) => Some(canonical_autodock_type(token).to_string()),
                                None => {
                                    debug!(
                                        "No AutoDock type token on line {}; using the name-derived type.",
                                        line_num
                                    );
                                    (!type_from_name.is_empty()).then(|| type_from_name.clone())
                                }
                            };
                        } else {
                            radius = parse_trailing_token(&tokens, 1, line_num, "radius");
                            element =
                                (!type_from_name.is_empty()).then(|| type_from_name.clone());
                        }
                    } else {
                        occupancy = parse_fixed_float(&line, 54, 60, 1.0, line_num, "occupancy");
                        temp_factor =
                            parse_fixed_float(&line, 60, 66, 0.0, line_num, "temperature factor");
                        charge = parse_plain_charge(&line, line_num);
                        radius = 0.0;
                        element = if !type_from_name.is_empty() {
                            Some(type_from_name.clone())
                        } else {
                            let trailing = slice_and_trim(&line, 77, 80);
                            (!trailing.is_empty()).then(|| trailing.to_string())
                        };
                    }

                    builder.push(AtomRecord {
                        index,
                        name,
                        element,
                        chain,
                        res_name,
                        res_id,
                        occupancy,
                        temp_factor,
                        charge,
                        radius,
                        position: capture.position,
                    });
                }
                _ => {}
            }
        }

        if !builder.is_empty() {
            structure.frames.push(builder.finalize());
        }
        structure.authors = author_text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Ok(structure)
    }

    /// Reads a structure from `path`, selecting the dialect from the file
    /// extension (see [`Dialect::from_path`]).
    pub fn read_from_path(path: impl AsRef<Path>) -> Result<Structure, PdbError> {
        let path = path.as_ref();
        Self::read_from_path_with(path, Dialect::from_path(path))
    }

    /// Reads a structure from `path` with an explicit dialect. The path is
    /// checked for existence before any parsing starts.
    pub fn read_from_path_with(
        path: impl AsRef<Path>,
        dialect: Dialect,
    ) -> Result<Structure, PdbError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PdbError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let mut reader = BufReader::new(File::open(path)?);
        let mut structure = Self::read_from(&mut reader, dialect)?;
        structure.path = Some(path.to_path_buf());
        Ok(structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, dialect: Dialect) -> Structure {
        PdbFile::read_from(&mut text.as_bytes(), dialect)
            .expect("fixture should parse without a fatal error")
    }

    mod records {
        use super::*;

        #[test]
        fn endmdl_finalizes_a_frame_and_resets_the_working_frame() {
            let text = "\
ATOM      1  C1  LIG A   1       1.000   2.000   3.000
ATOM      2  C2  LIG A   1       2.000   3.000   4.000
ENDMDL
ATOM      3  C1  LIG A   1       9.000   9.000   9.000
END
";
            let structure = parse(text, Dialect::Plain);
            assert_eq!(structure.frames().len(), 2);
            assert_eq!(structure.frame(0).unwrap().len(), 2);
            assert_eq!(structure.frame(1).unwrap().len(), 1);
        }

        #[test]
        fn trailing_end_after_endmdl_pushes_no_empty_frame() {
            let text = "\
ATOM      1  C1  LIG A   1       1.000   2.000   3.000
ENDMDL
END
";
            let structure = parse(text, Dialect::Plain);
            assert_eq!(structure.frames().len(), 1);
        }

        #[test]
        fn pending_frame_at_eof_is_finalized() {
            let text = "ATOM      1  C1  LIG A   1       1.000   2.000   3.000\n";
            let structure = parse(text, Dialect::Plain);
            assert_eq!(structure.frames().len(), 1);
            assert_eq!(structure.frame(0).unwrap().len(), 1);
        }

        #[test]
        fn ter_advances_the_default_chain() {
            let text = "\
ATOM      1  C1  LIG     1       1.000   2.000   3.000
TER
ATOM      2  C2  LIG     1       2.000   3.000   4.000
END
";
            let structure = parse(text, Dialect::Plain);
            let frame = structure.frame(0).unwrap();
            assert_eq!(frame.chains(), &['A', 'B']);
        }

        #[test]
        fn hundreds_of_ter_records_advance_the_chain_without_overflow() {
            let mut text = String::new();
            for _ in 0..200 {
                text.push_str("TER\n");
            }
            text.push_str("ATOM      1  C1  LIG     1       1.000   2.000   3.000\nEND\n");
            let structure = parse(&text, Dialect::Plain);
            let expected = char::from_u32('A' as u32 + 200).unwrap();
            assert_eq!(structure.frame(0).unwrap().chains(), &[expected]);
        }

        #[test]
        fn explicit_chain_overrides_the_default() {
            let text = "ATOM      1  C1  LIG B   1       1.000   2.000   3.000\nEND\n";
            let structure = parse(text, Dialect::Plain);
            assert_eq!(structure.frame(0).unwrap().chains(), &['B']);
        }

        #[test]
        fn hetatm_lines_are_parsed_like_atom_lines() {
            let text = "HETATM    7  O   HOH A   2       1.000   2.000   3.000\nEND\n";
            let structure = parse(text, Dialect::Plain);
            let frame = structure.frame(0).unwrap();
            assert_eq!(frame.len(), 1);
            assert_eq!(frame.names(), &["O".to_string()]);
            assert_eq!(frame.res_names(), &["HOH".to_string()]);
        }

        #[test]
        fn short_and_unknown_lines_are_skipped() {
            let text = "\
X
REMARK    NOTHING TO SEE HERE
ATOM      1  C1  LIG A   1       1.000   2.000   3.000
END
";
            let structure = parse(text, Dialect::Plain);
            assert_eq!(structure.frame(0).unwrap().len(), 1);
        }
    }

    mod atom_fields {
        use super::*;

        #[test]
        fn index_with_a_letter_parses_as_hexadecimal() {
            let text = "\
ATOM  186A0  C1  LIG A  A1       1.000   2.000   3.000
END
";
            let structure = parse(text, Dialect::Plain);
            let frame = structure.frame(0).unwrap();
            assert_eq!(frame.indices(), &[Some(0x186A0)]);
            assert_eq!(frame.indices(), &[Some(100000)]);
            assert_eq!(frame.res_ids(), &[Some(0xA1)]);
        }

        #[test]
        fn blank_index_auto_increments_from_one() {
            let text = "\
ATOM         C1  LIG A   1       1.000   2.000   3.000
ATOM         C2  LIG A   1       2.000   3.000   4.000
ATOM         C3  LIG A   1       3.000   4.000   5.000
END
";
            let structure = parse(text, Dialect::Plain);
            let frame = structure.frame(0).unwrap();
            assert_eq!(frame.indices(), &[Some(1), Some(2), Some(3)]);
        }

        #[test]
        fn unparsable_index_is_recorded_as_absent() {
            let text = "ATOM  #####  C1  LIG A  ##       1.000   2.000   3.000\nEND\n";
            let structure = parse(text, Dialect::Plain);
            let frame = structure.frame(0).unwrap();
            assert_eq!(frame.indices(), &[None]);
            assert_eq!(frame.res_ids(), &[None]);
        }

        #[test]
        fn blank_name_and_residue_name_get_the_sentinel() {
            let text = "ATOM      1              1       1.000   2.000   3.000\nEND\n";
            let structure = parse(text, Dialect::Plain);
            let frame = structure.frame(0).unwrap();
            assert_eq!(frame.names(), &["X".to_string()]);
            assert_eq!(frame.res_names(), &["X".to_string()]);
            assert_eq!(frame.elements(), &[Some("X".to_string())]);
        }

        #[test]
        fn blank_residue_id_is_absent() {
            let text = "ATOM      1  C1  LIG A           1.000   2.000   3.000\nEND\n";
            let structure = parse(text, Dialect::Plain);
            assert_eq!(structure.frame(0).unwrap().res_ids(), &[None]);
        }

        #[test]
        fn occupancy_and_temp_factor_come_from_fixed_columns() {
            let text =
                "ATOM      1  N   MET A   1      20.154  29.699   5.276  0.50 30.00\nEND\n";
            let structure = parse(text, Dialect::Plain);
            let frame = structure.frame(0).unwrap();
            assert_eq!(frame.occupancies(), &[0.5]);
            assert_eq!(frame.temp_factors(), &[30.0]);
        }

        #[test]
        fn missing_occupancy_and_temp_factor_default() {
            let text = "ATOM      1  N   MET A   1      20.154  29.699   5.276\nEND\n";
            let structure = parse(text, Dialect::Plain);
            let frame = structure.frame(0).unwrap();
            assert_eq!(frame.occupancies(), &[1.0]);
            assert_eq!(frame.temp_factors(), &[0.0]);
            assert_eq!(frame.charges(), &[0.0]);
            assert_eq!(frame.radii(), &[0.0]);
        }

        #[test]
        fn unparsable_occupancy_defaults_without_aborting() {
            let text = "ATOM      1  N   MET A   1      20.154  29.699   5.276  ??.??\nEND\n";
            let structure = parse(text, Dialect::Plain);
            assert_eq!(structure.frame(0).unwrap().occupancies(), &[1.0]);
        }

        #[test]
        fn trailing_sign_charge_field_is_decoded() {
            let positive = format!(
                "{:<78}2+\n",
                "ATOM      1 CA   CAL A   1       1.000   2.000   3.000"
            );
            let negative = format!(
                "{:<78}2-\n",
                "ATOM      1  O2  LIG A   1       1.000   2.000   3.000"
            );
            assert_eq!(
                parse(&positive, Dialect::Plain).frame(0).unwrap().charges(),
                &[2.0]
            );
            assert_eq!(
                parse(&negative, Dialect::Plain).frame(0).unwrap().charges(),
                &[-2.0]
            );
        }

        #[test]
        fn name_derived_element_wins_over_the_trailing_column() {
            let text = format!(
                "{:<77}N \n",
                "ATOM      1  CA  ALA A   1       1.000   2.000   3.000"
            );
            let structure = parse(&text, Dialect::Plain);
            assert_eq!(
                structure.frame(0).unwrap().elements(),
                &[Some("CA".to_string())]
            );
        }

        #[test]
        fn all_digit_name_falls_back_to_the_trailing_element_column() {
            let text = format!(
                "{:<77}N \n",
                "ATOM      1  123 LIG A   1       1.000   2.000   3.000"
            );
            let structure = parse(&text, Dialect::Plain);
            assert_eq!(
                structure.frame(0).unwrap().elements(),
                &[Some("N".to_string())]
            );
        }

        #[test]
        fn element_is_absent_when_no_source_remains() {
            let text = "ATOM      1  123 LIG A   1       1.000   2.000   3.000\nEND\n";
            let structure = parse(text, Dialect::Plain);
            assert_eq!(structure.frame(0).unwrap().elements(), &[None]);
        }
    }

    mod coordinates {
        use super::*;

        #[test]
        fn missing_coordinate_field_is_fatal() {
            let text = "ATOM      1  C1  LIG A   1       1.234\nEND\n";
            let err = PdbFile::read_from(&mut text.as_bytes(), Dialect::Plain).unwrap_err();
            assert!(matches!(
                err,
                PdbError::Parse {
                    line: 1,
                    kind: PdbParseErrorKind::MissingCoordinate { axis: 'y', .. },
                }
            ));
        }

        #[test]
        fn shifted_columns_recover_the_same_values_as_well_formed_ones() {
            let well_formed = "ATOM      1  C1  LIG A   1       1.234   2.345   3.456\nEND\n";
            let shifted = "ATOM      1  C1  LIG A   1           1.234   2.345   3.456\nEND\n";
            let reference = parse(well_formed, Dialect::Plain);
            let recovered = parse(shifted, Dialect::Plain);
            assert_eq!(
                reference.frame(0).unwrap().coordinates(),
                recovered.frame(0).unwrap().coordinates()
            );
            let coords = recovered.frame(0).unwrap().coordinates().clone_owned();
            assert_eq!(coords[(0, 0)], 1.234);
            assert_eq!(coords[(0, 1)], 2.345);
            assert_eq!(coords[(0, 2)], 3.456);
        }

        #[test]
        fn unrecoverable_columns_are_a_fatal_parse_error() {
            let text = "ATOM      1  C1  LIG A   1      abcdefgh ijklmnop qrstuvwx\nEND\n";
            let err = PdbFile::read_from(&mut text.as_bytes(), Dialect::Plain).unwrap_err();
            assert!(matches!(
                err,
                PdbError::Parse {
                    line: 1,
                    kind: PdbParseErrorKind::UnrecoverableCoordinates { .. },
                }
            ));
        }

        #[test]
        fn fatal_error_aborts_the_whole_file() {
            let text = "\
ATOM      1  C1  LIG A   1       1.000   2.000   3.000
END
ATOM      2  C2  LIG A   1       1.234
END
";
            let result = PdbFile::read_from(&mut text.as_bytes(), Dialect::Plain);
            assert!(matches!(result, Err(PdbError::Parse { line: 3, .. })));
        }
    }

    mod dialects {
        use super::*;

        #[test]
        fn pqr_takes_charge_and_radius_from_the_trailing_tokens() {
            let text = "ATOM      1  N   MET     1      20.154  29.699   5.276 -0.4157 1.8240\nEND\n";
            let structure = parse(text, Dialect::Pqr);
            let frame = structure.frame(0).unwrap();
            assert_eq!(frame.charges(), &[-0.4157]);
            assert_eq!(frame.radii(), &[1.824]);
            assert_eq!(frame.occupancies(), &[1.0]);
            assert_eq!(frame.temp_factors(), &[0.0]);
            assert_eq!(frame.elements(), &[Some("N".to_string())]);
            assert_eq!(frame.chains(), &['A']);
        }

        #[test]
        fn pdbqt_canonicalizes_the_autodock_type_token() {
            let text = "\
ATOM      1  C1  LIG A   1      -0.063   2.851   0.695  0.00  0.00    +0.043 A
ATOM      2  O1  LIG A   1       1.200   2.851   0.695  0.00  0.00    -0.310 OA
ATOM      3  N1  LIG A   1       2.500   2.851   0.695  0.00  0.00    -0.140 NA
ATOM      4  H1  LIG A   1       3.300   2.851   0.695  0.00  0.00     0.210 HD
ATOM      5  S1  LIG A   1       4.700   2.851   0.695  0.00  0.00    -0.050 SA
END
";
            let structure = parse(text, Dialect::Pdbqt);
            let frame = structure.frame(0).unwrap();
            let elements: Vec<&str> = frame.elements().iter().map(|e| e.as_deref().unwrap()).collect();
            assert_eq!(elements, vec!["C", "O", "N", "H", "SA"]);
            assert_eq!(frame.charges()[0], 0.043);
            assert_eq!(frame.charges()[3], 0.21);
            assert_eq!(frame.radii(), &[0.0; 5]);
        }

        #[test]
        fn mol2qt_shares_the_autodock_trailing_rules() {
            let text =
                "ATOM      1  C1  LIG A   1      -0.063   2.851   0.695  0.00  0.00    +0.043 A\nEND\n";
            let structure = parse(text, Dialect::Mol2qt);
            let frame = structure.frame(0).unwrap();
            assert_eq!(frame.elements(), &[Some("C".to_string())]);
            assert_eq!(frame.charges(), &[0.043]);
        }

        #[test]
        fn autodock_line_without_trailing_tokens_recovers_with_defaults() {
            let text = "ATOM      1  C1  LIG A   1      -0.063   2.851   0.695\nEND\n";
            let structure = parse(text, Dialect::Pdbqt);
            let frame = structure.frame(0).unwrap();
            assert_eq!(frame.charges(), &[0.0]);
            assert_eq!(frame.elements(), &[Some("C".to_string())]);
        }
    }

    mod headers {
        use super::*;

        #[test]
        fn title_lines_accumulate_newline_joined() {
            let text = "\
TITLE     CRYSTAL STRUCTURE OF FOO
TITLE     AND A CONTINUATION
END
";
            let structure = parse(text, Dialect::Plain);
            assert_eq!(
                structure.title(),
                "CRYSTAL STRUCTURE OF FOO\nAND A CONTINUATION"
            );
        }

        #[test]
        fn authors_split_on_commas() {
            let text = "\
AUTHOR    J. SMITH,
AUTHOR    A. DOE, B. JONES
END
";
            let structure = parse(text, Dialect::Plain);
            assert_eq!(
                structure.authors(),
                &[
                    "J. SMITH".to_string(),
                    "A. DOE".to_string(),
                    "B. JONES".to_string()
                ]
            );
        }

        #[test]
        fn journal_subkeys_accumulate_on_repetition() {
            let text = "\
JRNL        TITL   A STUDY OF THINGS
JRNL        TITL   AND MORE THINGS
JRNL        REF    SOME JOURNAL
END
";
            let structure = parse(text, Dialect::Plain);
            assert_eq!(
                structure.journal_entry("TITL"),
                Some("A STUDY OF THINGS\nAND MORE THINGS")
            );
            assert_eq!(structure.journal_entry("REF"), Some("SOME JOURNAL"));
        }
    }

    mod entry_points {
        use super::*;
        use std::io::Write;

        #[test]
        fn read_from_path_selects_the_dialect_by_extension() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("ligand.pdbqt");
            let mut file = File::create(&path).unwrap();
            writeln!(
                file,
                "ATOM      1  C1  LIG A   1      -0.063   2.851   0.695  0.00  0.00    +0.043 A"
            )
            .unwrap();
            writeln!(file, "END").unwrap();

            let structure = PdbFile::read_from_path(&path).unwrap();
            assert_eq!(structure.dialect(), Dialect::Pdbqt);
            assert_eq!(structure.path(), Some(path.as_path()));
            assert_eq!(
                structure.frame(0).unwrap().elements(),
                &[Some("C".to_string())]
            );
        }

        #[test]
        fn explicit_dialect_overrides_the_extension() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("ligand.pdb");
            let mut file = File::create(&path).unwrap();
            writeln!(
                file,
                "ATOM      1  N   MET     1      20.154  29.699   5.276 -0.4157 1.8240"
            )
            .unwrap();

            let structure = PdbFile::read_from_path_with(&path, Dialect::Pqr).unwrap();
            assert_eq!(structure.dialect(), Dialect::Pqr);
            assert_eq!(structure.frame(0).unwrap().radii(), &[1.824]);
        }

        #[test]
        fn missing_file_is_a_precondition_error() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("absent.pdb");
            let err = PdbFile::read_from_path(&path).unwrap_err();
            assert!(matches!(err, PdbError::FileNotFound { .. }));
        }
    }
}
