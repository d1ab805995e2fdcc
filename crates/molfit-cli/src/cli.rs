use clap::{Args, Parser, Subcommand, ValueEnum};
use molfit::core::io::dialect::Dialect;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "drccr",
    version,
    about = "molfit CLI - A command-line interface for reading PDB-family structure files, measuring molecular geometry, and aligning structures whose atom numbering differs.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print summary geometry (atom count, centroid, bounding dimensions) of one frame.
    Measure(MeasureArgs),
    /// Superimpose a mobile structure onto a target, matching atoms by bond topology.
    Align(AlignArgs),
}

/// Arguments for the `measure` subcommand.
#[derive(Args, Debug)]
pub struct MeasureArgs {
    /// Path to the input structure file (e.g., ligand.pdbqt).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Frame (model) number to measure.
    #[arg(short, long, value_name = "INT", default_value_t = 0)]
    pub frame: usize,

    /// Override the dialect detected from the file extension.
    #[arg(long, value_name = "DIALECT", value_enum)]
    pub dialect: Option<DialectArg>,
}

/// Arguments for the `align` subcommand.
#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Path to the target structure file (the reference position).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub target: PathBuf,

    /// Path to the mobile structure file (rotated onto the target).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub mobile: PathBuf,

    /// Frame number within the target file.
    #[arg(long, value_name = "INT", default_value_t = 0)]
    pub target_frame: usize,

    /// Frame number within the mobile file.
    #[arg(long, value_name = "INT", default_value_t = 0)]
    pub mobile_frame: usize,

    /// Override the target dialect detected from the file extension.
    #[arg(long, value_name = "DIALECT", value_enum)]
    pub target_dialect: Option<DialectArg>,

    /// Override the mobile dialect detected from the file extension.
    #[arg(long, value_name = "DIALECT", value_enum)]
    pub mobile_dialect: Option<DialectArg>,

    /// Write the aligned mobile structure to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// File format names accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DialectArg {
    Pdb,
    Pqr,
    Pdbqt,
    Mol2qt,
}

impl DialectArg {
    pub fn to_dialect(self) -> Dialect {
        match self {
            DialectArg::Pdb => Dialect::Plain,
            DialectArg::Pqr => Dialect::Pqr,
            DialectArg::Pdbqt => Dialect::Pdbqt,
            DialectArg::Mol2qt => Dialect::Mol2qt,
        }
    }
}
