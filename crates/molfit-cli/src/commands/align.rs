use crate::cli::AlignArgs;
use crate::error::Result;
use molfit::core::models::frame::Frame;
use molfit::workflows;
use molfit::workflows::align::AlignmentReport;
use std::fs::File;
use std::io::Write;
use tracing::info;

pub fn run(args: AlignArgs) -> Result<()> {
    info!("Loading target structure from {:?}", &args.target);
    let mut target_structure = super::load_structure(&args.target, args.target_dialect)?;
    info!("Loading mobile structure from {:?}", &args.mobile);
    let mut mobile_structure = super::load_structure(&args.mobile, args.mobile_dialect)?;

    let target_frames = target_structure.frames().len();
    let target = target_structure
        .frame_mut(args.target_frame)
        .ok_or_else(|| super::missing_frame("Target", args.target_frame, target_frames))?;

    let mobile_frames = mobile_structure.frames().len();
    let mobile = mobile_structure
        .frame_mut(args.mobile_frame)
        .ok_or_else(|| super::missing_frame("Mobile", args.mobile_frame, mobile_frames))?;

    info!("Invoking the alignment workflow...");
    let report = workflows::align::run(target, mobile)?;
    info!(
        "Matched {} atom pair(s); RMSD {:.3} -> {:.3}.",
        report.matched_atoms, report.initial_rmsd, report.final_rmsd
    );

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            write_alignment(&mut file, &report, mobile)?;
            println!("✓ Aligned structure written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_alignment(&mut stdout.lock(), &report, mobile)?;
        }
    }

    Ok(())
}

fn write_alignment(
    out: &mut impl Write,
    report: &AlignmentReport,
    mobile: &Frame,
) -> std::io::Result<()> {
    writeln!(out, "REMARK  Initial RMSD: {:.3} A", report.initial_rmsd)?;
    writeln!(out, "REMARK   Final RMSD: {:.3} A", report.final_rmsd)?;
    write!(out, "{}", mobile)
}
