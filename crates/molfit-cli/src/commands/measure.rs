use crate::cli::MeasureArgs;
use crate::error::Result;
use tracing::info;

pub fn run(args: MeasureArgs) -> Result<()> {
    info!("Loading structure from {:?}", &args.input);
    let structure = super::load_structure(&args.input, args.dialect)?;

    let frame = structure
        .frame(args.frame)
        .ok_or_else(|| super::missing_frame("Requested", args.frame, structure.frames().len()))?;

    println!("{}", structure);
    println!("Frame {}: {} atom(s)", args.frame, frame.len());

    let centroid = frame.centroid();
    println!(
        "Center:     {:8.3} {:8.3} {:8.3}",
        centroid[0], centroid[1], centroid[2]
    );

    let dimensions = frame.dimensions();
    println!(
        "Dimensions: {:8.3} {:8.3} {:8.3}",
        dimensions[0], dimensions[1], dimensions[2]
    );

    Ok(())
}
