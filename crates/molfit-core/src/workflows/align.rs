use crate::core::models::frame::Frame;
use crate::core::utils::geometry::rmsd;
use crate::engine::correspondence::{CorrespondenceMap, HeavyAtomSubset};
use crate::engine::error::AlignError;
use crate::engine::kabsch;
use nalgebra::Matrix3;
use tracing::{info, instrument};

/// Outcome of a completed alignment.
///
/// Both RMSD values are measured on the matched heavy-atom subset; the
/// rotation has already been applied to the mobile frame when this is
/// returned.
#[derive(Debug, Clone)]
pub struct AlignmentReport {
    pub initial_rmsd: f64,
    pub final_rmsd: f64,
    pub matched_atoms: usize,
    pub rotation: Matrix3<f64>,
}

/// Aligns `mobile` onto `target` without assuming any shared atom ordering.
///
/// Both frames are mutated: each is centered, the optimal rotation is applied
/// to the whole mobile frame, and both are then translated to the target's
/// original centroid so the two structures end up side by side in the
/// target's coordinate neighborhood.
#[instrument(skip_all, name = "alignment_workflow")]
pub fn run(target: &mut Frame, mobile: &mut Frame) -> Result<AlignmentReport, AlignError> {
    // === Phase 1: Center both frames on the origin ===
    let anchor = target.centroid();
    target.center();
    mobile.center();

    // === Phase 2: Discover the atom correspondence ===
    let target_heavy = HeavyAtomSubset::from_frame(target);
    let mobile_heavy = HeavyAtomSubset::from_frame(mobile);
    info!(
        "Matching {} target heavy atom(s) against {} mobile heavy atom(s).",
        target_heavy.len(),
        mobile_heavy.len()
    );
    let map = CorrespondenceMap::build(&target_heavy, &mobile_heavy);
    if map.is_empty() {
        return Err(AlignError::NoCorrespondence);
    }
    info!("Mapped {} atom pair(s) by topology fingerprint.", map.len());

    // === Phase 3: Superimpose on the mapped subset ===
    let (x, y) = map.paired_coordinates(&target_heavy, &mobile_heavy);
    let rotation = kabsch::optimal_rotation(&x, &y)?;
    // The paired matrices are equal-length and non-empty by construction.
    let initial_rmsd = rmsd(&x, &y).unwrap();
    let final_rmsd = rmsd(&x, &(&y * rotation)).unwrap();

    // === Phase 4: Reposition at the target's original location ===
    mobile.rotate_matrix(&rotation, true);
    mobile.translate(anchor[0], anchor[1], anchor[2]);
    target.translate(anchor[0], anchor[1], anchor[2]);

    info!(
        initial_rmsd,
        final_rmsd,
        "Alignment complete on {} matched atom pair(s).",
        map.len()
    );
    Ok(AlignmentReport {
        initial_rmsd,
        final_rmsd,
        matched_atoms: map.len(),
        rotation,
    })
}
