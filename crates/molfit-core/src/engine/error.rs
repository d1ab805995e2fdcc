use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignError {
    #[error(
        "No atom correspondence: the two frames share no uniquely matching topology fingerprints"
    )]
    NoCorrespondence,

    #[error("Point sets differ in size: {target} target rows vs {mobile} mobile rows")]
    LengthMismatch { target: usize, mobile: usize },

    #[error("Cannot compute a rotation from empty point sets")]
    EmptyPointSet,
}
