mod decoy;
mod peptides;
mod psm;

pub use decoy::{
    DECOY_PROTEIN_MARKER,
    REVERSE_FLAG_SENTINEL,
    TargetDecoy,
};
pub use peptides::DistinctPeptides;
pub use psm::FragpipePsm;
