//! FDR-derived q-values over a score-ranked list of identifications.

use crate::models::TargetDecoy;

/// A scored hit that knows its target/decoy label and can carry a q-value.
pub trait LabelledHit {
    fn label(&self) -> TargetDecoy;
    fn assign_qvalue(&mut self, q: f64);
    fn qvalue(&self) -> f64;
}

impl LabelledHit for (TargetDecoy, f64) {
    fn label(&self) -> TargetDecoy {
        self.0
    }

    fn assign_qvalue(&mut self, q: f64) {
        self.1 = q
    }

    fn qvalue(&self) -> f64 {
        self.1
    }
}

/// Compute q-values for a sequence of target/decoy labels sorted by
/// strictly descending confidence score (best hit first).
///
/// # Invariants
/// * The label order is a precondition; nothing here can check it because
///   the scores themselves are not passed in.
///
/// Walks the labels accumulating target/decoy counts and an FDR per index
/// (`decoy / target`, with 1.0 whenever no target has been seen — the
/// zero-target case covers the degenerate zero/zero prefix, which is
/// unreachable once the first label lands in a bucket but is pinned to the
/// conservative value anyway). A reverse cumulative-minimum pass then turns
/// the FDRs into q-values: each index gets the minimum FDR at or below its
/// rank, so an FDR spike among low-confidence hits cannot make a
/// high-confidence hit look worse.
pub fn qvalues_from_labels(labels: &[TargetDecoy]) -> Vec<f64> {
    let mut fdr = Vec::with_capacity(labels.len());
    let mut target = 0u64;
    let mut decoy = 0u64;

    for label in labels {
        match label {
            TargetDecoy::Decoy => decoy += 1,
            TargetDecoy::Target => target += 1,
        }
        let val = if target == 0 {
            1.0
        } else {
            decoy as f64 / target as f64
        };
        fdr.push(val);
    }

    let mut q_min = f64::INFINITY;
    for q in fdr.iter_mut().rev() {
        q_min = q_min.min(*q);
        *q = q_min;
    }
    fdr
}

/// Assign q-values in place over already-ranked hits.
///
/// Same recurrence as [`qvalues_from_labels`]; the hits must be sorted by
/// descending confidence score.
pub fn assign_qvalues<T: LabelledHit>(hits: &mut [T]) {
    let mut target = 0u64;
    let mut decoy = 0u64;

    for hit in hits.iter_mut() {
        match hit.label() {
            TargetDecoy::Decoy => decoy += 1,
            TargetDecoy::Target => target += 1,
        }
        let fdr = if target == 0 {
            1.0
        } else {
            decoy as f64 / target as f64
        };
        hit.assign_qvalue(fdr);
    }

    let mut q_min = f64::INFINITY;
    for hit in hits.iter_mut().rev() {
        q_min = q_min.min(hit.qvalue());
        hit.assign_qvalue(q_min);
    }
}
