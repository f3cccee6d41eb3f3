use std::collections::HashSet;
use tracing::info;

/// Distinct canonical peptides collected by a loader, plus how many rows
/// were read and how many survived filtering. The counts ride along so
/// callers get the numbers without scraping logs.
#[derive(Debug, Clone, Default)]
pub struct DistinctPeptides {
    pub peptides: HashSet<String>,
    pub rows_read: usize,
    pub rows_kept: usize,
}

impl DistinctPeptides {
    /// Record one surviving row and its canonical sequence.
    pub fn keep(&mut self, canonical: String) {
        self.rows_kept += 1;
        self.peptides.insert(canonical);
    }

    pub fn len(&self) -> usize {
        self.peptides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peptides.is_empty()
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.peptides.contains(canonical)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.peptides.iter().map(|s| s.as_str())
    }

    pub fn log_summary(&self, engine: &str) {
        info!(
            "Found {} peptides by {} from {} kept rows ({} read)",
            self.len(),
            engine,
            self.rows_kept,
            self.rows_read,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_deduplicates() {
        let mut out = DistinctPeptides::default();
        out.rows_read = 3;
        out.keep("PEPTLDE".to_string());
        out.keep("PEPTLDE".to_string());
        out.keep("LLAMA".to_string());
        assert_eq!(out.len(), 2);
        assert_eq!(out.rows_kept, 3);
        assert!(out.contains("LLAMA"));
    }
}
