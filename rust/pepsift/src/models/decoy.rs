use serde::Serialize;

/// Substring marking a protein identifier as a reversed decoy entry in
/// FragPipe output.
pub const DECOY_PROTEIN_MARKER: &str = "rev_";

/// Sentinel value of the MaxQuant `Reverse` column for decoy rows.
pub const REVERSE_FLAG_SENTINEL: &str = "+";

/// Whether an identification came from the target or the decoy database.
///
/// Each engine reports this differently (a sentinel column, a protein-id
/// prefix, or an explicit boolean); the constructors below fold the three
/// conventions into one label.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, std::hash::Hash, PartialOrd, Ord)]
pub enum TargetDecoy {
    Target,
    Decoy,
}

impl TargetDecoy {
    /// MaxQuant convention: the `Reverse` column holds `+` for decoys and is
    /// empty otherwise.
    pub fn from_reverse_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(REVERSE_FLAG_SENTINEL) => TargetDecoy::Decoy,
            _ => TargetDecoy::Target,
        }
    }

    /// FragPipe convention: decoy proteins carry a `rev_` marker in their
    /// identifier.
    pub fn from_protein_id(protein: &str) -> Self {
        if protein.contains(DECOY_PROTEIN_MARKER) {
            TargetDecoy::Decoy
        } else {
            TargetDecoy::Target
        }
    }

    pub fn from_bool(is_decoy: bool) -> Self {
        if is_decoy {
            TargetDecoy::Decoy
        } else {
            TargetDecoy::Target
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetDecoy::Target => "Target",
            TargetDecoy::Decoy => "Decoy",
        }
    }

    pub fn is_decoy(&self) -> bool {
        matches!(self, TargetDecoy::Decoy)
    }

    pub fn is_target(&self) -> bool {
        !self.is_decoy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_flag() {
        assert!(TargetDecoy::from_reverse_flag(Some("+")).is_decoy());
        assert!(TargetDecoy::from_reverse_flag(None).is_target());
        assert!(TargetDecoy::from_reverse_flag(Some("")).is_target());
    }

    #[test]
    fn test_protein_marker() {
        assert!(TargetDecoy::from_protein_id("rev_sp|P12345|ALBU_HUMAN").is_decoy());
        assert!(TargetDecoy::from_protein_id("sp|P12345|ALBU_HUMAN").is_target());
    }
}
