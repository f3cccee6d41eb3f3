//! Peptide sequence canonicalization.
//!
//! Every search engine annotates modifications differently, so sequences are
//! reduced to a shared canonical form before they can be compared across
//! engines: isoleucine folded into leucine and every modification annotation
//! removed. The rewrites are literal substring replacements kept in explicit
//! ordered tables so the ordering constraints stay visible.

/// Ordered rewrite rules for PEAKS-style numeric mass deltas.
///
/// # Invariants
/// * Rule 1 must run before rule 2: the N-terminal acetylation on alanine is
///   rewritten to the `Z` placeholder first, otherwise the generic
///   `(+42.01)` strip swallows it and the two cases become
///   indistinguishable.
pub const PEAKS_MASS_DELTA_RULES: [(&str, &str); 4] = [
    ("A(+42.01)", "Z"),
    ("(+42.01)", ""),
    ("M(+15.99)", "M(ox)"),
    ("C(+57.02)", "C"),
];

/// Short-code modification tags removed during canonicalization.
///
/// The tags are mutually non-overlapping substrings, so order among them does
/// not matter. `C(ca)` is replaced as a unit so the residue is retained.
pub const MODIFICATION_TAG_RULES: [(&str, &str); 8] = [
    ("(ox)", ""),
    ("(de)", ""),
    ("C(ca)", "C"),
    ("Z", ""),
    ("(ac)", ""),
    ("(py)", ""),
    ("(ph)", ""),
    ("(tm)", ""),
];

fn apply_rules(sequence: &str, rules: &[(&str, &str)]) -> String {
    rules
        .iter()
        .fold(sequence.to_string(), |seq, (from, to)| seq.replace(from, to))
}

/// Rewrite PEAKS numeric mass deltas into the short-code tag vocabulary
/// understood by [`strip_modification_tags`].
pub fn map_peaks_modifications(sequence: &str) -> String {
    apply_rules(sequence, &PEAKS_MASS_DELTA_RULES)
}

/// Remove every short-code modification tag (and the acetylation
/// placeholder) from a sequence.
pub fn strip_modification_tags(sequence: &str) -> String {
    apply_rules(sequence, &MODIFICATION_TAG_RULES)
}

/// Fold isoleucine into leucine. The two residues are isobaric and most
/// engines cannot distinguish them.
pub fn merge_isoleucine(sequence: &str) -> String {
    sequence.replace('I', "L")
}

/// Full canonicalization: I/L merge followed by tag stripping.
///
/// The merge and the strip commute (no tag contains a bare `I`), and the
/// composition is idempotent.
pub fn canonicalize(sequence: &str) -> String {
    strip_modification_tags(&merge_isoleucine(sequence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peaks_mass_delta_mapping() {
        assert_eq!(map_peaks_modifications("A(+42.01)BC(+57.02)"), "ZBC");
        assert_eq!(map_peaks_modifications("M(+15.99)PEPTIDE"), "M(ox)PEPTIDE");
        // Generic +42.01 on a non-alanine residue is stripped, not
        // placeholder-mapped.
        assert_eq!(map_peaks_modifications("S(+42.01)PEPTIDE"), "SPEPTIDE");
    }

    #[test]
    fn test_peaks_rule_order_is_not_shadowed() {
        // If the generic strip ran first this would yield "A" and the
        // placeholder would never appear.
        assert_eq!(map_peaks_modifications("A(+42.01)"), "Z");
    }

    #[test]
    fn test_strip_modification_tags() {
        assert_eq!(strip_modification_tags("M(ox)PEPTIDE"), "MPEPTIDE");
        assert_eq!(strip_modification_tags("C(ca)AT"), "CAT");
        assert_eq!(strip_modification_tags("ZPEPTIDE"), "PEPTIDE");
        assert_eq!(
            strip_modification_tags("S(ph)T(ac)Y(py)K(tm)N(de)"),
            "STYKN"
        );
    }

    #[test]
    fn test_canonicalize_merges_isoleucine() {
        assert_eq!(canonicalize("PEPTIDE"), "PEPTLDE");
        assert_eq!(canonicalize("ISOLEUCINE"), "LSOLEUCLNE");
    }

    #[test]
    fn test_canonicalize_is_a_noop_on_canonical_input() {
        assert_eq!(canonicalize("PEPTLDE"), "PEPTLDE");
        assert_eq!(canonicalize("LLAMA"), "LLAMA");
    }

    #[test]
    fn test_canonicalize_peaks_chain() {
        let mapped = map_peaks_modifications("A(+42.01)BC(+57.02)");
        assert_eq!(canonicalize(&mapped), "BC");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        for raw in [
            "PEPTIDE",
            "M(ox)PEPTIDE",
            "C(ca)AT",
            "ZIM(ox)S(ph)",
            "LLAMA",
        ] {
            let once = canonicalize(raw);
            assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn test_canonical_alphabet_closure() {
        for raw in ["M(ox)PEPTIDE", "ZC(ca)IS(ph)T(ac)", "N(de)K(tm)Y(py)"] {
            let canonical = canonicalize(raw);
            assert!(
                canonical
                    .chars()
                    .all(|c| c.is_ascii_uppercase() && c != 'I' && c != 'Z'),
                "non-canonical residue in {:?}",
                canonical
            );
        }
    }
}
