//! Static classification table for the Greek successor dynasties (Diadochi).
//!
//! Two encodings exist across Old World save versions:
//!
//! - Legacy: each successor state is its own top-level nation
//!   (`NATION_SELEUCUS`, `NATION_ANTIGONUS`, `NATION_PTOLEMY`).
//! - Modern: the player is `NATION_GREECE` and the successor state lives in a
//!   separate `Dynasty` attribute (`DYNASTY_SELEUCID`, ...).
//!
//! The table maps each legacy nation to the modern pair it corresponds to.

/// Parent civilization identifier used by the modern encoding.
pub const PARENT_NATION: &str = "NATION_GREECE";

/// One legacy-nation → modern-pair mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynastyRule {
    pub legacy_nation: &'static str,
    pub modern_nation: &'static str,
    pub modern_dynasty: &'static str,
}

/// The closed rule set. Read-only for the life of the process.
pub const RULES: &[DynastyRule] = &[
    DynastyRule {
        legacy_nation: "NATION_SELEUCUS",
        modern_nation: PARENT_NATION,
        modern_dynasty: "DYNASTY_SELEUCID",
    },
    DynastyRule {
        legacy_nation: "NATION_ANTIGONUS",
        modern_nation: PARENT_NATION,
        modern_dynasty: "DYNASTY_ANTIGONID",
    },
    DynastyRule {
        legacy_nation: "NATION_PTOLEMY",
        modern_nation: PARENT_NATION,
        modern_dynasty: "DYNASTY_PTOLEMY",
    },
];

/// Whether `nation` is one of the legacy successor-state identifiers.
pub fn is_legacy_nation(nation: &str) -> bool {
    RULES.iter().any(|r| r.legacy_nation == nation)
}

/// Whether `dynasty` is one of the modern successor-dynasty identifiers.
pub fn is_diadochi_dynasty(dynasty: &str) -> bool {
    RULES.iter().any(|r| r.modern_dynasty == dynasty)
}

/// Look up the modern `(nation, dynasty)` pair a legacy nation maps to.
pub fn expected_modern(legacy_nation: &str) -> Option<(&'static str, &'static str)> {
    RULES
        .iter()
        .find(|r| r.legacy_nation == legacy_nation)
        .map(|r| (r.modern_nation, r.modern_dynasty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seleucus_maps_to_seleucid() {
        assert_eq!(
            expected_modern("NATION_SELEUCUS"),
            Some(("NATION_GREECE", "DYNASTY_SELEUCID"))
        );
    }

    #[test]
    fn antigonus_maps_to_antigonid() {
        assert_eq!(
            expected_modern("NATION_ANTIGONUS"),
            Some(("NATION_GREECE", "DYNASTY_ANTIGONID"))
        );
    }

    #[test]
    fn ptolemy_maps_to_ptolemy_dynasty() {
        assert_eq!(
            expected_modern("NATION_PTOLEMY"),
            Some(("NATION_GREECE", "DYNASTY_PTOLEMY"))
        );
    }

    #[test]
    fn unknown_nation_has_no_mapping() {
        assert_eq!(expected_modern("NATION_ROME"), None);
        assert!(!is_legacy_nation("NATION_ROME"));
    }

    #[test]
    fn legacy_set_is_disjoint_from_parent() {
        // The per-record legacy/modern checks rely on this.
        assert!(!is_legacy_nation(PARENT_NATION));
    }

    #[test]
    fn dynasty_set_matches_rule_count() {
        assert_eq!(RULES.len(), 3);
        for rule in RULES {
            assert!(is_legacy_nation(rule.legacy_nation));
            assert!(is_diadochi_dynasty(rule.modern_dynasty));
            assert_eq!(rule.modern_nation, PARENT_NATION);
        }
    }
}
