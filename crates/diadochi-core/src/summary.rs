//! Batch-level aggregation across analyzed saves.

use crate::analysis::SaveAnalysis;

/// Counts across all successfully analyzed saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub with_diadochi: usize,
    pub legacy: usize,
    pub modern: usize,
}

/// Which encoding(s) the batch showed. `Both` signals a format change across
/// game versions, the condition this tool exists to detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVerdict {
    Neither,
    LegacyOnly,
    ModernOnly,
    Both,
}

impl BatchSummary {
    pub fn of(analyses: &[SaveAnalysis]) -> Self {
        Self {
            total: analyses.len(),
            with_diadochi: analyses.iter().filter(|a| a.has_diadochi).count(),
            legacy: analyses.iter().filter(|a| a.legacy_form_seen).count(),
            modern: analyses.iter().filter(|a| a.modern_form_seen).count(),
        }
    }

    pub fn verdict(&self) -> FormatVerdict {
        match (self.legacy > 0, self.modern > 0) {
            (true, true) => FormatVerdict::Both,
            (true, false) => FormatVerdict::LegacyOnly,
            (false, true) => FormatVerdict::ModernOnly,
            (false, false) => FormatVerdict::Neither,
        }
    }
}
