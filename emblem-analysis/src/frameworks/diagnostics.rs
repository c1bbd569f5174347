//! Registry diagnostics and per-rule-set statistics.

use std::collections::HashMap;

use serde::Serialize;

/// Load-time diagnostics from the rule-set registry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistryDiagnostics {
    pub builtin_packs_loaded: usize,
    /// Built-in packs excluded by the config filter.
    pub builtin_packs_skipped: usize,
    pub custom_packs_loaded: usize,
    pub total_annotations: usize,
    pub total_patterns: usize,
    pub pack_versions: HashMap<String, String>,
}

impl RegistryDiagnostics {
    /// Merge another diagnostics into this one (additive).
    pub fn merge(&mut self, other: &RegistryDiagnostics) {
        self.builtin_packs_loaded += other.builtin_packs_loaded;
        self.builtin_packs_skipped += other.builtin_packs_skipped;
        self.custom_packs_loaded += other.custom_packs_loaded;
        self.total_annotations += other.total_annotations;
        self.total_patterns += other.total_patterns;
        for (name, version) in &other.pack_versions {
            self.pack_versions
                .entry(name.clone())
                .or_insert_with(|| version.clone());
        }
    }

    /// One-line summary for log output.
    pub fn summary(&self) -> String {
        format!(
            "[emblem] rule sets: {} loaded ({} builtin, {} custom), {} skipped, \
             {} annotations, {} import patterns",
            self.builtin_packs_loaded + self.custom_packs_loaded,
            self.builtin_packs_loaded,
            self.custom_packs_loaded,
            self.builtin_packs_skipped,
            self.total_annotations,
            self.total_patterns,
        )
    }
}

/// Counts for one registered rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSetStatistics {
    pub name: String,
    pub annotation_count: usize,
    pub category_count: usize,
    pub pattern_count: usize,
}

/// Statistics across all rule sets of one classifier — the diagnostics
/// query surfaced to tooling. Not used for classification.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifierStatistics {
    pub language: String,
    pub rule_sets: Vec<RuleSetStatistics>,
    pub total_annotations: usize,
    /// Distinct categories across all rule sets.
    pub total_categories: usize,
    pub total_patterns: usize,
}
