//! Per-language aggregating classifier.
//!
//! Owns the registered rule sets for one source language plus two derived
//! flat maps (`annotation → framework`, `annotation → category`) for O(1)
//! single-annotation lookups. Scored queries evaluate every rule set
//! independently and keep the strictly best answer; exact ties resolve to
//! the first-registered rule set.
//!
//! Reads take `&self` and the type is `Send + Sync`; registration takes
//! `&mut self` and rebuilds the flat maps in full. Registration happens
//! during startup configuration — callers that mutate at runtime wrap the
//! classifier in their own lock.

use emblem_core::{AnnotationCategory, AnnotationInfo, FxHashMap, Language};

use crate::engine::context::DetectionContext;
use crate::engine::types::{DetectionMethod, DetectionResult};

use super::diagnostics::{ClassifierStatistics, RuleSetStatistics};
use super::evaluator;
use super::loader::CompiledRuleSet;

/// Aggregating classifier for one source language.
#[derive(Debug)]
pub struct FrameworkClassifier {
    language: Language,
    rule_sets: Vec<CompiledRuleSet>,
    /// annotation → framework; last-registered wins colliding names.
    annotation_frameworks: FxHashMap<String, String>,
    /// annotation → category; same collision rule.
    annotation_categories: FxHashMap<String, AnnotationCategory>,
}

impl FrameworkClassifier {
    /// Empty classifier for one language.
    pub fn new(language: Language) -> Self {
        Self::with_rule_sets(language, Vec::new())
    }

    /// Classifier pre-populated with rule sets (single flat-map build).
    pub fn with_rule_sets(language: Language, rule_sets: Vec<CompiledRuleSet>) -> Self {
        let mut classifier = Self {
            language,
            rule_sets,
            annotation_frameworks: FxHashMap::default(),
            annotation_categories: FxHashMap::default(),
        };
        classifier.rebuild_lookup();
        classifier
    }

    /// The language this classifier serves.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of registered rule sets.
    pub fn rule_set_count(&self) -> usize {
        self.rule_sets.len()
    }

    /// Registered rule-set names, in registration order.
    pub fn rule_set_names(&self) -> Vec<&str> {
        self.rule_sets.iter().map(|rs| rs.name.as_str()).collect()
    }

    /// Register a rule set. Triggers a full flat-map rebuild.
    pub fn add_rule_set(&mut self, rule_set: CompiledRuleSet) {
        self.rule_sets.push(rule_set);
        self.rebuild_lookup();
    }

    /// Remove a rule set by framework name. Returns whether one was found.
    /// Removing a name that was never registered is not an error.
    pub fn remove_rule_set(&mut self, name: &str) -> bool {
        let before = self.rule_sets.len();
        self.rule_sets.retain(|rs| rs.name != name);
        let removed = self.rule_sets.len() != before;
        if removed {
            self.rebuild_lookup();
        }
        removed
    }

    /// Full rebuild of both flat maps. Never patched incrementally, so a
    /// removed rule set cannot leave stale entries behind when another
    /// set claims the same annotation name.
    fn rebuild_lookup(&mut self) {
        self.annotation_frameworks.clear();
        self.annotation_categories.clear();
        for rule_set in &self.rule_sets {
            for (annotation, category) in &rule_set.annotations {
                self.annotation_frameworks
                    .insert(annotation.clone(), rule_set.name.clone());
                self.annotation_categories.insert(annotation.clone(), *category);
            }
        }
    }

    // ---- Legacy flat-map API (no scoring) ----

    /// O(1) framework lookup for a bare annotation name.
    pub fn detect_framework(&self, annotation: &str) -> Option<&str> {
        self.annotation_frameworks.get(annotation).map(String::as_str)
    }

    /// O(1) category lookup for a bare annotation name.
    pub fn categorize_annotation(&self, annotation: &str) -> Option<AnnotationCategory> {
        self.annotation_categories.get(annotation).copied()
    }

    /// Assemble the record the storage collaborator persists for one
    /// matched annotation.
    pub fn annotation_info(&self, annotation: &str) -> Option<AnnotationInfo> {
        let framework = self.annotation_frameworks.get(annotation)?;
        let category = *self.annotation_categories.get(annotation)?;
        Some(AnnotationInfo {
            name: annotation.to_string(),
            framework: framework.clone(),
            category,
        })
    }

    // ---- Scored API ----

    /// Best annotation-only detection across all rule sets.
    pub fn from_annotations(&self, ctx: &DetectionContext) -> DetectionResult {
        self.best_result(ctx, DetectionMethod::Annotation, evaluator::detect_from_annotations)
    }

    /// Best import-only detection across all rule sets.
    pub fn from_imports(&self, ctx: &DetectionContext) -> DetectionResult {
        self.best_result(ctx, DetectionMethod::Import, evaluator::detect_from_imports)
    }

    /// Best combined detection across all rule sets, with ambiguity
    /// provenance: matched annotations claimed by two or more rule sets.
    pub fn with_context(&self, ctx: &DetectionContext) -> DetectionResult {
        let mut result = self.best_result(ctx, DetectionMethod::Combined, evaluator::detect_with_context);
        result.ambiguous_annotations = self.ambiguous_annotations(ctx);
        result
    }

    /// Evaluate every rule set, discard empty results, keep the strictly
    /// highest confidence. First-registered wins exact ties.
    fn best_result(
        &self,
        ctx: &DetectionContext,
        method: DetectionMethod,
        eval: fn(&CompiledRuleSet, &DetectionContext) -> DetectionResult,
    ) -> DetectionResult {
        let mut best: Option<DetectionResult> = None;
        for rule_set in &self.rule_sets {
            let result = eval(rule_set, ctx);
            if result.confidence == 0 {
                continue;
            }
            let better = match &best {
                None => true,
                Some(current) => result.confidence > current.confidence,
            };
            if better {
                best = Some(result);
            }
        }
        best.unwrap_or_else(|| DetectionResult::none(method))
    }

    fn ambiguous_annotations(&self, ctx: &DetectionContext) -> Vec<String> {
        let mut ambiguous: Vec<String> = ctx
            .annotations
            .iter()
            .filter(|name| {
                self.rule_sets
                    .iter()
                    .filter(|rs| rs.annotations.contains_key(name.as_str()))
                    .take(2)
                    .count()
                    == 2
            })
            .cloned()
            .collect();
        ambiguous.sort_unstable();
        ambiguous
    }

    // ---- Diagnostics ----

    /// Per-rule-set counts plus grand totals, for tooling queries.
    pub fn statistics(&self) -> ClassifierStatistics {
        let rule_sets: Vec<RuleSetStatistics> = self
            .rule_sets
            .iter()
            .map(|rs| RuleSetStatistics {
                name: rs.name.clone(),
                annotation_count: rs.annotation_count(),
                category_count: rs.category_count(),
                pattern_count: rs.pattern_count(),
            })
            .collect();

        let mut categories = emblem_core::FxHashSet::default();
        for rule_set in &self.rule_sets {
            categories.extend(rule_set.annotations.values().copied());
        }

        ClassifierStatistics {
            language: self.language.name().to_string(),
            total_annotations: rule_sets.iter().map(|s| s.annotation_count).sum(),
            total_categories: categories.len(),
            total_patterns: rule_sets.iter().map(|s| s.pattern_count).sum(),
            rule_sets,
        }
    }
}
