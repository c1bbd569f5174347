//! Single-rule-set evaluation and the confidence combination rule.
//!
//! All three detections are pure functions over one rule set and one
//! context. Annotation evidence scores 20 per matched name, capped at 90
//! so import agreement can still push a combined score to 100; a lone
//! annotation never claims full certainty. Import evidence scores the
//! highest confidence among the patterns that matched. When both signals
//! name the same framework the scores add (capped at 100); when they
//! disagree the higher-confidence signal wins, imports winning exact ties.

use crate::engine::context::DetectionContext;
use crate::engine::types::{DetectionMethod, DetectionResult};

use super::loader::CompiledRuleSet;
use super::pattern::CompiledImportPattern;

/// Confidence awarded per matched annotation.
pub const ANNOTATION_WEIGHT: u8 = 20;
/// Cap for annotation-only evidence.
pub const ANNOTATION_CAP: u8 = 90;
/// Upper bound of the confidence scale.
pub const CONFIDENCE_MAX: u8 = 100;

/// Score annotation evidence for one rule set.
pub fn detect_from_annotations(rule_set: &CompiledRuleSet, ctx: &DetectionContext) -> DetectionResult {
    let mut matched: Vec<String> = ctx
        .annotations
        .iter()
        .filter(|name| rule_set.annotations.contains_key(name.as_str()))
        .cloned()
        .collect();
    if matched.is_empty() {
        return DetectionResult::none(DetectionMethod::Annotation);
    }
    // Sorted so the result never depends on hash iteration order.
    matched.sort_unstable();

    let confidence = (matched.len() as u32 * ANNOTATION_WEIGHT as u32).min(ANNOTATION_CAP as u32) as u8;
    DetectionResult {
        framework: Some(rule_set.name.clone()),
        confidence,
        method: DetectionMethod::Annotation,
        matched_annotations: matched,
        matched_imports: Vec::new(),
        ambiguous_annotations: Vec::new(),
    }
}

/// Score import evidence for one rule set.
///
/// Every module is tested against every pattern; the winning confidence
/// is the highest among matching patterns (earliest declared wins exact
/// ties), while `matched_imports` lists every module that matched any
/// pattern.
pub fn detect_from_imports(rule_set: &CompiledRuleSet, ctx: &DetectionContext) -> DetectionResult {
    let mut matched_modules: Vec<String> = Vec::new();
    let mut best: Option<&CompiledImportPattern> = None;

    for record in &ctx.imports {
        let mut hit = false;
        for pattern in &rule_set.import_patterns {
            if pattern.matches(&record.module) {
                hit = true;
                let better = match best {
                    None => true,
                    Some(current) => pattern.confidence > current.confidence,
                };
                if better {
                    best = Some(pattern);
                }
            }
        }
        if hit && !matched_modules.iter().any(|m| m == &record.module) {
            matched_modules.push(record.module.clone());
        }
    }

    match best {
        Some(pattern) if pattern.confidence > 0 => DetectionResult {
            framework: Some(pattern.framework.clone()),
            confidence: pattern.confidence,
            method: DetectionMethod::Import,
            matched_annotations: Vec::new(),
            matched_imports: matched_modules,
            ambiguous_annotations: Vec::new(),
        },
        _ => DetectionResult::none(DetectionMethod::Import),
    }
}

/// Run both detections against one rule set and combine them.
pub fn detect_with_context(rule_set: &CompiledRuleSet, ctx: &DetectionContext) -> DetectionResult {
    combine(
        detect_from_annotations(rule_set, ctx),
        detect_from_imports(rule_set, ctx),
    )
}

/// Combine annotation evidence with import evidence for one scope.
///
/// Agreement on a framework is rewarded additively, capped at 100, and
/// labeled `combined` with provenance merged from both sides. On
/// disagreement (or when one side is empty) the higher-confidence result
/// wins unchanged, the import side winning exact ties.
pub fn combine(annotation: DetectionResult, import: DetectionResult) -> DetectionResult {
    let agree = matches!(
        (&annotation.framework, &import.framework),
        (Some(a), Some(b)) if a == b
    );
    if agree {
        let confidence =
            (annotation.confidence as u32 + import.confidence as u32).min(CONFIDENCE_MAX as u32) as u8;
        return DetectionResult {
            framework: annotation.framework,
            confidence,
            method: DetectionMethod::Combined,
            matched_annotations: annotation.matched_annotations,
            matched_imports: import.matched_imports,
            ambiguous_annotations: Vec::new(),
        };
    }
    if annotation.framework.is_none() && import.framework.is_none() {
        return DetectionResult::none(DetectionMethod::Combined);
    }
    if annotation.confidence > import.confidence {
        annotation
    } else {
        import
    }
}
