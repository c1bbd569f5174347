//! Rule-pack loading — TOML parsing into validated, compiled rule sets.
//!
//! Validation is strict: an unknown language or category, a duplicate
//! annotation, or a malformed import pattern rejects the whole pack with
//! an error naming the offending entry and its owning framework.

use std::path::Path;

use emblem_core::{AnnotationCategory, DetectionError, FxHashMap, FxHashSet, Language};

use super::pattern::CompiledImportPattern;
use super::types::RuleSetSpec;

/// A fully validated, immutable rule set for one framework.
///
/// Plain data — no behavior beyond lookups. Constructed only by this
/// loader, so every import pattern is pre-compiled and carries
/// `framework == name`.
#[derive(Debug, Clone)]
pub struct CompiledRuleSet {
    /// Framework name this rule set claims.
    pub name: String,
    /// Display name for UI/reporting.
    pub display_name: Option<String>,
    /// Languages the rule set applies to.
    pub languages: Vec<Language>,
    /// Pack version string.
    pub version: Option<String>,
    /// Annotation name → role category.
    pub annotations: FxHashMap<String, AnnotationCategory>,
    /// Import patterns in declaration order; earlier wins exact ties.
    pub import_patterns: Vec<CompiledImportPattern>,
}

impl CompiledRuleSet {
    /// Whether this rule set targets the given language.
    pub fn applies_to(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// Number of distinct annotations.
    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    /// Number of distinct categories across the annotation table.
    pub fn category_count(&self) -> usize {
        let categories: FxHashSet<AnnotationCategory> = self.annotations.values().copied().collect();
        categories.len()
    }

    /// Number of import patterns.
    pub fn pattern_count(&self) -> usize {
        self.import_patterns.len()
    }
}

/// Parse and validate one rule pack from a TOML string.
pub fn load_from_str(toml_str: &str) -> Result<CompiledRuleSet, DetectionError> {
    let spec: RuleSetSpec = toml::from_str(toml_str).map_err(|e| DetectionError::PackParse {
        message: e.to_string(),
    })?;
    compile(spec)
}

/// Load a rule pack from a TOML file.
pub fn load_from_file(path: &Path) -> Result<CompiledRuleSet, DetectionError> {
    let text = std::fs::read_to_string(path).map_err(|e| DetectionError::PackIo {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    load_from_str(&text)
}

/// Validate a spec and pre-compile its import patterns.
pub fn compile(spec: RuleSetSpec) -> Result<CompiledRuleSet, DetectionError> {
    let name = spec.framework.name;
    if name.trim().is_empty() {
        return Err(DetectionError::PackParse {
            message: "rule set name is empty".to_string(),
        });
    }
    if spec.framework.languages.is_empty() {
        return Err(DetectionError::PackParse {
            message: format!("rule set '{name}' declares no languages"),
        });
    }

    let mut languages = Vec::with_capacity(spec.framework.languages.len());
    for lang in &spec.framework.languages {
        let parsed = Language::parse_str(lang).ok_or_else(|| DetectionError::UnknownLanguage {
            framework: name.clone(),
            language: lang.clone(),
        })?;
        if !languages.contains(&parsed) {
            languages.push(parsed);
        }
    }

    let mut annotations = FxHashMap::default();
    for def in &spec.annotations {
        let category =
            AnnotationCategory::parse_str(&def.category).ok_or_else(|| DetectionError::UnknownCategory {
                framework: name.clone(),
                annotation: def.name.clone(),
                category: def.category.clone(),
            })?;
        if annotations.insert(def.name.clone(), category).is_some() {
            return Err(DetectionError::DuplicateAnnotation {
                framework: name.clone(),
                annotation: def.name.clone(),
            });
        }
    }

    let mut import_patterns = Vec::with_capacity(spec.import_patterns.len());
    for def in &spec.import_patterns {
        import_patterns.push(CompiledImportPattern::compile(&def.pattern, def.confidence, &name)?);
    }

    Ok(CompiledRuleSet {
        name,
        display_name: spec.framework.display_name,
        languages,
        version: spec.framework.version,
        annotations,
        import_patterns,
    })
}
