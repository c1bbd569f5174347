//! Core types for the rule-set definition system.
//!
//! These serde types define the TOML schema for rule packs.

use serde::{Deserialize, Serialize};

/// Top-level rule pack definition (one per TOML file).
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RuleSetSpec {
    /// Framework metadata.
    pub framework: RuleSetMeta,
    /// Annotation table.
    #[serde(default)]
    pub annotations: Vec<AnnotationDef>,
    /// Import patterns, in priority-declaration order.
    #[serde(default)]
    pub import_patterns: Vec<ImportPatternDef>,
}

/// Rule-set metadata — framework name, languages, pack version.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RuleSetMeta {
    /// Framework name this rule set claims (e.g., "Spring Boot").
    pub name: String,
    /// Display name for UI/reporting.
    pub display_name: Option<String>,
    /// Languages this rule set targets.
    pub languages: Vec<String>,
    /// Pack version string (e.g., "1.0.0").
    pub version: Option<String>,
}

/// One annotation mapping within a rule pack.
///
/// The framework for every entry is the owning pack's name; a pack only
/// ever claims its own framework. Name collisions across packs are legal
/// and resolved at aggregation time.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AnnotationDef {
    /// Bare annotation name as it appears in source (sigils stripped).
    pub name: String,
    /// Role category (maps to AnnotationCategory).
    pub category: String,
}

/// One import-path pattern with its confidence weight.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ImportPatternDef {
    /// Dotted/slashed module path; each `*` matches zero or more characters.
    pub pattern: String,
    /// Confidence score (0-100).
    #[serde(default = "default_confidence")]
    pub confidence: u32,
}

fn default_confidence() -> u32 {
    80
}

/// Generate a JSON Schema for the `RuleSetSpec` type.
///
/// This schema can be used by custom pack authors to validate their TOML files.
pub fn generate_json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(RuleSetSpec)
}
