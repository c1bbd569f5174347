//! Core types for the classification engine.

use serde::{Deserialize, Serialize};

/// How a detection was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Annotation/decorator names alone.
    Annotation,
    /// Import paths alone.
    Import,
    /// Annotation and import evidence agreed on one framework.
    Combined,
}

impl DetectionMethod {
    /// Method name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Annotation => "annotation",
            Self::Import => "import",
            Self::Combined => "combined",
        }
    }
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one classification call — the universal output type.
///
/// Invariant: `framework` is `None` exactly when `confidence` is 0.
/// Provenance lists are deterministic: matched annotations are sorted,
/// matched imports keep first-occurrence order with duplicates removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Winning framework, if any.
    pub framework: Option<String>,
    /// Ordinal certainty score in [0,100]; not a probability.
    pub confidence: u8,
    /// Which signal(s) produced the result.
    pub method: DetectionMethod,
    /// Annotation names that drove the decision.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_annotations: Vec<String>,
    /// Modules that matched any import pattern, not just the winning one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_imports: Vec<String>,
    /// Matched annotations claimed by more than one registered rule set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ambiguous_annotations: Vec<String>,
}

impl DetectionResult {
    /// The universal empty result.
    pub fn none(method: DetectionMethod) -> Self {
        Self {
            framework: None,
            confidence: 0,
            method,
            matched_annotations: Vec::new(),
            matched_imports: Vec::new(),
            ambiguous_annotations: Vec::new(),
        }
    }

    /// Whether anything was detected.
    pub fn is_detected(&self) -> bool {
        self.framework.is_some()
    }
}
