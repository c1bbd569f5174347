//! Annotation categories and the persisted annotation record.

use serde::{Deserialize, Serialize};

/// The 15 annotation categories.
///
/// A category describes the *role* an annotation plays inside its
/// framework (dependency injection, web routing, persistence mapping, …),
/// independent of which framework claimed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum AnnotationCategory {
    #[default]
    Component,
    Injection,
    Web,
    Persistence,
    Configuration,
    Testing,
    CodeGen,
    Lifecycle,
    Validation,
    Serialization,
    Module,
    Routing,
    State,
    Scheduling,
    Security,
}

impl AnnotationCategory {
    /// All 15 categories.
    pub fn all() -> &'static [AnnotationCategory] {
        &[
            Self::Component, Self::Injection, Self::Web, Self::Persistence,
            Self::Configuration, Self::Testing, Self::CodeGen, Self::Lifecycle,
            Self::Validation, Self::Serialization, Self::Module, Self::Routing,
            Self::State, Self::Scheduling, Self::Security,
        ]
    }

    /// Category name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Injection => "injection",
            Self::Web => "web",
            Self::Persistence => "persistence",
            Self::Configuration => "configuration",
            Self::Testing => "testing",
            Self::CodeGen => "code_gen",
            Self::Lifecycle => "lifecycle",
            Self::Validation => "validation",
            Self::Serialization => "serialization",
            Self::Module => "module",
            Self::Routing => "routing",
            Self::State => "state",
            Self::Scheduling => "scheduling",
            Self::Security => "security",
        }
    }

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "component" => Some(Self::Component),
            "injection" => Some(Self::Injection),
            "web" => Some(Self::Web),
            "persistence" => Some(Self::Persistence),
            "configuration" => Some(Self::Configuration),
            "testing" => Some(Self::Testing),
            "code_gen" => Some(Self::CodeGen),
            "lifecycle" => Some(Self::Lifecycle),
            "validation" => Some(Self::Validation),
            "serialization" => Some(Self::Serialization),
            "module" => Some(Self::Module),
            "routing" => Some(Self::Routing),
            "state" => Some(Self::State),
            "scheduling" => Some(Self::Scheduling),
            "security" => Some(Self::Security),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnnotationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The record shape attached to a code-graph node for one matched
/// annotation. Produced on demand by the classifier's flat maps and
/// persisted by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationInfo {
    pub name: String,
    pub framework: String,
    pub category: AnnotationCategory,
}
