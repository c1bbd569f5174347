//! Source languages with framework rule-set support.

use serde::{Deserialize, Serialize};

/// Languages the classifier ships rule sets for.
///
/// One classifier instance exists per language; a rule pack declares the
/// languages it applies to and is only loaded into matching classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    TypeScript,
    JavaScript,
    Python,
}

impl Language {
    /// All supported languages.
    pub fn all() -> &'static [Language] {
        &[Self::Java, Self::TypeScript, Self::JavaScript, Self::Python]
    }

    /// Language name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Python => "python",
        }
    }

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "java" => Some(Self::Java),
            "typescript" => Some(Self::TypeScript),
            "javascript" => Some(Self::JavaScript),
            "python" => Some(Self::Python),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
