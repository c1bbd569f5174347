//! Import-pattern compilation and matching.
//!
//! A pattern without `*` matches a module path only on exact equality.
//! A pattern containing `*` compiles to an anchored regex with every
//! literal escaped and each `*` replaced by `.*`, so
//! `org.springframework.boot.*` matches
//! `org.springframework.boot.autoconfigure.SpringBootApplication` but not
//! `org.springframework.bootstrap.X`. Matching is case-sensitive and
//! never a substring search.

use emblem_core::DetectionError;
use regex::Regex;

/// A single compiled import pattern.
///
/// Compilation happens once, when the owning rule set is constructed;
/// the match path does no parsing and no allocation.
#[derive(Debug, Clone)]
pub struct CompiledImportPattern {
    /// Pattern text as authored in the pack.
    pub raw: String,
    /// Confidence awarded when this pattern matches.
    pub confidence: u8,
    /// Framework the owning rule set claims.
    pub framework: String,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    Exact,
    Wildcard(Regex),
}

impl CompiledImportPattern {
    /// Compile a pattern, validating it eagerly so a broken pack fails at
    /// registration time rather than degrading matches later.
    pub fn compile(pattern: &str, confidence: u32, framework: &str) -> Result<Self, DetectionError> {
        if pattern.is_empty() {
            return Err(DetectionError::InvalidPattern {
                framework: framework.to_string(),
                pattern: pattern.to_string(),
                reason: "pattern is empty".to_string(),
            });
        }
        if pattern.chars().any(char::is_whitespace) {
            return Err(DetectionError::InvalidPattern {
                framework: framework.to_string(),
                pattern: pattern.to_string(),
                reason: "pattern contains whitespace".to_string(),
            });
        }
        if confidence > 100 {
            return Err(DetectionError::InvalidConfidence {
                framework: framework.to_string(),
                pattern: pattern.to_string(),
                confidence,
            });
        }

        let matcher = if pattern.contains('*') {
            let regex = wildcard_regex(pattern).map_err(|e| DetectionError::InvalidPattern {
                framework: framework.to_string(),
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
            Matcher::Wildcard(regex)
        } else {
            Matcher::Exact
        };

        Ok(Self {
            raw: pattern.to_string(),
            confidence: confidence as u8,
            framework: framework.to_string(),
            matcher,
        })
    }

    /// Test a concrete module path against this pattern.
    pub fn matches(&self, module: &str) -> bool {
        match &self.matcher {
            Matcher::Exact => module == self.raw,
            Matcher::Wildcard(regex) => regex.is_match(module),
        }
    }

    /// Whether the pattern uses wildcard matching.
    pub fn is_wildcard(&self) -> bool {
        matches!(self.matcher, Matcher::Wildcard(_))
    }
}

/// Build the anchored regex for a wildcard pattern: literal characters
/// escaped, each `*` replaced by "zero or more characters".
fn wildcard_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push('^');
    for (i, literal) in pattern.split('*').enumerate() {
        if i > 0 {
            source.push_str(".*");
        }
        source.push_str(&regex::escape(literal));
    }
    source.push('$');
    Regex::new(&source)
}
