//! Rule-set registry — built-in packs + user custom packs.
//!
//! Built-in packs are embedded at compile time via `include_str!`; user
//! packs are loaded from a configured directory at startup. Any load
//! failure is fatal and names the offending pattern and framework, so a
//! broken configuration is caught before classification traffic begins.

use std::path::Path;

use tracing::debug;

use emblem_core::{ClassifierConfig, DetectionError, Language};

use super::classifier::FrameworkClassifier;
use super::diagnostics::RegistryDiagnostics;
use super::loader::{self, CompiledRuleSet};

/// Registry of loaded rule sets for one language.
#[derive(Debug)]
pub struct RuleSetRegistry {
    language: Language,
    rule_sets: Vec<CompiledRuleSet>,
    diag: RegistryDiagnostics,
}

impl RuleSetRegistry {
    /// Registry with only the built-in rule sets for a language.
    pub fn with_builtins(language: Language) -> Result<Self, DetectionError> {
        Self::with_builtins_filtered(language, None)
    }

    /// Registry with built-in rule sets, applying an optional config filter.
    pub fn with_builtins_filtered(
        language: Language,
        config: Option<&ClassifierConfig>,
    ) -> Result<Self, DetectionError> {
        let mut rule_sets = Vec::new();
        let mut diag = RegistryDiagnostics::default();

        for (pack, toml_str) in builtin_packs() {
            let rule_set = loader::load_from_str(toml_str)?;
            if !rule_set.applies_to(language) {
                continue;
            }
            if let Some(cfg) = config {
                if cfg.is_disabled(&rule_set.name) {
                    diag.builtin_packs_skipped += 1;
                    continue;
                }
            }
            debug!(pack, framework = %rule_set.name, "loaded built-in rule set");
            diag.builtin_packs_loaded += 1;
            diag.total_annotations += rule_set.annotation_count();
            diag.total_patterns += rule_set.pattern_count();
            if let Some(ref version) = rule_set.version {
                diag.pack_versions.insert(rule_set.name.clone(), version.clone());
            }
            rule_sets.push(rule_set);
        }

        Ok(Self {
            language,
            rule_sets,
            diag,
        })
    }

    /// Registry with built-in rule sets plus user packs from a directory.
    ///
    /// User packs load after builtins, so a user pack claiming an already
    /// known annotation wins the flat-map lookups. A malformed user pack
    /// aborts the load.
    pub fn with_builtins_and_custom(
        language: Language,
        custom_dir: &Path,
        config: Option<&ClassifierConfig>,
    ) -> Result<Self, DetectionError> {
        let mut registry = Self::with_builtins_filtered(language, config)?;
        if !custom_dir.is_dir() {
            return Ok(registry);
        }

        let entries = std::fs::read_dir(custom_dir).map_err(|e| DetectionError::PackIo {
            path: custom_dir.display().to_string(),
            message: e.to_string(),
        })?;
        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        // Deterministic load order regardless of directory iteration.
        paths.sort();

        for path in paths {
            let rule_set = loader::load_from_file(&path)?;
            if !rule_set.applies_to(language) {
                continue;
            }
            if let Some(cfg) = config {
                if cfg.is_disabled(&rule_set.name) {
                    continue;
                }
            }
            debug!(path = %path.display(), framework = %rule_set.name, "loaded custom rule set");
            registry.diag.custom_packs_loaded += 1;
            registry.diag.total_annotations += rule_set.annotation_count();
            registry.diag.total_patterns += rule_set.pattern_count();
            if let Some(ref version) = rule_set.version {
                registry
                    .diag
                    .pack_versions
                    .insert(rule_set.name.clone(), version.clone());
            }
            registry.rule_sets.push(rule_set);
        }

        Ok(registry)
    }

    /// Parse a single pack from a TOML string (test/tooling entry point).
    pub fn load_single(toml_str: &str) -> Result<CompiledRuleSet, DetectionError> {
        loader::load_from_str(toml_str)
    }

    /// The language this registry serves.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of loaded rule sets.
    pub fn rule_set_count(&self) -> usize {
        self.rule_sets.len()
    }

    /// Get load-time diagnostics.
    pub fn diagnostics(&self) -> &RegistryDiagnostics {
        &self.diag
    }

    /// Consume the registry and return the rule sets.
    pub fn into_rule_sets(self) -> Vec<CompiledRuleSet> {
        self.rule_sets
    }

    /// Consume the registry and build the aggregating classifier.
    pub fn into_classifier(self) -> FrameworkClassifier {
        debug!("{}", self.diag.summary());
        FrameworkClassifier::with_rule_sets(self.language, self.rule_sets)
    }
}

/// Built-in rule packs embedded at compile time.
fn builtin_packs() -> Vec<(&'static str, &'static str)> {
    vec![
        // --- Java ---
        ("spring_boot", include_str!("packs/spring_boot.toml")),
        ("junit", include_str!("packs/junit.toml")),
        ("lombok", include_str!("packs/lombok.toml")),
        ("hibernate", include_str!("packs/hibernate.toml")),
        // --- TypeScript / JavaScript ---
        ("angular", include_str!("packs/angular.toml")),
        ("nestjs", include_str!("packs/nestjs.toml")),
        ("typeorm", include_str!("packs/typeorm.toml")),
        // --- Python ---
        ("flask", include_str!("packs/flask.toml")),
        ("django", include_str!("packs/django.toml")),
        ("fastapi", include_str!("packs/fastapi.toml")),
        ("pytest", include_str!("packs/pytest.toml")),
    ]
}
