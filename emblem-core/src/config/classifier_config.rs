//! Classifier configuration.

use serde::{Deserialize, Serialize};

/// Configuration for rule-set loading.
///
/// Entirely data-driven: there are no flags or env vars at this layer.
/// The registry applies the filter while loading built-in and custom
/// rule packs at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Rule-set names to disable (excluded from loading).
    #[serde(default)]
    pub disabled_rule_sets: Vec<String>,
    /// If set, only these rule-set names are loaded.
    pub enabled_only: Option<Vec<String>>,
    /// Directory with user rule packs (`*.toml`), loaded after builtins.
    pub custom_pack_dir: Option<String>,
}

impl ClassifierConfig {
    /// Check whether a rule set should be skipped under this config.
    pub fn is_disabled(&self, name: &str) -> bool {
        if let Some(ref enabled) = self.enabled_only {
            return !enabled.iter().any(|e| e == name);
        }
        self.disabled_rule_sets.iter().any(|d| d == name)
    }
}
