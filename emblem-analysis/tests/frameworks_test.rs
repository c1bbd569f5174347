//! Integration tests for rule-pack loading and validation.

use emblem_core::errors::error_code;
use emblem_core::{AnnotationCategory, ClassifierConfig, DetectionError, EmblemErrorCode, Language};

use emblem_analysis::frameworks::registry::RuleSetRegistry;
use emblem_analysis::frameworks::types::generate_json_schema;

#[test]
fn test_builtin_packs_load_for_every_language() {
    for language in Language::all() {
        let registry = RuleSetRegistry::with_builtins(*language).expect("builtins should load");
        assert!(
            registry.rule_set_count() >= 3,
            "Expected at least 3 built-in rule sets for {language}, got {}",
            registry.rule_set_count()
        );
    }
}

#[test]
fn test_builtin_pack_counts_per_language() {
    let java = RuleSetRegistry::with_builtins(Language::Java).expect("java builtins");
    assert_eq!(java.rule_set_count(), 4, "Spring Boot, JUnit, Lombok, Hibernate");

    let ts = RuleSetRegistry::with_builtins(Language::TypeScript).expect("ts builtins");
    assert_eq!(ts.rule_set_count(), 3, "Angular, NestJS, TypeORM");

    let js = RuleSetRegistry::with_builtins(Language::JavaScript).expect("js builtins");
    assert_eq!(js.rule_set_count(), 3, "TS ecosystem packs declare javascript too");

    let py = RuleSetRegistry::with_builtins(Language::Python).expect("py builtins");
    assert_eq!(py.rule_set_count(), 4, "Flask, Django, FastAPI, pytest");
}

#[test]
fn test_single_pack_loads_from_toml() {
    let toml = r#"
[framework]
name = "Test Framework"
display_name = "Test"
languages = ["typescript"]
version = "1.0.0"

[[annotations]]
name = "Widget"
category = "component"

[[annotations]]
name = "Wire"
category = "injection"

[[import_patterns]]
pattern = "@testfw/*"
confidence = 92
"#;

    let pack = RuleSetRegistry::load_single(toml).expect("should parse");
    assert_eq!(pack.name, "Test Framework");
    assert_eq!(pack.display_name.as_deref(), Some("Test"));
    assert_eq!(pack.version.as_deref(), Some("1.0.0"));
    assert_eq!(pack.languages, vec![Language::TypeScript]);
    assert_eq!(pack.annotation_count(), 2);
    assert_eq!(pack.category_count(), 2);
    assert_eq!(pack.pattern_count(), 1);
    assert_eq!(pack.annotations.get("Widget"), Some(&AnnotationCategory::Component));
    assert!(pack.import_patterns[0].matches("@testfw/core"));
    assert_eq!(pack.import_patterns[0].confidence, 92);
    assert_eq!(pack.import_patterns[0].framework, "Test Framework");
}

#[test]
fn test_default_confidence_is_80() {
    let toml = r#"
[framework]
name = "Defaulted"
languages = ["python"]

[[import_patterns]]
pattern = "defaulted"
"#;

    let pack = RuleSetRegistry::load_single(toml).expect("should parse");
    assert_eq!(pack.import_patterns[0].confidence, 80);
}

#[test]
fn test_empty_pattern_fails_fast_naming_framework() {
    let toml = r#"
[framework]
name = "Broken Pack"
languages = ["java"]

[[import_patterns]]
pattern = ""
confidence = 90
"#;

    let err = RuleSetRegistry::load_single(toml).expect_err("empty pattern must be rejected");
    assert!(matches!(err, DetectionError::InvalidPattern { .. }));
    assert_eq!(err.error_code(), error_code::INVALID_PATTERN);
    assert!(err.to_string().contains("Broken Pack"));
}

#[test]
fn test_out_of_range_confidence_fails_fast() {
    let toml = r#"
[framework]
name = "Overconfident"
languages = ["java"]

[[import_patterns]]
pattern = "over.*"
confidence = 150
"#;

    let err = RuleSetRegistry::load_single(toml).expect_err("confidence > 100 must be rejected");
    assert!(matches!(err, DetectionError::InvalidConfidence { confidence: 150, .. }));
    assert!(err.to_string().contains("over.*"));
}

#[test]
fn test_unknown_category_fails_fast() {
    let toml = r#"
[framework]
name = "Miscategorized"
languages = ["python"]

[[annotations]]
name = "thing"
category = "does_not_exist"
"#;

    let err = RuleSetRegistry::load_single(toml).expect_err("unknown category must be rejected");
    assert!(matches!(err, DetectionError::UnknownCategory { .. }));
    assert!(err.to_string().contains("does_not_exist"));
    assert!(err.to_string().contains("Miscategorized"));
}

#[test]
fn test_unknown_language_fails_fast() {
    let toml = r#"
[framework]
name = "Alien"
languages = ["klingon"]
"#;

    let err = RuleSetRegistry::load_single(toml).expect_err("unknown language must be rejected");
    assert!(matches!(err, DetectionError::UnknownLanguage { .. }));
    assert!(err.to_string().contains("klingon"));
}

#[test]
fn test_missing_languages_fails_fast() {
    let toml = r#"
[framework]
name = "Nowhere"
languages = []
"#;

    let err = RuleSetRegistry::load_single(toml).expect_err("empty languages must be rejected");
    assert!(matches!(err, DetectionError::PackParse { .. }));
}

#[test]
fn test_duplicate_annotation_fails_fast() {
    let toml = r#"
[framework]
name = "Repeats"
languages = ["java"]

[[annotations]]
name = "Twice"
category = "component"

[[annotations]]
name = "Twice"
category = "injection"
"#;

    let err = RuleSetRegistry::load_single(toml).expect_err("duplicate annotation must be rejected");
    assert!(matches!(err, DetectionError::DuplicateAnnotation { .. }));
    assert!(err.to_string().contains("Twice"));
}

#[test]
fn test_malformed_toml_fails_fast() {
    let err = RuleSetRegistry::load_single("[framework\nname =").expect_err("bad TOML");
    assert!(matches!(err, DetectionError::PackParse { .. }));
    assert_eq!(err.error_code(), error_code::PACK_PARSE);
}

#[test]
fn test_config_disables_builtin_pack() {
    let config = ClassifierConfig {
        disabled_rule_sets: vec!["Lombok".to_string()],
        ..Default::default()
    };
    let registry =
        RuleSetRegistry::with_builtins_filtered(Language::Java, Some(&config)).expect("builtins");
    assert_eq!(registry.rule_set_count(), 3);
    assert_eq!(registry.diagnostics().builtin_packs_skipped, 1);
}

#[test]
fn test_config_enabled_only_allowlist() {
    let config = ClassifierConfig {
        enabled_only: Some(vec!["JUnit".to_string()]),
        ..Default::default()
    };
    let registry =
        RuleSetRegistry::with_builtins_filtered(Language::Java, Some(&config)).expect("builtins");
    assert_eq!(registry.rule_set_count(), 1);
    let classifier = registry.into_classifier();
    assert_eq!(classifier.rule_set_names(), vec!["JUnit"]);
}

#[test]
fn test_registry_diagnostics_totals() {
    let registry = RuleSetRegistry::with_builtins(Language::Java).expect("builtins");
    let diag = registry.diagnostics();
    assert_eq!(diag.builtin_packs_loaded, 4);
    assert_eq!(diag.custom_packs_loaded, 0);
    assert!(diag.total_annotations >= 40, "got {}", diag.total_annotations);
    assert!(diag.total_patterns >= 8, "got {}", diag.total_patterns);
    assert_eq!(diag.pack_versions.get("Spring Boot").map(String::as_str), Some("1.0.0"));

    let summary = diag.summary();
    assert!(summary.contains("4 loaded"));
    assert!(summary.contains("builtin"));
}

#[test]
fn test_custom_pack_dir_loads_after_builtins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pack = r#"
[framework]
name = "House Framework"
languages = ["java"]

[[annotations]]
name = "HouseRule"
category = "configuration"

[[import_patterns]]
pattern = "com.example.house.*"
confidence = 88
"#;
    std::fs::write(dir.path().join("house.toml"), pack).expect("write pack");
    std::fs::write(dir.path().join("notes.txt"), "ignored").expect("write non-toml");

    let registry = RuleSetRegistry::with_builtins_and_custom(Language::Java, dir.path(), None)
        .expect("custom pack should load");
    assert_eq!(registry.rule_set_count(), 5);
    assert_eq!(registry.diagnostics().custom_packs_loaded, 1);

    let classifier = registry.into_classifier();
    assert_eq!(classifier.detect_framework("HouseRule"), Some("House Framework"));
}

#[test]
fn test_custom_pack_for_other_language_is_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pack = r#"
[framework]
name = "Python Only"
languages = ["python"]
"#;
    std::fs::write(dir.path().join("py.toml"), pack).expect("write pack");

    let registry = RuleSetRegistry::with_builtins_and_custom(Language::Java, dir.path(), None)
        .expect("should load");
    assert_eq!(registry.rule_set_count(), 4, "python-only pack must not join the java registry");
    assert_eq!(registry.diagnostics().custom_packs_loaded, 0);
}

#[test]
fn test_broken_custom_pack_aborts_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pack = r#"
[framework]
name = "Broken Custom"
languages = ["java"]

[[import_patterns]]
pattern = ""
"#;
    std::fs::write(dir.path().join("broken.toml"), pack).expect("write pack");

    let err = RuleSetRegistry::with_builtins_and_custom(Language::Java, dir.path(), None)
        .expect_err("broken custom pack must abort the load");
    assert!(err.to_string().contains("Broken Custom"));
}

#[test]
fn test_missing_custom_dir_is_not_an_error() {
    let registry = RuleSetRegistry::with_builtins_and_custom(
        Language::Java,
        std::path::Path::new("/nonexistent/emblem/packs"),
        None,
    )
    .expect("missing dir falls back to builtins");
    assert_eq!(registry.rule_set_count(), 4);
}

#[test]
fn test_json_schema_generation() {
    let schema = generate_json_schema();
    let value = serde_json::to_value(&schema).expect("schema serializes");
    assert_eq!(value["title"], "RuleSetSpec");
    let props = value["properties"].as_object().expect("object schema");
    assert!(props.contains_key("framework"));
    assert!(props.contains_key("annotations"));
    assert!(props.contains_key("import_patterns"));
}

#[test]
fn test_compiled_rule_set_is_clone() {
    let registry = RuleSetRegistry::with_builtins(Language::Python).expect("builtins");
    let rule_sets = registry.into_rule_sets();
    let flask = rule_sets
        .iter()
        .find(|rs| rs.name == "Flask")
        .expect("Flask pack should be in builtins");
    let cloned = flask.clone();
    assert_eq!(cloned.name, flask.name);
    assert_eq!(cloned.annotation_count(), flask.annotation_count());
    assert_eq!(cloned.pattern_count(), flask.pattern_count());
}
