//! Benchmark for classification throughput.
//!
//! Measures the scored query path across all built-in Java rule sets with
//! a realistic context, plus the cost of registry loading itself.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use emblem_analysis::engine::context::{DetectionContext, ImportRecord};
use emblem_analysis::frameworks::registry::RuleSetRegistry;
use emblem_core::Language;

fn bench_classification(c: &mut Criterion) {
    let classifier = RuleSetRegistry::with_builtins(Language::Java)
        .expect("builtins load")
        .into_classifier();

    c.bench_function("classify_1000_entities", |b| {
        b.iter(|| {
            let mut detected = 0usize;
            for i in 0..1000 {
                let ctx = DetectionContext::new(
                    ["RestController", "Autowired", "Entity"],
                    vec![
                        ImportRecord::new("org.springframework.boot.SpringApplication"),
                        ImportRecord::new(format!("com.example.app.service.Service{i}")),
                        ImportRecord::new("jakarta.persistence.Entity"),
                    ],
                );
                if classifier.with_context(black_box(&ctx)).is_detected() {
                    detected += 1;
                }
            }
            detected
        })
    });

    c.bench_function("flat_map_lookup", |b| {
        b.iter(|| {
            black_box(classifier.detect_framework(black_box("RestController")));
            black_box(classifier.categorize_annotation(black_box("Entity")));
        })
    });

    c.bench_function("registry_loading", |b| {
        b.iter(|| {
            let registry = RuleSetRegistry::with_builtins(Language::Java).expect("builtins load");
            black_box(registry.into_rule_sets())
        })
    });
}

criterion_group!(benches, bench_classification);
criterion_main!(benches);
