//! # emblem-core
//!
//! Foundation crate for the Emblem provenance classifier.
//! Defines shared types, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ClassifierConfig;
pub use errors::detection_error::DetectionError;
pub use errors::error_code::EmblemErrorCode;
pub use types::annotation::{AnnotationCategory, AnnotationInfo};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::language::Language;
