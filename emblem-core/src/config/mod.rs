//! Configuration types.

pub mod classifier_config;

pub use classifier_config::ClassifierConfig;
