//! Engine-level types shared by the frameworks subsystem.

pub mod context;
pub mod types;

pub use context::{DetectionContext, ImportRecord};
pub use types::{DetectionMethod, DetectionResult};
