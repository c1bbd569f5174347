//! Error taxonomy for the Emblem workspace.
//!
//! Classification itself has no failure mode — unmatched input yields the
//! empty result. Every error here is a configuration error surfaced when a
//! rule set is constructed or registered.

pub mod detection_error;
pub mod error_code;

pub use detection_error::DetectionError;
pub use error_code::EmblemErrorCode;
