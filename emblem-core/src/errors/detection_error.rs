//! Rule-set construction errors.

use super::error_code::{self, EmblemErrorCode};

/// Errors raised while constructing or registering a rule set.
///
/// All of these fire at registration time so a broken configuration is
/// caught at startup instead of silently degrading classification later.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("invalid import pattern '{pattern}' in rule set '{framework}': {reason}")]
    InvalidPattern {
        framework: String,
        pattern: String,
        reason: String,
    },

    #[error("confidence {confidence} out of range [0,100] for pattern '{pattern}' in rule set '{framework}'")]
    InvalidConfidence {
        framework: String,
        pattern: String,
        confidence: u32,
    },

    #[error("unknown category '{category}' for annotation '{annotation}' in rule set '{framework}'")]
    UnknownCategory {
        framework: String,
        annotation: String,
        category: String,
    },

    #[error("unknown language '{language}' in rule set '{framework}'")]
    UnknownLanguage {
        framework: String,
        language: String,
    },

    #[error("duplicate annotation '{annotation}' in rule set '{framework}'")]
    DuplicateAnnotation {
        framework: String,
        annotation: String,
    },

    #[error("failed to parse rule pack: {message}")]
    PackParse { message: String },

    #[error("failed to read rule pack '{path}': {message}")]
    PackIo { path: String, message: String },
}

impl EmblemErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => error_code::INVALID_PATTERN,
            Self::InvalidConfidence { .. } => error_code::INVALID_CONFIDENCE,
            Self::UnknownCategory { .. } => error_code::UNKNOWN_CATEGORY,
            Self::UnknownLanguage { .. } => error_code::UNKNOWN_LANGUAGE,
            Self::DuplicateAnnotation { .. } => error_code::DUPLICATE_ANNOTATION,
            Self::PackParse { .. } => error_code::PACK_PARSE,
            Self::PackIo { .. } => error_code::PACK_IO,
        }
    }
}
