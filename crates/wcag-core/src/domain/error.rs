//! Error taxonomy for the compliance engine.
//!
//! The four engine operations are total and never return these; errors only
//! surface at ingestion (batch validation), configuration loading and
//! artifact persistence.

/// Errors produced by evaluation ingestion and boundary validation.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("criterion id must not be empty")]
    EmptyCriterionId,

    #[error("malformed criterion id: {id}")]
    MalformedCriterionId { id: String },

    #[error("batch {batch} overall score {score} outside 0..=100")]
    ScoreOutOfRange { batch: String, score: f64 },
}

/// Compliance engine errors.
#[derive(Debug, thiserror::Error)]
pub enum ComplianceError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("criteria hierarchy not nested: {upper} is missing {missing:?} required by {lower}")]
    HierarchyNotNested {
        lower: String,
        upper: String,
        missing: Vec<String>,
    },

    #[error("unknown conformance level: {0}")]
    UnknownLevel(String),

    #[error("unknown WCAG version: {0}")]
    UnknownVersion(String),

    #[error("policy field {field} = {value} exceeds maximum {max}")]
    PolicyOutOfRange {
        field: String,
        value: u64,
        max: u64,
    },

    #[error("invalid artifact id: {0:?}")]
    InvalidArtifactId(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("digest mismatch: expected {expected}, got {actual}")]
    DigestMismatch { expected: String, actual: String },

    #[error("non-finite number not permitted in canonical JSON")]
    NonFiniteNumber,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for compliance engine operations that can fail.
pub type Result<T> = std::result::Result<T, ComplianceError>;
