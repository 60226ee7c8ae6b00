//! Domain model for the compliance engine.
//!
//! - `Evaluation` / `EvaluationBatch`: raw test outcomes from the runner
//! - `ConformanceLevel` / `ComplianceLevel`: targets and assessment results
//! - `WcagVersion`: key for every versioned static table
//! - `digest`: canonical JSON digests for sealed artifacts

pub mod digest;
pub mod error;
pub mod evaluation;
pub mod level;

pub use error::{ComplianceError, Result, ValidationError};
pub use evaluation::{merge_batches, Evaluation, EvaluationBatch, EvaluationStatus, Severity};
pub use level::{ComplianceLevel, ConformanceLevel, WcagVersion};
