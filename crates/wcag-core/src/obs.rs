//! Structured tracing events for engine operations.
//!
//! Emitted at `info!` with a stable `event` field so log pipelines can key
//! on it. Filtering follows `RUST_LOG`; see [`crate::telemetry`].

use tracing::info;

use crate::domain::{ComplianceLevel, ConformanceLevel};

/// RAII guard that enters an assessment-scoped span.
///
/// ```ignore
/// let _span = AssessmentSpan::enter("https://example.org", ConformanceLevel::AA);
/// ```
pub struct AssessmentSpan {
    _span: tracing::span::EnteredSpan,
}

impl AssessmentSpan {
    pub fn enter(subject: &str, target: ConformanceLevel) -> Self {
        let span = tracing::info_span!(
            "compliance.assessment",
            subject = %subject,
            target = %target
        );
        Self {
            _span: span.entered(),
        }
    }
}

pub fn emit_level_assessed(evaluations: usize, level: ComplianceLevel) {
    info!(
        event = "compliance.level_assessed",
        evaluations = evaluations,
        level = %level,
    );
}

pub fn emit_gaps_found(target: ConformanceLevel, gaps: usize, not_tested: usize) {
    info!(
        event = "compliance.gaps_found",
        target = %target,
        gaps = gaps,
        not_tested = not_tested,
    );
}

pub fn emit_roadmap_built(target: ConformanceLevel, phases: usize, total_estimate: u64) {
    info!(
        event = "compliance.roadmap_built",
        target = %target,
        phases = phases,
        total_estimate = total_estimate,
    );
}

pub fn emit_certificate_issued(id: &str, level: ComplianceLevel, score: f64, approved: bool) {
    info!(
        event = "compliance.certificate_issued",
        certificate_id = %id,
        level = %level,
        score = score,
        approved = approved,
    );
}

/// Warning: a sealed artifact failed digest verification.
pub fn emit_digest_mismatch(id: &str, expected: &str, actual: &str) {
    tracing::warn!(
        event = "artifact.digest_mismatch",
        artifact_id = %id,
        expected = %expected,
        actual = %actual,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_span_create() {
        let _span = AssessmentSpan::enter("https://example.org", ConformanceLevel::AA);
        emit_level_assessed(0, ComplianceLevel::NonCompliant);
    }
}
