//! Evaluation records consumed from an external accessibility test runner.
//!
//! Evaluations are immutable once received: the engine only aggregates over
//! slices of them.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValidationError;

/// Outcome of one test against one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluationStatus {
    Pass,
    Fail,
    NeedsReview,
    NotApplicable,
}

/// Severity of a failing evaluation.
///
/// Totally ordered `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// One test outcome for one criterion against one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Criterion identifier, e.g. `"1.4.3"`.
    pub criterion_id: String,
    pub status: EvaluationStatus,
    /// Only meaningful when `status` is [`EvaluationStatus::Fail`].
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub findings: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl Evaluation {
    /// Create an evaluation with no findings or recommendations.
    pub fn new(criterion_id: impl Into<String>, status: EvaluationStatus) -> Self {
        Self {
            criterion_id: criterion_id.into(),
            status,
            severity: None,
            findings: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// Shorthand for a passing evaluation.
    pub fn pass(criterion_id: impl Into<String>) -> Self {
        Self::new(criterion_id, EvaluationStatus::Pass)
    }

    /// Shorthand for a failing evaluation with a severity.
    pub fn fail(criterion_id: impl Into<String>, severity: Severity) -> Self {
        Self::new(criterion_id, EvaluationStatus::Fail).with_severity(severity)
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_finding(mut self, finding: impl Into<String>) -> Self {
        self.findings.push(finding.into());
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }

    pub fn is_pass(&self) -> bool {
        self.status == EvaluationStatus::Pass
    }

    pub fn is_fail(&self) -> bool {
        self.status == EvaluationStatus::Fail
    }

    /// Reject records whose criterion id is empty or not dotted-numeric.
    ///
    /// Ids that are well-formed but unknown to the registry are accepted.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.criterion_id.trim().is_empty() {
            return Err(ValidationError::EmptyCriterionId);
        }
        if !criterion_id_pattern().is_match(&self.criterion_id) {
            return Err(ValidationError::MalformedCriterionId {
                id: self.criterion_id.clone(),
            });
        }
        Ok(())
    }
}

fn criterion_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("static pattern compiles"))
}

/// Evaluations produced by one assessment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationBatch {
    pub batch_id: Uuid,
    pub name: String,
    /// Runner-reported aggregate score in 0–100.
    pub overall_score: f64,
    pub created_at: DateTime<Utc>,
    pub evaluations: Vec<Evaluation>,
}

impl EvaluationBatch {
    /// Create a new batch stamped with `created_at`.
    pub fn new(
        name: impl Into<String>,
        overall_score: f64,
        evaluations: Vec<Evaluation>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            batch_id: Uuid::new_v4(),
            name: name.into(),
            overall_score,
            created_at,
            evaluations,
        }
    }

    /// Validate the batch score and every contained evaluation.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if !self.overall_score.is_finite() || !(0.0..=100.0).contains(&self.overall_score) {
            return Err(ValidationError::ScoreOutOfRange {
                batch: self.name.clone(),
                score: self.overall_score,
            });
        }
        for evaluation in &self.evaluations {
            evaluation.validate()?;
        }
        Ok(())
    }
}

/// Concatenate the evaluations of several batches, in input order.
pub fn merge_batches(batches: &[EvaluationBatch]) -> Vec<Evaluation> {
    batches
        .iter()
        .flat_map(|b| b.evaluations.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_status_serde_kebab_case() {
        let json = serde_json::to_string(&EvaluationStatus::NeedsReview).unwrap();
        assert_eq!(json, "\"needs-review\"");
        let back: EvaluationStatus = serde_json::from_str("\"not-applicable\"").unwrap();
        assert_eq!(back, EvaluationStatus::NotApplicable);
    }

    #[test]
    fn test_evaluation_defaults_when_deserialized() {
        let eval: Evaluation =
            serde_json::from_str(r#"{"criterion_id":"1.4.3","status":"pass"}"#).unwrap();
        assert!(eval.is_pass());
        assert!(eval.severity.is_none());
        assert!(eval.findings.is_empty());
        assert!(eval.recommendations.is_empty());
    }

    #[test]
    fn test_missing_status_rejected_by_serde() {
        let result: Result<Evaluation, _> = serde_json::from_str(r#"{"criterion_id":"1.4.3"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_criterion_id() {
        assert!(Evaluation::pass("1.4.10").validate().is_ok());
        assert!(Evaluation::pass("9.9.9").validate().is_ok());
        assert!(matches!(
            Evaluation::pass("  ").validate(),
            Err(ValidationError::EmptyCriterionId)
        ));
        assert!(matches!(
            Evaluation::pass("1.4").validate(),
            Err(ValidationError::MalformedCriterionId { .. })
        ));
        assert!(Evaluation::pass("1.4.3a").validate().is_err());
    }

    #[test]
    fn test_batch_score_range() {
        let now = Utc::now();
        assert!(EvaluationBatch::new("ok", 55.0, vec![], now).validate().is_ok());
        assert!(EvaluationBatch::new("hi", 100.5, vec![], now).validate().is_err());
        assert!(EvaluationBatch::new("nan", f64::NAN, vec![], now)
            .validate()
            .is_err());
    }

    #[test]
    fn test_merge_batches_preserves_order() {
        let now = Utc::now();
        let a = EvaluationBatch::new("a", 50.0, vec![Evaluation::pass("1.1.1")], now);
        let b = EvaluationBatch::new(
            "b",
            40.0,
            vec![
                Evaluation::fail("1.4.3", Severity::High),
                Evaluation::pass("2.1.1"),
            ],
            now,
        );
        let merged = merge_batches(&[a, b]);
        let ids: Vec<&str> = merged.iter().map(|e| e.criterion_id.as_str()).collect();
        assert_eq!(ids, vec!["1.1.1", "1.4.3", "2.1.1"]);
    }
}
