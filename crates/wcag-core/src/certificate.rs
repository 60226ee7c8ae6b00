//! Compliance certification: a dated, scored attestation of the tier an
//! evaluation set achieves.
//!
//! Issue lists are drawn from evaluations, not gaps: `resolved_issues` are
//! passing evaluations and `pending_issues` failing ones. Criteria that were
//! never tested lower the score but do not appear in either list.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::assess::{assess_indexed, CriterionIndex};
use crate::criteria::CriteriaHierarchy;
use crate::domain::digest::sha256_hex;
use crate::domain::{ComplianceLevel, ConformanceLevel, Evaluation, Severity, WcagVersion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    Expired,
}

/// Who and what a certificate is issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRequest {
    /// Site, application or document identifier.
    pub subject: String,
    pub auditor: String,
    pub certifying_body: String,
    /// Tier the score is computed against.
    #[serde(default)]
    pub target_level: ConformanceLevel,
}

impl CertificateRequest {
    pub fn new(
        subject: impl Into<String>,
        auditor: impl Into<String>,
        certifying_body: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            auditor: auditor.into(),
            certifying_body: certifying_body.into(),
            target_level: ConformanceLevel::default(),
        }
    }

    pub fn with_target(mut self, target_level: ConformanceLevel) -> Self {
        self.target_level = target_level;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCertification {
    pub id: String,
    pub subject: String,
    pub auditor: String,
    pub certifying_body: String,
    pub compliance_level: ComplianceLevel,
    pub target_level: ConformanceLevel,
    pub wcag_version: WcagVersion,
    pub certification_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    /// Percentage of target-tier criteria satisfied, 0–100.
    pub compliance_score: f64,
    pub total_criteria: usize,
    pub failing_criteria: usize,
    /// Failing evaluations with critical severity.
    pub critical_issues: usize,
    pub resolved_issues: Vec<Evaluation>,
    pub pending_issues: Vec<Evaluation>,
    pub status: CertificationStatus,
}

impl ComplianceCertification {
    /// Whether the certificate has lapsed at `at`.
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        at >= self.expiration_date
    }
}

/// `(total - failing) / total * 100`, or 0 when there is nothing to score.
pub fn compliance_score(total: usize, failing: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let satisfied = total.saturating_sub(failing);
    satisfied as f64 / total as f64 * 100.0
}

/// One year after `date`; Feb 29 clamps to Feb 28.
pub fn expiration_for(date: DateTime<Utc>) -> DateTime<Utc> {
    date.checked_add_months(Months::new(12))
        .or_else(|| date.checked_add_signed(Duration::days(365)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn certificate_id(
    request: &CertificateRequest,
    level: ComplianceLevel,
    version: WcagVersion,
    date: DateTime<Utc>,
) -> String {
    let seed = format!(
        "{}|{}|{}|{}|{}",
        request.subject,
        level,
        request.target_level,
        version,
        date.to_rfc3339()
    );
    format!("cert-{}", &sha256_hex(seed.as_bytes())[..16])
}

/// Issue a certification for `evaluations`, dated `now`.
pub fn generate_certificate(
    hierarchy: &CriteriaHierarchy,
    evaluations: &[Evaluation],
    request: &CertificateRequest,
    now: DateTime<Utc>,
) -> ComplianceCertification {
    let index = CriterionIndex::build(evaluations);
    let compliance_level = assess_indexed(hierarchy, &index);

    let required = hierarchy.required(request.target_level);
    let total_criteria = required.len();
    let failing_criteria = required.iter().filter(|id| !index.is_satisfied(id)).count();
    let score = if evaluations.is_empty() {
        0.0
    } else {
        compliance_score(total_criteria, failing_criteria)
    };

    let critical_issues = evaluations
        .iter()
        .filter(|e| e.is_fail() && e.severity == Some(Severity::Critical))
        .count();
    let resolved_issues: Vec<Evaluation> =
        evaluations.iter().filter(|e| e.is_pass()).cloned().collect();
    let pending_issues: Vec<Evaluation> =
        evaluations.iter().filter(|e| e.is_fail()).cloned().collect();

    let status = if compliance_level == ComplianceLevel::NonCompliant {
        CertificationStatus::Rejected
    } else {
        CertificationStatus::Approved
    };

    ComplianceCertification {
        id: certificate_id(request, compliance_level, hierarchy.version, now),
        subject: request.subject.clone(),
        auditor: request.auditor.clone(),
        certifying_body: request.certifying_body.clone(),
        compliance_level,
        target_level: request.target_level,
        wcag_version: hierarchy.version,
        certification_date: now,
        expiration_date: expiration_for(now),
        compliance_score: score,
        total_criteria,
        failing_criteria,
        critical_issues,
        resolved_issues,
        pending_issues,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_score_guards_zero_total() {
        assert_eq!(compliance_score(0, 0), 0.0);
        assert_eq!(compliance_score(4, 1), 75.0);
        assert_eq!(compliance_score(4, 4), 0.0);
    }

    #[test]
    fn test_expiration_is_one_year() {
        let date = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(
            expiration_for(date),
            Utc.with_ymd_and_hms(2027, 3, 15, 12, 0, 0).unwrap()
        );
        let leap = Utc.with_ymd_and_hms(2028, 2, 29, 0, 0, 0).unwrap();
        assert_eq!(
            expiration_for(leap),
            Utc.with_ymd_and_hms(2029, 2, 28, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_is_expired_at() {
        let h = CriteriaHierarchy::for_version(WcagVersion::V2_1);
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let cert = generate_certificate(h, &[], &CertificateRequest::new("s", "a", "b"), now);
        assert!(!cert.is_expired_at(now));
        assert!(cert.is_expired_at(now + Duration::days(365)));
    }
}
