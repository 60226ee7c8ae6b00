//! [`ComplianceEngine`]: the four public operations bound to one hierarchy,
//! registry and policy.
//!
//! Every method takes `&self`, reads only its arguments and the immutable
//! tables it was built with, and returns fresh data. Engines can be shared
//! across threads and called concurrently.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::certificate::{self, CertificateRequest, CertificationStatus, ComplianceCertification};
use crate::criteria::{CriteriaHierarchy, GuidelineRegistry, InMemoryRegistry};
use crate::domain::{ComplianceLevel, ConformanceLevel, Evaluation, WcagVersion};
use crate::gaps::{self, ComplianceGap, GapStatus};
use crate::obs;
use crate::policy::RemediationPolicy;
use crate::roadmap::{self, ComplianceRoadmap};

#[derive(Clone)]
pub struct ComplianceEngine {
    hierarchy: CriteriaHierarchy,
    registry: Arc<dyn GuidelineRegistry>,
    policy: RemediationPolicy,
}

impl std::fmt::Debug for ComplianceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplianceEngine")
            .field("version", &self.hierarchy.version)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl ComplianceEngine {
    pub fn new(
        hierarchy: CriteriaHierarchy,
        registry: Arc<dyn GuidelineRegistry>,
        policy: RemediationPolicy,
    ) -> Self {
        Self {
            hierarchy,
            registry,
            policy,
        }
    }

    /// Built-in hierarchy, registry and default policy for `version`.
    pub fn for_version(version: WcagVersion) -> Self {
        Self::new(
            CriteriaHierarchy::for_version(version).clone(),
            Arc::new(InMemoryRegistry::builtin(version)),
            RemediationPolicy::default(),
        )
    }

    pub fn hierarchy(&self) -> &CriteriaHierarchy {
        &self.hierarchy
    }

    pub fn policy(&self) -> &RemediationPolicy {
        &self.policy
    }

    /// Highest tier fully satisfied by `evaluations`.
    pub fn assess_level(&self, evaluations: &[Evaluation]) -> ComplianceLevel {
        let level = crate::assess::assess_level(&self.hierarchy, evaluations);
        obs::emit_level_assessed(evaluations.len(), level);
        level
    }

    /// Unmet criteria for `target`, highest priority first.
    pub fn find_gaps(
        &self,
        evaluations: &[Evaluation],
        target: ConformanceLevel,
    ) -> Vec<ComplianceGap> {
        let found = gaps::find_gaps(
            &self.hierarchy,
            self.registry.as_ref(),
            &self.policy,
            evaluations,
            target,
        );
        let not_tested = found
            .iter()
            .filter(|g| g.current_status == GapStatus::NotTested)
            .count();
        obs::emit_gaps_found(target, found.len(), not_tested);
        found
    }

    /// Phased remediation plan toward `target`, scheduled from `now`.
    pub fn build_roadmap(
        &self,
        evaluations: &[Evaluation],
        target: ConformanceLevel,
        now: DateTime<Utc>,
    ) -> ComplianceRoadmap {
        let plan = roadmap::build_roadmap(
            &self.hierarchy,
            self.registry.as_ref(),
            &self.policy,
            evaluations,
            target,
            now,
        );
        obs::emit_roadmap_built(target, plan.phases.len(), plan.budget.total_estimate);
        plan
    }

    /// Issue a certification dated `now`.
    pub fn generate_certificate(
        &self,
        evaluations: &[Evaluation],
        request: &CertificateRequest,
        now: DateTime<Utc>,
    ) -> ComplianceCertification {
        let cert = certificate::generate_certificate(&self.hierarchy, evaluations, request, now);
        obs::emit_certificate_issued(
            &cert.id,
            cert.compliance_level,
            cert.compliance_score,
            cert.status == CertificationStatus::Approved,
        );
        cert
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::for_version(WcagVersion::default())
    }
}
