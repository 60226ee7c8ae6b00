//! Remediation roadmap: phases, schedule and budget derived from gaps.

pub mod budget;
pub mod phase;
pub mod timeline;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assess::{assess_indexed, CriterionIndex};
use crate::criteria::{CriteriaHierarchy, GuidelineRegistry};
use crate::domain::{ComplianceLevel, ConformanceLevel, Evaluation, WcagVersion};
use crate::gaps::{find_gaps_indexed, ComplianceGap};
use crate::policy::RemediationPolicy;

pub use budget::{estimate_budget, BudgetEstimate, PhaseCost};
pub use phase::{partition_phases, CompliancePhase, PhaseTier};
pub use timeline::{build_timeline, Milestone, MilestoneStatus, PhaseWindow, Timeline, RISK_FACTORS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRoadmap {
    pub wcag_version: WcagVersion,
    pub current_level: ComplianceLevel,
    pub target_level: ConformanceLevel,
    pub gaps: Vec<ComplianceGap>,
    pub phases: Vec<CompliancePhase>,
    pub timeline: Timeline,
    pub budget: BudgetEstimate,
}

/// Build a roadmap from `evaluations` toward `target`, scheduled from `now`.
pub fn build_roadmap(
    hierarchy: &CriteriaHierarchy,
    registry: &dyn GuidelineRegistry,
    policy: &RemediationPolicy,
    evaluations: &[Evaluation],
    target: ConformanceLevel,
    now: DateTime<Utc>,
) -> ComplianceRoadmap {
    let index = CriterionIndex::build(evaluations);
    let gaps = find_gaps_indexed(hierarchy, registry, policy, &index, target);
    let phases = partition_phases(&gaps, policy);
    let timeline = build_timeline(&phases, now, policy.phase_buffer_days);
    let budget = estimate_budget(&phases, policy);

    ComplianceRoadmap {
        wcag_version: hierarchy.version,
        current_level: assess_indexed(hierarchy, &index),
        target_level: target,
        gaps,
        phases,
        timeline,
        budget,
    }
}
