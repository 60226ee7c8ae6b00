//! Partition of gaps into the three fixed remediation tiers.

use serde::{Deserialize, Serialize};

use crate::gaps::{ComplianceGap, Impact};
use crate::policy::{PhaseRates, RemediationPolicy};

/// Fixed remediation tiers, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseTier {
    CriticalIssues,
    MediumImpact,
    Polish,
}

impl PhaseTier {
    pub const ORDER: [PhaseTier; 3] = [Self::CriticalIssues, Self::MediumImpact, Self::Polish];

    pub fn id(self) -> &'static str {
        match self {
            Self::CriticalIssues => "phase-1",
            Self::MediumImpact => "phase-2",
            Self::Polish => "phase-3",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::CriticalIssues => "Critical Issues Resolution",
            Self::MediumImpact => "Medium Impact Issues",
            Self::Polish => "Compliance Polish",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::CriticalIssues => {
                "Resolve critical and high-impact barriers that block assistive technology users."
            }
            Self::MediumImpact => {
                "Address medium-impact issues that degrade the experience for disabled users."
            }
            Self::Polish => {
                "Close remaining low-impact gaps and prepare for conformance certification."
            }
        }
    }

    /// Whether a gap of `impact` belongs to this tier.
    pub fn admits(self, impact: Impact) -> bool {
        match self {
            Self::CriticalIssues => matches!(impact, Impact::Critical | Impact::High),
            Self::MediumImpact => impact == Impact::Medium,
            Self::Polish => impact == Impact::Low,
        }
    }

    fn rates(self, policy: &RemediationPolicy) -> PhaseRates {
        match self {
            Self::CriticalIssues => policy.critical_phase,
            Self::MediumImpact => policy.medium_phase,
            Self::Polish => policy.polish_phase,
        }
    }

    fn deliverables(self) -> &'static [&'static str] {
        match self {
            Self::CriticalIssues => &[
                "Remediated critical accessibility barriers",
                "Updated component library with accessible patterns",
                "Assistive technology regression test results",
            ],
            Self::MediumImpact => &[
                "Remediated medium-impact issues",
                "Updated content and design guidelines",
                "Keyboard and screen reader verification report",
            ],
            Self::Polish => &[
                "Remediated remaining low-impact issues",
                "Final conformance audit package",
                "Accessibility statement draft",
            ],
        }
    }

    fn acceptance_criteria(self) -> &'static [&'static str] {
        match self {
            Self::CriticalIssues => &[
                "All phase criteria pass automated testing",
                "No critical or high severity failures remain",
                "Manual assistive technology review signed off",
            ],
            Self::MediumImpact => &[
                "All phase criteria pass automated testing",
                "No medium severity failures remain",
            ],
            Self::Polish => &[
                "All phase criteria pass automated testing",
                "Target conformance level achieved in re-assessment",
            ],
        }
    }
}

/// A remediation work unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompliancePhase {
    pub id: String,
    pub tier: PhaseTier,
    pub name: String,
    pub description: String,
    pub criteria: Vec<String>,
    pub estimated_duration_days: u32,
    pub estimated_cost: u64,
    /// Ids of phases that must finish first.
    pub dependencies: Vec<String>,
    pub deliverables: Vec<String>,
    pub acceptance_criteria: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Group gaps into tiers, skipping empty tiers. Each phase depends on the
/// phase emitted immediately before it.
pub fn partition_phases(
    gaps: &[ComplianceGap],
    policy: &RemediationPolicy,
) -> Vec<CompliancePhase> {
    let mut phases: Vec<CompliancePhase> = Vec::new();
    for tier in PhaseTier::ORDER {
        let criteria: Vec<String> = gaps
            .iter()
            .filter(|g| tier.admits(g.impact))
            .map(|g| g.criterion_id.clone())
            .collect();
        if criteria.is_empty() {
            continue;
        }

        let rates = tier.rates(policy);
        let dependencies = phases.last().map(|p| vec![p.id.clone()]).unwrap_or_default();
        phases.push(CompliancePhase {
            id: tier.id().to_string(),
            tier,
            name: tier.name().to_string(),
            description: tier.description().to_string(),
            estimated_duration_days: rates.duration_days(criteria.len()),
            estimated_cost: rates.cost(criteria.len()),
            criteria,
            dependencies,
            deliverables: owned(tier.deliverables()),
            acceptance_criteria: owned(tier.acceptance_criteria()),
        });
    }
    phases
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConformanceLevel;
    use crate::gaps::{Effort, GapStatus};

    fn gap(id: &str, impact: Impact) -> ComplianceGap {
        ComplianceGap {
            criterion_id: id.to_string(),
            title: None,
            current_status: GapStatus::Fail,
            required_for_level: ConformanceLevel::AA,
            impact,
            effort: Effort::Minimal,
            priority: crate::gaps::priority_score(impact, Effort::Minimal),
            recommendations: vec![],
            resources: vec![],
        }
    }

    #[test]
    fn test_tiers_admit_disjoint_impacts() {
        for impact in [Impact::Low, Impact::Medium, Impact::High, Impact::Critical] {
            let admitted = PhaseTier::ORDER.iter().filter(|t| t.admits(impact)).count();
            assert_eq!(admitted, 1, "{impact:?}");
        }
    }

    #[test]
    fn test_medium_only_has_no_dependencies() {
        let phases = partition_phases(
            &[gap("1.4.11", Impact::Medium), gap("1.4.12", Impact::Medium)],
            &RemediationPolicy::default(),
        );
        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].id, "phase-2");
        assert!(phases[0].dependencies.is_empty());
        assert_eq!(phases[0].estimated_duration_days, 20);
        assert_eq!(phases[0].estimated_cost, 1600);
    }

    #[test]
    fn test_empty_gaps_yield_no_phases() {
        assert!(partition_phases(&[], &RemediationPolicy::default()).is_empty());
    }
}
