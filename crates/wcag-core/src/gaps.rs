//! Gap analysis: the unmet criteria for a target tier, scored and ordered so
//! cheap, high-value fixes surface first.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::assess::CriterionIndex;
use crate::criteria::{curated_resources, CriteriaHierarchy, GuidelineRegistry};
use crate::domain::{ConformanceLevel, Evaluation, Severity};
use crate::policy::RemediationPolicy;

/// Observed state of a required criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapStatus {
    Pass,
    Fail,
    NotTested,
}

/// User impact of leaving a criterion unmet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Low,
    Medium,
    High,
    Critical,
}

impl Impact {
    pub fn score(self) -> u32 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Impact implied by the worst severity among failing evaluations.
    pub fn from_worst_severity(worst: Option<Severity>) -> Self {
        match worst {
            Some(Severity::Critical | Severity::High) => Self::High,
            Some(Severity::Medium) => Self::Medium,
            Some(Severity::Low) | None => Self::Low,
        }
    }
}

/// Expected remediation effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    Minimal,
    Moderate,
    Significant,
    Extensive,
}

impl Effort {
    /// Inverse of effort: cheaper work scores higher.
    pub fn score(self) -> u32 {
        match self {
            Self::Minimal => 4,
            Self::Moderate => 3,
            Self::Significant => 2,
            Self::Extensive => 1,
        }
    }

    /// Effort implied by how many failing evaluations a criterion has.
    pub fn from_failure_count(failures: usize) -> Self {
        match failures {
            n if n > 10 => Self::Extensive,
            n if n > 5 => Self::Significant,
            n if n > 1 => Self::Moderate,
            _ => Self::Minimal,
        }
    }
}

/// `impact * 2 + effort`; range 3..=12.
pub fn priority_score(impact: Impact, effort: Effort) -> u32 {
    impact.score() * 2 + effort.score()
}

/// One unmet criterion for a target tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceGap {
    pub criterion_id: String,
    /// Registry title, when the registry knows the criterion.
    pub title: Option<String>,
    pub current_status: GapStatus,
    pub required_for_level: ConformanceLevel,
    pub impact: Impact,
    pub effort: Effort,
    pub priority: u32,
    pub recommendations: Vec<String>,
    pub resources: Vec<String>,
}

/// Find every criterion required at `target` that is not currently passing.
///
/// Output is sorted by descending `priority`; ties keep hierarchy order.
pub fn find_gaps(
    hierarchy: &CriteriaHierarchy,
    registry: &dyn GuidelineRegistry,
    policy: &RemediationPolicy,
    evaluations: &[Evaluation],
    target: ConformanceLevel,
) -> Vec<ComplianceGap> {
    let index = CriterionIndex::build(evaluations);
    find_gaps_indexed(hierarchy, registry, policy, &index, target)
}

pub(crate) fn find_gaps_indexed(
    hierarchy: &CriteriaHierarchy,
    registry: &dyn GuidelineRegistry,
    policy: &RemediationPolicy,
    index: &CriterionIndex<'_>,
    target: ConformanceLevel,
) -> Vec<ComplianceGap> {
    let mut gaps: Vec<ComplianceGap> = hierarchy
        .required(target)
        .iter()
        .filter_map(|id| analyze_criterion(hierarchy, registry, policy, index, id, target))
        .collect();
    gaps.sort_by(|a, b| b.priority.cmp(&a.priority));
    gaps
}

fn current_status(index: &CriterionIndex<'_>, criterion_id: &str) -> GapStatus {
    let evals = index.get(criterion_id);
    if evals.is_empty() {
        GapStatus::NotTested
    } else if evals.iter().any(|e| e.is_fail()) {
        GapStatus::Fail
    } else {
        GapStatus::Pass
    }
}

fn analyze_criterion(
    hierarchy: &CriteriaHierarchy,
    registry: &dyn GuidelineRegistry,
    policy: &RemediationPolicy,
    index: &CriterionIndex<'_>,
    criterion_id: &str,
    target: ConformanceLevel,
) -> Option<ComplianceGap> {
    let status = current_status(index, criterion_id);
    if status == GapStatus::Pass {
        return None;
    }

    let failures: Vec<&Evaluation> = index.fails(criterion_id).collect();
    let impact = policy.fixed_impact(criterion_id).unwrap_or_else(|| {
        Impact::from_worst_severity(failures.iter().filter_map(|e| e.severity).max())
    });
    let effort = policy
        .fixed_effort(criterion_id)
        .unwrap_or_else(|| Effort::from_failure_count(failures.len()));

    let entry = registry.lookup(criterion_id);
    let mut seen = HashSet::new();
    let recommendations: Vec<String> = entry
        .into_iter()
        .flat_map(|e| e.success_criteria.iter())
        .chain(failures.iter().flat_map(|e| e.recommendations.iter()))
        .filter(|r| seen.insert(r.as_str()))
        .cloned()
        .collect();

    Some(ComplianceGap {
        criterion_id: criterion_id.to_string(),
        title: entry.map(|e| e.title.clone()),
        current_status: status,
        required_for_level: target,
        impact,
        effort,
        priority: priority_score(impact, effort),
        recommendations,
        resources: resources_for(hierarchy, criterion_id),
    })
}

/// Version-templated reference links followed by curated extras.
pub fn resources_for(hierarchy: &CriteriaHierarchy, criterion_id: &str) -> Vec<String> {
    let slug = hierarchy.version.wai_slug();
    let compact: String = criterion_id.chars().filter(|c| *c != '.').collect();
    let mut resources = vec![
        format!("https://www.w3.org/WAI/{slug}/quickref/?showtechniques={compact}"),
        format!("https://www.w3.org/WAI/{slug}/Techniques/"),
        "https://webaim.org/standards/wcag/checklist".to_string(),
    ];
    for url in curated_resources(hierarchy.version, criterion_id) {
        if !resources.iter().any(|r| r == url) {
            resources.push(url.to_string());
        }
    }
    resources
}
