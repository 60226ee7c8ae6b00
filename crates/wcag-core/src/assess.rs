//! Level assessment: the highest tier whose every required criterion is
//! satisfied.
//!
//! A criterion is satisfied iff it has at least one evaluation and every
//! evaluation for it passed. No evaluations means not satisfied.

use std::collections::HashMap;

use crate::criteria::CriteriaHierarchy;
use crate::domain::{ComplianceLevel, ConformanceLevel, Evaluation};

/// Evaluations grouped by criterion id, borrowed from the input slice.
#[derive(Debug, Default)]
pub(crate) struct CriterionIndex<'a> {
    by_criterion: HashMap<&'a str, Vec<&'a Evaluation>>,
}

impl<'a> CriterionIndex<'a> {
    pub(crate) fn build(evaluations: &'a [Evaluation]) -> Self {
        let mut by_criterion: HashMap<&'a str, Vec<&'a Evaluation>> = HashMap::new();
        for e in evaluations {
            by_criterion.entry(e.criterion_id.as_str()).or_default().push(e);
        }
        Self { by_criterion }
    }

    pub(crate) fn get(&self, criterion_id: &str) -> &[&'a Evaluation] {
        self.by_criterion
            .get(criterion_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn is_satisfied(&self, criterion_id: &str) -> bool {
        let evals = self.get(criterion_id);
        !evals.is_empty() && evals.iter().all(|e| e.is_pass())
    }

    pub(crate) fn fails(&self, criterion_id: &str) -> impl Iterator<Item = &'a Evaluation> + '_ {
        self.get(criterion_id).iter().copied().filter(|e| e.is_fail())
    }
}

/// Walk `A → AA → AAA` and return the last tier fully satisfied.
pub fn assess_level(hierarchy: &CriteriaHierarchy, evaluations: &[Evaluation]) -> ComplianceLevel {
    let index = CriterionIndex::build(evaluations);
    assess_indexed(hierarchy, &index)
}

pub(crate) fn assess_indexed(
    hierarchy: &CriteriaHierarchy,
    index: &CriterionIndex<'_>,
) -> ComplianceLevel {
    let mut achieved = ComplianceLevel::NonCompliant;
    for level in ConformanceLevel::ASCENDING {
        let satisfied = hierarchy
            .required(level)
            .iter()
            .all(|id| index.is_satisfied(id));
        if !satisfied {
            break;
        }
        achieved = level.into();
    }
    achieved
}
