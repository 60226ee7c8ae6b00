//! Budget estimate derived from phase costs and fixed overheads.
//!
//! Integer currency units; every percentage is floored.

use serde::{Deserialize, Serialize};

use super::phase::CompliancePhase;
use crate::policy::{percent_of, RemediationPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseCost {
    pub phase_id: String,
    pub cost: u64,
}

/// Planning estimate, not a measured cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEstimate {
    pub phase_costs: Vec<PhaseCost>,
    pub remediation: u64,
    pub audit: u64,
    pub testing: u64,
    pub certification: u64,
    pub maintenance: u64,
    pub contingency: u64,
    pub total_estimate: u64,
}

pub fn estimate_budget(phases: &[CompliancePhase], policy: &RemediationPolicy) -> BudgetEstimate {
    let remediation = phases
        .iter()
        .fold(0u64, |acc, p| acc.saturating_add(p.estimated_cost));
    let audit = policy.audit_fee;
    let testing = percent_of(remediation, policy.testing_rate_pct);
    let certification = policy.certification_fee;
    let maintenance = percent_of(remediation, policy.maintenance_rate_pct);
    let subtotal = [audit, testing, certification, maintenance]
        .into_iter()
        .fold(remediation, u64::saturating_add);
    let contingency = percent_of(subtotal, policy.contingency_rate_pct);

    BudgetEstimate {
        phase_costs: phases
            .iter()
            .map(|p| PhaseCost {
                phase_id: p.id.clone(),
                cost: p.estimated_cost,
            })
            .collect(),
        remediation,
        audit,
        testing,
        certification,
        maintenance,
        contingency,
        total_estimate: subtotal.saturating_add(contingency),
    }
}
