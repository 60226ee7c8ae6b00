//! Heuristic remediation policy: fixed impact/effort sets, phase rates and
//! budget overheads.
//!
//! [`RemediationPolicy::default`] is the compiled WCAG 2.x policy. Every
//! field can be overridden through [`crate::config::EngineConfig`]; all
//! figures are planning estimates, not measured costs.

use serde::{Deserialize, Serialize};

use crate::domain::{ComplianceError, Result};
use crate::gaps::{Effort, Impact};

/// Upper bound for any day count in a policy (roughly ten years).
pub const MAX_POLICY_DAYS: u64 = 3_650;
/// Upper bound for any currency amount in a policy.
pub const MAX_POLICY_AMOUNT: u64 = 1_000_000_000_000;
/// Upper bound for any percentage rate in a policy.
pub const MAX_POLICY_RATE_PCT: u64 = 1_000;

/// Duration and cost rates for one remediation phase tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseRates {
    /// Floor on the phase duration.
    pub min_days: u32,
    pub days_per_gap: u32,
    pub cost_per_gap: u64,
}

impl PhaseRates {
    pub fn duration_days(&self, gaps: usize) -> u32 {
        let scaled = u32::try_from(gaps)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.days_per_gap);
        scaled.max(self.min_days)
    }

    pub fn cost(&self, gaps: usize) -> u64 {
        (gaps as u64).saturating_mul(self.cost_per_gap)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemediationPolicy {
    /// Criteria always rated [`Impact::Critical`].
    pub critical_impact: Vec<String>,
    /// Criteria always rated [`Impact::High`].
    pub high_impact: Vec<String>,
    /// Criteria always rated [`Effort::Minimal`].
    pub minimal_effort: Vec<String>,
    /// Criteria always rated [`Effort::Extensive`].
    pub extensive_effort: Vec<String>,
    pub critical_phase: PhaseRates,
    pub medium_phase: PhaseRates,
    pub polish_phase: PhaseRates,
    /// Gap inserted between consecutive phases.
    pub phase_buffer_days: u32,
    pub audit_fee: u64,
    pub certification_fee: u64,
    /// Percentages of the remediation subtotal.
    pub testing_rate_pct: u64,
    pub maintenance_rate_pct: u64,
    /// Percentage of every other budget line combined.
    pub contingency_rate_pct: u64,
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for RemediationPolicy {
    fn default() -> Self {
        Self {
            critical_impact: ids(&["1.1.1", "1.3.1", "2.1.1", "4.1.2"]),
            high_impact: ids(&["1.4.3", "2.4.1", "2.4.2", "3.3.1"]),
            minimal_effort: ids(&["1.4.2", "2.4.2", "3.1.1"]),
            extensive_effort: ids(&["1.2.3", "1.2.5", "1.4.5"]),
            critical_phase: PhaseRates {
                min_days: 30,
                days_per_gap: 3,
                cost_per_gap: 1500,
            },
            medium_phase: PhaseRates {
                min_days: 20,
                days_per_gap: 2,
                cost_per_gap: 800,
            },
            polish_phase: PhaseRates {
                min_days: 15,
                days_per_gap: 1,
                cost_per_gap: 400,
            },
            phase_buffer_days: 7,
            audit_fee: 5000,
            certification_fee: 2000,
            testing_rate_pct: 20,
            maintenance_rate_pct: 10,
            contingency_rate_pct: 15,
        }
    }
}

fn check_bound(field: &str, value: u64, max: u64) -> Result<()> {
    if value > max {
        return Err(ComplianceError::PolicyOutOfRange {
            field: field.to_string(),
            value,
            max,
        });
    }
    Ok(())
}

impl RemediationPolicy {
    /// Reject day counts, amounts and rates outside the planning range.
    ///
    /// Roadmap arithmetic saturates regardless; this catches configuration
    /// mistakes at startup instead of producing absurd plans.
    pub fn validate(&self) -> Result<()> {
        let tiers = [
            ("critical_phase", &self.critical_phase),
            ("medium_phase", &self.medium_phase),
            ("polish_phase", &self.polish_phase),
        ];
        for (tier, rates) in tiers {
            check_bound(&format!("{tier}.min_days"), rates.min_days.into(), MAX_POLICY_DAYS)?;
            check_bound(
                &format!("{tier}.days_per_gap"),
                rates.days_per_gap.into(),
                MAX_POLICY_DAYS,
            )?;
            check_bound(
                &format!("{tier}.cost_per_gap"),
                rates.cost_per_gap,
                MAX_POLICY_AMOUNT,
            )?;
        }
        check_bound("phase_buffer_days", self.phase_buffer_days.into(), MAX_POLICY_DAYS)?;
        check_bound("audit_fee", self.audit_fee, MAX_POLICY_AMOUNT)?;
        check_bound("certification_fee", self.certification_fee, MAX_POLICY_AMOUNT)?;
        check_bound("testing_rate_pct", self.testing_rate_pct, MAX_POLICY_RATE_PCT)?;
        check_bound("maintenance_rate_pct", self.maintenance_rate_pct, MAX_POLICY_RATE_PCT)?;
        check_bound("contingency_rate_pct", self.contingency_rate_pct, MAX_POLICY_RATE_PCT)?;
        Ok(())
    }

    /// Fixed impact for `criterion_id`, if it sits in one of the fixed sets.
    ///
    /// The critical set wins when a criterion is listed in both.
    pub fn fixed_impact(&self, criterion_id: &str) -> Option<Impact> {
        if contains(&self.critical_impact, criterion_id) {
            Some(Impact::Critical)
        } else if contains(&self.high_impact, criterion_id) {
            Some(Impact::High)
        } else {
            None
        }
    }

    /// Fixed effort for `criterion_id`, if it sits in one of the fixed sets.
    pub fn fixed_effort(&self, criterion_id: &str) -> Option<Effort> {
        if contains(&self.minimal_effort, criterion_id) {
            Some(Effort::Minimal)
        } else if contains(&self.extensive_effort, criterion_id) {
            Some(Effort::Extensive)
        } else {
            None
        }
    }
}

fn contains(list: &[String], criterion_id: &str) -> bool {
    list.iter().any(|id| id == criterion_id)
}

/// Floor of `amount * pct / 100`.
pub(crate) fn percent_of(amount: u64, pct: u64) -> u64 {
    amount.saturating_mul(pct) / 100
}
