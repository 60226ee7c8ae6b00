//! Sequential phase scheduling with inter-phase buffers and milestones.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::phase::CompliancePhase;

/// Risk factors attached to every timeline.
pub const RISK_FACTORS: [&str; 5] = [
    "Resource availability may delay remediation work",
    "Technical complexity of fixes may be underestimated",
    "Third-party components or vendors may delay fixes",
    "Scope creep from newly discovered issues",
    "Accessibility testing capacity may become a bottleneck",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub phase_id: String,
    pub date: DateTime<Utc>,
    pub criteria: Vec<String>,
    pub status: MilestoneStatus,
}

/// Scheduled window of one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseWindow {
    pub phase_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub start_date: DateTime<Utc>,
    pub target_completion_date: DateTime<Utc>,
    pub phases: Vec<PhaseWindow>,
    pub milestones: Vec<Milestone>,
    pub risk_factors: Vec<String>,
}

/// Lay phases end to end from `start`, with `buffer_days` between
/// consecutive phases and none before the first.
/// `date + days`, clamped to the latest representable instant.
fn add_days(date: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    date.checked_add_signed(Duration::days(i64::from(days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

pub fn build_timeline(
    phases: &[CompliancePhase],
    start: DateTime<Utc>,
    buffer_days: u32,
) -> Timeline {
    let mut windows = Vec::with_capacity(phases.len());
    let mut milestones = Vec::with_capacity(phases.len() * 2);
    let mut cursor = start;

    for (i, phase) in phases.iter().enumerate() {
        if i > 0 {
            cursor = add_days(cursor, buffer_days);
        }
        let phase_start = cursor;
        let phase_end = add_days(phase_start, phase.estimated_duration_days);

        milestones.push(Milestone {
            name: format!("{} Start", phase.name),
            phase_id: phase.id.clone(),
            date: phase_start,
            criteria: phase.criteria.clone(),
            status: MilestoneStatus::Pending,
        });
        milestones.push(Milestone {
            name: format!("{} Complete", phase.name),
            phase_id: phase.id.clone(),
            date: phase_end,
            criteria: phase.criteria.clone(),
            status: MilestoneStatus::Pending,
        });
        windows.push(PhaseWindow {
            phase_id: phase.id.clone(),
            start_date: phase_start,
            end_date: phase_end,
        });
        cursor = phase_end;
    }

    Timeline {
        start_date: start,
        target_completion_date: cursor,
        phases: windows,
        milestones,
        risk_factors: RISK_FACTORS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::phase::PhaseTier;
    use chrono::TimeZone;

    fn phase(id: &str, days: u32) -> CompliancePhase {
        CompliancePhase {
            id: id.to_string(),
            tier: PhaseTier::Polish,
            name: id.to_string(),
            description: String::new(),
            criteria: vec!["1.3.3".to_string()],
            estimated_duration_days: days,
            estimated_cost: 0,
            dependencies: vec![],
            deliverables: vec![],
            acceptance_criteria: vec![],
        }
    }

    #[test]
    fn test_single_phase_has_no_buffer() {
        let start = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        let timeline = build_timeline(&[phase("phase-3", 15)], start, 7);
        assert_eq!(timeline.phases[0].start_date, start);
        assert_eq!(timeline.target_completion_date, start + Duration::days(15));
        assert_eq!(timeline.milestones.len(), 2);
        assert_eq!(timeline.milestones[0].name, "phase-3 Start");
        assert_eq!(timeline.milestones[1].name, "phase-3 Complete");
    }

    #[test]
    fn test_buffer_only_between_phases() {
        let start = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        let timeline = build_timeline(&[phase("a", 10), phase("b", 10)], start, 7);
        assert_eq!(timeline.phases[1].start_date, start + Duration::days(17));
        assert_eq!(timeline.target_completion_date, start + Duration::days(27));
    }

    #[test]
    fn test_far_future_dates_clamp() {
        let start = DateTime::<Utc>::MAX_UTC - Duration::days(10);
        let timeline = build_timeline(&[phase("a", u32::MAX), phase("b", 5)], start, 7);
        assert_eq!(timeline.phases[0].end_date, DateTime::<Utc>::MAX_UTC);
        assert_eq!(timeline.target_completion_date, DateTime::<Utc>::MAX_UTC);
        assert_eq!(timeline.milestones.len(), 4);
    }

    #[test]
    fn test_empty_timeline_completes_at_start() {
        let start = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        let timeline = build_timeline(&[], start, 7);
        assert_eq!(timeline.target_completion_date, start);
        assert!(timeline.phases.is_empty());
        assert_eq!(timeline.risk_factors.len(), RISK_FACTORS.len());
    }
}
