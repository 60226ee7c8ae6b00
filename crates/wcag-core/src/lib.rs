//! WCAG compliance assessment and remediation roadmap engine.
//!
//! Turns raw accessibility evaluations into:
//! - the highest conformance tier achieved ([`ComplianceEngine::assess_level`])
//! - a prioritized list of unmet criteria ([`ComplianceEngine::find_gaps`])
//! - a phased remediation plan with timeline and budget
//!   ([`ComplianceEngine::build_roadmap`])
//! - a digest-sealable certification ([`ComplianceEngine::generate_certificate`])
//!
//! All four operations are pure: no I/O, no shared mutable state, and the
//! clock is always passed in.

pub mod artifact;
pub mod assess;
pub mod certificate;
pub mod config;
pub mod criteria;
pub mod domain;
pub mod engine;
pub mod gaps;
pub mod obs;
pub mod policy;
pub mod roadmap;
pub mod telemetry;

pub use domain::{
    merge_batches, ComplianceError, ComplianceLevel, ConformanceLevel, Evaluation,
    EvaluationBatch, EvaluationStatus, Result, Severity, ValidationError, WcagVersion,
};

pub use criteria::{
    CriteriaHierarchy, GuidelineEntry, GuidelineRegistry, InMemoryRegistry, LevelDefinition,
    Principle,
};

pub use artifact::{
    certificate_digest, read_certificate_artifact, write_certificate_artifact, write_json,
};
pub use assess::assess_level;
pub use certificate::{
    compliance_score, generate_certificate, CertificateRequest, CertificationStatus,
    ComplianceCertification,
};
pub use config::{EngineConfig, HierarchyOverride};
pub use engine::ComplianceEngine;
pub use gaps::{find_gaps, priority_score, ComplianceGap, Effort, GapStatus, Impact};
pub use obs::{
    emit_certificate_issued, emit_gaps_found, emit_level_assessed, emit_roadmap_built,
    AssessmentSpan,
};
pub use policy::{PhaseRates, RemediationPolicy};
pub use roadmap::{
    build_roadmap, BudgetEstimate, ComplianceRoadmap, CompliancePhase, Milestone,
    MilestoneStatus, PhaseCost, PhaseTier, PhaseWindow, Timeline,
};
pub use telemetry::init_tracing;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
