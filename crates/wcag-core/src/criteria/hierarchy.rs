//! Cumulative required-criteria sets per conformance tier.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::tables::{self, VersionTables};
use crate::domain::{ComplianceError, ConformanceLevel, Result, WcagVersion};

/// Required criteria for one tier, cumulative over the tiers below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub level: ConformanceLevel,
    pub required_criteria: Vec<String>,
}

/// The three nested tier definitions for a WCAG version.
///
/// # Invariants
///
/// `required(A) ⊆ required(AA) ⊆ required(AAA)`. Checked on construction;
/// a hierarchy that violates it is never handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriteriaHierarchy {
    pub version: WcagVersion,
    levels: [LevelDefinition; 3],
}

impl CriteriaHierarchy {
    /// Built-in hierarchy for `version`, constructed once per process.
    pub fn for_version(version: WcagVersion) -> &'static CriteriaHierarchy {
        static WCAG21_HIERARCHY: OnceLock<CriteriaHierarchy> = OnceLock::new();
        static WCAG22_HIERARCHY: OnceLock<CriteriaHierarchy> = OnceLock::new();
        match version {
            WcagVersion::V2_1 => WCAG21_HIERARCHY
                .get_or_init(|| Self::cumulative(version, tables::for_version(version))),
            WcagVersion::V2_2 => WCAG22_HIERARCHY
                .get_or_init(|| Self::cumulative(version, tables::for_version(version))),
        }
    }

    fn cumulative(version: WcagVersion, tables: &VersionTables) -> Self {
        let ids = |rows: &[super::tables::CriterionRow]| -> Vec<String> {
            rows.iter().map(|(id, _, _)| id.to_string()).collect()
        };
        let a = ids(tables.level_a);
        let mut aa = a.clone();
        aa.extend(ids(tables.aa_additions));
        let mut aaa = aa.clone();
        aaa.extend(ids(tables.aaa_additions));
        Self::assemble(version, a, aa, aaa)
    }

    /// Build a hierarchy from explicit per-tier sets, failing fast when a
    /// tier is not a superset of the one below it.
    pub fn from_levels(
        version: WcagVersion,
        a: Vec<String>,
        aa: Vec<String>,
        aaa: Vec<String>,
    ) -> Result<Self> {
        let hierarchy = Self::assemble(version, a, aa, aaa);
        hierarchy.validate()?;
        Ok(hierarchy)
    }

    fn assemble(version: WcagVersion, a: Vec<String>, aa: Vec<String>, aaa: Vec<String>) -> Self {
        Self {
            version,
            levels: [
                LevelDefinition {
                    level: ConformanceLevel::A,
                    required_criteria: a,
                },
                LevelDefinition {
                    level: ConformanceLevel::AA,
                    required_criteria: aa,
                },
                LevelDefinition {
                    level: ConformanceLevel::AAA,
                    required_criteria: aaa,
                },
            ],
        }
    }

    /// Check tier containment.
    pub fn validate(&self) -> Result<()> {
        for pair in self.levels.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            let upper_set: HashSet<&str> =
                upper.required_criteria.iter().map(String::as_str).collect();
            let missing: Vec<String> = lower
                .required_criteria
                .iter()
                .filter(|id| !upper_set.contains(id.as_str()))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(ComplianceError::HierarchyNotNested {
                    lower: lower.level.to_string(),
                    upper: upper.level.to_string(),
                    missing,
                });
            }
        }
        Ok(())
    }

    /// Criteria required at `level`, in table order.
    pub fn required(&self, level: ConformanceLevel) -> &[String] {
        &self.definition(level).required_criteria
    }

    pub fn definition(&self, level: ConformanceLevel) -> &LevelDefinition {
        match level {
            ConformanceLevel::A => &self.levels[0],
            ConformanceLevel::AA => &self.levels[1],
            ConformanceLevel::AAA => &self.levels[2],
        }
    }

    /// Lowest tier that requires `criterion_id`, if any.
    pub fn introduced_at(&self, criterion_id: &str) -> Option<ConformanceLevel> {
        ConformanceLevel::ASCENDING
            .into_iter()
            .find(|level| self.required(*level).iter().any(|id| id == criterion_id))
    }
}
