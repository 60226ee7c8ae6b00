//! TOML engine configuration.
//!
//! Every field defaults, so an empty document yields the compiled WCAG 2.1
//! AA policy:
//!
//! ```toml
//! wcag_version = "2.2"
//! target_level = "AA"
//!
//! [policy]
//! phase_buffer_days = 10
//! critical_impact = ["1.1.1", "2.1.1"]
//!
//! [hierarchy]
//! a = ["1.1.1"]
//! aa = ["1.1.1", "1.4.3"]
//! aaa = ["1.1.1", "1.4.3", "1.4.6"]
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::criteria::{CriteriaHierarchy, InMemoryRegistry};
use crate::domain::{ConformanceLevel, Result, WcagVersion};
use crate::engine::ComplianceEngine;
use crate::policy::RemediationPolicy;

/// Deployment-supplied tier sets replacing the built-in hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyOverride {
    pub a: Vec<String>,
    pub aa: Vec<String>,
    pub aaa: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub wcag_version: WcagVersion,
    /// Target used when a command does not name one.
    pub target_level: ConformanceLevel,
    pub policy: RemediationPolicy,
    pub hierarchy: Option<HierarchyOverride>,
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Assemble an engine with the built-in registry for the configured
    /// version. A hierarchy override that is not nested, or a policy value
    /// outside its planning range, fails here.
    pub fn build_engine(&self) -> Result<ComplianceEngine> {
        self.policy.validate()?;
        let hierarchy = match &self.hierarchy {
            Some(o) => CriteriaHierarchy::from_levels(
                self.wcag_version,
                o.a.clone(),
                o.aa.clone(),
                o.aaa.clone(),
            )?,
            None => CriteriaHierarchy::for_version(self.wcag_version).clone(),
        };
        Ok(ComplianceEngine::new(
            hierarchy,
            Arc::new(InMemoryRegistry::builtin(self.wcag_version)),
            self.policy.clone(),
        ))
    }
}
