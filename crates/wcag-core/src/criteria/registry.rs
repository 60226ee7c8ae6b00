//! Guideline Registry seam: criterion metadata looked up by id.
//!
//! The engine only reads from a registry. Missing entries are not errors;
//! callers fall back to evaluation-derived data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::tables::{self, CriterionRow};
use crate::domain::{ConformanceLevel, Result, WcagVersion};

/// POUR principle a criterion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Principle {
    Perceivable,
    Operable,
    Understandable,
    Robust,
}

impl Principle {
    /// Principle implied by the leading component of a criterion id.
    pub fn from_criterion_id(criterion_id: &str) -> Option<Self> {
        match criterion_id.split('.').next()? {
            "1" => Some(Self::Perceivable),
            "2" => Some(Self::Operable),
            "3" => Some(Self::Understandable),
            "4" => Some(Self::Robust),
            _ => None,
        }
    }
}

/// Registry metadata for one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineEntry {
    pub criterion_id: String,
    pub principle: Principle,
    pub level: ConformanceLevel,
    pub title: String,
    /// Human-readable success-criteria text.
    #[serde(default)]
    pub success_criteria: Vec<String>,
}

/// Read-only lookup of known criteria.
///
/// Implementations must be safe to share across threads; the engine calls
/// `lookup` concurrently from independent requests.
pub trait GuidelineRegistry: Send + Sync {
    /// Entry for `criterion_id`, or `None` when the registry does not know it.
    fn lookup(&self, criterion_id: &str) -> Option<&GuidelineEntry>;
}

/// Map-backed registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    entries: HashMap<String, GuidelineEntry>,
}

impl InMemoryRegistry {
    pub fn new(entries: impl IntoIterator<Item = GuidelineEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.criterion_id.clone(), e))
                .collect(),
        }
    }

    /// Parse a JSON array of [`GuidelineEntry`] records.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<GuidelineEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Registry seeded from the built-in tables for `version`.
    pub fn builtin(version: WcagVersion) -> Self {
        let tables = tables::for_version(version);
        let rows = |table: &'static [CriterionRow], level: ConformanceLevel| {
            table.iter().filter_map(move |(id, title, summary)| {
                Some(GuidelineEntry {
                    criterion_id: id.to_string(),
                    principle: Principle::from_criterion_id(id)?,
                    level,
                    title: title.to_string(),
                    success_criteria: vec![summary.to_string()],
                })
            })
        };
        Self::new(
            rows(tables.level_a, ConformanceLevel::A)
                .chain(rows(tables.aa_additions, ConformanceLevel::AA))
                .chain(rows(tables.aaa_additions, ConformanceLevel::AAA)),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GuidelineRegistry for InMemoryRegistry {
    fn lookup(&self, criterion_id: &str) -> Option<&GuidelineEntry> {
        self.entries.get(criterion_id)
    }
}
