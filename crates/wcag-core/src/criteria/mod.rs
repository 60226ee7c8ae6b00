//! Static WCAG data: tier hierarchy, guideline registry, and the versioned
//! tables both are built from.

pub mod hierarchy;
pub mod registry;
mod tables;

pub use hierarchy::{CriteriaHierarchy, LevelDefinition};
pub use registry::{GuidelineEntry, GuidelineRegistry, InMemoryRegistry, Principle};

use crate::domain::WcagVersion;

/// Curated reference links for `criterion_id` in `version`, in table order.
pub(crate) fn curated_resources(
    version: WcagVersion,
    criterion_id: &str,
) -> impl Iterator<Item = &'static str> + '_ {
    tables::for_version(version)
        .curated_resources
        .iter()
        .filter(move |(id, _)| *id == criterion_id)
        .map(|(_, url)| *url)
}
