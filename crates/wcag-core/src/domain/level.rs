//! Conformance tiers and WCAG versions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ComplianceError;

/// WCAG edition a set of static tables belongs to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum WcagVersion {
    #[default]
    #[serde(rename = "2.1")]
    V2_1,
    #[serde(rename = "2.2")]
    V2_2,
}

impl WcagVersion {
    /// Dotted version string, e.g. `"2.1"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
            Self::V2_2 => "2.2",
        }
    }

    /// Path segment used by the W3C WAI site, e.g. `"WCAG21"`.
    pub fn wai_slug(self) -> &'static str {
        match self {
            Self::V2_1 => "WCAG21",
            Self::V2_2 => "WCAG22",
        }
    }
}

impl fmt::Display for WcagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WcagVersion {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches(['v', 'V']) {
            "2.1" => Ok(Self::V2_1),
            "2.2" => Ok(Self::V2_2),
            other => Err(ComplianceError::UnknownVersion(other.to_string())),
        }
    }
}

/// Conformance tier a caller can target.
///
/// Ordered `A < AA < AAA`; each tier requires every criterion of the tiers
/// below it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ConformanceLevel {
    A,
    #[default]
    AA,
    AAA,
}

impl ConformanceLevel {
    /// All tiers in ascending order.
    pub const ASCENDING: [ConformanceLevel; 3] = [Self::A, Self::AA, Self::AAA];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }
}

impl fmt::Display for ConformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConformanceLevel {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AA" => Ok(Self::AA),
            "AAA" => Ok(Self::AAA),
            _ => Err(ComplianceError::UnknownLevel(s.to_string())),
        }
    }
}

/// Highest tier actually achieved by an evaluation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComplianceLevel {
    #[serde(rename = "non-compliant")]
    NonCompliant,
    A,
    AA,
    AAA,
}

impl ComplianceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NonCompliant => "non-compliant",
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }

    /// Whether this result meets or exceeds `target`.
    pub fn satisfies(self, target: ConformanceLevel) -> bool {
        self >= Self::from(target)
    }
}

impl From<ConformanceLevel> for ComplianceLevel {
    fn from(level: ConformanceLevel) -> Self {
        match level {
            ConformanceLevel::A => Self::A,
            ConformanceLevel::AA => Self::AA,
            ConformanceLevel::AAA => Self::AAA,
        }
    }
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(ConformanceLevel::A < ConformanceLevel::AA);
        assert!(ConformanceLevel::AA < ConformanceLevel::AAA);
        assert!(ComplianceLevel::NonCompliant < ComplianceLevel::A);
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!("aa".parse::<ConformanceLevel>().unwrap(), ConformanceLevel::AA);
        assert_eq!(" AAA ".parse::<ConformanceLevel>().unwrap(), ConformanceLevel::AAA);
        assert!("AAAA".parse::<ConformanceLevel>().is_err());
    }

    #[test]
    fn test_parse_version() {
        assert_eq!("2.2".parse::<WcagVersion>().unwrap(), WcagVersion::V2_2);
        assert_eq!("v2.1".parse::<WcagVersion>().unwrap(), WcagVersion::V2_1);
        assert!("3.0".parse::<WcagVersion>().is_err());
    }

    #[test]
    fn test_satisfies() {
        assert!(ComplianceLevel::AAA.satisfies(ConformanceLevel::AA));
        assert!(ComplianceLevel::AA.satisfies(ConformanceLevel::AA));
        assert!(!ComplianceLevel::A.satisfies(ConformanceLevel::AA));
        assert!(!ComplianceLevel::NonCompliant.satisfies(ConformanceLevel::A));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&ComplianceLevel::NonCompliant).unwrap(),
            "\"non-compliant\""
        );
        assert_eq!(serde_json::to_string(&WcagVersion::V2_1).unwrap(), "\"2.1\"");
        let level: ConformanceLevel = serde_json::from_str("\"AA\"").unwrap();
        assert_eq!(level, ConformanceLevel::AA);
    }
}
