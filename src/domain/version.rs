use crate::error::{BumpError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
///
/// Ordering is derived from field order, so versions compare by major,
/// then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse version from a tag string (e.g., "v1.2.3" -> Version(1,2,3))
    ///
    /// Surrounding whitespace is ignored, as is anything before the first
    /// `v` ("release-v1.2.3" parses). The payload runs up to the next `v`
    /// and must hold exactly three dot-separated unsigned integers.
    pub fn parse(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();

        let mut segments = trimmed.split('v');
        segments.next();
        let payload = segments
            .next()
            .ok_or_else(|| BumpError::parse(tag, "missing 'v' prefix"))?;

        let parts: Vec<&str> = payload.split('.').collect();
        if parts.len() != 3 {
            return Err(BumpError::parse(
                tag,
                format!(
                    "expected 3 components (vX.Y.Z), found {}",
                    parts.len()
                ),
            ));
        }

        Ok(Version {
            major: parse_component(tag, "major", parts[0])?,
            minor: parse_component(tag, "minor", parts[1])?,
            patch: parse_component(tag, "patch", parts[2])?,
        })
    }

    /// Bump version according to bump kind
    ///
    /// Fails with [BumpError::Overflow] when the bumped component is
    /// already `u64::MAX`.
    pub fn bump(self, kind: BumpKind) -> Result<Self> {
        let overflow = || BumpError::Overflow {
            version: self,
            kind,
        };
        let bumped = match kind {
            BumpKind::Major => Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            BumpKind::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            BumpKind::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
        };
        Ok(bumped)
    }
}

fn parse_component(tag: &str, name: &str, field: &str) -> Result<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BumpError::parse(
            tag,
            format!("invalid {} version '{}'", name, field),
        ));
    }
    field.parse::<u64>().map_err(|e| {
        BumpError::parse(tag, format!("invalid {} version '{}': {}", name, field, e))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Returns the highest version in the set.
///
/// Duplicates are fine; an empty set is an error rather than `v0.0.0`.
pub fn select_latest(versions: &[Version]) -> Result<Version> {
    versions.iter().copied().max().ok_or(BumpError::EmptySet)
}

/// Which version component to increment
///
/// Accepts exactly `major`, `minor` or `patch`, both on the command line
/// (through [FromStr]) and in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for BumpKind {
    type Error = BumpError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<BumpKind> for String {
    fn from(kind: BumpKind) -> String {
        kind.as_str().to_string()
    }
}

impl FromStr for BumpKind {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(BumpError::InvalidBumpKind(other.to_string())),
        }
    }
}
