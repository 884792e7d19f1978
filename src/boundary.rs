use crate::domain::{TagScan, Version};
use std::fmt;

/// Warnings raised while reading the repository's tags.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// More than one tag name resolves to the same version
    DuplicateVersion { version: Version, tags: Vec<String> },
}

impl BoundaryWarning {
    /// Collects the warnings worth reporting from a tag scan
    pub fn from_scan(scan: &TagScan) -> Vec<BoundaryWarning> {
        let unparsable = scan.skipped.iter().map(|s| BoundaryWarning::UnparsableTag {
            tag: s.tag.clone(),
            reason: s.reason.clone(),
        });
        let duplicates = scan
            .duplicates
            .iter()
            .map(|(version, tags)| BoundaryWarning::DuplicateVersion {
                version: *version,
                tags: tags.clone(),
            });
        unparsable.chain(duplicates).collect()
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Skipping tag '{}': {}", tag, reason)
            }
            BoundaryWarning::DuplicateVersion { version, tags } => {
                write!(
                    f,
                    "Version {} is tagged more than once ({})",
                    version,
                    tags.join(", ")
                )
            }
        }
    }
}
