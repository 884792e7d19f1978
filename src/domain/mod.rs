//! Domain logic - pure version rules independent of git operations

pub mod tag;
pub mod version;

pub use tag::{collect_versions, MalformedTagPolicy, SkippedTag, TagFilter, TagScan};
pub use version::{select_latest, BumpKind, Version};
