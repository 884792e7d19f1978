use crate::domain::version::Version;
use crate::error::{BumpError, Result};
use regex::Regex;
use std::collections::HashMap;

/// What to do with a tag that does not parse as a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedTagPolicy {
    /// Record the tag as skipped and keep going
    #[default]
    Skip,
    /// Abort on the first malformed tag
    Strict,
}

/// Optional tag name filter applied before parsing
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    regex: Option<Regex>,
}

impl TagFilter {
    /// Filter that accepts every tag
    pub fn any() -> Self {
        TagFilter { regex: None }
    }

    /// Build a filter from a regex pattern (e.g. `^v\d+`)
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            BumpError::config(format!("Invalid tag filter '{}': {}", pattern, e))
        })?;
        Ok(TagFilter { regex: Some(regex) })
    }

    /// Build from an optional pattern, accepting everything when absent
    pub fn from_pattern(pattern: Option<&str>) -> Result<Self> {
        match pattern {
            Some(p) => Self::new(p),
            None => Ok(Self::any()),
        }
    }

    pub fn matches(&self, tag: &str) -> bool {
        self.regex.as_ref().map_or(true, |re| re.is_match(tag))
    }
}

/// A tag that was left out of the version set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTag {
    pub tag: String,
    pub reason: String,
}

/// Versions read from a tag list, plus what was left out along the way
#[derive(Debug, Clone, Default)]
pub struct TagScan {
    pub versions: Vec<Version>,
    pub skipped: Vec<SkippedTag>,
    /// Tags rejected by the filter
    pub filtered: usize,
    /// Versions reached by more than one tag name, with the tag names
    pub duplicates: Vec<(Version, Vec<String>)>,
}

/// Parses a raw tag list into a version set.
///
/// Blank entries are ignored. Duplicate versions stay in the set and are
/// reported in [`TagScan::duplicates`].
pub fn collect_versions<S: AsRef<str>>(
    raw_tags: &[S],
    policy: MalformedTagPolicy,
    filter: &TagFilter,
) -> Result<TagScan> {
    let mut scan = TagScan::default();
    let mut seen: HashMap<Version, Vec<String>> = HashMap::new();

    for raw in raw_tags {
        let tag = raw.as_ref().trim();
        if tag.is_empty() {
            continue;
        }
        if !filter.matches(tag) {
            scan.filtered += 1;
            continue;
        }

        match Version::parse(tag) {
            Ok(version) => {
                seen.entry(version).or_default().push(tag.to_string());
                scan.versions.push(version);
            }
            Err(BumpError::Parse { raw, reason }) if policy == MalformedTagPolicy::Skip => {
                tracing::debug!(tag = %raw, %reason, "skipping tag that is not a version");
                scan.skipped.push(SkippedTag { tag: raw, reason });
            }
            Err(e) => return Err(e),
        }
    }

    let mut duplicates: Vec<(Version, Vec<String>)> =
        seen.into_iter().filter(|(_, tags)| tags.len() > 1).collect();
    duplicates.sort_by(|a, b| a.0.cmp(&b.0));
    scan.duplicates = duplicates;

    tracing::debug!(
        versions = scan.versions.len(),
        skipped = scan.skipped.len(),
        filtered = scan.filtered,
        "collected version tags"
    );

    Ok(scan)
}
