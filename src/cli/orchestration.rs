//! Main workflow orchestration logic
//!
//! Reads the repository's tags, computes the next version, and only then
//! asks the repository to create and push the new tag. Nothing is written
//! if any step before tag creation fails.

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{
    collect_versions, select_latest, BumpKind, MalformedTagPolicy, TagFilter, Version,
};
use crate::error::{BumpError, Result};
use crate::git::Repository;

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic,
/// so the workflow can be called programmatically without clap.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Which component to increment
    pub bump: BumpKind,

    /// Remote the new tag is pushed to
    pub remote: String,

    /// Compute and report only - don't create tags or push
    pub dry_run: bool,

    /// Push the tag after creating it
    pub push: bool,

    /// What to do with tags that aren't versions
    pub policy: MalformedTagPolicy,

    /// Only consider tags matching this regex
    pub tag_filter: Option<String>,
}

impl BumpWorkflowArgs {
    /// Workflow arguments taken straight from configuration
    pub fn from_config(config: &Config) -> Self {
        BumpWorkflowArgs {
            bump: config.bump,
            remote: config.remote.clone(),
            dry_run: false,
            push: config.push,
            policy: config.malformed_tag_policy(),
            tag_filter: config.tag_filter.clone(),
        }
    }
}

impl Default for BumpWorkflowArgs {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Highest version found among the tags
    pub previous: Version,

    /// The bumped version
    pub next: Version,

    /// Tag name for the bumped version
    pub tag: String,

    /// Whether the tag was created locally
    pub created: bool,

    /// Whether the tag was pushed to remote
    pub pushed: bool,

    /// Non-fatal issues found while reading tags
    pub warnings: Vec<BoundaryWarning>,
}

/// Main bump workflow
///
/// 1. List tags and parse them into versions
/// 2. Select the latest version and bump it
/// 3. Create the new tag at HEAD (skipped on dry run)
/// 4. Push it to the remote (skipped on dry run or when push is disabled)
///
/// A push failure after the tag was created is returned as
/// [BumpError::TagNotPushed], carrying the partial result.
pub fn run_bump_workflow<R: Repository>(
    args: &BumpWorkflowArgs,
    repo: &R,
) -> Result<WorkflowResult> {
    let filter = TagFilter::from_pattern(args.tag_filter.as_deref())?;

    let tags = repo.list_tags()?;
    let scan = collect_versions(&tags, args.policy, &filter)?;
    let warnings = BoundaryWarning::from_scan(&scan);

    let previous = select_latest(&scan.versions)?;
    tracing::debug!(
        found_tags = tags.len(),
        latest_tag = %previous,
        "git information"
    );

    let next = previous.bump(args.bump)?;
    let tag = next.to_string();
    tracing::debug!(version = %tag, bump = %args.bump, "computed next tag");

    let mut result = WorkflowResult {
        previous,
        next,
        tag,
        created: false,
        pushed: false,
        warnings,
    };

    if args.dry_run {
        tracing::info!(tag = %result.tag, "dry run, not tagging or pushing");
        return Ok(result);
    }

    let head = repo.head_oid()?;
    repo.create_tag(&result.tag, head)?;
    result.created = true;
    tracing::info!(tag = %result.tag, commit = %head, "created tag");

    if args.push {
        if let Err(e) = repo.push_tags(&args.remote, &[result.tag.as_str()]) {
            tracing::warn!(
                tag = %result.tag,
                remote = %args.remote,
                "push failed after creating tag"
            );
            return Err(BumpError::TagNotPushed {
                result: Box::new(result),
                remote: args.remote.clone(),
                source: Box::new(e),
            });
        }
        result.pushed = true;
        tracing::info!(tag = %result.tag, remote = %args.remote, "pushed tag");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;
    use git2::Oid;

    fn args(bump: BumpKind) -> BumpWorkflowArgs {
        BumpWorkflowArgs {
            bump,
            ..BumpWorkflowArgs::default()
        }
    }

    #[test]
    fn test_minor_bump_creates_and_pushes() {
        let repo = MockRepository::with_tags(["v1.0.0", "v1.2.0", "v1.1.9"]);

        let result = run_bump_workflow(&args(BumpKind::Minor), &repo).unwrap();

        assert_eq!(result.previous, Version::new(1, 2, 0));
        assert_eq!(result.tag, "v1.3.0");
        assert!(result.created);
        assert!(result.pushed);
        assert_eq!(repo.created_tags(), vec!["v1.3.0".to_string()]);
        assert_eq!(
            repo.pushed_tags(),
            vec![("origin".to_string(), "v1.3.0".to_string())]
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let repo = MockRepository::with_tags(["v0.1.0"]);
        let args = BumpWorkflowArgs {
            dry_run: true,
            ..args(BumpKind::Major)
        };

        let result = run_bump_workflow(&args, &repo).unwrap();

        assert_eq!(result.tag, "v1.0.0");
        assert!(!result.created);
        assert!(!result.pushed);
        assert!(repo.created_tags().is_empty());
        assert!(repo.pushed_tags().is_empty());
    }

    #[test]
    fn test_push_disabled_creates_only() {
        let repo = MockRepository::with_tags(["v0.1.0"]);
        let args = BumpWorkflowArgs {
            push: false,
            ..args(BumpKind::Patch)
        };

        let result = run_bump_workflow(&args, &repo).unwrap();

        assert!(result.created);
        assert!(!result.pushed);
        assert_eq!(repo.created_tags(), vec!["v0.1.1".to_string()]);
        assert!(repo.pushed_tags().is_empty());
    }

    #[test]
    fn test_no_tags_is_an_error() {
        let repo = MockRepository::with_tags(Vec::<String>::new());
        let err = run_bump_workflow(&args(BumpKind::Patch), &repo).unwrap_err();
        assert!(matches!(err, BumpError::EmptySet));
        assert!(repo.created_tags().is_empty());
    }

    #[test]
    fn test_only_malformed_tags_is_an_error() {
        let repo = MockRepository::with_tags(["nightly", "latest"]);
        let err = run_bump_workflow(&args(BumpKind::Patch), &repo).unwrap_err();
        assert!(matches!(err, BumpError::EmptySet));
    }

    #[test]
    fn test_malformed_tags_are_skipped_with_warnings() {
        let repo = MockRepository::with_tags(["v2.0.0", "nightly"]);

        let result = run_bump_workflow(&args(BumpKind::Patch), &repo).unwrap();

        assert_eq!(result.tag, "v2.0.1");
        assert_eq!(result.warnings.len(), 1);
        assert!(matches!(
            &result.warnings[0],
            BoundaryWarning::UnparsableTag { tag, .. } if tag == "nightly"
        ));
    }

    #[test]
    fn test_strict_policy_aborts_before_writing() {
        let repo = MockRepository::with_tags(["v2.0.0", "nightly"]);
        let args = BumpWorkflowArgs {
            policy: MalformedTagPolicy::Strict,
            ..args(BumpKind::Patch)
        };

        let err = run_bump_workflow(&args, &repo).unwrap_err();

        assert!(err.is_parse());
        assert!(repo.created_tags().is_empty());
    }

    #[test]
    fn test_invalid_filter_aborts_before_reading() {
        let repo = MockRepository::with_tags(["v2.0.0"]);
        let args = BumpWorkflowArgs {
            tag_filter: Some("(".to_string()),
            ..args(BumpKind::Patch)
        };
        assert!(run_bump_workflow(&args, &repo).is_err());
    }

    #[test]
    fn test_prefixed_tags_count_toward_latest() {
        let repo = MockRepository::with_tags(["v1.0.0", "x-v1.0.1"]);
        let result = run_bump_workflow(&args(BumpKind::Patch), &repo).unwrap();
        assert_eq!(result.tag, "v1.0.2");
    }

    #[test]
    fn test_existing_next_tag_fails_without_push() {
        let repo = MockRepository::with_tags(["release-v1.0.0", "v1.0.1"]);
        let args = BumpWorkflowArgs {
            tag_filter: Some("^release-".to_string()),
            ..args(BumpKind::Patch)
        };

        let err = run_bump_workflow(&args, &repo).unwrap_err();
        assert!(err.to_string().starts_with("Tag error"));
        assert!(repo.pushed_tags().is_empty());
    }

    #[test]
    fn test_push_failure_is_reported_after_create() {
        let mut repo = MockRepository::with_tags(["v1.0.0", "nightly"]);
        repo.fail_pushes();

        let err = run_bump_workflow(&args(BumpKind::Patch), &repo).unwrap_err();

        match err {
            BumpError::TagNotPushed {
                result,
                remote,
                source,
            } => {
                assert_eq!(result.tag, "v1.0.1");
                assert!(result.created);
                assert!(!result.pushed);
                assert_eq!(result.warnings.len(), 1);
                assert_eq!(remote, "origin");
                assert!(matches!(*source, BumpError::Remote(_)));
            }
            other => panic!("expected TagNotPushed, got {:?}", other),
        }
        assert_eq!(repo.created_tags(), vec!["v1.0.1".to_string()]);
    }

    #[test]
    fn test_overflowing_bump_writes_nothing() {
        let cases = [
            ("v18446744073709551615.0.0", BumpKind::Major),
            ("v1.18446744073709551615.0", BumpKind::Minor),
            ("v1.0.18446744073709551615", BumpKind::Patch),
        ];
        for (tag, kind) in cases {
            let repo = MockRepository::with_tags([tag]);
            let err = run_bump_workflow(&args(kind), &repo).unwrap_err();
            assert!(matches!(err, BumpError::Overflow { .. }), "{} {}", tag, kind);
            assert!(repo.created_tags().is_empty());
        }
    }

    #[test]
    fn test_new_tag_points_at_head() {
        let old = Oid::from_bytes(&[1; 20]).unwrap();
        let head = Oid::from_bytes(&[2; 20]).unwrap();
        let mut repo = MockRepository::new();
        repo.add_tag("v0.3.0", old);
        repo.set_head(head);

        let result = run_bump_workflow(&args(BumpKind::Minor), &repo).unwrap();

        assert_eq!(result.tag, "v0.4.0");
        assert_eq!(repo.tag_target("v0.4.0"), Some(head));
        assert_eq!(repo.tag_target("v0.3.0"), Some(old));
        assert_eq!(repo.head_oid().unwrap(), head);
    }
}
