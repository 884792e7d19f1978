use crate::cli::WorkflowResult;
use crate::domain::{BumpKind, Version};
use thiserror::Error;

/// Unified error type for git-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Cannot parse tag '{raw}': {reason}")]
    Parse { raw: String, reason: String },

    #[error("No version tags found to bump from")]
    EmptySet,

    #[error("Invalid bump kind: '{0}'. Available: major, minor or patch")]
    InvalidBumpKind(String),

    #[error("Cannot bump {kind} version of {version}: component would overflow")]
    Overflow { version: Version, kind: BumpKind },

    /// The tag was created locally but could not be pushed; `result`
    /// describes what was done before the push failed.
    #[error(
        "Tag '{}' was created locally but pushing it to '{remote}' failed: {source}",
        .result.tag
    )]
    TagNotPushed {
        result: Box<WorkflowResult>,
        remote: String,
        source: Box<BumpError>,
    },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in git-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a parse error naming the offending tag
    pub fn parse(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        BumpError::Parse {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        BumpError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        BumpError::Remote(msg.into())
    }

    /// True for errors raised while reading a tag name as a version.
    pub fn is_parse(&self) -> bool {
        matches!(self, BumpError::Parse { .. })
    }
}
