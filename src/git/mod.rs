//! Git operations abstraction layer
//!
//! The bump workflow only needs four things from git: the list of tag
//! names, the commit to tag, tag creation and pushing. The [Repository]
//! trait captures exactly those so the workflow can run against either
//! implementation:
//!
//! - [repository::Git2Repository]: a real repository through the `git2` crate
//! - [mock::MockRepository]: an in-memory stand-in that records writes
//!
//! ```rust
//! # use git_bump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_bump::Result<()> {
//! let head = repo.head_oid()?;
//! repo.create_tag("v1.0.1", head)?;
//! repo.push_tags("origin", &["v1.0.1"])?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Tag-level git operations used by the bump workflow
///
/// Implementations map their underlying failures onto
/// [crate::error::BumpError] variants: `Tag` for tag lookup and creation,
/// `Remote` for push failures.
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// Order is unspecified; callers must not rely on it.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Get the OID of the commit HEAD points at
    fn head_oid(&self) -> Result<Oid>;

    /// Create a lightweight tag at the given OID
    ///
    /// # Returns
    /// * `Ok(())` - Tag created
    /// * `Err` - If the tag already exists or the OID cannot be found
    fn create_tag(&self, name: &str, oid: Oid) -> Result<()>;

    /// Push tags to a remote
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    /// * `tag_names` - Tags to push; each must exist locally
    fn push_tags(&self, remote: &str, tag_names: &[&str]) -> Result<()>;
}
