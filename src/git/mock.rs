use crate::error::{BumpError, Result};
use crate::git::Repository;
use git2::Oid;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// Tags created through the trait are recorded so tests can assert on
/// what the workflow wrote.
pub struct MockRepository {
    tags: RefCell<HashMap<String, Oid>>,
    head: Option<Oid>,
    created: RefCell<Vec<String>>,
    pushed: RefCell<Vec<(String, String)>>,
    fail_push: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: RefCell::new(HashMap::new()),
            head: None,
            created: RefCell::new(Vec::new()),
            pushed: RefCell::new(Vec::new()),
            fail_push: false,
        }
    }

    /// Build a mock whose HEAD and tags all point at the same commit
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let head = Oid::from_bytes(&[1; 20]).ok();
        let mut repo = Self::new();
        repo.head = head;
        if let Some(oid) = head {
            for tag in tags {
                repo.add_tag(tag, oid);
            }
        }
        repo
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.get_mut().insert(name.into(), oid);
    }

    /// Set the commit HEAD points at
    pub fn set_head(&mut self, oid: Oid) {
        self.head = Some(oid);
    }

    /// Commit a tag points at, if the tag exists
    pub fn tag_target(&self, name: &str) -> Option<Oid> {
        self.tags.borrow().get(name).copied()
    }

    /// Make every push fail with a remote error
    pub fn fail_pushes(&mut self) {
        self.fail_push = true;
    }

    /// Tags created through [Repository::create_tag], in order
    pub fn created_tags(&self) -> Vec<String> {
        self.created.borrow().clone()
    }

    /// `(remote, tag)` pairs pushed through [Repository::push_tags], in order
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.borrow().keys().cloned().collect())
    }

    fn head_oid(&self) -> Result<Oid> {
        self.head
            .ok_or_else(|| BumpError::tag("HEAD does not point at a commit"))
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let mut tags = self.tags.borrow_mut();
        if tags.contains_key(name) {
            return Err(BumpError::tag(format!("Tag '{}' already exists", name)));
        }
        tags.insert(name.to_string(), oid);
        self.created.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn push_tags(&self, remote: &str, tag_names: &[&str]) -> Result<()> {
        if self.fail_push {
            return Err(BumpError::remote(format!("Cannot reach remote '{}'", remote)));
        }
        let tags = self.tags.borrow();
        let mut pushed = self.pushed.borrow_mut();
        for name in tag_names {
            if !tags.contains_key(*name) {
                return Err(BumpError::tag(format!("Tag '{}' does not exist", name)));
            }
            pushed.push((remote.to_string(), name.to_string()));
        }
        Ok(())
    }
}
