use crate::error::{BumpError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::cell::RefCell;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

/// Credential callback trying SSH keys from ~/.ssh, then the SSH agent,
/// then git's default credential helpers.
fn credentials(
    username_from_url: Option<&str>,
    allowed_types: git2::CredentialType,
) -> std::result::Result<git2::Cred, git2::Error> {
    let username = username_from_url.unwrap_or("git");

    if allowed_types.contains(git2::CredentialType::SSH_KEY) {
        if let Some(home) = dirs::home_dir() {
            for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                let path = home.join(".ssh").join(key);
                if path.exists() {
                    if let Ok(cred) = git2::Cred::ssh_key(username, None, &path, None) {
                        return Ok(cred);
                    }
                }
            }
        }

        if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
            return Ok(cred);
        }
    }

    git2::Cred::default()
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn head_oid(&self) -> Result<Oid> {
        let commit = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| BumpError::tag(format!("Cannot resolve HEAD: {}", e)))?;

        Ok(commit.id())
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let object = self
            .repo
            .find_object(oid, None)
            .map_err(|e| BumpError::tag(format!("Cannot find object: {}", e)))?;

        self.repo
            .tag_lightweight(name, &object, false)
            .map_err(|e| BumpError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }

    fn push_tags(&self, remote_name: &str, tag_names: &[&str]) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|e| {
                BumpError::remote(format!("Cannot find remote '{}': {}", remote_name, e))
            })?;

        let rejected: RefCell<Vec<String>> = RefCell::new(Vec::new());

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            credentials(username_from_url, allowed_types)
        });
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                rejected
                    .borrow_mut()
                    .push(format!("{} ({})", refname, status));
            }
            Ok(())
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspecs: Vec<String> = tag_names
            .iter()
            .map(|tag| format!("refs/tags/{}:refs/tags/{}", tag, tag))
            .collect();

        let refspec_strs: Vec<&str> = refspecs.iter().map(|s| s.as_str()).collect();

        remote
            .push(&refspec_strs, Some(&mut push_options))
            .map_err(|e| match e.class() {
                git2::ErrorClass::Net => {
                    BumpError::remote(format!("Network error during push: {}", e))
                }
                _ => BumpError::remote(format!("Push to '{}' failed: {}", remote_name, e)),
            })?;

        drop(push_options);
        let rejected = rejected.into_inner();
        if !rejected.is_empty() {
            return Err(BumpError::remote(format!(
                "Remote '{}' rejected: {}",
                remote_name,
                rejected.join(", ")
            )));
        }

        Ok(())
    }
}
