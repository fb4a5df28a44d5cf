use crate::error::{ReleaseError, Result};
use crate::git::{CommitInfo, HeadCommit, TagRef};
use git2::{Oid, Repository as Git2Repo};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            ReleaseError::collaborator(format!(
                "{} is not a git repository: {}",
                path.display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn credentials_callbacks<'a>() -> git2::RemoteCallbacks<'a> {
        let mut attempts = CredentialAttempts::from_home();
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(move |_url, username_from_url, allowed_types| {
            attempts.next(username_from_url.unwrap_or("git"), allowed_types)
        });
        callbacks
    }
}

/// Credential sources offered to libgit2 during one fetch.
///
/// libgit2 calls back again after each rejected credential. Every source is
/// handed out at most once, then the callback fails so the fetch ends.
pub(crate) struct CredentialAttempts {
    username_tried: bool,
    agent_tried: bool,
    keys: VecDeque<PathBuf>,
    default_tried: bool,
}

impl CredentialAttempts {
    pub(crate) fn new(keys: Vec<PathBuf>) -> Self {
        CredentialAttempts {
            username_tried: false,
            agent_tried: false,
            keys: keys.into(),
            default_tried: false,
        }
    }

    /// SSH agent first, then the usual private keys under `~/.ssh`
    fn from_home() -> Self {
        let keys = dirs::home_dir()
            .map(|home| {
                ["id_ed25519", "id_rsa", "id_ecdsa"]
                    .iter()
                    .map(|key| home.join(".ssh").join(key))
                    .filter(|path| path.exists())
                    .collect()
            })
            .unwrap_or_default();
        Self::new(keys)
    }

    pub(crate) fn next(
        &mut self,
        username: &str,
        allowed: git2::CredentialType,
    ) -> std::result::Result<git2::Cred, git2::Error> {
        if allowed.contains(git2::CredentialType::USERNAME) && !self.username_tried {
            self.username_tried = true;
            return git2::Cred::username(username);
        }

        if allowed.contains(git2::CredentialType::SSH_KEY) {
            if !self.agent_tried {
                self.agent_tried = true;
                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }
            }

            while let Some(path) = self.keys.pop_front() {
                debug!(key = %path.display(), "trying SSH key");
                if let Ok(cred) = git2::Cred::ssh_key(username, None, &path, None) {
                    return Ok(cred);
                }
            }
        }

        if allowed.contains(git2::CredentialType::DEFAULT) && !self.default_tried {
            self.default_tried = true;
            return git2::Cred::default();
        }

        Err(git2::Error::from_str(
            "authentication failed: no more credentials to try",
        ))
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<TagRef>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::with_capacity(names.len());

        for name in names.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;
            match reference.peel_to_commit() {
                Ok(commit) => tags.push(TagRef::new(name, commit.id().to_string())),
                Err(e) => debug!(tag = name, error = %e, "skipping tag that does not point to a commit"),
            }
        }

        Ok(tags)
    }

    fn commit_log(&self, range: &str) -> Result<Vec<String>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(git2::Sort::TIME)?;
        revwalk.push_range(range).map_err(|e| {
            ReleaseError::collaborator(format!("Cannot walk range '{}': {}", range, e.message()))
        })?;

        revwalk
            .map(|oid| oid.map(|oid| oid.to_string()).map_err(ReleaseError::from))
            .collect()
    }

    fn commit_message(&self, hash: &str) -> Result<CommitInfo> {
        let oid = Oid::from_str(hash)?;
        let commit = self.repo.find_commit(oid).map_err(|e| {
            ReleaseError::collaborator(format!("Cannot find commit {}: {}", hash, e.message()))
        })?;
        let author = commit.author();

        Ok(CommitInfo {
            message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
            author_name: String::from_utf8_lossy(author.name_bytes()).into_owned(),
            author_email: String::from_utf8_lossy(author.email_bytes()).into_owned(),
        })
    }

    fn head_commit(&self) -> Result<HeadCommit> {
        let commit = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| {
                ReleaseError::collaborator(format!(
                    "Can not get the repository HEAD. Do you have any commits? ({})",
                    e.message()
                ))
            })?;

        Ok(HeadCommit::from_full_hash(commit.id().to_string()))
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        let found = self
            .repo
            .find_remote(remote)
            .map_err(|_| ReleaseError::collaborator(format!("Remote '{}' not found", remote)))?;

        found
            .url()
            .map(str::to_string)
            .ok_or_else(|| ReleaseError::collaborator(format!("Remote '{}' has no URL", remote)))
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        let mut found = self
            .repo
            .find_remote(remote)
            .map_err(|_| ReleaseError::collaborator(format!("Remote '{}' not found", remote)))?;

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(Self::credentials_callbacks());

        found
            .fetch(&["+refs/tags/*:refs/tags/*"], Some(&mut fetch_options), None)
            .map_err(|e| {
                ReleaseError::collaborator(format!(
                    "Failed to fetch from remote '{}': {}",
                    remote,
                    e.message()
                ))
            })?;

        Ok(())
    }
}
