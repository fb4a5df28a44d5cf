use crate::error::{ReleaseError, Result};
use crate::git::{CommitInfo, HeadCommit, Repository, TagRef};
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: Vec<TagRef>,
    commits: HashMap<String, CommitInfo>,
    ranges: HashMap<String, Vec<String>>,
    head: Option<HeadCommit>,
    remotes: HashMap<String, String>,
    fetch_error: Option<String>,
    requested_ranges: RefCell<Vec<String>>,
    fetches: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            commits: HashMap::new(),
            ranges: HashMap::new(),
            head: None,
            remotes: HashMap::new(),
            fetch_error: None,
            requested_ranges: RefCell::new(Vec::new()),
            fetches: RefCell::new(Vec::new()),
        }
    }

    /// Append a tag; tags are enumerated in insertion order
    pub fn add_tag(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.tags.push(TagRef::new(name, target));
    }

    /// Register a commit that can be looked up by hash
    pub fn add_commit(
        &mut self,
        hash: impl Into<String>,
        message: impl Into<String>,
        author_name: impl Into<String>,
        author_email: impl Into<String>,
    ) {
        self.commits.insert(
            hash.into(),
            CommitInfo {
                message: message.into(),
                author_name: author_name.into(),
                author_email: author_email.into(),
            },
        );
    }

    /// Define the hashes returned for a log range such as `v1.0.0..HEAD`
    pub fn set_range(&mut self, range: impl Into<String>, hashes: Vec<String>) {
        self.ranges.insert(range.into(), hashes);
    }

    /// Set the HEAD commit
    pub fn set_head(&mut self, full_hash: impl Into<String>) {
        self.head = Some(HeadCommit::from_full_hash(full_hash));
    }

    /// Add a remote with its URL
    pub fn add_remote(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.remotes.insert(name.into(), url.into());
    }

    /// Make every fetch fail with the given reason
    pub fn fail_fetch(&mut self, reason: impl Into<String>) {
        self.fetch_error = Some(reason.into());
    }

    /// Ranges passed to [Repository::commit_log], in call order
    pub fn requested_ranges(&self) -> Vec<String> {
        self.requested_ranges.borrow().clone()
    }

    /// Remotes passed to [Repository::fetch], in call order
    pub fn fetches(&self) -> Vec<String> {
        self.fetches.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<TagRef>> {
        Ok(self.tags.clone())
    }

    fn commit_log(&self, range: &str) -> Result<Vec<String>> {
        self.requested_ranges.borrow_mut().push(range.to_string());
        Ok(self.ranges.get(range).cloned().unwrap_or_default())
    }

    fn commit_message(&self, hash: &str) -> Result<CommitInfo> {
        self.commits
            .get(hash)
            .cloned()
            .ok_or_else(|| ReleaseError::collaborator(format!("Cannot find commit {}", hash)))
    }

    fn head_commit(&self) -> Result<HeadCommit> {
        self.head
            .clone()
            .ok_or_else(|| ReleaseError::collaborator("Can not get the repository HEAD"))
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        self.remotes
            .get(remote)
            .cloned()
            .ok_or_else(|| ReleaseError::collaborator(format!("Remote '{}' not found", remote)))
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        self.fetches.borrow_mut().push(remote.to_string());
        match &self.fetch_error {
            Some(reason) => Err(ReleaseError::collaborator(reason.clone())),
            None => Ok(()),
        }
    }
}
