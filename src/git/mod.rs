//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git metadata the
//! release pipeline consumes, allowing for multiple implementations
//! including real repositories and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use release_that::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> release_that::Result<()> {
//! if let Some(tag) = repo.latest_tag()? {
//!     let hashes = repo.commit_log(&format!("{}..HEAD", tag.name))?;
//!     println!("{} commits since {}", hashes.len(), tag.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Length of the abbreviated commit hash used in notes and hook variables
pub const SHORT_HASH_LEN: usize = 7;

/// A tag as enumerated by the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    /// Short tag name (e.g., "v1.2.0")
    pub name: String,
    /// Full hash of the commit the tag points to
    pub target: String,
}

impl TagRef {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        TagRef {
            name: name.into(),
            target: target.into(),
        }
    }
}

/// Message and author of a single commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// The full commit message, body included
    pub message: String,
    pub author_name: String,
    pub author_email: String,
}

/// The commit HEAD points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadCommit {
    pub short_hash: String,
    pub full_hash: String,
}

impl HeadCommit {
    pub fn from_full_hash(full_hash: impl Into<String>) -> Self {
        let full_hash = full_hash.into();
        HeadCommit {
            short_hash: short_hash(&full_hash).to_string(),
            full_hash,
        }
    }
}

/// Abbreviate a commit hash to [SHORT_HASH_LEN] characters
pub fn short_hash(hash: &str) -> &str {
    match hash.char_indices().nth(SHORT_HASH_LEN) {
        Some((idx, _)) => &hash[..idx],
        None => hash,
    }
}

/// Git metadata provider consumed by the release pipeline
///
/// ## Error Handling
///
/// Implementations map backend failures (no repository, no HEAD, unknown
/// remote, network errors) to [crate::error::ReleaseError::Git] or
/// [crate::error::ReleaseError::Collaborator].
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation
pub trait Repository {
    /// List all tags in the provider's enumeration order
    fn list_tags(&self) -> Result<Vec<TagRef>>;

    /// Commit hashes in `range` (e.g. `v1.2.0..HEAD`), in log order
    fn commit_log(&self, range: &str) -> Result<Vec<String>>;

    /// Message and author of the commit with the given full hash
    fn commit_message(&self, hash: &str) -> Result<CommitInfo>;

    /// The commit HEAD currently resolves to
    fn head_commit(&self) -> Result<HeadCommit>;

    /// The (first) URL configured for a remote
    fn remote_url(&self, remote: &str) -> Result<String>;

    /// Fetch tags from a remote
    fn fetch(&self, remote: &str) -> Result<()>;

    /// The last tag in enumeration order, if any.
    ///
    /// This is deliberately not the greatest version: whatever the provider
    /// enumerates last is treated as the previous release.
    fn latest_tag(&self) -> Result<Option<TagRef>> {
        Ok(self.list_tags()?.pop())
    }
}
