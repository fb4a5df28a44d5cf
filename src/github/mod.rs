//! Release hosting abstraction
//!
//! The release pipeline talks to GitHub through the [ReleaseHost] trait:
//!
//! - [client::GitHubClient]: blocking REST client for github.com and GitHub Enterprise
//! - [mock::MockReleaseHost]: in-memory recorder for tests
//!
//! [remote] turns a git remote URL into the owner and project the API needs.

pub mod client;
pub mod mock;
pub mod remote;

pub use client::GitHubClient;
pub use mock::{HostCall, MockReleaseHost};
pub use remote::{parse_remote_url, RepoSlug};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Release creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRelease {
    #[serde(rename = "name")]
    pub title: String,
    pub tag_name: String,
    pub body: String,
}

/// A release as returned by the host
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedRelease {
    pub id: u64,
    pub tag_name: String,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Remote service that hosts releases and their assets
///
/// Implementations never retry: a rejected request surfaces as
/// [crate::error::ReleaseError::PublishFailed] or
/// [crate::error::ReleaseError::AssetUploadFailed].
pub trait ReleaseHost {
    /// Create a release (and its tag, when missing) on the host
    fn create_release(
        &self,
        owner: &str,
        project: &str,
        release: &NewRelease,
    ) -> Result<CreatedRelease>;

    /// Attach a file to an existing release under `file_name`
    fn upload_asset(
        &self,
        owner: &str,
        project: &str,
        release_id: u64,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<()>;
}
