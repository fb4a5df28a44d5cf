use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, info};

use super::{CreatedRelease, NewRelease, ReleaseHost};
use crate::error::{ReleaseError, Result};

/// Default GitHub API base URL
pub const GITHUB_API: &str = "https://api.github.com";

/// Default GitHub upload base URL
pub const GITHUB_UPLOADS: &str = "https://uploads.github.com";

/// User-Agent header value for API requests
pub const USER_AGENT: &str = concat!("release-that/", env!("CARGO_PKG_VERSION"));

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Blocking GitHub REST client.
///
/// Requests carry no timeout and are never retried.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    token: String,
    api_base: String,
    uploads_base: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_base", &self.api_base)
            .field("uploads_base", &self.uploads_base)
            .finish()
    }
}

impl GitHubClient {
    /// Create a client for github.com
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_urls(token, GITHUB_API, GITHUB_UPLOADS)
    }

    /// Create a client for a GitHub Enterprise instance or a test server
    pub fn with_base_urls(
        token: impl Into<String>,
        api_base: &str,
        uploads_base: &str,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| ReleaseError::collaborator(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            token: token.into(),
            api_base: api_base.trim_end_matches('/').to_string(),
            uploads_base: uploads_base.trim_end_matches('/').to_string(),
        })
    }
}

impl ReleaseHost for GitHubClient {
    fn create_release(
        &self,
        owner: &str,
        project: &str,
        release: &NewRelease,
    ) -> Result<CreatedRelease> {
        let url = format!("{}/repos/{}/{}/releases", self.api_base, owner, project);
        debug!(url = %url, tag = %release.tag_name, "creating release");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_JSON)
            .json(release)
            .send()
            .map_err(|e| ReleaseError::publish(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReleaseError::publish(format!(
                "{} responded {}: {}",
                url,
                status,
                body.trim()
            )));
        }

        let created: CreatedRelease = response
            .json()
            .map_err(|e| ReleaseError::publish(format!("unexpected response: {}", e)))?;
        info!(id = created.id, tag = %created.tag_name, "release created");

        Ok(created)
    }

    fn upload_asset(
        &self,
        owner: &str,
        project: &str,
        release_id: u64,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<()> {
        let url = format!(
            "{}/repos/{}/{}/releases/{}/assets",
            self.uploads_base, owner, project, release_id
        );
        debug!(url = %url, file = file_name, bytes = contents.len(), "uploading asset");

        let response = self
            .client
            .post(&url)
            .query(&[("name", file_name)])
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_JSON)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(contents)
            .send()
            .map_err(|e| ReleaseError::asset(file_name, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReleaseError::asset(
                file_name,
                format!("{} responded {}: {}", url, status, body.trim()),
            ));
        }

        info!(file = file_name, "asset uploaded");
        Ok(())
    }
}
