//! Release workflow orchestration
//!
//! Runs the release pipeline in a fixed order:
//!
//! 1. Resolve the next version from the latest tag and the bump request
//! 2. Build release notes for `previous_tag..HEAD`
//! 3. Run the `before_release` hooks
//! 4. Create the release and upload assets (skipped in dry-run mode)
//! 5. Run the `after_release` hooks
//! 6. Fetch the remote so the new tag exists locally (best effort)
//!
//! Every step fails fast. Nothing is rolled back: a release created before a
//! failing asset upload stays on the host.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{Variables, Version, VersionBump};
use crate::error::{ReleaseError, Result};
use crate::git::{HeadCommit, Repository, TagRef};
use crate::github::{parse_remote_url, CreatedRelease, NewRelease, ReleaseHost};
use crate::hooks::{HookContext, HookExecutor, HookPhase, Shell, SkipPolicy};
use crate::notes::ReleaseNotesBuilder;

/// Version selection as given on the command line
///
/// At most one field is expected to be set; clap enforces that for the
/// binary. When several are set programmatically the first of patch, minor,
/// major, custom wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BumpRequest {
    pub patch: bool,
    pub minor: bool,
    pub major: bool,
    pub custom: Option<String>,
}

/// How the next version is derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelection {
    /// Increment the latest tag's version
    Bump(VersionBump),
    /// Use a literal version as given
    Custom(Version),
}

impl BumpRequest {
    pub fn patch() -> Self {
        BumpRequest {
            patch: true,
            ..Default::default()
        }
    }

    pub fn minor() -> Self {
        BumpRequest {
            minor: true,
            ..Default::default()
        }
    }

    pub fn major() -> Self {
        BumpRequest {
            major: true,
            ..Default::default()
        }
    }

    pub fn custom(version: impl Into<String>) -> Self {
        BumpRequest {
            custom: Some(version.into()),
            ..Default::default()
        }
    }

    /// The selected strategy, or [ReleaseError::NoBumpSelected].
    ///
    /// A custom literal is parsed strictly here, so a malformed one fails
    /// with [ReleaseError::InvalidVersion] before any repository access.
    pub fn selection(&self) -> Result<VersionSelection> {
        if self.patch {
            Ok(VersionSelection::Bump(VersionBump::Patch))
        } else if self.minor {
            Ok(VersionSelection::Bump(VersionBump::Minor))
        } else if self.major {
            Ok(VersionSelection::Bump(VersionBump::Major))
        } else if let Some(custom) = &self.custom {
            Ok(VersionSelection::Custom(Version::parse(custom)?))
        } else {
            Err(ReleaseError::NoBumpSelected)
        }
    }
}

/// Per-run options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseOptions {
    pub bump: BumpRequest,
    /// Run hooks but neither create the release nor upload assets
    pub dry_run: bool,
    pub skip_hooks: SkipPolicy,
}

/// Working state of one release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub previous_tag: Option<TagRef>,
    pub version: String,
    pub notes: String,
    pub owner: String,
    pub project: String,
    pub head: HeadCommit,
}

/// Result of the final remote fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteRefresh {
    /// Tags were fetched from the remote
    Refreshed,
    /// Dry-run: nothing was created, so nothing was fetched
    Skipped,
    /// The fetch failed; the new tag only exists on the remote
    Failed(String),
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    pub version: String,
    pub notes: String,
    pub previous_tag: Option<TagRef>,
    pub head: HeadCommit,
    pub release: Option<CreatedRelease>,
    pub assets_uploaded: usize,
    pub remote_refresh: RemoteRefresh,
    pub dry_run: bool,
}

impl ReleaseReport {
    /// True when a previous tag exists and no commit followed it
    pub fn has_no_new_commits(&self) -> bool {
        self.previous_tag.is_some() && self.notes.is_empty()
    }
}

/// Drives one release
///
/// Collaborators are borrowed for the duration of the run. `host` may be
/// `None` for dry runs, which never contact the release host.
pub struct Orchestrator<'a, R: Repository, H: ReleaseHost, S: Shell> {
    config: &'a Config,
    repo: &'a R,
    host: Option<&'a H>,
    shell: &'a S,
}

impl<'a, R: Repository, H: ReleaseHost, S: Shell> Orchestrator<'a, R, H, S> {
    pub fn new(config: &'a Config, repo: &'a R, host: Option<&'a H>, shell: &'a S) -> Self {
        Orchestrator {
            config,
            repo,
            host,
            shell,
        }
    }

    /// Compute version, notes and target repository without side effects
    pub fn plan(&self, bump: &BumpRequest) -> Result<ReleasePlan> {
        let selection = bump.selection()?;
        let previous_tag = self.repo.latest_tag()?;

        let version = match selection {
            VersionSelection::Custom(version) => version,
            VersionSelection::Bump(kind) => {
                let base = match &previous_tag {
                    Some(tag) => Version::from_tag(&tag.name)?,
                    None => Version::parse_or_panic("0.0.0"),
                };
                base.bump(kind)?
            }
        };
        info!(
            previous = previous_tag.as_ref().map(|t| t.name.as_str()).unwrap_or("none"),
            next = %version,
            "resolved version"
        );

        let head = self.repo.head_commit()?;
        let remote_url = self.repo.remote_url(&self.config.remote)?;
        let slug = parse_remote_url(&remote_url)?;
        debug!(owner = %slug.owner, project = %slug.project, "resolved repository");

        let notes = ReleaseNotesBuilder::new(self.repo, &self.config.release_notes.commit_format)
            .build(previous_tag.as_ref(), &head)?;

        Ok(ReleasePlan {
            previous_tag,
            version: version.to_string(),
            notes,
            owner: slug.owner,
            project: slug.project,
            head,
        })
    }

    /// Run the whole pipeline
    ///
    /// # Arguments
    ///
    /// * `options` - Bump selection, dry-run flag and hook skip policy
    ///
    /// # Returns
    ///
    /// A [ReleaseReport] on success, otherwise the first error encountered
    pub fn execute(&self, options: &ReleaseOptions) -> Result<ReleaseReport> {
        let plan = self.plan(&options.bump)?;

        let variables = HookContext::new(plan.version.as_str(), plan.head.clone()).to_variables();
        let hooks = HookExecutor::new(self.shell);

        hooks.run_all(
            HookPhase::BeforeRelease,
            &self.config.before_release,
            &variables,
            &options.skip_hooks,
        )?;

        let mut release = None;
        let mut assets_uploaded = 0;
        if options.dry_run {
            info!(version = %plan.version, "dry run: not publishing");
        } else {
            let host = self.host.ok_or_else(|| {
                ReleaseError::collaborator("No release host available for publishing")
            })?;
            let created = self.publish(host, &plan)?;
            assets_uploaded = self.upload_assets(host, &plan, &created)?;
            release = Some(created);
        }

        hooks.run_all(
            HookPhase::AfterRelease,
            &self.config.after_release,
            &variables,
            &options.skip_hooks,
        )?;

        let remote_refresh = if options.dry_run {
            RemoteRefresh::Skipped
        } else {
            self.refresh_remote()
        };

        Ok(ReleaseReport {
            version: plan.version,
            notes: plan.notes,
            previous_tag: plan.previous_tag,
            head: plan.head,
            release,
            assets_uploaded,
            remote_refresh,
            dry_run: options.dry_run,
        })
    }

    fn publish(&self, host: &H, plan: &ReleasePlan) -> Result<CreatedRelease> {
        let title_variables = Variables::new()
            .with("version", plan.version.as_str())
            .with("tag", plan.version.as_str());

        let release = NewRelease {
            title: self.config.release_notes.title.resolve(&title_variables),
            tag_name: plan.version.clone(),
            body: plan.notes.clone(),
        };
        info!(title = %release.title, owner = %plan.owner, project = %plan.project, "publishing release");

        host.create_release(&plan.owner, &plan.project, &release)
    }

    fn upload_assets(&self, host: &H, plan: &ReleasePlan, release: &CreatedRelease) -> Result<usize> {
        for asset in &self.config.assets {
            let path = Path::new(asset);
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| ReleaseError::asset(asset.as_str(), "not a file path"))?;

            let contents =
                fs::read(path).map_err(|e| ReleaseError::asset(asset.as_str(), e.to_string()))?;
            debug!(asset = %asset, bytes = contents.len(), "read asset");

            host.upload_asset(&plan.owner, &plan.project, release.id, &file_name, contents)?;
        }

        Ok(self.config.assets.len())
    }

    fn refresh_remote(&self) -> RemoteRefresh {
        match self.repo.fetch(&self.config.remote) {
            Ok(()) => RemoteRefresh::Refreshed,
            Err(e) => {
                debug!(remote = %self.config.remote, error = %e, "could not fetch the new tag");
                RemoteRefresh::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_requires_a_bump() {
        assert!(matches!(
            BumpRequest::default().selection(),
            Err(ReleaseError::NoBumpSelected)
        ));
    }

    #[test]
    fn test_selection_precedence() {
        let request = BumpRequest {
            patch: false,
            minor: true,
            major: true,
            custom: Some("9.9.9".to_string()),
        };
        assert_eq!(
            request.selection().unwrap(),
            VersionSelection::Bump(VersionBump::Minor)
        );
        assert_eq!(
            BumpRequest::custom("2.0.0").selection().unwrap(),
            VersionSelection::Custom(Version::new(2, 0, 0))
        );
    }

    #[test]
    fn test_malformed_custom_selection() {
        assert!(matches!(
            BumpRequest::custom("1.2").selection(),
            Err(ReleaseError::InvalidVersion(_))
        ));
    }

    #[test]
    fn test_no_new_commits() {
        let report = ReleaseReport {
            version: "1.0.1".to_string(),
            notes: String::new(),
            previous_tag: Some(TagRef::new("1.0.0", "a".repeat(40))),
            head: HeadCommit::from_full_hash("a".repeat(40)),
            release: None,
            assets_uploaded: 0,
            remote_refresh: RemoteRefresh::Skipped,
            dry_run: true,
        };
        assert!(report.has_no_new_commits());

        let first = ReleaseReport {
            previous_tag: None,
            ..report
        };
        assert!(!first.has_no_new_commits());
    }
}
