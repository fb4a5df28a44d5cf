use std::fmt;

use crate::cli::{ReleaseReport, RemoteRefresh};
use crate::git::short_hash;

/// Non-fatal conditions met during a release.
/// These are reported to the user but never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No new commits since the latest tag
    NoNewCommits {
        latest_tag: String,
        current_commit_hash: String,
    },
    /// The release was created but fetching it back from the remote failed
    RemoteRefreshFailed { remote: String, reason: String },
    /// Dry-run mode: nothing is published
    DryRun { version: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits {
                latest_tag,
                current_commit_hash,
            } => {
                write!(
                    f,
                    "No new commits since tag '{}' (current: {})",
                    latest_tag,
                    short_hash(current_commit_hash)
                )
            }
            BoundaryWarning::RemoteRefreshFailed { remote, reason } => {
                write!(
                    f,
                    "Could not fetch the new tag from remote '{}': {}",
                    remote, reason
                )
            }
            BoundaryWarning::DryRun { version } => {
                write!(
                    f,
                    "Dry run: release {} was neither created nor uploaded",
                    version
                )
            }
        }
    }
}

/// Warnings to show after a completed release, one per condition
pub fn report_warnings(report: &ReleaseReport, remote: &str) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();

    if report.has_no_new_commits() {
        if let Some(tag) = &report.previous_tag {
            warnings.push(BoundaryWarning::NoNewCommits {
                latest_tag: tag.name.clone(),
                current_commit_hash: report.head.full_hash.clone(),
            });
        }
    }

    if let RemoteRefresh::Failed(reason) = &report.remote_refresh {
        warnings.push(BoundaryWarning::RemoteRefreshFailed {
            remote: remote.to_string(),
            reason: reason.clone(),
        });
    }

    if report.dry_run {
        warnings.push(BoundaryWarning::DryRun {
            version: report.version.clone(),
        });
    }

    warnings
}
