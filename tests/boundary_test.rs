use release_that::boundary::{self, BoundaryWarning};
use release_that::cli::{ReleaseReport, RemoteRefresh};
use release_that::git::{HeadCommit, TagRef};
use release_that::ui;

fn report(notes: &str, remote_refresh: RemoteRefresh, dry_run: bool) -> ReleaseReport {
    ReleaseReport {
        version: "1.2.1".to_string(),
        notes: notes.to_string(),
        previous_tag: Some(TagRef::new("v1.2.0", "a".repeat(40))),
        head: HeadCommit::from_full_hash("b".repeat(40)),
        release: None,
        assets_uploaded: 0,
        remote_refresh,
        dry_run,
    }
}

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_no_new_commits_display() {
    let warning = BoundaryWarning::NoNewCommits {
        latest_tag: "v1.0.0".to_string(),
        current_commit_hash: "abc1234def5678".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No new commits"),
        "Message should contain 'No new commits', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("v1.0.0"),
        "Message should contain tag 'v1.0.0', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("abc1234") && !display_msg.contains("abc1234d"),
        "Message should contain shortened commit hash 'abc1234', got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_short_hash_untouched() {
    let warning = BoundaryWarning::NoNewCommits {
        latest_tag: "v1.0.0".to_string(),
        current_commit_hash: "abc".to_string(),
    };
    assert!(warning.to_string().contains("(current: abc)"));
}

#[test]
fn test_boundary_warning_remote_refresh_failed_display() {
    let warning = BoundaryWarning::RemoteRefreshFailed {
        remote: "origin".to_string(),
        reason: "failed to resolve address".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("'origin'"), "got: {}", display_msg);
    assert!(
        display_msg.contains("failed to resolve address"),
        "got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_dry_run_display() {
    let warning = BoundaryWarning::DryRun {
        version: "2.0.0".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "Dry run: release 2.0.0 was neither created nor uploaded"
    );
}

// ============================================================================
// Report Warning Tests
// ============================================================================

#[test]
fn test_failed_fetch_yields_a_single_warning() {
    let warnings = boundary::report_warnings(
        &report(
            "* bbbbbbb: fix\n",
            RemoteRefresh::Failed("could not resolve host".to_string()),
            false,
        ),
        "origin",
    );

    assert_eq!(
        warnings,
        vec![BoundaryWarning::RemoteRefreshFailed {
            remote: "origin".to_string(),
            reason: "could not resolve host".to_string(),
        }]
    );
}

#[test]
fn test_successful_release_has_no_warnings() {
    let warnings = boundary::report_warnings(
        &report("* bbbbbbb: fix\n", RemoteRefresh::Refreshed, false),
        "origin",
    );
    assert!(warnings.is_empty());
}

#[test]
fn test_dry_run_without_new_commits_warnings() {
    let warnings =
        boundary::report_warnings(&report("", RemoteRefresh::Skipped, true), "origin");

    assert_eq!(
        warnings,
        vec![
            BoundaryWarning::NoNewCommits {
                latest_tag: "v1.2.0".to_string(),
                current_commit_hash: "b".repeat(40),
            },
            BoundaryWarning::DryRun {
                version: "1.2.1".to_string(),
            },
        ]
    );
}

// ============================================================================
// UI Display Tests
// ============================================================================

#[test]
fn test_display_boundary_warning_does_not_panic() {
    // Visual verification test - output is printed to stderr
    ui::display_boundary_warning(&BoundaryWarning::DryRun {
        version: "1.0.0".to_string(),
    });
}
