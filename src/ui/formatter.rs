//! Formatting functions for UI output.
//!
//! `format_*` functions are pure and return the text; `display_*` functions
//! print it. Colors follow [console::colors_enabled], which `--no-ansi`
//! turns off.

use std::io::{self, Write};
use std::time::Duration;

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::{ReleaseReport, RemoteRefresh};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), style(message).red());
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
///
/// # Arguments
/// * `warning` - The boundary warning to display
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render the release summary.
///
/// ```text
/// Release 1.2.1
///
/// * abc1234: fix parser
///
/// * Run `git fetch` to retrieve the new tag created only on the remote.
///
/// Released in 1.53s
/// ```
///
/// # Arguments
/// * `report` - Outcome of the release run
/// * `remote` - Remote the new tag lives on
/// * `elapsed` - Wall-clock time since process start
pub fn format_release_summary(report: &ReleaseReport, remote: &str, elapsed: Duration) -> String {
    let mut out = format!(
        "{} {}\n\n",
        style("Release").bold(),
        style(&report.version).green().bold()
    );

    if !report.notes.is_empty() {
        out.push_str(&report.notes);
        out.push('\n');
    }

    match &report.remote_refresh {
        RemoteRefresh::Refreshed => {
            out.push_str(&format!("* Fetched the new tag from '{}'.\n", remote));
        }
        RemoteRefresh::Failed(_) => {
            out.push_str(&format!(
                "* Run `{}` to retrieve the new tag created only on the remote.\n",
                style(format!("git fetch {}", remote)).cyan()
            ));
        }
        RemoteRefresh::Skipped => {}
    }

    out.push_str(&format!("\nReleased in {:.2}s\n", elapsed.as_secs_f64()));
    out
}

/// Print the release summary to stdout.
pub fn display_release_summary(report: &ReleaseReport, remote: &str, elapsed: Duration) {
    print!("{}", format_release_summary(report, remote, elapsed));
}

/// Print the bare version, without a trailing newline, for shell pipelines.
pub fn display_quiet_version(version: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", version)?;
    stdout.flush()
}
