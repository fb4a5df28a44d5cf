//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Formatting and printing of results
//! - This module - Interactive prompts and color control

use std::io::{self, Write};

use anyhow::{Context, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_quiet_version, display_release_summary,
    display_success, format_release_summary,
};

/// Enable or disable ANSI colors on both output streams.
pub fn set_colors(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Prompts for a GitHub personal access token without echoing it.
///
/// # Arguments
/// * `token_url` - Where the user can create a token
///
/// # Returns
/// * `Ok(String)` - The trimmed token
/// * `Err` - If the terminal cannot be read or the token is empty
pub fn prompt_token(token_url: &str) -> Result<String> {
    println!("Create a token with the `repo` scope at {}", token_url);
    print!("GitHub token: ");
    io::stdout().flush()?;

    let token = rpassword::read_password().context("Failed to read token")?;
    let token = token.trim().to_string();
    if token.is_empty() {
        anyhow::bail!("No token entered");
    }

    Ok(token)
}
