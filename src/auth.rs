//! Personal access token storage.
//!
//! The token is read from `GITHUB_TOKEN` when set, otherwise from
//! `~/.rtauth`, which `rt --login` writes.

use crate::error::{ReleaseError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides the stored token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Token file name inside the home directory
pub const TOKEN_FILE: &str = ".rtauth";

/// Page where a token with the `repo` scope can be created
pub const TOKEN_URL: &str = "https://github.com/settings/tokens/new?scopes=repo";

/// Location of the token file
pub fn token_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(TOKEN_FILE))
        .ok_or_else(|| ReleaseError::auth("cannot locate the home directory"))
}

/// Resolve the token from the environment, then the default token file
pub fn load_token() -> Result<String> {
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        let token = token.trim();
        if !token.is_empty() {
            debug!("using token from {}", TOKEN_ENV_VAR);
            return Ok(token.to_string());
        }
    }

    load_token_from(&token_path()?)
}

/// Read a token from a specific file
pub fn load_token_from(path: &Path) -> Result<String> {
    let not_connected = || {
        ReleaseError::auth(format!(
            "You are not connected to GitHub. Create a token at {} then run `rt --login`.",
            TOKEN_URL
        ))
    };

    if !path.exists() {
        return Err(not_connected());
    }

    let token = fs::read_to_string(path)?;
    let token = token.trim();
    if token.is_empty() {
        return Err(not_connected());
    }

    debug!(path = %path.display(), "using stored token");
    Ok(token.to_string())
}

/// Store a token, readable only by the current user on Unix
pub fn save_token_to(path: &Path, token: &str) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ReleaseError::auth("refusing to store an empty token"));
    }

    fs::write(path, token)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}
