use crate::domain::Placeholder;
use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "rt.json";

/// Represents the complete configuration for release-that.
///
/// Loaded once at startup and handed to the release pipeline by reference.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Remote whose URL names the GitHub owner and project
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub release_notes: ReleaseNotesOptions,

    /// Kept for compatibility with existing files; releases are tagged by GitHub
    #[serde(default = "default_tag_message")]
    pub tag_message: Placeholder,

    #[serde(default)]
    pub before_release: Vec<Placeholder>,

    #[serde(default)]
    pub after_release: Vec<Placeholder>,

    /// Local files uploaded to the release, in order
    #[serde(default)]
    pub assets: Vec<String>,
}

/// How release titles and notes are rendered.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseNotesOptions {
    #[serde(default = "default_title")]
    pub title: Placeholder,

    #[serde(default = "default_commit_format")]
    pub commit_format: Placeholder,

    /// Reserved; passed through untouched
    #[serde(default)]
    pub ignore: String,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_title() -> Placeholder {
    Placeholder::new("Release :tag")
}

fn default_commit_format() -> Placeholder {
    Placeholder::new("* :hash: :message")
}

fn default_tag_message() -> Placeholder {
    Placeholder::new("Version :tag")
}

impl Default for ReleaseNotesOptions {
    fn default() -> Self {
        ReleaseNotesOptions {
            title: default_title(),
            commit_format: default_commit_format(),
            ignore: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            release_notes: ReleaseNotesOptions::default(),
            tag_message: default_tag_message(),
            before_release: Vec::new(),
            after_release: Vec::new(),
            assets: Vec::new(),
        }
    }
}

impl Config {
    /// Parse a JSON document, treating empty strings like missing keys.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(json)
            .map_err(|e| ReleaseError::config(format!("invalid JSON: {}", e)))?;

        if config.remote.is_empty() {
            config.remote = default_remote();
        }
        if config.release_notes.title.is_empty() {
            config.release_notes.title = default_title();
        }
        if config.release_notes.commit_format.is_empty() {
            config.release_notes.commit_format = default_commit_format();
        }
        if config.tag_message.is_empty() {
            config.tag_message = default_tag_message();
        }

        Ok(config)
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReleaseError::config(format!("cannot serialize configuration: {}", e)))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `rt.json` in the current directory
/// 3. Default configuration if no file found
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
        None => return Ok(Config::default()),
    };

    let json = fs::read_to_string(path)
        .map_err(|e| ReleaseError::config(format!("cannot read {}: {}", path.display(), e)))?;

    Config::from_json(&json)
        .map_err(|e| ReleaseError::config(format!("{}: {}", path.display(), e)))
}

/// Writes a configuration file populated with the defaults.
///
/// Refuses to replace an existing file unless `overwrite` is set.
pub fn write_default_config(path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(ReleaseError::config(format!(
            "{} already exists! You can overwrite it with `--force`",
            path.display()
        )));
    }

    let mut json = Config::default().to_json()?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
