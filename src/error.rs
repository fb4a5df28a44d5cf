use thiserror::Error;

/// Unified error type for release-that operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("One of the following flags is required: --patch, --minor, --major, --custom")]
    NoBumpSelected,

    #[error("Hook #{index} of {phase} failed ({status}): {command}")]
    HookFailed {
        phase: String,
        index: usize,
        command: String,
        status: String,
    },

    #[error("Release creation failed: {0}")]
    PublishFailed(String),

    #[error("Asset upload failed for {path}: {reason}")]
    AssetUploadFailed { path: String, reason: String },

    #[error("{0}")]
    Collaborator(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-that
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an invalid-version error naming the offending text
    pub fn invalid_version(text: impl Into<String>) -> Self {
        ReleaseError::InvalidVersion(text.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create an authentication error with context
    pub fn auth(msg: impl Into<String>) -> Self {
        ReleaseError::Auth(msg.into())
    }

    /// Create a collaborator (git / GitHub backend) error with context
    pub fn collaborator(msg: impl Into<String>) -> Self {
        ReleaseError::Collaborator(msg.into())
    }

    /// Create a publish error with context
    pub fn publish(msg: impl Into<String>) -> Self {
        ReleaseError::PublishFailed(msg.into())
    }

    /// Create an asset upload error for the given path
    pub fn asset(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ReleaseError::AssetUploadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_invalid_version_names_offending_text() {
        let err = ReleaseError::invalid_version("1.2");
        assert_eq!(err.to_string(), "Invalid version: 1.2");
    }

    #[test]
    fn test_no_bump_selected_lists_flags() {
        let msg = ReleaseError::NoBumpSelected.to_string();
        for flag in ["--patch", "--minor", "--major", "--custom"] {
            assert!(msg.contains(flag), "missing {} in '{}'", flag, msg);
        }
    }

    #[test]
    fn test_hook_failed_display() {
        let err = ReleaseError::HookFailed {
            phase: "before_release".to_string(),
            index: 1,
            command: "make dist".to_string(),
            status: "exit status: 2".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("#1"));
        assert!(msg.contains("before_release"));
        assert!(msg.contains("make dist"));
        assert!(msg.contains("exit status: 2"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::auth("x"), "Authentication error"),
            (ReleaseError::publish("x"), "Release creation failed"),
            (ReleaseError::asset("dist/a.tgz", "x"), "Asset upload failed"),
            (ReleaseError::invalid_version("x"), "Invalid version"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_collaborator_message_is_passed_through() {
        let err = ReleaseError::collaborator("Remote 'origin' not found");
        assert_eq!(err.to_string(), "Remote 'origin' not found");
    }
}
