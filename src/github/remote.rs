use crate::error::{ReleaseError, Result};
use regex::Regex;

/// Owner and project of a hosted repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub project: String,
}

/// Derive owner and project from a remote URL
///
/// Supports the scp-like SSH form (`git@github.com:owner/project.git`) and
/// URL forms (`https://github.com/owner/project`, `ssh://git@host/owner/project.git`).
/// A trailing `.git` or `/` is ignored.
pub fn parse_remote_url(url: &str) -> Result<RepoSlug> {
    let url = url.trim();

    let patterns = [
        r"(?i)^[a-z][a-z0-9+.-]*://(?:[^@/]+@)?[^/]+/(?P<owner>[^/]+)/(?P<project>[^/]+?)(?:\.git)?/?$",
        r"^(?:[^@/]+@)?[^:/]+:(?P<owner>[^/]+)/(?P<project>[^/]+?)(?:\.git)?/?$",
    ];

    for pattern in patterns {
        if let Some(captures) = Regex::new(pattern)
            .ok()
            .and_then(|re| re.captures(url))
        {
            let owner = captures.name("owner").map(|m| m.as_str()).unwrap_or_default();
            let project = captures
                .name("project")
                .map(|m| m.as_str())
                .unwrap_or_default();

            if !owner.is_empty() && !project.is_empty() {
                return Ok(RepoSlug {
                    owner: owner.to_string(),
                    project: project.to_string(),
                });
            }
        }
    }

    Err(ReleaseError::collaborator(format!(
        "Cannot determine the GitHub owner and project from remote URL '{}'",
        url
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(url: &str) -> (String, String) {
        let parsed = parse_remote_url(url).unwrap();
        (parsed.owner, parsed.project)
    }

    #[test]
    fn test_scp_like_ssh() {
        assert_eq!(
            slug("git@github.com:felix/release-that.git"),
            ("felix".to_string(), "release-that".to_string())
        );
    }

    #[test]
    fn test_scp_like_without_suffix() {
        assert_eq!(
            slug("git@github.com:acme/widget"),
            ("acme".to_string(), "widget".to_string())
        );
    }

    #[test]
    fn test_https() {
        assert_eq!(
            slug("https://github.com/acme/widget"),
            ("acme".to_string(), "widget".to_string())
        );
        assert_eq!(
            slug("https://github.com/acme/widget.git"),
            ("acme".to_string(), "widget".to_string())
        );
        assert_eq!(
            slug("https://token@github.com/acme/widget/"),
            ("acme".to_string(), "widget".to_string())
        );
    }

    #[test]
    fn test_ssh_url() {
        assert_eq!(
            slug("ssh://git@github.example.com:2222/acme/widget.git"),
            ("acme".to_string(), "widget".to_string())
        );
    }

    #[test]
    fn test_dotted_project_names() {
        assert_eq!(
            slug("git@github.com:acme/widget.rs.git"),
            ("acme".to_string(), "widget.rs".to_string())
        );
    }

    #[test]
    fn test_unrecognised_urls() {
        for url in ["", "/srv/git/widget.git", "https://github.com/acme", "widget"] {
            assert!(parse_remote_url(url).is_err(), "accepted '{}'", url);
        }
    }
}
