use crate::domain::{Placeholder, Variables};
use crate::error::Result;
use crate::git::{short_hash, HeadCommit, Repository, TagRef};
use tracing::debug;

/// Notes used for a project's very first release
pub const INITIAL_RELEASE_NOTES: &str = "Initial release.\n";

/// Marker appended to a subject line whose commit carries a body
pub const TRUNCATION_MARKER: &str = "...";

/// Builds release notes from the commits between the previous tag and HEAD
pub struct ReleaseNotesBuilder<'a, R: Repository> {
    repo: &'a R,
    commit_format: &'a Placeholder,
}

impl<'a, R: Repository> ReleaseNotesBuilder<'a, R> {
    pub fn new(repo: &'a R, commit_format: &'a Placeholder) -> Self {
        ReleaseNotesBuilder {
            repo,
            commit_format,
        }
    }

    /// Render one line per commit in `previous..HEAD`, in log order.
    ///
    /// Without a previous tag the fixed [INITIAL_RELEASE_NOTES] text is
    /// returned and the repository is not consulted.
    pub fn build(&self, previous: Option<&TagRef>, head: &HeadCommit) -> Result<String> {
        let Some(previous) = previous else {
            return Ok(INITIAL_RELEASE_NOTES.to_string());
        };

        let range = format!("{}..HEAD", previous.name);
        let hashes = self.repo.commit_log(&range)?;
        debug!(range = %range, head = %head.short_hash, commits = hashes.len(), "building release notes");

        let mut notes = String::new();
        for hash in &hashes {
            notes.push_str(&self.render_commit(hash)?);
            notes.push('\n');
        }

        Ok(notes)
    }

    fn render_commit(&self, hash: &str) -> Result<String> {
        let commit = self.repo.commit_message(hash)?;

        let variables = Variables::new()
            .with("hash", short_hash(hash))
            .with("longHash", hash)
            .with("message", summarize_message(&commit.message))
            .with("author.name", commit.author_name)
            .with("author.email", commit.author_email);

        Ok(self.commit_format.resolve(&variables).trim().to_string())
    }
}

/// First line of a commit message, with [TRUNCATION_MARKER] appended when
/// the message spans more than two lines.
pub fn summarize_message(message: &str) -> String {
    let lines: Vec<&str> = message.split('\n').collect();
    let mut summary = lines.first().copied().unwrap_or_default().to_string();

    if lines.len() > 2 {
        summary.push_str(TRUNCATION_MARKER);
    }

    summary
}
