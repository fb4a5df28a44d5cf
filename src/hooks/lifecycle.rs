use crate::domain::Variables;
use crate::git::HeadCommit;
use std::convert::Infallible;
use std::str::FromStr;

/// Points in the release pipeline where configured hooks run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    BeforeRelease,
    AfterRelease,
}

impl HookPhase {
    /// Get the phase name as used in the configuration and `--skip-hooks`
    pub fn name(&self) -> &'static str {
        match self {
            HookPhase::BeforeRelease => "before_release",
            HookPhase::AfterRelease => "after_release",
        }
    }
}

/// Which phases `--skip-hooks` disables
///
/// `"no"` skips nothing, an empty value skips everything, and any other
/// value skips every phase whose name occurs in it as a substring. The
/// list is not split, so `"before_release;after_release"` skips both phases
/// while `"release"` skips neither.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SkipPolicy {
    #[default]
    Never,
    All,
    Phases(String),
}

impl SkipPolicy {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "no" => SkipPolicy::Never,
            "" => SkipPolicy::All,
            list => SkipPolicy::Phases(list.to_string()),
        }
    }

    pub fn should_skip(&self, phase: &str) -> bool {
        match self {
            SkipPolicy::Never => false,
            SkipPolicy::All => true,
            SkipPolicy::Phases(list) => list.contains(phase),
        }
    }
}

impl FromStr for SkipPolicy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SkipPolicy::parse(s))
    }
}

/// Context information passed to a hook
#[derive(Debug, Clone)]
pub struct HookContext {
    /// Version being released
    pub version: String,
    /// Commit HEAD points at
    pub head: HeadCommit,
}

impl HookContext {
    pub fn new(version: impl Into<String>, head: HeadCommit) -> Self {
        HookContext {
            version: version.into(),
            head,
        }
    }

    /// Placeholder variables available to hook commands:
    /// `:version`, `:tag`, `:commit` and `:fullCommit`
    pub fn to_variables(&self) -> Variables {
        Variables::new()
            .with("version", self.version.as_str())
            .with("tag", self.version.as_str())
            .with("commit", self.head.short_hash.as_str())
            .with("fullCommit", self.head.full_hash.as_str())
    }
}
