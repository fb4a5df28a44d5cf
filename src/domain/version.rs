use crate::error::{ReleaseError, Result};
use std::fmt;

/// Semantic version representation
///
/// Values are immutable once parsed; every increment returns a new version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: String,
    pub build_metadata: String,
}

impl Version {
    /// Create a release version with no prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: String::new(),
            build_metadata: String::new(),
        }
    }

    /// Parse `MAJOR.MINOR.PATCH[-PRERELEASE][+METADATA]` strictly.
    ///
    /// Leading zeros in numeric parts, missing components, prefixes such as
    /// `v` and identifiers outside `[0-9A-Za-z-]` are all rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let parsed =
            semver::Version::parse(text).map_err(|_| ReleaseError::invalid_version(text))?;

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            prerelease: parsed.pre.as_str().to_string(),
            build_metadata: parsed.build.as_str().to_string(),
        })
    }

    /// Parse the version carried by a tag name (e.g., "v1.2.3" -> 1.2.3)
    ///
    /// A single leading `v` or `V` is dropped; the remainder must be a valid
    /// semantic version.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let clean = tag
            .strip_prefix('v')
            .or_else(|| tag.strip_prefix('V'))
            .unwrap_or(tag);

        Self::parse(clean).map_err(|_| ReleaseError::invalid_version(tag))
    }

    /// Parse a literal known to be valid at compile time.
    ///
    /// # Panics
    /// Panics if `text` is not a semantic version. Only meant for constants
    /// such as the `0.0.0` seed used before the first release.
    pub fn parse_or_panic(text: &str) -> Self {
        match Self::parse(text) {
            Ok(version) => version,
            Err(e) => panic!("{}", e),
        }
    }

    /// Next major version; fails when `major` is already `u64::MAX`
    pub fn increment_major(&self) -> Result<Self> {
        Ok(Version::new(self.next(self.major)?, 0, 0))
    }

    pub fn increment_minor(&self) -> Result<Self> {
        Ok(Version::new(self.major, self.next(self.minor)?, 0))
    }

    pub fn increment_patch(&self) -> Result<Self> {
        Ok(Version::new(self.major, self.minor, self.next(self.patch)?))
    }

    fn next(&self, field: u64) -> Result<u64> {
        field.checked_add(1).ok_or_else(|| {
            ReleaseError::invalid_version(format!("{} cannot be incremented", self))
        })
    }

    /// Apply a bump to this version
    pub fn bump(&self, bump: VersionBump) -> Result<Self> {
        match bump {
            VersionBump::Major => self.increment_major(),
            VersionBump::Minor => self.increment_minor(),
            VersionBump::Patch => self.increment_patch(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}
