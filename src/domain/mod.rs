//! Domain logic - pure rules independent of git, GitHub and the shell

pub mod placeholder;
pub mod version;

pub use placeholder::{Placeholder, Variables};
pub use version::{Version, VersionBump};
