//! Release notes compiled from the commit log

pub mod builder;

pub use builder::{summarize_message, ReleaseNotesBuilder, INITIAL_RELEASE_NOTES};
