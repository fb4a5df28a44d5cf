//! User-defined shell hooks
//!
//! Commands from the configuration run at two points of a release:
//! - before_release: after the notes are built, before anything is published
//! - after_release: after the release and its assets are published

pub mod executor;
pub mod lifecycle;

pub use executor::{HookExecutor, HookOutcome, Shell, ShellStatus, SystemShell};
pub use lifecycle::{HookContext, HookPhase, SkipPolicy};
