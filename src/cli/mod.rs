//! Release workflow, decoupled from argument parsing so it can be driven
//! programmatically and tested with fake collaborators.

pub mod orchestration;

pub use orchestration::{
    BumpRequest, Orchestrator, ReleaseOptions, ReleasePlan, ReleaseReport, RemoteRefresh,
    VersionSelection,
};
