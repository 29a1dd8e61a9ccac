pub mod artifacts;
pub mod classpath;
pub mod error;
pub mod launch;
pub mod logging;
pub mod options;
pub mod patch;
pub mod paths;
pub mod project;

pub use artifacts::ProjectArtifacts;
pub use classpath::ClasspathAssembler;
pub use error::{ModpathError, Result};
pub use launch::{LaunchPlan, prepare};
pub use options::LaunchOptions;
pub use patch::{ModulePatchPlanner, PatchPlan, PatchStrategy};
pub use paths::PathSet;
pub use project::{BuildLayout, ProjectModel, Repositories};
