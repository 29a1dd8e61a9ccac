//! Drives both assembly steps for one test run.

use crate::artifacts::VersionTable;
use crate::classpath::ClasspathAssembler;
use crate::error::{ModpathError, Result};
use crate::options::LaunchOptions;
use crate::patch::{ModulePatchPlanner, PatchPlan};
use crate::paths::PathSet;
use crate::project::ProjectModel;
use modpath_api::RemoteResolver;
use serde::Serialize;

/// Everything the test launcher needs besides its own main class.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchPlan {
    pub paths: PathSet,
    /// Absent for projects without a main module.
    pub patch: Option<PatchPlan>,
}

impl LaunchPlan {
    pub fn module_arguments(&self) -> Vec<String> {
        self.patch
            .as_ref()
            .map(PatchPlan::arguments)
            .unwrap_or_default()
    }

    /// Module arguments followed by `--class-path <paths>`.
    pub fn java_arguments(&self) -> Result<Vec<String>> {
        let mut args = self.module_arguments();
        let joined = self
            .paths
            .join()
            .map_err(|e| ModpathError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e)))?;
        args.push("--class-path".to_string());
        args.push(joined.to_string_lossy().to_string());
        Ok(args)
    }
}

/// Assembles the execution path, then patches the main module if there is one.
pub fn prepare(
    project: &ProjectModel,
    options: &LaunchOptions,
    resolver: &dyn RemoteResolver,
) -> Result<LaunchPlan> {
    let artifacts = project.artifact_map();
    let versions = VersionTable::new(&options.versions, &artifacts);

    let paths = ClasspathAssembler::new(&project.build, &artifacts, versions, resolver).assemble();
    tracing::debug!("Assembled {} path entries", paths.len());

    let patch = match &project.main_module {
        Some(module) => Some(
            ModulePatchPlanner::new(&project.build, &artifacts, options).plan(Some(module))?,
        ),
        None => {
            tracing::debug!("No main module declared, skipping module patch");
            None
        }
    };

    Ok(LaunchPlan { paths, patch })
}
