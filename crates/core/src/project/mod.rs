//! Build metadata handed over by the host build tool.

pub mod scanner;

use crate::artifacts::ProjectArtifacts;
use crate::error::Result;
use modpath_api::{ModuleDescriptor, ProjectArtifact, RemoteRepository};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output and source directories of the project under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildLayout {
    pub output_directory: PathBuf,
    pub test_output_directory: PathBuf,
    pub test_source_directory: PathBuf,
}

/// Remote repositories passed through to the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repositories {
    pub plugin: Vec<RemoteRepository>,
    pub project: Vec<RemoteRepository>,
}

impl Repositories {
    /// Plugin repositories first, then project repositories.
    pub fn all(&self) -> Vec<RemoteRepository> {
        self.plugin.iter().chain(&self.project).cloned().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectModel {
    pub build: BuildLayout,
    #[serde(default)]
    pub artifacts: Vec<ProjectArtifact>,
    #[serde(default)]
    pub main_module: Option<ModuleDescriptor>,
    #[serde(default)]
    pub repositories: Repositories,
}

impl ProjectModel {
    pub fn new(build: BuildLayout) -> Self {
        Self {
            build,
            artifacts: Vec::new(),
            main_module: None,
            repositories: Repositories::default(),
        }
    }

    /// Reads a JSON project model. Relative paths are taken relative to the
    /// manifest's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut model: ProjectModel = serde_json::from_str(&content)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        model.rebase(base);
        model.complete_main_module();
        Ok(model)
    }

    pub fn artifact_map(&self) -> ProjectArtifacts {
        ProjectArtifacts::new(self.artifacts.iter().cloned())
    }

    fn rebase(&mut self, base: &Path) {
        let rebase = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        rebase(&mut self.build.output_directory);
        rebase(&mut self.build.test_output_directory);
        rebase(&mut self.build.test_source_directory);
        for artifact in &mut self.artifacts {
            if let Some(file) = artifact.file.as_mut() {
                rebase(file);
            }
        }
    }

    /// Fills in the packages of a main module declared by name only.
    fn complete_main_module(&mut self) {
        if let Some(module) = self.main_module.as_mut() {
            if module.packages.is_empty() {
                module.packages = scanner::scan_packages(&self.build.output_directory);
                tracing::debug!(
                    "Scanned {} package(s) of module {} from '{}'",
                    module.packages.len(),
                    module.name,
                    self.build.output_directory.display()
                );
            }
        }
    }
}
