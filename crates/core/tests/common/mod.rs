use modpath_api::{
    ArtifactCoordinate, DependencyResolutionError, ProjectArtifact, RemoteResolver,
    ResolutionResult, ResolvedArtifact,
};
use modpath_core::{BuildLayout, ProjectModel};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A project on disk with output directories and a fake local repository.
pub struct Fixture {
    pub dir: TempDir,
    pub model: ProjectModel,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let build = BuildLayout {
            output_directory: root.join("target/classes"),
            test_output_directory: root.join("target/test-classes"),
            test_source_directory: root.join("src/test/java"),
        };
        fs::create_dir_all(&build.output_directory).unwrap();
        fs::create_dir_all(&build.test_output_directory).unwrap();
        fs::create_dir_all(&build.test_source_directory).unwrap();
        Self {
            dir,
            model: ProjectModel::new(build),
        }
    }

    /// Creates the jar for `coordinate` under the fixture's repository.
    pub fn jar(&self, coordinate: &str) -> PathBuf {
        let coordinate: ArtifactCoordinate = coordinate.parse().unwrap();
        let dir = self
            .dir
            .path()
            .join("repository")
            .join(&coordinate.artifact)
            .join(&coordinate.version);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(coordinate.file_name());
        fs::File::create(&path).unwrap();
        path
    }

    /// Declares `coordinate` as a project dependency backed by a real file.
    pub fn declare(&mut self, coordinate: &str) -> PathBuf {
        let path = self.jar(coordinate);
        self.model
            .artifacts
            .push(ProjectArtifact::new(coordinate.parse().unwrap(), &path));
        path
    }

    pub fn write_override(&self, root: &PathBuf, content: &str) -> PathBuf {
        let path = root.join("module-info.test");
        fs::write(&path, content).unwrap();
        path
    }
}

/// Resolver answering from canned closures and recording every request.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeResolver {
    closures: HashMap<String, Vec<ResolvedArtifact>>,
    failures: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl FakeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_closure(mut self, root: &str, closure: Vec<(&str, PathBuf)>) -> Self {
        let resolved = closure
            .into_iter()
            .map(|(coordinate, file)| ResolvedArtifact::new(coordinate.parse().unwrap(), file))
            .collect();
        self.closures.insert(root.to_string(), resolved);
        self
    }

    pub fn with_failure(mut self, root: &str, message: &str) -> Self {
        self.failures.insert(root.to_string(), message.to_string());
        self
    }
}

impl RemoteResolver for FakeResolver {
    fn resolve(&self, coordinate: &ArtifactCoordinate) -> ResolutionResult<Vec<ResolvedArtifact>> {
        let key = coordinate.to_string();
        self.requests.borrow_mut().push(key.clone());
        if let Some(message) = self.failures.get(&key) {
            return Err(DependencyResolutionError::Transport {
                coordinate: key,
                repository: "central".to_string(),
                message: message.clone(),
            });
        }
        self.closures
            .get(&key)
            .cloned()
            .ok_or(DependencyResolutionError::ArtifactNotFound {
                coordinate: key,
                repositories: vec!["central".to_string()],
            })
    }
}
