//! Execution path assembly.

use crate::artifacts::{
    JUNIT, JUNIT_JUPITER_API, JUNIT_JUPITER_ENGINE, JUNIT_PLATFORM_CONSOLE, JUNIT_VINTAGE_ENGINE,
    KnownArtifact, ProjectArtifacts, VINTAGE_JUNIT_VERSION, VersionTable,
};
use crate::paths::PathSet;
use crate::project::BuildLayout;
use modpath_api::{DependencyResolutionError, RemoteResolver};

/// Builds the test execution path from project outputs, project dependencies
/// and whatever testing artifacts the project leaves out.
pub struct ClasspathAssembler<'a> {
    layout: &'a BuildLayout,
    artifacts: &'a ProjectArtifacts,
    versions: VersionTable<'a>,
    resolver: &'a dyn RemoteResolver,
}

impl<'a> ClasspathAssembler<'a> {
    pub fn new(
        layout: &'a BuildLayout,
        artifacts: &'a ProjectArtifacts,
        versions: VersionTable<'a>,
        resolver: &'a dyn RemoteResolver,
    ) -> Self {
        Self {
            layout,
            artifacts,
            versions,
            resolver,
        }
    }

    pub fn assemble(&self) -> PathSet {
        let mut paths = PathSet::new();

        // Test and main output directories
        paths.append(&self.layout.test_output_directory);
        paths.append(&self.layout.output_directory);

        // User-defined dependencies
        for artifact in self.artifacts.iter() {
            if !artifact.kind.is_added_to_classpath() {
                continue;
            }
            if let Some(file) = &artifact.file {
                paths.append(file);
            }
        }

        // Required artifacts the project does not supply itself
        if self.artifacts.contains(&JUNIT_JUPITER_API.identity()) {
            self.append_artifact(&mut paths, &JUNIT_JUPITER_ENGINE);
        }
        let vintage = self
            .artifacts
            .get(&JUNIT.identity())
            .is_some_and(|junit| junit.version() == VINTAGE_JUNIT_VERSION);
        if vintage {
            self.append_artifact(&mut paths, &JUNIT_VINTAGE_ENGINE);
        }
        self.append_artifact(&mut paths, &JUNIT_PLATFORM_CONSOLE);

        paths
    }

    /// Appends the closure of `known`; a failed resolution only costs that artifact.
    fn append_artifact(&self, paths: &mut PathSet, known: &KnownArtifact) {
        if let Err(e) = self.resolve_into(paths, known) {
            tracing::warn!("Resolving {} failed: {}", known.identity(), e);
        }
    }

    fn resolve_into(
        &self,
        paths: &mut PathSet,
        known: &KnownArtifact,
    ) -> Result<(), DependencyResolutionError> {
        let identity = known.identity();
        if self.artifacts.contains(&identity) {
            tracing::debug!("Skip resolving '{}', because it is already mapped.", identity);
            return Ok(());
        }

        let coordinate = self.versions.coordinate(known);
        tracing::debug!("Resolving '{}' and its transitive dependencies...", coordinate);
        for resolved in self.resolver.resolve(&coordinate)? {
            if self.artifacts.contains(&resolved.identity()) {
                tracing::debug!("  X {} // mapped by project", resolved);
                continue;
            }
            paths.append(resolved.file());
        }
        Ok(())
    }
}
