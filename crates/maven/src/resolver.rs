use crate::fetch::HttpFetcher;
use crate::index::ClosureIndex;
use crate::layout::LocalRepository;
use modpath_api::{
    ArtifactCoordinate, DependencyResolutionError, RemoteRepository, RemoteResolver,
    ResolutionResult, ResolvedArtifact,
};
use std::path::PathBuf;

/// Resolves closures from a [`ClosureIndex`] into files of a local repository,
/// downloading whatever is missing from the remote repositories in order.
pub struct RepositoryResolver {
    local: LocalRepository,
    index: ClosureIndex,
    repositories: Vec<RemoteRepository>,
    /// `None` when offline.
    fetcher: Option<HttpFetcher>,
}

impl RepositoryResolver {
    pub fn new(
        local: LocalRepository,
        index: ClosureIndex,
        repositories: Vec<RemoteRepository>,
        fetcher: Option<HttpFetcher>,
    ) -> Self {
        Self {
            local,
            index,
            repositories,
            fetcher,
        }
    }

    /// Resolver that only looks at the local repository.
    pub fn offline(local: LocalRepository, index: ClosureIndex) -> Self {
        Self::new(local, index, Vec::new(), None)
    }

    fn locate(&self, coordinate: &ArtifactCoordinate) -> ResolutionResult<PathBuf> {
        if let Some(path) = self.local.find(coordinate) {
            return Ok(path);
        }

        let dest = self.local.artifact_path(coordinate);
        let relative = LocalRepository::relative_path(coordinate);
        let mut last_error = None;
        if let Some(fetcher) = &self.fetcher {
            for repository in &self.repositories {
                match fetcher.fetch(coordinate, repository, &relative, &dest) {
                    Ok(true) => return Ok(dest),
                    Ok(false) => {
                        tracing::debug!("{} not found in {}", coordinate, repository);
                    }
                    Err(e) => {
                        tracing::debug!("{}", e);
                        last_error = Some(e);
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| DependencyResolutionError::ArtifactNotFound {
            coordinate: coordinate.to_string(),
            repositories: self.repositories.iter().map(ToString::to_string).collect(),
        }))
    }
}

impl RemoteResolver for RepositoryResolver {
    fn resolve(&self, coordinate: &ArtifactCoordinate) -> ResolutionResult<Vec<ResolvedArtifact>> {
        tracing::debug!(
            "Resolving {} from {:?}...",
            coordinate,
            self.repositories.iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
        );
        let closure = self.index.closure_of(coordinate).map_err(|source| {
            DependencyResolutionError::InvalidClosure {
                coordinate: coordinate.to_string(),
                source,
            }
        })?;

        closure
            .into_iter()
            .map(|member| -> ResolutionResult<ResolvedArtifact> {
                let file = self.locate(&member)?;
                tracing::debug!("Artifact {} resolved to {}", member, file.display());
                Ok(ResolvedArtifact::new(member, file))
            })
            .collect()
    }
}
