use crate::error::ResolutionResult;
use crate::models::{ArtifactCoordinate, ResolvedArtifact};

/// Remote repository resolution protocol.
///
/// Implementations expand a coordinate into its full transitive closure, each
/// member backed by a concrete local file. Filtering against artifacts the
/// project already declares is the caller's job.
pub trait RemoteResolver {
    fn resolve(&self, coordinate: &ArtifactCoordinate) -> ResolutionResult<Vec<ResolvedArtifact>>;
}
