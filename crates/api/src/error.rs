#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("Invalid coordinate '{0}', expected <group>:<artifact>:<version>[:<classifier>]")]
    Malformed(String),
    #[error("Invalid identity '{0}', expected <group>:<artifact>")]
    MalformedIdentity(String),
}

/// Failure of the remote resolution protocol for a single request.
#[derive(Debug, thiserror::Error)]
pub enum DependencyResolutionError {
    #[error("Artifact {coordinate} not found in local repository or in {repositories:?}")]
    ArtifactNotFound {
        coordinate: String,
        repositories: Vec<String>,
    },
    #[error("Transfer of {coordinate} from {repository} failed: {message}")]
    Transport {
        coordinate: String,
        repository: String,
        message: String,
    },
    #[error("Dependency closure of {coordinate} contains an invalid coordinate: {source}")]
    InvalidClosure {
        coordinate: String,
        #[source]
        source: CoordinateError,
    },
    #[error("I/O error while resolving {coordinate}: {source}")]
    Io {
        coordinate: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ResolutionResult<T> = std::result::Result<T, DependencyResolutionError>;
