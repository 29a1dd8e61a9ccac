use super::coordinate::{ArtifactCoordinate, GroupArtifact};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Packaging type of a project artifact.
///
/// Mirrors the artifact handlers of the host build tool: each kind decides
/// whether its file belongs on the execution path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    #[default]
    Jar,
    TestJar,
    EjbClient,
    JavaSource,
    Javadoc,
    Pom,
}

impl ArtifactKind {
    pub fn is_added_to_classpath(&self) -> bool {
        match self {
            ArtifactKind::Jar | ArtifactKind::TestJar | ArtifactKind::EjbClient => true,
            ArtifactKind::JavaSource | ArtifactKind::Javadoc | ArtifactKind::Pom => false,
        }
    }
}

/// A dependency already resolved by the host build tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectArtifact {
    #[serde(with = "super::util::serde_display")]
    pub coordinate: ArtifactCoordinate,
    #[serde(default)]
    pub kind: ArtifactKind,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl ProjectArtifact {
    pub fn new(coordinate: ArtifactCoordinate, file: impl Into<PathBuf>) -> Self {
        Self {
            coordinate,
            kind: ArtifactKind::Jar,
            file: Some(file.into()),
        }
    }

    pub fn with_kind(mut self, kind: ArtifactKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn identity(&self) -> GroupArtifact {
        self.coordinate.identity()
    }

    pub fn version(&self) -> &str {
        &self.coordinate.version
    }
}
