use crate::error::CoordinateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// `(group, artifact)` identity of a dependency.
///
/// This is the de-duplication key: two artifacts with the same identity are the
/// same library regardless of version or classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupArtifact {
    pub group: String,
    pub artifact: String,
}

impl GroupArtifact {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }

    /// Attach a version, producing a resolvable coordinate.
    pub fn with_version(&self, version: impl Into<String>) -> ArtifactCoordinate {
        ArtifactCoordinate {
            group: self.group.clone(),
            artifact: self.artifact.clone(),
            version: version.into(),
            classifier: None,
        }
    }
}

impl fmt::Display for GroupArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

impl FromStr for GroupArtifact {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split(':').collect::<Vec<_>>().as_slice() {
            [group, artifact] if !group.is_empty() && !artifact.is_empty() => {
                Ok(Self::new(*group, *artifact))
            }
            _ => Err(CoordinateError::MalformedIdentity(s.to_string())),
        }
    }
}

/// Fully qualified dependency coordinate.
///
/// Text form: `group:artifact:version[:classifier]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub classifier: Option<String>,
}

impl ArtifactCoordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            classifier: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn identity(&self) -> GroupArtifact {
        GroupArtifact::new(self.group.clone(), self.artifact.clone())
    }

    /// File name under the Maven repository layout, e.g. `guava-31.1-jre.jar`.
    pub fn file_name(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!("{}-{}-{}.jar", self.artifact, self.version, classifier),
            None => format!("{}-{}.jar", self.artifact, self.version),
        }
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        Ok(())
    }
}

impl FromStr for ArtifactCoordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(CoordinateError::Malformed(s.to_string()));
        }
        match parts.as_slice() {
            [group, artifact, version] => Ok(Self::new(*group, *artifact, *version)),
            [group, artifact, version, classifier] => {
                Ok(Self::new(*group, *artifact, *version).with_classifier(*classifier))
            }
            _ => Err(CoordinateError::Malformed(s.to_string())),
        }
    }
}

/// A coordinate resolved to a concrete local file.
///
/// Only produced by a [`crate::RemoteResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    coordinate: ArtifactCoordinate,
    file: PathBuf,
}

impl ResolvedArtifact {
    pub fn new(coordinate: ArtifactCoordinate, file: PathBuf) -> Self {
        Self { coordinate, file }
    }

    pub fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    pub fn file(&self) -> &PathBuf {
        &self.file
    }

    pub fn identity(&self) -> GroupArtifact {
        self.coordinate.identity()
    }
}

impl fmt::Display for ResolvedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.coordinate, self.file.display())
    }
}
