//! Pre-computed dependency closures.
//!
//! Graph expansion belongs to the host's resolution protocol; it hands over the
//! result as a JSON object mapping a root coordinate to its ordered closure.

use modpath_api::{ArtifactCoordinate, CoordinateError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Reading closure index failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed closure index: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClosureIndex {
    closures: HashMap<String, Vec<String>>,
}

impl ClosureIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn insert(&mut self, root: &ArtifactCoordinate, closure: &[ArtifactCoordinate]) {
        self.closures.insert(
            root.to_string(),
            closure.iter().map(ToString::to_string).collect(),
        );
    }

    /// Closure of `root`, with `root` first.
    ///
    /// A root missing from the index has no known dependencies and resolves to
    /// itself.
    pub fn closure_of(
        &self,
        root: &ArtifactCoordinate,
    ) -> Result<Vec<ArtifactCoordinate>, CoordinateError> {
        let Some(entries) = self.closures.get(&root.to_string()) else {
            tracing::debug!("No closure indexed for {}, resolving it alone", root);
            return Ok(vec![root.clone()]);
        };

        let mut closure = vec![root.clone()];
        for entry in entries {
            let coordinate: ArtifactCoordinate = entry.parse()?;
            if !closure.contains(&coordinate) {
                closure.push(coordinate);
            }
        }
        Ok(closure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(s: &str) -> ArtifactCoordinate {
        s.parse().unwrap()
    }

    #[test]
    fn test_unindexed_root_resolves_to_itself() {
        let index = ClosureIndex::new();
        let root = coordinate("junit:junit:4.12");
        assert_eq!(index.closure_of(&root).unwrap(), vec![root]);
    }

    #[test]
    fn test_root_comes_first_once() {
        let index: ClosureIndex = serde_json::from_str(
            r#"{"org.junit.platform:junit-platform-console:1.3.1": [
                "org.junit.platform:junit-platform-launcher:1.3.1",
                "org.junit.platform:junit-platform-console:1.3.1",
                "org.junit.platform:junit-platform-engine:1.3.1"
            ]}"#,
        )
        .unwrap();

        let closure = index
            .closure_of(&coordinate("org.junit.platform:junit-platform-console:1.3.1"))
            .unwrap();
        let names: Vec<&str> = closure.iter().map(|c| c.artifact.as_str()).collect();
        assert_eq!(
            names,
            vec!["junit-platform-console", "junit-platform-launcher", "junit-platform-engine"]
        );
    }

    #[test]
    fn test_malformed_entry_is_an_error() {
        let mut index = ClosureIndex::new();
        let root = coordinate("a:b:1");
        index.closures.insert(root.to_string(), vec!["not-a-coordinate".to_string()]);
        assert!(index.closure_of(&root).is_err());
    }
}
