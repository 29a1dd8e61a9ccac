//! Local Maven repository layout.
//!
//! Artifacts live at `{root}/{group as dirs}/{artifact}/{version}/{file}`,
//! by default under `~/.m2/repository`.

use modpath_api::ArtifactCoordinate;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    pub fn new() -> Self {
        let root = dirs::home_dir()
            .map(|h| h.join(".m2/repository"))
            .unwrap_or_else(|| PathBuf::from(".m2/repository"));

        Self { root }
    }

    /// Create with a custom root (for testing or `-Dmaven.repo.local` style setups)
    pub fn with_path(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Repository-relative location, `/`-separated so it doubles as a URL path.
    pub fn relative_path(coordinate: &ArtifactCoordinate) -> String {
        format!(
            "{}/{}/{}/{}",
            coordinate.group.replace('.', "/"),
            coordinate.artifact,
            coordinate.version,
            coordinate.file_name()
        )
    }

    pub fn artifact_path(&self, coordinate: &ArtifactCoordinate) -> PathBuf {
        Self::relative_path(coordinate)
            .split('/')
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    /// Local file of `coordinate`, if it has been downloaded already.
    pub fn find(&self, coordinate: &ArtifactCoordinate) -> Option<PathBuf> {
        let path = self.artifact_path(coordinate);
        path.is_file().then_some(path)
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_relative_path() {
        let coordinate: ArtifactCoordinate =
            "org.junit.platform:junit-platform-console:1.3.1".parse().unwrap();
        assert_eq!(
            LocalRepository::relative_path(&coordinate),
            "org/junit/platform/junit-platform-console/1.3.1/junit-platform-console-1.3.1.jar"
        );
    }

    #[test]
    fn test_find_only_existing_files() {
        let temp = tempfile::tempdir().unwrap();
        let repository = LocalRepository::with_path(temp.path().to_path_buf());
        let coordinate: ArtifactCoordinate = "com.google.guava:guava:31.1-jre".parse().unwrap();

        assert!(repository.find(&coordinate).is_none());

        let expected = temp
            .path()
            .join("com/google/guava/guava/31.1-jre/guava-31.1-jre.jar");
        fs::create_dir_all(expected.parent().unwrap()).unwrap();
        fs::File::create(&expected).unwrap();

        assert_eq!(repository.find(&coordinate), Some(expected));
    }
}
