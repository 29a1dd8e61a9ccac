use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Derives the package set of a compiled module from its output directory.
///
/// A package is any directory below `root` holding at least one `.class` file.
/// The unnamed package, `module-info.class` and `META-INF` are not packages.
pub fn scan_packages(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|ext| ext.to_str()) == Some("class"))
        .filter_map(|e| {
            let parent = e.path().parent()?;
            let relative = parent.strip_prefix(root).ok()?;
            let segments: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect();
            if segments.is_empty() || segments[0] == "META-INF" {
                return None;
            }
            Some(segments.join("."))
        })
        .collect()
}
