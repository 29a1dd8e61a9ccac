use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_MODULE_INFO_TEST: &str = "module-info.test";

/// Caller-supplied overrides for a launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchOptions {
    /// Modules to read instead of the probed ones.
    pub add_reads: Option<Vec<String>>,
    /// Modules to open the main module's packages to instead of the probed ones.
    pub add_opens: Option<Vec<String>>,
    pub verbose: bool,
    /// Version per artifact family (`jupiter`, `vintage`, `platform`).
    pub versions: HashMap<String, String>,
    /// File name of the module patch override file.
    pub module_info_test: String,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            add_reads: None,
            add_opens: None,
            verbose: false,
            versions: HashMap::new(),
            module_info_test: DEFAULT_MODULE_INFO_TEST.to_string(),
        }
    }
}

impl LaunchOptions {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
