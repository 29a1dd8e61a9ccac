//! Module patch arguments that put test classes into the main module.

use crate::artifacts::{KnownArtifact, OPEN_PROBES, ProjectArtifacts, READ_PROBES};
use crate::error::{ModpathError, Result};
use crate::options::LaunchOptions;
use crate::project::BuildLayout;
use modpath_api::ModuleDescriptor;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// How the main module is opened up to the tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tier", rename_all = "kebab-case")]
pub enum PatchStrategy {
    /// Verbatim lines of a user-provided override file.
    Override {
        source: PathBuf,
        directives: Vec<String>,
    },
    /// Reads and opens inferred from the testing artifacts on the project.
    BestEffort {
        reads: Vec<String>,
        opens: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchPlan {
    pub module: String,
    pub test_output: PathBuf,
    pub packages: BTreeSet<String>,
    pub strategy: PatchStrategy,
}

impl PatchPlan {
    /// Flattens the plan into launcher tokens, `--patch-module` first.
    pub fn arguments(&self) -> Vec<String> {
        let mut args = vec![
            "--patch-module".to_string(),
            format!("{}={}", self.module, self.test_output.display()),
        ];
        match &self.strategy {
            PatchStrategy::Override { directives, .. } => {
                for directive in directives {
                    args.extend(directive_tokens(directive));
                }
            }
            PatchStrategy::BestEffort { reads, opens } => {
                for module in reads {
                    args.push("--add-reads".to_string());
                    args.push(format!("{}={}", self.module, module));
                }
                for module in opens {
                    // "name/*" is not accepted by the runtime, so every package is listed
                    for package in &self.packages {
                        args.push("--add-opens".to_string());
                        args.push(format!("{}/{}={}", self.module, package, module));
                    }
                }
            }
        }
        args
    }
}

pub struct ModulePatchPlanner<'a> {
    layout: &'a BuildLayout,
    artifacts: &'a ProjectArtifacts,
    options: &'a LaunchOptions,
}

impl<'a> ModulePatchPlanner<'a> {
    pub fn new(
        layout: &'a BuildLayout,
        artifacts: &'a ProjectArtifacts,
        options: &'a LaunchOptions,
    ) -> Self {
        Self {
            layout,
            artifacts,
            options,
        }
    }

    pub fn plan(&self, main_module: Option<&ModuleDescriptor>) -> Result<PatchPlan> {
        let descriptor = main_module.ok_or(ModpathError::MissingMainModule)?;
        let test_output = &self.layout.test_output_directory;
        tracing::debug!(
            "Patching tests into main module {} <- '{}'",
            descriptor.name,
            test_output.display()
        );

        let strategy = self.select_strategy()?;
        match &strategy {
            PatchStrategy::Override { source, .. } => tracing::info!(
                "Using lines of '{}' to patch module {}...",
                source.display(),
                descriptor.name
            ),
            PatchStrategy::BestEffort { .. } => tracing::info!(
                "Adding best-effort command line options to patch module {}...",
                descriptor.name
            ),
        }

        Ok(PatchPlan {
            module: descriptor.name.clone(),
            test_output: test_output.clone(),
            packages: descriptor.packages.clone(),
            strategy,
        })
    }

    /// Override file if one exists, best effort otherwise.
    ///
    /// An override file that exists but cannot be read is an error, never a
    /// reason to fall back.
    pub fn select_strategy(&self) -> Result<PatchStrategy> {
        if let Some(source) = self.find_override_file() {
            let directives = read_directives(&source)?;
            return Ok(PatchStrategy::Override { source, directives });
        }
        Ok(PatchStrategy::BestEffort {
            reads: self.add_reads_modules(),
            opens: self.add_opens_modules(),
        })
    }

    fn find_override_file(&self) -> Option<PathBuf> {
        let roots = [
            &self.layout.test_source_directory,
            &self.layout.test_output_directory,
        ];
        roots
            .iter()
            .map(|root| root.join(&self.options.module_info_test))
            .find(|candidate| candidate.is_file())
    }

    fn add_reads_modules(&self) -> Vec<String> {
        match &self.options.add_reads {
            Some(modules) => modules.clone(),
            None => self.probe(&READ_PROBES),
        }
    }

    fn add_opens_modules(&self) -> Vec<String> {
        match &self.options.add_opens {
            Some(modules) => modules.clone(),
            None => self.probe(&OPEN_PROBES),
        }
    }

    fn probe(&self, probes: &[KnownArtifact]) -> Vec<String> {
        probes
            .iter()
            .filter(|known| self.artifacts.contains(&known.identity()))
            .filter_map(|known| known.module)
            .map(str::to_string)
            .collect()
    }
}

/// Launcher tokens of one override line.
///
/// A `--flag value` line becomes the flag and its value; any other line is a
/// single token.
fn directive_tokens(directive: &str) -> Vec<String> {
    if directive.starts_with("--") {
        if let Some((flag, value)) = directive.split_once(char::is_whitespace) {
            return vec![flag.to_string(), value.to_string()];
        }
    }
    vec![directive.to_string()]
}

/// Trimmed lines of an override file, minus blanks and `//` comments.
pub fn read_directives(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| ModpathError::OverrideRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("//"))
        .inspect(|line| tracing::debug!("  {}", line))
        .map(str::to_string)
        .collect())
}
