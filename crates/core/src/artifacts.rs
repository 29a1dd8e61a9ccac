//! Project artifact lookup table and the well-known testing artifacts.

use indexmap::IndexMap;
use modpath_api::{ArtifactCoordinate, GroupArtifact, ProjectArtifact};
use std::collections::HashMap;

/// The artifacts a project declares, plus a read-only map from identity to
/// the first declaration of that identity.
///
/// Declarations sharing an identity (classifier variants, a `pom` next to its
/// jar) are all kept in `declared`; lookups only see the first one.
#[derive(Debug, Clone, Default)]
pub struct ProjectArtifacts {
    declared: Vec<ProjectArtifact>,
    by_identity: IndexMap<GroupArtifact, usize>,
}

impl ProjectArtifacts {
    pub fn new(artifacts: impl IntoIterator<Item = ProjectArtifact>) -> Self {
        let declared: Vec<ProjectArtifact> = artifacts.into_iter().collect();
        let mut by_identity = IndexMap::new();
        for (index, artifact) in declared.iter().enumerate() {
            by_identity.entry(artifact.identity()).or_insert(index);
        }
        Self {
            declared,
            by_identity,
        }
    }

    pub fn contains(&self, identity: &GroupArtifact) -> bool {
        self.by_identity.contains_key(identity)
    }

    pub fn get(&self, identity: &GroupArtifact) -> Option<&ProjectArtifact> {
        self.by_identity.get(identity).map(|&index| &self.declared[index])
    }

    /// Version of the first declared artifact in `group`.
    pub fn group_version(&self, group: &str) -> Option<&str> {
        self.declared
            .iter()
            .find(|a| a.coordinate.group == group)
            .map(|a| a.version())
    }

    /// Every declaration, in declaration order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectArtifact> {
        self.declared.iter()
    }

    /// Distinct identities, in order of first declaration.
    pub fn identities(&self) -> impl Iterator<Item = &GroupArtifact> {
        self.by_identity.keys()
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}

/// Release train a testing artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Jupiter,
    Vintage,
    Platform,
}

impl Family {
    /// Key used in the `versions` launch option.
    pub fn key(&self) -> &'static str {
        match self {
            Family::Jupiter => "jupiter",
            Family::Vintage => "vintage",
            Family::Platform => "platform",
        }
    }

    pub fn default_version(&self) -> &'static str {
        match self {
            Family::Jupiter => "5.3.1",
            Family::Vintage => "5.3.1",
            Family::Platform => "1.3.1",
        }
    }
}

/// A testing artifact the launcher knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownArtifact {
    pub group: &'static str,
    pub artifact: &'static str,
    pub family: Family,
    /// Module name when the artifact is a named module the tests read.
    pub module: Option<&'static str>,
}

impl KnownArtifact {
    const fn new(
        group: &'static str,
        artifact: &'static str,
        family: Family,
        module: Option<&'static str>,
    ) -> Self {
        Self {
            group,
            artifact,
            family,
            module,
        }
    }

    pub fn identity(&self) -> GroupArtifact {
        GroupArtifact::new(self.group, self.artifact)
    }
}

pub const JUNIT_JUPITER_API: KnownArtifact = KnownArtifact::new(
    "org.junit.jupiter",
    "junit-jupiter-api",
    Family::Jupiter,
    Some("org.junit.jupiter.api"),
);
pub const JUNIT_JUPITER_ENGINE: KnownArtifact =
    KnownArtifact::new("org.junit.jupiter", "junit-jupiter-engine", Family::Jupiter, None);
pub const JUNIT_JUPITER_PARAMS: KnownArtifact = KnownArtifact::new(
    "org.junit.jupiter",
    "junit-jupiter-params",
    Family::Jupiter,
    Some("org.junit.jupiter.params"),
);
pub const JUNIT_JUPITER_MIGRATIONSUPPORT: KnownArtifact = KnownArtifact::new(
    "org.junit.jupiter",
    "junit-jupiter-migrationsupport",
    Family::Jupiter,
    Some("org.junit.jupiter.migrationsupport"),
);
pub const JUNIT_VINTAGE_ENGINE: KnownArtifact =
    KnownArtifact::new("org.junit.vintage", "junit-vintage-engine", Family::Vintage, None);
pub const JUNIT_PLATFORM_CONSOLE: KnownArtifact =
    KnownArtifact::new("org.junit.platform", "junit-platform-console", Family::Platform, None);
pub const JUNIT_PLATFORM_COMMONS: KnownArtifact = KnownArtifact::new(
    "org.junit.platform",
    "junit-platform-commons",
    Family::Platform,
    Some("org.junit.platform.commons"),
);
/// JUnit 4 runs on the platform through the vintage engine.
pub const JUNIT: KnownArtifact = KnownArtifact::new("junit", "junit", Family::Vintage, Some("junit"));

/// The only legacy framework version the vintage engine is paired with.
pub const VINTAGE_JUNIT_VERSION: &str = "4.12";

/// Modules probed for `--add-reads`, in emission order.
pub const READ_PROBES: [KnownArtifact; 4] = [
    JUNIT_JUPITER_API,
    JUNIT_JUPITER_PARAMS,
    JUNIT_JUPITER_MIGRATIONSUPPORT,
    JUNIT,
];

/// Modules probed for `--add-opens`.
pub const OPEN_PROBES: [KnownArtifact; 1] = [JUNIT_PLATFORM_COMMONS];

/// Picks the version to request for a well-known artifact.
///
/// Explicit overrides win, then any version the project already declares for
/// the same group, then the built-in default.
#[derive(Debug, Clone)]
pub struct VersionTable<'a> {
    overrides: &'a HashMap<String, String>,
    project: &'a ProjectArtifacts,
}

impl<'a> VersionTable<'a> {
    pub fn new(overrides: &'a HashMap<String, String>, project: &'a ProjectArtifacts) -> Self {
        Self { overrides, project }
    }

    pub fn version(&self, known: &KnownArtifact) -> String {
        if let Some(version) = self.overrides.get(known.family.key()) {
            return version.clone();
        }
        if let Some(version) = self.project.group_version(known.group) {
            return version.to_string();
        }
        known.family.default_version().to_string()
    }

    pub fn coordinate(&self, known: &KnownArtifact) -> ArtifactCoordinate {
        known.identity().with_version(self.version(known))
    }
}
