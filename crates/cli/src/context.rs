use crate::LaunchArgs;
use modpath_api::RemoteRepository;
use modpath_core::{LaunchOptions, ProjectModel};
use modpath_maven::{ClosureIndex, HttpFetcher, LocalRepository, RepositoryResolver};

/// Options file, then command line flags on top.
pub fn load_options(args: &LaunchArgs) -> modpath_core::Result<LaunchOptions> {
    let mut options = match &args.options {
        Some(path) => LaunchOptions::load(path)?,
        None => LaunchOptions::default(),
    };
    if args.add_reads.is_some() {
        options.add_reads = args.add_reads.clone();
    }
    if args.add_opens.is_some() {
        options.add_opens = args.add_opens.clone();
    }
    options.verbose |= args.verbose;
    Ok(options)
}

pub fn load_project(args: &LaunchArgs) -> modpath_core::Result<ProjectModel> {
    tracing::debug!("Loading project model from '{}'", args.project.display());
    ProjectModel::load(&args.project)
}

pub fn build_resolver(
    args: &LaunchArgs,
    project: &ProjectModel,
) -> Result<RepositoryResolver, Box<dyn std::error::Error>> {
    let local = match &args.local_repo {
        Some(root) => LocalRepository::with_path(root.clone()),
        None => LocalRepository::new(),
    };
    let index = match &args.index {
        Some(path) => ClosureIndex::load(path)?,
        None => ClosureIndex::new(),
    };

    if args.offline {
        return Ok(RepositoryResolver::offline(local, index));
    }

    let mut repositories = project.repositories.all();
    if repositories.is_empty() {
        repositories.push(RemoteRepository::maven_central());
    }
    Ok(RepositoryResolver::new(
        local,
        index,
        repositories,
        Some(HttpFetcher::new()?),
    ))
}
