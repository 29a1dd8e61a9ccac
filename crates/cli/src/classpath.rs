use crate::LaunchArgs;
use crate::context;
use modpath_core::artifacts::VersionTable;
use modpath_core::{ClasspathAssembler, LaunchOptions};
use tracing::info;

pub fn run(args: &LaunchArgs, options: &LaunchOptions) -> Result<(), Box<dyn std::error::Error>> {
    let project = context::load_project(args)?;
    let resolver = context::build_resolver(args, &project)?;

    let artifacts = project.artifact_map();
    let versions = VersionTable::new(&options.versions, &artifacts);
    let paths = ClasspathAssembler::new(&project.build, &artifacts, versions, &resolver).assemble();
    info!("Execution path has {} entries", paths.len());

    println!("{}", paths.join()?.to_string_lossy());
    Ok(())
}
