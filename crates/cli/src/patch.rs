use crate::LaunchArgs;
use crate::context;
use modpath_core::{LaunchOptions, ModulePatchPlanner};

pub fn run(args: &LaunchArgs, options: &LaunchOptions) -> Result<(), Box<dyn std::error::Error>> {
    let project = context::load_project(args)?;
    let artifacts = project.artifact_map();

    let plan = ModulePatchPlanner::new(&project.build, &artifacts, options)
        .plan(project.main_module.as_ref())?;

    for arg in plan.arguments() {
        println!("{}", arg);
    }
    Ok(())
}
