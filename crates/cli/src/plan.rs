use crate::LaunchArgs;
use crate::context;
use modpath_core::LaunchOptions;

pub fn run(args: &LaunchArgs, options: &LaunchOptions) -> Result<(), Box<dyn std::error::Error>> {
    let project = context::load_project(args)?;
    let resolver = context::build_resolver(args, &project)?;

    let plan = modpath_core::prepare(&project, options, &resolver)?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
