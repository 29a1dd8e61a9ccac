mod classpath;
mod context;
mod patch;
mod plan;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "modpath",
    version,
    about = "Assembles the execution path and module patch arguments for modular test runs",
    long_about = "modpath reads the build metadata of a project (output directories, resolved \
                  dependencies, main module) and computes what a JUnit Platform launcher needs: \
                  the ordered execution path, including testing engines the project leaves out, \
                  and the --patch-module/--add-reads/--add-opens arguments that put the tests \
                  inside the main module."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the execution path, joined with the platform path separator
    Classpath(LaunchArgs),
    /// Print the module patch arguments, one per line
    #[command(
        long_about = "Prints the module system arguments that patch the test classes into the \
                      main module. A module-info.test file in the test source or test output \
                      directory replaces the inferred --add-reads/--add-opens arguments."
    )]
    Patch(LaunchArgs),
    /// Print the execution path and module patch as JSON
    Plan(LaunchArgs),
}

#[derive(Args, Clone)]
pub struct LaunchArgs {
    /// Project model JSON written by the host build tool
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Launch options JSON
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Dependency closure index JSON
    #[arg(long, value_name = "FILE")]
    pub index: Option<PathBuf>,

    /// Local repository root (defaults to ~/.m2/repository)
    #[arg(long, value_name = "DIR")]
    pub local_repo: Option<PathBuf>,

    /// Never download, only use the local repository
    #[arg(long)]
    pub offline: bool,

    /// Modules the main module reads, replacing the inferred ones
    #[arg(long, value_name = "MODULE", value_delimiter = ',')]
    pub add_reads: Option<Vec<String>>,

    /// Modules the main module's packages are opened to, replacing the inferred ones
    #[arg(long, value_name = "MODULE", value_delimiter = ',')]
    pub add_opens: Option<Vec<String>>,

    /// Emit diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (component, args) = match &cli.command {
        Commands::Classpath(args) => ("classpath", args),
        Commands::Patch(args) => ("patch", args),
        Commands::Plan(args) => ("plan", args),
    };
    let options = context::load_options(args)?;
    let _guard = modpath_core::logging::init_logging(component, options.verbose);

    match cli.command {
        Commands::Classpath(args) => classpath::run(&args, &options),
        Commands::Patch(args) => patch::run(&args, &options),
        Commands::Plan(args) => plan::run(&args, &options),
    }
}
