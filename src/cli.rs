use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dustpan", about = "Find and clear reclaimable cache directories")]
pub struct Cli {
    /// Base directory for the cache catalog (defaults to your home directory)
    #[arg(long, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Print a report and exit instead of starting the interactive session
    #[arg(long)]
    pub list: bool,

    /// With --list, print the report as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Write logs here instead of the user cache directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
