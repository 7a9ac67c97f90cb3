use super::McCostOperation;
use clap::Parser;

/// command line tool for inspecting multi-criteria cost parameters
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct McCostApp {
    #[command(subcommand)]
    pub op: McCostOperation,
}
