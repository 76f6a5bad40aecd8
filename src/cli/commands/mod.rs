pub mod complete;
pub mod list;
pub mod script;
pub mod validate;

pub use complete::CompleteCommand;
pub use list::ListCommand;
pub use script::ScriptCommand;
pub use validate::ValidateCommand;

use std::path::PathBuf;

use crate::cfg::TAXONOMY_ENV;

/// Shell completion helper for the jina command line
#[derive(Debug, clap::Parser)]
#[command(name = "jina-complete", version)]
pub struct Cli {
    /// Taxonomy file to use instead of the embedded one
    #[arg(long, global = true, value_name = "FILE", env = TAXONOMY_ENV)]
    pub taxonomy: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    Complete(CompleteCommand),
    List(ListCommand),
    Script(ScriptCommand),
    Validate(ValidateCommand),
}
