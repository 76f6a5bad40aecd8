use eyre::Result;
use log::info;
use std::io::Write;

use crate::cfg::TaxonomySource;
use crate::cli::{Cli, Command};

/// Run one parsed invocation, writing its output to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let source = TaxonomySource::from_path(cli.taxonomy.clone());
    if let Some(path) = source.path() {
        info!("Using taxonomy file {}", path.display());
    }

    match cli.command {
        Command::Complete(ref cmd) => cmd.execute(&source, out),
        Command::List(ref cmd) => cmd.execute(&source, out),
        Command::Script(ref cmd) => cmd.execute(&source, out),
        Command::Validate(ref cmd) => cmd.execute(&source, out),
    }
}
