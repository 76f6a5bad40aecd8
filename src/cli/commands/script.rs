use eyre::Result;
use std::io::Write;

use crate::cfg::TaxonomySource;
use crate::cli::script::{HELPER, Shell, generate_script};

/// Print the shell glue that registers completion for the program
#[derive(Debug, Clone, clap::Args)]
pub struct ScriptCommand {
    /// Shell to generate the script for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Program to register completion for [default: the taxonomy's program]
    #[arg(long)]
    pub program: Option<String>,
}

impl ScriptCommand {
    pub fn execute<W: Write>(&self, source: &TaxonomySource, out: &mut W) -> Result<()> {
        let program = match self.program {
            Some(ref program) => program.clone(),
            None => source.load()?.program().to_string(),
        };
        write!(out, "{}", generate_script(self.shell, &program, HELPER))?;
        Ok(())
    }
}
