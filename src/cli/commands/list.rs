use eyre::Result;
use log::debug;
use std::io::Write;

use crate::cfg::TaxonomySource;

/// List the root commands, one path's candidates, or every registered path
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListCommand {
    /// Command path to list, e.g. `auth token`
    #[arg(value_name = "PATH")]
    pub path: Vec<String>,

    /// Print every registered path instead of candidates
    #[arg(long, conflicts_with = "path")]
    pub paths: bool,
}

impl ListCommand {
    pub fn execute<W: Write>(&self, source: &TaxonomySource, out: &mut W) -> Result<()> {
        let taxonomy = source.load()?;

        if self.paths {
            for (path, _) in taxonomy.paths() {
                writeln!(out, "{path}")?;
            }
            return Ok(());
        }

        let candidates = if self.path.is_empty() {
            taxonomy.root_candidates()
        } else {
            let key = self.path.join(" ");
            match taxonomy.lookup(&key) {
                Some(candidates) => candidates,
                None => {
                    debug!("list: '{key}' is not a registered path");
                    return Ok(());
                }
            }
        };

        for candidate in candidates {
            writeln!(out, "{candidate}")?;
        }
        Ok(())
    }
}
