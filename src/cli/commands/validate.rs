use colored::Colorize;
use eyre::Result;
use std::io::Write;
use std::path::PathBuf;

use crate::cfg::TaxonomySource;

/// Check a taxonomy file (or the active taxonomy) for authoring mistakes
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateCommand {
    /// File to check instead of the active taxonomy
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute<W: Write>(&self, source: &TaxonomySource, out: &mut W) -> Result<()> {
        let source = match self.file {
            Some(ref file) => TaxonomySource::File(file.clone()),
            None => source.clone(),
        };
        let taxonomy = source.load()?;

        let origin = match source.path() {
            Some(path) => path.display().to_string(),
            None => "embedded taxonomy".to_string(),
        };
        writeln!(
            out,
            "{}: {} (program '{}', version {}): {} root candidates, {} paths, max depth {}",
            "ok".green().bold(),
            origin,
            taxonomy.program(),
            taxonomy.version(),
            taxonomy.root_candidates().len(),
            taxonomy.len(),
            taxonomy.max_depth()
        )?;
        Ok(())
    }
}
