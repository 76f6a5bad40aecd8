use eyre::Result;
use serde::Serialize;
use std::io::Write;

use crate::cfg::TaxonomySource;
use crate::cli::completion::{CandidateKind, CompletionRequest, Matched, resolve_detailed};

/// Print completions for the words typed so far
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CompleteCommand {
    /// Complete a raw command line instead of separate words
    #[arg(long, value_name = "LINE", conflicts_with = "words")]
    pub line: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Words after the program name; an empty last word means the cursor follows a space
    #[arg(value_name = "WORDS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

#[derive(Serialize)]
struct JsonCandidate<'t> {
    value: &'t str,
    kind: CandidateKind,
}

#[derive(Serialize)]
struct JsonResolution<'t> {
    matched: Matched<'t>,
    partial: &'t str,
    candidates: Vec<JsonCandidate<'t>>,
}

impl CompleteCommand {
    pub fn request(&self) -> CompletionRequest {
        match self.line {
            Some(ref line) => CompletionRequest::from_line(line),
            None => CompletionRequest::from_words(&self.words),
        }
    }

    pub fn execute<W: Write>(&self, source: &TaxonomySource, out: &mut W) -> Result<()> {
        let taxonomy = source.load()?;
        let request = self.request();
        let resolution = resolve_detailed(&taxonomy, &request);

        if self.json {
            let json = JsonResolution {
                matched: resolution.matched.clone(),
                partial: &resolution.partial,
                candidates: resolution
                    .candidates
                    .iter()
                    .map(|&value| JsonCandidate {
                        value,
                        kind: CandidateKind::of(value),
                    })
                    .collect(),
            };
            writeln!(out, "{}", serde_json::to_string(&json)?)?;
            return Ok(());
        }

        for candidate in &resolution.candidates {
            writeln!(out, "{candidate}")?;
        }
        Ok(())
    }
}
