pub mod app;
pub mod cfg;
pub mod cli;

pub use cfg::{CommandPath, Taxonomy, TaxonomyError, TaxonomySource};
pub use cli::completion::{CompletionRequest, resolve, resolve_detailed};
