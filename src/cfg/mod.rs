pub mod error;
pub mod source;
pub mod spec;
pub mod taxonomy;

pub use error::{StructureError, TaxonomyError};
pub use source::{TAXONOMY_ENV, TaxonomySource};
pub use spec::{PathSpec, TaxonomySpec};
pub use taxonomy::{CommandPath, Taxonomy};
