use log::info;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::cfg::error::TaxonomyError;
use crate::cfg::taxonomy::Taxonomy;

/// Environment variable naming an alternative taxonomy file.
pub const TAXONOMY_ENV: &str = "JINA_COMPLETE_TAXONOMY";

/// Where the taxonomy for this process comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TaxonomySource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl TaxonomySource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Embedded,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Embedded => None,
            Self::File(path) => Some(path.as_path()),
        }
    }

    /// Load and validate. The embedded table is shared, a file is read fresh.
    pub fn load(&self) -> Result<Cow<'static, Taxonomy>, TaxonomyError> {
        match self {
            Self::Embedded => Taxonomy::builtin().map(Cow::Borrowed),
            Self::File(path) => {
                info!("Loading taxonomy from {}", path.display());
                Taxonomy::from_file(path).map(Cow::Owned)
            }
        }
    }
}
