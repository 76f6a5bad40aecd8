use colored::Colorize;
use std::fmt;

/// Label used in messages for the top-level candidate list.
pub const ROOT_LABEL: &str = "<root>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    Io {
        path: String,
        error: String,
    },
    Syntax {
        origin: String,
        error: String,
    },
    UnsupportedVersion {
        origin: String,
        found: u32,
        supported: u32,
    },
    Inconsistent {
        origin: String,
        errors: Vec<StructureError>,
    },
}

/// A single authoring mistake found while validating a taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    MalformedPath {
        path: String,
    },
    DuplicatePath {
        path: String,
    },
    EmptyCandidate {
        path: String,
    },
    MalformedCandidate {
        path: String,
        candidate: String,
    },
    DuplicateCandidate {
        path: String,
        candidate: String,
    },
    MissingParent {
        path: String,
        parent: String,
    },
    UnlistedChild {
        path: String,
        parent: String,
        leaf: String,
    },
}

impl TaxonomyError {
    /// Structural problems carried by this error, empty for I/O and syntax errors.
    pub fn structure_errors(&self) -> &[StructureError] {
        match self {
            TaxonomyError::Inconsistent { errors, .. } => errors,
            _ => &[],
        }
    }
}

impl fmt::Display for TaxonomyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxonomyError::Io { path, error } => {
                write!(f, "{}: Could not read taxonomy '{}': {}", "error".red().bold(), path, error)
            }

            TaxonomyError::Syntax { origin, error } => {
                write!(f, "{}: Invalid taxonomy in {}\n\n{}", "error".red().bold(), origin, error)
            }

            TaxonomyError::UnsupportedVersion { origin, found, supported } => {
                write!(
                    f,
                    "{}: Taxonomy {} declares version {}, but only versions up to {} are supported",
                    "error".red().bold(),
                    origin,
                    found.to_string().yellow(),
                    supported.to_string().green()
                )
            }

            TaxonomyError::Inconsistent { origin, errors } => {
                writeln!(
                    f,
                    "{}: Taxonomy {} has {} structural problem(s):",
                    "error".red().bold(),
                    origin,
                    errors.len()
                )?;
                for error in errors {
                    writeln!(f)?;
                    write!(f, "  - {error}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::MalformedPath { path } => {
                write!(
                    f,
                    "path '{}' is malformed; use lowercase tokens separated by single spaces",
                    path.yellow()
                )
            }
            StructureError::DuplicatePath { path } => {
                write!(f, "path '{}' is declared more than once", path.yellow())
            }
            StructureError::EmptyCandidate { path } => {
                write!(f, "path '{}' lists an empty candidate", path.yellow())
            }
            StructureError::MalformedCandidate { path, candidate } => {
                write!(
                    f,
                    "candidate '{}' under '{}' contains whitespace",
                    candidate.yellow(),
                    path.blue()
                )
            }
            StructureError::DuplicateCandidate { path, candidate } => {
                write!(
                    f,
                    "candidate '{}' is listed more than once under '{}'",
                    candidate.yellow(),
                    path.blue()
                )
            }
            StructureError::MissingParent { path, parent } => {
                write!(
                    f,
                    "path '{}' has no registered parent path '{}'",
                    path.yellow(),
                    parent.blue()
                )
            }
            StructureError::UnlistedChild { path, parent, leaf } => {
                write!(
                    f,
                    "path '{}' is unreachable: '{}' does not list '{}'",
                    path.yellow(),
                    parent.blue(),
                    leaf.green()
                )
            }
        }
    }
}

impl std::error::Error for TaxonomyError {}

impl std::error::Error for StructureError {}
