//! The validated, read-only command taxonomy.
//!
//! A taxonomy maps space-joined command paths (`"auth token create"`) to the
//! candidates offered once that path has been typed, plus one root list of
//! top-level candidates. It is built once, checked for authoring mistakes, and
//! never mutated afterwards.

use log::{debug, info};
use once_cell::sync::OnceCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::cfg::error::{ROOT_LABEL, StructureError, TaxonomyError};
use crate::cfg::spec::{SUPPORTED_VERSION, TaxonomySpec};

/// Embedded copy of the taxonomy shipped with the binary.
pub const BUILTIN_TAXONOMY: &str = include_str!("../../data/taxonomy.yml");

const BUILTIN_ORIGIN: &str = "embedded taxonomy";

static BUILTIN: OnceCell<Taxonomy> = OnceCell::new();

// ============================================================================
// CommandPath
// ============================================================================

/// A normalised sequence of lowercase command tokens. The empty path is the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CommandPath {
    tokens: Vec<String>,
}

impl CommandPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a path key. Returns `None` unless the key is lowercase tokens
    /// joined by single spaces, with no surrounding whitespace.
    pub fn parse(key: &str) -> Option<Self> {
        if key.is_empty() {
            return None;
        }
        let tokens: Vec<&str> = key.split(' ').collect();
        let well_formed = tokens
            .iter()
            .all(|t| !t.is_empty() && !t.chars().any(|c| c.is_whitespace() || c.is_uppercase()));
        if !well_formed {
            return None;
        }
        Some(Self {
            tokens: tokens.into_iter().map(str::to_string).collect(),
        })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn depth(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn leaf(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    pub fn parent(&self) -> Option<CommandPath> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            tokens: self.tokens[..self.tokens.len() - 1].to_vec(),
        })
    }

    /// Space-joined key used in the lookup table.
    pub fn key(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for CommandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "{ROOT_LABEL}")
        } else {
            write!(f, "{}", self.key())
        }
    }
}

// ============================================================================
// Taxonomy
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Taxonomy {
    program: String,
    version: u32,
    root: Vec<String>,
    paths: HashMap<String, Vec<String>>,
    order: Vec<String>,
    max_depth: usize,
}

impl Taxonomy {
    /// The embedded taxonomy, loaded and validated on first use.
    pub fn builtin() -> Result<&'static Taxonomy, TaxonomyError> {
        BUILTIN.get_or_try_init(|| Self::from_yaml(BUILTIN_TAXONOMY, BUILTIN_ORIGIN))
    }

    pub fn from_file(path: &Path) -> Result<Self, TaxonomyError> {
        let text = fs::read_to_string(path).map_err(|e| TaxonomyError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_yaml(&text, &format!("'{}'", path.display()))
    }

    pub fn from_yaml(text: &str, origin: &str) -> Result<Self, TaxonomyError> {
        let spec = TaxonomySpec::from_yaml(text).map_err(|e| TaxonomyError::Syntax {
            origin: origin.to_string(),
            error: e.to_string(),
        })?;
        Self::from_spec(spec, origin)
    }

    /// Validate a raw spec. Every structural problem is collected before failing.
    pub fn from_spec(spec: TaxonomySpec, origin: &str) -> Result<Self, TaxonomyError> {
        if spec.version > SUPPORTED_VERSION {
            return Err(TaxonomyError::UnsupportedVersion {
                origin: origin.to_string(),
                found: spec.version,
                supported: SUPPORTED_VERSION,
            });
        }

        let mut errors = Vec::new();
        check_candidates(ROOT_LABEL, &spec.commands, &mut errors);

        let mut parsed: Vec<CommandPath> = Vec::with_capacity(spec.completions.len());
        let mut paths: HashMap<String, Vec<String>> = HashMap::with_capacity(spec.completions.len());
        let mut order = Vec::with_capacity(spec.completions.len());

        for entry in spec.completions {
            check_candidates(&entry.path, &entry.candidates, &mut errors);

            let Some(path) = CommandPath::parse(&entry.path) else {
                errors.push(StructureError::MalformedPath { path: entry.path });
                continue;
            };
            if paths.contains_key(&entry.path) {
                errors.push(StructureError::DuplicatePath { path: entry.path });
                continue;
            }
            order.push(entry.path.clone());
            paths.insert(entry.path, entry.candidates);
            parsed.push(path);
        }

        // Parents may be declared after their children, so this runs once all keys are known.
        for path in &parsed {
            let (Some(parent), Some(leaf)) = (path.parent(), path.leaf()) else {
                continue;
            };
            if parent.is_root() {
                continue;
            }
            match paths.get(&parent.key()) {
                None => errors.push(StructureError::MissingParent {
                    path: path.key(),
                    parent: parent.key(),
                }),
                Some(siblings) if !siblings.iter().any(|c| c == leaf) => {
                    errors.push(StructureError::UnlistedChild {
                        path: path.key(),
                        parent: parent.key(),
                        leaf: leaf.to_string(),
                    })
                }
                Some(_) => {}
            }
        }

        if !errors.is_empty() {
            return Err(TaxonomyError::Inconsistent {
                origin: origin.to_string(),
                errors,
            });
        }

        let max_depth = parsed.iter().map(CommandPath::depth).max().unwrap_or(0);
        info!(
            "Loaded {} with {} root candidates and {} paths (max depth {})",
            origin,
            spec.commands.len(),
            order.len(),
            max_depth
        );

        Ok(Self {
            program: spec.program,
            version: spec.version,
            root: spec.commands,
            paths,
            order,
            max_depth,
        })
    }

    pub fn lookup(&self, path: &str) -> Option<&[String]> {
        self.entry(path).map(|(_, candidates)| candidates)
    }

    /// Like [`Taxonomy::lookup`], also returning the stored key.
    pub fn entry(&self, path: &str) -> Option<(&str, &[String])> {
        let found = self
            .paths
            .get_key_value(path)
            .map(|(key, candidates)| (key.as_str(), candidates.as_slice()));
        debug!("lookup '{}': {}", path, if found.is_some() { "hit" } else { "miss" });
        found
    }

    pub fn root_candidates(&self) -> &[String] {
        &self.root
    }

    /// Registered paths with their candidates, in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(|key| (key.as_str(), self.paths[key].as_slice()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of tokens in the deepest registered path.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

fn check_candidates(path: &str, candidates: &[String], errors: &mut Vec<StructureError>) {
    let mut seen = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.is_empty() {
            errors.push(StructureError::EmptyCandidate { path: path.to_string() });
        } else if candidate.chars().any(char::is_whitespace) {
            errors.push(StructureError::MalformedCandidate {
                path: path.to_string(),
                candidate: candidate.clone(),
            });
        } else if !seen.insert(candidate.as_str()) {
            errors.push(StructureError::DuplicateCandidate {
                path: path.to_string(),
                candidate: candidate.clone(),
            });
        }
    }
}
