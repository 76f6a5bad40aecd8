use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};
use std::fmt;

/// Highest taxonomy schema version this build understands.
pub const SUPPORTED_VERSION: u32 = 1;

fn default_version() -> u32 {
    SUPPORTED_VERSION
}

fn default_program() -> String {
    "jina".to_string()
}

/// Raw, unvalidated form of a taxonomy document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TaxonomySpec {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_program")]
    pub program: String,

    pub commands: Vec<String>,

    #[serde(default, deserialize_with = "deserialize_path_map")]
    pub completions: Vec<PathSpec>,
}

/// One `completions` entry: a space-joined path key and the candidates offered under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSpec {
    pub path: String,
    pub candidates: Vec<String>,
}

impl PathSpec {
    pub fn new<S: Into<String>>(path: S, candidates: &[&str]) -> Self {
        Self {
            path: path.into(),
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TaxonomySpec {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

// Keeps declaration order and repeated keys, both of which a HashMap would lose.
pub fn deserialize_path_map<'de, D>(deserializer: D) -> Result<Vec<PathSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PathMap;

    impl<'de> Visitor<'de> for PathMap {
        type Value = Vec<PathSpec>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of command path to candidate list")
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut paths = Vec::new();
            while let Some((path, candidates)) = map.next_entry::<String, Option<Vec<String>>>()? {
                paths.push(PathSpec {
                    path,
                    candidates: candidates.unwrap_or_default(),
                });
            }
            Ok(paths)
        }
    }
    deserializer.deserialize_map(PathMap)
}
