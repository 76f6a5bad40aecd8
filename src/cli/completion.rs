use log::debug;
use serde::Serialize;

use crate::cfg::taxonomy::Taxonomy;

/// What the user has typed after the program name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionRequest {
    tokens: Vec<String>,
    last_complete: bool,
}

impl CompletionRequest {
    /// `last_complete` is true when a separator follows the final token.
    pub fn new<I, S>(tokens: I, last_complete: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            last_complete,
        }
    }

    /// Build from a raw command line such as `"hub pus"` or `"hub "`.
    pub fn from_line(line: &str) -> Self {
        let last_complete = line.is_empty() || line.ends_with(char::is_whitespace);
        Self::new(line.split_whitespace(), last_complete)
    }

    /// Build from shell words. An empty final word means the cursor sits after
    /// a space, so every preceding word is complete.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words.into_iter().map(|w| w.as_ref().trim().to_string()).collect();
        let last_complete = words.last().is_none_or(|w| w.is_empty());
        Self::new(words.into_iter().filter(|w| !w.is_empty()), last_complete)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn last_complete(&self) -> bool {
        self.last_complete
    }

    /// Tokens used to find the active path: everything but an in-progress word.
    pub fn search_tokens(&self) -> &[String] {
        match self.tokens.split_last() {
            Some((_, rest)) if !self.last_complete => rest,
            _ => &self.tokens,
        }
    }

    /// The in-progress word, or `""` when the last token is complete.
    pub fn partial_word(&self) -> &str {
        match self.tokens.last() {
            Some(last) if !self.last_complete => last,
            _ => "",
        }
    }
}

/// Which candidate list a request resolved against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum Matched<'t> {
    /// Nothing was typed yet.
    Root,
    /// Longest registered prefix of the search tokens.
    Path(&'t str),
    /// Search tokens were given but no prefix is registered.
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution<'t> {
    pub matched: Matched<'t>,
    pub partial: String,
    pub candidates: Vec<&'t str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Flag,
    Subcommand,
}

impl CandidateKind {
    pub fn of(candidate: &str) -> Self {
        if candidate.starts_with('-') {
            CandidateKind::Flag
        } else {
            CandidateKind::Subcommand
        }
    }
}

/// Suggestions for `request`, in the taxonomy's stored order.
pub fn resolve<'t>(taxonomy: &'t Taxonomy, request: &CompletionRequest) -> Vec<&'t str> {
    resolve_detailed(taxonomy, request).candidates
}

/// Like [`resolve`], also reporting which path matched and the partial word.
pub fn resolve_detailed<'t>(taxonomy: &'t Taxonomy, request: &CompletionRequest) -> Resolution<'t> {
    let search = request.search_tokens();
    let partial = request.partial_word();

    let (matched, active) = if search.is_empty() {
        (Matched::Root, taxonomy.root_candidates())
    } else {
        match longest_match(taxonomy, search) {
            Some((path, candidates)) => (Matched::Path(path), candidates),
            None => (Matched::Fallback, taxonomy.root_candidates()),
        }
    };

    let candidates = filter_candidates(active, partial);
    debug!(
        "resolved {:?} (partial '{}') to {:?}: {} candidate(s)",
        search,
        partial,
        matched,
        candidates.len()
    );

    Resolution {
        matched,
        partial: partial.to_string(),
        candidates,
    }
}

// Tries prefixes longest first; nothing deeper than the taxonomy's max depth can hit.
fn longest_match<'t>(taxonomy: &'t Taxonomy, search: &[String]) -> Option<(&'t str, &'t [String])> {
    let longest = search.len().min(taxonomy.max_depth());
    (1..=longest).rev().find_map(|i| {
        let key = search[..i].join(" ");
        taxonomy.entry(&key)
    })
}

fn filter_candidates<'t>(candidates: &'t [String], partial: &str) -> Vec<&'t str> {
    candidates
        .iter()
        .map(String::as_str)
        .filter(|c| c.starts_with(partial))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::spec::{PathSpec, TaxonomySpec};

    fn builtin() -> &'static Taxonomy {
        Taxonomy::builtin().unwrap()
    }

    fn complete(tokens: &[&str], last_complete: bool) -> Vec<&'static str> {
        resolve(builtin(), &CompletionRequest::new(tokens.iter().copied(), last_complete))
    }

    #[test]
    fn test_no_tokens_returns_root() {
        let candidates = complete(&[], false);
        assert_eq!(candidates.len(), 16);
        assert_eq!(candidates[..3], ["--help", "--version", "--version-full"]);
        assert_eq!(candidates.last(), Some(&"client"));
        assert_eq!(complete(&[], true), candidates);
    }

    #[test]
    fn test_complete_path_returns_its_candidates() {
        assert_eq!(complete(&["hub"], true), vec!["--help", "new", "push", "pull"]);
    }

    #[test]
    fn test_partial_word_filters_active_path() {
        let resolution = resolve_detailed(builtin(), &CompletionRequest::new(["hub", "pus"], false));
        assert_eq!(resolution.matched, Matched::Path("hub"));
        assert_eq!(resolution.partial, "pus");
        assert_eq!(resolution.candidates, vec!["push"]);
    }

    #[test]
    fn test_longest_match_wins() {
        let resolution = resolve_detailed(builtin(), &CompletionRequest::new(["auth", "token", "crea"], false));
        assert_eq!(resolution.matched, Matched::Path("auth token"));
        assert_eq!(resolution.candidates, vec!["create"]);

        assert_eq!(complete(&["auth", "token", "create"], true), vec!["--help", "--expire"]);
        assert_eq!(complete(&["hub", "push", "--"], false).first(), Some(&"--help"));
        assert!(!complete(&["hub", "push"], true).contains(&"new"));
    }

    #[test]
    fn test_unknown_path_falls_back_to_root() {
        let resolution = resolve_detailed(builtin(), &CompletionRequest::new(["bogus", "sub"], false));
        assert_eq!(resolution.matched, Matched::Fallback);
        assert!(resolution.candidates.is_empty());

        assert_eq!(complete(&["bogus", "h"], false), vec!["hub", "help"]);
        assert_eq!(complete(&["bogus"], true), complete(&[], true));
    }

    #[test]
    fn test_trailing_unknown_tokens_keep_deepest_known_path() {
        assert_eq!(
            complete(&["export", "schema", "--yaml-path", "out.yml"], true),
            vec!["--help", "--yaml-path", "--json-path", "--schema-path"]
        );
    }

    #[test]
    fn test_first_token_in_progress_filters_root() {
        assert_eq!(complete(&["d"], false), vec!["dryrun", "deployment"]);
        assert_eq!(complete(&["--vers"], false), vec!["--version", "--version-full"]);
        assert!(complete(&["zzz"], false).is_empty());
    }

    #[test]
    fn test_filter_is_case_sensitive_prefix() {
        assert!(complete(&["hub", "PU"], false).is_empty());
        assert!(complete(&["hub", "ush"], false).is_empty());
        assert_eq!(complete(&["hub", "pu"], false), vec!["push", "pull"]);
    }

    #[test]
    fn test_every_registered_path_returns_its_candidates_in_order() {
        let taxonomy = builtin();
        for (path, candidates) in taxonomy.paths() {
            let request = CompletionRequest::new(path.split(' '), true);
            let expected: Vec<&str> = candidates.iter().map(String::as_str).collect();
            assert_eq!(resolve(taxonomy, &request), expected, "path '{path}'");
        }
    }

    #[test]
    fn test_result_is_prefix_filter_of_full_list() {
        let taxonomy = builtin();
        for (path, candidates) in taxonomy.paths() {
            for partial in ["", "-", "--", "--h", "--port", "p", "x"] {
                let mut tokens: Vec<&str> = path.split(' ').collect();
                tokens.push(partial);
                let got = resolve(taxonomy, &CompletionRequest::new(tokens, false));
                let expected: Vec<&str> = candidates
                    .iter()
                    .map(String::as_str)
                    .filter(|c| c.starts_with(partial))
                    .collect();
                assert_eq!(got, expected, "path '{path}' partial '{partial}'");
            }
        }
    }

    #[test]
    fn test_repeated_resolution_is_identical() {
        let request = CompletionRequest::from_line("executor --port");
        let first = resolve(builtin(), &request);
        for _ in 0..10 {
            assert_eq!(resolve(builtin(), &request), first);
        }
        assert_eq!(first, vec!["--port-in", "--port", "--port-monitoring"]);
    }

    #[test]
    fn test_depth_limits_search() {
        let spec = TaxonomySpec {
            version: 1,
            program: "tool".to_string(),
            commands: vec!["a".to_string()],
            completions: vec![PathSpec::new("a", &["b", "--x"]), PathSpec::new("a b", &["--y"])],
        };
        let taxonomy = Taxonomy::from_spec(spec, "test").unwrap();
        let request = CompletionRequest::new(["a", "b", "c", "d", "e"], true);
        assert_eq!(resolve(&taxonomy, &request), vec!["--y"]);
    }

    #[test]
    fn test_request_from_line() {
        let request = CompletionRequest::from_line("hub pus");
        assert_eq!(request.search_tokens(), ["hub"]);
        assert_eq!(request.partial_word(), "pus");

        let request = CompletionRequest::from_line("hub  push ");
        assert_eq!(request.search_tokens(), ["hub", "push"]);
        assert_eq!(request.partial_word(), "");

        let request = CompletionRequest::from_line("");
        assert!(request.tokens().is_empty());
        assert!(request.last_complete());
    }

    #[test]
    fn test_request_from_words() {
        let request = CompletionRequest::from_words(["hub", ""]);
        assert_eq!(request.tokens(), ["hub"]);
        assert!(request.last_complete());

        let request = CompletionRequest::from_words(["auth", "", "tok"]);
        assert_eq!(request.tokens(), ["auth", "tok"]);
        assert_eq!(request.partial_word(), "tok");

        let request = CompletionRequest::from_words(Vec::<String>::new());
        assert!(request.search_tokens().is_empty());
        assert_eq!(request.partial_word(), "");
    }

    #[test]
    fn test_candidate_kind() {
        assert_eq!(CandidateKind::of("--help"), CandidateKind::Flag);
        assert_eq!(CandidateKind::of("push"), CandidateKind::Subcommand);
    }

    #[test]
    fn test_resolution_serializes() {
        let resolution = resolve_detailed(builtin(), &CompletionRequest::new(["hub", "pu"], false));
        let json = serde_json::to_value(&resolution).unwrap();
        assert_eq!(json["matched"]["kind"], "path");
        assert_eq!(json["matched"]["path"], "hub");
        assert_eq!(json["partial"], "pu");
        assert_eq!(json["candidates"], serde_json::json!(["push", "pull"]));
    }
}
