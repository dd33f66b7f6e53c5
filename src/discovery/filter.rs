//! Name predicates for candidate discovery.
//!
//! All matching is case-insensitive. Directory exclusions prune entire
//! subtrees; file exclusions apply to the name alone.

/// Suffixes that disqualify an otherwise matching file name.
const DENY_SUFFIXES: [&str; 4] = [".d.ts", ".d.mts", "_test.ts", "_test.mts"];

/// Whether a directory may be recursed into.
///
/// Hidden (`.`-prefixed) and underscore-prefixed directories are pruned,
/// as is `node_modules`. Nothing beneath a pruned directory is visited.
pub fn is_searchable_dir(name: &str) -> bool {
    let lower = name.to_lowercase();
    !(lower.starts_with('.') || lower.starts_with('_') || lower == "node_modules")
}

/// Whether a file name qualifies as a candidate module.
///
/// Accepts `.ts` and `.mts` files that are not hidden, not
/// underscore-prefixed, and not declaration or test files. The deny
/// suffixes are checked independently of the accept pattern.
pub fn is_candidate_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    if lower.starts_with('.') || lower.starts_with('_') {
        return false;
    }
    if !(lower.ends_with(".ts") || lower.ends_with(".mts")) {
        return false;
    }
    !DENY_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_module_names_qualify() {
        assert!(is_candidate_file("a.ts"));
        assert!(is_candidate_file("a.mts"));
        assert!(is_candidate_file("deployment.ts"));
    }

    #[test]
    fn test_case_insensitive_extensions() {
        assert!(is_candidate_file("a.TS"));
        assert!(is_candidate_file("a.Mts"));
        assert!(!is_candidate_file("a.D.TS"));
        assert!(!is_candidate_file("A_TEST.TS"));
    }

    #[test]
    fn test_hidden_and_underscore_files_excluded() {
        assert!(!is_candidate_file(".a.ts"));
        assert!(!is_candidate_file("_a.ts"));
        assert!(!is_candidate_file("_helpers.mts"));
    }

    #[test]
    fn test_declaration_files_excluded() {
        assert!(!is_candidate_file("a.d.ts"));
        assert!(!is_candidate_file("a.d.mts"));
    }

    #[test]
    fn test_test_files_excluded() {
        assert!(!is_candidate_file("a_test.ts"));
        assert!(!is_candidate_file("a_test.mts"));
    }

    #[test]
    fn test_other_extensions_excluded() {
        assert!(!is_candidate_file("a.js"));
        assert!(!is_candidate_file("a.tsx"));
        assert!(!is_candidate_file("a.ts.bak"));
        assert!(!is_candidate_file("README.md"));
    }

    #[test]
    fn test_searchable_dirs() {
        assert!(is_searchable_dir("src"));
        assert!(is_searchable_dir("manifests"));
        assert!(is_searchable_dir("node-modules"));
    }

    #[test]
    fn test_pruned_dirs() {
        assert!(!is_searchable_dir(".git"));
        assert!(!is_searchable_dir("_private"));
        assert!(!is_searchable_dir("node_modules"));
        assert!(!is_searchable_dir("NODE_MODULES"));
        assert!(!is_searchable_dir("Node_Modules"));
    }
}
