//! Filter engine
//!
//! Derives the visible subsequence of a catalog collection from a single
//! criterion. Every function here is total and pure: the input slice is only
//! borrowed, the output keeps the input's relative order, and an empty result
//! is an ordinary outcome rather than an error.

use std::collections::HashSet;
use tracing::trace;

use crate::catalog::{Difficulty, LanguageEntry, ToolEntry, TutorialEntry};

/// A single-dimension predicate over catalog entries of type `T`
pub trait Criterion<T> {
    /// Whether `entry` stays visible
    fn matches(&self, entry: &T) -> bool;
}

/// Stable linear scan keeping the entries `criterion` accepts
pub fn apply<'a, T, C>(entries: &'a [T], criterion: &C) -> Vec<&'a T>
where
    C: Criterion<T> + ?Sized,
{
    entries.iter().filter(|e| criterion.matches(e)).collect()
}

/// Case-insensitive substring search over name, description and category
#[derive(Debug, Clone)]
pub struct SearchTerm {
    folded: String,
}

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        Self {
            folded: fold_case(term),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    fn found_in(&self, field: &str) -> bool {
        fold_case(field).contains(&self.folded)
    }
}

/// Lowercase one char at a time so a fold never depends on its neighbours
/// (`str::to_lowercase` turns a word-final Σ into ς)
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

impl Criterion<LanguageEntry> for SearchTerm {
    fn matches(&self, entry: &LanguageEntry) -> bool {
        self.is_empty()
            || self.found_in(&entry.name)
            || self.found_in(&entry.description)
            || self.found_in(&entry.category)
    }
}

/// `None` keeps every tutorial
impl Criterion<TutorialEntry> for Option<Difficulty> {
    fn matches(&self, entry: &TutorialEntry) -> bool {
        match self {
            Some(difficulty) => entry.difficulty == *difficulty,
            None => true,
        }
    }
}

/// Exact category match; `None` keeps every tool
#[derive(Debug, Clone, Copy)]
pub struct CategoryMatch<'c>(pub Option<&'c str>);

impl Criterion<ToolEntry> for CategoryMatch<'_> {
    fn matches(&self, entry: &ToolEntry) -> bool {
        match self.0 {
            Some(category) => entry.category == category,
            None => true,
        }
    }
}

/// Languages whose name, description or category contains `search_term`,
/// ignoring case. An empty term keeps everything.
pub fn filter_languages<'a>(
    catalog: &'a [LanguageEntry],
    search_term: &str,
) -> Vec<&'a LanguageEntry> {
    let visible = apply(catalog, &SearchTerm::new(search_term));
    trace!(
        search_term,
        total = catalog.len(),
        visible = visible.len(),
        "Filtered languages"
    );
    visible
}

/// Tutorials at exactly `selected_difficulty`, or all of them for `None`
pub fn filter_tutorials(
    catalog: &[TutorialEntry],
    selected_difficulty: Option<Difficulty>,
) -> Vec<&TutorialEntry> {
    let visible = apply(catalog, &selected_difficulty);
    trace!(
        difficulty = ?selected_difficulty,
        total = catalog.len(),
        visible = visible.len(),
        "Filtered tutorials"
    );
    visible
}

/// Tools in exactly `selected_category`, or all of them for `None`
pub fn filter_tools<'a>(
    catalog: &'a [ToolEntry],
    selected_category: Option<&str>,
) -> Vec<&'a ToolEntry> {
    let visible = apply(catalog, &CategoryMatch(selected_category));
    trace!(
        category = ?selected_category,
        total = catalog.len(),
        visible = visible.len(),
        "Filtered tools"
    );
    visible
}

/// Distinct tool categories, in order of first appearance
///
/// Contains every category present in `catalog` exactly once and nothing else,
/// so each option it produces selects at least one tool.
pub fn derive_categories(catalog: &[ToolEntry]) -> Vec<&str> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .map(|tool| tool.category.as_str())
        .filter(|category| seen.insert(*category))
        .collect()
}

#[cfg(test)]
mod filter_tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn names<'a>(entries: &[&'a LanguageEntry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn tool(name: &str, category: &str) -> ToolEntry {
        ToolEntry {
            name: name.to_string(),
            description: format!("{name} tool"),
            category: category.to_string(),
            link: format!("https://example.com/{name}"),
        }
    }

    #[test]
    fn test_search_matches_script_languages_in_order() {
        let languages = Catalog::builtin().languages();

        for term in ["script", "SCRIPT", "Script", "sCrIpT"] {
            let visible = filter_languages(languages, term);
            assert_eq!(names(&visible), vec!["JavaScript", "TypeScript"], "term {term}");
        }
    }

    #[test]
    fn test_search_checks_description_and_category() {
        let languages = Catalog::builtin().languages();

        // Only Go's description mentions Google
        assert_eq!(names(&filter_languages(languages, "google")), vec!["Go"]);

        // Category-only match
        assert_eq!(
            names(&filter_languages(languages, "enterprise development")),
            vec!["Java"]
        );
    }

    #[test]
    fn test_empty_search_is_identity() {
        let languages = Catalog::builtin().languages();
        let visible = filter_languages(languages, "");

        assert_eq!(visible.len(), languages.len());
        for (kept, original) in visible.iter().zip(languages) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let visible = filter_languages(Catalog::builtin().languages(), "zzz-no-match");
        assert!(visible.is_empty());
    }

    #[test]
    fn test_search_is_not_tokenized() {
        // "web dev" is a substring of "Web Development"; "dev web" is not
        let languages = Catalog::builtin().languages();
        assert_eq!(
            names(&filter_languages(languages, "web dev")),
            vec!["JavaScript", "TypeScript"]
        );
        assert!(filter_languages(languages, "dev web").is_empty());
    }

    #[test]
    fn test_tutorials_by_difficulty() {
        let tutorials = Catalog::builtin().tutorials();

        assert_eq!(filter_tutorials(tutorials, None).len(), 6);
        assert_eq!(filter_tutorials(tutorials, Some(Difficulty::Beginner)).len(), 3);
        assert_eq!(filter_tutorials(tutorials, Some(Difficulty::Intermediate)).len(), 2);

        let advanced = filter_tutorials(tutorials, Some(Difficulty::Advanced));
        assert_eq!(advanced.len(), 1);
        assert_eq!(advanced[0].title, "Advanced TypeScript Patterns");
    }

    #[test]
    fn test_tutorials_keep_catalog_order() {
        let beginner: Vec<&str> =
            filter_tutorials(Catalog::builtin().tutorials(), Some(Difficulty::Beginner))
                .into_iter()
                .map(|t| t.title.as_str())
                .collect();
        assert_eq!(
            beginner,
            vec![
                "JavaScript Fundamentals",
                "Python Data Science",
                "CSS Grid and Flexbox"
            ]
        );
    }

    #[test]
    fn test_tools_by_category() {
        let tools = Catalog::builtin().tools();

        assert_eq!(filter_tools(tools, None).len(), tools.len());

        let devops = filter_tools(tools, Some("DevOps"));
        assert_eq!(devops.len(), 1);
        assert_eq!(devops[0].name, "Docker");

        // Exact match only
        assert!(filter_tools(tools, Some("devops")).is_empty());
        assert!(filter_tools(tools, Some("Dev")).is_empty());
    }

    #[test]
    fn test_derive_builtin_categories() {
        let categories = derive_categories(Catalog::builtin().tools());
        assert_eq!(
            categories,
            vec![
                "Editors",
                "Version Control",
                "Design",
                "API Testing",
                "DevOps",
                "Package Managers"
            ]
        );
    }

    #[test]
    fn test_derive_categories_deduplicates() {
        let tools = vec![
            tool("vim", "Editors"),
            tool("git", "Version Control"),
            tool("emacs", "Editors"),
            tool("hg", "Version Control"),
        ];

        assert_eq!(derive_categories(&tools), vec!["Editors", "Version Control"]);

        // Every derived option selects at least one tool
        for category in derive_categories(&tools) {
            assert_eq!(filter_tools(&tools, Some(category)).len(), 2);
        }
    }

    #[test]
    fn test_empty_catalogs() {
        assert!(filter_languages(&[], "rust").is_empty());
        assert!(filter_tutorials(&[], Some(Difficulty::Beginner)).is_empty());
        assert!(filter_tools(&[], None).is_empty());
        assert!(derive_categories(&[]).is_empty());
    }

    #[test]
    fn test_case_folding_beyond_ascii() {
        let languages = vec![LanguageEntry {
            name: "Élan".to_string(),
            description: "Straße language".to_string(),
            category: "Niche".to_string(),
            popularity: "Low".to_string(),
            syntax_sample: String::new(),
        }];

        assert_eq!(filter_languages(&languages, "éLAN").len(), 1);
        assert_eq!(filter_languages(&languages, "STRASSE").len(), 0);
        assert_eq!(filter_languages(&languages, "straße").len(), 1);
    }

    #[test]
    fn test_sigma_matches_regardless_of_position() {
        let language = |name: &str| LanguageEntry {
            name: name.to_string(),
            description: String::new(),
            category: String::new(),
            popularity: "Low".to_string(),
            syntax_sample: String::new(),
        };

        assert_eq!(filter_languages(&[language("ΟΣΟ")], "ΟΣ").len(), 1);
        assert_eq!(filter_languages(&[language("ΟΣ")], "Σ").len(), 1);
        assert_eq!(filter_languages(&[language("ΟΣΟΣ")], "οσοσ").len(), 1);
    }
}
