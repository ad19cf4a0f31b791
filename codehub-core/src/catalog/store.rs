//! Catalog document parsing and validation
//!
//! A catalog file is a YAML document listing the four domains in display
//! order. The compiled-in catalog uses the same shape.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use super::{CommunityEntry, LanguageEntry, ToolEntry, TutorialEntry};
use crate::error::{HubError, Result};

/// API version written into serialized catalogs
pub const CATALOG_API_VERSION: &str = "codehub.dev/v1";

/// Expected `kind` of a catalog document
pub const CATALOG_KIND: &str = "Catalog";

/// The four ordered, read-only entry collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// API version
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Kind (Catalog)
    #[serde(default = "default_kind")]
    pub kind: String,

    #[serde(default)]
    languages: Vec<LanguageEntry>,

    #[serde(default)]
    tutorials: Vec<TutorialEntry>,

    #[serde(default)]
    tools: Vec<ToolEntry>,

    #[serde(default)]
    communities: Vec<CommunityEntry>,
}

/// Per-domain entry counts, shown on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub languages: usize,
    pub tutorials: usize,
    pub tools: usize,
    pub communities: usize,
}

fn default_api_version() -> String {
    CATALOG_API_VERSION.to_string()
}

fn default_kind() -> String {
    CATALOG_KIND.to_string()
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }
}

impl Catalog {
    /// Assemble a catalog from its four collections
    pub fn new(
        languages: Vec<LanguageEntry>,
        tutorials: Vec<TutorialEntry>,
        tools: Vec<ToolEntry>,
        communities: Vec<CommunityEntry>,
    ) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            languages,
            tutorials,
            tools,
            communities,
        }
    }

    /// Parse and validate a catalog from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml_ng::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| HubError::io(path, e))?;
        let catalog = Self::from_yaml(&content)?;

        debug!(
            path = %path.display(),
            entries = catalog.len(),
            "Loaded catalog file"
        );
        Ok(catalog)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check the structural rules a hand-written catalog file could break
    ///
    /// Language names must be unique, and no entry may have an empty name or
    /// title.
    pub fn validate(&self) -> Result<()> {
        if self.kind != CATALOG_KIND {
            return Err(HubError::InvalidKind(self.kind.clone()));
        }

        let mut seen = HashSet::new();
        for (index, language) in self.languages.iter().enumerate() {
            require_non_empty("language", "name", index, &language.name)?;
            if !seen.insert(language.name.as_str()) {
                return Err(HubError::DuplicateEntry {
                    domain: "language",
                    name: language.name.clone(),
                });
            }
        }

        for (index, tutorial) in self.tutorials.iter().enumerate() {
            require_non_empty("tutorial", "title", index, &tutorial.title)?;
        }
        for (index, tool) in self.tools.iter().enumerate() {
            require_non_empty("tool", "name", index, &tool.name)?;
        }
        for (index, community) in self.communities.iter().enumerate() {
            require_non_empty("community", "name", index, &community.name)?;
        }

        Ok(())
    }

    pub fn languages(&self) -> &[LanguageEntry] {
        &self.languages
    }

    pub fn tutorials(&self) -> &[TutorialEntry] {
        &self.tutorials
    }

    pub fn tools(&self) -> &[ToolEntry] {
        &self.tools
    }

    pub fn communities(&self) -> &[CommunityEntry] {
        &self.communities
    }

    /// Total number of entries across all domains
    pub fn len(&self) -> usize {
        self.languages.len() + self.tutorials.len() + self.tools.len() + self.communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            languages: self.languages.len(),
            tutorials: self.tutorials.len(),
            tools: self.tools.len(),
            communities: self.communities.len(),
        }
    }
}

fn require_non_empty(
    domain: &'static str,
    field: &'static str,
    index: usize,
    value: &str,
) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HubError::EmptyField {
            domain,
            field,
            index,
        });
    }
    Ok(())
}

#[cfg(test)]
mod store_tests {
    use super::*;
    use crate::catalog::Difficulty;

    fn sample_catalog_yaml() -> &'static str {
        r#"
apiVersion: codehub.dev/v1
kind: Catalog
languages:
  - name: Zig
    description: Simple systems language with comptime.
    category: Systems Programming
    popularity: Growing
    syntaxSample: |
      pub fn main() void {}
tutorials:
  - title: Zig Basics
    description: First steps with Zig.
    difficulty: Beginner
    duration: 1 hour
    category: Systems
    link: /tutorials/zig-basics.html
tools:
  - name: zls
    description: Zig language server.
    category: Editors
    link: https://github.com/zigtools/zls
"#
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_yaml(sample_catalog_yaml()).unwrap();

        assert_eq!(catalog.languages().len(), 1);
        assert_eq!(catalog.languages()[0].syntax_sample, "pub fn main() void {}\n");
        assert_eq!(catalog.tutorials()[0].difficulty, Difficulty::Beginner);
        assert_eq!(catalog.tools()[0].category, "Editors");
        // Missing domains default to empty
        assert!(catalog.communities().is_empty());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_header_defaults() {
        let catalog = Catalog::from_yaml("languages: []\n").unwrap();
        assert_eq!(catalog.api_version, CATALOG_API_VERSION);
        assert_eq!(catalog.kind, CATALOG_KIND);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rejects_wrong_kind() {
        let err = Catalog::from_yaml("kind: Playlist\n").unwrap_err();
        assert!(matches!(err, HubError::InvalidKind(kind) if kind == "Playlist"));
    }

    #[test]
    fn test_rejects_duplicate_language_names() {
        let yaml = r#"
languages:
  - { name: Go, description: a, category: b, popularity: High, syntaxSample: x }
  - { name: Go, description: c, category: d, popularity: High, syntaxSample: y }
"#;
        let err = Catalog::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            HubError::DuplicateEntry { domain: "language", ref name } if name == "Go"
        ));
    }

    #[test]
    fn test_rejects_empty_titles() {
        let yaml = r#"
tutorials:
  - { title: "  ", description: a, difficulty: Advanced, duration: 1h, category: c, link: l }
"#;
        let err = Catalog::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            HubError::EmptyField {
                domain: "tutorial",
                field: "title",
                index: 0
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        let yaml = r#"
tutorials:
  - { title: T, description: a, difficulty: Expert, duration: 1h, category: c, link: l }
"#;
        assert!(matches!(Catalog::from_yaml(yaml), Err(HubError::Yaml(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, sample_catalog_yaml()).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.summary().tools, 1);

        let missing = Catalog::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, HubError::Io { .. }));
    }
}
