//! Entry records for the four catalog domains

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A programming language card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    /// Language name, unique within the catalog
    pub name: String,

    /// One-paragraph description
    pub description: String,

    /// Category label (e.g. "Web Development")
    pub category: String,

    /// Popularity label (e.g. "Very High", "Growing")
    pub popularity: String,

    /// Short multi-line code sample
    pub syntax_sample: String,
}

/// Tutorial difficulty. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All levels in ascending order
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("Unknown difficulty '{s}'. Expected one of: beginner, intermediate, advanced")
            })
    }
}

/// A tutorial card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialEntry {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,

    /// Free-form duration (e.g. "2 hours")
    pub duration: String,

    pub category: String,
    pub link: String,
}

/// A developer tool card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolEntry {
    pub name: String,
    pub description: String,

    /// Category label; the distinct set drives the tools page filter
    pub category: String,

    pub link: String,
}

/// A developer community card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityEntry {
    pub name: String,
    pub description: String,

    /// Free-form member count (e.g. "50M+")
    pub member_count: String,

    pub link: String,
}

impl TutorialEntry {
    pub fn link(&self) -> &str {
        &self.link
    }
}

impl ToolEntry {
    pub fn link(&self) -> &str {
        &self.link
    }
}

impl CommunityEntry {
    pub fn link(&self) -> &str {
        &self.link
    }
}

impl LanguageEntry {
    /// First line of the description, trimmed
    pub fn short_description(&self) -> &str {
        self.description
            .lines()
            .next()
            .unwrap_or(&self.description)
            .trim()
    }
}
