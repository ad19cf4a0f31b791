//! Pages, navigation metadata, and the remembered current page
//!
//! The current page lives in a [`PageSlot`]: a single read/write cell with a
//! default of [`Page::Home`]. The filter engine never touches it; the page
//! controller reads it on startup and writes it on navigation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{HubError, Result};

/// Key under which the current page is stored
pub const CURRENT_PAGE_KEY: &str = "current-page";

/// The five pages of the hub
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Languages,
    Tutorials,
    Tools,
    Community,
}

impl Page {
    /// Menu order
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Languages,
        Page::Tutorials,
        Page::Tools,
        Page::Community,
    ];

    /// Identifier used in storage and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Languages => "languages",
            Page::Tutorials => "tutorials",
            Page::Tools => "tools",
            Page::Community => "community",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Languages => "Languages",
            Page::Tutorials => "Tutorials",
            Page::Tools => "Tools",
            Page::Community => "Community",
        }
    }

    /// Navigation icon identifier
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Languages => "code",
            Page::Tutorials => "book",
            Page::Tools => "wrench",
            Page::Community => "users",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown page '{s}'"))
    }
}

/// A read/write cell holding the last viewed page
pub trait PageSlot {
    /// Current value, or [`Page::Home`] when nothing usable is stored
    fn read(&self) -> Page;

    /// Replace the stored value
    fn write(&mut self, page: Page) -> Result<()>;
}

/// Slot kept in process memory only
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    page: Page,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageSlot for MemorySlot {
    fn read(&self) -> Page {
        self.page
    }

    fn write(&mut self, page: Page) -> Result<()> {
        self.page = page;
        Ok(())
    }
}

/// On-disk key-value document backing [`FileSlot`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateDocument {
    /// When the document was last written
    #[serde(default)]
    updated: Option<String>,

    #[serde(default)]
    values: serde_json::Map<String, serde_json::Value>,
}

/// Slot persisted as a small JSON key-value file
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_document(&self) -> Result<StateDocument> {
        if !self.path.exists() {
            return Ok(StateDocument::default());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| HubError::io(&self.path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl PageSlot for FileSlot {
    fn read(&self) -> Page {
        let document = match self.load_document() {
            Ok(document) => document,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    "Ignoring unreadable state file: {}", e
                );
                return Page::default();
            }
        };

        match document.values.get(CURRENT_PAGE_KEY) {
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                warn!("Ignoring invalid stored page {}: {}", value, e);
                Page::default()
            }),
            None => {
                debug!("No stored page in {}", self.path.display());
                Page::default()
            }
        }
    }

    fn write(&mut self, page: Page) -> Result<()> {
        // A corrupt document is replaced rather than blocking navigation
        let mut document = self.load_document().unwrap_or_default();
        document
            .values
            .insert(CURRENT_PAGE_KEY.to_string(), serde_json::to_value(page)?);
        document.updated = Some(chrono::Utc::now().to_rfc3339());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| HubError::io(parent, e))?;
        }

        let content = serde_json::to_string_pretty(&document)?;
        std::fs::write(&self.path, content).map_err(|e| HubError::io(&self.path, e))?;

        debug!(page = %page, path = %self.path.display(), "Stored current page");
        Ok(())
    }
}
