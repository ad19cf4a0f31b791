//! Coding Hub Catalog - the read-only resource collections
//!
//! The catalog holds four ordered collections, one per content domain:
//!
//! - programming languages, with a syntax sample
//! - tutorials, tagged with a closed [`Difficulty`] level
//! - developer tools, grouped by free-form category
//! - developer communities
//!
//! # Sources
//!
//! ```text
//! Catalog::builtin()        ← compiled-in reference data
//! Catalog::load(path)       ← user catalog.yaml (same schema)
//!            │
//!            ▼
//!     filter engine         ← visible subsequence per page
//! ```
//!
//! Catalogs are never mutated after construction. Filtering borrows from them.

mod builtin;
mod entry;
mod store;

pub use entry::{CommunityEntry, Difficulty, LanguageEntry, ToolEntry, TutorialEntry};
pub use store::{Catalog, CatalogSummary, CATALOG_API_VERSION, CATALOG_KIND};
