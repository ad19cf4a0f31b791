//! Page rendering for the terminal front end
//!
//! The controller owns the page slot and borrows the catalog. Each page is
//! rendered through the core filter engine from a fresh selection, so filter
//! input never carries over between pages.

use anyhow::{Context, Result};
use std::io::Write;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::debug;

use codehub_core::catalog::Catalog;
use codehub_core::filter::{derive_categories, filter_tools};
use codehub_core::page::{Page, PageSlot};
use codehub_core::selection::{LanguageSelection, ToolSelection, TutorialSelection};

/// Shown in place of the table when a filter leaves nothing
pub const EMPTY_STATE_MESSAGE: &str = "No matching entries found";

const DESCRIPTION_WIDTH: usize = 50;

/// Table row for the languages page
#[derive(Tabled)]
struct LanguageRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Popularity")]
    popularity: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Languages page row including the code sample
#[derive(Tabled)]
struct LanguageSyntaxRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Example Syntax")]
    syntax: String,
}

#[derive(Tabled)]
struct TutorialRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Difficulty")]
    difficulty: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Link")]
    link: String,
}

#[derive(Tabled)]
struct ToolRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Link")]
    link: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Tools")]
    tools: usize,
}

#[derive(Tabled)]
struct CommunityRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Members")]
    members: String,
    #[tabled(rename = "Link")]
    link: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Renders pages and remembers which one was shown last
pub struct PageController<'c, S> {
    catalog: &'c Catalog,
    slot: S,
}

impl<'c, S: PageSlot> PageController<'c, S> {
    pub fn new(catalog: &'c Catalog, slot: S) -> Self {
        Self { catalog, slot }
    }

    /// The last viewed page
    pub fn current_page(&self) -> Page {
        self.slot.read()
    }

    /// Switch to `page` and remember it
    pub fn navigate(&mut self, page: Page) -> Result<()> {
        self.slot
            .write(page)
            .with_context(|| format!("Failed to remember current page '{page}'"))?;
        debug!(%page, "Navigated");
        Ok(())
    }

    /// Render `page` with its default selection
    pub fn render(&self, page: Page, json: bool, out: &mut dyn Write) -> Result<()> {
        match page {
            Page::Home => self.render_home(out),
            Page::Languages => {
                self.render_languages(&LanguageSelection::new(), json, false, out)
            }
            Page::Tutorials => self.render_tutorials(&TutorialSelection::new(), json, out),
            Page::Tools => self.render_tools(&ToolSelection::new(), json, out),
            Page::Community => self.render_community(json, out),
        }
    }

    pub fn render_home(&self, out: &mut dyn Write) -> Result<()> {
        let summary = self.catalog.summary();

        writeln!(out, "Welcome to Coding Resource Hub")?;
        writeln!(
            out,
            "Programming languages, tutorials, tools, and community connections in one place."
        )?;
        writeln!(out)?;
        writeln!(out, "  Programming Languages  {:>3}", summary.languages)?;
        writeln!(out, "  Tutorials              {:>3}", summary.tutorials)?;
        writeln!(out, "  Developer Tools        {:>3}", summary.tools)?;
        writeln!(out, "  Communities            {:>3}", summary.communities)?;
        writeln!(out)?;
        writeln!(out, "Pages:")?;
        for page in Page::ALL {
            writeln!(out, "  {:<10} codehub {}", page.label(), page.as_str())?;
        }
        Ok(())
    }

    pub fn render_languages(
        &self,
        selection: &LanguageSelection,
        json: bool,
        show_syntax: bool,
        out: &mut dyn Write,
    ) -> Result<()> {
        let visible = selection.visible(self.catalog.languages());

        if json {
            return write_json(out, &visible);
        }

        writeln!(out, "Programming Languages")?;
        if !selection.search_term().is_empty() {
            writeln!(
                out,
                "Search: \"{}\" ({} of {})",
                selection.search_term(),
                visible.len(),
                self.catalog.languages().len()
            )?;
        }
        writeln!(out)?;

        if visible.is_empty() {
            writeln!(out, "{EMPTY_STATE_MESSAGE}")?;
            return Ok(());
        }

        let table = if show_syntax {
            let rows: Vec<LanguageSyntaxRow> = visible
                .iter()
                .map(|language| LanguageSyntaxRow {
                    name: language.name.clone(),
                    syntax: language.syntax_sample.clone(),
                })
                .collect();
            styled(Table::new(&rows))
        } else {
            let rows: Vec<LanguageRow> = visible
                .iter()
                .map(|language| LanguageRow {
                    name: language.name.clone(),
                    category: language.category.clone(),
                    popularity: language.popularity.clone(),
                    description: truncate(language.short_description(), DESCRIPTION_WIDTH),
                })
                .collect();
            styled(Table::new(&rows))
        };

        writeln!(out, "{table}")?;
        Ok(())
    }

    pub fn render_tutorials(
        &self,
        selection: &TutorialSelection,
        json: bool,
        out: &mut dyn Write,
    ) -> Result<()> {
        let visible = selection.visible(self.catalog.tutorials());

        if json {
            return write_json(out, &visible);
        }

        writeln!(out, "Tutorials")?;
        match selection.selected_difficulty() {
            Some(difficulty) => writeln!(out, "Level: {difficulty}")?,
            None => writeln!(out, "Level: All Levels")?,
        }
        writeln!(out)?;

        if visible.is_empty() {
            writeln!(out, "{EMPTY_STATE_MESSAGE}")?;
            return Ok(());
        }

        let rows: Vec<TutorialRow> = visible
            .iter()
            .map(|tutorial| TutorialRow {
                title: tutorial.title.clone(),
                difficulty: tutorial.difficulty.to_string(),
                duration: tutorial.duration.clone(),
                category: tutorial.category.clone(),
                link: tutorial.link().to_string(),
            })
            .collect();

        writeln!(out, "{}", styled(Table::new(&rows)))?;
        Ok(())
    }

    pub fn render_tools(
        &self,
        selection: &ToolSelection,
        json: bool,
        out: &mut dyn Write,
    ) -> Result<()> {
        let visible = selection.visible(self.catalog.tools());

        if json {
            return write_json(out, &visible);
        }

        writeln!(out, "Developer Tools")?;
        writeln!(
            out,
            "Category: {}",
            selection.selected_category().unwrap_or("All Categories")
        )?;
        let categories = derive_categories(self.catalog.tools());
        writeln!(out, "Filters: All Categories | {}", categories.join(" | "))?;
        writeln!(out)?;

        if visible.is_empty() {
            writeln!(out, "{EMPTY_STATE_MESSAGE}")?;
            return Ok(());
        }

        let rows: Vec<ToolRow> = visible
            .iter()
            .map(|tool| ToolRow {
                name: tool.name.clone(),
                category: tool.category.clone(),
                link: tool.link().to_string(),
                description: truncate(&tool.description, DESCRIPTION_WIDTH),
            })
            .collect();

        writeln!(out, "{}", styled(Table::new(&rows)))?;
        Ok(())
    }

    /// The tools page filter options
    pub fn render_categories(&self, json: bool, out: &mut dyn Write) -> Result<()> {
        let tools = self.catalog.tools();
        let categories = derive_categories(tools);

        if json {
            return write_json(out, &categories);
        }

        if categories.is_empty() {
            writeln!(out, "{EMPTY_STATE_MESSAGE}")?;
            return Ok(());
        }

        let mut rows = vec![CategoryRow {
            category: "All Categories".to_string(),
            tools: tools.len(),
        }];
        rows.extend(categories.iter().map(|&category| CategoryRow {
            category: category.to_string(),
            tools: filter_tools(tools, Some(category)).len(),
        }));

        writeln!(out, "{}", styled(Table::new(&rows)))?;
        Ok(())
    }

    pub fn render_community(&self, json: bool, out: &mut dyn Write) -> Result<()> {
        let communities = self.catalog.communities();

        if json {
            return write_json(out, &communities);
        }

        writeln!(out, "Developer Community")?;
        writeln!(out)?;

        if communities.is_empty() {
            writeln!(out, "{EMPTY_STATE_MESSAGE}")?;
            return Ok(());
        }

        let rows: Vec<CommunityRow> = communities
            .iter()
            .map(|community| CommunityRow {
                name: community.name.clone(),
                members: format!("{} members", community.member_count),
                link: community.link().to_string(),
                description: truncate(&community.description, DESCRIPTION_WIDTH),
            })
            .collect();

        writeln!(out, "{}", styled(Table::new(&rows)))?;
        Ok(())
    }
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

fn write_json<T: serde::Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Cut `text` to `max` characters, marking the cut with "..."
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}
