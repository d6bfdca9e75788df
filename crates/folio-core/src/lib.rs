use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod catalog;
pub mod config_file;
pub mod markup;
pub mod selection;

// Re-export for convenience
pub use catalog::{Catalog, CatalogView};
pub use selection::{CategoryFilter, Selection, SelectionEvent, SortOrder, select};

/// Publication status. The set is closed: anything else in a catalog file is
/// rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PubStatus {
    Published,
    Preprint,
    #[serde(rename = "In Review")]
    InReview,
}

impl PubStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Preprint => "Preprint",
            Self::InReview => "In Review",
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

/// External reference for a publication (DOI, SSRN page, ...).
///
/// URL and label travel together, so a record either has both or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub url: String,
    pub label: String,
}

/// A single publication record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub year: u16,
    /// Machine-readable category tag, matched by [`CategoryFilter`].
    pub category: String,
    pub category_label: String,
    /// Accent token used by renderers for the category badge.
    pub style: String,
    pub title: String,
    /// Author line. May contain `<strong>`/`<em>` emphasis around the site owner.
    pub authors: String,
    pub status: PubStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<ExternalLink>,
}

impl Publication {
    /// Author line with emphasis markup removed.
    pub fn plain_authors(&self) -> String {
        markup::strip_emphasis(&self.authors)
    }

    pub fn category(&self) -> Category {
        Category {
            tag: self.category.clone(),
            label: self.category_label.clone(),
        }
    }
}

/// A (tag, label) pair driving one filter control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub tag: String,
    pub label: String,
}

/// An offered service (teaching, consulting, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub icon: String,
    /// Accent color token.
    pub accent: String,
    pub description: String,
    #[serde(default)]
    pub outcomes: Vec<String>,
}

/// A portfolio project with its repository link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid catalog: {0}")]
    Validation(String),
    #[error("unknown sort order {0:?} (expected \"newest\" or \"oldest\")")]
    UnknownSortOrder(String),
}
