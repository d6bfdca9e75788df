use std::str::FromStr;

use folio_core::config_file::{ConfigFile, DEFAULT_OWNER, DEFAULT_STAGGER_MS, DEFAULT_TAGLINE};

/// Output format for a rendered selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Publication list fragment only (cards or the empty-state placeholder).
    Html,
    /// Full standalone page.
    Page,
    Json,
    Markdown,
    Text,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[
            Self::Html,
            Self::Page,
            Self::Json,
            Self::Markdown,
            Self::Text,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Page => "page",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Text => "text",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Html | Self::Page => "html",
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Text => "txt",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "fragment" => Ok(Self::Html),
            "page" => Ok(Self::Page),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "text" | "txt" => Ok(Self::Text),
            other => Err(format!(
                "unknown format '{}' (expected one of: html, page, json, markdown, text)",
                other
            )),
        }
    }
}

/// Presentation settings shared by every renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub owner: String,
    pub tagline: String,
    /// Reveal delay added per rendered item, in milliseconds.
    pub stagger_ms: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            stagger_ms: DEFAULT_STAGGER_MS,
        }
    }
}

impl RenderOptions {
    pub fn from_config(config: &ConfigFile) -> Self {
        Self {
            owner: config.owner(),
            tagline: config.tagline(),
            stagger_ms: config.reveal_stagger_ms(),
        }
    }
}
