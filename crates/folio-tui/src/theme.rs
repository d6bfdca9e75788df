use ratatui::style::{Color, Modifier, Style};

use folio_core::PubStatus;

/// Which palette is active. Switched with `t`; not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Hacker,
    Modern,
}

impl ThemeKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "modern" => Self::Modern,
            _ => Self::Hacker,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Hacker => Self::Modern,
            Self::Modern => Self::Hacker,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            Self::Hacker => Theme::hacker(),
            Self::Modern => Theme::modern(),
        }
    }
}

/// Color theme for the TUI.
pub struct Theme {
    pub published: Color,
    pub preprint: Color,
    pub in_review: Color,

    pub year: Color,
    pub category: Color,
    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub active: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Hacker-green terminal theme.
    pub fn hacker() -> Self {
        Self {
            published: Color::Rgb(0, 210, 0),
            preprint: Color::Yellow,
            in_review: Color::Magenta,

            year: Color::Cyan,
            category: Color::Rgb(0, 170, 0),
            header_fg: Color::Black,
            header_bg: Color::Rgb(0, 210, 0),
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(30, 50, 30),
            active: Color::Cyan,
            footer_fg: Color::DarkGray,
            footer_bg: Color::Reset,
        }
    }

    /// Modern theme: white text, electric blue accents, dark blue header.
    pub fn modern() -> Self {
        Self {
            published: Color::Rgb(0, 200, 80),
            preprint: Color::Rgb(255, 200, 0),
            in_review: Color::Rgb(200, 50, 200),

            year: Color::Rgb(60, 140, 255),
            category: Color::Rgb(218, 165, 32),
            header_fg: Color::White,
            header_bg: Color::Rgb(30, 60, 120),
            border: Color::Rgb(60, 60, 80),
            text: Color::White,
            dim: Color::Rgb(120, 120, 140),
            highlight_bg: Color::Rgb(30, 40, 80),
            active: Color::Rgb(60, 140, 255),
            footer_fg: Color::Rgb(120, 120, 140),
            footer_bg: Color::Reset,
        }
    }

    pub fn status_color(&self, status: &PubStatus) -> Color {
        match status {
            PubStatus::Published => self.published,
            PubStatus::Preprint => self.preprint,
            PubStatus::InReview => self.in_review,
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }
}
