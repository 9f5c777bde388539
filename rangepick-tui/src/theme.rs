//! Parrot/neon theme tokens for the Rangepick TUI
//!
//! Provides a consistent color palette:
//! - **Accent**: Electric cyan (focus, selected range)
//! - **Positive**: Neon green (great ratings, grabbed handles)
//! - **Negative**: Hot pink (errors)
//! - **Warning**: Neon orange (alerts, empty results)
//! - **Neutral**: Cool purple (secondary info)
//! - **Muted**: Steel blue (unselected track, hints)

use ratatui::style::{Color, Modifier, Style};

/// Parrot/neon theme for the Rangepick TUI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (high ratings, dragging)
    pub positive: Color,
    /// Hot pink (errors)
    pub negative: Color,
    /// Neon orange (warnings, alerts)
    pub warning: Color,
    /// Cool purple (neutral info, secondary)
    pub neutral: Color,
    /// Steel blue (muted text, inactive track)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    /// Create the default Parrot/neon theme
    pub fn parrot_neon() -> Self {
        Self {
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
        }
    }

    /// Get color for a trip rating (gradient from muted to positive)
    pub fn rating_color(&self, rating: f64) -> Color {
        match rating {
            r if r >= 4.7 => self.positive,
            r if r >= 4.4 => self.accent,
            r if r >= 4.1 => self.neutral,
            _ => self.muted,
        }
    }

    /// Get color for a handle glyph
    pub fn handle_color(&self, focused: bool, dragging: bool) -> Color {
        match (focused, dragging) {
            (_, true) => self.positive,
            (true, false) => self.accent,
            (false, false) => self.text_primary,
        }
    }
}

// ── Style shortcuts ─────────────────────────────────────────────────

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn negative() -> Style {
    Style::default().fg(Theme::default().negative)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn neutral() -> Style {
    Style::default().fg(Theme::default().neutral)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn text() -> Style {
    Style::default().fg(Theme::default().text_primary)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
