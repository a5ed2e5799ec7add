//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::scoring::{OptionMark, ReviewStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Detect the terminal background and pick a palette.
/// Detection failures fall back to dark.
pub fn resolve_theme() -> Theme {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.6 => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Answer feedback (reveal marks, review badges)
    pub correct: Color,
    pub incorrect: Color,
    pub unanswered: Color,

    // Card colors
    pub option_letter: Color,
    pub selected_style: Style,
    pub question_style: Style,

    // Progress bar
    pub bar_filled: Color,
    pub bar_empty: Color,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Status bar
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Panel and popup overlays
    pub panel_border: Color,
    pub popup_border: Color,
    pub popup_title: Style,
}

impl ThemeColors {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            correct: Color::Green,
            incorrect: Color::Red,
            unanswered: Color::Yellow,
            option_letter: Color::Cyan,
            selected_style: Style::new().bold(),
            question_style: Style::new().bold(),
            bar_filled: Color::Cyan,
            bar_empty: Color::DarkGray,
            muted: Color::Gray,
            title_color: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            panel_border: Color::Indexed(238),
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
        }
    }

    pub fn light() -> Self {
        Self {
            correct: Color::Indexed(28),
            incorrect: Color::Indexed(124),
            unanswered: Color::Indexed(130),
            option_letter: Color::Blue,
            selected_style: Style::new().bold(),
            question_style: Style::new().bold(),
            bar_filled: Color::Blue,
            bar_empty: Color::Indexed(252),
            muted: Color::Indexed(242),
            title_color: Color::Blue,
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            flash_success: Color::Indexed(28),
            flash_error: Color::Indexed(124),
            panel_border: Color::Indexed(250),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
        }
    }

    /// Color for a review badge
    pub fn status_color(&self, status: ReviewStatus) -> Color {
        match status {
            ReviewStatus::Correct => self.correct,
            ReviewStatus::Incorrect => self.incorrect,
            ReviewStatus::Unanswered => self.unanswered,
        }
    }

    /// Color for a revealed option, if it carries a mark
    pub fn mark_color(&self, mark: OptionMark) -> Option<Color> {
        match mark {
            OptionMark::Correct => Some(self.correct),
            OptionMark::Incorrect => Some(self.incorrect),
            OptionMark::Unmarked => None,
        }
    }
}
