//! Color theme and glyphs for the vault room.
//!
//! Uses the Kanagawa Wave palette.

use ratatui::style::{Color, Modifier, Style};

use numvault_types::RoomSettings;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet

    // === Accent Colors ===
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub peach: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::CYAN,
            success: colors::GREEN,
            warning: colors::YELLOW,
            error: colors::RED,
            peach: colors::ORANGE,
        }
    }
}

/// ASCII/Unicode glyphs for the vault layout.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub minus: &'static str,
    pub rule: &'static str,
    pub caret: &'static str,
    pub pass: &'static str,
    pub fail: &'static str,
    pub arrows_lr: &'static str,
    pub arrows_ud: &'static str,
    pub sep: &'static str,
}

#[must_use]
pub fn glyphs(settings: RoomSettings) -> Glyphs {
    if settings.ascii_only() {
        Glyphs {
            minus: "-",
            rule: "-",
            caret: "^",
            pass: "OK",
            fail: "X",
            arrows_lr: "<>",
            arrows_ud: "^v",
            sep: "|",
        }
    } else {
        Glyphs {
            minus: "−",
            rule: "─",
            caret: "▲",
            pass: "✓",
            fail: "✗",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            sep: "·",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn digit(palette: &Palette) -> Style {
        Style::default().fg(palette.text_primary)
    }

    /// A column whose value changed through borrowing.
    #[must_use]
    pub fn regrouped(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }

    /// The authored value that a borrow replaced.
    #[must_use]
    pub fn struck(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// The lending column while a borrow is fading.
    #[must_use]
    pub fn fading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::DIM)
    }

    #[must_use]
    pub fn selected(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn pass(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.success)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn fail(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.error)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn notice(palette: &Palette) -> Style {
        Style::default().fg(palette.warning)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use numvault_types::RoomSettings;

    use super::glyphs;

    #[test]
    fn ascii_glyphs_are_ascii() {
        let g = glyphs(RoomSettings::new(Duration::ZERO, false, true));
        for s in [g.minus, g.rule, g.caret, g.pass, g.fail, g.arrows_lr, g.arrows_ud, g.sep] {
            assert!(s.is_ascii(), "{s:?} should be ascii");
        }
    }

    #[test]
    fn glyphs_are_single_column_wide_where_laid_out() {
        let g = glyphs(RoomSettings::default());
        assert_eq!(g.minus.chars().count(), 1);
        assert_eq!(g.rule.chars().count(), 1);
        assert_eq!(g.caret.chars().count(), 1);
    }
}
