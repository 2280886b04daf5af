//! Color themes and styling for the assessment form.

use ratatui::style::{Color, Modifier, Style};

use crate::core::DiscTrait;

pub struct Theme {
    /// Primary accent color (cyan for the focused cell)
    pub primary: Color,
    /// Success color (green when the form can be submitted)
    pub success: Color,
    /// Error color (red for flagged cells and alerts)
    pub error: Color,
    /// Muted color (dark gray for hints and empty cells)
    pub muted: Color,
    /// Text color
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    pub fn trait_color(&self, disc_trait: DiscTrait) -> Color {
        match disc_trait {
            DiscTrait::D => Color::Rgb(0xff, 0x6b, 0x6b),
            DiscTrait::I => Color::Rgb(0xfe, 0xca, 0x57),
            DiscTrait::S => Color::Rgb(0x1d, 0xd1, 0xa1),
            DiscTrait::C => Color::Rgb(0x54, 0xa0, 0xff),
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self, disc_trait: DiscTrait) -> Style {
        Style::default()
            .fg(self.trait_color(disc_trait))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a grid cell given focus and validity.
    pub fn cell_style(&self, focused: bool, invalid: bool) -> Style {
        let base = if invalid {
            Style::default().fg(self.error).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        };
        if focused {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }

    pub fn progress_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn submit_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.success).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn alert_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
