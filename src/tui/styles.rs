use ratatui::style::{Color, Modifier, Style};

/// Application theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,

    /// Text colors
    pub text: Color,
    pub text_dim: Color,
    pub text_bright: Color,

    /// Background colors
    pub background: Color,
    pub background_alt: Color,

    /// Border colors
    pub border: Color,
    pub border_focused: Color,

    /// Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    /// Special colors
    pub placeholder: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::forest()
    }
}

impl Theme {
    /// Greens of the portfolio site on a dark terminal
    pub fn forest() -> Self {
        Self {
            primary: Color::Rgb(44, 94, 46),      // #2c5e2e
            secondary: Color::Rgb(74, 107, 77),   // #4a6b4d
            accent: Color::Rgb(224, 231, 215),    // #e0e7d7

            text: Color::Rgb(224, 231, 215),
            text_dim: Color::Rgb(140, 160, 140),
            text_bright: Color::Rgb(248, 250, 245), // #f8faf5

            background: Color::Rgb(18, 28, 19),
            background_alt: Color::Rgb(31, 69, 33), // #1f4521

            border: Color::Rgb(74, 107, 77),
            border_focused: Color::Rgb(132, 186, 120),

            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(245, 158, 11),
            error: Color::Rgb(239, 68, 68),
            info: Color::Rgb(59, 130, 246),

            placeholder: Color::Rgb(100, 116, 100),
            selection: Color::Rgb(44, 94, 46),
        }
    }

    /// Base style for normal elements
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for text content
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.text_bright)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for focused borders
    pub fn focused_border_style(&self) -> Style {
        Style::default()
            .fg(self.border_focused)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for selected items
    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .fg(self.text_bright)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for buttons and other activatable text
    pub fn action_style(&self) -> Style {
        Style::default()
            .fg(self.border_focused)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn link_style(&self) -> Style {
        Style::default().fg(self.info).add_modifier(Modifier::UNDERLINED)
    }

    /// Style for the status bar
    pub fn status_bar_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background_alt)
    }

    /// Style for help text
    pub fn help_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for placeholder text
    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.placeholder)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn dialog_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background_alt)
    }

    /// Page behind an open modal
    pub fn backdrop_style(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.text_bright).bg(self.secondary)
    }

    /// Badge colour of a detail-dialog category
    pub fn category_badge(&self, category: &str) -> Style {
        let (fg, bg) = match category {
            "Publication" => (Color::Rgb(30, 64, 175), Color::Rgb(219, 234, 254)),
            "Conference" => (Color::Rgb(107, 33, 168), Color::Rgb(243, 232, 255)),
            "Award" => (Color::Rgb(146, 64, 14), Color::Rgb(254, 243, 199)),
            "Grant" => (Color::Rgb(6, 95, 70), Color::Rgb(209, 250, 229)),
            "Collaboration" => (Color::Rgb(55, 48, 163), Color::Rgb(224, 231, 255)),
            "Media" => (Color::Rgb(159, 18, 57), Color::Rgb(255, 228, 230)),
            _ => (Color::Rgb(31, 41, 55), Color::Rgb(243, 244, 246)),
        };
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
    }

    /// Badge colour of a timeline entry category
    pub fn timeline_badge(&self, category: &str) -> Style {
        let (fg, bg) = match category {
            "Education" => (Color::Rgb(30, 64, 175), Color::Rgb(219, 234, 254)),
            "Research" => (Color::Rgb(22, 101, 52), Color::Rgb(220, 252, 231)),
            "Committee" => (Color::Rgb(107, 33, 168), Color::Rgb(243, 232, 255)),
            "Career" => (Color::Rgb(133, 77, 14), Color::Rgb(254, 249, 195)),
            "Award" => (Color::Rgb(153, 27, 27), Color::Rgb(254, 226, 226)),
            "Social Experience" => (Color::Rgb(55, 48, 163), Color::Rgb(224, 231, 255)),
            "Speaking" => (Color::Rgb(154, 52, 18), Color::Rgb(255, 237, 213)),
            _ => (Color::Rgb(31, 41, 55), Color::Rgb(243, 244, 246)),
        };
        Style::default().fg(fg).bg(bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_categories_share_fallback() {
        let theme = Theme::default();
        assert_eq!(theme.category_badge("Marine Ecology"), theme.category_badge("Other"));
        assert_ne!(theme.category_badge("Award"), theme.category_badge("Grant"));
        assert_eq!(theme.timeline_badge("Study"), theme.timeline_badge("Unknown"));
    }
}
