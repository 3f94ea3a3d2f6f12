//! Core dialog types and traits
//!
//! Configuration, layout and lifecycle types shared by modal dialogs.

use crate::tui::{components::Component, styles::Theme, Frame};
use ratatui::layout::Rect;

/// Dialog configuration options
#[derive(Debug, Clone)]
pub struct DialogConfig {
    /// Dialog title (optional)
    pub title: Option<String>,
    /// Share of the available area, as (width, height) percentages
    pub size_percent: (u16, u16),
    /// Smallest size the dialog shrinks to before it clips
    pub min_size: (u16, u16),
    /// Whether dialog can be closed with Escape key
    pub closable: bool,
    /// Whether a press outside the dialog closes it
    pub close_on_outside_click: bool,
    /// Whether dialog has a border
    pub has_border: bool,
    /// Whether the page behind the dialog is dimmed
    pub dim_background: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: None,
            size_percent: (70, 80),
            min_size: (30, 8),
            closable: true,
            close_on_outside_click: true,
            has_border: true,
            dim_background: true,
        }
    }
}

impl DialogConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size_percent(mut self, width: u16, height: u16) -> Self {
        self.size_percent = (width.min(100), height.min(100));
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn close_on_outside_click(mut self, enabled: bool) -> Self {
        self.close_on_outside_click = enabled;
        self
    }
}

/// Lifecycle state of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// How a dialog was asked to close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    /// The close control in the dialog chrome
    CloseControl,
    /// Escape key
    Escape,
    /// Pointer press outside the dialog area
    OutsideClick,
    /// Programmatic `close()`
    Explicit,
}

/// Result type for dialog operations
pub type DialogResult<T> = std::result::Result<T, DialogError>;

/// Dialog-specific error types
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    #[error("Scroll lock is already held by another overlay")]
    ScrollLockHeld,
}

/// Core trait for dialog components
///
/// Extends [`Component`] with the pieces every modal needs: a configuration, a
/// content renderer, and the chrome around it.
pub trait Dialog: Component {
    fn config(&self) -> &DialogConfig;

    fn state(&self) -> DialogState;

    fn is_open(&self) -> bool {
        self.state() == DialogState::Open
    }

    /// Render dialog content (without border/chrome)
    fn render_content(&mut self, frame: &mut Frame, content_area: Rect, theme: &Theme);

    /// Render dialog border and chrome (title bar, etc.)
    fn render_chrome(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.config().has_border {
            return;
        }

        use ratatui::widgets::{Block, Borders};

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.focused_border_style())
            .style(theme.dialog_style());

        if let Some(title) = &self.config().title {
            block = block.title(title.clone());
        }

        frame.render_widget(block, area);
    }
}

/// Helper struct for dialog layout calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogLayout {
    /// Dialog area (including border)
    pub dialog_area: Rect,
    /// Content area (excluding border)
    pub content_area: Rect,
}

impl DialogLayout {
    pub fn calculate(config: &DialogConfig, available_area: Rect) -> Self {
        let (width, height) = Self::calculate_size(config, available_area);
        let (x, y) = Self::centered_origin(available_area, width, height);

        let dialog_area = Rect {
            x,
            y,
            width,
            height,
        };

        let content_area = if config.has_border {
            Rect {
                x: dialog_area.x + 1,
                y: dialog_area.y + 1,
                width: dialog_area.width.saturating_sub(2),
                height: dialog_area.height.saturating_sub(2),
            }
        } else {
            dialog_area
        };

        Self {
            dialog_area,
            content_area,
        }
    }

    fn calculate_size(config: &DialogConfig, available_area: Rect) -> (u16, u16) {
        let (w_pct, h_pct) = config.size_percent;
        let width = (available_area.width as u32 * w_pct as u32 / 100) as u16;
        let height = (available_area.height as u32 * h_pct as u32 / 100) as u16;

        let (min_w, min_h) = config.min_size;
        (
            width.max(min_w).min(available_area.width),
            height.max(min_h).min(available_area.height),
        )
    }

    fn centered_origin(available_area: Rect, width: u16, height: u16) -> (u16, u16) {
        (
            available_area.x + available_area.width.saturating_sub(width) / 2,
            available_area.y + available_area.height.saturating_sub(height) / 2,
        )
    }

    /// Check if a point is within the dialog area
    pub fn contains_point(&self, x: u16, y: u16) -> bool {
        let area = &self.dialog_area;
        x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_percentage_layout() {
        let config = DialogConfig::default().with_size_percent(50, 50);
        let layout = DialogLayout::calculate(&config, Rect::new(0, 0, 100, 40));

        assert_eq!(layout.dialog_area, Rect::new(25, 10, 50, 20));
        assert_eq!(layout.content_area, Rect::new(26, 11, 48, 18));
    }

    #[test]
    fn test_min_size_clamped_to_screen() {
        let config = DialogConfig::default().with_size_percent(10, 10);
        let layout = DialogLayout::calculate(&config, Rect::new(0, 0, 20, 5));

        assert_eq!(layout.dialog_area.width, 20);
        assert_eq!(layout.dialog_area.height, 5);
    }

    #[test]
    fn test_contains_point() {
        let config = DialogConfig::default().with_size_percent(50, 50);
        let layout = DialogLayout::calculate(&config, Rect::new(0, 0, 80, 24));
        assert_eq!(layout.dialog_area, Rect::new(20, 6, 40, 12));

        assert!(layout.contains_point(20, 6));
        assert!(layout.contains_point(59, 17));
        assert!(!layout.contains_point(60, 17));
        assert!(!layout.contains_point(20, 18));
        assert!(!layout.contains_point(0, 0));
    }
}
