//! The portfolio page and its sections
//!
//! The page is one long document. Each [`Section`] lays itself out as
//! pre-wrapped lines for the current width and marks the lines that react to
//! focus and activation as [`Hotspot`]s. The [`Document`] stacks the sections,
//! owns the scroll offset and answers scroll-spy queries.

pub mod document;
pub mod portfolio;
pub mod sections;

pub use document::Document;
pub use portfolio::PortfolioPage;

use crate::content::DisplayRecord;
use crate::tui::styles::Theme;
use crossterm::event::KeyEvent;
use ratatui::text::Line;
use std::sync::Arc;

/// Section identifiers in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Timeline,
    Portfolio,
    Publications,
    Skills,
    Testimonials,
    Contact,
    Footer,
}

impl SectionId {
    /// Sections listed in the navigation header, in header order
    pub const NAV: [SectionId; 5] = [
        SectionId::About,
        SectionId::Portfolio,
        SectionId::Skills,
        SectionId::Publications,
        SectionId::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Timeline => "timeline",
            SectionId::Portfolio => "portfolio",
            SectionId::Publications => "publications",
            SectionId::Skills => "skills",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }

    pub fn is_nav(self) -> bool {
        Self::NAV.contains(&self)
    }

    /// Navigation target for the digit keys `1`-`5`
    pub fn from_nav_key(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        Self::NAV.get(index).copied()
    }
}

/// Lines of a section that react to focus and activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotspot {
    /// First line, relative to the section
    pub line: usize,
    pub height: usize,
    /// Column range `[start, end)` when several hotspots share a line
    pub columns: Option<(u16, u16)>,
    /// Section-defined meaning
    pub target: usize,
}

impl Hotspot {
    pub fn line(line: usize, target: usize) -> Self {
        Self {
            line,
            height: 1,
            columns: None,
            target,
        }
    }

    pub fn span(line: usize, height: usize, target: usize) -> Self {
        Self {
            line,
            height: height.max(1),
            columns: None,
            target,
        }
    }

    pub fn inline(line: usize, start: u16, end: u16, target: usize) -> Self {
        Self {
            line,
            height: 1,
            columns: Some((start, end)),
            target,
        }
    }

    pub fn contains(&self, line: usize, column: u16) -> bool {
        let in_lines = line >= self.line && line < self.line + self.height;
        let in_columns = self
            .columns
            .map_or(true, |(start, end)| column >= start && column < end);
        in_lines && in_columns
    }
}

/// A section laid out for one width
#[derive(Debug, Clone, Default)]
pub struct SectionView {
    pub lines: Vec<Line<'static>>,
    pub hotspots: Vec<Hotspot>,
}

impl SectionView {
    pub fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Index the next pushed line will get
    pub fn next_line(&self) -> usize {
        self.lines.len()
    }

    /// Push a line and make it a hotspot
    pub fn push_hotspot(&mut self, line: impl Into<Line<'static>>, target: usize) {
        self.hotspots.push(Hotspot::line(self.lines.len(), target));
        self.lines.push(line.into());
    }
}

/// What activating a hotspot asks of the host
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    /// Show a record in the detail dialog
    OpenRecord(Arc<DisplayRecord>),
    /// Scroll the page to a section
    JumpTo(SectionId),
    /// Hand a URL to the system browser
    OpenUrl(String),
    /// Show a message in the status bar
    Status(String),
}

/// One block of the page
pub trait Section: Send + Sync {
    fn id(&self) -> SectionId;

    /// Lay the section out for `width` columns. `focused` is the target of
    /// the focused hotspot when it belongs to this section.
    fn view(&self, width: u16, focused: Option<usize>, theme: &Theme) -> SectionView;

    /// Activate the hotspot with `target`
    fn activate(&mut self, target: usize) -> Option<PageAction> {
        let _ = target;
        None
    }

    /// Whether the section is capturing keyboard input
    fn is_editing(&self) -> bool {
        false
    }

    /// Key input while [`is_editing`](Self::is_editing) is true
    fn handle_edit_key(&mut self, key: KeyEvent) -> Option<PageAction> {
        let _ = key;
        None
    }

    /// Pasted text while editing
    fn handle_paste(&mut self, text: &str) {
        let _ = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_keys() {
        assert_eq!(SectionId::from_nav_key('1'), Some(SectionId::About));
        assert_eq!(SectionId::from_nav_key('5'), Some(SectionId::Contact));
        assert_eq!(SectionId::from_nav_key('0'), None);
        assert_eq!(SectionId::from_nav_key('6'), None);
        assert_eq!(SectionId::from_nav_key('x'), None);
    }

    #[test]
    fn test_hotspot_contains() {
        let row = Hotspot::span(2, 3, 0);
        assert!(row.contains(2, 0));
        assert!(row.contains(4, 99));
        assert!(!row.contains(5, 0));

        let tab = Hotspot::inline(0, 4, 10, 1);
        assert!(tab.contains(0, 4));
        assert!(!tab.contains(0, 10));
        assert!(!tab.contains(1, 5));
    }
}
