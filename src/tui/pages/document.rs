use super::{SectionId, SectionView};
use crate::tui::components::{dialogs::ScrollLock, Scrollable};
use ratatui::text::Line;
use tracing::debug;

/// Lines below the top of the viewport where scroll-spy samples the page
pub const SPY_OFFSET: usize = 3;

/// Line range a section occupies in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub start: usize,
    pub len: usize,
}

impl SectionSpan {
    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line < self.start + self.len
    }
}

/// A section hotspot placed in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocHotspot {
    pub section: SectionId,
    pub target: usize,
    pub line: usize,
    pub height: usize,
    pub columns: Option<(u16, u16)>,
}

impl DocHotspot {
    pub fn contains(&self, line: usize, column: u16) -> bool {
        let in_lines = line >= self.line && line < self.line + self.height;
        let in_columns = self
            .columns
            .map_or(true, |(start, end)| column >= start && column < end);
        in_lines && in_columns
    }
}

/// The stacked sections plus the page scroll position
///
/// Every scroll request goes through the shared [`ScrollLock`] and is
/// ignored while any overlay holds it.
#[derive(Debug)]
pub struct Document {
    lines: Vec<Line<'static>>,
    spans: Vec<SectionSpan>,
    hotspots: Vec<DocHotspot>,
    offset: usize,
    viewport: usize,
    scroll_lock: ScrollLock,
}

impl Document {
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self {
            lines: Vec::new(),
            spans: Vec::new(),
            hotspots: Vec::new(),
            offset: 0,
            viewport: 0,
            scroll_lock,
        }
    }

    /// Replace the content with freshly laid-out sections, keeping the offset
    pub fn rebuild<I>(&mut self, views: I)
    where
        I: IntoIterator<Item = (SectionId, SectionView)>,
    {
        self.lines.clear();
        self.spans.clear();
        self.hotspots.clear();

        for (id, view) in views {
            let start = self.lines.len();
            self.hotspots.extend(view.hotspots.iter().map(|hotspot| DocHotspot {
                section: id,
                target: hotspot.target,
                line: start + hotspot.line,
                height: hotspot.height,
                columns: hotspot.columns,
            }));
            self.spans.push(SectionSpan {
                id,
                start,
                len: view.lines.len(),
            });
            self.lines.extend(view.lines);
        }

        // Layout changes are not scroll requests; keep the offset in range
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn set_viewport(&mut self, height: usize) {
        self.viewport = height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport)
    }

    pub fn visible_lines(&self) -> &[Line<'static>] {
        let end = (self.offset + self.viewport).min(self.lines.len());
        &self.lines[self.offset.min(end)..end]
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn hotspots(&self) -> &[DocHotspot] {
        &self.hotspots
    }

    pub fn hotspot_at(&self, line: usize, column: u16) -> Option<&DocHotspot> {
        self.hotspots.iter().find(|hotspot| hotspot.contains(line, column))
    }

    pub fn section_start(&self, id: SectionId) -> Option<usize> {
        self.spans.iter().find(|span| span.id == id).map(|span| span.start)
    }

    /// Move the offset to `line`. Returns false when the request was ignored.
    pub fn scroll_to(&mut self, line: usize) -> bool {
        if self.scroll_lock.is_locked() {
            debug!("Page scroll ignored while locked");
            return false;
        }
        self.offset = line.min(self.max_offset());
        true
    }

    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let target = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.scroll_to(target)
    }

    pub fn scroll_to_section(&mut self, id: SectionId) -> bool {
        match self.section_start(id) {
            Some(start) => self.scroll_to(start),
            None => false,
        }
    }

    /// Scroll the least amount that brings `[line, line + height)` into view
    pub fn ensure_visible(&mut self, line: usize, height: usize) -> bool {
        if line < self.offset {
            return self.scroll_to(line);
        }
        let bottom = line + height.max(1);
        if bottom > self.offset + self.viewport {
            let target = bottom.saturating_sub(self.viewport).min(line);
            return self.scroll_to(target);
        }
        true
    }

    /// The navigation section highlighted in the header
    ///
    /// A marker line a few rows below the top of the viewport decides. Inside
    /// an unlisted section the nearest listed section above it stays active;
    /// above the first listed section the hero is active.
    pub fn active_section(&self) -> SectionId {
        let marker = self.offset + SPY_OFFSET;

        if let Some(span) = self.spans.iter().find(|span| span.contains(marker)) {
            if span.id.is_nav() {
                return span.id;
            }
        }

        self.spans
            .iter()
            .filter(|span| span.id.is_nav() && span.start <= marker)
            .last()
            .map_or(SectionId::Hero, |span| span.id)
    }
}

impl Scrollable for Document {
    fn scroll_up(&mut self, lines: usize) {
        self.scroll_by(-(lines.min(isize::MAX as usize) as isize));
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_by(lines.min(isize::MAX as usize) as isize);
    }

    fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_offset());
    }
}
