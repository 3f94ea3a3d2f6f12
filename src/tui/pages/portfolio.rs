use super::{
    document::{DocHotspot, Document},
    sections::*,
    PageAction, Section, SectionId,
};
use crate::contact::FormEndpoint;
use crate::content::Catalog;
use crate::tui::{
    components::{dialogs::ScrollLock, Scrollable},
    keys::KeyMap,
    styles::Theme,
    utils::{layout, text},
    Frame,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use std::sync::Arc;
use tracing::debug;

/// Rows above the document: navigation line and separator
const HEADER_HEIGHT: u16 = 2;
const WHEEL_STEP: usize = 3;

/// The single-page portfolio: navigation header over a scrolling document
pub struct PortfolioPage {
    catalog: Arc<Catalog>,
    sections: Vec<Box<dyn Section>>,
    document: Document,
    key_map: KeyMap,
    theme: Theme,
    focus: Option<(SectionId, usize)>,
    area: Rect,
    body: Rect,
    /// Header click targets: column range and section
    nav_hits: Vec<(u16, u16, SectionId)>,
}

impl PortfolioPage {
    pub fn new(
        catalog: Arc<Catalog>,
        endpoint: FormEndpoint,
        scroll_lock: ScrollLock,
        theme: Theme,
    ) -> Self {
        let sections: Vec<Box<dyn Section>> = vec![
            Box::new(HeroSection::new(Arc::clone(&catalog))),
            Box::new(AboutSection::new(Arc::clone(&catalog))),
            Box::new(TimelineSection::new(Arc::clone(&catalog))),
            Box::new(GallerySection::new(Arc::clone(&catalog))),
            Box::new(PublicationsSection::new(Arc::clone(&catalog))),
            Box::new(SkillsSection::new(Arc::clone(&catalog))),
            Box::new(TestimonialsSection::new(Arc::clone(&catalog))),
            Box::new(ContactSection::new(Arc::clone(&catalog), endpoint)),
            Box::new(FooterSection::new(Arc::clone(&catalog))),
        ];

        Self {
            catalog,
            sections,
            document: Document::new(scroll_lock),
            key_map: KeyMap::default(),
            theme,
            focus: None,
            area: Rect::default(),
            body: Rect::default(),
            nav_hits: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn active_section(&self) -> SectionId {
        self.document.active_section()
    }

    pub fn focused(&self) -> Option<(SectionId, usize)> {
        self.focus
    }

    /// Whether a form field is capturing keyboard input
    pub fn is_editing(&self) -> bool {
        self.sections.iter().any(|section| section.is_editing())
    }

    pub fn set_size(&mut self, area: Rect) {
        if area == self.area && !self.document.is_empty() {
            return;
        }
        self.area = area;
        self.body = Rect {
            x: area.x,
            y: area.y + HEADER_HEIGHT.min(area.height),
            width: area.width,
            height: area.height.saturating_sub(HEADER_HEIGHT),
        };
        self.relayout();
    }

    /// Lay every section out again for the current width and focus
    fn relayout(&mut self) {
        let width = self.body.width.max(1);
        let focus = self.focus;
        let theme = &self.theme;
        let views: Vec<_> = self
            .sections
            .iter()
            .map(|section| {
                let id = section.id();
                let focused = focus.filter(|(fid, _)| *fid == id).map(|(_, target)| target);
                (id, section.view(width, focused, theme))
            })
            .collect();

        self.document.rebuild(views);
        self.document.set_viewport(self.body.height as usize);
    }

    fn section_mut(&mut self, id: SectionId) -> Option<&mut Box<dyn Section>> {
        self.sections.iter_mut().find(|section| section.id() == id)
    }

    /// Scroll the page to a section. Ignored while the scroll lock is held.
    pub fn jump_to(&mut self, id: SectionId) -> bool {
        debug!("Jumping to section '{}'", id.label());
        self.document.scroll_to_section(id)
    }

    fn activate(&mut self, id: SectionId, target: usize) -> Option<PageAction> {
        let action = self.section_mut(id)?.activate(target);
        self.relayout();

        match action {
            Some(PageAction::JumpTo(section)) => {
                self.jump_to(section);
                None
            }
            other => other,
        }
    }

    /// Hotspots in reading order
    fn ordered_hotspots(&self) -> Vec<DocHotspot> {
        let mut hotspots = self.document.hotspots().to_vec();
        hotspots.sort_by_key(|hotspot| (hotspot.line, hotspot.columns.map_or(0, |(start, _)| start)));
        hotspots
    }

    fn step_focus(&mut self, forward: bool) {
        let hotspots = self.ordered_hotspots();
        if hotspots.is_empty() {
            return;
        }

        let current = self.focus.and_then(|(section, target)| {
            hotspots
                .iter()
                .position(|h| h.section == section && h.target == target)
        });

        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % hotspots.len(),
            (Some(i), false) => (i + hotspots.len() - 1) % hotspots.len(),
            // Start from what is on screen
            (None, true) => hotspots
                .iter()
                .position(|h| h.line >= self.document.offset())
                .unwrap_or(0),
            (None, false) => hotspots
                .iter()
                .rposition(|h| h.line < self.document.offset() + self.document.viewport())
                .unwrap_or(hotspots.len() - 1),
        };

        let hotspot = hotspots[next];
        self.focus = Some((hotspot.section, hotspot.target));
        self.relayout();
        self.document.ensure_visible(hotspot.line, hotspot.height);
    }

    fn activate_focused(&mut self) -> Option<PageAction> {
        let (section, target) = self.focus?;
        self.activate(section, target)
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<PageAction> {
        if let Some(section) = self.sections.iter_mut().find(|section| section.is_editing()) {
            let action = section.handle_edit_key(key);
            self.relayout();
            return action;
        }

        if self.key_map.next_focus.matches(&key) {
            self.step_focus(true);
            return None;
        }
        if self.key_map.prev_focus.matches(&key) {
            self.step_focus(false);
            return None;
        }
        if self.key_map.activate.matches(&key) {
            return self.activate_focused();
        }

        let page = self.body.height.max(1) as usize;
        match (key.code, key.modifiers) {
            (KeyCode::Up | KeyCode::Char('k'), KeyModifiers::NONE) => self.document.scroll_up(1),
            (KeyCode::Down | KeyCode::Char('j'), KeyModifiers::NONE) => self.document.scroll_down(1),
            (KeyCode::PageUp, _) => self.document.scroll_up(page),
            (KeyCode::PageDown | KeyCode::Char(' '), _) => self.document.scroll_down(page),
            (KeyCode::Home, _) => self.document.scroll_to_top(),
            (KeyCode::End, _) => self.document.scroll_to_bottom(),
            (KeyCode::Esc, _) => {
                if self.focus.take().is_some() {
                    self.relayout();
                }
            }
            (KeyCode::Char(c), KeyModifiers::NONE) => {
                if let Some(id) = SectionId::from_nav_key(c) {
                    self.jump_to(id);
                }
            }
            _ => {}
        }
        None
    }

    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<PageAction> {
        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::ScrollUp => self.document.scroll_up(WHEEL_STEP),
            MouseEventKind::ScrollDown => self.document.scroll_down(WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                if layout::contains(self.body, x, y) {
                    let line = self.document.offset() + (y - self.body.y) as usize;
                    let hotspot = *self.document.hotspot_at(line, x - self.body.x)?;
                    self.focus = Some((hotspot.section, hotspot.target));
                    return self.activate(hotspot.section, hotspot.target);
                }
                if y == self.area.y {
                    let hit = self
                        .nav_hits
                        .iter()
                        .find(|(start, end, _)| x >= *start && x < *end)
                        .map(|(_, _, id)| *id);
                    if let Some(id) = hit {
                        self.jump_to(id);
                    }
                }
            }
            _ => {}
        }
        None
    }

    pub fn handle_paste(&mut self, pasted: &str) {
        if let Some(section) = self.sections.iter_mut().find(|section| section.is_editing()) {
            section.handle_paste(pasted);
            self.relayout();
        }
    }

    fn header_line(&mut self) -> Line<'static> {
        let theme = &self.theme;
        let active = self.document.active_section();
        let mut spans = vec![
            Span::styled(self.catalog.profile.initials.clone(), theme.heading_style()),
            Span::raw("   "),
        ];
        let mut column = self.area.x + text::width(&self.catalog.profile.initials) as u16 + 3;

        self.nav_hits.clear();
        for (i, id) in SectionId::NAV.iter().enumerate() {
            let label = format!("{} {}", i + 1, id.label());
            let style = if *id == active {
                theme.selection_style()
            } else {
                theme.muted_style()
            };
            let label_width = text::width(&label) as u16;
            self.nav_hits.push((column, column + label_width, *id));
            spans.push(Span::styled(label, style));
            spans.push(Span::raw("  "));
            column += label_width + 2;
        }
        Line::from(spans)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.set_size(area);
        let header = self.header_line();
        let theme = &self.theme;

        frame.render_widget(Paragraph::new("").style(theme.base_style()), area);

        let header_area = Rect { height: 1.min(area.height), ..area };
        frame.render_widget(Paragraph::new(header), header_area);
        if area.height > 1 {
            let rule = Rect {
                y: area.y + 1,
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new("─".repeat(area.width as usize)).style(theme.border_style()),
                rule,
            );
        }

        let lines = self.document.visible_lines().to_vec();
        frame.render_widget(Paragraph::new(lines), self.body);
    }
}
