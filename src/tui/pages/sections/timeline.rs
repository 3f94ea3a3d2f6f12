use super::{heading, indented};
use crate::content::Catalog;
use crate::tui::{
    pages::{Hotspot, PageAction, Section, SectionId, SectionView},
    styles::Theme,
    utils::text,
};
use ratatui::text::{Line, Span};
use std::sync::Arc;

const DEFAULT_YEAR: &str = "2022";

/// Year selector with the entries of the selected year
pub struct TimelineSection {
    catalog: Arc<Catalog>,
    active: usize,
}

impl TimelineSection {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let years = &catalog.timeline;
        let active = years
            .iter()
            .position(|year| year.year == DEFAULT_YEAR)
            .unwrap_or_else(|| years.len().saturating_sub(1));
        Self { catalog, active }
    }

    pub fn active_year(&self) -> Option<&str> {
        self.catalog.timeline.get(self.active).map(|year| year.year.as_str())
    }
}

impl Section for TimelineSection {
    fn id(&self) -> SectionId {
        SectionId::Timeline
    }

    fn view(&self, width: u16, focused: Option<usize>, theme: &Theme) -> SectionView {
        let mut view = SectionView::default();
        if self.catalog.timeline.is_empty() {
            return view;
        }

        heading(&mut view, "Experience Journey", None, width, theme);

        // Year chips, wrapped across rows as needed
        let chips: Vec<String> = self
            .catalog
            .timeline
            .iter()
            .map(|year| format!(" {} ", year.year))
            .collect();
        let refs: Vec<&str> = chips.iter().map(String::as_str).collect();
        let mut index = 0;
        for row in text::pack(&refs, width as usize, 1) {
            let line = view.next_line();
            let mut spans = Vec::new();
            let mut column = 0u16;
            for chip in row {
                if !spans.is_empty() {
                    spans.push(Span::raw(" "));
                    column += 1;
                }
                let style = if index == self.active {
                    theme.selection_style()
                } else if focused == Some(index) {
                    theme.focused_border_style()
                } else {
                    theme.action_style()
                };
                let chip_width = text::width(chip) as u16;
                view.hotspots.push(Hotspot::inline(line, column, column + chip_width, index));
                spans.push(Span::styled(chip.to_string(), style));
                column += chip_width;
                index += 1;
            }
            view.push(Line::from(spans));
        }
        view.blank();

        if let Some(year) = self.catalog.timeline.get(self.active) {
            for entry in &year.entries {
                view.push(Line::from(vec![
                    Span::styled(format!(" {} ", entry.category), theme.timeline_badge(&entry.category)),
                    Span::raw(" "),
                    Span::styled(entry.title.clone(), theme.heading_style()),
                ]));
                indented(&mut view, &entry.description, 2, width, theme.muted_style());
            }
        }

        view
    }

    fn activate(&mut self, target: usize) -> Option<PageAction> {
        if target < self.catalog.timeline.len() {
            self.active = target;
        }
        None
    }
}
