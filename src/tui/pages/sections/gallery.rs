use super::{button_row, heading, paragraph, tag_rows};
use crate::content::{Catalog, GalleryTab};
use crate::tui::{
    pages::{Hotspot, PageAction, Section, SectionId, SectionView},
    styles::Theme,
    utils::text,
};
use ratatui::text::{Line, Span};
use std::sync::Arc;

/// Hotspot targets at or above this value select a tab; below it they index
/// `Catalog::projects`
const TAB_TARGET: usize = usize::MAX - 8;

/// Tabbed grid of project cards
pub struct GallerySection {
    catalog: Arc<Catalog>,
    tab: GalleryTab,
}

impl GallerySection {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            tab: GalleryTab::default(),
        }
    }

    pub fn tab(&self) -> GalleryTab {
        self.tab
    }

    fn tab_bar(&self, view: &mut SectionView, focused: Option<usize>, theme: &Theme) {
        let line = view.next_line();
        let mut spans = Vec::new();
        let mut column = 0u16;

        for (i, tab) in GalleryTab::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
                column += 2;
            }
            let label = format!(" {} ", tab.label());
            let style = if *tab == self.tab {
                theme.selection_style()
            } else if focused == Some(TAB_TARGET + i) {
                theme.focused_border_style()
            } else {
                theme.action_style()
            };
            let label_width = text::width(&label) as u16;
            view.hotspots
                .push(Hotspot::inline(line, column, column + label_width, TAB_TARGET + i));
            spans.push(Span::styled(label, style));
            column += label_width;
        }

        view.push(Line::from(spans));
    }
}

impl Section for GallerySection {
    fn id(&self) -> SectionId {
        SectionId::Portfolio
    }

    fn view(&self, width: u16, focused: Option<usize>, theme: &Theme) -> SectionView {
        let mut view = SectionView::default();

        heading(&mut view, "My Portfolio", None, width, theme);
        self.tab_bar(&mut view, focused, theme);
        view.blank();

        let mut empty = true;
        for (index, card) in self.catalog.projects_in(self.tab) {
            empty = false;
            let record = &card.record;

            let mut meta = Vec::new();
            if let Some(category) = record.category() {
                meta.push(Span::styled(format!(" {} ", category), theme.category_badge(category)));
                meta.push(Span::raw(" "));
            }
            meta.push(Span::styled(record.date.clone(), theme.muted_style()));
            view.push(Line::from(meta));

            paragraph(&mut view, &record.title, width, theme.heading_style());
            if let Some(summary) = record.summary() {
                paragraph(&mut view, summary, width, theme.text_style());
            }
            if record.has_tags() {
                tag_rows(&mut view, &record.tags, 0, width, theme);
            }

            let mut footer = Vec::new();
            if let Some(location) = record.location() {
                footer.push(Span::styled(format!("@ {}", location), theme.muted_style()));
            }
            if let Some(count) = card.collaborators {
                if !footer.is_empty() {
                    footer.push(Span::raw("   "));
                }
                footer.push(Span::styled(format!("{} collaborators", count), theme.muted_style()));
            }
            if !footer.is_empty() {
                view.push(Line::from(footer));
            }

            if card.details {
                button_row(&mut view, &[("View Details", index)], 0, 0, focused, theme);
            }
            view.blank();
        }

        if empty {
            view.push(Line::from(Span::styled(
                "Nothing here yet.",
                theme.placeholder_style(),
            )));
        }

        view
    }

    fn activate(&mut self, target: usize) -> Option<PageAction> {
        if target >= TAB_TARGET {
            if let Some(tab) = GalleryTab::ALL.get(target - TAB_TARGET) {
                self.tab = *tab;
            }
            return None;
        }

        let card = self.catalog.projects.get(target)?;
        if !card.details {
            return None;
        }
        Some(PageAction::OpenRecord(Arc::clone(&card.record)))
    }
}
