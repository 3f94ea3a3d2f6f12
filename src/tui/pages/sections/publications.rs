use super::{button_row, heading, indented, row_style, tag_rows};
use crate::content::Catalog;
use crate::tui::{
    pages::{Hotspot, PageAction, Section, SectionId, SectionView},
    styles::Theme,
    utils::text,
};
use ratatui::text::{Line, Span};
use std::sync::Arc;

/// Publications listed before "View All Publications"
const COLLAPSED_COUNT: usize = 4;
const TOGGLE: usize = usize::MAX;

/// Publication list with a show-all toggle
pub struct PublicationsSection {
    catalog: Arc<Catalog>,
    show_all: bool,
}

impl PublicationsSection {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            show_all: false,
        }
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    fn visible_count(&self) -> usize {
        let total = self.catalog.publications.len();
        if self.show_all {
            total
        } else {
            total.min(COLLAPSED_COUNT)
        }
    }
}

impl Section for PublicationsSection {
    fn id(&self) -> SectionId {
        SectionId::Publications
    }

    fn view(&self, width: u16, focused: Option<usize>, theme: &Theme) -> SectionView {
        let mut view = SectionView::default();
        heading(&mut view, "Publications", None, width, theme);

        let publications = &self.catalog.publications[..self.visible_count()];
        for (index, publication) in publications.iter().enumerate() {
            let start = view.next_line();
            for row in text::wrap(&publication.title, width as usize) {
                view.push(Line::from(Span::styled(
                    row,
                    row_style(focused == Some(index), theme).patch(theme.heading_style()),
                )));
            }
            view.hotspots
                .push(Hotspot::span(start, view.next_line() - start, index));

            indented(&mut view, &publication.authors, 2, width, theme.text_style());
            indented(
                &mut view,
                &format!("{} ({})", publication.journal, publication.year),
                2,
                width,
                theme.muted_style(),
            );
            view.push(Line::from(vec![
                Span::raw("  DOI: "),
                Span::styled(publication.doi_url(), theme.link_style()),
            ]));
            tag_rows(&mut view, &publication.tags, 2, width, theme);
            view.blank();
        }

        if self.catalog.publications.len() > COLLAPSED_COUNT {
            let label = if self.show_all {
                "Show Less"
            } else {
                "View All Publications"
            };
            button_row(&mut view, &[(label, TOGGLE)], 0, 0, focused, theme);
        }

        view
    }

    fn activate(&mut self, target: usize) -> Option<PageAction> {
        if target == TOGGLE {
            self.show_all = !self.show_all;
            return None;
        }

        let publication = self.catalog.publications.get(target)?;
        Some(PageAction::OpenRecord(Arc::new(publication.to_record())))
    }
}

#[cfg(test)]
mod tests {
    use super::super::{catalog, plain};
    use super::*;
    use crate::content::Publication;

    fn with_publications(count: usize) -> Arc<Catalog> {
        let mut catalog = (*catalog()).clone();
        catalog.publications = (0..count)
            .map(|i| Publication {
                title: format!("Paper {}", i),
                journal: "Journal".to_string(),
                year: 2020 + i as u16,
                authors: "A. Author".to_string(),
                doi: format!("10.1/{}", i),
                tags: vec!["Ecology".to_string()],
            })
            .collect();
        Arc::new(catalog)
    }

    #[test]
    fn test_toggle_shows_all() {
        let mut section = PublicationsSection::new(with_publications(6));
        let theme = Theme::default();

        let rows = plain(&section.view(80, None, &theme));
        assert!(rows.iter().any(|row| row.contains("Paper 3")));
        assert!(!rows.iter().any(|row| row.contains("Paper 4")));
        assert!(rows.iter().any(|row| row.contains("View All Publications")));

        section.activate(TOGGLE);
        let rows = plain(&section.view(80, None, &theme));
        assert!(rows.iter().any(|row| row.contains("Paper 5")));
        assert!(rows.iter().any(|row| row.contains("Show Less")));
    }

    #[test]
    fn test_no_toggle_for_short_lists() {
        let section = PublicationsSection::new(with_publications(4));
        let view = section.view(80, None, &Theme::default());
        assert!(!view.hotspots.iter().any(|hotspot| hotspot.target == TOGGLE));
        assert_eq!(view.hotspots.len(), 4);
    }

    #[test]
    fn test_activation_opens_derived_record() {
        let mut section = PublicationsSection::new(catalog());
        let Some(PageAction::OpenRecord(record)) = section.activate(0) else {
            panic!("publication did not open");
        };
        assert_eq!(record.category(), Some("Publication"));
        assert_eq!(record.date, "2023");
        assert_eq!(
            record.external_link(),
            Some("https://doi.org/10.25077/jbioua.11.2.108-116.2023")
        );
        assert_eq!(section.activate(7), None);
    }
}
