use crate::content::Catalog;
use crate::tui::{
    pages::{Section, SectionId, SectionView},
    styles::Theme,
};
use chrono::Datelike;
use ratatui::text::{Line, Span};
use std::sync::Arc;

pub struct FooterSection {
    catalog: Arc<Catalog>,
    year: i32,
}

impl FooterSection {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            year: chrono::Local::now().year(),
        }
    }

    pub fn copyright(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.year, self.catalog.profile.name
        )
    }
}

impl Section for FooterSection {
    fn id(&self) -> SectionId {
        SectionId::Footer
    }

    fn view(&self, _width: u16, _focused: Option<usize>, theme: &Theme) -> SectionView {
        let mut view = SectionView::default();
        view.blank();
        view.push(Line::from(Span::styled(
            "─".repeat(8),
            theme.border_style(),
        )));
        view.push(Line::from(vec![
            Span::styled(self.catalog.profile.initials.clone(), theme.heading_style()),
            Span::raw("  "),
            Span::styled(self.copyright(), theme.muted_style()),
        ]));

        let channels: Vec<&str> = self
            .catalog
            .contact
            .channels
            .iter()
            .map(|channel| channel.label.as_str())
            .collect();
        if !channels.is_empty() {
            view.push(Line::from(Span::styled(channels.join("  |  "), theme.muted_style())));
        }
        view.blank();
        view
    }
}

#[cfg(test)]
mod tests {
    use super::super::catalog;
    use super::*;

    #[test]
    fn test_copyright_uses_current_year() {
        let footer = FooterSection::new(catalog());
        let year = chrono::Local::now().year();
        assert_eq!(
            footer.copyright(),
            format!("© {} Nurhayatul Hanifah. All rights reserved.", year)
        );
    }
}
