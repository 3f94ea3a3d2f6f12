use super::{button_row, heading, indented, paragraph, row_style, subheading};
use crate::content::Catalog;
use crate::tui::{
    pages::{PageAction, Section, SectionId, SectionView},
    styles::Theme,
};
use ratatui::text::{Line, Span};
use std::sync::Arc;

const DOWNLOAD_CV: usize = usize::MAX;

/// Biography, credentials and the focus accordion
pub struct AboutSection {
    catalog: Arc<Catalog>,
    /// Open accordion panel; at most one
    expanded: Option<usize>,
}

impl AboutSection {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            expanded: None,
        }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Open panel `index`, closing any other; toggling the open one closes it
    pub fn toggle(&mut self, index: usize) {
        if index >= self.catalog.profile.focus.len() {
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

impl Section for AboutSection {
    fn id(&self) -> SectionId {
        SectionId::About
    }

    fn view(&self, width: u16, focused: Option<usize>, theme: &Theme) -> SectionView {
        let profile = &self.catalog.profile;
        let mut view = SectionView::default();

        heading(&mut view, "About Me", None, width, theme);
        subheading(&mut view, &profile.headline, theme);
        view.blank();

        for (i, bio) in profile.bio.iter().enumerate() {
            if i > 0 {
                view.blank();
            }
            paragraph(&mut view, bio, width, theme.text_style());
        }

        if !profile.credentials.is_empty() {
            view.blank();
            for credential in &profile.credentials {
                view.push(Line::from(vec![
                    Span::styled("* ", theme.muted_style()),
                    Span::styled(credential.title.clone(), theme.heading_style()),
                    Span::styled(format!(", {}", credential.subtitle), theme.muted_style()),
                ]));
            }
        }

        if !profile.focus.is_empty() {
            view.blank();
            for (i, item) in profile.focus.iter().enumerate() {
                let open = self.expanded == Some(i);
                let marker = if open { "v " } else { "> " };
                view.push_hotspot(
                    Line::from(Span::styled(
                        format!("{}{}", marker, item.title),
                        row_style(focused == Some(i), theme),
                    )),
                    i,
                );
                if open {
                    indented(&mut view, &item.body, 2, width, theme.muted_style());
                }
            }
        }

        if profile.cv_url().is_some() {
            view.blank();
            button_row(&mut view, &[("Download CV", DOWNLOAD_CV)], 0, 0, focused, theme);
        }

        view
    }

    fn activate(&mut self, target: usize) -> Option<PageAction> {
        if target == DOWNLOAD_CV {
            return self.catalog.profile.cv_url().map(PageAction::OpenUrl);
        }
        self.toggle(target);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::{catalog, plain};
    use super::*;

    #[test]
    fn test_accordion_single_and_collapsible() {
        let mut about = AboutSection::new(catalog());
        assert_eq!(about.expanded(), None);

        about.activate(0);
        assert_eq!(about.expanded(), Some(0));

        about.activate(1);
        assert_eq!(about.expanded(), Some(1));

        about.activate(1);
        assert_eq!(about.expanded(), None);

        about.activate(42);
        assert_eq!(about.expanded(), None);
    }

    #[test]
    fn test_expanded_panel_shows_body() {
        let mut about = AboutSection::new(catalog());
        let theme = Theme::default();
        let closed = plain(&about.view(80, None, &theme));
        assert!(!closed.iter().any(|row| row.contains("Andalas University (2023)")));

        about.activate(1);
        let open = plain(&about.view(80, None, &theme));
        assert!(open.iter().any(|row| row == "v Academic Background"));
        assert!(open.iter().any(|row| row.contains("Andalas University (2023)")));
    }

    #[test]
    fn test_cv_button_opens_absolute_url() {
        let mut about = AboutSection::new(catalog());
        let Some(PageAction::OpenUrl(url)) = about.activate(DOWNLOAD_CV) else {
            panic!("download cv did not produce a url");
        };
        assert_eq!(url, "https://nurhayatulhanifah.com/cv.pdf");
        let parsed = reqwest::Url::parse(&url).unwrap();
        assert!(matches!(parsed.scheme(), "http" | "https"));
    }

    #[test]
    fn test_cv_button_hidden_without_absolute_url() {
        let mut catalog = (*catalog()).clone();
        catalog.profile.site_url = None;
        let mut about = AboutSection::new(Arc::new(catalog));
        let theme = Theme::default();

        let rows = plain(&about.view(80, None, &theme));
        assert!(!rows.iter().any(|row| row.contains("Download CV")));
        assert_eq!(about.activate(DOWNLOAD_CV), None);
    }
}
