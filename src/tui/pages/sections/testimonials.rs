use super::{heading, indented};
use crate::content::Catalog;
use crate::tui::{
    pages::{Section, SectionId, SectionView},
    styles::Theme,
};
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use std::sync::Arc;

pub struct TestimonialsSection {
    catalog: Arc<Catalog>,
}

impl TestimonialsSection {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Section for TestimonialsSection {
    fn id(&self) -> SectionId {
        SectionId::Testimonials
    }

    fn view(&self, width: u16, _focused: Option<usize>, theme: &Theme) -> SectionView {
        let mut view = SectionView::default();
        if self.catalog.testimonials.is_empty() {
            return view;
        }

        heading(&mut view, "Collaborator Testimonials", None, width, theme);
        for testimonial in &self.catalog.testimonials {
            view.push(Line::from(vec![
                Span::styled(testimonial.author.clone(), theme.heading_style()),
                Span::styled(format!(", {}", testimonial.affiliation), theme.muted_style()),
            ]));
            indented(
                &mut view,
                &format!("\"{}\"", testimonial.quote),
                2,
                width,
                theme.text_style().add_modifier(Modifier::ITALIC),
            );
            view.blank();
        }

        view
    }
}
