use super::{heading, indented, subheading};
use crate::content::Catalog;
use crate::tui::{
    pages::{Section, SectionId, SectionView},
    styles::Theme,
};
use std::sync::Arc;

pub struct SkillsSection {
    catalog: Arc<Catalog>,
}

impl SkillsSection {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Section for SkillsSection {
    fn id(&self) -> SectionId {
        SectionId::Skills
    }

    fn view(&self, width: u16, _focused: Option<usize>, theme: &Theme) -> SectionView {
        let mut view = SectionView::default();
        heading(&mut view, "Expertise & Methodologies", None, width, theme);

        for group in &self.catalog.skills {
            subheading(&mut view, &group.title, theme);
            for item in &group.items {
                indented(&mut view, &format!("- {}", item), 2, width, theme.text_style());
            }
            view.blank();
        }

        view
    }
}
