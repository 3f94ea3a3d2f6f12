use super::button_row;
use crate::content::Catalog;
use crate::tui::{
    pages::{PageAction, Section, SectionId, SectionView},
    styles::Theme,
    utils::text,
};
use ratatui::text::{Line, Span};
use std::sync::Arc;

const DISCOVER: usize = 0;
const CONNECT: usize = 1;

/// Name, roles and headline counters
pub struct HeroSection {
    catalog: Arc<Catalog>,
}

impl HeroSection {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Section for HeroSection {
    fn id(&self) -> SectionId {
        SectionId::Hero
    }

    fn view(&self, width: u16, focused: Option<usize>, theme: &Theme) -> SectionView {
        let profile = &self.catalog.profile;
        let mut view = SectionView::default();

        view.blank();
        view.push(Line::from(Span::styled(
            profile.name.clone(),
            theme.heading_style(),
        )));
        if !profile.roles.is_empty() {
            for row in text::wrap(&profile.roles.join(" | "), width as usize) {
                view.push(Line::from(Span::styled(row, theme.text_style())));
            }
        }
        view.push(Line::from(vec![
            Span::styled("@ ", theme.muted_style()),
            Span::styled(profile.location.clone(), theme.muted_style()),
        ]));
        view.blank();

        button_row(
            &mut view,
            &[("Discover My Work", DISCOVER), ("Connect", CONNECT)],
            0,
            2,
            focused,
            theme,
        );
        view.blank();

        if !profile.stats.is_empty() {
            let cells: Vec<String> = profile
                .stats
                .iter()
                .map(|stat| format!("{} {}", stat.value, stat.label))
                .collect();
            let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
            for row in text::pack(&refs, width as usize, 4) {
                let mut spans = Vec::new();
                for (i, cell) in row.into_iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw("    "));
                    }
                    let (value, label) = cell.split_once(' ').unwrap_or((cell, ""));
                    spans.push(Span::styled(value.to_string(), theme.heading_style()));
                    spans.push(Span::styled(format!(" {}", label), theme.muted_style()));
                }
                view.push(Line::from(spans));
            }
        }

        view
    }

    fn activate(&mut self, target: usize) -> Option<PageAction> {
        match target {
            DISCOVER => Some(PageAction::JumpTo(SectionId::About)),
            CONNECT => Some(PageAction::JumpTo(SectionId::Contact)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{catalog, plain};
    use super::*;

    #[test]
    fn test_hero_buttons_jump() {
        let mut hero = HeroSection::new(catalog());
        let view = hero.view(80, None, &Theme::default());

        let rows = plain(&view);
        assert!(rows.iter().any(|row| row.contains("Nurhayatul Hanifah")));
        assert!(rows.iter().any(|row| row.contains("[ Discover My Work ]  [ Connect ]")));
        assert_eq!(view.hotspots.len(), 2);

        assert_eq!(hero.activate(DISCOVER), Some(PageAction::JumpTo(SectionId::About)));
        assert_eq!(hero.activate(CONNECT), Some(PageAction::JumpTo(SectionId::Contact)));
        assert_eq!(hero.activate(9), None);
    }
}
