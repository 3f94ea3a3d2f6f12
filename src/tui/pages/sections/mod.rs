//! Page sections, top to bottom

mod about;
mod contact;
mod footer;
mod gallery;
mod hero;
mod publications;
mod skills;
mod testimonials;
mod timeline;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::FooterSection;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use publications::PublicationsSection;
pub use skills::SkillsSection;
pub use testimonials::TestimonialsSection;
pub use timeline::TimelineSection;

use super::{Hotspot, SectionView};
use crate::tui::{styles::Theme, utils::text};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Section title with an optional lead paragraph underneath
fn heading(view: &mut SectionView, title: &str, lead: Option<&str>, width: u16, theme: &Theme) {
    view.blank();
    view.push(Line::from(Span::styled(title.to_string(), theme.heading_style())));
    view.push(Line::from(Span::styled(
        "─".repeat(text::width(title)),
        theme.border_style(),
    )));
    if let Some(lead) = lead {
        paragraph(view, lead, width, theme.muted_style());
    }
    view.blank();
}

fn subheading(view: &mut SectionView, title: &str, theme: &Theme) {
    view.push(Line::from(Span::styled(
        title.to_string(),
        theme.heading_style().fg(theme.border_focused),
    )));
}

/// Wrapped text, one line per row
fn paragraph(view: &mut SectionView, body: &str, width: u16, style: Style) {
    for row in text::wrap(body, width as usize) {
        view.push(Line::from(Span::styled(row, style)));
    }
}

/// Wrapped text with a hanging indent
fn indented(view: &mut SectionView, body: &str, indent: usize, width: u16, style: Style) {
    let pad = " ".repeat(indent);
    for row in text::wrap(body, (width as usize).saturating_sub(indent)) {
        view.push(Line::from(Span::styled(format!("{}{}", pad, row), style)));
    }
}

/// A focusable label rendered as `[ label ]`
fn button(label: &str, focused: bool, theme: &Theme) -> Span<'static> {
    let style = if focused {
        theme.selection_style()
    } else {
        theme.action_style()
    };
    Span::styled(format!("[ {} ]", label), style)
}

/// Style for a focusable row
fn row_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        theme.selection_style()
    } else {
        theme.text_style()
    }
}

/// Lay buttons out on one line separated by `gap` columns, each an inline hotspot
fn button_row(
    view: &mut SectionView,
    buttons: &[(&str, usize)],
    indent: u16,
    gap: u16,
    focused: Option<usize>,
    theme: &Theme,
) {
    let line = view.next_line();
    let mut spans = vec![Span::raw(" ".repeat(indent as usize))];
    let mut column = indent;

    for (i, (label, target)) in buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(gap as usize)));
            column += gap;
        }
        let span = button(label, focused == Some(*target), theme);
        let span_width = text::width(&span.content) as u16;
        view.hotspots.push(Hotspot::inline(line, column, column + span_width, *target));
        column += span_width;
        spans.push(span);
    }

    view.push(Line::from(spans));
}

/// Tags packed into rows
fn tag_rows(view: &mut SectionView, tags: &[String], indent: usize, width: u16, theme: &Theme) {
    let labels: Vec<String> = tags
        .iter()
        .filter(|tag| !tag.trim().is_empty())
        .map(|tag| format!(" {} ", tag))
        .collect();
    let refs: Vec<&str> = labels.iter().map(String::as_str).collect();

    for row in text::pack(&refs, (width as usize).saturating_sub(indent), 1) {
        let mut spans = vec![Span::raw(" ".repeat(indent))];
        for (i, label) in row.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(label.to_string(), theme.tag_style()));
        }
        view.push(Line::from(spans));
    }
}

/// Flatten a view to plain text rows
#[cfg(test)]
fn plain(view: &SectionView) -> Vec<String> {
    view.lines
        .iter()
        .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
        .collect()
}

#[cfg(test)]
fn catalog() -> std::sync::Arc<crate::content::Catalog> {
    std::sync::Arc::new(crate::content::Catalog::builtin().unwrap())
}
