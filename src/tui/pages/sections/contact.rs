use super::{button_row, heading, indented, paragraph, subheading};
use crate::contact::{ContactField, ContactForm, FormEndpoint};
use crate::content::Catalog;
use crate::tui::{
    pages::{Hotspot, PageAction, Section, SectionId, SectionView},
    styles::Theme,
    utils::text,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};
use std::sync::Arc;
use tracing::{debug, info};

const SEND: usize = 100;
const CHANNEL: usize = 200;
const MESSAGE_ROWS: usize = 3;

/// Research interests, contact channels and the contact form
pub struct ContactSection {
    catalog: Arc<Catalog>,
    endpoint: FormEndpoint,
    form: ContactForm,
    editing: Option<ContactField>,
}

impl ContactSection {
    pub fn new(catalog: Arc<Catalog>, endpoint: FormEndpoint) -> Self {
        Self {
            catalog,
            endpoint,
            form: ContactForm::default(),
            editing: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn editing(&self) -> Option<ContactField> {
        self.editing
    }

    /// Subject values in cycle order, starting with "no subject"
    fn subject_values(&self) -> Vec<&str> {
        std::iter::once("")
            .chain(self.catalog.contact.subjects.iter().map(|s| s.value.as_str()))
            .collect()
    }

    fn cycle_subject(&mut self) {
        let values = self.subject_values();
        let current = values
            .iter()
            .position(|value| *value == self.form.subject)
            .unwrap_or(0);
        let next = values[(current + 1) % values.len()].to_string();
        self.form.subject = next;
    }

    fn subject_label(&self) -> Option<&str> {
        if self.form.subject.is_empty() {
            return None;
        }
        self.catalog
            .contact
            .subjects
            .iter()
            .find(|s| s.value == self.form.subject)
            .map(|s| s.label.as_str())
            .or(Some(self.form.subject.as_str()))
    }

    fn submit(&self) -> PageAction {
        match self.form.submission_url(&self.endpoint) {
            Ok(url) => {
                info!("Contact form handed off to {}", self.endpoint.url);
                PageAction::OpenUrl(url)
            }
            Err(e) => PageAction::Status(e.to_string()),
        }
    }

    fn field_rows(&self, field: ContactField, width: u16) -> Vec<String> {
        let editing = self.editing == Some(field);
        let value = match field {
            ContactField::Subject => self.subject_label().unwrap_or("").to_string(),
            _ => self.form.field(field).to_string(),
        };
        let inner = (width as usize).saturating_sub(4).max(1);

        let mut rows = if value.is_empty() {
            vec![String::new()]
        } else {
            text::wrap(&value, inner)
        };
        if editing {
            if let Some(last) = rows.last_mut() {
                last.push('_');
            }
        }
        if field == ContactField::Message {
            while rows.len() < MESSAGE_ROWS {
                rows.push(String::new());
            }
        }
        rows
    }
}

impl Section for ContactSection {
    fn id(&self) -> SectionId {
        SectionId::Contact
    }

    fn view(&self, width: u16, focused: Option<usize>, theme: &Theme) -> SectionView {
        let contact = &self.catalog.contact;
        let mut view = SectionView::default();

        heading(&mut view, "Connect & Collaborate", Some(&contact.intro), width, theme);

        if !contact.interests.is_empty() {
            subheading(&mut view, "Research Interests", theme);
            for interest in &contact.interests {
                indented(&mut view, &format!("- {}", interest), 2, width, theme.text_style());
            }
            view.blank();
        }

        for (i, channel) in contact.channels.iter().enumerate() {
            let style = if focused == Some(CHANNEL + i) {
                theme.selection_style()
            } else {
                theme.link_style()
            };
            view.push_hotspot(
                Line::from(vec![
                    Span::styled(format!("{}: ", channel.label), theme.muted_style()),
                    Span::styled(channel.value.clone(), style),
                ]),
                CHANNEL + i,
            );
        }
        if !contact.channels.is_empty() {
            view.blank();
        }

        subheading(&mut view, "Send a Message", theme);
        for (index, field) in ContactField::ALL.iter().copied().enumerate() {
            let hint = match field {
                ContactField::Subject => " (Enter to change)",
                ContactField::Message => " (Alt+Enter for a new line)",
                _ => "",
            };
            view.push(Line::from(vec![
                Span::styled(field.label().to_string(), theme.text_style()),
                Span::styled(hint.to_string(), theme.muted_style()),
            ]));

            let rows = self.field_rows(field, width);
            let start = view.next_line();
            let is_empty = match field {
                ContactField::Subject => self.form.subject.is_empty(),
                _ => self.form.field(field).is_empty(),
            };
            let style = if self.editing == Some(field) || focused == Some(index) {
                theme.focused_border_style()
            } else {
                theme.border_style()
            };
            for (i, row) in rows.iter().enumerate() {
                let content = if i == 0 && is_empty && self.editing != Some(field) {
                    Span::styled(field.placeholder().to_string(), theme.placeholder_style())
                } else {
                    Span::styled(row.clone(), theme.text_style())
                };
                view.push(Line::from(vec![Span::styled("| ", style), content]));
            }
            view.hotspots.push(Hotspot::span(start, rows.len(), index));
        }
        view.blank();

        button_row(&mut view, &[("Send Message", SEND)], 0, 0, focused, theme);
        paragraph(
            &mut view,
            "Opens the message in your browser.",
            width,
            theme.muted_style(),
        );

        view
    }

    fn activate(&mut self, target: usize) -> Option<PageAction> {
        if target == SEND {
            self.editing = None;
            return Some(self.submit());
        }
        if target >= CHANNEL {
            let channel = self.catalog.contact.channels.get(target - CHANNEL)?;
            return Some(PageAction::OpenUrl(channel.url.clone()));
        }

        match ContactField::ALL.get(target).copied()? {
            ContactField::Subject => {
                self.editing = None;
                self.cycle_subject();
            }
            field => {
                debug!("Editing contact field {:?}", field);
                self.editing = Some(field);
            }
        }
        None
    }

    fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Option<PageAction> {
        let field = self.editing?;

        match key.code {
            KeyCode::Esc => self.editing = None,
            KeyCode::Enter
                if field == ContactField::Message && key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.form.field_mut(field).push('\n');
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => self.editing = None,
            KeyCode::Backspace => {
                self.form.field_mut(field).pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.field_mut(field).push(c);
            }
            _ => {}
        }
        None
    }

    fn handle_paste(&mut self, pasted: &str) {
        let Some(field) = self.editing else {
            return;
        };
        let value = self.form.field_mut(field);
        if field == ContactField::Message {
            value.push_str(pasted);
        } else {
            value.extend(pasted.chars().filter(|c| *c != '\n' && *c != '\r'));
        }
    }
}
