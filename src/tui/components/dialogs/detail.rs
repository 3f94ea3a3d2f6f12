//! Detail dialog for portfolio records
//!
//! Shows one [`DisplayRecord`] in a modal overlay. The dialog has two states,
//! `Closed` and `Open`. Everything it holds while open (the record, the page
//! scroll lock, the escape and outside-press listeners) lives in a single
//! session value, so leaving `Open` by any path, including dropping the
//! dialog, releases all of it at once.

use super::{
    scroll_lock::{ScrollLock, ScrollLockGuard},
    subscription::{InputRouter, Listener, Subscription},
    types::*,
};
use crate::content::DisplayRecord;
use crate::tui::{
    components::Component,
    events::Event,
    styles::Theme,
    utils::{layout, text},
    Frame,
};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

const CLOSE_CONTROL: &str = "[x]";

/// Kind of link offered by a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    LearnMore,
    Download,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::LearnMore => "Learn More",
            LinkKind::Download => "Download",
        }
    }

    /// Key that opens the link while the dialog is open
    pub fn key(self) -> char {
        match self {
            LinkKind::LearnMore => 'l',
            LinkKind::Download => 'd',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLink<'a> {
    pub kind: LinkKind,
    pub url: &'a str,
}

/// What the dialog shows for a record, with absent fields already dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView<'a> {
    pub image: Option<&'a str>,
    pub title: &'a str,
    pub date: &'a str,
    pub location: Option<&'a str>,
    pub body: Option<&'a str>,
    pub links: Vec<DetailLink<'a>>,
    pub category: Option<&'a str>,
    pub tags: Vec<&'a str>,
}

impl<'a> DetailView<'a> {
    pub fn from_record(record: &'a DisplayRecord) -> Self {
        let mut links = Vec::new();
        if let Some(url) = record.external_link() {
            links.push(DetailLink {
                kind: LinkKind::LearnMore,
                url,
            });
        }
        if let Some(url) = record.download_link() {
            links.push(DetailLink {
                kind: LinkKind::Download,
                url,
            });
        }

        Self {
            image: record.image_url(),
            title: &record.title,
            date: &record.date,
            location: record.location(),
            body: record.body(),
            links,
            category: record.category(),
            tags: record.tags().collect(),
        }
    }

    pub fn link(&self, kind: LinkKind) -> Option<&'a str> {
        self.links.iter().find(|link| link.kind == kind).map(|link| link.url)
    }

    /// Lay the view out as lines no wider than `width`
    pub fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let width = width.max(1) as usize;
        let mut lines = Vec::new();

        // No pixels in a terminal; the image is listed by location
        if let Some(image) = self.image {
            lines.push(Line::from(vec![
                Span::styled("Image: ", theme.muted_style()),
                Span::styled(image.to_string(), theme.link_style()),
            ]));
        }

        if let Some(category) = self.category {
            lines.push(Line::from(Span::styled(
                format!(" {} ", category),
                theme.category_badge(category),
            )));
            lines.push(Line::default());
        }

        for row in text::wrap(self.title, width) {
            lines.push(Line::from(Span::styled(row, theme.heading_style())));
        }

        let mut meta = vec![
            Span::styled("Date: ", theme.muted_style()),
            Span::styled(self.date.to_string(), theme.text_style()),
        ];
        if let Some(location) = self.location {
            meta.push(Span::styled("   Location: ", theme.muted_style()));
            meta.push(Span::styled(location.to_string(), theme.text_style()));
        }
        lines.push(Line::from(meta));

        if let Some(body) = self.body {
            lines.push(Line::default());
            lines.extend(
                text::wrap(body, width)
                    .into_iter()
                    .map(|row| Line::from(Span::styled(row, theme.text_style()))),
            );
        }

        if !self.links.is_empty() {
            lines.push(Line::default());
            for link in &self.links {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("[{}] {}", link.kind.key(), link.kind.label()),
                        theme.action_style(),
                    ),
                    Span::raw("  "),
                    Span::styled(link.url.to_string(), theme.link_style()),
                ]));
            }
        }

        if !self.tags.is_empty() {
            lines.push(Line::default());
            let labels: Vec<String> = self.tags.iter().map(|tag| format!(" {} ", tag)).collect();
            let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            for row in text::pack(&label_refs, width, 1) {
                let mut spans = Vec::new();
                for (i, label) in row.into_iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    spans.push(Span::styled(label.to_string(), theme.tag_style()));
                }
                lines.push(Line::from(spans));
            }
        }

        lines
    }
}

/// Everything held while the dialog is open
struct OpenSession {
    record: Arc<DisplayRecord>,
    body_scroll: u16,
    _scroll_guard: ScrollLockGuard,
    _listeners: Vec<Subscription>,
}

/// Modal overlay showing one portfolio record
pub struct DetailDialog {
    /// Dialog configuration
    config: DialogConfig,

    /// Layout of the last render or resize
    layout: DialogLayout,

    /// Present exactly while open
    session: Option<OpenSession>,

    /// Page scroll lock taken while open
    scroll_lock: ScrollLock,

    /// Where escape/outside-press listeners are registered
    router: InputRouter,

    /// Receives `Event::DialogClosed` and `Event::OpenUrl`
    event_sender: Option<mpsc::UnboundedSender<Event>>,

    /// Line count of the laid-out body, for scroll clamping
    content_lines: u16,
}

impl DetailDialog {
    pub fn new(scroll_lock: ScrollLock, router: InputRouter) -> Self {
        let config = DialogConfig::default()
            .with_title(" Details ")
            .with_size_percent(70, 80)
            .closable(true)
            .close_on_outside_click(true);

        Self {
            config,
            layout: DialogLayout::default(),
            session: None,
            scroll_lock,
            router,
            event_sender: None,
            content_lines: 0,
        }
    }

    /// Set the event sender for this dialog
    pub fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<Event>) {
        self.event_sender = Some(sender);
    }

    /// Show `record`. `None` leaves the dialog untouched. Opening while
    /// already open swaps the record and keeps the existing lock and
    /// listeners.
    pub fn open(&mut self, record: Option<Arc<DisplayRecord>>) -> DialogResult<()> {
        let Some(record) = record else {
            debug!("Ignoring open request without a record");
            return Ok(());
        };

        if let Some(session) = self.session.as_mut() {
            debug!("Replacing dialog record with '{}'", record.title);
            session.record = record;
            session.body_scroll = 0;
            return Ok(());
        }

        let scroll_guard = self.scroll_lock.acquire().ok_or(DialogError::ScrollLockHeld)?;

        let mut listeners = Vec::new();
        if self.config.closable {
            listeners.push(self.router.subscribe(Listener::EscapeKey));
        }
        if self.config.close_on_outside_click {
            listeners.push(self.router.subscribe(Listener::PointerDownOutside));
        }

        debug!("Opening dialog for '{}'", record.title);
        self.session = Some(OpenSession {
            record,
            body_scroll: 0,
            _scroll_guard: scroll_guard,
            _listeners: listeners,
        });
        self.content_lines = 0;

        Ok(())
    }

    /// Close the dialog. Safe to call when already closed.
    pub fn close(&mut self) {
        self.dismiss(DismissTrigger::Explicit);
    }

    /// Close in response to `trigger`. Returns whether the dialog was open.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };

        debug!("Closing dialog for '{}' via {:?}", session.record.title, trigger);
        drop(session);

        if let Some(sender) = &self.event_sender {
            let _ = sender.send(Event::DialogClosed(trigger));
        }
        true
    }

    pub fn active_record(&self) -> Option<&Arc<DisplayRecord>> {
        self.session.as_ref().map(|session| &session.record)
    }

    pub fn layout(&self) -> &DialogLayout {
        &self.layout
    }

    /// Screen cell range of the close control in the top border
    pub fn close_control_area(&self) -> Rect {
        let area = self.layout.dialog_area;
        let width = CLOSE_CONTROL.len() as u16;
        Rect {
            x: (area.x + area.width).saturating_sub(width + 2).max(area.x),
            y: area.y,
            width: width.min(area.width),
            height: if area.height > 0 { 1 } else { 0 },
        }
    }

    pub fn body_scroll(&self) -> u16 {
        self.session.as_ref().map_or(0, |session| session.body_scroll)
    }

    fn scroll_body(&mut self, delta: i32) {
        let visible = self.layout.content_area.height;
        let max = self.content_lines.saturating_sub(visible);
        if let Some(session) = self.session.as_mut() {
            let next = (session.body_scroll as i32 + delta).clamp(0, max as i32);
            session.body_scroll = next as u16;
        }
    }

    fn request_link(&self, kind: LinkKind) {
        let Some(record) = self.active_record() else {
            return;
        };
        let url = match kind {
            LinkKind::LearnMore => record.external_link(),
            LinkKind::Download => record.download_link(),
        };
        if let (Some(url), Some(sender)) = (url, &self.event_sender) {
            let _ = sender.send(Event::OpenUrl(url.to_string()));
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if !self.is_open() {
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) if self.router.is_listening(Listener::EscapeKey) => {
                self.dismiss(DismissTrigger::Escape);
            }
            (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.dismiss(DismissTrigger::CloseControl);
            }
            (KeyCode::Up | KeyCode::Char('k'), _) => self.scroll_body(-1),
            (KeyCode::Down | KeyCode::Char('j'), _) => self.scroll_body(1),
            (KeyCode::PageUp, _) => self.scroll_body(-(self.layout.content_area.height.max(1) as i32)),
            (KeyCode::PageDown, _) => self.scroll_body(self.layout.content_area.height.max(1) as i32),
            (KeyCode::Char(c), KeyModifiers::NONE) if c == LinkKind::LearnMore.key() => {
                self.request_link(LinkKind::LearnMore)
            }
            (KeyCode::Char(c), KeyModifiers::NONE) if c == LinkKind::Download.key() => {
                self.request_link(LinkKind::Download)
            }
            _ => {}
        }
    }

    fn on_mouse(&mut self, event: MouseEvent) {
        if !self.is_open() {
            return;
        }

        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(_) => {
                if layout::contains(self.close_control_area(), x, y) {
                    self.dismiss(DismissTrigger::CloseControl);
                } else if !self.layout.contains_point(x, y)
                    && self.router.is_listening(Listener::PointerDownOutside)
                {
                    self.dismiss(DismissTrigger::OutsideClick);
                }
            }
            MouseEventKind::ScrollUp if self.layout.contains_point(x, y) => self.scroll_body(-1),
            MouseEventKind::ScrollDown if self.layout.contains_point(x, y) => self.scroll_body(1),
            _ => {}
        }
    }
}

#[async_trait]
impl Component for DetailDialog {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        self.on_key(event);
        Ok(())
    }

    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<()> {
        self.on_mouse(event);
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.is_open() {
            return;
        }

        self.set_size(area);
        let layout = self.layout;

        if self.config.dim_background {
            frame.buffer_mut().set_style(area, theme.backdrop_style());
        }
        frame.render_widget(Clear, layout.dialog_area);
        self.render_chrome(frame, layout.dialog_area, theme);

        let close_area = self.close_control_area();
        frame.render_widget(
            Paragraph::new(CLOSE_CONTROL).style(theme.action_style()),
            close_area,
        );

        self.render_content(frame, layout.content_area, theme);
    }

    fn set_size(&mut self, size: Rect) {
        self.layout = DialogLayout::calculate(&self.config, size);
    }
}

impl Dialog for DetailDialog {
    fn config(&self) -> &DialogConfig {
        &self.config
    }

    fn state(&self) -> DialogState {
        if self.session.is_some() {
            DialogState::Open
        } else {
            DialogState::Closed
        }
    }

    fn render_content(&mut self, frame: &mut Frame, content_area: Rect, theme: &Theme) {
        let Some(record) = self.active_record().cloned() else {
            return;
        };

        // One column of padding on each side
        let inner = Rect {
            x: content_area.x + 1,
            y: content_area.y,
            width: content_area.width.saturating_sub(2),
            height: content_area.height,
        };

        let lines = DetailView::from_record(&record).lines(inner.width, theme);
        self.content_lines = lines.len().min(u16::MAX as usize) as u16;
        self.scroll_body(0);

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.background_alt))
            .scroll((self.body_scroll(), 0));
        frame.render_widget(paragraph, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseButton};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    fn dialog() -> (DetailDialog, ScrollLock, InputRouter) {
        let lock = ScrollLock::new();
        let router = InputRouter::new();
        let mut dialog = DetailDialog::new(lock.clone(), router.clone());
        dialog.set_size(screen());
        (dialog, lock, router)
    }

    fn record(title: &str, date: &str) -> Arc<DisplayRecord> {
        Arc::new(DisplayRecord::new(title, date))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn render_text(dialog: &mut DetailDialog) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| {
                let area = frame.size();
                dialog.render(frame, area, &theme)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol.as_str());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_open_sets_state() {
        let (mut dialog, lock, _) = dialog();
        let r = record("X", "2020");

        dialog.open(Some(Arc::clone(&r))).unwrap();

        assert!(dialog.is_open());
        assert!(Arc::ptr_eq(dialog.active_record().unwrap(), &r));
        assert!(lock.is_locked());
    }

    #[test]
    fn test_open_none_is_noop() {
        let (mut dialog, lock, router) = dialog();

        dialog.open(None).unwrap();

        assert_eq!(dialog.state(), DialogState::Closed);
        assert!(dialog.active_record().is_none());
        assert!(!lock.is_locked());
        assert!(router.is_empty());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let (mut dialog, lock, _) = dialog();
        let (tx, mut rx) = mpsc::unbounded_channel();
        dialog.set_event_sender(tx);

        dialog.close();

        assert!(!dialog.is_open());
        assert_eq!(lock.releases(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_double_dismiss_notifies_once() {
        let (mut dialog, lock, _) = dialog();
        let (tx, mut rx) = mpsc::unbounded_channel();
        dialog.set_event_sender(tx);
        dialog.open(Some(record("X", "2020"))).unwrap();

        assert!(dialog.dismiss(DismissTrigger::Escape));
        assert!(!dialog.dismiss(DismissTrigger::OutsideClick));

        assert!(matches!(rx.try_recv(), Ok(Event::DialogClosed(DismissTrigger::Escape))));
        assert!(rx.try_recv().is_err());
        assert_eq!(lock.releases(), 1);
    }

    #[tokio::test]
    async fn test_escape_closes() {
        let (mut dialog, lock, router) = dialog();
        dialog.open(Some(record("X", "2020"))).unwrap();
        assert!(router.is_listening(Listener::EscapeKey));

        dialog.handle_key_event(key(KeyCode::Esc)).await.unwrap();

        assert!(!dialog.is_open());
        assert!(!lock.is_locked());
        assert!(router.is_empty());
    }

    #[tokio::test]
    async fn test_outside_press_closes() {
        let (mut dialog, lock, router) = dialog();
        dialog.open(Some(record("X", "2020"))).unwrap();

        // Inside the dialog body: stays open
        let area = dialog.layout().content_area;
        dialog.handle_mouse_event(press(area.x + 2, area.y + 2)).await.unwrap();
        assert!(dialog.is_open());

        dialog.handle_mouse_event(press(0, 0)).await.unwrap();
        assert!(!dialog.is_open());
        assert!(!lock.is_locked());
        assert!(router.is_empty());
    }

    #[tokio::test]
    async fn test_close_control_closes() {
        let (mut dialog, lock, _) = dialog();
        let (tx, mut rx) = mpsc::unbounded_channel();
        dialog.set_event_sender(tx);
        dialog.open(Some(record("X", "2020"))).unwrap();

        let control = dialog.close_control_area();
        assert!(dialog.layout().contains_point(control.x, control.y));
        dialog.handle_mouse_event(press(control.x + 1, control.y)).await.unwrap();

        assert!(!dialog.is_open());
        assert!(!lock.is_locked());
        assert!(matches!(rx.try_recv(), Ok(Event::DialogClosed(DismissTrigger::CloseControl))));
    }

    #[tokio::test]
    async fn test_close_key_closes() {
        let (mut dialog, _, _) = dialog();
        dialog.open(Some(record("X", "2020"))).unwrap();

        dialog.handle_key_event(key(KeyCode::Char('q'))).await.unwrap();
        assert!(!dialog.is_open());
    }

    #[tokio::test]
    async fn test_input_ignored_while_closed() {
        let (mut dialog, lock, _) = dialog();

        dialog.handle_key_event(key(KeyCode::Esc)).await.unwrap();
        dialog.handle_mouse_event(press(0, 0)).await.unwrap();

        assert!(!dialog.is_open());
        assert_eq!(lock.acquisitions(), 0);
    }

    #[test]
    fn test_lock_balanced_over_sequences() {
        let (mut dialog, lock, router) = dialog();
        let triggers = [
            DismissTrigger::Explicit,
            DismissTrigger::Escape,
            DismissTrigger::OutsideClick,
            DismissTrigger::CloseControl,
        ];

        let mut entries = 0;
        for (i, trigger) in triggers.iter().cycle().take(12).enumerate() {
            let was_open = dialog.is_open();
            dialog.open(Some(record("A", "2020"))).unwrap();
            if !was_open {
                entries += 1;
            }
            if i % 3 != 2 {
                dialog.open(Some(record("B", "2021"))).unwrap();
            }
            assert_eq!(lock.acquisitions(), entries);
            assert_eq!(lock.releases(), entries - 1);

            if i % 2 == 0 {
                dialog.dismiss(*trigger);
                dialog.close();
                assert_eq!(lock.releases(), entries);
                assert!(router.is_empty());
            }
        }

        dialog.close();
        assert_eq!(lock.acquisitions(), lock.releases());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_drop_while_open_releases() {
        let (mut dialog, lock, router) = dialog();
        dialog.open(Some(record("X", "2020"))).unwrap();
        assert!(lock.is_locked());

        drop(dialog);

        assert!(!lock.is_locked());
        assert_eq!(lock.releases(), 1);
        assert!(router.is_empty());
    }

    #[test]
    fn test_open_fails_when_lock_taken_elsewhere() {
        let (mut dialog, lock, router) = dialog();
        let _other = lock.acquire().unwrap();

        let result = dialog.open(Some(record("X", "2020")));

        assert!(matches!(result, Err(DialogError::ScrollLockHeld)));
        assert!(!dialog.is_open());
        assert!(router.is_empty());
    }

    #[test]
    fn test_reopen_replaces_record() {
        let (mut dialog, lock, router) = dialog();
        dialog.open(Some(record("First", "2019"))).unwrap();
        dialog.open(Some(record("Second", "2021"))).unwrap();

        assert!(dialog.is_open());
        assert_eq!(dialog.active_record().unwrap().title, "Second");
        assert_eq!(lock.acquisitions(), 1);
        assert_eq!(lock.releases(), 0);
        assert_eq!(router.len(), 2);

        let text = render_text(&mut dialog);
        assert!(text.contains("Second"));
        assert!(text.contains("2021"));
        assert!(!text.contains("First"));
    }

    #[test]
    fn test_minimal_record_renders_title_and_date_only() {
        let (mut dialog, lock, _) = dialog();
        dialog.open(Some(record("X", "2020"))).unwrap();

        let text = render_text(&mut dialog);
        assert!(text.contains("X"));
        assert!(text.contains("2020"));
        assert!(!text.contains("Location"));
        assert!(!text.contains("Learn More"));
        assert!(!text.contains("Download"));

        dialog.close();
        assert!(!lock.is_locked());
        assert!(render_text(&mut dialog).trim().is_empty());
    }

    #[test]
    fn test_full_record_renders_every_part() {
        let (mut dialog, _, _) = dialog();
        let full = DisplayRecord::new("Survey", "2021-Present")
            .with_location("Padang")
            .with_description("short text")
            .with_full_description("long text")
            .with_external_link("https://example.org/a")
            .with_download_link("https://example.org/a.pdf")
            .with_category("Grant")
            .with_tags(["Alpha", "Beta"]);
        dialog.open(Some(Arc::new(full))).unwrap();

        let text = render_text(&mut dialog);
        assert!(text.contains("Location: Padang"));
        assert!(text.contains("long text"));
        assert!(!text.contains("short text"));
        assert!(text.contains("Learn More"));
        assert!(text.contains("Download"));
        assert!(text.contains(" Grant "));
        let alpha = text.find("Alpha").unwrap();
        let beta = text.find("Beta").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_image_shown_first_when_present() {
        let theme = Theme::default();
        let record = DisplayRecord::new("X", "2020")
            .with_image_url("/porto/porto_1.jpeg")
            .with_category("Grant");
        let lines = DetailView::from_record(&record).lines(60, &theme);
        let first: String = lines[0].spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(first, "Image: /porto/porto_1.jpeg");

        let blank = DisplayRecord::new("X", "2020").with_image_url("  ");
        assert_eq!(DetailView::from_record(&blank).image, None);
    }

    #[test]
    fn test_view_description_precedence() {
        let short_only = DisplayRecord::new("X", "2020").with_description("short");
        assert_eq!(DetailView::from_record(&short_only).body, Some("short"));

        let both = short_only.clone().with_full_description("full");
        assert_eq!(DetailView::from_record(&both).body, Some("full"));
    }

    #[test]
    fn test_view_tags() {
        let theme = Theme::default();
        let empty = DisplayRecord::new("X", "2020").with_tags(Vec::<String>::new());
        let view = DetailView::from_record(&empty);
        assert!(view.tags.is_empty());
        // category-less record: title, meta, nothing else
        assert_eq!(view.lines(40, &theme).len(), 2);

        let tagged = DisplayRecord::new("X", "2020").with_tags(["A", "B"]);
        let view = DetailView::from_record(&tagged);
        assert_eq!(view.tags, vec!["A", "B"]);
        let lines = view.lines(40, &theme);
        let last: String = lines
            .last()
            .unwrap()
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(last, " A   B ");
    }

    #[test]
    fn test_view_links_only_present() {
        let record = DisplayRecord::new("X", "2020").with_download_link("https://example.org/cv.pdf");
        let view = DetailView::from_record(&record);
        assert_eq!(
            view.links,
            vec![DetailLink {
                kind: LinkKind::Download,
                url: "https://example.org/cv.pdf"
            }]
        );
        assert_eq!(view.link(LinkKind::LearnMore), None);
    }

    #[tokio::test]
    async fn test_link_key_requests_url() {
        let (mut dialog, _, _) = dialog();
        let (tx, mut rx) = mpsc::unbounded_channel();
        dialog.set_event_sender(tx);
        let record = DisplayRecord::new("X", "2020").with_external_link("https://doi.org/10.1/x");
        dialog.open(Some(Arc::new(record))).unwrap();

        dialog.handle_key_event(key(KeyCode::Char('d'))).await.unwrap();
        assert!(rx.try_recv().is_err());

        dialog.handle_key_event(key(KeyCode::Char('l'))).await.unwrap();
        assert!(matches!(rx.try_recv(), Ok(Event::OpenUrl(url)) if url == "https://doi.org/10.1/x"));
        assert!(dialog.is_open());
    }

    #[test]
    fn test_body_scroll_clamped() {
        let (mut dialog, _, _) = dialog();
        let long = "word ".repeat(2000);
        dialog
            .open(Some(Arc::new(DisplayRecord::new("X", "2020").with_description(long))))
            .unwrap();
        render_text(&mut dialog);

        dialog.scroll_body(-5);
        assert_eq!(dialog.body_scroll(), 0);
        dialog.scroll_body(10_000);
        let max = dialog.body_scroll();
        assert!(max > 0);
        dialog.scroll_body(1);
        assert_eq!(dialog.body_scroll(), max);
    }
}
