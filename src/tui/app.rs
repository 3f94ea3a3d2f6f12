use crate::config::Config;
use crate::contact::{copy_to_clipboard, open_in_browser, wait_for_launcher};
use crate::content::{Catalog, DisplayRecord};
use crate::tui::{
    components::{
        dialogs::{Dialog, DetailDialog, InputRouter, ScrollLock},
        Component,
    },
    events::Event,
    keys::KeyMap,
    pages::{PageAction, PortfolioPage},
    styles::Theme,
    utils::layout,
    Frame,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// How long a status message stays before the key hints return
const STATUS_TIMEOUT: Duration = Duration::from_secs(6);

/// Main application state and controller
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Current application dimensions
    pub size: Rect,

    /// Key mappings for the application
    pub key_map: KeyMap,

    /// Current theme for styling
    pub theme: Theme,

    /// Status message to display
    pub status_message: Option<String>,

    /// When the status message was set
    status_since: Option<Instant>,

    /// Application configuration
    pub config: AppConfig,

    /// The portfolio page
    page: PortfolioPage,

    /// Detail overlay
    dialog: DetailDialog,

    /// Record the page asked the dialog to show
    selected: Option<Arc<DisplayRecord>>,

    /// Escape/outside-press listeners registered by overlays
    router: InputRouter,

    /// Event sender for internal communication
    event_sender: mpsc::UnboundedSender<Event>,

    /// Event receiver for internal communication
    event_receiver: mpsc::UnboundedReceiver<Event>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Show help text
    pub show_help: bool,

    /// Enable mouse support
    pub mouse_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_help: false,
            mouse_enabled: true,
        }
    }
}

impl App {
    /// Create a new application instance
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();
        let theme = Theme::default();
        let scroll_lock = ScrollLock::new();
        let router = InputRouter::new();

        let page = PortfolioPage::new(
            catalog,
            config.form.clone(),
            scroll_lock.clone(),
            theme.clone(),
        );
        let mut dialog = DetailDialog::new(scroll_lock, router.clone());
        dialog.set_event_sender(event_sender.clone());

        Self {
            should_quit: false,
            size: Rect::default(),
            key_map: KeyMap::default(),
            theme,
            status_message: None,
            status_since: None,
            config: AppConfig {
                show_help: false,
                mouse_enabled: config.mouse_enabled,
            },
            page,
            dialog,
            selected: None,
            router,
            event_sender,
            event_receiver,
        }
    }

    pub fn page(&self) -> &PortfolioPage {
        &self.page
    }

    pub fn dialog(&self) -> &DetailDialog {
        &self.dialog
    }

    /// Record currently selected for the detail dialog
    pub fn selected(&self) -> Option<&Arc<DisplayRecord>> {
        self.selected.as_ref()
    }

    /// Handle incoming events. Returns true when the application should exit.
    pub async fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key_event) => self.handle_key(key_event).await?,

            Event::Mouse(mouse_event) => {
                // The help overlay sits above everything and takes no pointer input
                if self.config.mouse_enabled && !self.config.show_help {
                    // Exactly one consumer per event: the open dialog, else the page
                    if self.dialog.is_open() {
                        self.dialog.handle_mouse_event(mouse_event).await?;
                    } else if let Some(action) = self.page.handle_mouse_event(mouse_event) {
                        self.apply(action);
                    }
                }
            }

            Event::Paste(text) => {
                if !self.dialog.is_open() {
                    self.page.handle_paste(&text);
                }
            }

            Event::Resize(width, height) => self.resize(Rect::new(0, 0, width, height)),

            Event::Tick => {
                if self
                    .status_since
                    .is_some_and(|since| since.elapsed() >= STATUS_TIMEOUT)
                {
                    self.clear_status();
                }
            }

            other => self.handle_internal(other),
        }

        // Process events emitted while handling this one
        while let Ok(internal_event) = self.event_receiver.try_recv() {
            self.handle_internal(internal_event);
        }

        Ok(self.should_quit)
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if self.key_map.should_quit(&key) {
            info!("Quit requested");
            self.should_quit = true;
            return Ok(());
        }

        if self.key_map.should_show_help(&key) {
            self.config.show_help = !self.config.show_help;
            return Ok(());
        }

        if self.config.show_help {
            if key.code == KeyCode::Esc {
                self.config.show_help = false;
            }
            return Ok(());
        }

        if self.dialog.is_open() {
            self.dialog.handle_key_event(key).await?;
            return Ok(());
        }

        if key.code == KeyCode::Char('q')
            && key.modifiers == KeyModifiers::NONE
            && !self.page.is_editing()
        {
            info!("Quit requested");
            self.should_quit = true;
            return Ok(());
        }

        if let Some(action) = self.page.handle_key_event(key) {
            self.apply(action);
        }
        Ok(())
    }

    /// Events that only originate inside the application
    fn handle_internal(&mut self, event: Event) {
        match event {
            Event::StatusMessage(message) => self.set_status(message),
            Event::ClearStatus => self.clear_status(),
            Event::DialogClosed(trigger) => {
                debug!("Dialog closed via {:?}; clearing selection", trigger);
                self.selected = None;
            }
            Event::OpenUrl(url) => self.open_url(&url),
            other => debug!("Ignoring unexpected internal event {:?}", other),
        }
    }

    fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::OpenRecord(record) => self.show_record(record),
            PageAction::OpenUrl(url) => self.open_url(&url),
            PageAction::Status(message) => self.set_status(message),
            // Jumps are resolved by the page itself
            PageAction::JumpTo(_) => {}
        }
    }

    fn show_record(&mut self, record: Arc<DisplayRecord>) {
        self.dialog.set_size(self.size);
        self.selected = Some(Arc::clone(&record));
        if let Err(e) = self.dialog.open(Some(record)) {
            warn!("Could not open detail dialog: {}", e);
            self.selected = None;
            self.set_status(e.to_string());
        }
    }

    /// Start the browser without waiting for it. A launcher that fails
    /// later reports back through the event channel.
    fn open_url(&mut self, url: &str) {
        match open_in_browser(url) {
            Ok(child) => {
                self.set_status(format!("Opening {}", url));
                let sender = self.event_sender.clone();
                let url = url.to_string();
                tokio::spawn(async move {
                    if let Err(e) = wait_for_launcher(child).await {
                        warn!("{}", e);
                        let _ = sender.send(Event::StatusMessage(browser_fallback(&url)));
                    }
                });
            }
            Err(e) => {
                warn!("{}", e);
                self.set_status(browser_fallback(url));
            }
        }
    }

    fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_since = Some(Instant::now());
    }

    fn clear_status(&mut self) {
        self.status_message = None;
        self.status_since = None;
    }

    fn split(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content
                Constraint::Length(1), // Status bar
            ])
            .split(area);
        (chunks[0], chunks[1])
    }

    fn resize(&mut self, size: Rect) {
        self.size = size;
        let (main, _) = Self::split(size);
        self.page.set_size(main);
        self.dialog.set_size(size);
    }

    /// Render the application UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.size();
        if area != self.size {
            self.resize(area);
        }
        let (main, status) = Self::split(area);

        self.page.render(frame, main);
        self.render_status_bar(frame, status);

        if self.dialog.is_open() {
            self.dialog.render(frame, area, &self.theme);
        }

        if self.config.show_help {
            self.render_help_overlay(frame);
        }
    }

    /// Render the status bar
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status_text = if let Some(ref message) = self.status_message {
            message.clone()
        } else if self.dialog.is_open() {
            "Esc/q close | j/k scroll | l Learn More | d Download".to_string()
        } else if self.page.is_editing() {
            "Editing | Enter or Esc to finish".to_string()
        } else {
            let document = self.page.document();
            let percent = if document.max_offset() == 0 {
                100
            } else {
                document.offset() * 100 / document.max_offset()
            };
            format!(
                "Section: {} | {}% | Tab/Enter select | 1-5 jump | Ctrl+G help | q quit",
                self.page.active_section().label(),
                percent
            )
        };

        let status_paragraph = Paragraph::new(status_text).style(self.theme.status_bar_style());

        frame.render_widget(status_paragraph, area);
    }

    /// Render help overlay
    fn render_help_overlay(&self, frame: &mut Frame) {
        let help_area = layout::centered_rect_percent(70, 60, frame.size());

        let help_text = self.key_map.help_text();
        let help_block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(self.theme.focused_border_style())
            .style(self.theme.help_style());

        let help_paragraph = Paragraph::new(help_text)
            .block(help_block)
            .style(self.theme.text_style());

        frame.render_widget(Clear, help_area);
        frame.render_widget(help_paragraph, help_area);
    }

    /// Get a sender for internal events
    pub fn event_sender(&self) -> mpsc::UnboundedSender<Event> {
        self.event_sender.clone()
    }

    /// Number of global listeners currently registered
    pub fn active_listeners(&self) -> usize {
        self.router.len()
    }
}

/// Copy `url` to the clipboard when no browser could take it
fn browser_fallback(url: &str) -> String {
    match copy_to_clipboard(url) {
        Ok(()) => format!("No browser available; copied to clipboard: {}", url),
        Err(e) => {
            debug!("{}", e);
            format!("No browser available; open manually: {}", url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::pages::SectionId;
    use crossterm::event::{KeyEventState, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let mut app = App::new(catalog, &Config::default());
        app.resize(Rect::new(0, 0, 100, 32));
        app
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(x: u16, y: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Focus the first "View Details" button and return its screen position
    async fn focus_first_card(app: &mut App) -> (u16, u16) {
        app.handle_event(key(KeyCode::Char('2'))).await.unwrap();
        loop {
            app.handle_event(key(KeyCode::Tab)).await.unwrap();
            if app.page().focused() == Some((SectionId::Portfolio, 0)) {
                break;
            }
        }
        let document = app.page().document();
        let hotspot = document
            .hotspots()
            .iter()
            .find(|h| h.section == SectionId::Portfolio && h.target == 0)
            .copied()
            .unwrap();
        // page body starts below the two header rows
        (0, 2 + (hotspot.line - document.offset()) as u16)
    }

    #[tokio::test]
    async fn test_opening_click_does_not_close() {
        let mut app = app();
        let (x, y) = focus_first_card(&mut app).await;
        assert!(!app.dialog().layout().contains_point(x, y));

        app.handle_event(click(x, y)).await.unwrap();

        assert!(app.dialog().is_open());
        assert!(app.selected().is_some());
        assert_eq!(app.active_listeners(), 2);

        // The next press outside the dialog dismisses it
        app.handle_event(click(x, y)).await.unwrap();
        assert!(!app.dialog().is_open());
        assert!(app.selected().is_none());
        assert_eq!(app.active_listeners(), 0);
    }

    #[tokio::test]
    async fn test_escape_clears_selection() {
        let mut app = app();
        focus_first_card(&mut app).await;

        app.handle_event(key(KeyCode::Enter)).await.unwrap();
        assert!(app.dialog().is_open());
        let offset = app.page().document().offset();

        // Page does not scroll underneath the dialog
        app.handle_event(key(KeyCode::Down)).await.unwrap();
        app.handle_event(key(KeyCode::Char('1'))).await.unwrap();
        assert_eq!(app.page().document().offset(), offset);

        app.handle_event(key(KeyCode::Esc)).await.unwrap();
        assert!(!app.dialog().is_open());
        assert!(app.selected().is_none());

        app.handle_event(key(KeyCode::Down)).await.unwrap();
        assert_eq!(
            app.page().document().offset(),
            (offset + 1).min(app.page().document().max_offset())
        );
    }

    #[tokio::test]
    async fn test_q_closes_dialog_before_quitting() {
        let mut app = app();
        focus_first_card(&mut app).await;
        app.handle_event(key(KeyCode::Enter)).await.unwrap();

        assert!(!app.handle_event(key(KeyCode::Char('q'))).await.unwrap());
        assert!(!app.dialog().is_open());

        assert!(app.handle_event(key(KeyCode::Char('q'))).await.unwrap());
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let mut app = app();
        let quit = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert!(app.handle_event(quit).await.unwrap());
    }

    #[tokio::test]
    async fn test_help_overlay_toggles() {
        let mut app = app();
        let help = Event::Key(KeyEvent {
            code: KeyCode::Char('g'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        app.handle_event(help).await.unwrap();
        assert!(app.config.show_help);

        // q does not quit behind the help overlay
        assert!(!app.handle_event(key(KeyCode::Char('q'))).await.unwrap());
        app.handle_event(key(KeyCode::Esc)).await.unwrap();
        assert!(!app.config.show_help);
    }

    #[tokio::test]
    async fn test_click_under_help_overlay_keeps_dialog() {
        let mut app = app();
        let (x, y) = focus_first_card(&mut app).await;
        app.handle_event(key(KeyCode::Enter)).await.unwrap();
        assert!(app.dialog().is_open());

        let help = Event::Key(KeyEvent {
            code: KeyCode::Char('g'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        app.handle_event(help.clone()).await.unwrap();

        // Outside the dialog, so it would dismiss it without the overlay
        assert!(!app.dialog().layout().contains_point(x, y));
        app.handle_event(click(x, y)).await.unwrap();
        assert!(app.dialog().is_open());
        assert!(app.selected().is_some());

        app.handle_event(help).await.unwrap();
        app.handle_event(click(x, y)).await.unwrap();
        assert!(!app.dialog().is_open());
    }

    #[tokio::test]
    async fn test_status_message_events() {
        let mut app = app();
        app.event_sender()
            .send(Event::StatusMessage("hello".to_string()))
            .unwrap();
        app.handle_event(Event::Tick).await.unwrap();
        assert_eq!(app.status_message.as_deref(), Some("hello"));

        app.handle_event(Event::ClearStatus).await.unwrap();
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn test_render_with_dialog() {
        let mut app = app();
        focus_first_card(&mut app).await;
        app.handle_event(key(KeyCode::Enter)).await.unwrap();

        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = (0..32)
            .flat_map(|y| (0..100).map(move |x| (x, y)))
            .map(|(x, y)| buffer.get(x, y).symbol.clone())
            .collect();
        assert!(screen.contains("Details"));
        assert!(screen.contains("[x]"));
        assert!(screen.contains("Esc/q close"));
    }
}
