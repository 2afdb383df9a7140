//! Debounced search field.
//!
//! Keystrokes update the visible buffer immediately, but the query only
//! reaches the parent after the debounce window closes, and consecutive
//! duplicate queries are suppressed. Clearing with Esc bypasses the window.

use crate::constants::SEARCH_DEBOUNCE_MS;
use crate::core::{Component, Debouncer};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Debounced query change
    QueryChanged(String),
    /// The field was cleared (emitted immediately)
    Cleared,
}

/// Search input with a debounced query
pub struct SearchInput {
    placeholder: String,
    buffer: String,
    debouncer: Debouncer,
    focused: bool,
}

impl SearchInput {
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }

    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            placeholder: "Search...".to_string(),
            buffer: String::new(),
            debouncer: Debouncer::new(delay),
            focused: false,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// The raw (not yet debounced) buffer
    #[must_use]
    pub fn query(&self) -> &str {
        &self.buffer
    }

    /// Clear the buffer and cancel any pending emission
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.debouncer.reset();
    }

    /// Test hook: poll the debouncer against an explicit clock
    pub fn poll_at(&mut self, now: std::time::Instant) -> Option<SearchEvent> {
        self.debouncer.poll_at(now).map(SearchEvent::QueryChanged)
    }
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchInput {
    type Event = SearchEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<SearchEvent> {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.push(c);
                self.debouncer.set(self.buffer.clone());
                None
            }
            KeyCode::Backspace => {
                if self.buffer.pop().is_some() {
                    self.debouncer.set(self.buffer.clone());
                }
                None
            }
            KeyCode::Esc if !self.buffer.is_empty() => {
                self.clear();
                Some(SearchEvent::Cleared)
            }
            _ => None,
        }
    }

    fn on_tick(&mut self) -> Option<SearchEvent> {
        self.debouncer.poll().map(SearchEvent::QueryChanged)
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type.border_type())
            .border_style(theme.border_style(self.focused))
            .title(" Search ");

        let content: Line = if self.buffer.is_empty() && !self.focused {
            Line::from(Span::styled(self.placeholder.clone(), theme.muted_style()))
        } else {
            let mut spans = vec![Span::styled("🔍 ", theme.muted_style())];
            let shown = if self.focused {
                format!("{}█", self.buffer)
            } else {
                self.buffer.clone()
            };
            spans.push(Span::styled(shown, theme.text_style()));
            Line::from(spans)
        };

        f.render_widget(Paragraph::new(content).block(block), area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
