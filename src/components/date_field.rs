//! Date entry parsed as `YYYY-MM-DD`.

use crate::core::Component;
use crate::theme::Theme;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateEvent {
    /// New parsed value; `None` means the field was emptied
    Changed(Option<NaiveDate>),
}

/// Text-entry date field
pub struct DateField {
    label: String,
    buffer: String,
    value: Option<NaiveDate>,
    invalid: bool,
    touched: bool,
    disabled: bool,
    focused: bool,
}

impl DateField {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            buffer: String::new(),
            value: None,
            invalid: false,
            touched: false,
            disabled: false,
            focused: false,
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.value = value;
        self.buffer = value.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default();
        self.invalid = false;
    }

    pub fn clear(&mut self) {
        self.set_value(None);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    #[must_use]
    pub fn visible_error(&self) -> Option<&'static str> {
        (self.invalid && self.touched).then_some("Use the YYYY-MM-DD format")
    }

    /// Re-parse the buffer, emitting when the parsed value changes
    fn reparse(&mut self) -> Option<DateEvent> {
        if self.buffer.is_empty() {
            self.invalid = false;
            return self.value.take().map(|_| DateEvent::Changed(None));
        }

        match NaiveDate::parse_from_str(&self.buffer, DATE_FORMAT) {
            Ok(date) => {
                self.invalid = false;
                let changed = self.value != Some(date);
                self.value = Some(date);
                changed.then_some(DateEvent::Changed(Some(date)))
            }
            Err(_) => {
                self.invalid = true;
                None
            }
        }
    }
}

impl Component for DateField {
    type Event = DateEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<DateEvent> {
        if self.disabled {
            return None;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                self.buffer.push(c);
                self.reparse()
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                self.reparse()
            }
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let error = self.visible_error();
        let border_style = if error.is_some() {
            theme.error_style()
        } else {
            theme.border_style(self.focused)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type.border_type())
            .border_style(border_style)
            .title(format!(" {} ", self.label));

        let content: Line = if self.buffer.is_empty() && !self.focused {
            Line::from(Span::styled("YYYY-MM-DD", theme.muted_style()))
        } else {
            let shown = if self.focused {
                format!("{}█", self.buffer)
            } else {
                self.buffer.clone()
            };
            Line::from(vec![
                Span::styled("📅 ", theme.muted_style()),
                Span::styled(shown, theme.text_style()),
            ])
        };

        let field_area = Rect::new(area.x, area.y, area.width, area.height.min(3));
        f.render_widget(Paragraph::new(content).block(block), field_area);

        if area.height > 3 {
            if let Some(error) = error {
                let note_area = Rect::new(area.x + 1, area.y + 3, area.width.saturating_sub(2), 1);
                f.render_widget(Paragraph::new(error).style(theme.error_style()), note_area);
            }
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.touched = true;
    }
}
