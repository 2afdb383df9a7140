//! Single-line text input with label, cursor editing and validation.
//!
//! Participates in host form state the way every form control here does:
//! the host reads and writes the value, while the control tracks `touched`
//! (blurred at least once) and `dirty` (edited since the last
//! [`set_value`](TextInput::set_value)) and reports the first failing
//! validator once touched.

use crate::core::Component;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Validation rule attached to a [`TextInput`]
pub enum Validator {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    Custom(fn(&str) -> Option<String>),
}

impl Validator {
    /// Error message for `value`, or `None` when the rule passes
    #[must_use]
    pub fn check(&self, value: &str) -> Option<String> {
        match self {
            Validator::Required => value.trim().is_empty().then(|| "This field is required".to_string()),
            Validator::MinLength(min) => (value.chars().count() < *min && !value.is_empty())
                .then(|| format!("Must be at least {min} characters")),
            Validator::MaxLength(max) => {
                (value.chars().count() > *max).then(|| format!("Must be at most {max} characters"))
            }
            Validator::Email => {
                if value.is_empty() {
                    return None;
                }
                let mut parts = value.splitn(2, '@');
                let local = parts.next().unwrap_or_default();
                let domain = parts.next();
                match domain {
                    Some(d) if !local.is_empty() && !d.is_empty() => None,
                    _ => Some("Enter a valid email address".to_string()),
                }
            }
            Validator::Custom(check) => check(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Changed(String),
    Submitted(String),
}

/// Single-line text input
pub struct TextInput {
    label: String,
    placeholder: String,
    hint: String,
    value: String,
    cursor: usize,
    masked: bool,
    disabled: bool,
    readonly: bool,
    error_text: Option<String>,
    validators: Vec<Validator>,
    touched: bool,
    dirty: bool,
    focused: bool,
}

impl TextInput {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: String::new(),
            hint: String::new(),
            value: String::new(),
            cursor: 0,
            masked: false,
            disabled: false,
            readonly: false,
            error_text: None,
            validators: Vec::new(),
            touched: false,
            dirty: false,
            focused: false,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Mask the rendered value (passwords)
    #[must_use]
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    #[must_use]
    pub fn required(self) -> Self {
        self.with_validator(Validator::Required)
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    /// Manual error text, overriding validator output
    pub fn set_error_text(&mut self, error: Option<String>) {
        self.error_text = error;
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Host-side write; clears `dirty`, keeps `touched`
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
        self.dirty = false;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.dirty = false;
    }

    /// Forget touched/dirty tracking (used by form resets)
    pub fn reset_state(&mut self) {
        self.touched = false;
        self.dirty = false;
        self.error_text = None;
    }

    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Force the touched state (form submission marks all fields touched)
    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    /// First failing rule, regardless of touched state
    #[must_use]
    pub fn validation_error(&self) -> Option<String> {
        if let Some(manual) = &self.error_text {
            return Some(manual.clone());
        }
        self.validators.iter().find_map(|v| v.check(&self.value))
    }

    /// Error shown to the user: only after the field was touched
    #[must_use]
    pub fn visible_error(&self) -> Option<String> {
        self.touched.then(|| self.validation_error()).flatten()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validation_error().is_none()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        self.dirty = true;
    }

    fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
        self.dirty = true;
        true
    }

    fn delete_at_cursor(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        self.dirty = true;
        true
    }

    fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

impl Component for TextInput {
    type Event = InputEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<InputEvent> {
        if self.disabled || self.readonly {
            return None;
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                Some(InputEvent::Changed(self.value.clone()))
            }
            KeyCode::Backspace => self
                .delete_before_cursor()
                .then(|| InputEvent::Changed(self.value.clone())),
            KeyCode::Delete => self.delete_at_cursor().then(|| InputEvent::Changed(self.value.clone())),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                None
            }
            KeyCode::Enter => Some(InputEvent::Submitted(self.value.clone())),
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if area.height == 0 {
            return;
        }

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

        let content: Line = if self.value.is_empty() && !self.focused {
            Line::from(Span::styled(self.placeholder.clone(), theme.muted_style()))
        } else {
            let mut shown = self.display_value();
            if self.focused {
                let at = shown
                    .char_indices()
                    .nth(self.cursor)
                    .map_or(shown.len(), |(i, _)| i);
                shown.insert(at, '█');
            }
            Line::from(Span::styled(shown, theme.text_style()))
        };

        let field_area = Rect::new(area.x, area.y, area.width, area.height.min(3));
        f.render_widget(Paragraph::new(content).block(block), field_area);

        // Error or hint on the line below the field, when there is room
        if area.height > 3 {
            let note_area = Rect::new(area.x + 1, area.y + 3, area.width.saturating_sub(2), 1);
            if let Some(error) = error {
                f.render_widget(Paragraph::new(error).style(theme.error_style()), note_area);
            } else if !self.hint.is_empty() {
                f.render_widget(Paragraph::new(self.hint.clone()).style(theme.muted_style()), note_area);
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
