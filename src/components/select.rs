//! Dropdown select.
//!
//! Closed, the field shows the committed option (or a placeholder). Opening
//! moves a highlight through the options; Enter commits the highlight, Esc
//! reverts it and closes without changing the committed value.

use crate::core::Component;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    Changed(String),
}

/// Dropdown select control
pub struct Select {
    label: String,
    placeholder: String,
    options: Vec<SelectOption>,
    selected: Option<usize>,
    highlight: usize,
    open: bool,
    disabled: bool,
    required: bool,
    touched: bool,
    focused: bool,
    list_state: ListState,
}

impl Select {
    #[must_use]
    pub fn new(label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            label: label.into(),
            placeholder: "Select an option".to_string(),
            options,
            selected: None,
            highlight: 0,
            open: false,
            disabled: false,
            required: false,
            touched: false,
            focused: false,
            list_state: ListState::default(),
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Committed value
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].value.as_str())
    }

    /// Committed label, for display
    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].label.as_str())
    }

    /// Select by value; unknown values are ignored
    pub fn set_value(&mut self, value: &str) {
        if let Some(index) = self.options.iter().position(|o| o.value == value) {
            self.selected = Some(index);
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.open = false;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    #[must_use]
    pub fn validation_error(&self) -> Option<String> {
        (self.required && self.selected.is_none()).then(|| "This field is required".to_string())
    }

    #[must_use]
    pub fn visible_error(&self) -> Option<String> {
        self.touched.then(|| self.validation_error()).flatten()
    }

    /// Lines needed to render the open popup below the field
    #[must_use]
    pub fn popup_height(&self) -> u16 {
        if self.open {
            (self.options.len() as u16).saturating_add(2)
        } else {
            0
        }
    }

    fn open_popup(&mut self) {
        self.open = true;
        self.highlight = self.selected.unwrap_or(0);
    }

    fn commit(&mut self) -> Option<SelectEvent> {
        self.open = false;
        if self.options.is_empty() {
            return None;
        }
        let changed = self.selected != Some(self.highlight);
        self.selected = Some(self.highlight);
        changed.then(|| SelectEvent::Changed(self.options[self.highlight].value.clone()))
    }
}

impl Component for Select {
    type Event = SelectEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<SelectEvent> {
        if self.disabled {
            return None;
        }

        if !self.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    self.open_popup();
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Up => {
                self.highlight = self.highlight.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if !self.options.is_empty() {
                    self.highlight = (self.highlight + 1).min(self.options.len() - 1);
                }
                None
            }
            KeyCode::Enter => self.commit(),
            KeyCode::Esc => {
                // Revert the highlight, keep the committed value
                self.open = false;
                None
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

        let content: Line = match self.selected_label() {
            Some(label) => Line::from(vec![
                Span::styled(label.to_string(), theme.text_style()),
                Span::styled(" ▾", theme.muted_style()),
            ]),
            None => Line::from(vec![
                Span::styled(self.placeholder.clone(), theme.muted_style()),
                Span::styled(" ▾", theme.muted_style()),
            ]),
        };

        let field_area = Rect::new(area.x, area.y, area.width, area.height.min(3));
        f.render_widget(Paragraph::new(content).block(block), field_area);

        if self.open && area.height > 3 {
            let popup_height = self.popup_height().min(area.height - 3);
            let popup_area = Rect::new(area.x, area.y + 3, area.width, popup_height);

            let items: Vec<ListItem> = self
                .options
                .iter()
                .map(|o| ListItem::new(o.label.clone()).style(theme.text_style()))
                .collect();

            self.list_state.select(Some(self.highlight));

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(theme.border_type.border_type())
                        .border_style(theme.border_style(true)),
                )
                .highlight_style(theme.selection_style())
                .highlight_symbol("› ");

            f.render_stateful_widget(list, popup_area, &mut self.list_state);
        } else if area.height > 3 {
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
        self.open = false;
    }
}
