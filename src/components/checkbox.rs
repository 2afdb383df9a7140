use crate::core::Component;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxEvent {
    Changed(bool),
}

/// Checkbox with a label
pub struct Checkbox {
    label: String,
    checked: bool,
    disabled: bool,
    focused: bool,
}

impl Checkbox {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: false,
            disabled: false,
            focused: false,
        }
    }

    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn toggle(&mut self) -> Option<CheckboxEvent> {
        if self.disabled {
            return None;
        }
        self.checked = !self.checked;
        Some(CheckboxEvent::Changed(self.checked))
    }
}

impl Component for Checkbox {
    type Event = CheckboxEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<CheckboxEvent> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle(),
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let marker = if self.checked { "[x]" } else { "[ ]" };
        let marker_style = if self.disabled {
            theme.muted_style()
        } else if self.checked {
            theme.accent_style()
        } else {
            theme.border_style(self.focused)
        };

        let line = Line::from(vec![
            Span::styled(marker, marker_style),
            Span::raw(" "),
            Span::styled(
                self.label.clone(),
                if self.disabled { theme.muted_style() } else { theme.text_style() },
            ),
        ]);

        f.render_widget(Paragraph::new(line), area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
