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
pub enum ToggleEvent {
    Changed(bool),
}

/// Switch-styled boolean control
pub struct Toggle {
    label: String,
    checked: bool,
    disabled: bool,
    focused: bool,
}

impl Toggle {
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
}

impl Component for Toggle {
    type Event = ToggleEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<ToggleEvent> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter if !self.disabled => {
                self.checked = !self.checked;
                Some(ToggleEvent::Changed(self.checked))
            }
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let (track, track_style) = if self.checked {
            ("──●", theme.accent_style())
        } else {
            ("●──", theme.muted_style())
        };

        let line = Line::from(vec![
            Span::styled("(", theme.border_style(self.focused)),
            Span::styled(track, track_style),
            Span::styled(")", theme.border_style(self.focused)),
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
