//! Stock confirmation dialog.

use super::dialog::{Dialog, DialogResponse};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Two-button confirmation dialog with `bool` outcome.
///
/// Esc (handled by the stack) closes with no outcome; pressing the Cancel
/// button yields an explicit `false`.
pub struct ConfirmDialog {
    title: String,
    message: String,
    confirm_label: String,
    cancel_label: String,
    danger: bool,
    /// 0 = cancel, 1 = confirm
    selected: usize,
}

impl ConfirmDialog {
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            danger: false,
            selected: 0,
        }
    }

    #[must_use]
    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    #[must_use]
    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    /// Tint the confirm button with the danger token
    #[must_use]
    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}

impl Dialog for ConfirmDialog {
    type Outcome = bool;

    fn title(&self) -> &str {
        &self.title
    }

    fn handle_key(&mut self, key: KeyEvent) -> DialogResponse<bool> {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.selected = 1 - self.selected;
                DialogResponse::Stay
            }
            KeyCode::Enter => DialogResponse::Close(Some(self.selected == 1)),
            KeyCode::Char('y') => DialogResponse::Close(Some(true)),
            KeyCode::Char('n') => DialogResponse::Close(Some(false)),
            _ => DialogResponse::Stay,
        }
    }

    fn render_body(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if area.height < 2 {
            return;
        }

        let message_area = Rect::new(area.x, area.y, area.width, area.height - 2);
        f.render_widget(
            Paragraph::new(self.message.clone())
                .style(theme.text_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            message_area,
        );

        let confirm_style = if self.danger {
            Style::default().fg(theme.surface).bg(theme.danger).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.surface).bg(theme.primary).add_modifier(Modifier::BOLD)
        };

        let button = |label: &str, active: bool, base: Style, theme: &Theme| {
            if active {
                Span::styled(format!(" {label} "), base)
            } else {
                Span::styled(format!(" {label} "), theme.muted_style())
            }
        };

        let buttons = Line::from(vec![
            button(
                &self.cancel_label,
                self.selected == 0,
                Style::default().fg(theme.text).bg(theme.surface_elevated),
                theme,
            ),
            Span::raw("   "),
            button(&self.confirm_label, self.selected == 1, confirm_style, theme),
        ]);

        let buttons_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        f.render_widget(Paragraph::new(buttons).alignment(Alignment::Center), buttons_area);
    }

    fn size_hint(&self) -> (u16, u16) {
        (44, 9)
    }

    fn instructions(&self) -> &str {
        "←/→ choose · Enter confirm · Esc cancel"
    }
}
