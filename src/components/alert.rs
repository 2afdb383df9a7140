use crate::core::Component;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl AlertKind {
    fn icon(self) -> &'static str {
        match self {
            AlertKind::Info => "ℹ",
            AlertKind::Success => "✔",
            AlertKind::Warning => "⚠",
            AlertKind::Error => "✖",
        }
    }

    fn color(self, theme: &Theme) -> Color {
        match self {
            AlertKind::Info => theme.info,
            AlertKind::Success => theme.success,
            AlertKind::Warning => theme.warning,
            AlertKind::Error => theme.danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertEvent {
    Dismissed,
}

/// Inline alert banner
pub struct Alert {
    kind: AlertKind,
    title: Option<String>,
    message: String,
    dismissible: bool,
}

impl Alert {
    #[must_use]
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
            dismissible: false,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn dismissible(mut self) -> Self {
        self.dismissible = true;
        self
    }

    #[must_use]
    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Component for Alert {
    type Event = AlertEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<AlertEvent> {
        match key.code {
            KeyCode::Esc if self.dismissible => Some(AlertEvent::Dismissed),
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let color = self.kind.color(theme);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type.border_type())
            .border_style(Style::default().fg(color));

        if let Some(title) = &self.title {
            block = block.title(Span::styled(
                format!(" {} {} ", self.kind.icon(), title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }

        let body = if self.title.is_some() {
            Line::from(Span::styled(self.message.clone(), theme.text_style()))
        } else {
            Line::from(vec![
                Span::styled(format!("{} ", self.kind.icon()), Style::default().fg(color)),
                Span::styled(self.message.clone(), theme.text_style()),
            ])
        };

        f.render_widget(Paragraph::new(body).block(block).wrap(Wrap { trim: true }), area);
    }
}
