use crate::core::Component;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed,
}

/// A styled button
pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    spinner_frame: usize,
    focused: bool,
}

impl Button {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            loading: false,
            spinner_frame: 0,
            focused: false,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn primary(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Primary)
    }

    #[must_use]
    pub fn secondary(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Secondary)
    }

    #[must_use]
    pub fn danger(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Danger)
    }

    #[must_use]
    pub fn ghost(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Ghost)
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Loading buttons show a spinner and swallow input
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    fn content_style(&self, theme: &Theme) -> Style {
        if self.disabled {
            return theme.muted_style();
        }
        match self.variant {
            ButtonVariant::Primary => Style::default()
                .fg(theme.surface)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Secondary => Style::default().fg(theme.text).bg(theme.surface_elevated),
            ButtonVariant::Danger => Style::default()
                .fg(theme.surface)
                .bg(theme.danger)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Ghost => Style::default().fg(theme.primary),
        }
    }
}

impl Component for Button {
    type Event = ButtonEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<ButtonEvent> {
        if self.disabled || self.loading {
            return None;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(ButtonEvent::Pressed),
            _ => None,
        }
    }

    fn on_tick(&mut self) -> Option<ButtonEvent> {
        if self.loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
        None
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let pad = match self.size {
            ButtonSize::Sm => " ",
            ButtonSize::Md => "  ",
            ButtonSize::Lg => "   ",
        };

        let text = if self.loading {
            format!("{pad}{} {}{pad}", SPINNER_FRAMES[self.spinner_frame], self.label)
        } else {
            format!("{pad}{}{pad}", self.label)
        };

        let line = Line::from(Span::styled(text, self.content_style(theme)));
        let mut paragraph = Paragraph::new(line).alignment(Alignment::Center);

        if area.height >= 3 {
            paragraph = paragraph.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type.border_type())
                    .border_style(theme.border_style(self.focused)),
            );
        }

        f.render_widget(paragraph, area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
