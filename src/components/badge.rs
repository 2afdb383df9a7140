//! Status badges rendered as styled spans, so tables and lists can embed
//! them inline.

use crate::core::Component;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeShape {
    #[default]
    Pill,
    Square,
}

/// Inline status badge
#[derive(Debug, Clone)]
pub struct Badge {
    text: String,
    variant: BadgeVariant,
    shape: BadgeShape,
}

impl Badge {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::default(),
            shape: BadgeShape::default(),
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: BadgeShape) -> Self {
        self.shape = shape;
        self
    }

    /// Render as a styled span
    #[must_use]
    pub fn span(&self, theme: &Theme) -> Span<'static> {
        let color = match self.variant {
            BadgeVariant::Neutral => theme.text_muted,
            BadgeVariant::Success => theme.success,
            BadgeVariant::Warning => theme.warning,
            BadgeVariant::Danger => theme.danger,
            BadgeVariant::Info => theme.info,
        };

        let text = match self.shape {
            BadgeShape::Pill => format!("({})", self.text),
            BadgeShape::Square => format!("[{}]", self.text),
        };

        Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
    }
}

impl Component for Badge {
    type Event = ();

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Paragraph::new(self.span(theme)), area);
    }
}
