//! One-line floating tooltip positioned next to a target rectangle.

use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TooltipPlacement {
    #[default]
    Above,
    Below,
}

/// Floating hint anchored to another component's area
pub struct Tooltip {
    text: String,
    placement: TooltipPlacement,
}

impl Tooltip {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placement: TooltipPlacement::default(),
        }
    }

    #[must_use]
    pub fn placement(mut self, placement: TooltipPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Compute the tooltip area for a target, clamped to the frame
    #[must_use]
    pub fn area_for(&self, target: Rect, frame: Rect) -> Rect {
        let width = (self.text.chars().count() as u16 + 2).min(frame.width);
        let x = target
            .x
            .min(frame.x + frame.width.saturating_sub(width))
            .max(frame.x);

        let y = match self.placement {
            TooltipPlacement::Above if target.y > frame.y => target.y - 1,
            TooltipPlacement::Above => target.y + target.height,
            TooltipPlacement::Below => {
                let below = target.y + target.height;
                if below < frame.y + frame.height {
                    below
                } else {
                    target.y.saturating_sub(1).max(frame.y)
                }
            }
        };

        Rect::new(x, y.min(frame.y + frame.height.saturating_sub(1)), width, 1)
    }

    /// Render next to `target` within `frame`
    pub fn render_for(&self, f: &mut Frame, target: Rect, frame: Rect, theme: &Theme) {
        if self.text.is_empty() {
            return;
        }
        let area = self.area_for(target, frame);
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(Span::styled(
                format!(" {} ", self.text),
                Style::default().fg(theme.text).bg(theme.surface_elevated),
            )),
            area,
        );
    }
}
