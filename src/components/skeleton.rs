//! Loading placeholder with a two-phase shimmer driven by the tick.

use crate::core::Component;
use crate::theme::Theme;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkeletonShape {
    #[default]
    Line,
    Block,
}

/// Shimmering placeholder
pub struct Skeleton {
    shape: SkeletonShape,
    width: u16,
    phase: bool,
    tick_count: u8,
}

impl Skeleton {
    #[must_use]
    pub fn new(shape: SkeletonShape, width: u16) -> Self {
        Self {
            shape,
            width,
            phase: false,
            tick_count: 0,
        }
    }

    #[must_use]
    pub fn line(width: u16) -> Self {
        Self::new(SkeletonShape::Line, width)
    }

    /// A single shimmer line for the given width and phase
    #[must_use]
    pub fn shimmer_text(width: u16, phase: bool) -> String {
        let glyph = if phase { '▒' } else { '░' };
        std::iter::repeat(glyph).take(width as usize).collect()
    }
}

impl Component for Skeleton {
    type Event = ();

    fn on_tick(&mut self) -> Option<()> {
        // Flip roughly twice a second at the default tick rate
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.tick_count % 5 == 0 {
            self.phase = !self.phase;
        }
        None
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = self.width.min(area.width);
        let rows = match self.shape {
            SkeletonShape::Line => 1,
            SkeletonShape::Block => area.height,
        };

        let text: Vec<String> = (0..rows).map(|_| Self::shimmer_text(width, self.phase)).collect();
        f.render_widget(
            Paragraph::new(text.join("\n")).style(Style::default().fg(theme.surface_elevated)),
            area,
        );
    }
}
