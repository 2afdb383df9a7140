use crate::core::Component;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
    Frame,
};

/// Progress gauge with an optional custom label
pub struct ProgressBar {
    label: Option<String>,
    ratio: f64,
    title: Option<String>,
}

impl ProgressBar {
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: None,
            ratio: 0.0,
            title: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Clamped to `0.0..=1.0`
    pub fn set_ratio(&mut self, ratio: f64) {
        self.ratio = ratio.clamp(0.0, 1.0);
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.ratio >= 1.0
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ProgressBar {
    type Event = ();

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut gauge = Gauge::default()
            .ratio(self.ratio)
            .gauge_style(Style::default().fg(theme.primary).bg(theme.surface_elevated));

        if let Some(label) = &self.label {
            gauge = gauge.label(label.clone());
        }

        if area.height >= 3 {
            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type.border_type())
                .border_style(theme.border_style(false));
            if let Some(title) = &self.title {
                block = block.title(format!(" {title} "));
            }
            gauge = gauge.block(block);
        }

        f.render_widget(gauge, area);
    }
}
