use crate::core::Component;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Horizontal progress stepper
pub struct Stepper {
    steps: Vec<String>,
    current: usize,
}

impl Stepper {
    #[must_use]
    pub fn new(steps: Vec<String>) -> Self {
        Self { steps, current: 0 }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Clamped to the last step
    pub fn next(&mut self) {
        if self.current + 1 < self.steps.len() {
            self.current += 1;
        }
    }

    /// Clamped to the first step
    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn set_current(&mut self, index: usize) {
        if index < self.steps.len() {
            self.current = index;
        }
    }
}

impl Component for Stepper {
    type Event = ();

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans: Vec<Span> = Vec::new();

        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ── ", theme.muted_style()));
            }

            let (marker, style) = match i.cmp(&self.current) {
                std::cmp::Ordering::Less => ("✔", theme.accent_style()),
                std::cmp::Ordering::Equal => ("●", theme.accent_style()),
                std::cmp::Ordering::Greater => ("○", theme.muted_style()),
            };

            spans.push(Span::styled(format!("{marker} "), style));
            spans.push(Span::styled(
                step.clone(),
                if i == self.current { theme.text_style() } else { theme.muted_style() },
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
