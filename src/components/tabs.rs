use crate::core::Component;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Tabs as TabsWidget},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabsEvent {
    Selected(usize),
}

/// Horizontal tab strip; selection wraps at the ends
pub struct Tabs {
    labels: Vec<String>,
    active: usize,
    focused: bool,
}

impl Tabs {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            active: 0,
            focused: false,
        }
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn select(&mut self, index: usize) -> Option<TabsEvent> {
        if index >= self.labels.len() || index == self.active {
            return None;
        }
        self.active = index;
        Some(TabsEvent::Selected(index))
    }

    fn step(&mut self, forward: bool) -> Option<TabsEvent> {
        let len = self.labels.len();
        if len < 2 {
            return None;
        }
        self.active = if forward {
            (self.active + 1) % len
        } else {
            (self.active + len - 1) % len
        };
        Some(TabsEvent::Selected(self.active))
    }
}

impl Component for Tabs {
    type Event = TabsEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<TabsEvent> {
        match key.code {
            KeyCode::Right | KeyCode::Tab => self.step(true),
            KeyCode::Left => self.step(false),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = (c as usize).wrapping_sub('1' as usize);
                self.select(index)
            }
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let tabs = TabsWidget::new(self.labels.clone())
            .select(self.active)
            .style(theme.muted_style())
            .highlight_style(theme.accent_style())
            .divider("│")
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(theme.border_style(self.focused)),
            );

        f.render_widget(tabs, area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
