//! Dropdown menu anchored to a trigger area.

use crate::core::Component;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuAlign {
    Left,
    /// Right-aligned works best for profile dropdowns in the header
    #[default]
    Right,
}

/// One menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub disabled: bool,
}

impl MenuItem {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    Selected(String),
    Closed,
}

/// Dropdown menu
pub struct Menu {
    items: Vec<MenuItem>,
    align: MenuAlign,
    open: bool,
    highlight: usize,
}

impl Menu {
    #[must_use]
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            align: MenuAlign::default(),
            open: false,
            highlight: 0,
        }
    }

    #[must_use]
    pub fn align(mut self, align: MenuAlign) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.highlight = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    fn navigate(&mut self, down: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.highlight = if down {
            (self.highlight + 1) % len
        } else {
            (self.highlight + len - 1) % len
        };
    }

    /// Popup area anchored below `trigger`, clamped to `frame`
    #[must_use]
    pub fn area_for(&self, trigger: Rect, frame: Rect) -> Rect {
        let width = self
            .items
            .iter()
            .map(|i| i.label.chars().count() as u16 + 4)
            .max()
            .unwrap_or(10)
            .min(frame.width);
        let height = (self.items.len() as u16 + 2).min(frame.height);

        let x = match self.align {
            MenuAlign::Left => trigger.x,
            MenuAlign::Right => (trigger.x + trigger.width).saturating_sub(width),
        }
        .max(frame.x)
        .min(frame.x + frame.width.saturating_sub(width));

        let y = (trigger.y + trigger.height).min(frame.y + frame.height.saturating_sub(height));
        Rect::new(x, y, width, height)
    }

    /// Render the open popup anchored to `trigger`
    pub fn render_for(&mut self, f: &mut Frame, trigger: Rect, frame: Rect, theme: &Theme) {
        if !self.open {
            return;
        }

        let area = self.area_for(trigger, frame);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type.border_type())
            .border_style(theme.border_style(true));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if item.disabled {
                    theme.muted_style()
                } else if i == self.highlight {
                    theme.selection_style()
                } else {
                    theme.text_style()
                };
                Line::from(Span::styled(format!(" {} ", item.label), style))
            })
            .collect();

        f.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for Menu {
    type Event = MenuEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<MenuEvent> {
        if !self.open {
            return None;
        }

        match key.code {
            KeyCode::Esc => {
                self.close();
                Some(MenuEvent::Closed)
            }
            KeyCode::Up => {
                self.navigate(false);
                None
            }
            KeyCode::Down => {
                self.navigate(true);
                None
            }
            KeyCode::Enter => {
                let item = self.items.get(self.highlight)?;
                if item.disabled {
                    return None;
                }
                let id = item.id.clone();
                self.close();
                Some(MenuEvent::Selected(id))
            }
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Standalone rendering anchors to the component's own area
        let frame = f.area();
        self.render_for(f, area, frame, theme);
    }
}
