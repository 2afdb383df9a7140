//! Right-anchored side panel chrome.
//!
//! The drawer computes and clears its panel area; the host renders its own
//! form inside the returned interior.

use crate::core::LayoutManager;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Clear},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    CloseRequested,
}

/// Side panel state and chrome
pub struct Drawer {
    title: String,
    width_percent: u16,
    open: bool,
    close_on_esc: bool,
}

impl Drawer {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width_percent: 40,
            open: false,
            close_on_esc: true,
        }
    }

    #[must_use]
    pub fn width_percent(mut self, percent: u16) -> Self {
        self.width_percent = percent.clamp(10, 100);
        self
    }

    /// Keep the drawer open on Esc (forms with unsaved input)
    #[must_use]
    pub fn keep_open_on_esc(mut self) -> Self {
        self.close_on_esc = false;
        self
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        log::debug!("drawer '{}' opened", self.title);
    }

    pub fn close(&mut self) {
        self.open = false;
        log::debug!("drawer '{}' closed", self.title);
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Esc requests a close when configured to
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DrawerEvent> {
        if self.open && self.close_on_esc && key.code == KeyCode::Esc {
            self.close();
            return Some(DrawerEvent::CloseRequested);
        }
        None
    }

    /// The panel area within the frame
    #[must_use]
    pub fn area(&self, frame: Rect) -> Rect {
        LayoutManager::drawer_rect(self.width_percent, frame)
    }

    /// Draw the chrome and return the interior for host content.
    ///
    /// Returns `None` while closed.
    pub fn render_chrome(&self, f: &mut Frame, frame: Rect, theme: &Theme) -> Option<Rect> {
        if !self.open {
            return None;
        }

        let area = self.area(frame);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type.border_type())
            .border_style(theme.border_style(true))
            .title(Span::styled(format!(" {} ", self.title), theme.accent_style()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        Some(inner)
    }
}
