//! Programmatic dialog service.
//!
//! Dialogs attach to the frame root rather than to any page — the portal
//! pattern. The stack tracks every open instance in an ordered map keyed by
//! a monotonic id, routes key input to the top-most dialog only, and queues
//! each close outcome until the host drains it. Every opened instance is
//! eventually removed from the map, by Esc, by its own response or by
//! [`DialogStack::close_all`].

use crate::core::LayoutManager;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::collections::VecDeque;

/// Handle to an open dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialogId(u64);

/// What a dialog wants after a key press
pub enum DialogResponse<O> {
    Stay,
    Close(Option<O>),
}

/// Content hosted by the [`DialogStack`]
pub trait Dialog {
    type Outcome;

    fn title(&self) -> &str;

    fn handle_key(&mut self, key: KeyEvent) -> DialogResponse<Self::Outcome>;

    fn render_body(&mut self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Width percentage and line height of the dialog panel
    fn size_hint(&self) -> (u16, u16) {
        (50, 12)
    }

    /// Whether Esc closes the dialog with no outcome
    fn dismissable(&self) -> bool {
        true
    }

    /// Hint line rendered at the bottom of the panel
    fn instructions(&self) -> &str {
        "Enter confirm · Esc cancel"
    }
}

/// Ordered stack of open dialogs sharing the outcome type `O`
pub struct DialogStack<O> {
    dialogs: Vec<(DialogId, Box<dyn Dialog<Outcome = O>>)>,
    closed: VecDeque<(DialogId, Option<O>)>,
    counter: u64,
}

impl<O> DialogStack<O> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dialogs: Vec::new(),
            closed: VecDeque::new(),
            counter: 0,
        }
    }

    /// Open a dialog and return its handle
    pub fn open(&mut self, dialog: Box<dyn Dialog<Outcome = O>>) -> DialogId {
        self.counter += 1;
        let id = DialogId(self.counter);
        log::debug!("dialog {id:?} opened: {}", dialog.title());
        self.dialogs.push((id, dialog));
        id
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.dialogs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }

    /// Close a specific dialog with no outcome; unknown ids are a no-op
    pub fn close(&mut self, id: DialogId) {
        if let Some(index) = self.dialogs.iter().position(|(open_id, _)| *open_id == id) {
            self.dialogs.remove(index);
            self.closed.push_back((id, None));
            log::debug!("dialog {id:?} closed");
        }
    }

    /// Close every open dialog, top-most first
    pub fn close_all(&mut self) {
        while let Some((id, _)) = self.dialogs.pop() {
            self.closed.push_back((id, None));
        }
    }

    /// Route a key press to the top-most dialog.
    ///
    /// Returns `true` when a dialog consumed the key — while the stack is
    /// non-empty every key is consumed, which is what traps focus. Esc is
    /// handled here (dialogs never see it) and closes the top dialog unless
    /// it opts out via [`Dialog::dismissable`].
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some((id, dialog)) = self.dialogs.last_mut() else {
            return false;
        };
        let id = *id;

        if key.code == KeyCode::Esc {
            if dialog.dismissable() {
                self.dialogs.pop();
                self.closed.push_back((id, None));
            }
            return true;
        }

        match dialog.handle_key(key) {
            DialogResponse::Stay => {}
            DialogResponse::Close(outcome) => {
                self.dialogs.pop();
                self.closed.push_back((id, outcome));
            }
        }
        true
    }

    /// Drain outcomes of dialogs that closed since the last call
    pub fn take_closed(&mut self) -> Vec<(DialogId, Option<O>)> {
        self.closed.drain(..).collect()
    }

    /// Render all open dialogs, bottom-up so the top-most paints last
    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        for (_, dialog) in &mut self.dialogs {
            let (percent_x, lines) = dialog.size_hint();
            let panel = LayoutManager::centered_rect_lines(percent_x, lines, area);
            f.render_widget(Clear, panel);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type.border_type())
                .border_style(theme.border_style(true))
                .title(Span::styled(format!(" {} ", dialog.title()), theme.accent_style()));
            let inner = block.inner(panel);
            f.render_widget(block, panel);

            if inner.height > 1 {
                let body = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
                dialog.render_body(f, body, theme);

                let hint_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
                f.render_widget(
                    Paragraph::new(dialog.instructions().to_string())
                        .alignment(Alignment::Center)
                        .style(theme.muted_style()),
                    hint_area,
                );
            } else {
                dialog.render_body(f, inner, theme);
            }
        }
    }
}

impl<O> Default for DialogStack<O> {
    fn default() -> Self {
        Self::new()
    }
}
