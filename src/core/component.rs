use crate::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Base trait implemented by every component in the library.
///
/// Parents push state in through plain setters; children report back by
/// returning a value of their associated [`Event`](Component::Event) type.
/// There is no other channel between components.
pub trait Component {
    /// Event emitted to the owning parent
    type Event;

    fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Handle a key press. Display-only components keep the default no-op.
    fn handle_key(&mut self, _key: KeyEvent) -> Option<Self::Event> {
        None
    }

    /// Advance timer-driven state (debounce, auto-dismiss, spinner frames).
    /// Called at the application tick rate.
    fn on_tick(&mut self) -> Option<Self::Event> {
        None
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme);

    // Optional lifecycle methods
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
