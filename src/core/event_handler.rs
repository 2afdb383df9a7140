use crossterm::event::{poll, Event, KeyEvent};
use std::time::Duration;

/// Terminal event pump for the application loop.
///
/// Pending terminal events are drained without blocking; when none are
/// queued the handler sleeps one tick interval and reports [`EventType::Tick`]
/// so timer-driven components keep advancing.
pub struct EventHandler {
    tick_interval: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(crate::constants::TICK_INTERVAL_MS))
    }

    pub fn with_tick_rate(tick_interval: Duration) -> Self {
        Self { tick_interval }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            match crossterm::event::read()? {
                Event::Key(key) => return Ok(EventType::Key(key)),
                Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                _ => return Ok(EventType::Other),
            }
        }

        // If no immediate event, wait one tick
        tokio::time::sleep(self.tick_interval).await;
        Ok(EventType::Tick)
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
