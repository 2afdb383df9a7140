//! Toast notifications.
//!
//! The manager owns a stack of live toasts keyed by a monotonically
//! incrementing id, auto-dismisses them when their deadline passes (checked
//! on the application tick) and renders them top-right, newest first.
//! Dismissing an unknown id is a silent no-op.

use crate::constants::{TOAST_DEFAULT_MS, TOAST_ERROR_MS, TOAST_MAX_VISIBLE, TOAST_WARNING_MS};
use crate::core::Component;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    fn icon(self) -> &'static str {
        match self {
            ToastLevel::Success => "✔",
            ToastLevel::Info => "ℹ",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✖",
        }
    }

    fn color(self, theme: &Theme) -> Color {
        match self {
            ToastLevel::Success => theme.success,
            ToastLevel::Info => theme.info,
            ToastLevel::Warning => theme.warning,
            ToastLevel::Error => theme.danger,
        }
    }
}

/// A live toast instance
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub level: ToastLevel,
    deadline: Option<Instant>,
}

/// Owns all live toasts
pub struct ToastManager {
    toasts: Vec<Toast>,
    counter: u64,
}

impl ToastManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            counter: 0,
        }
    }

    /// Show a toast; `duration: None` keeps it until dismissed explicitly
    pub fn show(&mut self, message: impl Into<String>, level: ToastLevel, duration: Option<Duration>) -> ToastId {
        self.show_at(Instant::now(), message, level, duration)
    }

    /// Clock-injected variant of [`show`](ToastManager::show)
    pub fn show_at(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        level: ToastLevel,
        duration: Option<Duration>,
    ) -> ToastId {
        self.counter += 1;
        let id = ToastId(self.counter);
        let message = message.into();
        log::debug!("toast {id:?} shown: {message}");
        self.toasts.push(Toast {
            id,
            message,
            level,
            deadline: duration.map(|d| now + d),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.show(message, ToastLevel::Success, Some(Duration::from_millis(TOAST_DEFAULT_MS)))
    }

    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.show(message, ToastLevel::Info, Some(Duration::from_millis(TOAST_DEFAULT_MS)))
    }

    /// Warnings stay a little longer
    pub fn warning(&mut self, message: impl Into<String>) -> ToastId {
        self.show(message, ToastLevel::Warning, Some(Duration::from_millis(TOAST_WARNING_MS)))
    }

    /// Errors stay the longest
    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.show(message, ToastLevel::Error, Some(Duration::from_millis(TOAST_ERROR_MS)))
    }

    /// Dismiss by id; unknown ids are a silent no-op
    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    /// Remove every toast whose deadline has passed
    pub fn sweep(&mut self, now: Instant) {
        self.toasts.retain(|t| match t.deadline {
            Some(deadline) => now < deadline,
            None => true,
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Live toasts, newest first
    #[must_use]
    pub fn toasts(&self) -> Vec<&Toast> {
        self.toasts.iter().rev().collect()
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ToastManager {
    type Event = ();

    fn on_tick(&mut self) -> Option<()> {
        self.sweep(Instant::now());
        None
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if self.toasts.is_empty() {
            return;
        }

        let width = 40.min(area.width);
        let x = area.x + area.width - width;

        for (i, toast) in self.toasts().iter().take(TOAST_MAX_VISIBLE).enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.y + area.height {
                break;
            }
            let toast_area = Rect::new(x, y, width, 1);
            let color = toast.level.color(theme);

            f.render_widget(Clear, toast_area);
            f.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", toast.level.icon()),
                        Style::default().fg(theme.surface).bg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" {} ", toast.message),
                        Style::default().fg(theme.text).bg(theme.surface_elevated),
                    ),
                ])),
                toast_area,
            );
        }
    }
}
