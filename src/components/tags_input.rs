//! Tag list editor.
//!
//! Enter or `,` commits the trimmed buffer as a tag; empty and duplicate
//! tags are rejected silently. Backspace on an empty buffer removes the
//! last tag. Removing an out-of-range index is a no-op.

use crate::core::Component;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagsEvent {
    Added(String),
    Removed(String),
}

/// Inline tag editor
pub struct TagsInput {
    label: String,
    placeholder: String,
    tags: Vec<String>,
    buffer: String,
    disabled: bool,
    focused: bool,
}

impl TagsInput {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: "Add tags...".to_string(),
            tags: Vec::new(),
            buffer: String::new(),
            disabled: false,
            focused: false,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn clear(&mut self) {
        self.tags.clear();
        self.buffer.clear();
    }

    /// Add a tag; empty (after trim) and duplicate tags are rejected
    pub fn add_tag(&mut self, tag: &str) -> Option<TagsEvent> {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return None;
        }
        self.tags.push(tag.to_string());
        Some(TagsEvent::Added(tag.to_string()))
    }

    /// Remove by index; out of range is a no-op
    pub fn remove_tag(&mut self, index: usize) -> Option<TagsEvent> {
        if index >= self.tags.len() {
            return None;
        }
        let removed = self.tags.remove(index);
        Some(TagsEvent::Removed(removed))
    }

    fn commit_buffer(&mut self) -> Option<TagsEvent> {
        let buffer = std::mem::take(&mut self.buffer);
        self.add_tag(&buffer)
    }
}

impl Component for TagsInput {
    type Event = TagsEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<TagsEvent> {
        if self.disabled {
            return None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(',') => self.commit_buffer(),
            KeyCode::Backspace => {
                if self.buffer.pop().is_none() {
                    // Empty buffer: drop the last tag instead
                    let last = self.tags.len().checked_sub(1)?;
                    return self.remove_tag(last);
                }
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type.border_type())
            .border_style(theme.border_style(self.focused))
            .title(format!(" {} ", self.label));

        let mut spans: Vec<Span> = Vec::new();
        for tag in &self.tags {
            spans.push(Span::styled(
                format!(" {tag} ✕ "),
                Style::default().fg(theme.primary).bg(theme.primary_subtle),
            ));
            spans.push(Span::raw(" "));
        }

        if self.tags.is_empty() && self.buffer.is_empty() && !self.focused {
            spans.push(Span::styled(self.placeholder.clone(), theme.muted_style()));
        } else {
            let shown = if self.focused {
                format!("{}█", self.buffer)
            } else {
                self.buffer.clone()
            };
            spans.push(Span::styled(shown, theme.text_style()));
        }

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
