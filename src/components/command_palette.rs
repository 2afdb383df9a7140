//! Command palette with fuzzy-free substring filtering.
//!
//! Commands register once (insertion order is the display order), the query
//! filters them case-insensitively, results group by category, and the
//! active row wraps modulo the visible list length.

use crate::core::{Component, LayoutManager};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A registered command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub shortcut: Option<String>,
}

impl Command {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: None,
            shortcut: None,
        }
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

/// Holds the registered command set and the open/closed state
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    open: bool,
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
    /// Execute the command with this id
    Execute(String),
    Closed,
}

/// The palette overlay
pub struct CommandPalette {
    registry: CommandRegistry,
    query: String,
    active_index: usize,
}

impl CommandPalette {
    #[must_use]
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            query: String::new(),
            active_index: 0,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Open with a fresh query
    pub fn open(&mut self) {
        self.registry.open();
        self.query.clear();
        self.active_index = 0;
    }

    pub fn close(&mut self) {
        self.registry.close();
    }

    pub fn toggle(&mut self) {
        if self.registry.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.registry.is_open()
    }

    /// Case-insensitive substring filter over titles, in registration order
    #[must_use]
    pub fn filtered(&self) -> Vec<&Command> {
        let query = self.query.to_lowercase();
        self.registry
            .commands()
            .iter()
            .filter(|c| query.is_empty() || c.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Filtered commands grouped by category, preserving registration order
    #[must_use]
    pub fn grouped(&self) -> Vec<(Option<String>, Vec<&Command>)> {
        let mut groups: Vec<(Option<String>, Vec<&Command>)> = Vec::new();
        for command in self.filtered() {
            match groups.iter_mut().find(|(cat, _)| *cat == command.category) {
                Some((_, members)) => members.push(command),
                None => groups.push((command.category.clone(), vec![command])),
            }
        }
        groups
    }

    fn set_query(&mut self, query: String) {
        self.query = query;
        self.active_index = 0;
    }

    /// Move the highlight, wrapping modulo the visible length
    fn navigate(&mut self, down: bool) {
        let len = self.filtered().len();
        if len == 0 {
            self.active_index = 0;
            return;
        }
        self.active_index = if down {
            (self.active_index + 1) % len
        } else {
            (self.active_index + len - 1) % len
        };
    }
}

impl Component for CommandPalette {
    type Event = PaletteEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<PaletteEvent> {
        if !self.is_open() {
            return None;
        }

        match key.code {
            KeyCode::Esc => {
                self.close();
                Some(PaletteEvent::Closed)
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
                let id = self.filtered().get(self.active_index).map(|c| c.id.clone())?;
                self.close();
                log::debug!("palette executing command '{id}'");
                Some(PaletteEvent::Execute(id))
            }
            KeyCode::Backspace => {
                let mut query = self.query.clone();
                query.pop();
                self.set_query(query);
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut query = self.query.clone();
                query.push(c);
                self.set_query(query);
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if !self.is_open() {
            return;
        }

        let palette_area = LayoutManager::centered_rect_lines(60, 18, area);
        f.render_widget(Clear, palette_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type.border_type())
            .border_style(theme.border_style(true))
            .title(Span::styled(" Command Palette ", theme.accent_style()));
        let inner = block.inner(palette_area);
        f.render_widget(block, palette_area);

        if inner.height == 0 {
            return;
        }

        // Query line
        let query_line = Line::from(vec![
            Span::styled("🔍 ", theme.muted_style()),
            Span::styled(format!("{}█", self.query), theme.text_style()),
        ]);
        f.render_widget(
            Paragraph::new(query_line),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );

        let body = Rect::new(
            inner.x,
            inner.y + 2,
            inner.width,
            inner.height.saturating_sub(3),
        );

        let groups = self.grouped();
        if groups.is_empty() {
            f.render_widget(
                Paragraph::new("No results found.")
                    .alignment(Alignment::Center)
                    .style(theme.muted_style()),
                body,
            );
        } else {
            let mut lines: Vec<Line> = Vec::new();
            let mut flat_index = 0usize;
            for (category, members) in &groups {
                if let Some(category) = category {
                    lines.push(Line::from(Span::styled(
                        category.to_uppercase(),
                        theme.muted_style().add_modifier(Modifier::BOLD),
                    )));
                }
                for command in members {
                    let active = flat_index == self.active_index;
                    let style = if active { theme.selection_style() } else { theme.text_style() };
                    let mut spans = vec![
                        Span::styled(if active { "› " } else { "  " }, style),
                        Span::styled(command.title.clone(), style),
                    ];
                    if let Some(shortcut) = &command.shortcut {
                        spans.push(Span::styled(format!("  {shortcut}"), theme.muted_style()));
                    }
                    lines.push(Line::from(spans));
                    flat_index += 1;
                }
            }
            f.render_widget(Paragraph::new(lines), body);
        }

        // Footer hints
        if inner.height >= 3 {
            let footer = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
            let hints = Line::from(vec![
                Span::styled("↵", theme.accent_style()),
                Span::styled(" select  ", theme.muted_style()),
                Span::styled("↑↓", theme.accent_style()),
                Span::styled(" navigate  ", theme.muted_style()),
                Span::styled("esc", theme.accent_style()),
                Span::styled(" close", theme.muted_style()),
            ]);
            f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), footer);
        }
    }
}
