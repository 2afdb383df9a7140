//! Dashboard: stat cards, revenue chart, recent activity and the
//! create-project drawer.

use crate::app::actions::Action;
use crate::app::data::{demo_activities, demo_stats, revenue_series, Activity, Stat};
use crossterm::event::{KeyCode, KeyEvent};
use lumen::components::{
    Avatar, Button, Card, Chart, ChartKind, InputEvent, Series, TagsInput, TextInput, ToastManager, Validator,
};
use lumen::core::Component;
use lumen::overlay::Drawer;
use lumen::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create-project form hosted in a drawer
struct CreateProjectDrawer {
    drawer: Drawer,
    name: TextInput,
    description: TextInput,
    tags: TagsInput,
    submit: Button,
    focus: usize,
}

const DRAWER_FIELDS: usize = 4;

impl CreateProjectDrawer {
    fn new() -> Self {
        Self {
            drawer: Drawer::new("Create Project").width_percent(45),
            name: TextInput::new("Project name")
                .placeholder("My new project")
                .required()
                .with_validator(Validator::MinLength(3)),
            description: TextInput::new("Description").placeholder("What is this project about?"),
            tags: TagsInput::new("Tags"),
            submit: Button::primary("Create project"),
            focus: 0,
        }
    }

    fn set_focus(&mut self, focus: usize) {
        match self.focus {
            0 => self.name.on_blur(),
            1 => self.description.on_blur(),
            2 => self.tags.on_blur(),
            _ => self.submit.on_blur(),
        }
        self.focus = focus % DRAWER_FIELDS;
        match self.focus {
            0 => self.name.on_focus(),
            1 => self.description.on_focus(),
            2 => self.tags.on_focus(),
            _ => self.submit.on_focus(),
        }
    }

    fn open(&mut self) {
        self.drawer.open();
        self.set_focus(0);
    }

    fn reset(&mut self) {
        self.name.clear();
        self.name.reset_state();
        self.description.clear();
        self.description.reset_state();
        self.tags.clear();
    }

    /// Returns the created project name on a valid submit
    fn try_submit(&mut self) -> Option<String> {
        self.name.mark_touched();
        if !self.name.is_valid() {
            return None;
        }
        let name = self.name.value().to_string();
        self.drawer.close();
        self.reset();
        Some(name)
    }

    fn handle_key(&mut self, key: KeyEvent, toasts: &mut ToastManager) -> bool {
        if !self.drawer.is_open() {
            return false;
        }

        if self.drawer.handle_key(key).is_some() {
            return true;
        }

        match key.code {
            KeyCode::Tab => {
                self.set_focus(self.focus + 1);
                return true;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus + DRAWER_FIELDS - 1);
                return true;
            }
            _ => {}
        }

        let submit = match self.focus {
            0 => matches!(self.name.handle_key(key), Some(InputEvent::Submitted(_))),
            1 => matches!(self.description.handle_key(key), Some(InputEvent::Submitted(_))),
            2 => {
                self.tags.handle_key(key);
                false
            }
            _ => self.submit.handle_key(key).is_some(),
        };

        if submit {
            if self.focus < DRAWER_FIELDS - 1 && self.focus != 2 {
                self.set_focus(self.focus + 1);
            }
            if self.focus == DRAWER_FIELDS - 1 {
                match self.try_submit() {
                    Some(name) => {
                        toasts.success(format!("Project '{name}' created"));
                    }
                    None => {
                        toasts.error("Please fix the highlighted fields");
                    }
                }
            }
        }
        true
    }

    fn render(&mut self, f: &mut Frame, frame: Rect, theme: &Theme) {
        let Some(inner) = self.drawer.render_chrome(f, frame, theme) else {
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        self.name.render(f, rows[0], theme);
        self.description.render(f, rows[1], theme);
        self.tags.render(f, rows[2], theme);
        self.submit.render(f, rows[4], theme);
    }
}

/// Dashboard page state
pub struct DashboardPage {
    stats: Vec<Stat>,
    activities: Vec<Activity>,
    chart: Chart,
    create_project: CreateProjectDrawer,
}

impl DashboardPage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: demo_stats(),
            activities: demo_activities(),
            chart: Chart::new(ChartKind::Sparkline, vec![Series::new("Revenue", revenue_series())])
                .title("Revenue, last 14 days"),
            create_project: CreateProjectDrawer::new(),
        }
    }

    /// Open the create-project drawer (also reachable from the palette)
    pub fn open_create_project(&mut self) {
        self.create_project.open();
    }

    pub fn handle_key(&mut self, key: KeyEvent, toasts: &mut ToastManager) -> Action {
        if self.create_project.handle_key(key, toasts) {
            return Action::None;
        }

        if key.code == KeyCode::Char('n') {
            self.create_project.open();
        }
        Action::None
    }

    pub fn on_tick(&mut self) -> bool {
        false
    }

    #[must_use]
    pub fn status_hints(&self) -> &'static str {
        if self.create_project.drawer.is_open() {
            "Tab next field · Enter submit · Esc close"
        } else {
            "n new project · Ctrl+K commands · Ctrl+T theme"
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(8), Constraint::Min(0)])
            .split(area);

        // Stat cards
        let stat_columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, self.stats.len() as u32); self.stats.len()])
            .split(rows[0]);

        for (stat, column) in self.stats.iter().zip(stat_columns.iter()) {
            let card = Card::new().title(stat.label.clone());
            let inner = card.render_frame(f, *column, theme);
            if inner.height >= 2 {
                let change_style = if stat.positive {
                    ratatui::style::Style::default().fg(theme.success)
                } else {
                    ratatui::style::Style::default().fg(theme.danger)
                };
                let arrow = if stat.positive { "▲" } else { "▼" };
                f.render_widget(
                    Paragraph::new(vec![
                        Line::from(Span::styled(stat.value.clone(), theme.accent_style())),
                        Line::from(Span::styled(format!("{arrow} {}", stat.change), change_style)),
                    ]),
                    inner,
                );
            }
        }

        self.chart.render(f, rows[1], theme);

        // Recent activity
        let card = Card::new().title("Recent activity");
        let inner = card.render_frame(f, rows[2], theme);
        let mut lines: Vec<Line> = Vec::new();
        for activity in &self.activities {
            let avatar = Avatar::new(activity.name.clone()).color(activity.color);
            lines.push(Line::from(vec![
                avatar.span(theme),
                Span::raw(" "),
                Span::styled(activity.title.clone(), theme.text_style()),
                Span::styled(format!("  {}", activity.time), theme.muted_style()),
            ]));
        }
        f.render_widget(Paragraph::new(lines), inner);

        let frame_area = f.area();
        self.create_project.render(f, frame_area, theme);
    }
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}
