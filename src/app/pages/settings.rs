//! Settings page: tabbed profile / preferences / notifications form.

use crate::app::actions::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lumen::components::{
    Checkbox, Select, SelectOption, TagsInput, TextInput, ToastManager, Toggle, ToggleEvent, Validator,
};
use lumen::core::Component;
use lumen::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

const TAB_PROFILE: usize = 0;
const TAB_PREFERENCES: usize = 1;
const TAB_NOTIFICATIONS: usize = 2;

/// Settings form state
pub struct SettingsPage {
    tabs: lumen::components::Tabs,
    // Profile
    display_name: TextInput,
    email: TextInput,
    // Preferences
    language: Select,
    interests: TagsInput,
    dark_mode: Toggle,
    // Notifications
    email_notifications: Toggle,
    push_notifications: Toggle,
    weekly_digest: Checkbox,
    /// 0 = tab strip, then the controls of the active tab
    focus: usize,
}

impl SettingsPage {
    #[must_use]
    pub fn new(dark_mode: bool) -> Self {
        let mut display_name = TextInput::new("Display name").required();
        display_name.set_value("Alex Morgan");
        let mut email = TextInput::new("Email").required().with_validator(Validator::Email);
        email.set_value("alex@example.com");

        let mut language = Select::new(
            "Language",
            vec![
                SelectOption::new("en", "English"),
                SelectOption::new("fr", "Français"),
                SelectOption::new("de", "Deutsch"),
                SelectOption::new("es", "Español"),
            ],
        );
        language.set_value("en");

        let mut interests = TagsInput::new("Interests").placeholder("Add an interest...");
        interests.set_tags(vec!["rust".to_string(), "terminals".to_string()]);

        Self {
            tabs: lumen::components::Tabs::new(vec![
                "Profile".to_string(),
                "Preferences".to_string(),
                "Notifications".to_string(),
            ]),
            display_name,
            email,
            language,
            interests,
            dark_mode: Toggle::new("Dark mode").checked(dark_mode),
            email_notifications: Toggle::new("Email notifications").checked(true),
            push_notifications: Toggle::new("Push notifications"),
            weekly_digest: Checkbox::new("Weekly digest").checked(true),
            focus: 0,
        }
    }

    /// Keep the dark-mode toggle in sync with the global shortcut
    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode.set_checked(dark);
    }

    fn field_count(&self) -> usize {
        // Tab strip plus the controls on the active tab
        match self.tabs.active() {
            TAB_PROFILE => 3,
            TAB_PREFERENCES => 4,
            _ => 4,
        }
    }

    fn blur_all(&mut self) {
        self.display_name.on_blur();
        self.email.on_blur();
        self.language.on_blur();
        self.interests.on_blur();
        self.dark_mode.on_blur();
        self.email_notifications.on_blur();
        self.push_notifications.on_blur();
        self.weekly_digest.on_blur();
    }

    fn set_focus(&mut self, focus: usize) {
        self.blur_all();
        self.focus = focus % self.field_count();
        match (self.tabs.active(), self.focus) {
            (_, 0) => {}
            (TAB_PROFILE, 1) => self.display_name.on_focus(),
            (TAB_PROFILE, 2) => self.email.on_focus(),
            (TAB_PREFERENCES, 1) => self.language.on_focus(),
            (TAB_PREFERENCES, 2) => self.interests.on_focus(),
            (TAB_PREFERENCES, 3) => self.dark_mode.on_focus(),
            (TAB_NOTIFICATIONS, 1) => self.email_notifications.on_focus(),
            (TAB_NOTIFICATIONS, 2) => self.push_notifications.on_focus(),
            (TAB_NOTIFICATIONS, 3) => self.weekly_digest.on_focus(),
            _ => {}
        }
    }

    fn save(&mut self, toasts: &mut ToastManager) {
        self.display_name.mark_touched();
        self.email.mark_touched();

        if !self.display_name.is_valid() || !self.email.is_valid() {
            toasts.error("Please fix the highlighted fields");
            return;
        }

        log::info!("settings saved for {}", self.email.value());
        toasts.success("Settings saved");
    }

    pub fn handle_key(&mut self, key: KeyEvent, toasts: &mut ToastManager) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.save(toasts);
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.set_focus(self.focus + 1);
                return Action::None;
            }
            KeyCode::BackTab => {
                let count = self.field_count();
                self.set_focus(self.focus + count - 1);
                return Action::None;
            }
            _ => {}
        }

        if self.focus == 0 {
            // Left/Right move between tabs; focus resets to the strip
            if self.tabs.handle_key(key).is_some() {
                self.set_focus(0);
            }
            return Action::None;
        }

        match (self.tabs.active(), self.focus) {
            (TAB_PROFILE, 1) => {
                self.display_name.handle_key(key);
            }
            (TAB_PROFILE, 2) => {
                self.email.handle_key(key);
            }
            (TAB_PREFERENCES, 1) => {
                self.language.handle_key(key);
            }
            (TAB_PREFERENCES, 2) => {
                self.interests.handle_key(key);
            }
            (TAB_PREFERENCES, 3) => {
                if let Some(ToggleEvent::Changed(dark)) = self.dark_mode.handle_key(key) {
                    return Action::SetDarkMode(dark);
                }
            }
            (TAB_NOTIFICATIONS, 1) => {
                self.email_notifications.handle_key(key);
            }
            (TAB_NOTIFICATIONS, 2) => {
                self.push_notifications.handle_key(key);
            }
            (TAB_NOTIFICATIONS, 3) => {
                self.weekly_digest.handle_key(key);
            }
            _ => {}
        }

        Action::None
    }

    #[must_use]
    pub fn status_hints(&self) -> &'static str {
        if self.focus == 0 {
            "←/→ switch tab · Tab into form · Ctrl+S save"
        } else {
            "Tab next field · Ctrl+S save"
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        self.tabs.render(f, rows[0], theme);

        let body = rows[1];
        match self.tabs.active() {
            TAB_PROFILE => {
                let fields = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(4), Constraint::Length(4), Constraint::Min(0)])
                    .split(body);
                self.display_name.render(f, fields[0], theme);
                self.email.render(f, fields[1], theme);
            }
            TAB_PREFERENCES => {
                let fields = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3 + self.language.popup_height()),
                        Constraint::Length(3),
                        Constraint::Length(1),
                        Constraint::Min(0),
                    ])
                    .split(body);
                self.language.render(f, fields[0], theme);
                self.interests.render(f, fields[1], theme);
                self.dark_mode.render(f, fields[2], theme);
            }
            _ => {
                let fields = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Length(1),
                        Constraint::Length(1),
                        Constraint::Min(0),
                    ])
                    .split(body);
                self.email_notifications.render(f, fields[0], theme);
                self.push_notifications.render(f, fields[1], theme);
                self.weekly_digest.render(f, fields[2], theme);
                if fields[3].height > 1 {
                    let note = Rect::new(fields[3].x, fields[3].y + 1, fields[3].width, 1);
                    f.render_widget(
                        Paragraph::new("Notification changes apply after saving").style(theme.muted_style()),
                        note,
                    );
                }
            }
        }
    }
}
