//! Sign-in page rendered on the centered auth layout.

use crate::app::actions::Action;
use crate::app::router::Route;
use crossterm::event::{KeyCode, KeyEvent};
use lumen::components::{Alert, AlertKind, Button, Checkbox, TextInput, Validator};
use lumen::core::{Component, LayoutManager};
use lumen::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELDS: usize = 4;

/// Login form state
pub struct LoginPage {
    email: TextInput,
    password: TextInput,
    remember_me: Checkbox,
    submit: Button,
    alert: Option<Alert>,
    focus: usize,
}

impl LoginPage {
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self {
            email: TextInput::new("Email")
                .placeholder("you@example.com")
                .required()
                .with_validator(Validator::Email),
            password: TextInput::new("Password").placeholder("••••••••").masked().required(),
            remember_me: Checkbox::new("Remember me"),
            submit: Button::primary("Sign in"),
            alert: None,
            focus: 0,
        };
        page.email.on_focus();
        page
    }

    /// Clear credentials and errors (used on logout)
    pub fn reset(&mut self) {
        self.email.clear();
        self.email.reset_state();
        self.password.clear();
        self.password.reset_state();
        self.alert = None;
        self.set_focus(0);
    }

    fn set_focus(&mut self, focus: usize) {
        match self.focus {
            0 => self.email.on_blur(),
            1 => self.password.on_blur(),
            2 => self.remember_me.on_blur(),
            _ => self.submit.on_blur(),
        }
        self.focus = focus % FIELDS;
        match self.focus {
            0 => self.email.on_focus(),
            1 => self.password.on_focus(),
            2 => self.remember_me.on_focus(),
            _ => self.submit.on_focus(),
        }
    }

    fn try_submit(&mut self) -> Action {
        let email = self.email.value().to_string();
        let password = self.password.value().to_string();

        if email.is_empty() || password.is_empty() {
            self.alert = Some(Alert::new(AlertKind::Error, "Please enter both email and password."));
            return Action::None;
        }

        if !email.contains('@') {
            self.alert = Some(Alert::new(AlertKind::Error, "Please enter a valid email address."));
            return Action::None;
        }

        // Demo application: well-formed credentials sign in
        self.alert = None;
        log::info!("signed in as {email}");
        Action::SignedIn(email)
    }
}

impl LoginPage {
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.set_focus(self.focus + 1);
                return Action::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.set_focus(self.focus + FIELDS - 1);
                return Action::None;
            }
            _ => {}
        }

        match self.focus {
            0 => {
                if let Some(lumen::components::InputEvent::Submitted(_)) = self.email.handle_key(key) {
                    self.set_focus(1);
                }
            }
            1 => {
                if let Some(lumen::components::InputEvent::Submitted(_)) = self.password.handle_key(key) {
                    return self.try_submit();
                }
            }
            2 => {
                self.remember_me.handle_key(key);
            }
            _ => {
                if self.submit.handle_key(key).is_some() {
                    return self.try_submit();
                }
            }
        }

        Action::None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let card_area = LayoutManager::centered_rect_lines(40, 20, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type.border_type())
            .border_style(theme.border_style(false))
            .title(Span::styled(format!(" {} ", Route::Login.title()), theme.accent_style()));
        let inner = block.inner(card_area);
        f.render_widget(block, card_area);

        if inner.height < 12 {
            return;
        }

        let mut y = inner.y;

        f.render_widget(
            Paragraph::new("Welcome back")
                .alignment(Alignment::Center)
                .style(theme.text_style()),
            Rect::new(inner.x, y, inner.width, 1),
        );
        y += 2;

        if let Some(alert) = &mut self.alert {
            let alert_area = Rect::new(inner.x, y, inner.width, 3);
            alert.render(f, alert_area, theme);
            y += 3;
        }

        let email_area = Rect::new(inner.x, y, inner.width, 4);
        self.email.render(f, email_area, theme);
        y += 4;

        let password_area = Rect::new(inner.x, y, inner.width, 4);
        self.password.render(f, password_area, theme);
        y += 4;

        if y < inner.y + inner.height {
            self.remember_me.render(f, Rect::new(inner.x, y, inner.width, 1), theme);
            y += 2;
        }

        if y + 3 <= inner.y + inner.height {
            self.submit.render(f, Rect::new(inner.x, y, inner.width, 3), theme);
        }
    }
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}
