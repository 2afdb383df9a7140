//! Users page: debounced search, joined-after filter, sortable paginated
//! table, add-user drawer, detail dialog and delete confirmation.
//!
//! Filtering, sorting and paging all happen here — the table only displays
//! the current page and reports sort/activation events back.

use crate::app::actions::Action;
use crate::app::data::{demo_users, Role, User};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use lumen::components::{
    Badge, Button, Column, DataTable, DateEvent, DateField, InputEvent, PaginationEvent, Paginator,
    SearchEvent, SearchInput, Select, SelectOption, SortDirection, TableEvent, TextInput, ToastManager,
    Validator,
};
use lumen::core::Component;
use lumen::overlay::{ConfirmDialog, Dialog, DialogResponse, DialogStack, Drawer};
use lumen::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Search,
    Joined,
    Table,
    Pagination,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Search => Focus::Joined,
            Focus::Joined => Focus::Table,
            Focus::Table => Focus::Pagination,
            Focus::Pagination => Focus::Search,
        }
    }

    fn previous(self) -> Focus {
        match self {
            Focus::Search => Focus::Pagination,
            Focus::Joined => Focus::Search,
            Focus::Table => Focus::Joined,
            Focus::Pagination => Focus::Table,
        }
    }
}

/// Read-only user detail dialog
struct UserDetailDialog {
    user: User,
}

impl Dialog for UserDetailDialog {
    type Outcome = bool;

    fn title(&self) -> &str {
        "User details"
    }

    fn handle_key(&mut self, key: KeyEvent) -> DialogResponse<bool> {
        match key.code {
            KeyCode::Enter => DialogResponse::Close(None),
            _ => DialogResponse::Stay,
        }
    }

    fn render_body(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let field = |label: &str, value: String, theme: &Theme| {
            Line::from(vec![
                Span::styled(format!("{label:<10}"), theme.muted_style()),
                Span::styled(value, theme.text_style()),
            ])
        };

        let lines = vec![
            field("Name", self.user.name.clone(), theme),
            field("Email", self.user.email.clone(), theme),
            field("Role", self.user.role.as_str().to_string(), theme),
            Line::from(vec![
                Span::styled(format!("{:<10}", "Status"), theme.muted_style()),
                Badge::new(self.user.status.as_str())
                    .variant(self.user.status.badge_variant())
                    .span(theme),
            ]),
            field("Joined", self.user.joined.format("%Y-%m-%d").to_string(), theme),
        ];

        f.render_widget(Paragraph::new(lines), area);
    }

    fn size_hint(&self) -> (u16, u16) {
        (40, 10)
    }

    fn instructions(&self) -> &str {
        "Enter / Esc close"
    }
}

/// Add-user form hosted in a drawer
struct AddUserDrawer {
    drawer: Drawer,
    name: TextInput,
    email: TextInput,
    role: Select,
    submit: Button,
    focus: usize,
}

const ADD_USER_FIELDS: usize = 4;

impl AddUserDrawer {
    fn new() -> Self {
        Self {
            drawer: Drawer::new("Add User").width_percent(45),
            name: TextInput::new("Full name").placeholder("Jane Doe").required(),
            email: TextInput::new("Email")
                .placeholder("jane@example.com")
                .required()
                .with_validator(Validator::Email),
            role: Select::new(
                "Role",
                vec![
                    SelectOption::new("Admin", "Admin"),
                    SelectOption::new("Editor", "Editor"),
                    SelectOption::new("Viewer", "Viewer"),
                ],
            )
            .required(),
            submit: Button::primary("Add user"),
            focus: 0,
        }
    }

    fn set_focus(&mut self, focus: usize) {
        match self.focus {
            0 => self.name.on_blur(),
            1 => self.email.on_blur(),
            2 => self.role.on_blur(),
            _ => self.submit.on_blur(),
        }
        self.focus = focus % ADD_USER_FIELDS;
        match self.focus {
            0 => self.name.on_focus(),
            1 => self.email.on_focus(),
            2 => self.role.on_focus(),
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
        self.email.clear();
        self.email.reset_state();
        self.role.clear();
    }

    /// Validate and collect the new user's fields
    fn try_submit(&mut self) -> Option<(String, String, Role)> {
        self.name.mark_touched();
        self.email.mark_touched();
        self.role.mark_touched();

        if !self.name.is_valid() || !self.email.is_valid() || self.role.validation_error().is_some() {
            return None;
        }

        let role = self.role.value().and_then(Role::parse)?;
        let result = (self.name.value().to_string(), self.email.value().to_string(), role);
        self.drawer.close();
        self.reset();
        Some(result)
    }

    /// Returns `Some(new user fields)` on a valid submit, consuming the key
    /// either way while the drawer is open.
    fn handle_key(&mut self, key: KeyEvent, toasts: &mut ToastManager) -> Option<Option<(String, String, Role)>> {
        if !self.drawer.is_open() {
            return None;
        }

        // The open role popup takes Esc before the drawer does
        if !(self.focus == 2 && self.role.is_open()) && self.drawer.handle_key(key).is_some() {
            return Some(None);
        }

        match key.code {
            KeyCode::Tab => {
                self.set_focus(self.focus + 1);
                return Some(None);
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus + ADD_USER_FIELDS - 1);
                return Some(None);
            }
            _ => {}
        }

        match self.focus {
            0 => {
                if matches!(self.name.handle_key(key), Some(InputEvent::Submitted(_))) {
                    self.set_focus(1);
                }
            }
            1 => {
                if matches!(self.email.handle_key(key), Some(InputEvent::Submitted(_))) {
                    self.set_focus(2);
                }
            }
            2 => {
                self.role.handle_key(key);
            }
            _ => {
                if self.submit.handle_key(key).is_some() {
                    return match self.try_submit() {
                        Some(fields) => Some(Some(fields)),
                        None => {
                            toasts.error("Please fix the highlighted fields");
                            Some(None)
                        }
                    };
                }
            }
        }

        Some(None)
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
                Constraint::Length(3 + self.role.popup_height()),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        self.name.render(f, rows[0], theme);
        self.email.render(f, rows[1], theme);
        self.role.render(f, rows[2], theme);
        self.submit.render(f, rows[4], theme);
    }
}

/// Users page state
pub struct UsersPage {
    users: Vec<User>,
    next_id: u32,
    search: SearchInput,
    joined_after: DateField,
    table: DataTable<User>,
    paginator: Paginator,
    query: String,
    joined_filter: Option<NaiveDate>,
    focus: Focus,
    add_user: AddUserDrawer,
    dialogs: DialogStack<bool>,
    pending_delete: Option<u32>,
}

impl UsersPage {
    #[must_use]
    pub fn new() -> Self {
        let users = demo_users();
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;

        let mut page = Self {
            users,
            next_id,
            search: SearchInput::new().placeholder("Search name, email or role"),
            joined_after: DateField::new("Joined after"),
            table: DataTable::new(Self::columns()).striped().empty_message("No users match the filters"),
            paginator: Paginator::new(PAGE_SIZE),
            query: String::new(),
            joined_filter: None,
            focus: Focus::Table,
            add_user: AddUserDrawer::new(),
            dialogs: DialogStack::new(),
            pending_delete: None,
        };
        page.table.on_focus();
        page.refresh();
        page
    }

    fn columns() -> Vec<Column<User>> {
        vec![
            Column::new("name", "Name", |u: &User| u.name.clone()).sortable(),
            Column::new("email", "Email", |u: &User| u.email.clone()).sortable(),
            Column::new("role", "Role", |u: &User| u.role.as_str().to_string())
                .sortable()
                .width(Constraint::Length(8)),
            Column::new("status", "Status", |u: &User| u.status.as_str().to_string())
                .sortable()
                .width(Constraint::Length(12))
                .styled(|u: &User, theme: &Theme| {
                    Badge::new(u.status.as_str()).variant(u.status.badge_variant()).span(theme)
                }),
            Column::new("joined", "Joined", |u: &User| u.joined.format("%Y-%m-%d").to_string())
                .sortable()
                .width(Constraint::Length(12))
                .align(Alignment::Right),
        ]
    }

    fn status_counts(&self) -> (usize, usize, usize) {
        let active = self.users.iter().filter(|u| u.status == crate::app::data::UserStatus::Active).count();
        let pending = self.users.iter().filter(|u| u.status == crate::app::data::UserStatus::Pending).count();
        let inactive = self
            .users
            .iter()
            .filter(|u| u.status == crate::app::data::UserStatus::Inactive)
            .count();
        (active, pending, inactive)
    }

    /// Filter + sort the full data set
    fn visible_users(&self) -> Vec<User> {
        let query = self.query.to_lowercase();
        let mut result: Vec<User> = self
            .users
            .iter()
            .filter(|user| {
                if !query.is_empty() {
                    let matched = user.name.to_lowercase().contains(&query)
                        || user.email.to_lowercase().contains(&query)
                        || user.role.as_str().to_lowercase().contains(&query);
                    if !matched {
                        return false;
                    }
                }
                match self.joined_filter {
                    Some(after) => user.joined >= after,
                    None => true,
                }
            })
            .cloned()
            .collect();

        let sort = self.table.sort_state();
        if let Some(direction) = sort.direction {
            let column = sort.column.clone();
            result.sort_by(|a, b| match column.as_str() {
                "name" => a.name.cmp(&b.name),
                "email" => a.email.cmp(&b.email),
                "role" => a.role.as_str().cmp(b.role.as_str()),
                "status" => a.status.as_str().cmp(b.status.as_str()),
                "joined" => a.joined.cmp(&b.joined),
                _ => std::cmp::Ordering::Equal,
            });
            if direction == SortDirection::Descending {
                result.reverse();
            }
        }

        result
    }

    /// Recompute the paginator and the table's current page
    fn refresh(&mut self) {
        let visible = self.visible_users();
        self.paginator.set_total_items(visible.len());
        let range = self.paginator.page_range();
        let page = visible.get(range).map(<[User]>::to_vec).unwrap_or_default();
        self.table.set_rows(page);
    }

    fn set_focus(&mut self, focus: Focus) {
        match self.focus {
            Focus::Search => self.search.on_blur(),
            Focus::Joined => self.joined_after.on_blur(),
            Focus::Table => self.table.on_blur(),
            Focus::Pagination => self.paginator.on_blur(),
        }
        self.focus = focus;
        match self.focus {
            Focus::Search => self.search.on_focus(),
            Focus::Joined => self.joined_after.on_focus(),
            Focus::Table => self.table.on_focus(),
            Focus::Pagination => self.paginator.on_focus(),
        }
    }

    fn reset_filters(&mut self, toasts: &mut ToastManager) {
        self.search.clear();
        self.joined_after.clear();
        self.query.clear();
        self.joined_filter = None;
        let _ = self.paginator.go_to(1);
        self.refresh();
        toasts.info("Filters reset");
    }

    fn confirm_delete(&mut self, user: &User) {
        self.pending_delete = Some(user.id);
        self.dialogs.open(Box::new(
            ConfirmDialog::new(
                "Delete user",
                format!("Remove {} ({})? This cannot be undone.", user.name, user.email),
            )
            .confirm_label("Delete")
            .danger(),
        ));
    }

    fn drain_dialog_outcomes(&mut self, toasts: &mut ToastManager) {
        for (_, outcome) in self.dialogs.take_closed() {
            let Some(id) = self.pending_delete.take() else {
                continue;
            };
            if outcome == Some(true) {
                if let Some(index) = self.users.iter().position(|u| u.id == id) {
                    let removed = self.users.remove(index);
                    self.refresh();
                    toasts.success(format!("{} deleted", removed.name));
                }
            }
        }
    }

    pub fn add_user(&mut self, name: String, email: String, role: Role) {
        let user = User {
            id: self.next_id,
            name,
            email,
            role,
            status: crate::app::data::UserStatus::Pending,
            joined: chrono::Local::now().date_naive(),
        };
        self.next_id += 1;
        self.users.push(user);
        self.refresh();
    }

    /// Open the add-user drawer (also reachable from the palette)
    pub fn open_add_user(&mut self) {
        self.add_user.open();
    }

    pub fn handle_key(&mut self, key: KeyEvent, toasts: &mut ToastManager) -> Action {
        // Open dialogs trap focus
        if self.dialogs.handle_key(key) {
            self.drain_dialog_outcomes(toasts);
            return Action::None;
        }

        if let Some(submitted) = self.add_user.handle_key(key, toasts) {
            if let Some((name, email, role)) = submitted {
                let display_name = name.clone();
                self.add_user(name, email, role);
                toasts.success(format!("{display_name} added"));
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return Action::None;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.previous());
                return Action::None;
            }
            _ => {}
        }

        // Letter shortcuts only apply outside the text-entry fields
        if matches!(self.focus, Focus::Table | Focus::Pagination) {
            match key.code {
                KeyCode::Char('a') => {
                    self.open_add_user();
                    return Action::None;
                }
                KeyCode::Char('d') => {
                    if let Some(user) = self.table.selected_row().cloned() {
                        self.confirm_delete(&user);
                    }
                    return Action::None;
                }
                KeyCode::Char('r') => {
                    self.reset_filters(toasts);
                    return Action::None;
                }
                _ => {}
            }
        }

        match self.focus {
            Focus::Search => {
                if let Some(SearchEvent::Cleared) = self.search.handle_key(key) {
                    self.query.clear();
                    self.refresh();
                }
            }
            Focus::Joined => {
                if let Some(DateEvent::Changed(date)) = self.joined_after.handle_key(key) {
                    self.joined_filter = date;
                    let _ = self.paginator.go_to(1);
                    self.refresh();
                }
            }
            Focus::Table => match self.table.handle_key(key) {
                Some(TableEvent::SortChanged(_)) => self.refresh(),
                Some(TableEvent::RowActivated(index)) => {
                    if let Some(user) = self.table.rows().get(index).cloned() {
                        self.dialogs.open(Box::new(UserDetailDialog { user }));
                    }
                }
                None => {}
            },
            Focus::Pagination => {
                if let Some(PaginationEvent::PageChanged(_)) = self.paginator.handle_key(key) {
                    self.refresh();
                }
            }
        }

        Action::None
    }

    /// Debounced search emissions arrive on the tick
    pub fn on_tick(&mut self) -> bool {
        if let Some(SearchEvent::QueryChanged(query)) = self.search.on_tick() {
            self.query = query;
            let _ = self.paginator.go_to(1);
            self.refresh();
            return true;
        }
        false
    }

    #[must_use]
    pub fn status_hints(&self) -> &'static str {
        if self.dialogs.is_open() {
            "Enter confirm · Esc cancel"
        } else if self.add_user.drawer.is_open() {
            "Tab next field · Enter submit · Esc close"
        } else {
            match self.focus {
                Focus::Search | Focus::Joined => "Tab next · type to filter · Esc clear",
                Focus::Table => "↑↓ select · Enter details · 1-5 sort · a add · d delete · r reset",
                Focus::Pagination => "←/→ page · Home/End first/last · Tab next",
            }
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(area);

        // Filter row: search, date filter, status counts
        let filter_columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(25),
                Constraint::Percentage(35),
            ])
            .split(rows[0]);

        self.search.render(f, filter_columns[0], theme);
        self.joined_after.render(f, filter_columns[1], theme);

        let (active, pending, inactive) = self.status_counts();
        let counts = Line::from(vec![
            Badge::new(format!("{active} active"))
                .variant(lumen::components::BadgeVariant::Success)
                .span(theme),
            Span::raw(" "),
            Badge::new(format!("{pending} pending"))
                .variant(lumen::components::BadgeVariant::Warning)
                .span(theme),
            Span::raw(" "),
            Badge::new(format!("{inactive} inactive"))
                .variant(lumen::components::BadgeVariant::Neutral)
                .span(theme),
        ]);
        let counts_area = Rect::new(
            filter_columns[2].x,
            filter_columns[2].y + 1,
            filter_columns[2].width,
            1,
        );
        f.render_widget(Paragraph::new(counts).alignment(Alignment::Right), counts_area);

        self.table.render(f, rows[1], theme);
        self.paginator.render(f, rows[2], theme);

        // Overlays attach to the frame root
        let frame_area = f.area();
        self.add_user.render(f, frame_area, theme);
        self.dialogs.render(f, frame_area, theme);
    }
}

impl Default for UsersPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_into_search(page: &mut UsersPage, text: &str) {
        page.set_focus(Focus::Search);
        for c in text.chars() {
            page.handle_key(key(KeyCode::Char(c)), &mut ToastManager::new());
        }
        // Flush the debounce window deterministically
        let later = std::time::Instant::now() + std::time::Duration::from_secs(2);
        if let Some(lumen::components::SearchEvent::QueryChanged(query)) = page.search.poll_at(later) {
            page.query = query;
            let _ = page.paginator.go_to(1);
            page.refresh();
        }
    }

    #[test]
    fn first_page_shows_five_of_ten_users() {
        let page = UsersPage::new();
        assert_eq!(page.paginator.total_items(), 10);
        assert_eq!(page.table.rows().len(), PAGE_SIZE);
        assert_eq!(page.table.rows()[0].name, "John Doe");
    }

    #[test]
    fn search_filters_across_name_email_and_role() {
        let mut page = UsersPage::new();

        type_into_search(&mut page, "admin");
        let names: Vec<&str> = page.table.rows().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Sara Davis", "Emma White"]);

        // Typing in the search field waits for the debounce window:
        // nothing changed before the flush
        page.search.clear();
        page.set_focus(Focus::Search);
        page.handle_key(key(KeyCode::Char('x')), &mut ToastManager::new());
        assert_eq!(page.table.rows().len(), 3, "query not applied until the debounce fires");
    }

    #[test]
    fn sort_cycle_restores_insertion_order() {
        let mut page = UsersPage::new();
        page.set_focus(Focus::Table);
        let mut toasts = ToastManager::new();

        // asc by name
        page.handle_key(key(KeyCode::Char('1')), &mut toasts);
        assert_eq!(page.table.rows()[0].name, "Alice Smith");

        // desc by name
        page.handle_key(key(KeyCode::Char('1')), &mut toasts);
        assert_eq!(page.table.rows()[0].name, "Tom Wilson");

        // none: back to insertion order
        page.handle_key(key(KeyCode::Char('1')), &mut toasts);
        assert_eq!(page.table.rows()[0].name, "John Doe");
    }

    #[test]
    fn joined_after_filter_and_reset() {
        let mut page = UsersPage::new();
        page.set_focus(Focus::Joined);
        let mut toasts = ToastManager::new();

        for c in "2024-06-01".chars() {
            page.handle_key(key(KeyCode::Char(c)), &mut toasts);
        }
        assert_eq!(page.paginator.total_items(), 5);

        page.set_focus(Focus::Table);
        page.handle_key(key(KeyCode::Char('r')), &mut toasts);
        assert_eq!(page.paginator.total_items(), 10);
        assert!(!toasts.is_empty(), "reset reports through a toast");
    }

    #[test]
    fn narrowing_filters_clamps_the_page() {
        let mut page = UsersPage::new();
        page.set_focus(Focus::Pagination);
        let mut toasts = ToastManager::new();

        page.handle_key(key(KeyCode::Right), &mut toasts);
        assert_eq!(page.paginator.current_page(), 2);

        type_into_search(&mut page, "sara");
        assert_eq!(page.paginator.current_page(), 1);
        assert_eq!(page.table.rows().len(), 1);
    }

    #[test]
    fn delete_flow_requires_confirmation() {
        let mut page = UsersPage::new();
        page.set_focus(Focus::Table);
        let mut toasts = ToastManager::new();

        page.handle_key(key(KeyCode::Char('d')), &mut toasts);
        assert!(page.dialogs.is_open());

        // Cancel keeps the user
        page.handle_key(key(KeyCode::Esc), &mut toasts);
        assert_eq!(page.users.len(), 10);

        // Confirm deletes
        page.handle_key(key(KeyCode::Char('d')), &mut toasts);
        page.handle_key(key(KeyCode::Char('y')), &mut toasts);
        assert_eq!(page.users.len(), 9);
        assert!(!toasts.is_empty());
    }

    #[test]
    fn add_user_drawer_validates_then_submits() {
        let mut page = UsersPage::new();
        let mut toasts = ToastManager::new();
        page.set_focus(Focus::Table);

        page.handle_key(key(KeyCode::Char('a')), &mut toasts);
        assert!(page.add_user.drawer.is_open());

        // Empty form: submit fails and the drawer stays open
        page.handle_key(key(KeyCode::BackTab), &mut toasts);
        page.handle_key(key(KeyCode::Enter), &mut toasts);
        assert_eq!(page.users.len(), 10);
        assert!(page.add_user.drawer.is_open());
        assert!(!toasts.is_empty(), "validation failure reported through a toast");

        // Fill the form: name, email, role, then submit
        page.handle_key(key(KeyCode::Tab), &mut toasts);
        for c in "Jane Doe".chars() {
            page.handle_key(key(KeyCode::Char(c)), &mut toasts);
        }
        page.handle_key(key(KeyCode::Enter), &mut toasts);
        for c in "jane@example.com".chars() {
            page.handle_key(key(KeyCode::Char(c)), &mut toasts);
        }
        page.handle_key(key(KeyCode::Enter), &mut toasts);

        // Pick the second role option from the popup
        page.handle_key(key(KeyCode::Enter), &mut toasts);
        page.handle_key(key(KeyCode::Down), &mut toasts);
        page.handle_key(key(KeyCode::Enter), &mut toasts);

        page.handle_key(key(KeyCode::Tab), &mut toasts);
        page.handle_key(key(KeyCode::Enter), &mut toasts);

        assert_eq!(page.users.len(), 11);
        assert!(!page.add_user.drawer.is_open());
        let added = page.users.last().expect("user was appended");
        assert_eq!(added.name, "Jane Doe");
        assert_eq!(added.role, Role::Editor);
    }

    #[test]
    fn add_user_appends_with_fresh_id() {
        let mut page = UsersPage::new();
        page.add_user("New Person".to_string(), "new@example.com".to_string(), Role::Viewer);
        assert_eq!(page.users.len(), 11);
        assert_eq!(page.users.last().map(|u| u.id), Some(11));
    }
}
