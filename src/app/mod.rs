//! The showcase admin application.
//!
//! Wires the component library into four routed pages behind a sidebar
//! shell, with a global command palette, theme toggle and toast stack.

pub mod actions;
pub mod data;
pub mod pages;
pub mod router;
pub mod shell;

use actions::Action;
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lumen::components::{
    Command, CommandPalette, CommandRegistry, Menu, MenuAlign, MenuEvent, MenuItem, PaletteEvent, ToastManager,
};
use lumen::config::Config;
use lumen::core::{Component, EventHandler, EventType, LayoutManager};
use lumen::logger::Logger;
use lumen::theme::Theme;
use pages::{DashboardPage, LoginPage, SettingsPage, UsersPage};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use router::Route;
use std::io;
use std::time::Duration;

const CURRENT_USER: &str = "Alex Morgan";

/// Root application state
pub struct AdminApp {
    config: Config,
    theme: Theme,
    route: Route,
    should_quit: bool,
    palette: CommandPalette,
    toasts: ToastManager,
    logger: Logger,
    user_menu: Menu,
    menu_anchor: ratatui::layout::Rect,
    dashboard: DashboardPage,
    users: UsersPage,
    settings: SettingsPage,
    login: LoginPage,
}

impl AdminApp {
    #[must_use]
    pub fn new(config: Config, theme: Theme) -> Self {
        let dark = config.ui.theme != "light";

        let mut registry = CommandRegistry::new();
        registry.register(Command::new("nav.dashboard", "Go to Dashboard").category("Navigate"));
        registry.register(Command::new("nav.users", "Go to Users").category("Navigate"));
        registry.register(Command::new("nav.settings", "Go to Settings").category("Navigate"));
        registry.register(Command::new("project.new", "New project...").category("Actions").shortcut("n"));
        registry.register(Command::new("user.add", "Add user...").category("Actions").shortcut("a"));
        registry.register(Command::new("theme.toggle", "Toggle dark mode").category("Appearance").shortcut("^T"));
        registry.register(Command::new("session.logout", "Log out").category("Session").shortcut("^L"));
        registry.register(Command::new("app.quit", "Quit").category("Session").shortcut("^C"));

        Self {
            config,
            theme,
            route: Route::Login,
            should_quit: false,
            palette: CommandPalette::new(registry),
            toasts: ToastManager::new(),
            logger: Logger::new(),
            user_menu: Menu::new(vec![
                MenuItem::new("menu.profile", "Profile"),
                MenuItem::new("menu.settings", "Settings"),
                MenuItem::new("menu.logout", "Log out"),
            ])
            .align(MenuAlign::Right),
            menu_anchor: ratatui::layout::Rect::default(),
            dashboard: DashboardPage::new(),
            users: UsersPage::new(),
            settings: SettingsPage::new(dark),
            login: LoginPage::new(),
        }
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    fn is_dark(&self) -> bool {
        self.config.ui.theme != "light"
    }

    fn set_dark_mode(&mut self, dark: bool) {
        let name = if dark { "dark" } else { "light" };
        self.theme = Theme::preset(name).unwrap_or_default();
        self.config.ui.theme = name.to_string();
        self.settings.set_dark_mode(dark);
        self.logger.log(format!("theme switched to {name}"));

        // Persist the choice like the original theme service did
        if let Err(err) = self.config.save() {
            log::warn!("could not persist theme choice: {err:#}");
        }
    }

    fn navigate(&mut self, route: Route) {
        if self.route != route {
            log::info!("navigating to {}", route.path());
            self.route = route;
        }
    }

    fn execute_command(&mut self, id: &str) {
        match id {
            "nav.dashboard" => self.navigate(Route::Dashboard),
            "nav.users" => self.navigate(Route::Users),
            "nav.settings" => self.navigate(Route::Settings),
            "project.new" => {
                self.navigate(Route::Dashboard);
                self.dashboard.open_create_project();
            }
            "user.add" => {
                self.navigate(Route::Users);
                self.users.open_add_user();
            }
            "theme.toggle" => self.set_dark_mode(!self.is_dark()),
            "session.logout" => self.apply(Action::Logout),
            "app.quit" => self.should_quit = true,
            other => log::warn!("unknown command id '{other}'"),
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Navigate(route) => self.navigate(route),
            Action::SignedIn(email) => {
                self.toasts.success(format!("Signed in as {email}"));
                self.navigate(Route::Dashboard);
            }
            Action::Logout => {
                self.login.reset();
                self.user_menu.close();
                self.navigate(Route::Login);
                self.toasts.info("Signed out");
            }
            Action::ToggleTheme => self.set_dark_mode(!self.is_dark()),
            Action::SetDarkMode(dark) => self.set_dark_mode(dark),
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Quit works everywhere
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        // The palette overlays everything else
        if self.palette.is_open() {
            if let Some(PaletteEvent::Execute(id)) = self.palette.handle_key(key) {
                self.execute_command(&id);
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('k') => {
                    self.palette.toggle();
                    return;
                }
                KeyCode::Char('t') => {
                    self.apply(Action::ToggleTheme);
                    return;
                }
                KeyCode::Char('l') if self.route.requires_auth() => {
                    self.apply(Action::Logout);
                    return;
                }
                KeyCode::Char('u') if self.route.requires_auth() => {
                    self.user_menu.toggle();
                    return;
                }
                _ => {}
            }
        }

        if self.route.requires_auth() {
            if self.user_menu.is_open() {
                if let Some(MenuEvent::Selected(id)) = self.user_menu.handle_key(key) {
                    match id.as_str() {
                        "menu.profile" | "menu.settings" => self.navigate(Route::Settings),
                        "menu.logout" => self.apply(Action::Logout),
                        _ => {}
                    }
                }
                return;
            }

            if key.modifiers.contains(KeyModifiers::ALT) {
                match key.code {
                    KeyCode::Char('1') => return self.navigate(Route::Dashboard),
                    KeyCode::Char('2') => return self.navigate(Route::Users),
                    KeyCode::Char('3') => return self.navigate(Route::Settings),
                    _ => {}
                }
            }
        }

        let action = match self.route {
            Route::Login => self.login.handle_key(key),
            Route::Dashboard => self.dashboard.handle_key(key, &mut self.toasts),
            Route::Users => self.users.handle_key(key, &mut self.toasts),
            Route::Settings => self.settings.handle_key(key, &mut self.toasts),
        };
        self.apply(action);
    }

    /// Advance timers; returns whether a redraw is needed
    pub fn on_tick(&mut self) -> bool {
        let toasts_before = self.toasts.len();
        self.toasts.on_tick();
        let mut changed = self.toasts.len() != toasts_before;

        changed |= match self.route {
            Route::Users => self.users.on_tick(),
            Route::Dashboard => self.dashboard.on_tick(),
            _ => false,
        };

        changed
    }

    fn status_hints(&self) -> &'static str {
        if self.palette.is_open() {
            "↑↓ navigate · Enter run · Esc close"
        } else {
            match self.route {
                Route::Login => "Tab next field · Enter sign in",
                Route::Dashboard => self.dashboard.status_hints(),
                Route::Users => self.users.status_hints(),
                Route::Settings => self.settings.status_hints(),
            }
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let frame_area = f.area();
        let theme = self.theme.clone();

        let areas = LayoutManager::shell_layout(frame_area);
        let content = areas[0];
        let status = areas[1];

        if self.route.requires_auth() {
            let panes = LayoutManager::sidebar_layout(content, self.config.ui.sidebar_width);
            shell::render_sidebar(f, panes[0], &theme, self.route);

            let page = LayoutManager::header_layout(panes[1]);
            self.menu_anchor = shell::render_header(f, page[0], &theme, self.route, CURRENT_USER);

            match self.route {
                Route::Dashboard => self.dashboard.render(f, page[1], &theme),
                Route::Users => self.users.render(f, page[1], &theme),
                Route::Settings => self.settings.render(f, page[1], &theme),
                Route::Login => {}
            }

            let anchor = self.menu_anchor;
            self.user_menu.render_for(f, anchor, frame_area, &theme);
        } else {
            self.login.render(f, content, &theme);
        }

        shell::render_status_bar(f, status, &theme, self.status_hints());

        // Frame-root overlays paint last
        self.palette.render(f, frame_area, &theme);
        self.toasts.render(f, frame_area, &theme);
    }
}

fn init_file_logging(config: &Config) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&config.logging.file).context("Failed to open log file")?)
        .apply()
        .context("Failed to install logger")?;
    Ok(())
}

/// Load configuration, set up the terminal and run the event loop
pub async fn run() -> Result<()> {
    let config = Config::load()?;
    if config.logging.enabled {
        init_file_logging(&config)?;
    }
    let theme = config.resolve_theme()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(io::stdout(), EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = AdminApp::new(config, theme);
    let mut event_handler = EventHandler::with_tick_rate(tick_rate);

    let result = run_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AdminApp,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                app.handle_key(key);
                needs_render = true;
            }
            EventType::Resize(_, _) => {
                needs_render = true;
            }
            EventType::Tick => {
                needs_render = app.on_tick();
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
