//! Authenticated shell: sidebar navigation, header with breadcrumbs and
//! the user menu, and the one-line status bar.

use crate::app::router::Route;
use lumen::components::{Avatar, BreadcrumbItem, Breadcrumbs};
use lumen::core::Component;
use lumen::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn route_icon(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "📊",
        Route::Users => "👥",
        Route::Settings => "⚙",
        Route::Login => "🔑",
    }
}

/// Render the sidebar navigation, highlighting the active route
pub fn render_sidebar(f: &mut Frame, area: Rect, theme: &Theme, active: Route) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.border_style(false))
        .title(Span::styled(" lumen admin ", theme.accent_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::default()];
    for route in Route::nav_routes() {
        let style = if route == active {
            theme.selection_style()
        } else {
            theme.muted_style()
        };
        let marker = if route == active { "│ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, theme.accent_style()),
            Span::styled(format!("{} {}", route_icon(route), route.title()), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Breadcrumb trail for a route
#[must_use]
pub fn breadcrumbs_for(route: Route) -> Vec<BreadcrumbItem> {
    match route {
        Route::Dashboard => vec![BreadcrumbItem::link("Home", Route::Dashboard.path())],
        other => vec![
            BreadcrumbItem::link("Home", Route::Dashboard.path()),
            BreadcrumbItem::new(other.title()),
        ],
    }
}

/// Render the header; returns the avatar area for anchoring the user menu
pub fn render_header(f: &mut Frame, area: Rect, theme: &Theme, route: Route, user_name: &str) -> Rect {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut breadcrumbs = Breadcrumbs::new(breadcrumbs_for(route));
    let crumbs_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1);
    breadcrumbs.render(f, crumbs_area, theme);

    // Avatar + name, right aligned
    let avatar = Avatar::new(user_name);
    let label = format!(" {user_name} ");
    let width = (label.chars().count() as u16 + 5).min(inner.width);
    let avatar_area = Rect::new(inner.x + inner.width.saturating_sub(width), inner.y, width, 1);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            avatar.span(theme),
            Span::styled(label, theme.text_style()),
            Span::styled("▾", theme.muted_style()),
        ]))
        .alignment(Alignment::Right),
        avatar_area,
    );

    avatar_area
}

/// One-line status bar with context-sensitive shortcut hints
pub fn render_status_bar(f: &mut Frame, area: Rect, theme: &Theme, hints: &str) {
    let text = format!("{hints} · Ctrl+C quit");
    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).style(theme.muted_style()),
        area,
    );
}
