use lumen::components::{
    Badge, BadgeVariant, Breadcrumbs, BreadcrumbItem, Button, Column, DataTable, Paginator, ToastManager,
};
use lumen::core::Component;
use lumen::theme::Theme;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

fn row_text(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;
    (area.x..area.x + area.width).map(|x| buffer[(x, y)].symbol()).collect()
}

fn draw<C: Component>(component: &mut C, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let theme = Theme::dark();
    terminal
        .draw(|f| component.render(f, Rect::new(0, 0, width, height), &theme))
        .unwrap();
    terminal.backend().buffer().clone()
}

#[test]
fn test_button_renders_its_label() {
    let mut button = Button::primary("Save");
    let buffer = draw(&mut button, 20, 3);
    assert!(row_text(&buffer, 1).contains("Save"), "label missing: {:?}", buffer);
}

#[test]
fn test_badge_span_wraps_text() {
    let theme = Theme::dark();
    let span = Badge::new("active").variant(BadgeVariant::Success).span(&theme);
    assert_eq!(span.content.as_ref(), "(active)");
}

#[test]
fn test_breadcrumbs_join_with_separator() {
    let mut crumbs = Breadcrumbs::new(vec![
        BreadcrumbItem::link("Home", "/dashboard"),
        BreadcrumbItem::new("Users"),
    ]);
    let buffer = draw(&mut crumbs, 30, 1);
    assert!(row_text(&buffer, 0).contains("Home › Users"));
}

#[test]
fn test_table_renders_header_and_sort_arrow() {
    let mut table: DataTable<&str> =
        DataTable::new(vec![Column::new("name", "Name", |r: &&str| r.to_string()).sortable()]);
    table.set_rows(vec!["alpha", "beta"]);
    table.cycle_sort(0);

    let buffer = draw(&mut table, 24, 8);
    let all: String = (0..8).map(|y| row_text(&buffer, y)).collect();
    assert!(all.contains("Name ▲"), "sorted header shows the ascending arrow");
    assert!(all.contains("alpha"));
}

#[test]
fn test_empty_table_shows_empty_message() {
    let mut table: DataTable<&str> =
        DataTable::new(vec![Column::new("name", "Name", |r: &&str| r.to_string())])
            .empty_message("No users match the filters");

    let buffer = draw(&mut table, 40, 6);
    let all: String = (0..6).map(|y| row_text(&buffer, y)).collect();
    assert!(all.contains("No users match the filters"));
}

#[test]
fn test_toast_stack_renders_messages() {
    let mut toasts = ToastManager::new();
    toasts.success("Saved");
    toasts.error("Broke");

    let buffer = draw(&mut toasts, 50, 6);
    let all: String = (0..6).map(|y| row_text(&buffer, y)).collect();
    assert!(all.contains("Saved"));
    assert!(all.contains("Broke"));
}

#[test]
fn test_paginator_renders_current_window() {
    let mut paginator = Paginator::new(10);
    paginator.set_total_items(200);
    paginator.go_to(10).unwrap();

    let buffer = draw(&mut paginator, 50, 1);
    let row = row_text(&buffer, 0);
    assert!(row.contains('…'), "ellipsis rendered: {row}");
    assert!(row.contains("10"));
    assert!(row.contains("200 items"));
}
