//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main shell areas (content on top, status bar below)
    #[must_use]
    pub fn shell_layout(area: Rect) -> Vec<Rect> {
        let top_height = area.height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, area.width, top_height);
        let status_area = Rect::new(area.x, area.y + top_height, area.width, 1);

        vec![top_area, status_area]
    }

    /// Split the content area into sidebar + page (sidebar capped)
    #[must_use]
    pub fn sidebar_layout(area: Rect, sidebar_width: u16) -> Vec<Rect> {
        let sidebar = std::cmp::min(area.width / 3, sidebar_width);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Split the page into header + body
    #[must_use]
    pub fn header_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let height = std::cmp::min(height_lines, r.height);
        let top = (r.height.saturating_sub(height)) / 2;
        let vertical = Rect::new(r.x, r.y + top, r.width, height);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical)[1]
    }

    /// Right-anchored drawer area covering the full content height
    #[must_use]
    pub fn drawer_rect(percent_x: u16, r: Rect) -> Rect {
        let width = (u32::from(r.width) * u32::from(percent_x.min(100)) / 100) as u16;
        let width = width.max(20).min(r.width);
        Rect::new(r.x + r.width - width, r.y, width, r.height)
    }
}
