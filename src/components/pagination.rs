//! Client-side pagination control.
//!
//! Pages are 1-indexed. Up to seven pages render in full; beyond that the
//! strip windows around the current page with ellipses, always keeping the
//! first and last page visible.

use crate::constants::PAGINATION_FULL_THRESHOLD;
use crate::core::Component;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One entry in the page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationEvent {
    PageChanged(usize),
}

/// Pagination state and strip
pub struct Paginator {
    total_items: usize,
    page_size: usize,
    current_page: usize,
    focused: bool,
}

impl Paginator {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            total_items: 0,
            page_size: page_size.max(1),
            current_page: 1,
            focused: false,
        }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Update the item count, clamping the current page into range
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.current_page.min(self.total_pages());
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        if self.total_items == 0 {
            return 1;
        }
        self.total_items.div_ceil(self.page_size)
    }

    /// Item index range of the current page (`start..end`)
    #[must_use]
    pub fn page_range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total_items);
        start.min(end)..end
    }

    /// Move to a page; out-of-range and same-page requests are silent no-ops
    pub fn go_to(&mut self, page: usize) -> Option<PaginationEvent> {
        if page < 1 || page > self.total_pages() || page == self.current_page {
            return None;
        }
        self.current_page = page;
        Some(PaginationEvent::PageChanged(page))
    }

    pub fn next(&mut self) -> Option<PaginationEvent> {
        self.go_to(self.current_page + 1)
    }

    pub fn previous(&mut self) -> Option<PaginationEvent> {
        self.go_to(self.current_page.saturating_sub(1))
    }

    /// The visible page strip
    #[must_use]
    pub fn visible_pages(&self) -> Vec<PageItem> {
        let total = self.total_pages();
        let current = self.current_page;
        let mut pages = Vec::new();

        if total <= PAGINATION_FULL_THRESHOLD {
            for page in 1..=total {
                pages.push(PageItem::Page(page));
            }
            return pages;
        }

        // Always show the first page
        pages.push(PageItem::Page(1));

        if current > 3 {
            pages.push(PageItem::Ellipsis);
        }

        // Pages around the current one
        let start = current.saturating_sub(1).max(2);
        let end = (current + 1).min(total - 1);
        for page in start..=end {
            pages.push(PageItem::Page(page));
        }

        if current < total - 2 {
            pages.push(PageItem::Ellipsis);
        }

        // Always show the last page
        pages.push(PageItem::Page(total));

        pages
    }
}

impl Component for Paginator {
    type Event = PaginationEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<PaginationEvent> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.previous(),
            KeyCode::Right | KeyCode::Char('l') => self.next(),
            KeyCode::Home => self.go_to(1),
            KeyCode::End => self.go_to(self.total_pages()),
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let arrow_style = theme.border_style(self.focused);
        let mut spans: Vec<Span> = vec![Span::styled("« ", arrow_style)];

        for item in self.visible_pages() {
            match item {
                PageItem::Page(page) => {
                    let style = if page == self.current_page {
                        theme.selection_style()
                    } else {
                        theme.muted_style()
                    };
                    spans.push(Span::styled(format!(" {page} "), style));
                }
                PageItem::Ellipsis => spans.push(Span::styled(" … ", theme.muted_style())),
            }
        }

        spans.push(Span::styled(" »", arrow_style));
        spans.push(Span::styled(
            format!("   {} items", self.total_items),
            theme.muted_style(),
        ));

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
