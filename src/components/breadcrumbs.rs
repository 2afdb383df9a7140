use crate::core::Component;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One crumb in the trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub route: Option<String>,
}

impl BreadcrumbItem {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            route: None,
        }
    }

    #[must_use]
    pub fn link(label: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            route: Some(route.into()),
        }
    }
}

/// Breadcrumb trail; the last crumb is styled as the current location
pub struct Breadcrumbs {
    items: Vec<BreadcrumbItem>,
}

impl Breadcrumbs {
    #[must_use]
    pub fn new(items: Vec<BreadcrumbItem>) -> Self {
        Self { items }
    }

    pub fn set_items(&mut self, items: Vec<BreadcrumbItem>) {
        self.items = items;
    }

    #[must_use]
    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }
}

impl Component for Breadcrumbs {
    type Event = ();

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans: Vec<Span> = Vec::new();
        let last = self.items.len().saturating_sub(1);

        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" › ", theme.muted_style()));
            }
            let style = if i == last {
                theme.text_style()
            } else {
                theme.muted_style()
            };
            spans.push(Span::styled(item.label.clone(), style));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
