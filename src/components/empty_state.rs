use crate::core::Component;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyStateIcon {
    #[default]
    Search,
    Folder,
    Users,
}

impl EmptyStateIcon {
    fn glyph(self) -> &'static str {
        match self {
            EmptyStateIcon::Search => "🔍",
            EmptyStateIcon::Folder => "📁",
            EmptyStateIcon::Users => "👥",
        }
    }
}

/// Centered placeholder for empty result sets
pub struct EmptyState {
    icon: EmptyStateIcon,
    title: String,
    description: String,
}

impl EmptyState {
    #[must_use]
    pub fn new(icon: EmptyStateIcon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Component for EmptyState {
    type Event = ();

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = vec![
            Line::from(Span::raw(self.icon.glyph())),
            Line::from(Span::styled(self.title.clone(), theme.text_style())),
        ];
        if !self.description.is_empty() {
            lines.push(Line::from(Span::styled(self.description.clone(), theme.muted_style())));
        }

        // Vertically center within the available area
        let content_height = lines.len() as u16;
        let top = area.height.saturating_sub(content_height) / 2;
        let centered = Rect::new(area.x, area.y + top, area.width, content_height.min(area.height));

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
    }
}
