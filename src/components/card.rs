use crate::core::Component;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Padding},
    Frame,
};

/// Bordered content container with optional title and footer
pub struct Card {
    title: Option<String>,
    footer: Option<String>,
    hoverable: bool,
    no_padding: bool,
    focused: bool,
}

impl Card {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            footer: None,
            hoverable: false,
            no_padding: false,
            focused: false,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Highlight the border while focused
    #[must_use]
    pub fn hoverable(mut self) -> Self {
        self.hoverable = true;
        self
    }

    #[must_use]
    pub fn no_padding(mut self) -> Self {
        self.no_padding = true;
        self
    }

    fn block<'a>(&self, theme: &Theme) -> Block<'a> {
        let highlighted = self.hoverable && self.focused;
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type.border_type())
            .border_style(theme.border_style(highlighted));

        if !self.no_padding {
            block = block.padding(Padding::horizontal(1));
        }
        if let Some(title) = &self.title {
            block = block.title(Span::styled(format!(" {title} "), theme.accent_style()));
        }
        if let Some(footer) = &self.footer {
            block = block.title_bottom(Span::styled(format!(" {footer} "), theme.muted_style()));
        }
        block
    }

    /// Draw the chrome and return the interior area for host content
    pub fn render_frame(&self, f: &mut Frame, area: Rect, theme: &Theme) -> Rect {
        let block = self.block(theme);
        let inner = block.inner(area);
        f.render_widget(block, area);
        inner
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Card {
    type Event = ();

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.render_frame(f, area, theme);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
