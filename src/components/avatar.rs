//! User avatar with an initials fallback.
//!
//! Terminals cannot show images; a configured glyph stands in for one, and
//! a missing or blank glyph falls back to initials derived from the display
//! name.

use crate::core::Component;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Avatar rendered as a colored initials chip
#[derive(Debug, Clone)]
pub struct Avatar {
    name: String,
    glyph: Option<String>,
    color: Option<Color>,
    size: AvatarSize,
}

impl Avatar {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glyph: None,
            color: None,
            size: AvatarSize::default(),
        }
    }

    /// Glyph shown instead of initials; blank glyphs fall back to initials
    #[must_use]
    pub fn glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    /// Up-to-two uppercase initials from the display name
    #[must_use]
    pub fn initials(name: &str) -> String {
        let words: Vec<&str> = name.split_whitespace().collect();
        match words.as_slice() {
            [] => String::new(),
            [single] => single.chars().take(2).flat_map(char::to_uppercase).collect(),
            [first, rest @ ..] => {
                let mut initials = String::new();
                if let Some(c) = first.chars().next() {
                    initials.extend(c.to_uppercase());
                }
                if let Some(c) = rest.first().and_then(|w| w.chars().next()) {
                    initials.extend(c.to_uppercase());
                }
                initials
            }
        }
    }

    fn display_text(&self) -> String {
        match self.glyph.as_deref() {
            Some(glyph) if !glyph.trim().is_empty() => glyph.to_string(),
            _ => Self::initials(&self.name),
        }
    }

    /// Render as a styled span
    #[must_use]
    pub fn span(&self, theme: &Theme) -> Span<'static> {
        let color = self.color.unwrap_or(theme.primary);
        let pad = match self.size {
            AvatarSize::Sm => "",
            AvatarSize::Md => " ",
            AvatarSize::Lg => "  ",
        };
        Span::styled(
            format!("{pad}{}{pad}", self.display_text()),
            Style::default()
                .fg(theme.surface)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    }
}

impl Component for Avatar {
    type Event = ();

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Paragraph::new(self.span(theme)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::Avatar;

    #[test]
    fn initials_from_two_words() {
        assert_eq!(Avatar::initials("John Doe"), "JD");
    }

    #[test]
    fn initials_take_first_two_words_only() {
        assert_eq!(Avatar::initials("Mary Jane Watson"), "MJ");
    }

    #[test]
    fn single_word_uses_two_characters() {
        assert_eq!(Avatar::initials("alice"), "AL");
    }

    #[test]
    fn empty_name_yields_empty_initials() {
        assert_eq!(Avatar::initials("   "), "");
    }

    #[test]
    fn blank_glyph_falls_back_to_initials() {
        let avatar = Avatar::new("John Doe").glyph("  ");
        assert_eq!(avatar.display_text(), "JD");
    }
}
