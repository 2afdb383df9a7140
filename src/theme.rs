//! Design tokens shared by every component.
//!
//! A [`Theme`] is the terminal analog of a CSS custom-property sheet: one
//! struct of named colors and border styling that restyles the whole
//! component set without touching component code. Themes are plain data and
//! can be loaded from TOML or JSON files, or picked from the built-in
//! presets by name.

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Errors produced while parsing or loading themes
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid color '{0}': expected '#rrggbb' or a named terminal color")]
    InvalidColor(String),
    #[error("unknown theme preset '{0}'")]
    UnknownPreset(String),
    #[error("unsupported theme file extension: {0}")]
    UnsupportedFormat(String),
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme file: {0}")]
    Parse(String),
}

/// Border styling applied to every bordered component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeBorder {
    Plain,
    #[default]
    Rounded,
    Thick,
    Double,
}

impl ThemeBorder {
    #[must_use]
    pub fn border_type(self) -> BorderType {
        match self {
            ThemeBorder::Plain => BorderType::Plain,
            ThemeBorder::Rounded => BorderType::Rounded,
            ThemeBorder::Thick => BorderType::Thick,
            ThemeBorder::Double => BorderType::Double,
        }
    }
}

/// The design-token sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    #[serde(with = "color_serde")]
    pub primary: Color,
    #[serde(with = "color_serde")]
    pub primary_subtle: Color,
    #[serde(with = "color_serde")]
    pub surface: Color,
    #[serde(with = "color_serde")]
    pub surface_elevated: Color,
    #[serde(with = "color_serde")]
    pub border: Color,
    #[serde(with = "color_serde")]
    pub text: Color,
    #[serde(with = "color_serde")]
    pub text_muted: Color,
    #[serde(with = "color_serde")]
    pub success: Color,
    #[serde(with = "color_serde")]
    pub warning: Color,
    #[serde(with = "color_serde")]
    pub danger: Color,
    #[serde(with = "color_serde")]
    pub info: Color,
    pub border_type: ThemeBorder,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

static PRESETS: Lazy<BTreeMap<&'static str, Theme>> = Lazy::new(|| {
    let mut presets = BTreeMap::new();
    presets.insert("dark", Theme::dark());
    presets.insert("light", Theme::light());
    presets
});

impl Theme {
    /// Built-in dark preset
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(96, 165, 250),
            primary_subtle: Color::Rgb(30, 58, 95),
            surface: Color::Rgb(17, 24, 39),
            surface_elevated: Color::Rgb(31, 41, 55),
            border: Color::Rgb(75, 85, 99),
            text: Color::Rgb(229, 231, 235),
            text_muted: Color::Rgb(156, 163, 175),
            success: Color::Rgb(52, 211, 153),
            warning: Color::Rgb(251, 191, 36),
            danger: Color::Rgb(248, 113, 113),
            info: Color::Rgb(96, 165, 250),
            border_type: ThemeBorder::Rounded,
        }
    }

    /// Built-in light preset
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(37, 99, 235),
            primary_subtle: Color::Rgb(219, 234, 254),
            surface: Color::Rgb(255, 255, 255),
            surface_elevated: Color::Rgb(243, 244, 246),
            border: Color::Rgb(209, 213, 219),
            text: Color::Rgb(17, 24, 39),
            text_muted: Color::Rgb(107, 114, 128),
            success: Color::Rgb(5, 150, 105),
            warning: Color::Rgb(180, 83, 9),
            danger: Color::Rgb(220, 38, 38),
            info: Color::Rgb(37, 99, 235),
            border_type: ThemeBorder::Rounded,
        }
    }

    /// Look up a built-in preset by name
    pub fn preset(name: &str) -> Result<Theme, ThemeError> {
        PRESETS
            .get(name)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownPreset(name.to_string()))
    }

    /// Names of all built-in presets
    #[must_use]
    pub fn preset_names() -> Vec<&'static str> {
        PRESETS.keys().copied().collect()
    }

    /// Load a theme from a `.toml` or `.json` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Theme, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match ext.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| ThemeError::Parse(e.to_string())),
            "json" => serde_json::from_str(&content).map_err(|e| ThemeError::Parse(e.to_string())),
            other => Err(ThemeError::UnsupportedFormat(other.to_string())),
        }
    }

    // ---- style helpers -------------------------------------------------

    /// Default body text style
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Muted/secondary text style
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Primary accent style (titles, active items)
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Border style, highlighted while the component has focus
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style of the highlighted row/option in lists and tables
    #[must_use]
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .bg(self.primary_subtle)
            .add_modifier(Modifier::BOLD)
    }

    /// Validation error text style
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.danger)
    }
}

/// Parse `#rrggbb` hex or a named terminal color
pub fn parse_color(input: &str) -> Result<Color, ThemeError> {
    let trimmed = input.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        if hex.len() != 6 {
            return Err(ThemeError::InvalidColor(input.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ThemeError::InvalidColor(input.to_string()))
        };
        let r = parse(0..2)?;
        let g = parse(2..4)?;
        let b = parse(4..6)?;
        return Ok(Color::Rgb(r, g, b));
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        _ => Err(ThemeError::InvalidColor(input.to_string())),
    }
}

/// Render a color back to the form [`parse_color`] accepts
#[must_use]
pub fn format_color(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
        Color::Black => "black".to_string(),
        Color::Red => "red".to_string(),
        Color::Green => "green".to_string(),
        Color::Yellow => "yellow".to_string(),
        Color::Blue => "blue".to_string(),
        Color::Magenta => "magenta".to_string(),
        Color::Cyan => "cyan".to_string(),
        Color::White => "white".to_string(),
        Color::Gray => "gray".to_string(),
        Color::DarkGray => "darkgray".to_string(),
        Color::LightRed => "lightred".to_string(),
        Color::LightGreen => "lightgreen".to_string(),
        Color::LightYellow => "lightyellow".to_string(),
        Color::LightBlue => "lightblue".to_string(),
        Color::LightMagenta => "lightmagenta".to_string(),
        Color::LightCyan => "lightcyan".to_string(),
        other => format!("{other:?}").to_lowercase(),
    }
}

mod color_serde {
    use super::{format_color, parse_color};
    use ratatui::style::Color;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        format_color(*color).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_color(&raw).map_err(serde::de::Error::custom)
    }
}
