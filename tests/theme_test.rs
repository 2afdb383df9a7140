use lumen::theme::{format_color, parse_color, Theme, ThemeError};
use ratatui::style::Color;

#[test]
fn test_parse_hex_color() {
    assert_eq!(parse_color("#3b82f6").unwrap(), Color::Rgb(0x3b, 0x82, 0xf6));
    assert_eq!(parse_color("  #000000 ").unwrap(), Color::Rgb(0, 0, 0));
}

#[test]
fn test_parse_named_color() {
    assert_eq!(parse_color("red").unwrap(), Color::Red);
    assert_eq!(parse_color("GRAY").unwrap(), Color::Gray);
    assert_eq!(parse_color("grey").unwrap(), Color::Gray);
}

#[test]
fn test_parse_invalid_color() {
    assert!(matches!(parse_color("#12345"), Err(ThemeError::InvalidColor(_))));
    assert!(matches!(parse_color("#gggggg"), Err(ThemeError::InvalidColor(_))));
    assert!(matches!(parse_color("chartreuse-ish"), Err(ThemeError::InvalidColor(_))));
}

#[test]
fn test_color_format_round_trip() {
    for input in ["#3b82f6", "red", "lightcyan", "#010203"] {
        let color = parse_color(input).unwrap();
        let formatted = format_color(color);
        assert_eq!(parse_color(&formatted).unwrap(), color, "round trip failed for {input}");
    }
}

#[test]
fn test_presets() {
    assert_eq!(Theme::preset("dark").unwrap(), Theme::dark());
    assert_eq!(Theme::preset("light").unwrap(), Theme::light());
    assert!(matches!(
        Theme::preset("solarized"),
        Err(ThemeError::UnknownPreset(_))
    ));
    assert_eq!(Theme::preset_names(), vec!["dark", "light"]);
}

#[test]
fn test_theme_toml_round_trip() {
    let theme = Theme::light();
    let serialized = toml::to_string(&theme).unwrap();
    let deserialized: Theme = toml::from_str(&serialized).unwrap();
    assert_eq!(deserialized, theme);
}

#[test]
fn test_theme_partial_toml_uses_defaults() {
    let theme: Theme = toml::from_str("primary = \"#ff0000\"").unwrap();
    assert_eq!(theme.primary, Color::Rgb(0xff, 0, 0));
    assert_eq!(theme.surface, Theme::dark().surface);
}

#[test]
fn test_theme_file_loading() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("theme.toml");
    std::fs::write(&toml_path, toml::to_string(&Theme::light()).unwrap()).unwrap();
    assert_eq!(Theme::load_from_file(&toml_path).unwrap(), Theme::light());

    let json_path = dir.path().join("theme.json");
    std::fs::write(&json_path, serde_json::to_string(&Theme::light()).unwrap()).unwrap();
    assert_eq!(Theme::load_from_file(&json_path).unwrap(), Theme::light());

    let bad_path = dir.path().join("theme.yaml");
    std::fs::write(&bad_path, "primary: red").unwrap();
    assert!(matches!(
        Theme::load_from_file(&bad_path),
        Err(ThemeError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_invalid_color_in_theme_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    std::fs::write(&path, "primary = \"#nothex\"").unwrap();
    assert!(matches!(Theme::load_from_file(&path), Err(ThemeError::Parse(_))));
}
