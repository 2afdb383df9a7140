use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lumen::components::{Command, CommandPalette, CommandRegistry, PaletteEvent};
use lumen::core::Component;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn palette() -> CommandPalette {
    let mut registry = CommandRegistry::new();
    registry.register(Command::new("nav.dashboard", "Go to Dashboard").category("Navigate"));
    registry.register(Command::new("nav.users", "Go to Users").category("Navigate"));
    registry.register(Command::new("user.add", "Add user").category("Actions"));
    registry.register(Command::new("theme.toggle", "Toggle dark mode").category("Appearance"));

    let mut palette = CommandPalette::new(registry);
    palette.open();
    palette
}

#[test]
fn test_filter_is_case_insensitive_substring() {
    let mut palette = palette();

    for c in "GO TO".chars() {
        palette.handle_key(key(KeyCode::Char(c)));
    }

    let titles: Vec<&str> = palette.filtered().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Go to Dashboard", "Go to Users"]);
}

#[test]
fn test_grouping_preserves_registration_order() {
    let palette = palette();
    let groups: Vec<Option<String>> = palette.grouped().into_iter().map(|(cat, _)| cat).collect();
    assert_eq!(
        groups,
        vec![
            Some("Navigate".to_string()),
            Some("Actions".to_string()),
            Some("Appearance".to_string()),
        ]
    );
}

#[test]
fn test_navigation_wraps_modulo_visible_length() {
    let mut palette = palette();
    assert_eq!(palette.active_index(), 0);

    // Up from the top wraps to the bottom of the filtered list
    palette.handle_key(key(KeyCode::Up));
    assert_eq!(palette.active_index(), 3);

    palette.handle_key(key(KeyCode::Down));
    assert_eq!(palette.active_index(), 0);

    // Narrow the list to two entries and wrap within it
    for c in "go".chars() {
        palette.handle_key(key(KeyCode::Char(c)));
    }
    palette.handle_key(key(KeyCode::Down));
    palette.handle_key(key(KeyCode::Down));
    assert_eq!(palette.active_index(), 0, "wraps modulo the filtered length");
}

#[test]
fn test_filter_change_resets_active_index() {
    let mut palette = palette();
    palette.handle_key(key(KeyCode::Down));
    assert_eq!(palette.active_index(), 1);

    palette.handle_key(key(KeyCode::Char('u')));
    assert_eq!(palette.active_index(), 0);
}

#[test]
fn test_enter_executes_and_closes() {
    let mut palette = palette();
    palette.handle_key(key(KeyCode::Down));

    let event = palette.handle_key(key(KeyCode::Enter));
    assert_eq!(event, Some(PaletteEvent::Execute("nav.users".to_string())));
    assert!(!palette.is_open());
}

#[test]
fn test_enter_with_no_results_is_noop() {
    let mut palette = palette();
    for c in "zzz".chars() {
        palette.handle_key(key(KeyCode::Char(c)));
    }
    assert!(palette.filtered().is_empty());
    assert_eq!(palette.handle_key(key(KeyCode::Enter)), None);
    assert!(palette.is_open(), "palette stays open after an empty Enter");
}

#[test]
fn test_escape_closes() {
    let mut palette = palette();
    assert_eq!(palette.handle_key(key(KeyCode::Esc)), Some(PaletteEvent::Closed));
    assert!(!palette.is_open());

    // Closed palette ignores input
    assert_eq!(palette.handle_key(key(KeyCode::Down)), None);
}

#[test]
fn test_reopening_resets_query() {
    let mut palette = palette();
    palette.handle_key(key(KeyCode::Char('x')));
    palette.close();
    palette.open();
    assert_eq!(palette.query(), "");
    assert_eq!(palette.filtered().len(), 4);
}
