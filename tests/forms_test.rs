use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lumen::components::{
    Checkbox, CheckboxEvent, DateEvent, DateField, InputEvent, SearchEvent, SearchInput, Select, SelectEvent,
    SelectOption, TagsEvent, TagsInput, TextInput, Toggle, Validator,
};
use lumen::core::Component;
use std::time::{Duration, Instant};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(input: &mut TextInput, text: &str) {
    for c in text.chars() {
        input.handle_key(key(KeyCode::Char(c)));
    }
}

// ---- TextInput ---------------------------------------------------------

#[test]
fn test_text_input_editing() {
    let mut input = TextInput::new("Name");
    type_text(&mut input, "hello");
    assert_eq!(input.value(), "hello");

    input.handle_key(key(KeyCode::Backspace));
    assert_eq!(input.value(), "hell");

    // Cursor editing in the middle
    input.handle_key(key(KeyCode::Home));
    input.handle_key(key(KeyCode::Right));
    input.handle_key(key(KeyCode::Char('x')));
    assert_eq!(input.value(), "hxell");

    input.handle_key(key(KeyCode::Delete));
    assert_eq!(input.value(), "hxll");
}

#[test]
fn test_text_input_emits_changed_and_submitted() {
    let mut input = TextInput::new("Name");
    assert_eq!(
        input.handle_key(key(KeyCode::Char('a'))),
        Some(InputEvent::Changed("a".to_string()))
    );
    assert_eq!(
        input.handle_key(key(KeyCode::Enter)),
        Some(InputEvent::Submitted("a".to_string()))
    );

    // Backspace on an empty value emits nothing
    input.handle_key(key(KeyCode::Backspace));
    assert_eq!(input.handle_key(key(KeyCode::Backspace)), None);
}

#[test]
fn test_validator_precedence_and_visibility() {
    let mut input = TextInput::new("Email")
        .required()
        .with_validator(Validator::MinLength(5))
        .with_validator(Validator::Email);

    // Empty: required fires first
    assert_eq!(input.validation_error().as_deref(), Some("This field is required"));

    // Errors only show once touched
    assert_eq!(input.visible_error(), None);
    input.on_focus();
    input.on_blur();
    assert!(input.visible_error().is_some());

    input.set_value("ab");
    assert_eq!(
        input.validation_error().as_deref(),
        Some("Must be at least 5 characters")
    );

    input.set_value("abcdef");
    assert_eq!(
        input.validation_error().as_deref(),
        Some("Enter a valid email address")
    );

    input.set_value("someone@example.com");
    assert!(input.is_valid());

    // Manual error text overrides everything
    input.set_error_text(Some("Taken".to_string()));
    assert_eq!(input.validation_error().as_deref(), Some("Taken"));
}

#[test]
fn test_touched_and_dirty_tracking() {
    let mut input = TextInput::new("Name");
    assert!(!input.is_touched());
    assert!(!input.is_dirty());

    type_text(&mut input, "x");
    assert!(input.is_dirty());
    assert!(!input.is_touched(), "typing alone does not touch");

    input.on_focus();
    input.on_blur();
    assert!(input.is_touched());

    // Host writes reset dirty
    input.set_value("from host");
    assert!(!input.is_dirty());
}

#[test]
fn test_disabled_input_swallows_keys() {
    let mut input = TextInput::new("Name");
    input.set_disabled(true);
    assert_eq!(input.handle_key(key(KeyCode::Char('a'))), None);
    assert_eq!(input.value(), "");
}

// ---- TagsInput ---------------------------------------------------------

#[test]
fn test_tags_commit_trim_and_dedupe() {
    let mut tags = TagsInput::new("Tags");

    for c in "  rust ".chars() {
        tags.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(
        tags.handle_key(key(KeyCode::Enter)),
        Some(TagsEvent::Added("rust".to_string()))
    );

    // Duplicate is rejected silently
    for c in "rust".chars() {
        tags.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(tags.handle_key(key(KeyCode::Enter)), None);
    assert_eq!(tags.tags(), ["rust"]);

    // Empty buffer commit is rejected
    assert_eq!(tags.handle_key(key(KeyCode::Enter)), None);

    // Comma commits like Enter
    for c in "tui".chars() {
        tags.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(
        tags.handle_key(key(KeyCode::Char(','))),
        Some(TagsEvent::Added("tui".to_string()))
    );
}

#[test]
fn test_tags_backspace_removes_last_when_buffer_empty() {
    let mut tags = TagsInput::new("Tags");
    tags.set_tags(vec!["a".to_string(), "b".to_string()]);

    assert_eq!(
        tags.handle_key(key(KeyCode::Backspace)),
        Some(TagsEvent::Removed("b".to_string()))
    );

    // With buffer content, backspace edits the buffer instead
    tags.handle_key(key(KeyCode::Char('x')));
    assert_eq!(tags.handle_key(key(KeyCode::Backspace)), None);
    assert_eq!(tags.tags(), ["a"]);
}

#[test]
fn test_tags_remove_out_of_range_is_noop() {
    let mut tags = TagsInput::new("Tags");
    tags.set_tags(vec!["only".to_string()]);
    assert_eq!(tags.remove_tag(5), None);
    assert_eq!(tags.tags().len(), 1);
}

// ---- DateField ---------------------------------------------------------

#[test]
fn test_date_field_parses_iso_dates() {
    let mut field = DateField::new("Joined after");

    let mut last = None;
    for c in "2024-03-10".chars() {
        if let Some(event) = field.handle_key(key(KeyCode::Char(c))) {
            last = Some(event);
        }
    }

    let expected = chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    assert_eq!(last, Some(DateEvent::Changed(Some(expected))));
    assert_eq!(field.value(), Some(expected));

    // Emptying the buffer clears the value
    let mut cleared = None;
    for _ in 0..10 {
        if let Some(event) = field.handle_key(key(KeyCode::Backspace)) {
            cleared = Some(event);
        }
    }
    assert_eq!(cleared, Some(DateEvent::Changed(None)));
    assert_eq!(field.value(), None);
}

#[test]
fn test_date_field_rejects_non_date_keys_and_garbage() {
    let mut field = DateField::new("Joined after");
    assert_eq!(field.handle_key(key(KeyCode::Char('x'))), None);

    for c in "2024-13-99".chars() {
        field.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(field.value(), None, "an invalid date never commits");
}

// ---- Select ------------------------------------------------------------

fn select() -> Select {
    Select::new(
        "Role",
        vec![
            SelectOption::new("admin", "Admin"),
            SelectOption::new("editor", "Editor"),
            SelectOption::new("viewer", "Viewer"),
        ],
    )
}

#[test]
fn test_select_commit_flow() {
    let mut select = select();
    assert!(!select.is_open());

    select.handle_key(key(KeyCode::Enter));
    assert!(select.is_open());

    select.handle_key(key(KeyCode::Down));
    let event = select.handle_key(key(KeyCode::Enter));
    assert_eq!(event, Some(SelectEvent::Changed("editor".to_string())));
    assert_eq!(select.value(), Some("editor"));
    assert!(!select.is_open());
}

#[test]
fn test_select_escape_reverts_highlight() {
    let mut select = select();
    select.set_value("admin");

    select.handle_key(key(KeyCode::Enter));
    select.handle_key(key(KeyCode::Down));
    select.handle_key(key(KeyCode::Down));
    select.handle_key(key(KeyCode::Esc));

    assert_eq!(select.value(), Some("admin"), "Esc keeps the committed value");
    assert!(!select.is_open());

    // Re-committing the same value emits nothing
    select.handle_key(key(KeyCode::Enter));
    assert_eq!(select.handle_key(key(KeyCode::Enter)), None);
}

#[test]
fn test_select_required_validation() {
    let mut select = select().required();
    assert!(select.validation_error().is_some());
    assert_eq!(select.visible_error(), None, "hidden until touched");

    select.mark_touched();
    assert!(select.visible_error().is_some());

    select.set_value("viewer");
    assert!(select.validation_error().is_none());
}

// ---- Checkbox / Toggle -------------------------------------------------

#[test]
fn test_checkbox_toggles_on_space_and_enter() {
    let mut checkbox = Checkbox::new("Remember me");
    assert_eq!(
        checkbox.handle_key(key(KeyCode::Char(' '))),
        Some(CheckboxEvent::Changed(true))
    );
    assert_eq!(
        checkbox.handle_key(key(KeyCode::Enter)),
        Some(CheckboxEvent::Changed(false))
    );

    checkbox.set_disabled(true);
    assert_eq!(checkbox.handle_key(key(KeyCode::Char(' '))), None);
    assert!(!checkbox.is_checked());
}

#[test]
fn test_toggle_mirrors_checkbox_semantics() {
    let mut toggle = Toggle::new("Dark mode").checked(true);
    toggle.handle_key(key(KeyCode::Char(' ')));
    assert!(!toggle.is_checked());

    toggle.set_disabled(true);
    assert_eq!(toggle.handle_key(key(KeyCode::Enter)), None);
}

// ---- SearchInput -------------------------------------------------------

#[test]
fn test_search_input_debounces_through_ticks() {
    let mut search = SearchInput::with_delay(Duration::from_millis(300));
    let now = Instant::now();

    for c in "rust".chars() {
        search.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(search.query(), "rust");

    // The debounced emission arrives only after the window closes
    assert_eq!(search.poll_at(now + Duration::from_millis(100)), None);
    assert_eq!(
        search.poll_at(now + Duration::from_secs(2)),
        Some(SearchEvent::QueryChanged("rust".to_string()))
    );
}

#[test]
fn test_search_input_escape_clears_immediately() {
    let mut search = SearchInput::new();
    search.handle_key(key(KeyCode::Char('a')));

    assert_eq!(search.handle_key(key(KeyCode::Esc)), Some(SearchEvent::Cleared));
    assert_eq!(search.query(), "");

    // The pending debounce was cancelled with it
    assert_eq!(search.poll_at(Instant::now() + Duration::from_secs(5)), None);

    // Esc with an empty buffer does nothing
    assert_eq!(search.handle_key(key(KeyCode::Esc)), None);
}
