use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lumen::overlay::{ConfirmDialog, Dialog, DialogResponse, DialogStack};
use lumen::theme::Theme;
use ratatui::{layout::Rect, Frame};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Minimal dialog that closes with a fixed outcome on Enter
struct Probe {
    outcome: bool,
    undismissable: bool,
}

impl Dialog for Probe {
    type Outcome = bool;

    fn title(&self) -> &str {
        "probe"
    }

    fn handle_key(&mut self, key: KeyEvent) -> DialogResponse<bool> {
        match key.code {
            KeyCode::Enter => DialogResponse::Close(Some(self.outcome)),
            _ => DialogResponse::Stay,
        }
    }

    fn render_body(&mut self, _f: &mut Frame, _area: Rect, _theme: &Theme) {}

    fn dismissable(&self) -> bool {
        !self.undismissable
    }
}

fn probe(outcome: bool) -> Box<Probe> {
    Box::new(Probe {
        outcome,
        undismissable: false,
    })
}

#[test]
fn test_keys_pass_through_while_empty() {
    let mut stack: DialogStack<bool> = DialogStack::new();
    assert!(!stack.handle_key(key(KeyCode::Enter)), "no dialog, key not consumed");
}

#[test]
fn test_only_the_top_dialog_receives_input() {
    let mut stack: DialogStack<bool> = DialogStack::new();
    let bottom = stack.open(probe(false));
    let top = stack.open(probe(true));
    assert_eq!(stack.len(), 2);

    assert!(stack.handle_key(key(KeyCode::Enter)));

    let closed = stack.take_closed();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].0, top);
    assert_eq!(closed[0].1, Some(true), "the top dialog's outcome, not the bottom's");
    assert_eq!(stack.len(), 1);

    // The bottom dialog is now on top
    assert!(stack.handle_key(key(KeyCode::Enter)));
    let closed = stack.take_closed();
    assert_eq!(closed[0].0, bottom);
    assert_eq!(closed[0].1, Some(false));
    assert!(stack.is_empty());
}

#[test]
fn test_escape_closes_with_no_outcome() {
    let mut stack: DialogStack<bool> = DialogStack::new();
    let id = stack.open(probe(true));

    assert!(stack.handle_key(key(KeyCode::Esc)));
    let closed = stack.take_closed();
    assert_eq!(closed, vec![(id, None)]);
}

#[test]
fn test_escape_respects_undismissable_dialogs() {
    let mut stack: DialogStack<bool> = DialogStack::new();
    stack.open(Box::new(Probe {
        outcome: true,
        undismissable: true,
    }));

    assert!(stack.handle_key(key(KeyCode::Esc)), "the key is still trapped");
    assert!(stack.take_closed().is_empty());
    assert_eq!(stack.len(), 1);

    // Its own response still closes it
    stack.handle_key(key(KeyCode::Enter));
    assert_eq!(stack.take_closed().len(), 1);
}

#[test]
fn test_outcomes_drain_exactly_once() {
    let mut stack: DialogStack<bool> = DialogStack::new();
    stack.open(probe(true));
    stack.handle_key(key(KeyCode::Enter));

    assert_eq!(stack.take_closed().len(), 1);
    assert!(stack.take_closed().is_empty(), "drained outcomes do not repeat");
}

#[test]
fn test_close_by_id_and_close_all() {
    let mut stack: DialogStack<bool> = DialogStack::new();
    let first = stack.open(probe(true));
    let second = stack.open(probe(true));
    let third = stack.open(probe(true));

    // Closing a non-top dialog detaches exactly that one
    stack.close(second);
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.take_closed(), vec![(second, None)]);

    stack.close_all();
    assert!(stack.is_empty());
    let closed = stack.take_closed();
    assert_eq!(closed.len(), 2);
    assert!(closed.iter().any(|(id, _)| *id == first));
    assert!(closed.iter().any(|(id, _)| *id == third));
}

#[test]
fn test_ids_are_unique() {
    let mut stack: DialogStack<bool> = DialogStack::new();
    let a = stack.open(probe(true));
    stack.close(a);
    let b = stack.open(probe(true));
    assert_ne!(a, b, "ids are never reused");
}

#[test]
fn test_confirm_dialog_keys() {
    let mut dialog = ConfirmDialog::new("Delete user", "Really?").danger();

    // Default selection is Cancel
    match dialog.handle_key(key(KeyCode::Enter)) {
        DialogResponse::Close(outcome) => assert_eq!(outcome, Some(false)),
        DialogResponse::Stay => panic!("Enter should resolve the dialog"),
    }

    let mut dialog = ConfirmDialog::new("Delete user", "Really?");
    assert!(matches!(dialog.handle_key(key(KeyCode::Tab)), DialogResponse::Stay));
    match dialog.handle_key(key(KeyCode::Enter)) {
        DialogResponse::Close(outcome) => assert_eq!(outcome, Some(true)),
        DialogResponse::Stay => panic!("Enter should resolve the dialog"),
    }

    // y/n shortcuts
    let mut dialog = ConfirmDialog::new("t", "m");
    assert!(matches!(
        dialog.handle_key(key(KeyCode::Char('y'))),
        DialogResponse::Close(Some(true))
    ));
    let mut dialog = ConfirmDialog::new("t", "m");
    assert!(matches!(
        dialog.handle_key(key(KeyCode::Char('n'))),
        DialogResponse::Close(Some(false))
    ));
}
