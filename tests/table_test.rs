use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lumen::components::{Column, DataTable, SortDirection, TableEvent};
use lumen::core::Component;

#[derive(Clone)]
struct Row {
    name: &'static str,
    size: u32,
}

fn table() -> DataTable<Row> {
    DataTable::new(vec![
        Column::new("name", "Name", |r: &Row| r.name.to_string()).sortable(),
        Column::new("size", "Size", |r: &Row| r.size.to_string()).sortable(),
        Column::new("actions", "Actions", |_: &Row| String::new()),
    ])
}

fn rows() -> Vec<Row> {
    vec![
        Row { name: "beta", size: 2 },
        Row { name: "alpha", size: 1 },
        Row { name: "gamma", size: 3 },
    ]
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_sort_cycles_asc_desc_none() {
    let mut table = table();

    let event = table.cycle_sort(0).expect("first activation sorts ascending");
    match event {
        TableEvent::SortChanged(state) => {
            assert_eq!(state.column, "name");
            assert_eq!(state.direction, Some(SortDirection::Ascending));
        }
        other => panic!("unexpected event: {other:?}"),
    }

    let TableEvent::SortChanged(state) = table.cycle_sort(0).unwrap() else {
        panic!("expected sort event");
    };
    assert_eq!(state.direction, Some(SortDirection::Descending));

    let TableEvent::SortChanged(state) = table.cycle_sort(0).unwrap() else {
        panic!("expected sort event");
    };
    assert_eq!(state.direction, None, "third activation clears the sort");

    // And around again
    let TableEvent::SortChanged(state) = table.cycle_sort(0).unwrap() else {
        panic!("expected sort event");
    };
    assert_eq!(state.direction, Some(SortDirection::Ascending));
}

#[test]
fn test_switching_column_restarts_ascending() {
    let mut table = table();

    table.cycle_sort(0);
    table.cycle_sort(0); // name descending

    let TableEvent::SortChanged(state) = table.cycle_sort(1).unwrap() else {
        panic!("expected sort event");
    };
    assert_eq!(state.column, "size");
    assert_eq!(state.direction, Some(SortDirection::Ascending));
}

#[test]
fn test_non_sortable_and_out_of_range_columns_ignored() {
    let mut table = table();
    assert!(table.cycle_sort(2).is_none(), "actions column is not sortable");
    assert!(table.cycle_sort(9).is_none(), "out of range is a no-op");
    assert_eq!(table.sort_state().direction, None);
}

#[test]
fn test_digit_keys_cycle_sort() {
    let mut table = table();
    let event = table.handle_key(key(KeyCode::Char('1')));
    assert!(matches!(event, Some(TableEvent::SortChanged(_))));
}

#[test]
fn test_selection_is_clamped() {
    let mut table = table();
    table.set_rows(rows());

    // Down stops at the last row
    for _ in 0..10 {
        table.handle_key(key(KeyCode::Down));
    }
    assert_eq!(table.selected(), Some(2));

    // Shrinking the row set clamps the selection
    table.set_rows(rows().into_iter().take(1).collect());
    assert_eq!(table.selected(), Some(0));
}

#[test]
fn test_enter_activates_selected_row() {
    let mut table = table();
    table.set_rows(rows());
    table.handle_key(key(KeyCode::Down));

    assert_eq!(
        table.handle_key(key(KeyCode::Enter)),
        Some(TableEvent::RowActivated(1))
    );
}

#[test]
fn test_enter_on_empty_table_is_noop() {
    let mut table = table();
    assert_eq!(table.handle_key(key(KeyCode::Enter)), None);
}

#[test]
fn test_column_accessor_value() {
    let table = table();
    let row = Row { name: "delta", size: 9 };
    assert_eq!(table.columns()[0].value(&row), "delta");
    assert_eq!(table.columns()[1].value(&row), "9");
}
