//! Generic data table.
//!
//! Data structure is separated from presentation via column configuration.
//! The table is deliberately "dumb": it renders the rows it is given (the
//! current page, if the host paginates), emits sort events, and never
//! reorders or fetches data itself — the host owns that.

use crate::core::Component;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table as TableWidget, TableState},
    Frame,
};

/// Column configuration
pub struct Column<R> {
    id: String,
    label: String,
    accessor: Box<dyn Fn(&R) -> String + Send>,
    cell: Option<Box<dyn Fn(&R, &Theme) -> Span<'static> + Send>>,
    sortable: bool,
    width: Constraint,
    align: Alignment,
}

impl<R> Column<R> {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        accessor: impl Fn(&R) -> String + Send + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            accessor: Box::new(accessor),
            cell: None,
            sortable: false,
            width: Constraint::Fill(1),
            align: Alignment::Left,
        }
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    #[must_use]
    pub fn width(mut self, width: Constraint) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Custom styled cell, overriding the plain accessor text
    #[must_use]
    pub fn styled(mut self, cell: impl Fn(&R, &Theme) -> Span<'static> + Send + 'static) -> Self {
        self.cell = Some(Box::new(cell));
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Plain cell text for a row (used by hosts to sort)
    #[must_use]
    pub fn value(&self, row: &R) -> String {
        (self.accessor)(row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort state; `direction: None` means unsorted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: String,
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The host reorders its data in response
    SortChanged(SortState),
    RowActivated(usize),
}

/// Generic data table over rows of `R`
pub struct DataTable<R> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    state: TableState,
    sort: SortState,
    striped: bool,
    compact: bool,
    loading: bool,
    empty_message: String,
    focused: bool,
}

impl<R> DataTable<R> {
    #[must_use]
    pub fn new(columns: Vec<Column<R>>) -> Self {
        let mut state = TableState::default();
        state.select(Some(0));
        Self {
            columns,
            rows: Vec::new(),
            state,
            sort: SortState::default(),
            striped: false,
            compact: false,
            loading: false,
            empty_message: "No data available".to_string(),
            focused: false,
        }
    }

    #[must_use]
    pub fn striped(mut self) -> Self {
        self.striped = true;
        self
    }

    #[must_use]
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    #[must_use]
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Replace the displayed rows (the current page), clamping the selection
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        let selected = self.state.selected().unwrap_or(0);
        if self.rows.is_empty() {
            self.state.select(Some(0));
        } else if selected >= self.rows.len() {
            self.state.select(Some(self.rows.len() - 1));
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    #[must_use]
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        let index = self.state.selected()?;
        (index < self.rows.len()).then_some(index)
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<&R> {
        self.rows.get(self.selected()?)
    }

    #[must_use]
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Cycle the sort state of a column: asc → desc → none.
    ///
    /// Choosing a different column restarts at ascending. Non-sortable
    /// columns and out-of-range indexes are ignored.
    pub fn cycle_sort(&mut self, column_index: usize) -> Option<TableEvent> {
        let column = self.columns.get(column_index)?;
        if !column.sortable {
            return None;
        }

        let direction = if self.sort.column == column.id {
            match self.sort.direction {
                Some(SortDirection::Ascending) => Some(SortDirection::Descending),
                Some(SortDirection::Descending) => None,
                None => Some(SortDirection::Ascending),
            }
        } else {
            Some(SortDirection::Ascending)
        };

        self.sort = SortState {
            column: column.id.clone(),
            direction,
        };
        log::debug!("table sort changed: {:?}", self.sort);
        Some(TableEvent::SortChanged(self.sort.clone()))
    }

    fn move_selection(&mut self, down: bool) {
        if self.rows.is_empty() {
            return;
        }
        let current = self.state.selected().unwrap_or(0);
        let next = if down {
            (current + 1).min(self.rows.len() - 1)
        } else {
            current.saturating_sub(1)
        };
        self.state.select(Some(next));
    }

    fn header_cell(&self, column: &Column<R>, theme: &Theme) -> Cell<'static> {
        let arrow = if self.sort.column == column.id {
            match self.sort.direction {
                Some(SortDirection::Ascending) => " ▲",
                Some(SortDirection::Descending) => " ▼",
                None => "",
            }
        } else {
            ""
        };

        Cell::from(
            Line::from(Span::styled(format!("{}{arrow}", column.label), theme.accent_style()))
                .alignment(column.align),
        )
    }
}

impl<R> Component for DataTable<R> {
    type Event = TableEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<TableEvent> {
        match key.code {
            KeyCode::Up => {
                self.move_selection(false);
                None
            }
            KeyCode::Down => {
                self.move_selection(true);
                None
            }
            KeyCode::Enter => self.selected().map(TableEvent::RowActivated),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = (c as usize).wrapping_sub('1' as usize);
                self.cycle_sort(index)
            }
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type.border_type())
            .border_style(theme.border_style(self.focused));

        if self.loading {
            let inner = block.inner(area);
            f.render_widget(block, area);
            let shimmer: Vec<String> = (0..inner.height)
                .map(|_| crate::components::skeleton::Skeleton::shimmer_text(inner.width, false))
                .collect();
            f.render_widget(
                Paragraph::new(shimmer.join("\n")).style(theme.muted_style()),
                inner,
            );
            return;
        }

        if self.rows.is_empty() {
            let inner = block.inner(area);
            f.render_widget(block, area);
            f.render_widget(
                Paragraph::new(self.empty_message.clone())
                    .alignment(Alignment::Center)
                    .style(theme.muted_style()),
                inner,
            );
            return;
        }

        let header = Row::new(
            self.columns
                .iter()
                .map(|c| self.header_cell(c, theme))
                .collect::<Vec<_>>(),
        )
        .height(1)
        .bottom_margin(u16::from(!self.compact));

        let rows: Vec<Row> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let cells: Vec<Cell> = self
                    .columns
                    .iter()
                    .map(|column| {
                        let span = match &column.cell {
                            Some(cell) => cell(row, theme),
                            None => Span::styled(column.value(row), theme.text_style()),
                        };
                        Cell::from(Line::from(span).alignment(column.align))
                    })
                    .collect();

                let mut table_row = Row::new(cells);
                if self.striped && i % 2 == 1 {
                    table_row = table_row.style(ratatui::style::Style::default().bg(theme.surface_elevated));
                }
                table_row
            })
            .collect();

        let widths: Vec<Constraint> = self.columns.iter().map(|c| c.width).collect();

        let table = TableWidget::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(theme.selection_style())
            .highlight_symbol("› ");

        f.render_stateful_widget(table, area, &mut self.state);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
