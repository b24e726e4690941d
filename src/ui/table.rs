//! Record table: column definitions, sort indicators and header hit-testing.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::model::{Record, SortColumn, SortState};
use crate::ui::format::{format_currency, format_raw};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, NEGATIVE_VALUE,
};

pub const SORT_ASC_INDICATOR: &str = "▲";
pub const SORT_DESC_INDICATOR: &str = "▼";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellFormat {
    Text,
    Currency,
    Raw,
}

/// One displayed column.
#[derive(Debug, Clone, Copy)]
pub struct TableColumn {
    pub title: &'static str,
    /// Set when the header is a sort control.
    pub sort_key: Option<SortColumn>,
    format: CellFormat,
    value: fn(&Record) -> CellValue<'_>,
}

enum CellValue<'a> {
    Text(&'a str),
    Number(f64),
}

pub const COLUMNS: [TableColumn; 6] = [
    TableColumn {
        title: "Date",
        sort_key: Some(SortColumn::Date),
        format: CellFormat::Text,
        value: |r| CellValue::Text(&r.date),
    },
    TableColumn {
        title: "Revenue",
        sort_key: Some(SortColumn::Revenue),
        format: CellFormat::Currency,
        value: |r| CellValue::Number(r.revenue),
    },
    TableColumn {
        title: "Net Income",
        sort_key: Some(SortColumn::NetIncome),
        format: CellFormat::Currency,
        value: |r| CellValue::Number(r.net_income),
    },
    TableColumn {
        title: "Gross Profit",
        sort_key: None,
        format: CellFormat::Currency,
        value: |r| CellValue::Number(r.gross_profit),
    },
    TableColumn {
        title: "EPS",
        sort_key: None,
        format: CellFormat::Raw,
        value: |r| CellValue::Number(r.eps),
    },
    TableColumn {
        title: "Operating Income",
        sort_key: None,
        format: CellFormat::Currency,
        value: |r| CellValue::Number(r.operating_income),
    },
];

impl TableColumn {
    /// Header text, with an arrow only when this column drives the order.
    pub fn header_label(&self, sort: &SortState) -> String {
        let indicator = self
            .sort_key
            .and_then(|key| sort.direction_of(key))
            .map(|asc| if asc { SORT_ASC_INDICATOR } else { SORT_DESC_INDICATOR });
        match indicator {
            Some(arrow) => format!("{} {}", self.title, arrow),
            None => self.title.to_string(),
        }
    }

    /// Display text for this column of `record`.
    pub fn cell_text(&self, record: &Record) -> String {
        match ((self.value)(record), self.format) {
            (CellValue::Text(text), _) => text.to_string(),
            (CellValue::Number(value), CellFormat::Currency) => format_currency(value),
            (CellValue::Number(value), _) => format_raw(value),
        }
    }

    fn is_negative(&self, record: &Record) -> bool {
        matches!((self.value)(record), CellValue::Number(value) if value < 0.0)
    }
}

fn column_constraints() -> [Constraint; 6] {
    [Constraint::Ratio(1, COLUMNS.len() as u32); 6]
}

/// Inner area of the table block: the first row is the header.
fn inner_area(body: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(body)
}

/// Sort column under the terminal cell `(x, y)`, if it is a sortable header.
pub fn header_hit(body: Rect, x: u16, y: u16) -> Option<SortColumn> {
    let inner = inner_area(body);
    if inner.height == 0 || y != inner.y {
        return None;
    }
    let cells = Layout::horizontal(column_constraints()).split(inner);
    COLUMNS
        .iter()
        .zip(cells.iter())
        .find(|(_, rect)| x >= rect.x && x < rect.x + rect.width)
        .and_then(|(column, _)| column.sort_key)
}

pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    records: &[Record],
    sort: &SortState,
    selected: usize,
) {
    let header_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let header = Row::new(COLUMNS.iter().map(|column| {
        let style = if column.sort_key.is_some() {
            header_style.add_modifier(Modifier::UNDERLINED)
        } else {
            header_style
        };
        Cell::from(Span::styled(column.header_label(sort), style))
    }));

    let rows = records.iter().map(|record| {
        Row::new(COLUMNS.iter().map(|column| {
            let style = if column.is_negative(record) {
                Style::default().fg(NEGATIVE_VALUE)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Cell::from(Span::styled(column.cell_text(record), style))
        }))
    });

    let title = Line::from(format!(" Records ({}) ", records.len()));
    let table = Table::new(rows, column_constraints())
        .header(header)
        .column_spacing(0)
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );

    let mut state = TableState::default();
    if !records.is_empty() {
        state.select(Some(selected.min(records.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut state);
}
