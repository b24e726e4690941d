//! Dialog rendering for the range filter.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR,
};

use super::state::{FilterDialogState, FilterField};

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 13;
const LABEL_WIDTH: usize = 8;

pub fn render_filter_dialog(frame: &mut Frame, area: Rect, state: &FilterDialogState) {
    let FilterDialogState::Visible {
        column,
        min,
        max,
        focused,
        errors,
    } = state
    else {
        return;
    };

    let area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Filter ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let column_text = match column {
        Some(column) => format!("◀ {} ▶", column.label()),
        None => "◀ (none) ▶".to_string(),
    };

    let mut lines = vec![
        Line::from(""),
        field_line("Column", &column_text, *focused == FilterField::Column),
        Line::from(""),
        field_line("Min", min, *focused == FilterField::Min),
        error_line(errors.min.as_deref()),
        field_line("Max", max, *focused == FilterField::Max),
        error_line(errors.max.as_deref()),
        Line::from(""),
    ];
    lines.push(Line::from(Span::styled(
        " Tab: Next field  ←→: Column  Enter: Apply",
        Style::default().fg(HEADER_SEPARATOR),
    )));
    lines.push(Line::from(Span::styled(
        " Ctrl+R: Reset filter  Esc: Close",
        Style::default().fg(HEADER_SEPARATOR),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let mut value_style = Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT);
    if focused {
        value_style = value_style.add_modifier(Modifier::UNDERLINED);
    }
    let cursor = if focused { "▏" } else { " " };
    Line::from(vec![
        Span::styled(format!(" {:<width$}", label, width = LABEL_WIDTH), label_style),
        Span::styled(format!(" {}{} ", value, cursor), value_style),
    ])
}

fn error_line(message: Option<&str>) -> Line<'static> {
    match message {
        Some(message) => Line::from(Span::styled(
            format!(" {:<width$} {}", "", message, width = LABEL_WIDTH),
            Style::default().fg(STATUS_ERROR),
        )),
        None => Line::from(""),
    }
}
