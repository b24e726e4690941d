//! Bottom bar: key hints for whatever has focus, the row count and version.

use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

type Hint = (&'static str, &'static str);

const TABLE_HINTS: &[Hint] = &[
    ("1/2/3", "Sort"),
    ("f", "Filter"),
    ("r", "Reset"),
    ("↑↓", "Scroll"),
    ("q", "Quit"),
];

const DIALOG_HINTS: &[Hint] = &[
    ("Tab", "Next field"),
    ("←→", "Column"),
    ("Enter", "Apply"),
    ("Ctrl+R", "Reset"),
    ("Esc", "Close"),
];

const NOTIFICATION_HINTS: &[Hint] = &[("x/Enter", "Dismiss"), ("q", "Quit")];

/// Hints for the layer that currently receives keys, in the same order of
/// precedence as input routing.
pub fn key_hints(app: &App) -> &'static [Hint] {
    if !app.notifications().is_empty() {
        NOTIFICATION_HINTS
    } else if app.filter_dialog().is_visible() {
        DIALOG_HINTS
    } else {
        TABLE_HINTS
    }
}

/// Right-hand status: row count once something loaded, then the version.
pub fn status_text(app: &App) -> String {
    let browser = app.browser();
    let rows = match (browser.loaded, browser.records.len()) {
        (false, _) => "no data".to_string(),
        (true, 1) => "1 row".to_string(),
        (true, n) => format!("{} rows", n),
    };
    format!("{} · v{} ", rows, VERSION)
}

fn hint_line(hints: &[Hint]) -> Line<'static> {
    let key_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let action_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);

    let mut spans = vec![Span::raw(" ")];
    for (index, (key, action)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", separator_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(": {}", action), action_style));
    }
    Line::from(spans)
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = status_text(app);
    let status_width = status.chars().count() as u16;
    let [hints_area, status_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(inner);

    frame.render_widget(Paragraph::new(hint_line(key_hints(app))), hints_area);
    frame.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Right)
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)),
        status_area,
    );
}
