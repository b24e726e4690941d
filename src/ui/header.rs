use crate::api::FetchQuery;
use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let browser = app.browser();

        let status = if browser.loading {
            let frame = SPINNER_FRAMES[app.animation_tick() as usize % SPINNER_FRAMES.len()];
            Span::styled(format!("{} Loading", frame), Style::default().fg(ACCENT))
        } else {
            Span::styled("● Ready", Style::default().fg(STATUS_OK))
        };

        let sort = match (browser.sort.column(), browser.sort.ascending()) {
            (Some(column), Some(asc)) => {
                format!("Sort: {} {}", column, if asc { "asc" } else { "desc" })
            }
            _ => "Sort: none".to_string(),
        };

        let filter = match (browser.filter_column, browser.shown_query) {
            (Some(column), Some(FetchQuery::Filtered { column: shown, range })) if column == shown => {
                format!("Filter: {} {}..{}", column, range.min(), range.max())
            }
            (Some(column), _) => format!("Filter: {}", column),
            (None, _) => "Filter: none".to_string(),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("finview", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(app.base_url().to_string(), text_style),
            Span::styled("  │  ", separator_style),
            status,
            Span::styled("  │  ", separator_style),
            Span::styled(sort, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(filter, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
