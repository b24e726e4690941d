use crate::model::SortColumn;
use crate::ui::app::App;
use crate::ui::filter::FilterIntent;
use crate::ui::layout::body_rect;
use crate::ui::table::header_hit;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

const PAGE_ROWS: isize = 10;

/// Route a key press to the notification popup, the filter dialog or the
/// table, in that order of precedence.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if !app.notifications().is_empty() {
        match key.code {
            KeyCode::Char('x') | KeyCode::Enter | KeyCode::Esc => app.dismiss_notification(),
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        }
        return;
    }

    if app.filter_dialog().is_visible() {
        handle_dialog_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('1') => app.sort_by(SortColumn::Date),
        KeyCode::Char('2') => app.sort_by(SortColumn::Revenue),
        KeyCode::Char('3') => app.sort_by(SortColumn::NetIncome),
        KeyCode::Char('f') => app.open_filter_dialog(),
        KeyCode::Char('r') => app.reset_filter(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-PAGE_ROWS),
        KeyCode::PageDown => app.move_selection(PAGE_ROWS),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.reset_from_dialog();
        return;
    }

    match key.code {
        KeyCode::Esc => app.close_filter_dialog(),
        KeyCode::Enter => app.submit_filter_dialog(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_filter(FilterIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_filter(FilterIntent::FocusPrev),
        KeyCode::Left => app.dispatch_filter(FilterIntent::CycleColumn { forward: false }),
        KeyCode::Right => app.dispatch_filter(FilterIntent::CycleColumn { forward: true }),
        KeyCode::Backspace => app.dispatch_filter(FilterIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_filter(FilterIntent::Input(ch))
        }
        _ => {}
    }
}

/// Left click on a sortable header sorts by it; the wheel scrolls rows.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, screen: Rect) {
    if !app.notifications().is_empty() || app.filter_dialog().is_visible() {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(column) = header_hit(body_rect(screen), mouse.column, mouse.row) {
                app.sort_by(column);
            }
        }
        MouseEventKind::ScrollUp => app.move_selection(-1),
        MouseEventKind::ScrollDown => app.move_selection(1),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
