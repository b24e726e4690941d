use crate::ui::app::App;
use crate::ui::filter::render_filter_dialog;
use crate::ui::footer::render_footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::notifications::render_notification;
use crate::ui::table::render_table;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    let browser = app.browser();
    render_table(
        frame,
        body,
        &browser.records,
        &browser.sort,
        app.selected_row(),
    );
    render_footer(frame, footer, app);

    // Notifications stack above the dialog so failures are never hidden.
    render_filter_dialog(frame, body, app.filter_dialog());
    render_notification(frame, body, app.notifications());
}
