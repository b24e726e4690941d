use crate::api::{FetchQuery, NetworkError};
use crate::error::UserInputError;
use crate::model::{Record, SortColumn, SortPolicy};
use crate::ui::browser::{BrowserIntent, BrowserReducer, BrowserState};
use crate::ui::filter::{FilterDialogState, FilterIntent, FilterReducer};
use crate::ui::mvi::Reducer;
use crate::ui::notifications::{Notification, NotificationKind, NotificationQueue};
use crate::validation::{validate_range, RangeFilter};
use tokio::sync::mpsc;

const NOTIFICATION_CAPACITY: usize = 8;

/// Work the UI hands to the fetch worker.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    Fetch { seq: u64, query: FetchQuery },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// View-state controller.
///
/// Owns the record set and all UI state. Presentation reads through the
/// accessors and reports user actions through the operations below; fetches
/// go out as [`UiCommand`]s and come back through [`App::on_fetch_complete`].
pub struct App {
    should_quit: bool,
    base_url: String,
    /// Record browser state (MVI pattern).
    browser: BrowserState,
    /// Filter dialog state (MVI pattern).
    filter_dialog: FilterDialogState,
    notifications: NotificationQueue,
    command_sender: Option<UiCommandSender>,
    selected_row: usize,
    animation_tick: u8,
}

impl App {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            base_url: base_url.into(),
            browser: BrowserState::default(),
            filter_dialog: FilterDialogState::default(),
            notifications: NotificationQueue::new(NOTIFICATION_CAPACITY),
            command_sender: None,
            selected_row: 0,
            animation_tick: 0,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn browser(&self) -> &BrowserState {
        &self.browser
    }

    pub fn records(&self) -> &[Record] {
        &self.browser.records
    }

    pub fn is_loading(&self) -> bool {
        self.browser.loading
    }

    pub fn filter_column(&self) -> Option<SortColumn> {
        self.browser.filter_column
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn filter_dialog(&self) -> &FilterDialogState {
        &self.filter_dialog
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        if self.browser.loading {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    // ========================================================================
    // Controller operations
    // ========================================================================

    /// Initial unfiltered load.
    pub fn start(&mut self) {
        self.load(FetchQuery::All);
    }

    /// Issue a fetch that supersedes any outstanding one.
    ///
    /// Returns false when the fetch worker could not take the request; the
    /// failure is surfaced as a notification.
    pub fn load(&mut self, query: FetchQuery) -> bool {
        let seq = self.browser.next_seq();
        self.dispatch_browser(BrowserIntent::FetchIssued { seq, query });
        tracing::debug!(seq, ?query, "fetch issued");

        let Some(sender) = &self.command_sender else {
            tracing::error!(seq, "no fetch worker attached");
            self.dispatch_browser(BrowserIntent::FetchAbandoned { seq });
            self.notify_worker_unavailable("fetch worker is not running".to_string());
            return false;
        };

        match sender.try_send(UiCommand::Fetch { seq, query }) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(seq, error = %err, "fetch worker rejected request");
                self.dispatch_browser(BrowserIntent::FetchAbandoned { seq });
                self.notify_worker_unavailable(err.to_string());
                false
            }
        }
    }

    /// Completion of the fetch tagged `seq`. Results of superseded fetches
    /// are dropped without touching the view.
    pub fn on_fetch_complete(&mut self, seq: u64, result: Result<Vec<Record>, NetworkError>) {
        if !self.browser.is_latest(seq) {
            tracing::debug!(
                seq,
                latest = self.browser.latest_seq,
                "discarding superseded fetch result"
            );
            return;
        }

        match result {
            Ok(records) => {
                tracing::info!(seq, count = records.len(), "records loaded");
                self.dispatch_browser(BrowserIntent::FetchSucceeded { seq, records });
                self.clamp_selection();
            }
            Err(err) => {
                tracing::warn!(seq, kind = err.kind(), error = %err, "fetch failed");
                self.dispatch_browser(BrowserIntent::FetchFailed { seq });
                self.notifications.push(Notification::network(&err));
            }
        }
    }

    /// Header click on `column`.
    ///
    /// A server sort only shows its arrow once the sorted rows arrive; a
    /// failed fetch leaves the previous order and arrow in place.
    pub fn sort_by(&mut self, column: SortColumn) {
        match self.browser.sort_policy() {
            SortPolicy::ServerAuthoritative => {
                let sort = self.browser.requested_sort().toggled(column);
                let asc = sort.ascending().unwrap_or(true);
                self.load(FetchQuery::Sorted { column, asc });
            }
            SortPolicy::LocalSubset => {
                let sort = self.browser.sort.toggled(column);
                tracing::debug!(column = column.wire_name(), ?sort, "sorting resident records");
                self.dispatch_browser(BrowserIntent::SortResident { sort });
            }
        }
    }

    /// Fetch the rows of the selected filter column that fall in `range`.
    pub fn filter_by(&mut self, range: RangeFilter) -> Result<(), UserInputError> {
        let Some(column) = self.browser.filter_column else {
            let err = UserInputError::NoFilterColumn;
            tracing::info!("filter submitted without a column");
            self.notifications.push(Notification::user_input(&err));
            return Err(err);
        };
        self.load(FetchQuery::Filtered { column, range });
        Ok(())
    }

    pub fn set_filter_column(&mut self, column: Option<SortColumn>) {
        self.dispatch_browser(BrowserIntent::SetFilterColumn { column });
    }

    /// Drop the filter and reload the full dataset.
    pub fn reset_filter(&mut self) {
        self.set_filter_column(None);
        self.load(FetchQuery::All);
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }

    // ========================================================================
    // Table navigation
    // ========================================================================

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.browser.records.len();
        if len == 0 {
            self.selected_row = 0;
            return;
        }
        let next = self.selected_row.saturating_add_signed(delta);
        self.selected_row = next.min(len - 1);
    }

    fn clamp_selection(&mut self) {
        let len = self.browser.records.len();
        self.selected_row = self.selected_row.min(len.saturating_sub(1));
    }

    // ========================================================================
    // Filter dialog (MVI pattern)
    // ========================================================================

    pub fn dispatch_filter(&mut self, intent: FilterIntent) {
        dispatch_mvi!(self, filter_dialog, FilterReducer, intent);
    }

    pub fn open_filter_dialog(&mut self) {
        let column = self.browser.filter_column;
        self.dispatch_filter(FilterIntent::Open { column });
    }

    pub fn close_filter_dialog(&mut self) {
        self.dispatch_filter(FilterIntent::Close);
    }

    /// Apply the dialog's column choice, validate the range and filter.
    ///
    /// Invalid input keeps the dialog open with inline messages.
    pub fn submit_filter_dialog(&mut self) {
        let Some((min, max)) = self.filter_dialog.inputs() else {
            return;
        };
        let validated = validate_range(min, max);
        let column = self.filter_dialog.column();
        self.set_filter_column(column);

        match validated {
            Ok(range) => {
                self.close_filter_dialog();
                if let Err(err) = self.filter_by(range) {
                    tracing::debug!(error = %err, "dialog submitted without a column");
                }
            }
            Err(errors) => {
                tracing::debug!(?errors, "range rejected");
                self.dispatch_filter(FilterIntent::Rejected { errors });
            }
        }
    }

    /// Reset from inside the dialog.
    pub fn reset_from_dialog(&mut self) {
        self.close_filter_dialog();
        self.reset_filter();
    }

    fn notify_worker_unavailable(&mut self, reason: String) {
        self.notifications.push(Notification {
            kind: NotificationKind::Network,
            title: "Could not start the request".to_string(),
            detail: format!("Fetch worker unavailable: {}", reason),
        });
    }

    fn dispatch_browser(&mut self, intent: BrowserIntent) {
        dispatch_mvi!(self, browser, BrowserReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
        let (tx, rx) = mpsc::channel(16);
        let mut app = App::new("http://localhost:5000");
        app.set_command_sender(tx);
        (app, rx)
    }

    #[test]
    fn load_without_worker_surfaces_notification() {
        let mut app = App::new("http://localhost:5000");
        assert!(!app.load(FetchQuery::All));
        assert!(!app.is_loading());
        assert_eq!(app.notifications().len(), 1);
    }

    #[test]
    fn load_with_full_channel_surfaces_notification() {
        let (tx, _rx) = mpsc::channel(1);
        let mut app = App::new("http://localhost:5000");
        app.set_command_sender(tx);
        assert!(app.load(FetchQuery::All));
        assert!(!app.load(FetchQuery::All));
        assert_eq!(app.notifications().len(), 1);
        assert!(!app.is_loading());
    }

    #[test]
    fn tick_animates_only_while_loading() {
        let (mut app, _rx) = make_app();
        app.on_tick();
        assert_eq!(app.animation_tick(), 0);
        app.start();
        app.on_tick();
        assert_eq!(app.animation_tick(), 1);
    }

    #[test]
    fn selection_is_clamped_to_rows() {
        let (mut app, _rx) = make_app();
        app.move_selection(5);
        assert_eq!(app.selected_row(), 0);

        app.start();
        let records = (0..3)
            .map(|i| Record {
                date: format!("202{i}"),
                revenue: 0.0,
                net_income: 0.0,
                gross_profit: 0.0,
                eps: 0.0,
                operating_income: 0.0,
            })
            .collect();
        app.on_fetch_complete(1, Ok(records));
        app.move_selection(10);
        assert_eq!(app.selected_row(), 2);
        app.move_selection(-1);
        assert_eq!(app.selected_row(), 1);

        app.load(FetchQuery::All);
        app.on_fetch_complete(2, Ok(Vec::new()));
        assert_eq!(app.selected_row(), 0);
    }
}
