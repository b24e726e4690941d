//! Dismissible failure notifications.

use std::collections::VecDeque;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::NetworkError;
use crate::error::UserInputError;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

const DIALOG_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Network,
    UserInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub detail: String,
}

impl Notification {
    pub fn network(err: &NetworkError) -> Self {
        Self {
            kind: NotificationKind::Network,
            title: err.user_message().to_string(),
            detail: err.to_string(),
        }
    }

    pub fn user_input(err: &UserInputError) -> Self {
        Self {
            kind: NotificationKind::UserInput,
            title: err.title().to_string(),
            detail: err.to_string(),
        }
    }
}

/// FIFO of notifications; the oldest is dropped once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notification);
    }

    /// The notification currently on screen.
    pub fn current(&self) -> Option<&Notification> {
        self.entries.front()
    }

    pub fn dismiss(&mut self) -> Option<Notification> {
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }
}

pub fn render_notification(frame: &mut Frame, area: Rect, queue: &NotificationQueue) {
    let Some(current) = queue.current() else {
        return;
    };

    let remaining = queue.len() - 1;
    let mut lines = vec![
        Line::from(Span::styled(
            current.title.clone(),
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            current.detail.clone(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
    ];
    let hint = if remaining > 0 {
        format!("x/Enter: Dismiss ({} more)", remaining)
    } else {
        "x/Enter: Dismiss".to_string()
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(HEADER_SEPARATOR),
    )));

    let inner_width = DIALOG_WIDTH.saturating_sub(2).max(1) as usize;
    let detail_rows = current.detail.chars().count().div_ceil(inner_width).max(1) as u16;
    let height = 6 + detail_rows;
    let popup_area = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, popup_area);
    let title = match current.kind {
        NotificationKind::Network => " Network Error ",
        NotificationKind::UserInput => " Filter ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        popup_area,
    );
}
