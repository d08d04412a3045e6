// Page rendering surface.
// Holds the tab strip highlight, the active tab's widgets, focus and notifications.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::state::Surface;

use super::components::Widget;

/// A transient, dismissible notification.
#[derive(Debug, Clone)]
pub struct SnackBar {
    pub message: String,
    pub action_label: &'static str,
    pub shown_at: DateTime<Utc>,
}

impl SnackBar {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action_label: "OK",
            shown_at: Utc::now(),
        }
    }

    /// Check if the notification has been visible longer than `ttl`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let elapsed = now
            .signed_duration_since(self.shown_at)
            .to_std()
            .unwrap_or(Duration::ZERO);

        elapsed > ttl
    }
}

/// The surface tab content is drawn onto.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub title: String,
    selected_tab: usize,
    content: Vec<Widget>,
    snack_bar: Option<SnackBar>,
    /// Index into `content` of the focused widget.
    focus: Option<usize>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Tab highlighted in the tab strip.
    pub fn selected_tab(&self) -> usize {
        self.selected_tab
    }

    pub fn content(&self) -> &[Widget] {
        &self.content
    }

    /// Remove all content widgets.
    pub fn clear(&mut self) {
        self.content.clear();
        self.focus = None;
    }

    /// Append a widget. The first focusable widget takes focus.
    pub fn add(&mut self, widget: Widget) {
        if self.focus.is_none() && widget.is_focusable() {
            self.focus = Some(self.content.len());
        }
        self.content.push(widget);
    }

    pub fn extend(&mut self, widgets: impl IntoIterator<Item = Widget>) {
        for widget in widgets {
            self.add(widget);
        }
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused_widget(&self) -> Option<&Widget> {
        self.focus.and_then(|i| self.content.get(i))
    }

    pub fn focused_widget_mut(&mut self) -> Option<&mut Widget> {
        self.focus.and_then(|i| self.content.get_mut(i))
    }

    /// Move focus to the next focusable widget, wrapping around.
    pub fn focus_next(&mut self) {
        let focusable = self.focusable_indices();
        if focusable.is_empty() {
            return;
        }

        let next = match self.focus.and_then(|f| focusable.iter().position(|&i| i == f)) {
            Some(pos) => focusable[(pos + 1) % focusable.len()],
            None => focusable[0],
        };
        self.focus = Some(next);
    }

    /// Move focus to the previous focusable widget, wrapping around.
    pub fn focus_prev(&mut self) {
        let focusable = self.focusable_indices();
        if focusable.is_empty() {
            return;
        }

        let prev = match self.focus.and_then(|f| focusable.iter().position(|&i| i == f)) {
            Some(0) | None => focusable[focusable.len() - 1],
            Some(pos) => focusable[pos - 1],
        };
        self.focus = Some(prev);
    }

    fn focusable_indices(&self) -> Vec<usize> {
        self.content
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_focusable())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn snack_bar(&self) -> Option<&SnackBar> {
        self.snack_bar.as_ref()
    }

    /// Show a notification, replacing any open one.
    pub fn show_snack_bar(&mut self, message: impl Into<String>) {
        self.snack_bar = Some(SnackBar::new(message));
    }

    /// Close the open notification. Returns false if none was open.
    pub fn dismiss_snack_bar(&mut self) -> bool {
        self.snack_bar.take().is_some()
    }

    /// Close the notification if it outlived `ttl`. Returns true if closed.
    pub fn expire_snack_bar(&mut self, now: DateTime<Utc>, ttl: Duration) -> bool {
        if self.snack_bar.as_ref().is_some_and(|s| s.is_expired(now, ttl)) {
            self.snack_bar = None;
            true
        } else {
            false
        }
    }
}

impl Surface for Page {
    fn highlight_tab(&mut self, index: usize) {
        self.selected_tab = index;
    }
}
