// Tab navigation state.
// Tracks the active tab, the back-history stack, and per-tab render callbacks.

use std::fmt;

use ratatui::{prelude::*, widgets::*};
use tracing::{debug, info};

use crate::error::{AppError, Result};

/// A rendering surface the navigator keeps in sync with the active tab.
pub trait Surface {
    /// Move the tab strip highlight to `index`.
    fn highlight_tab(&mut self, index: usize);
}

/// Render callback invoked when a tab becomes active.
pub type TabHandler<S> = Box<dyn FnMut(&mut S)>;

/// Tab navigator with back-history.
///
/// The surface is passed to every call that renders, so the navigator never
/// owns it. A tab without a registered handler is still selectable; activating
/// it only moves the tab strip highlight.
pub struct TabNavigator<S> {
    titles: Vec<String>,
    handlers: Vec<Option<TabHandler<S>>>,
    active: usize,
    /// Previously active indices, most recent last.
    history: Vec<usize>,
}

impl<S: Surface> TabNavigator<S> {
    /// Create a navigator over the given tab titles, starting at the first tab.
    pub fn new<I, T>(titles: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        if titles.is_empty() {
            return Err(AppError::EmptyTabSet);
        }

        let handlers = titles.iter().map(|_| None).collect();
        Ok(Self {
            titles,
            handlers,
            active: 0,
            history: Vec::new(),
        })
    }

    /// Register the render callback for a tab, replacing any previous one.
    pub fn register<F>(&mut self, index: usize, handler: F) -> Result<()>
    where
        F: FnMut(&mut S) + 'static,
    {
        self.check_index(index)?;
        self.handlers[index] = Some(Box::new(handler));
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_handler<F>(mut self, index: usize, handler: F) -> Result<Self>
    where
        F: FnMut(&mut S) + 'static,
    {
        self.register(index, handler)?;
        Ok(self)
    }

    /// Make `index` the active tab. Reselecting the active tab does nothing.
    pub fn select_tab(&mut self, index: usize, surface: &mut S) -> Result<()> {
        self.check_index(index)?;
        if index == self.active {
            return Ok(());
        }

        info!(from = self.active, to = index, "select tab");
        self.history.push(self.active);
        self.active = index;
        self.activate(surface);
        Ok(())
    }

    /// Return to the previously active tab. Returns false if history is empty.
    pub fn go_back(&mut self, surface: &mut S) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };

        info!(from = self.active, to = previous, "go back");
        self.active = previous;
        self.activate(surface);
        true
    }

    /// Re-render the active tab without touching history.
    pub fn refresh(&mut self, surface: &mut S) {
        self.activate(surface);
    }

    /// Get the active tab index.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Get the back-history, most recent last.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Check if there is a tab to go back to.
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Always false; a navigator cannot be built without tabs.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Get the tab titles in display order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Tab strip widget with the active tab selected, for embedding in a layout.
    pub fn tabs_widget(&self) -> Tabs<'_> {
        Tabs::new(self.titles.iter().map(|title| Line::from(title.as_str()))).select(self.active)
    }

    fn activate(&mut self, surface: &mut S) {
        surface.highlight_tab(self.active);
        match self.handlers[self.active].as_mut() {
            Some(handler) => {
                debug!(tab = self.active, "render tab");
                handler(surface);
            }
            None => debug!(tab = self.active, "no handler registered"),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.titles.len() {
            Ok(())
        } else {
            Err(AppError::IndexOutOfRange {
                index,
                len: self.titles.len(),
            })
        }
    }
}

impl<S> fmt::Debug for TabNavigator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabNavigator")
            .field("titles", &self.titles)
            .field("active", &self.active)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        highlighted: Option<usize>,
        rendered: Vec<usize>,
    }

    impl Surface for Recorder {
        fn highlight_tab(&mut self, index: usize) {
            self.highlighted = Some(index);
        }
    }

    fn navigator() -> TabNavigator<Recorder> {
        let mut nav = TabNavigator::new(["Welcome", "Authorization", "About me"]).unwrap();
        for index in 0..nav.len() {
            nav.register(index, move |s: &mut Recorder| s.rendered.push(index))
                .unwrap();
        }
        nav
    }

    #[test]
    fn test_select_then_read() {
        let mut nav = navigator();
        let mut surface = Recorder::default();

        for index in [2, 0, 1, 2] {
            nav.select_tab(index, &mut surface).unwrap();
            assert_eq!(nav.active_index(), index);
            assert_eq!(surface.highlighted, Some(index));
        }
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut nav = navigator();
        let mut surface = Recorder::default();

        nav.select_tab(1, &mut surface).unwrap();
        assert_eq!(surface.rendered, vec![1]);

        nav.select_tab(1, &mut surface).unwrap();
        assert_eq!(nav.history().len(), 1);
        assert_eq!(surface.rendered, vec![1]);
    }

    #[test]
    fn test_go_back_on_fresh_navigator() {
        let mut nav = navigator();
        let mut surface = Recorder::default();

        assert!(!nav.go_back(&mut surface));
        assert!(!nav.can_go_back());
        assert_eq!(nav.active_index(), 0);
        assert!(surface.rendered.is_empty());
        assert_eq!(surface.highlighted, None);
    }

    #[test]
    fn test_back_sequence() {
        let mut nav = navigator();
        let mut surface = Recorder::default();

        nav.select_tab(1, &mut surface).unwrap();
        nav.select_tab(2, &mut surface).unwrap();

        assert!(nav.go_back(&mut surface));
        assert_eq!(nav.active_index(), 1);

        assert!(nav.go_back(&mut surface));
        assert_eq!(nav.active_index(), 0);

        // History drained
        assert!(!nav.go_back(&mut surface));
        assert_eq!(nav.active_index(), 0);
        assert!(!nav.go_back(&mut surface));
        assert_eq!(nav.active_index(), 0);

        assert_eq!(surface.rendered, vec![1, 2, 1, 0]);
        assert_eq!(surface.highlighted, Some(0));
    }

    #[test]
    fn test_out_of_range_leaves_state() {
        let mut nav = navigator();
        let mut surface = Recorder::default();
        nav.select_tab(2, &mut surface).unwrap();

        let err = nav.select_tab(3, &mut surface).unwrap_err();
        assert!(matches!(err, AppError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(nav.active_index(), 2);
        assert_eq!(nav.history(), &[0]);
        assert_eq!(surface.rendered, vec![2]);

        assert!(nav.select_tab(usize::MAX, &mut surface).is_err());
        assert_eq!(nav.active_index(), 2);
    }

    #[test]
    fn test_welcome_authorization_scenario() {
        let mut nav = navigator();
        let mut surface = Recorder::default();
        assert_eq!(nav.titles(), &["Welcome", "Authorization", "About me"]);

        nav.select_tab(1, &mut surface).unwrap();
        assert_eq!(nav.active_index(), 1);
        assert_eq!(nav.history(), &[0]);

        nav.select_tab(1, &mut surface).unwrap();
        assert_eq!(nav.active_index(), 1);
        assert_eq!(nav.history(), &[0]);

        assert!(nav.go_back(&mut surface));
        assert_eq!(nav.active_index(), 0);
        assert!(nav.history().is_empty());
    }

    #[test]
    fn test_select_and_back_round_trip() {
        let mut nav = navigator();
        let mut surface = Recorder::default();
        nav.select_tab(2, &mut surface).unwrap();
        nav.go_back(&mut surface);
        assert!(nav.history().is_empty());

        let sequence = [1, 2, 0, 2, 1, 0, 1];
        for index in sequence {
            nav.select_tab(index, &mut surface).unwrap();
        }
        for _ in sequence {
            assert!(nav.go_back(&mut surface));
        }

        assert_eq!(nav.active_index(), 0);
        assert!(nav.history().is_empty());
    }

    #[test]
    fn test_missing_handler_is_noop() {
        let mut nav: TabNavigator<Recorder> = TabNavigator::new(["One", "Two"]).unwrap();
        let mut surface = Recorder::default();

        nav.select_tab(1, &mut surface).unwrap();
        assert_eq!(nav.active_index(), 1);
        assert_eq!(surface.highlighted, Some(1));
        assert!(surface.rendered.is_empty());

        assert!(nav.go_back(&mut surface));
        assert_eq!(surface.highlighted, Some(0));
    }

    #[test]
    fn test_refresh_renders_without_history() {
        let mut nav = navigator();
        let mut surface = Recorder::default();

        nav.refresh(&mut surface);
        assert_eq!(surface.rendered, vec![0]);
        assert_eq!(surface.highlighted, Some(0));
        assert!(nav.history().is_empty());
    }

    #[test]
    fn test_construction_errors() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(
            TabNavigator::<Recorder>::new(empty),
            Err(AppError::EmptyTabSet)
        ));

        let nav = TabNavigator::<Recorder>::new(["Only"]).unwrap();
        let err = nav.with_handler(1, |_| {}).unwrap_err();
        assert!(matches!(err, AppError::IndexOutOfRange { index: 1, len: 1 }));
    }
}
