// App state and main event loop.
// Wires the tab navigator to the page and translates keys into navigation.

use std::io;
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::error::Result;
use crate::state::{Tab, TabNavigator};
use crate::ui::{self, Action, Page, Widget, screens};

/// Main application state.
pub struct App {
    pub navigator: TabNavigator<Page>,
    /// Surface the navigator renders onto.
    pub page: Page,
    pub config: AppConfig,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    /// Build the app and render the Welcome tab.
    pub fn new(config: AppConfig, placeholders: Vec<String>) -> Result<Self> {
        let mut page = Page::new(config.app_title.clone());
        let app_title = config.app_title.clone();

        let mut navigator = TabNavigator::new(Tab::ALL.iter().map(Tab::title))?
            .with_handler(Tab::Welcome.index(), move |page: &mut Page| {
                screens::render_welcome(page, &app_title, &placeholders)
            })?
            .with_handler(Tab::Authorization.index(), screens::render_authorization)?
            .with_handler(Tab::AboutMe.index(), screens::render_about_me)?;
        navigator.refresh(&mut page);

        Ok(Self {
            navigator,
            page,
            config,
            show_help: false,
            should_quit: false,
        })
    }

    /// Currently active tab.
    pub fn active_tab(&self) -> Tab {
        Tab::from_index(self.navigator.active_index()).unwrap_or_default()
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.page
                .expire_snack_bar(Utc::now(), self.config.snack_bar_ttl());
        }
        Ok(())
    }

    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle a single key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => {
                    if let Some(Widget::Input(field)) = self.page.focused_widget_mut() {
                        field.toggle_reveal();
                    }
                }
                _ => {}
            }
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        let input_focused = matches!(self.page.focused_widget(), Some(Widget::Input(_)));

        match key.code {
            KeyCode::Esc => {
                if !self.page.dismiss_snack_bar() {
                    self.go_back();
                }
            }
            KeyCode::Tab => self.select_tab(self.active_tab().next()),
            KeyCode::BackTab => self.select_tab(self.active_tab().prev()),
            KeyCode::Up => self.page.focus_prev(),
            KeyCode::Down => self.page.focus_next(),
            KeyCode::Enter => self.activate_focused(),
            KeyCode::Backspace if input_focused => {
                if let Some(Widget::Input(field)) = self.page.focused_widget_mut() {
                    field.backspace();
                }
            }
            KeyCode::Char(c) if input_focused => {
                if let Some(Widget::Input(field)) = self.page.focused_widget_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='9') => self.select_index(c as usize - '1' as usize),
            _ => {}
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.select_index(tab.index());
    }

    /// Select a tab by position. A bad index is logged and ignored.
    fn select_index(&mut self, index: usize) {
        if let Err(e) = self.navigator.select_tab(index, &mut self.page) {
            error!(error = %e, "tab selection failed");
        }
    }

    /// Return to the previous tab, or notify when there is none.
    pub fn go_back(&mut self) {
        if !self.navigator.go_back(&mut self.page) {
            self.page.show_snack_bar("Already at the first tab");
        }
    }

    /// Press the focused button or toggle the focused checkbox.
    fn activate_focused(&mut self) {
        if matches!(self.page.focused_widget(), Some(Widget::Input(_))) {
            self.page.focus_next();
            return;
        }

        let action = match self.page.focused_widget_mut() {
            Some(Widget::Button(button)) => button.action,
            Some(Widget::Checkbox(checkbox)) => {
                checkbox.toggle();
                return;
            }
            _ => return,
        };
        self.dispatch(action);
    }

    /// Run a button action.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Start => {
                self.page.show_snack_bar("Welcome! Let's get started.");
                self.select_tab(Tab::Authorization);
            }
            Action::Login => {
                let username = self.input_value("Username").unwrap_or_default();
                info!(username = %username, "login button clicked");
                self.page.show_snack_bar("Login button clicked");
            }
            Action::Back => self.go_back(),
        }
    }

    fn input_value(&self, label: &str) -> Option<String> {
        self.page.content().iter().find_map(|widget| match widget {
            Widget::Input(field) if field.label == label => Some(field.value.clone()),
            _ => None,
        })
    }
}
