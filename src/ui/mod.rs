// UI module for rendering the TUI.
// Contains the page surface, widget factory, screens, and draw functions.

pub mod components;
mod content;
pub mod page;
pub mod screens;
mod snack_bar;
mod tabs;
pub mod theme;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;

pub use components::{Action, Widget};
pub use page::Page;

use theme::{AppColors, AppTabs};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(AppTabs::HEIGHT), // Tab bar
            Constraint::Min(1),                  // Main content
            Constraint::Length(1),               // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    content::draw_content(frame, &app.page, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    if let Some(snack) = app.page.snack_bar() {
        snack_bar::draw_snack_bar(frame, snack, chunks[1]);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the status bar with keybinding hints and history depth.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![
        Span::raw(" 1-3 "),
        Span::styled("Tab", Style::default().fg(AppColors::MUTED)),
        Span::raw("  ↑↓ "),
        Span::styled("Focus", Style::default().fg(AppColors::MUTED)),
        Span::raw("  ↵ "),
        Span::styled("Press", Style::default().fg(AppColors::MUTED)),
        Span::raw("  Esc "),
        Span::styled("Back", Style::default().fg(AppColors::MUTED)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(AppColors::MUTED)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(AppColors::MUTED)),
    ];

    let depth = app.navigator.history().len();
    let depth_color = if app.navigator.can_go_back() {
        AppColors::ACCENT
    } else {
        AppColors::MUTED
    };
    hints.push(Span::styled(
        format!("  History: {}", depth),
        Style::default().fg(depth_color),
    ));

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 48u16.min(area.width);
    let popup_height = 15u16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |keys: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(keys, Style::default().fg(AppColors::ACCENT)),
            Span::raw(text),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("  1/2/3         ", "Open tab"),
        key("  Tab/S-Tab     ", "Next/previous tab"),
        key("  ↑/↓           ", "Move focus"),
        key("  Enter/Space   ", "Press button / toggle"),
        key("  Ctrl-R        ", "Show/hide password"),
        key("  Esc           ", "Dismiss / go back"),
        key("  ?             ", "Show/hide this help"),
        key("  q, Ctrl-C     ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(AppColors::MUTED)),
            Span::styled("Esc", Style::default().fg(AppColors::HIGHLIGHT)),
            Span::styled(" or ", Style::default().fg(AppColors::MUTED)),
            Span::styled("?", Style::default().fg(AppColors::HIGHLIGHT)),
            Span::styled(" to close", Style::default().fg(AppColors::MUTED)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(AppColors::ACCENT))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(AppColors::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::state::Tab;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_welcome() {
        let app = App::new(AppConfig::default(), vec!["Text 1".to_string()]).unwrap();
        let screen = render(&app);

        assert!(screen.contains("Welcome to tabshell"));
        assert!(screen.contains("Authorization"));
        assert!(screen.contains("About me"));
        assert!(screen.contains("Backend: Text 1"));
        assert!(screen.contains("History: 0"));
    }

    #[test]
    fn test_draw_authorization_with_snack_bar() {
        let mut app = App::new(AppConfig::default(), Vec::new()).unwrap();
        app.dispatch(Action::Start);
        let screen = render(&app);

        assert_eq!(app.active_tab(), Tab::Authorization);
        assert!(screen.contains("Enter your username"));
        assert!(screen.contains("[x] Save credentials"));
        assert!(screen.contains("Welcome! Let's get started."));
        assert!(screen.contains("History: 1"));
    }

    #[test]
    fn test_draw_help() {
        let mut app = App::new(AppConfig::default(), Vec::new()).unwrap();
        app.show_help = true;
        let screen = render(&app);

        assert!(screen.contains("Keyboard Shortcuts"));
    }
}
