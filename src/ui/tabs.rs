// Tab bar rendering.
// Draws the navigator's tab strip with the page's highlighted tab.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;

use super::theme::AppColors;

/// Draw the tab bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let tabs_widget = app
        .navigator
        .tabs_widget()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(AppColors::MUTED))
                .title(format!(" {} ", app.page.title))
                .title_style(
                    Style::default()
                        .fg(AppColors::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(app.page.selected_tab())
        .style(Style::default().fg(AppColors::TEXT_PRIMARY))
        .highlight_style(
            Style::default()
                .fg(AppColors::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
