// Snack bar overlay.
// Transient notification drawn over the bottom of the content area.

use ratatui::{prelude::*, widgets::*};

use super::page::SnackBar;
use super::theme::AppColors;

/// Draw a notification above the status bar.
pub fn draw_snack_bar(frame: &mut Frame, snack_bar: &SnackBar, area: Rect) {
    let width = (snack_bar.message.chars().count() as u16 + 14).min(area.width);
    let height = 3u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + area.height.saturating_sub(height);

    let snack_area = Rect::new(x, y, width, height);

    // Clear the area behind the notification
    frame.render_widget(Clear, snack_area);

    let line = Line::from(vec![
        Span::raw(format!(" {} ", snack_bar.message)),
        Span::styled(
            format!(" {} ", snack_bar.action_label),
            Style::default()
                .fg(AppColors::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("(Esc)", Style::default().fg(AppColors::MUTED)),
    ]);

    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(AppColors::ACCENT)),
    );
    frame.render_widget(widget, snack_area);
}
