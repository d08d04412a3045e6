// Content area rendering.
// Lays out the page's widgets in a centered column.

use ratatui::{prelude::*, widgets::*};

use super::components::{self, Button, Checkbox, InputField, TextField};
use super::page::Page;
use super::theme::{AppColors, AppInputs, TextSize};

const BUTTON_WIDTH: u16 = 20;

/// Draw every widget on the page, top to bottom.
pub fn draw_content(frame: &mut Frame, page: &Page, area: Rect) {
    let width = (AppInputs::FIELD_WIDTH + 4).min(area.width);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y.saturating_add(1),
        width,
        height: area.height.saturating_sub(1),
    };

    let mut constraints: Vec<Constraint> = page
        .content()
        .iter()
        .map(|widget| Constraint::Length(widget.height()))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    for (i, (widget, chunk)) in page.content().iter().zip(chunks.iter()).enumerate() {
        let focused = page.focus() == Some(i);
        match widget {
            components::Widget::Text(text) => draw_text(frame, text, *chunk),
            components::Widget::Button(button) => draw_button(frame, button, *chunk, focused),
            components::Widget::Input(field) => draw_input(frame, field, *chunk, focused),
            components::Widget::Checkbox(checkbox) => {
                draw_checkbox(frame, checkbox, *chunk, focused)
            }
            components::Widget::Spacer(_) => {}
        }
    }
}

fn draw_text(frame: &mut Frame, text: &TextField, area: Rect) {
    let style = match text.size {
        TextSize::Header => Style::default().fg(text.color).add_modifier(Modifier::BOLD),
        TextSize::Body => Style::default().fg(text.color),
        TextSize::Caption => Style::default()
            .fg(text.color)
            .add_modifier(Modifier::ITALIC),
    };

    frame.render_widget(Paragraph::new(text.value.as_str()).style(style), area);
}

fn draw_button(frame: &mut Frame, button: &Button, area: Rect, focused: bool) {
    let area = Rect {
        width: BUTTON_WIDTH.min(area.width),
        ..area
    };

    let border_style = if focused {
        Style::default()
            .fg(AppColors::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(button.bgcolor)
    };

    let label = if focused {
        format!("▶ {} ◀", button.text)
    } else {
        button.text.clone()
    };

    let widget = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(button.color).bg(button.bgcolor))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(widget, area);
}

fn draw_input(frame: &mut Frame, field: &InputField, area: Rect, focused: bool) {
    let area = Rect {
        width: field.width.min(area.width),
        ..area
    };

    let border_color = if focused {
        AppColors::HIGHLIGHT
    } else {
        AppColors::MUTED
    };

    let mut title = format!(" {} ", field.label);
    if field.password && field.can_reveal_password {
        title.push_str(if field.revealed { "(^R hide) " } else { "(^R show) " });
    }

    let value_style = if field.value.is_empty() {
        Style::default().fg(AppColors::MUTED)
    } else {
        Style::default().fg(AppColors::TEXT_PRIMARY)
    };

    let mut spans = vec![Span::styled(field.display_value(), value_style)];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(AppColors::HIGHLIGHT)));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title),
    );
    frame.render_widget(widget, area);
}

fn draw_checkbox(frame: &mut Frame, checkbox: &Checkbox, area: Rect, focused: bool) {
    let mark = if checkbox.value { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default()
            .fg(AppColors::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(AppColors::TEXT_PRIMARY)
    };

    let line = Line::from(Span::styled(format!("{} {}", mark, checkbox.label), style));
    frame.render_widget(Paragraph::new(line), area);
}
