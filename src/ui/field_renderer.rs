//! Field rendering utilities for the registration form

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a bordered input for a form field.
///
/// Derived fields are always drawn dark, with no cursor, mirroring the
/// disabled inputs of the original form.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    placeholder: Option<&str>,
) {
    let disabled = field.kind == FieldKind::Derived;

    let value_style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let mut spans = Vec::new();
    if display_value.is_empty() && !is_active {
        if let Some(hint) = placeholder {
            spans.push(Span::styled(
                hint.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        }
    } else {
        spans.push(Span::styled(display_value, value_style));
    }
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let title = if disabled {
        format!(" {} (auto) ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the single-line inline error under a field
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}
