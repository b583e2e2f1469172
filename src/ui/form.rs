//! Registration form rendering

use super::field_renderer::{draw_error_line, draw_field};
use crate::app::App;
use crate::state::FieldId;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows for one field: bordered input plus its inline error line
const FIELD_HEIGHT: u16 = 4;

const LEFT_COLUMN: [FieldId; 4] = [FieldId::Name, FieldId::Email, FieldId::Phone, FieldId::Cep];
const RIGHT_COLUMN: [FieldId; 4] = [
    FieldId::Logradouro,
    FieldId::Cidade,
    FieldId::Password,
    FieldId::PasswordCheck,
];

fn placeholder(id: FieldId) -> Option<&'static str> {
    match id {
        FieldId::Phone => Some("(99) 99999-9999"),
        FieldId::Cep => Some("99999999"),
        _ => None,
    }
}

/// Draw the whole registration view
pub fn draw(frame: &mut Frame, app: &App) {
    let outer = Block::default()
        .title(" Cadastro ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                // hint line
            Constraint::Length(FIELD_HEIGHT * 4), // field grid
            Constraint::Length(3),                // submit button
            Constraint::Length(1),                // notice
            Constraint::Min(0),
        ])
        .split(inner);

    draw_hints(frame, chunks[0]);
    draw_grid(frame, chunks[1], app);
    draw_submit_button(frame, chunks[2], app);
    draw_notice(frame, chunks[3], app);
}

fn draw_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(Span::styled(
        " Tab: próximo campo · Enter: enviar · Esc: sair",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(hints), area);
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_column(frame, columns[0], app, &LEFT_COLUMN);
    draw_column(frame, columns[1], app, &RIGHT_COLUMN);
}

fn draw_column(frame: &mut Frame, area: Rect, app: &App, ids: &[FieldId]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(FIELD_HEIGHT); ids.len()])
        .split(area);

    for (&id, &row) in ids.iter().zip(rows.iter()) {
        let cell = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(row);

        let is_active = app.form.focused_field_id() == Some(id);
        draw_field(frame, cell[0], app.form.field(id), is_active, placeholder(id));
        draw_error_line(frame, cell[1], app.field_error(id));
    }
}

fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.form.is_submit_row_active();
    let style = if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if is_active {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let button = Paragraph::new(Line::from(Span::styled(" Enviar ", style)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}

fn draw_notice(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(notice) = &app.notice {
        let line = Line::from(Span::styled(
            format!(" {notice}"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}
