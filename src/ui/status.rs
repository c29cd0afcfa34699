//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

use super::colors;

/// Draws the commands bar showing available actions for the focused pane.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands(app.focus, app.is_text_entry());

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the commands available for the focused pane.
fn get_commands(focus: Focus, text_entry: bool) -> Vec<(&'static str, &'static str)> {
    match (focus, text_entry) {
        (Focus::Form, true) => vec![
            ("↑/↓", "campo"),
            ("0-9", "escribir"),
            ("Enter", "calcular"),
            ("Ctrl+R", "reiniciar"),
            ("F1", "ayuda"),
            ("Ctrl+C", "salir"),
        ],
        (Focus::Form, false) => vec![
            ("j/k", "campo"),
            ("h/l", "opción"),
            ("Enter", "calcular"),
            ("c", "copiar"),
            ("?", "ayuda"),
            ("q", "salir"),
        ],
        (Focus::Result, _) => vec![
            ("Esc", "volver"),
            ("Enter", "recalcular"),
            ("c", "copiar"),
            ("Ctrl+R", "reiniciar"),
            ("q", "salir"),
        ],
    }
}

/// Draws the status bar at the bottom (for messages).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        (format!(" {} ", status.text), style)
    } else {
        (" Listo".to_string(), Style::default().fg(colors::MUTED))
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}
