//! Result pane rendering: animated total, feedback and breakdown.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Calculation, Focus};
use crate::footprint::Category;
use crate::present::{display_value, format_thousands, UNIT};

use super::colors;
use super::utils::proportional_bar;

/// Width of the breakdown bars, in cells.
const BAR_WIDTH: usize = 20;

/// Draws the result pane, or an empty state before the first calculation.
pub fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let calculation = match &app.calculation {
        Some(calculation) if app.result_visible => calculation,
        _ => {
            draw_empty_state(frame, area);
            return;
        }
    };

    let border_color = if app.focus == Focus::Result {
        colors::PRIMARY
    } else {
        colors::BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("Tu huella anual", Style::default().fg(Color::White).bold()),
            Span::styled(" ", Style::default()),
        ]))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Score + message
            Constraint::Min(0),    // Breakdown
            Constraint::Length(1), // Timestamp
        ])
        .split(inner);

    draw_score(frame, chunks[0], calculation, app.thousands_separator);
    draw_breakdown(frame, chunks[1], calculation, app.thousands_separator);

    let timestamp = Paragraph::new(Line::from(vec![
        Span::styled("Calculado a las ", Style::default().fg(colors::MUTED)),
        Span::styled(
            calculation.computed_at.format("%H:%M:%S").to_string(),
            Style::default().fg(colors::SECONDARY),
        ),
        Span::styled("  ·  ", Style::default().fg(colors::MUTED)),
        Span::styled("c", Style::default().fg(colors::KEY).bold()),
        Span::styled(" copiar", Style::default().fg(colors::MUTED)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(timestamp, chunks[2]);
}

/// Draws the animated total and the feedback message.
fn draw_score(frame: &mut Frame, area: Rect, calculation: &Calculation, separator: char) {
    let presentation = &calculation.presentation;
    let tier_color = presentation
        .color
        .parse::<Color>()
        .unwrap_or_else(|_| colors::tier(presentation.tier));

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format_thousands(calculation.displayed, separator),
                Style::default().fg(tier_color).bold(),
            ),
            Span::styled(format!(" {UNIT}"), Style::default().fg(colors::MUTED)),
        ]),
        Line::from(Span::styled(
            presentation.message,
            Style::default().fg(Color::White),
        )),
    ];

    let score = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(score, area);
}

/// Placeholder shown until the first calculation is revealed.
fn draw_empty_state(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED);

    let content = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("♻", Style::default().fg(colors::ACCENT))),
        Line::from(""),
        Line::from(Span::styled(
            "Aún no hay resultado",
            Style::default().fg(colors::PRIMARY).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Pulsa Enter para calcular tu huella",
            Style::default().fg(colors::SUCCESS),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Completa el formulario con tus hábitos de la semana",
            Style::default().fg(colors::MUTED),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Draws one line per category with a bar proportional to its share.
fn draw_breakdown(frame: &mut Frame, area: Rect, calculation: &Calculation, separator: char) {
    let total = calculation.presentation.total;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Desglose",
            Style::default().fg(colors::PRIMARY).bold(),
        )),
    ];

    for (category, value) in calculation.result.breakdown() {
        let share = if total > 0.0 { value / total } else { 0.0 };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<14}", category.label()),
                Style::default().fg(colors::MUTED),
            ),
            Span::styled(
                proportional_bar(share, BAR_WIDTH),
                Style::default().fg(category_color(category)),
            ),
            Span::styled(
                format!(" {:>8}", format_thousands(display_value(value), separator)),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!(" {:>3.0}%", share * 100.0),
                Style::default().fg(colors::MUTED),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Transport => colors::PRIMARY,
        Category::Energy => colors::WARNING,
        Category::Shopping => colors::ACCENT,
        Category::Meat => colors::ERROR,
        Category::Hvac => colors::SECONDARY,
    }
}
