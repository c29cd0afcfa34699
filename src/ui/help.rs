//! Help overlay rendering.

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;
use crate::feedback::{FeedbackTier, HIGH_THRESHOLD, LOW_THRESHOLD};
use crate::present::format_thousands;

use super::colors;
use super::utils::centered_rect;

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" Ayuda ", Style::default().fg(Color::White).bold()),
                    Span::styled(
                        "- pulsa cualquier tecla para cerrar ",
                        Style::default().fg(colors::MUTED),
                    ),
                ])),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("    ", Style::default()),
        Span::styled(format!("{key:<12}"), Style::default().fg(colors::KEY).bold()),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(title, Style::default().fg(colors::PRIMARY).bold()),
    ])
}

fn tier_line(range: String, tier: FeedbackTier) -> Line<'static> {
    Line::from(vec![
        Span::styled("    ", Style::default()),
        Span::styled(format!("{range:<18}"), Style::default().fg(colors::tier(tier)).bold()),
        Span::styled(tier.message(), Style::default().fg(colors::MUTED)),
    ])
}

/// Returns the help text content.
fn get_help_text() -> Text<'static> {
    let low = format_thousands(LOW_THRESHOLD as u64, ',');
    let high = format_thousands(HIGH_THRESHOLD as u64, ',');

    Text::from(vec![
        Line::from(""),
        section("FORMULARIO"),
        Line::from(""),
        key_line("↑ ↓ Tab", "Cambiar de campo"),
        key_line("← → h l", "Cambiar opción (transporte, compras, carne)"),
        key_line("0-9 .", "Escribir en campos numéricos"),
        key_line("Backspace", "Borrar el último carácter"),
        Line::from(""),
        section("RESULTADO"),
        Line::from(""),
        key_line("Enter  F5", "Calcular la huella anual"),
        key_line("Esc", "Volver al formulario"),
        key_line("c", "Copiar el resumen al portapapeles"),
        key_line("Ctrl+R", "Restablecer el formulario"),
        Line::from(""),
        section("NIVELES (kg CO₂/año)"),
        Line::from(""),
        tier_line(format!("< {low}"), FeedbackTier::Low),
        tier_line(format!("{low} - {high}"), FeedbackTier::Average),
        tier_line(format!("≥ {high}"), FeedbackTier::High),
        Line::from(""),
        section("GENERAL"),
        Line::from(""),
        key_line("?  F1", "Mostrar esta ayuda"),
        key_line("q  Ctrl+C", "Salir"),
        Line::from(""),
    ])
}
