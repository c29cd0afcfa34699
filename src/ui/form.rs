//! Form pane rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

use crate::app::{App, Field, Focus};

use super::colors;

/// Block cursor character for input fields.
pub(crate) const BLOCK_CURSOR: &str = "█";

/// Width of the label column.
const LABEL_WIDTH: usize = 18;

/// Draws the lifestyle form.
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    // Split into header hint and field list
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Section hint
            Constraint::Min(0),    // Fields
        ])
        .split(area);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("Tus hábitos", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            " - Enter para calcular",
            Style::default().fg(colors::MUTED),
        ),
    ]));
    frame.render_widget(hint, chunks[0]);

    let focused = app.focus == Focus::Form;

    let items: Vec<ListItem> = Field::ALL
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let is_selected = focused && app.selected == idx;
            field_item(app, *field, is_selected)
        })
        .collect();

    let border_color = if focused { colors::PRIMARY } else { colors::BORDER };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .border_set(symbols::border::ROUNDED)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled("Datos", Style::default().fg(Color::White).bold()),
                    Span::styled(" ", Style::default()),
                ]))
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default()) // We handle highlighting in items
        .highlight_symbol("");

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

/// Builds one form row: label, value (or choice), and unit hint.
fn field_item(app: &App, field: Field, is_selected: bool) -> ListItem<'static> {
    let style = if is_selected {
        Style::default()
            .bg(colors::SELECTION)
            .fg(colors::SELECTION_TEXT)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(
            if is_selected { "▸ " } else { "  " },
            Style::default().fg(colors::WARNING),
        ),
        Span::styled(
            format!("{:<width$}", field.label(), width = LABEL_WIDTH),
            style.fg(if is_selected {
                colors::SELECTION_TEXT
            } else {
                colors::MUTED
            }),
        ),
    ];

    let value = app.form.display(field);

    if field.is_text() {
        spans.push(Span::styled(value, style.add_modifier(Modifier::BOLD)));
        if is_selected {
            spans.push(Span::styled(
                BLOCK_CURSOR,
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        spans.push(Span::styled(
            format!(" {}", field.unit()),
            Style::default().fg(colors::MUTED),
        ));
    } else {
        let arrow_style = Style::default().fg(if is_selected {
            colors::KEY
        } else {
            colors::MUTED
        });
        spans.push(Span::styled("◂ ", arrow_style));
        spans.push(Span::styled(value, style.add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(" ▸", arrow_style));
    }

    ListItem::new(Line::from(spans)).style(style)
}
