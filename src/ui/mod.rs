//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each pane is rendered by a separate submodule for clarity.

mod colors;
mod form;
mod header;
mod help;
mod result;
mod status;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::{App, Focus};
use crate::constants::layout;

use form::draw_form;
use header::draw_header;
use help::draw_help_overlay;
use result::draw_result;
use status::{draw_commands_bar, draw_status_bar};

/// Main draw function - lays out the panes and dispatches to renderers.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create the main layout: header, content, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0), // Main content
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_content(frame, chunks[1], app);

    // Draw the commands bar (shows available actions)
    draw_commands_bar(frame, chunks[2], app);

    // Draw the status bar (shows messages)
    draw_status_bar(frame, chunks[3], app);

    // Draw help overlay if enabled
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draws the form and result panes side by side, or only the focused
/// pane when the terminal is too narrow.
fn draw_content(frame: &mut Frame, area: Rect, app: &App) {
    if area.width < layout::SIDE_BY_SIDE_MIN_WIDTH {
        match app.focus {
            Focus::Form => draw_form(frame, area, app),
            Focus::Result => draw_result(frame, area, app),
        }
        return;
    }

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(layout::FORM_WIDTH_PERCENT),
            Constraint::Percentage(100 - layout::FORM_WIDTH_PERCENT),
        ])
        .split(area);

    draw_form(frame, panes[0], app);
    draw_result(frame, panes[1], app);
}
