//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Redraw interval while the total is counting up (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// How long the total takes to count up from zero.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);

/// Longest text accepted in a numeric form field.
pub const MAX_FIELD_LEN: usize = 16;

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height including ASCII art and info panel.
    pub const HEADER_HEIGHT: u16 = 6;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
    /// Below this width only the focused pane is drawn.
    pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 90;
    /// Form pane width percentage when side by side.
    pub const FORM_WIDTH_PERCENT: u16 = 45;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 65;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 75;
}
