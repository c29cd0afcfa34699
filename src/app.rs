//! Application state and logic.
//!
//! This module contains the form state, the latest calculation, and the
//! event handling logic. All terminal output lives in `ui`; the footprint
//! itself is computed by the pure functions in `footprint`.

use chrono::{DateTime, Local};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, trace, warn};

use crate::animation::{spawn_count_up, AnimationFrame, AnimationHandle, CountUp};
use crate::config::Config;
use crate::constants::{FRAME_INTERVAL, MAX_FIELD_LEN};
use crate::event::Action;
use crate::factors::{Choice, MeatTier, ShoppingTier, TransportMode};
use crate::footprint::{compute_footprint, FootprintResult};
use crate::input::{RawInput, UserInput};
use crate::present::{present_result, summary_line, Presentation};

/// The form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Transport,
    WeeklyDistance,
    MonthlyElectricity,
    MonthlyGas,
    Shopping,
    Meat,
    HvacHours,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Transport,
        Field::WeeklyDistance,
        Field::MonthlyElectricity,
        Field::MonthlyGas,
        Field::Shopping,
        Field::Meat,
        Field::HvacHours,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Transport => "Transporte",
            Field::WeeklyDistance => "Distancia semanal",
            Field::MonthlyElectricity => "Electricidad",
            Field::MonthlyGas => "Gas",
            Field::Shopping => "Compras",
            Field::Meat => "Consumo de carne",
            Field::HvacHours => "Climatización",
        }
    }

    /// Unit hint shown after numeric fields.
    pub fn unit(self) -> &'static str {
        match self {
            Field::WeeklyDistance => "km/semana",
            Field::MonthlyElectricity => "kWh/mes",
            Field::MonthlyGas => "m³/mes",
            Field::HvacHours => "horas/día",
            Field::Transport | Field::Shopping | Field::Meat => "",
        }
    }

    /// True for free-text numeric fields, false for select fields.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Field::WeeklyDistance | Field::MonthlyElectricity | Field::MonthlyGas | Field::HvacHours
        )
    }
}

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Result,
}

/// Current contents of the form.
///
/// Select fields hold `None` when their initial key did not match any
/// choice; numeric fields hold the raw text the user typed.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub transport: Option<TransportMode>,
    pub weekly_distance: String,
    pub monthly_electricity: String,
    pub monthly_gas: String,
    pub shopping: Option<ShoppingTier>,
    pub meat: Option<MeatTier>,
    pub daily_hvac_hours: String,
}

impl Form {
    pub fn from_raw(raw: &RawInput) -> Self {
        Self {
            transport: TransportMode::from_key(&raw.transport),
            weekly_distance: raw.weekly_distance.clone(),
            monthly_electricity: raw.monthly_electricity.clone(),
            monthly_gas: raw.monthly_gas.clone(),
            shopping: ShoppingTier::from_key(&raw.shopping),
            meat: MeatTier::from_key(&raw.meat),
            daily_hvac_hours: raw.daily_hvac_hours.clone(),
        }
    }

    /// Snapshot of the form as raw text, as the calculator reads it.
    pub fn to_raw(&self) -> RawInput {
        RawInput {
            transport: self.transport.map(Choice::key).unwrap_or_default().to_string(),
            weekly_distance: self.weekly_distance.clone(),
            monthly_electricity: self.monthly_electricity.clone(),
            monthly_gas: self.monthly_gas.clone(),
            shopping: self.shopping.map(Choice::key).unwrap_or_default().to_string(),
            meat: self.meat.map(Choice::key).unwrap_or_default().to_string(),
            daily_hvac_hours: self.daily_hvac_hours.clone(),
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::WeeklyDistance => Some(&mut self.weekly_distance),
            Field::MonthlyElectricity => Some(&mut self.monthly_electricity),
            Field::MonthlyGas => Some(&mut self.monthly_gas),
            Field::HvacHours => Some(&mut self.daily_hvac_hours),
            Field::Transport | Field::Shopping | Field::Meat => None,
        }
    }

    /// Text shown for a field in the form.
    pub fn display(&self, field: Field) -> String {
        fn choice<C: Choice>(value: Option<C>) -> String {
            value.map(C::label).unwrap_or("—").to_string()
        }

        match field {
            Field::Transport => choice(self.transport),
            Field::Shopping => choice(self.shopping),
            Field::Meat => choice(self.meat),
            Field::WeeklyDistance => self.weekly_distance.clone(),
            Field::MonthlyElectricity => self.monthly_electricity.clone(),
            Field::MonthlyGas => self.monthly_gas.clone(),
            Field::HvacHours => self.daily_hvac_hours.clone(),
        }
    }

    /// Cycles a select field. Numeric fields are left untouched.
    fn cycle(&mut self, field: Field, forward: bool) {
        fn step<C: Choice>(value: &mut Option<C>, forward: bool) {
            *value = Some(if forward {
                C::next(*value)
            } else {
                C::previous(*value)
            });
        }

        match field {
            Field::Transport => step(&mut self.transport, forward),
            Field::Shopping => step(&mut self.shopping, forward),
            Field::Meat => step(&mut self.meat, forward),
            _ => {}
        }
    }
}

/// The most recent calculation and its on-screen state.
#[derive(Debug, Clone)]
pub struct Calculation {
    pub result: FootprintResult,
    pub presentation: Presentation,
    pub computed_at: DateTime<Local>,
    /// Value currently shown by the count-up.
    pub displayed: u64,
    pub animating: bool,
}

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    /// Current form contents
    pub form: Form,
    /// Form contents restored by Reset
    initial_form: Form,
    /// Index into `Field::ALL` of the focused field
    pub selected: usize,
    /// Pane with keyboard focus
    pub focus: Focus,
    /// Has the result pane been revealed?
    pub result_visible: bool,
    /// Latest calculation, if any
    pub calculation: Option<Calculation>,
    /// Status message to display
    pub status: Option<StatusMessage>,
    /// Help overlay visibility
    pub show_help: bool,
    /// Character used to group thousands
    pub thousands_separator: char,

    // --- Animation state ---
    /// Bumped on every calculation; frames from older ones are dropped
    generation: u64,
    animation: Option<AnimationHandle>,
    frames_tx: UnboundedSender<AnimationFrame>,
    frames_rx: UnboundedReceiver<AnimationFrame>,
}

impl App {
    /// Creates the application with the form prefilled from `config`.
    pub fn new(config: &Config) -> Self {
        let form = Form::from_raw(&config.defaults);
        let (frames_tx, frames_rx) = mpsc::unbounded_channel();

        Self {
            initial_form: form.clone(),
            form,
            selected: 0,
            focus: Focus::Form,
            result_visible: false,
            calculation: None,
            status: None,
            show_help: false,
            thousands_separator: config.display.thousands_separator,
            generation: 0,
            animation: None,
            frames_tx,
            frames_rx,
        }
    }

    /// The focused form field.
    pub fn selected_field(&self) -> Field {
        Field::ALL[self.selected]
    }

    /// True when printable keys should be typed into a field.
    pub fn is_text_entry(&self) -> bool {
        !self.show_help && self.focus == Focus::Form && self.selected_field().is_text()
    }

    /// True while a count-up is still running.
    pub fn is_animating(&self) -> bool {
        self.calculation.as_ref().is_some_and(|c| c.animating)
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> bool {
        // Handle help toggle from any view
        if action == Action::Help {
            self.show_help = !self.show_help;
            return false;
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return false;
        }

        match action {
            Action::Quit => return true,
            Action::Calculate => self.calculate(),
            Action::Reset => self.reset(),
            Action::Copy => self.copy_summary(),
            _ => match self.focus {
                Focus::Form => self.handle_form_action(action),
                Focus::Result => self.handle_result_action(action),
            },
        }
        false
    }

    /// Handles actions while the form has focus.
    fn handle_form_action(&mut self, action: Action) {
        match action {
            Action::Up => self.select_previous_field(),
            Action::Down => self.select_next_field(),
            Action::Left => self.form.cycle(self.selected_field(), false),
            Action::Right => self.form.cycle(self.selected_field(), true),
            Action::Char(c) => self.input_char(c),
            Action::Backspace => self.input_backspace(),
            _ => {}
        }
    }

    /// Handles actions while the result pane has focus.
    fn handle_result_action(&mut self, action: Action) {
        if matches!(action, Action::Back | Action::Up | Action::Down) {
            self.focus = Focus::Form;
        }
    }

    // --- Navigation helpers ---

    fn select_previous_field(&mut self) {
        let len = Field::ALL.len();
        self.selected = if self.selected == 0 { len - 1 } else { self.selected - 1 };
    }

    fn select_next_field(&mut self) {
        let len = Field::ALL.len();
        self.selected = if self.selected >= len - 1 { 0 } else { self.selected + 1 };
    }

    // --- Input handling ---

    /// Appends a character to the focused numeric field.
    pub fn input_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if let Some(text) = self.form.text_mut(self.selected_field()) {
            if text.chars().count() < MAX_FIELD_LEN {
                text.push(c);
            }
        }
    }

    /// Removes the last character from the focused numeric field.
    pub fn input_backspace(&mut self) {
        if let Some(text) = self.form.text_mut(self.selected_field()) {
            text.pop();
        }
    }

    // --- Calculation ---

    /// Computes the footprint from the current form and presents it.
    ///
    /// Any count-up still running for an earlier calculation is cancelled;
    /// the latest trigger always wins.
    pub fn calculate(&mut self) {
        let raw = self.form.to_raw();
        let input = UserInput::from_raw(&raw);
        let result = compute_footprint(&input);
        let presentation = present_result(result.total);

        info!(
            total = result.total,
            tier = presentation.tier.name(),
            "Calculated footprint"
        );
        debug!(?input, ?result, "Calculation details");

        if presentation.reveal {
            self.result_visible = true;
        }
        if presentation.bring_into_view {
            self.focus = Focus::Result;
        }

        self.start_animation(presentation.count_up);
        self.calculation = Some(Calculation {
            result,
            presentation,
            computed_at: Local::now(),
            displayed: 0,
            animating: true,
        });
        self.clear_status();
    }

    /// Cancels the running count-up (if any) and starts a new one.
    fn start_animation(&mut self, count_up: CountUp) {
        if let Some(previous) = self.animation.take() {
            if !previous.is_finished() {
                debug!(generation = previous.generation(), "Superseding running animation");
            }
            previous.cancel();
        }

        self.generation += 1;
        self.animation = Some(spawn_count_up(
            count_up,
            FRAME_INTERVAL,
            self.generation,
            self.frames_tx.clone(),
        ));
    }

    /// Applies every animation frame received since the last call.
    pub fn drain_frames(&mut self) {
        while let Ok(frame) = self.frames_rx.try_recv() {
            self.apply_frame(frame);
        }
    }

    /// Updates the displayed total from one frame.
    ///
    /// Frames from a superseded calculation are ignored.
    pub fn apply_frame(&mut self, frame: AnimationFrame) {
        if frame.generation != self.generation {
            trace!(
                stale = frame.generation,
                current = self.generation,
                "Dropping stale animation frame"
            );
            return;
        }

        if let Some(calculation) = self.calculation.as_mut() {
            calculation.displayed = frame.value;
            if frame.done {
                calculation.animating = false;
                self.animation = None;
            }
        }
    }

    /// Restores the form to its initial contents and hides the result.
    fn reset(&mut self) {
        self.animation = None;
        self.calculation = None;
        self.result_visible = false;
        self.focus = Focus::Form;
        self.selected = 0;
        self.form = self.initial_form.clone();
        self.set_status("Formulario restablecido", false);
    }

    // --- Clipboard ---

    fn copy_summary(&mut self) {
        let Some(calculation) = &self.calculation else {
            self.set_status("Nada que copiar: calcula tu huella primero", true);
            return;
        };

        let summary = summary_line(calculation.result.total, self.thousands_separator);

        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(summary).is_ok() {
                    info!("Copied summary to clipboard");
                    self.set_status("¡Copiado al portapapeles!", false);
                } else {
                    warn!("Clipboard rejected the summary");
                    self.set_status("No se pudo copiar al portapapeles", true);
                }
            }
            Err(e) => {
                warn!("Clipboard not available: {e}");
                self.set_status("Portapapeles no disponible", true);
            }
        }
    }

    // --- Status message helpers ---

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
