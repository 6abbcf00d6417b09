//! Mode controller
//!
//! The controller is the central loop that:
//! - Refreshes the time and alarm snapshots
//! - Runs the alarm trigger and brightness schedule
//! - Turns button commands into mode transitions and edits
//! - Renders the active view

use dotclock_core::clock::Direction;
use dotclock_core::config::ClockConfig;
use dotclock_core::state::{Action, AlarmEditCursor, Mode, TimeEditCursor, Transition};
use dotclock_core::traits::{
    AlarmStore, Beeper, ButtonInput, Command, MatrixDisplay, SettingsStorage, TemperatureSource,
    TimeSource,
};
use dotclock_display::{DisplayEngine, HourSelect};

/// Collaborators of one board
pub struct Hardware<T, A, P, M, S, B, I> {
    /// Real-time clock
    pub time: T,
    /// Alarm setting store
    pub alarms: A,
    /// Temperature sensors
    pub sensors: P,
    /// LED matrix
    pub matrix: M,
    /// Settings EEPROM
    pub storage: S,
    pub beeper: B,
    pub buttons: I,
}

/// Display mode state machine driving the rendering engine
pub struct ModeController<T, A, P, M, S, B, I> {
    hw: Hardware<T, A, P, M, S, B, I>,
    engine: DisplayEngine,
    mode: Mode,
    /// Direction of the last edit, selects the swap effect
    direction: Direction,
    time_cursor: TimeEditCursor,
    alarm_cursor: AlarmEditCursor,
}

impl<T, A, P, M, S, B, I> ModeController<T, A, P, M, S, B, I>
where
    T: TimeSource,
    A: AlarmStore,
    P: TemperatureSource,
    M: MatrixDisplay,
    S: SettingsStorage,
    B: Beeper,
    I: ButtonInput,
{
    /// Create a controller in Main mode
    pub fn new(config: ClockConfig, mut hw: Hardware<T, A, P, M, S, B, I>) -> Self {
        let engine = DisplayEngine::new(config, &mut hw.storage, &mut hw.time, &mut hw.alarms);

        Self {
            hw,
            engine,
            mode: Mode::Main,
            direction: Direction::Up,
            time_cursor: TimeEditCursor::NOEDIT,
            alarm_cursor: AlarmEditCursor::NOEDIT,
        }
    }

    /// Get current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn time_cursor(&self) -> TimeEditCursor {
        self.time_cursor
    }

    pub fn alarm_cursor(&self) -> AlarmEditCursor {
        self.alarm_cursor
    }

    pub fn engine(&self) -> &DisplayEngine {
        &self.engine
    }

    pub fn hardware(&self) -> &Hardware<T, A, P, M, S, B, I> {
        &self.hw
    }

    pub fn hardware_mut(&mut self) -> &mut Hardware<T, A, P, M, S, B, I> {
        &mut self.hw
    }

    /// Run one loop iteration
    pub fn poll(&mut self) {
        self.engine.refresh(&mut self.hw.time, &mut self.hw.alarms);

        if self.mode.runs_alarm_check() {
            let hw = &mut self.hw;
            self.engine
                .check_alarm_and_brightness(&mut hw.beeper, &mut hw.matrix, &mut hw.storage);
        }

        let command = self.hw.buttons.next_command();
        self.handle_command(command);

        self.render();
    }

    /// Process a button command
    ///
    /// Every command beeps and stops a running ticker before it is
    /// dispatched. Returns the transition taken, `None` for an empty command.
    pub fn handle_command(&mut self, command: Command) -> Option<Transition> {
        if command == Command::None {
            return None;
        }

        let tones = self.engine.config().tones;
        let beep = if command.is_long() {
            tones.long_press_ms
        } else {
            tones.short_press_ms
        };
        self.hw.beeper.start(beep);
        self.hw.matrix.stop_scroll();

        if let Some(direction) = command.direction() {
            self.direction = direction;
        }

        let transition = self.mode.dispatch(command, self.alarm_cursor);
        self.execute(transition.action);

        if transition.next != self.mode {
            info!("Mode {} -> {} ({})", self.mode, transition.next, command);
            self.mode = transition.next;
        }

        Some(transition)
    }

    /// Render the active view
    pub fn render(&mut self) {
        let hw = &mut self.hw;

        match self.mode {
            Mode::Main => self
                .engine
                .show_main_screen(&mut hw.matrix, &mut hw.sensors, &mut hw.storage),
            Mode::TimeEdit => {
                if let Some(field) = self.time_cursor.field() {
                    self.engine
                        .show_time_edit(&mut hw.matrix, field, self.direction);
                }
            }
            Mode::Alarm => self.engine.show_alarm(&mut hw.matrix),
            Mode::AlarmEdit => {
                if let Some(field) = self.alarm_cursor.field() {
                    self.engine.show_alarm_edit(
                        &mut hw.matrix,
                        &mut hw.alarms,
                        field,
                        self.direction,
                    );
                }
            }
            Mode::Brightness => self.engine.show_brightness(&mut hw.matrix, self.direction),
        }
    }

    fn execute(&mut self, action: Action) {
        let hw = &mut self.hw;

        match action {
            Action::Idle => {}

            Action::BeginTimeEdit => {
                self.time_cursor.clear();
                self.time_cursor.advance();
            }
            Action::NextTimeField => self.time_cursor.advance(),
            Action::AdjustTime(direction) => {
                if let Some(field) = self.time_cursor.field() {
                    hw.time.adjust(field, direction);
                    self.engine.refresh(&mut hw.time, &mut hw.alarms);
                }
            }
            Action::EndTimeEdit => self.time_cursor.clear(),

            Action::BeginAlarmEdit => {
                self.alarm_cursor.clear();
                self.alarm_cursor.advance();
            }
            Action::NextAlarmField => self.alarm_cursor.advance(),
            Action::AdjustAlarm(direction) => {
                if let Some(field) = self.alarm_cursor.field() {
                    hw.alarms.change_value(field, direction);
                }
            }
            Action::EndAlarmEdit => {
                self.alarm_cursor.clear();
                self.engine.refresh(&mut hw.time, &mut hw.alarms);
            }
            Action::SaveAlarm => {
                hw.alarms.save();
                self.alarm_cursor.clear();
                self.engine.refresh(&mut hw.time, &mut hw.alarms);
                info!("Alarm saved");
            }

            Action::BeginBrightness => self.engine.begin_brightness_edit(&mut hw.storage),
            Action::NextBrightnessHour => self
                .engine
                .select_brightness_hour(&mut hw.storage, HourSelect::Next),
            Action::AdjustBrightness(direction) => self.engine.adjust_brightness(direction),
            Action::EndBrightness => self.engine.end_brightness_edit(&mut hw.storage),

            Action::ToggleHourZero => self.engine.switch_hour_zero(&mut hw.storage),
            Action::CycleBigNumber => self.engine.switch_big_number(&mut hw.storage),
            Action::RotateScreen => {
                hw.matrix.rotate_screen();
                self.engine.invalidate();
                info!("Screen rotated");
            }
        }
    }
}
