//! Display modes and the command dispatch table
//!
//! `Mode::dispatch` is pure: it picks the next mode and the action the
//! controller has to carry out. Global chords toggle settings from any
//! mode without changing it.

use super::cursor::AlarmEditCursor;
use crate::clock::Direction;
use crate::traits::Command;

/// Display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Clock face, with the date/temperature ticker
    #[default]
    Main,
    /// Setting the RTC, one field at a time
    TimeEdit,
    /// Read-only alarm time and weekdays
    Alarm,
    /// Editing alarm fields
    AlarmEdit,
    /// Editing the per-hour brightness schedule
    Brightness,
}

impl Mode {
    /// Check if the alarm evaluator and brightness schedule may run
    ///
    /// Skipped while brightness is edited so the schedule does not fight
    /// the user's working value.
    pub fn runs_alarm_check(self) -> bool {
        self != Mode::Brightness
    }

    /// Look up the transition for `command`
    pub fn dispatch(self, command: Command, alarm_cursor: AlarmEditCursor) -> Transition {
        use Action::*;
        use Command::*;
        use Mode::*;

        let (next, action) = match (self, command) {
            // Global chords, any mode
            (mode, Btn12Long) => (mode, ToggleHourZero),
            (mode, Btn23Long) => (mode, CycleBigNumber),
            (mode, Btn123Long) => (mode, RotateScreen),

            // Main
            (Main, Btn1Long) => (TimeEdit, BeginTimeEdit),
            (Main, Btn2Long) => (Alarm, Idle),
            (Main, Btn3Long) => (Brightness, BeginBrightness),

            // TimeEdit
            (TimeEdit, Btn1) => (TimeEdit, NextTimeField),
            (TimeEdit, Btn2) => (TimeEdit, AdjustTime(Direction::Up)),
            (TimeEdit, Btn3) => (TimeEdit, AdjustTime(Direction::Down)),
            (TimeEdit, Btn1Long) => (Main, EndTimeEdit),

            // Alarm
            (Alarm, Btn1) => (AlarmEdit, BeginAlarmEdit),
            (Alarm, Btn2Long) => (Main, SaveAlarm),

            // AlarmEdit
            (AlarmEdit, Btn1) if alarm_cursor.at_terminator() => (Alarm, EndAlarmEdit),
            (AlarmEdit, Btn1) => (AlarmEdit, NextAlarmField),
            (AlarmEdit, Btn2) => (AlarmEdit, AdjustAlarm(Direction::Up)),
            (AlarmEdit, Btn3) => (AlarmEdit, AdjustAlarm(Direction::Down)),
            (AlarmEdit, Btn2Long) => (Main, SaveAlarm),

            // Brightness
            (Brightness, Btn1) => (Brightness, NextBrightnessHour),
            (Brightness, Btn2) => (Brightness, AdjustBrightness(Direction::Up)),
            (Brightness, Btn3) => (Brightness, AdjustBrightness(Direction::Down)),
            (Brightness, Btn3Long) => (Main, EndBrightness),

            // Default: stay, nothing to do
            (mode, _) => (mode, Idle),
        };

        Transition { next, action }
    }
}

/// Side effect selected by a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Nothing beyond the mode change (if any)
    Idle,
    BeginTimeEdit,
    NextTimeField,
    AdjustTime(Direction),
    EndTimeEdit,
    BeginAlarmEdit,
    NextAlarmField,
    AdjustAlarm(Direction),
    /// Back from the terminator field to the read-only alarm view
    EndAlarmEdit,
    /// Persist the working alarm and leave alarm editing
    SaveAlarm,
    BeginBrightness,
    NextBrightnessHour,
    AdjustBrightness(Direction),
    /// Persist the working level and leave brightness editing
    EndBrightness,
    ToggleHourZero,
    CycleBigNumber,
    RotateScreen,
}

/// Result of dispatching one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub next: Mode,
    pub action: Action,
}
