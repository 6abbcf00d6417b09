//! Display engine
//!
//! Owns everything the renderers share: the label table, the number
//! formatter, per-view caches, the persisted display flags, the brightness
//! schedule and the alarm trigger. Collaborators are borrowed per call.
//!
//! A full redraw is forced when the rendered view differs from the last one
//! and on the first render after `invalidate`. The Main screen additionally
//! carries a pending mask so that the first clock frame after a ticker
//! scroll is a full redraw.

use dotclock_core::clock::{AlarmField, AlarmSetting, DateTime, Direction, TimeField, WeekdayMask};
use dotclock_core::config::{BigNumberMode, ClockConfig, HourZeroStyle};
use dotclock_core::format::NumberFormatter;
use dotclock_core::labels::LabelTable;
use dotclock_core::mask::DirtyMask;
use dotclock_core::traits::{
    AlarmStore, Beeper, Effect, MatrixDisplay, SettingsStorage, TemperatureSource, TimeSource,
};

use crate::brightness::{BrightnessSchedule, HourSelect};
use crate::trigger::{AlarmTrigger, Chime};
use crate::views::{
    edit_effect, AlarmEditView, AlarmView, BrightnessView, ClockView, Ticker, TimeEditView, View,
};

/// Dot-matrix rendering engine
pub struct DisplayEngine {
    config: ClockConfig,
    labels: LabelTable,
    formatter: NumberFormatter,

    // Snapshots, refreshed once per loop iteration
    now: DateTime,
    alarm: AlarmSetting,
    alarm_days: WeekdayMask,

    // Persisted flags
    big_number: BigNumberMode,
    hour_zero: HourZeroStyle,

    brightness: BrightnessSchedule,
    trigger: AlarmTrigger,

    /// Mask carried into the next clock render
    pending: DirtyMask,
    last_view: Option<View>,
    force_full: bool,

    clock: ClockView,
    time_edit: TimeEditView,
    alarm_view: AlarmView,
    alarm_edit: AlarmEditView,
    brightness_view: BrightnessView,
}

impl DisplayEngine {
    /// Create the engine, loading labels and display flags from storage
    pub fn new<S, T, A>(config: ClockConfig, storage: &mut S, time: &mut T, alarms: &mut A) -> Self
    where
        S: SettingsStorage,
        T: TimeSource,
        A: AlarmStore,
    {
        let layout = config.layout;

        let labels = LabelTable::load(storage, layout.labels_base);
        info!("Loaded {} labels", labels.loaded());

        let big_number = BigNumberMode::from_byte(storage.read_byte(layout.big_number));
        let hour_zero = HourZeroStyle::from_byte(storage.read_byte(layout.hour_zero));

        let now = time.read_time();
        let mut brightness =
            BrightnessSchedule::new(layout, config.min_brightness, config.max_brightness);
        brightness.load_hour(storage, now.hour);

        Self {
            config,
            labels,
            formatter: NumberFormatter::new(),
            now,
            alarm: alarms.read_alarm(),
            alarm_days: alarms.raw_weekday_mask(),
            big_number,
            hour_zero,
            brightness,
            trigger: AlarmTrigger::new(),
            pending: DirtyMask::ALL,
            last_view: None,
            force_full: false,
            clock: ClockView::default(),
            time_edit: TimeEditView::default(),
            alarm_view: AlarmView::default(),
            alarm_edit: AlarmEditView::default(),
            brightness_view: BrightnessView::default(),
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    pub fn big_number(&self) -> BigNumberMode {
        self.big_number
    }

    pub fn hour_zero(&self) -> HourZeroStyle {
        self.hour_zero
    }

    pub fn brightness(&self) -> &BrightnessSchedule {
        &self.brightness
    }

    /// Re-read the time and alarm snapshots
    pub fn refresh<T: TimeSource, A: AlarmStore>(&mut self, time: &mut T, alarms: &mut A) {
        self.now = time.read_time();
        self.alarm = alarms.read_alarm();
        self.alarm_days = alarms.raw_weekday_mask();
    }

    /// Force a full redraw on the next render
    pub fn invalidate(&mut self) {
        self.force_full = true;
    }

    /// Check if the alarm is enabled for today's weekday
    pub fn check_if_alarm_today(&self) -> bool {
        self.alarm_days.contains(self.now.weekday)
    }

    /// Run the alarm trigger and apply the brightness scheduled for the
    /// current hour
    pub fn check_alarm_and_brightness<B, M, S>(
        &mut self,
        beeper: &mut B,
        display: &mut M,
        storage: &mut S,
    ) where
        B: Beeper,
        M: MatrixDisplay,
        S: SettingsStorage,
    {
        let today = self.check_if_alarm_today();
        let idle = !beeper.is_active();

        if let Some(chime) = self.trigger.evaluate(&self.now, &self.alarm, today, idle) {
            let tones = &self.config.tones;
            let duration = match chime {
                Chime::Alarm => tones.alarm_ms,
                Chime::Hourly => tones.chime_ms,
            };
            info!("{} at {}:{}", chime, self.now.hour, self.now.minute);
            beeper.start(duration);
        }

        self.brightness.load_hour(storage, self.now.hour);
        display.set_brightness(self.brightness.level());
    }

    /// Main screen: clock face, or a ticker at the configured seconds
    ///
    /// Does nothing while a ticker is still scrolling.
    pub fn show_main_screen<M, T, S>(&mut self, display: &mut M, sensors: &mut T, storage: &mut S)
    where
        M: MatrixDisplay,
        T: TemperatureSource,
        S: SettingsStorage,
    {
        if display.scroll_active() {
            return;
        }

        self.show_time(display, storage, self.pending);

        let second = self.now.second;
        if second == self.config.date_scroll_second {
            self.scroll(display, sensors, Ticker::Date);
        } else if second == self.config.temp_scroll_second {
            self.scroll(display, sensors, Ticker::Temperature);
        } else {
            self.pending = DirtyMask::NONE;
        }
    }

    /// Draw the clock face and swap with `mask` plus the changed regions
    ///
    /// Also loads the scheduled brightness for the current hour.
    pub fn show_time<M, S>(&mut self, display: &mut M, storage: &mut S, mask: DirtyMask)
    where
        M: MatrixDisplay,
        S: SettingsStorage,
    {
        let mut mask = mask | self.begin(View::Clock);
        mask |= self.clock.draw(
            display,
            &mut self.formatter,
            &self.now,
            self.big_number,
            self.hour_zero,
            self.alarm_days,
        );

        self.brightness.load_hour(storage, self.now.hour);

        display.swap_buffers(mask, Effect::ScrollDown);
    }

    /// Start a scrolling ticker
    pub fn scroll<M, T>(&mut self, display: &mut M, sensors: &mut T, ticker: Ticker)
    where
        M: MatrixDisplay,
        T: TemperatureSource,
    {
        debug!("Starting {} ticker", ticker);

        display.set_cursor_x(0);
        display.clear_trailing_columns();
        display.swap_buffers(DirtyMask::ALL, Effect::ScrollBoth);
        ticker.load(display, &mut self.formatter, &self.labels, &self.now, sensors);
        display.start_scroll();

        self.pending = DirtyMask::ALL;
    }

    /// Time-edit view for `field`
    pub fn show_time_edit<M: MatrixDisplay>(
        &mut self,
        display: &mut M,
        field: TimeField,
        direction: Direction,
    ) {
        let mut mask = self.begin(View::TimeEdit);
        mask |= self
            .time_edit
            .draw(display, &mut self.formatter, &self.labels, &self.now, field);

        display.swap_buffers(mask, edit_effect(direction));
    }

    /// Read-only alarm view
    pub fn show_alarm<M: MatrixDisplay>(&mut self, display: &mut M) {
        let mut mask = self.begin(View::Alarm);
        mask |= self
            .alarm_view
            .draw(display, &mut self.formatter, &self.alarm);

        display.swap_buffers(mask, Effect::ScrollDown);
    }

    /// Alarm-edit view for `field`, reading the working value from `alarms`
    pub fn show_alarm_edit<M, A>(
        &mut self,
        display: &mut M,
        alarms: &mut A,
        field: AlarmField,
        direction: Direction,
    ) where
        M: MatrixDisplay,
        A: AlarmStore,
    {
        let value = alarms.edit_value(field);

        let mut mask = self.begin(View::AlarmEdit);
        mask |= self
            .alarm_edit
            .draw(display, &mut self.formatter, &self.labels, field, value);

        display.swap_buffers(mask, edit_effect(direction));
    }

    /// Brightness-edit view
    pub fn show_brightness<M: MatrixDisplay>(&mut self, display: &mut M, direction: Direction) {
        let mut mask = self.begin(View::Brightness);
        mask |= self.brightness_view.draw(
            display,
            &mut self.formatter,
            self.brightness.hour(),
            self.brightness.level(),
        );

        display.swap_buffers(mask, edit_effect(direction));
    }

    /// Enter brightness editing at the current hour
    pub fn begin_brightness_edit<S: SettingsStorage>(&mut self, storage: &mut S) {
        self.brightness.load_hour(storage, self.now.hour);
    }

    /// Persist the working level and move the brightness cursor
    pub fn select_brightness_hour<S: SettingsStorage>(&mut self, storage: &mut S, select: HourSelect) {
        self.brightness.select(storage, select, self.now.hour);
        debug!("Brightness cursor at hour {}", self.brightness.hour());
    }

    /// Step the working brightness level
    pub fn adjust_brightness(&mut self, direction: Direction) {
        self.brightness.adjust(direction);
    }

    /// Persist the working level and return to the current hour
    pub fn end_brightness_edit<S: SettingsStorage>(&mut self, storage: &mut S) {
        let (hour, level) = (self.brightness.hour(), self.brightness.level());
        self.brightness.select(storage, HourSelect::Current, self.now.hour);
        info!("Brightness {} saved for hour {}", level, hour);
    }

    /// Toggle the hour padding style and persist it
    pub fn switch_hour_zero<S: SettingsStorage>(&mut self, storage: &mut S) {
        self.hour_zero = self.hour_zero.toggled();
        storage.update_byte(self.config.layout.hour_zero, self.hour_zero.pad());
        info!("Hour zero: {}", self.hour_zero);
        self.invalidate();
    }

    /// Cycle the clock font and persist it
    pub fn switch_big_number<S: SettingsStorage>(&mut self, storage: &mut S) {
        self.big_number = self.big_number.next();
        storage.update_byte(self.config.layout.big_number, self.big_number.to_byte());
        info!("Big number mode: {}", self.big_number);
        self.invalidate();
    }

    /// Record `view` as rendered and return the forced part of its mask
    fn begin(&mut self, view: View) -> DirtyMask {
        let changed = self.last_view != Some(view);
        let forced = DirtyMask::ALL.when(changed || self.force_full);
        self.last_view = Some(view);
        self.force_full = false;
        forced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotclock_core::mock::{
        MatrixOp, MemoryStorage, MockAlarmStore, MockBeeper, MockClock, MockMatrix,
        MockTemperature,
    };

    struct Rig {
        engine: DisplayEngine,
        storage: MemoryStorage<1024>,
        clock: MockClock,
        alarms: MockAlarmStore,
        sensors: MockTemperature,
        matrix: MockMatrix,
        beeper: MockBeeper,
    }

    impl Rig {
        fn new(now: DateTime) -> Self {
            let mut storage = MemoryStorage::<1024>::new();
            storage.write(0x20, b"Sun\0Mon\0Tue\0Wed\0Thu\0Fri\0Sat\0Dec\0Jan\0");
            let mut clock = MockClock::new(now);
            let mut alarms = MockAlarmStore::new(AlarmSetting::new(
                7,
                30,
                WeekdayMask::from_bits(0b0011111),
            ));
            let engine =
                DisplayEngine::new(ClockConfig::default(), &mut storage, &mut clock, &mut alarms);

            Self {
                engine,
                storage,
                clock,
                alarms,
                sensors: MockTemperature::new(&[215]),
                matrix: MockMatrix::new(),
                beeper: MockBeeper::new(),
            }
        }

        fn set_time(&mut self, now: DateTime) {
            self.clock.now = now;
            self.engine.refresh(&mut self.clock, &mut self.alarms);
        }

        fn main_screen(&mut self) {
            self.engine
                .show_main_screen(&mut self.matrix, &mut self.sensors, &mut self.storage);
        }

        fn check(&mut self) {
            self.engine
                .check_alarm_and_brightness(&mut self.beeper, &mut self.matrix, &mut self.storage);
        }

        fn last_mask(&self) -> DirtyMask {
            self.matrix.last_swap().map(|(mask, _)| mask).unwrap_or_default()
        }
    }

    #[test]
    fn test_startup_loads_flags_and_labels() {
        let mut storage = MemoryStorage::<1024>::new();
        storage.write(0x18, &[2, b' ']);
        storage.write(0x20, b"Sun\0");
        let engine = DisplayEngine::new(
            ClockConfig::default(),
            &mut storage,
            &mut MockClock::default(),
            &mut MockAlarmStore::default(),
        );

        assert_eq!(engine.big_number(), BigNumberMode::Extra);
        assert_eq!(engine.hour_zero(), HourZeroStyle::PadSpace);
        assert_eq!(engine.labels().loaded(), 1);
    }

    #[test]
    fn test_mask_empty_when_nothing_changed() {
        let mut rig = Rig::new(DateTime::at(8, 15, 20));

        rig.main_screen();
        assert!(rig.last_mask().is_full());

        rig.main_screen();
        assert!(rig.last_mask().is_empty());

        rig.set_time(DateTime::at(8, 15, 21));
        rig.main_screen();
        assert_eq!(rig.last_mask(), DirtyMask::SEC_UNITS);
    }

    #[test]
    fn test_font_change_forces_full_redraw() {
        let mut rig = Rig::new(DateTime::at(8, 15, 20));
        rig.main_screen();
        rig.main_screen();

        rig.engine.switch_big_number(&mut rig.storage);
        assert_eq!(rig.storage.byte(0x18), 1);

        rig.main_screen();
        assert!(rig.last_mask().is_full());
        rig.main_screen();
        assert!(rig.last_mask().is_empty());
    }

    #[test]
    fn test_view_switch_forces_full_redraw() {
        let mut rig = Rig::new(DateTime::at(8, 15, 20));
        rig.main_screen();
        rig.main_screen();

        rig.engine.show_alarm(&mut rig.matrix);
        assert!(rig.last_mask().is_full());
        rig.engine.show_alarm(&mut rig.matrix);
        assert!(rig.last_mask().is_empty());

        rig.main_screen();
        assert!(rig.last_mask().is_full());
    }

    #[test]
    fn test_hour_zero_toggle_persists() {
        let mut rig = Rig::new(DateTime::at(8, 15, 20));
        rig.engine.switch_hour_zero(&mut rig.storage);
        assert_eq!(rig.storage.byte(0x19), b' ');
        rig.engine.switch_hour_zero(&mut rig.storage);
        assert_eq!(rig.storage.byte(0x19), b'0');
    }

    #[test]
    fn test_date_ticker_scenario() {
        let mut rig = Rig::new(DateTime::at(12, 0, 9).on(2, 14, 1, 24));
        rig.main_screen();
        rig.main_screen();

        rig.set_time(DateTime::at(12, 0, 10).on(2, 14, 1, 24));
        rig.matrix.clear_ops();
        rig.main_screen();

        assert!(rig.matrix.scroll_active());
        assert_eq!(rig.matrix.last_swap(), Some((DirtyMask::ALL, Effect::ScrollBoth)));
        assert!(rig.matrix.recorded(&MatrixOp::ClearTrailing));
        assert_eq!(rig.matrix.last_op(), Some(&MatrixOp::StartScroll));
        assert!(rig.matrix.text().ends_with(b"Tue14Jan2024"));

        // Nothing is drawn while the ticker runs
        rig.set_time(DateTime::at(12, 0, 11).on(2, 14, 1, 24));
        rig.matrix.clear_ops();
        rig.main_screen();
        assert!(rig.matrix.ops.is_empty());

        // Scroll done: full clock redraw
        rig.matrix.scrolling = false;
        rig.set_time(DateTime::at(12, 0, 14).on(2, 14, 1, 24));
        rig.main_screen();
        assert_eq!(rig.matrix.last_swap(), Some((DirtyMask::ALL, Effect::ScrollDown)));

        rig.main_screen();
        assert!(rig.last_mask().is_empty());
    }

    #[test]
    fn test_temperature_ticker_at_second_40() {
        let mut rig = Rig::new(DateTime::at(12, 0, 40));
        rig.main_screen();
        assert!(rig.matrix.scroll_active());
        assert!(rig.matrix.text().ends_with(b" 21.5"));
    }

    #[test]
    fn test_alarm_fires_once_and_next_day() {
        let monday = DateTime::at(7, 30, 0).on(1, 1, 1, 24);
        let mut rig = Rig::new(monday);

        rig.check();
        assert_eq!(rig.beeper.started.as_slice(), &[60_000]);

        // Same minute, tone ended
        rig.beeper.finish();
        rig.set_time(DateTime::at(7, 30, 30).on(1, 1, 1, 24));
        rig.check();
        assert_eq!(rig.beeper.started.len(), 1);

        rig.set_time(DateTime::at(7, 31, 0).on(1, 1, 1, 24));
        rig.check();
        rig.set_time(DateTime::at(7, 30, 0).on(2, 2, 1, 24));
        rig.check();
        assert_eq!(rig.beeper.started.as_slice(), &[60_000, 60_000]);
    }

    #[test]
    fn test_alarm_skips_disabled_day() {
        // Saturday is not in the mask
        let mut rig = Rig::new(DateTime::at(7, 30, 0).on(6, 6, 1, 24));
        rig.check();
        assert!(rig.beeper.started.is_empty());
    }

    #[test]
    fn test_hourly_chime() {
        let mut rig = Rig::new(DateTime::at(9, 0, 0));
        rig.check();
        assert_eq!(rig.beeper.started.as_slice(), &[160]);
    }

    #[test]
    fn test_check_if_alarm_today() {
        let mut rig = Rig::new(DateTime::default());
        for weekday in 1..=7 {
            rig.set_time(DateTime::default().on(weekday, 1, 1, 24));
            assert_eq!(rig.engine.check_if_alarm_today(), weekday <= 5);
        }
    }

    #[test]
    fn test_scheduled_brightness_applied() {
        let mut rig = Rig::new(DateTime::at(21, 0, 5));
        rig.storage.write(21, &[3]);
        rig.main_screen();
        rig.check();
        assert_eq!(rig.matrix.brightness, Some(3));
    }

    #[test]
    fn test_scheduled_brightness_follows_hour_outside_main() {
        let mut rig = Rig::new(DateTime::at(12, 5, 0));
        rig.storage.write(12, &[2]);
        rig.storage.write(13, &[9]);
        rig.check();
        assert_eq!(rig.matrix.brightness, Some(2));

        // Hour changes while an edit view is shown
        rig.clock.adjust(TimeField::Hour, Direction::Up);
        rig.engine.refresh(&mut rig.clock, &mut rig.alarms);
        rig.engine
            .show_time_edit(&mut rig.matrix, TimeField::Hour, Direction::Up);
        rig.check();
        assert_eq!(rig.matrix.brightness, Some(9));
        assert_eq!(rig.engine.brightness().hour(), 13);
    }

    #[test]
    fn test_alarm_view_shows_working_weekdays() {
        let mut rig = Rig::new(DateTime::at(10, 0, 0));
        rig.engine.show_alarm(&mut rig.matrix);
        assert_eq!(rig.matrix.column(23), Some(0b0011111));

        rig.alarms.change_value(AlarmField::Monday, Direction::Up);
        rig.engine.refresh(&mut rig.clock, &mut rig.alarms);
        rig.engine.show_alarm(&mut rig.matrix);
        assert_eq!(rig.matrix.column(23), Some(0b0011110));
        assert_eq!(rig.last_mask(), DirtyMask::WEEKDAYS);

        // The clock face keeps the saved days until the alarm is saved
        rig.main_screen();
        assert_eq!(rig.matrix.column(23), Some(0b0011111));
    }

    #[test]
    fn test_brightness_editing() {
        let mut rig = Rig::new(DateTime::at(21, 5, 0));
        rig.storage.write(21, &[3]);
        rig.storage.write(22, &[7]);

        rig.engine.begin_brightness_edit(&mut rig.storage);
        rig.engine.show_brightness(&mut rig.matrix, Direction::Up);
        assert!(rig.last_mask().is_full());

        rig.engine.adjust_brightness(Direction::Up);
        rig.engine.show_brightness(&mut rig.matrix, Direction::Up);
        assert_eq!(rig.last_mask(), DirtyMask::BR_UNITS);

        rig.engine
            .select_brightness_hour(&mut rig.storage, HourSelect::Next);
        assert_eq!(rig.storage.byte(21), 4);
        assert_eq!(rig.engine.brightness().level(), 7);

        rig.engine.adjust_brightness(Direction::Down);
        rig.engine.end_brightness_edit(&mut rig.storage);
        assert_eq!(rig.storage.byte(22), 6);
        assert_eq!(rig.engine.brightness().hour(), 21);
        assert_eq!(rig.engine.brightness().level(), 4);
    }

    #[test]
    fn test_time_edit_effect_follows_direction() {
        let mut rig = Rig::new(DateTime::at(10, 0, 0));
        rig.engine
            .show_time_edit(&mut rig.matrix, TimeField::Hour, Direction::Down);
        assert_eq!(rig.matrix.last_swap(), Some((DirtyMask::ALL, Effect::ScrollUp)));
    }

    #[test]
    fn test_alarm_edit_reads_working_value() {
        let mut rig = Rig::new(DateTime::at(10, 0, 0));
        rig.alarms.working.hour = 11;
        rig.engine.show_alarm_edit(
            &mut rig.matrix,
            &mut rig.alarms,
            AlarmField::Hour,
            Direction::Up,
        );
        assert!(rig.matrix.text().starts_with(b"11"));
    }
}
