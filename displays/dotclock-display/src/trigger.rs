//! Alarm and hourly chime trigger
//!
//! Evaluated once per loop iteration against fresh time and alarm
//! snapshots. A two-state latch makes every match fire at most once: it
//! fires when a tone starts and re-arms only after the matching minute
//! has passed.

use dotclock_core::clock::{AlarmSetting, DateTime};

/// Trigger latch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerLatch {
    /// Ready to start a tone
    #[default]
    Armed,
    /// A tone was started for the current match
    Fired,
}

/// Tone requested by the trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Chime {
    /// Alarm time reached on an enabled weekday
    Alarm,
    /// Top of an hour after the alarm hour
    Hourly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlarmTrigger {
    latch: TriggerLatch,
}

impl AlarmTrigger {
    pub const fn new() -> Self {
        Self {
            latch: TriggerLatch::Armed,
        }
    }

    pub fn latch(&self) -> TriggerLatch {
        self.latch
    }

    /// Decide whether a tone starts now
    ///
    /// - alarm minute on an enabled day: `Chime::Alarm`
    /// - alarm minute on a disabled day: nothing, latch unchanged
    /// - minute 0 of an hour later than the alarm hour: `Chime::Hourly`
    /// - anything else re-arms the latch
    ///
    /// A tone is only requested while the beeper is idle.
    pub fn evaluate(
        &mut self,
        now: &DateTime,
        alarm: &AlarmSetting,
        alarm_today: bool,
        beeper_idle: bool,
    ) -> Option<Chime> {
        if now.hour == alarm.hour && now.minute == alarm.minute {
            if alarm_today {
                return self.fire(Chime::Alarm, beeper_idle);
            }
            None
        } else if now.hour > alarm.hour && now.minute == 0 {
            self.fire(Chime::Hourly, beeper_idle)
        } else {
            self.latch = TriggerLatch::Armed;
            None
        }
    }

    fn fire(&mut self, chime: Chime, beeper_idle: bool) -> Option<Chime> {
        if beeper_idle && self.latch == TriggerLatch::Armed {
            self.latch = TriggerLatch::Fired;
            Some(chime)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotclock_core::clock::WeekdayMask;

    const ALARM: AlarmSetting = AlarmSetting::new(7, 30, WeekdayMask::EVERY_DAY);

    #[test]
    fn test_alarm_fires_once_per_match() {
        let mut trigger = AlarmTrigger::new();
        let now = DateTime::at(7, 30, 0);

        assert_eq!(trigger.evaluate(&now, &ALARM, true, true), Some(Chime::Alarm));
        assert_eq!(trigger.latch(), TriggerLatch::Fired);

        // Same minute, beeper idle again
        let later = DateTime::at(7, 30, 45);
        assert_eq!(trigger.evaluate(&later, &ALARM, true, true), None);
    }

    #[test]
    fn test_rearms_after_minute() {
        let mut trigger = AlarmTrigger::new();
        trigger.evaluate(&DateTime::at(7, 30, 0), &ALARM, true, true);

        assert_eq!(trigger.evaluate(&DateTime::at(7, 31, 0), &ALARM, true, true), None);
        assert_eq!(trigger.latch(), TriggerLatch::Armed);

        let tomorrow = DateTime::at(7, 30, 0).on(2, 2, 1, 24);
        assert_eq!(
            trigger.evaluate(&tomorrow, &ALARM, true, true),
            Some(Chime::Alarm)
        );
    }

    #[test]
    fn test_busy_beeper_defers() {
        let mut trigger = AlarmTrigger::new();
        let now = DateTime::at(7, 30, 0);
        assert_eq!(trigger.evaluate(&now, &ALARM, true, false), None);
        assert_eq!(trigger.latch(), TriggerLatch::Armed);
        assert_eq!(trigger.evaluate(&now, &ALARM, true, true), Some(Chime::Alarm));
    }

    #[test]
    fn test_disabled_day_is_silent() {
        let mut trigger = AlarmTrigger::new();
        let now = DateTime::at(7, 30, 0);
        assert_eq!(trigger.evaluate(&now, &ALARM, false, true), None);
    }

    #[test]
    fn test_hourly_chime_only_after_alarm_hour() {
        let mut trigger = AlarmTrigger::new();
        assert_eq!(trigger.evaluate(&DateTime::at(6, 0, 0), &ALARM, true, true), None);
        assert_eq!(
            trigger.evaluate(&DateTime::at(9, 0, 0), &ALARM, true, true),
            Some(Chime::Hourly)
        );
        assert_eq!(trigger.evaluate(&DateTime::at(9, 0, 30), &ALARM, true, true), None);
    }
}
