//! Scrolling date and temperature tickers

use dotclock_core::clock::DateTime;
use dotclock_core::format::NumberFormatter;
use dotclock_core::labels::{Label, LabelTable};
use dotclock_core::traits::{MatrixDisplay, TemperatureSource};

/// Ticker content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ticker {
    /// "Monday 07 January 2024y"
    Date,
    /// Every sensor reading with its label
    Temperature,
}

impl Ticker {
    /// Load the ticker text into the back buffer at the cursor
    pub fn load<M, T>(
        self,
        display: &mut M,
        formatter: &mut NumberFormatter,
        labels: &LabelTable,
        now: &DateTime,
        sensors: &mut T,
    ) where
        M: MatrixDisplay,
        T: TemperatureSource,
    {
        match self {
            Ticker::Date => load_date(display, formatter, labels, now),
            Ticker::Temperature => load_temperature(display, formatter, labels, sensors),
        }
    }
}

fn load_date<M: MatrixDisplay>(
    display: &mut M,
    formatter: &mut NumberFormatter,
    labels: &LabelTable,
    now: &DateTime,
) {
    display.load_text(labels.weekday(now.weekday));
    display.load_text(formatter.format(i16::from(now.date), 2, 0, b'0'));
    display.load_text(labels.month(now.month));
    display.load_text(formatter.format(now.full_year(), 4, 0, b'0'));
    display.load_text(labels.get(Label::YearSuffix));
}

fn load_temperature<M: MatrixDisplay, T: TemperatureSource>(
    display: &mut M,
    formatter: &mut NumberFormatter,
    labels: &LabelTable,
    sensors: &mut T,
) {
    for i in 0..sensors.device_count() {
        if i > 0 {
            display.load_text(b", ");
        }
        display.load_text(formatter.format(sensors.temperature(i), 4, 1, b' '));
        display.load_text(labels.get(Label::Degree));
        display.load_text(labels.sensor(i));
    }
}
