//! Month grid generation.
//!
//! A grid is the ordered sequence of cells a renderer lays out in rows of
//! seven: leading blanks to align the first of the month under its weekday
//! (Monday-first), then one cell per day. No trailing padding is added.

use chrono::{Datelike, NaiveDate};

use crate::date_key::DateKey;
use crate::month::Month;

/// One cell of the month grid: either leading padding or a concrete day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the first day of the month.
    Empty { slot: u32 },
    /// A numbered day; `date` is the identity its events are keyed by.
    Day { number: u32, date: DateKey },
}

impl DayCell {
    /// Cell id, unique within one grid render.
    pub fn id(&self) -> String {
        match self {
            DayCell::Empty { slot } => format!("empty-{slot}"),
            DayCell::Day { number, .. } => number.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DayCell::Empty { .. })
    }

    pub fn number(&self) -> Option<u32> {
        match self {
            DayCell::Empty { .. } => None,
            DayCell::Day { number, .. } => Some(*number),
        }
    }

    pub fn date(&self) -> Option<DateKey> {
        match self {
            DayCell::Empty { .. } => None,
            DayCell::Day { date, .. } => Some(*date),
        }
    }
}

/// Generate the ordered day cells for the month `reference` falls in.
///
/// The leading blank count is the weekday of the first of the month with
/// Monday as 0 and Sunday as 6. Pure function of the reference date.
pub fn month_grid(reference: NaiveDate) -> Vec<DayCell> {
    let month = Month::from_date(reference);
    let first = month.first_day();

    let offset = first.weekday().num_days_from_monday();
    let days = month.days();

    let mut cells = Vec::with_capacity((offset + days) as usize);

    for slot in 0..offset {
        cells.push(DayCell::Empty { slot });
    }

    for (i, date) in first.iter_days().take(days as usize).enumerate() {
        cells.push(DayCell::Day {
            number: i as u32 + 1,
            date: DateKey::new(date),
        });
    }

    cells
}
