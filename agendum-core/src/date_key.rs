//! Normalized date-only keys for addressing a day's events.
//!
//! Every place that derives a storage key from a date goes through `DateKey`,
//! so the normalization rule (local calendar day, no time-of-day component)
//! is applied identically everywhere.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AgendumError;

/// A single local calendar day, used as the key for that day's event list.
///
/// Displays and parses as `YYYY-MM-DD`, and serializes as that string so it
/// can be used directly as a JSON map key. Ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(DateKey)
    }

    /// Today's local calendar day.
    pub fn today() -> Self {
        DateKey(Local::now().date_naive())
    }

    /// The local calendar day a timestamp falls on.
    pub fn from_local(datetime: DateTime<Local>) -> Self {
        DateKey(datetime.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = AgendumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(DateKey)
            .map_err(|_| {
                AgendumError::Validation(format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
            })
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
