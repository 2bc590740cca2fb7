//! Gregorian calendar date.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A date in the (proleptic) Gregorian calendar, without timezone.
///
/// Ordering follows chronological order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Creates a `CalendarDate`, validating month and day.
    ///
    /// Returns `None` for dates that do not exist, e.g. February 30.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::CalendarDate;
    ///
    /// assert!(CalendarDate::new(2020, 2, 29).is_some());
    /// assert!(CalendarDate::new(2021, 2, 29).is_none());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Creates a `CalendarDate` from a Julian day number (JDN).
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::CalendarDate;
    ///
    /// let date = CalendarDate::from_jdn(2451545);
    /// assert_eq!(CalendarDate::new(2000, 1, 1), Some(date));
    /// ```
    pub fn from_jdn(jdn: u32) -> Self {
        let jdn = jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }

    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        let (y, m, d) = (self.year as i64, self.month as i64, self.day as i64);
        ((1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075) as u32
    }

    /// Returns the following day.
    pub fn succ(&self) -> Self {
        Self::from_jdn(self.jdn() + 1)
    }

    /// Returns the day of week, numbered `0..=6` for Sunday through Saturday
    /// (the numbering used by the reference tables).
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::CalendarDate;
    ///
    /// let date = CalendarDate::new(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        (self.jdn() + 1) % 7
    }

    /// Formats the date in ISO 8601 format.
    pub fn iso_gregorian(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => 28 + YearType::from_gregorian(year).is_leap() as u32,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
