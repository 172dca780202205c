//! Upcoming-birthday computation.
//!
//! The reporting window is the Saturday-through-Friday span anchored
//! at the most recent Saturday on or before "today". Birthdays are
//! re-anchored onto the current year for comparison; weekend birthdays
//! roll forward into the Monday bucket.

use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// Weekday bucket names in output order.
const DAY_NAMES: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Birthdays of the current reporting window, bucketed Monday–Friday.
///
/// Names within a bucket keep the order the records were scanned in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    buckets: [Vec<String>; 5],
}

impl WeekSchedule {
    /// Whether no birthday fell inside the window.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Names bucketed under the given weekday name, or `None` for a
    /// name outside Monday–Friday.
    pub fn names_for(&self, day: &str) -> Option<&[String]> {
        DAY_NAMES
            .iter()
            .position(|d| *d == day)
            .map(|i| self.buckets[i].as_slice())
    }
}

// Rendering: one line per non-empty bucket, Monday first.
impl fmt::Display for WeekSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (day, names) in DAY_NAMES.iter().zip(&self.buckets) {
            if names.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}: {}", day, names.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

/// The most recent Saturday on or before `today`.
///
/// Distance 0 when today is itself a Saturday.
fn start_of_week(today: NaiveDate) -> NaiveDate {
    // num_days_from_monday: Mon=0 .. Sun=6, Saturday is 5
    let offset = (today.weekday().num_days_from_monday() + 7 - 5) % 7;
    today - Days::new(u64::from(offset))
}

/// Compute the birthday report for the window containing `today`.
///
/// Pure function of (today, records): birthdays re-anchored onto
/// today's year that land on the window's Saturday or Sunday are
/// bucketed under Monday; Monday–Friday dates are bucketed under their
/// weekday; everything else is omitted.
pub fn upcoming_birthdays<'a>(
    today: NaiveDate,
    records: impl IntoIterator<Item = &'a Record>,
) -> WeekSchedule {
    let start = start_of_week(today);
    let mut schedule = WeekSchedule::default();

    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let this_year = birthday.in_year(today.year());
        let offset = (this_year - start).num_days();
        let bucket = match offset {
            // Saturday and Sunday roll forward to Monday
            0 | 1 => 0,
            2..=6 => (offset - 2) as usize,
            _ => continue,
        };
        schedule.buckets[bucket].push(record.name().as_str().to_string());
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactName;

    fn record_with_birthday(name: &str, birthday: &str) -> Record {
        let mut rec = Record::new(ContactName::new(name).unwrap());
        rec.set_birthday(birthday).unwrap();
        rec
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_of_week_anchors_to_saturday() {
        // 2024-06-12 is a Wednesday; previous Saturday is 2024-06-08
        assert_eq!(start_of_week(date(2024, 6, 12)), date(2024, 6, 8));
        // A Saturday anchors to itself
        assert_eq!(start_of_week(date(2024, 6, 8)), date(2024, 6, 8));
        // A Sunday anchors one day back
        assert_eq!(start_of_week(date(2024, 6, 9)), date(2024, 6, 8));
        // A Friday anchors six days back
        assert_eq!(start_of_week(date(2024, 6, 14)), date(2024, 6, 8));
    }

    #[test]
    fn test_weekend_birthday_rolls_to_monday() {
        // Today Wednesday 2024-06-12, window Saturday is 2024-06-08
        let records = [
            record_with_birthday("Sat", "08.06.1990"),
            record_with_birthday("Sun", "09.06.1985"),
        ];
        let schedule = upcoming_birthdays(date(2024, 6, 12), &records);
        assert_eq!(
            schedule.names_for("Monday").unwrap(),
            &["Sat".to_string(), "Sun".to_string()]
        );
    }

    #[test]
    fn test_weekday_birthday_buckets_by_day() {
        // Window Saturday 2024-06-08 -> Tuesday is 2024-06-11
        let records = [record_with_birthday("John", "11.06.1990")];
        let schedule = upcoming_birthdays(date(2024, 6, 12), &records);
        assert_eq!(schedule.names_for("Tuesday").unwrap(), &["John".to_string()]);
        assert!(schedule.names_for("Monday").unwrap().is_empty());
    }

    #[test]
    fn test_birthday_outside_window_is_excluded() {
        // start + 8 days = 2024-06-16, past the Friday boundary
        let records = [
            record_with_birthday("Late", "16.06.1990"),
            record_with_birthday("Early", "07.06.1990"),
        ];
        let schedule = upcoming_birthdays(date(2024, 6, 12), &records);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_stored_year_is_ignored() {
        // Birthday year 1950, still matched against the 2024 window
        let records = [record_with_birthday("John", "13.06.1950")];
        let schedule = upcoming_birthdays(date(2024, 6, 12), &records);
        assert_eq!(
            schedule.names_for("Thursday").unwrap(),
            &["John".to_string()]
        );
    }

    #[test]
    fn test_records_without_birthday_are_skipped() {
        let records = [Record::new(ContactName::new("NoBday").unwrap())];
        let schedule = upcoming_birthdays(date(2024, 6, 12), &records);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_render_skips_empty_buckets_in_day_order() {
        let records = [
            record_with_birthday("Thu", "13.06.1990"),
            record_with_birthday("Sat", "08.06.1990"),
        ];
        let schedule = upcoming_birthdays(date(2024, 6, 12), &records);
        assert_eq!(schedule.to_string(), "Monday: Sat\nThursday: Thu");
    }

    #[test]
    fn test_names_within_bucket_keep_scan_order() {
        let records = [
            record_with_birthday("A", "11.06.1990"),
            record_with_birthday("B", "11.06.1970"),
        ];
        let schedule = upcoming_birthdays(date(2024, 6, 12), &records);
        assert_eq!(
            schedule.names_for("Tuesday").unwrap(),
            &["A".to_string(), "B".to_string()]
        );
    }
}
