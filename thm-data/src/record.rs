use crate::dates;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Grouping key for a calendar month: `(year, zero-based month)`.
///
/// Ordered by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonthKey {
    pub year: i32,
    /// 0 = January, 11 = December
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

/// Tooltip-style label, e.g. `2020-1` for January 2020.
impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month + 1)
    }
}

/// A single day of observations with its derived calendar fields.
///
/// A row whose `date` does not match `YYYY-MM-DD` is kept with `date`,
/// `year`, `month` and `day` all `None`; it still contributes its
/// temperatures to the global domain but belongs to no month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: Option<NaiveDate>,
    pub year: Option<i32>,
    /// Zero-based month (0–11)
    pub month: Option<u32>,
    /// Day of month (1–31)
    pub day: Option<u32>,
    pub max_temperature: f64,
    pub min_temperature: f64,
}

impl DailyRecord {
    /// Build a record from the raw CSV fields.
    pub fn parse(date: &str, max_temperature: &str, min_temperature: &str) -> Self {
        let date = dates::parse_date(date).ok();
        Self::from_parts(
            date,
            coerce_number(max_temperature),
            coerce_number(min_temperature),
        )
    }

    fn from_parts(date: Option<NaiveDate>, max_temperature: f64, min_temperature: f64) -> Self {
        DailyRecord {
            date,
            year: date.map(|d| d.year()),
            month: date.map(|d| d.month0()),
            day: date.map(|d| d.day()),
            max_temperature,
            min_temperature,
        }
    }

    /// The month this record belongs to, if its date parsed.
    pub fn key(&self) -> Option<MonthKey> {
        match (self.year, self.month) {
            (Some(year), Some(month)) => Some(MonthKey { year, month }),
            _ => None,
        }
    }

    pub fn temperatures(&self) -> [f64; 2] {
        [self.max_temperature, self.min_temperature]
    }
}

/// Numeric coercion for temperature fields.
///
/// Blank fields coerce to `0.0`; anything else that is not a decimal number
/// becomes `NaN` so it poisons the aggregates it touches.
pub fn coerce_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_derives_calendar_fields() {
        let record = DailyRecord::parse("2020-03-09", "12.5", "-3");
        assert_eq!(record.year, Some(2020));
        assert_eq!(record.month, Some(2));
        assert_eq!(record.day, Some(9));
        assert_eq!(record.max_temperature, 12.5);
        assert_eq!(record.min_temperature, -3.0);
        assert_eq!(record.key(), Some(MonthKey::new(2020, 2)));
    }

    #[test]
    fn parse_bad_date_keeps_temperatures() {
        let record = DailyRecord::parse("09/03/2020", "12", "4");
        assert_eq!(record.date, None);
        assert_eq!(record.year, None);
        assert_eq!(record.month, None);
        assert_eq!(record.day, None);
        assert_eq!(record.key(), None);
        assert_eq!(record.temperatures(), [12.0, 4.0]);
    }

    #[test]
    fn parse_short_date_fields_are_undated() {
        for date in ["20-01-05", "2020-1-5", "2020-01-5"] {
            let record = DailyRecord::parse(date, "1", "0");
            assert_eq!(record.key(), None, "{}", date);
            assert_eq!(record.year, None, "{}", date);
        }
    }

    #[test]
    fn coerce_number_follows_numeric_coercion() {
        assert_eq!(coerce_number(" 7.25 "), 7.25);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert!(coerce_number("n/a").is_nan());
        assert!(coerce_number("12C").is_nan());
    }

    #[test]
    fn month_key_display_is_one_based() {
        assert_eq!(MonthKey::new(2020, 0).to_string(), "2020-1");
        assert_eq!(MonthKey::new(1999, 11).to_string(), "1999-12");
    }

    #[test]
    fn month_key_orders_by_year_then_month() {
        let mut keys = vec![
            MonthKey::new(2021, 0),
            MonthKey::new(2020, 11),
            MonthKey::new(2020, 1),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                MonthKey::new(2020, 1),
                MonthKey::new(2020, 11),
                MonthKey::new(2021, 0),
            ]
        );
    }
}
