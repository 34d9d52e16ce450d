//! Calendar helpers shared by the loader and the chart axes.

use chrono::NaiveDate;

/// Date format of the `date` column: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Month labels indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a date string in "YYYY-MM-DD" format.
///
/// Exactly four year digits and two month and day digits are required.
/// chrono alone would also take `20-01-05` or `2020-1-5`.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    let s = s.trim();
    anyhow::ensure!(has_date_shape(s), "`{}` is not a YYYY-MM-DD date", s);
    Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
}

fn has_date_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

/// Label for a zero-based month, `None` outside 0–11.
pub fn month_name(month0: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month0 as usize).copied()
}
