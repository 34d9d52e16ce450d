//! Grouping of daily records into per-month aggregates.
//!
//! Records are grouped by year first and by month within the year. Groups
//! are enumerated in first-seen order; consumers position them through
//! scales, so the order carries no meaning beyond determinism.
//!
//! A `NaN` temperature poisons every aggregate of the group it belongs to.
//! The global [`TemperatureDomain`] skips non-finite values instead.

use crate::record::{DailyRecord, MonthKey};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Per-month extremes used by the max/min heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyExtremes {
    pub key: MonthKey,
    /// Highest `max_temperature` of the month.
    pub max: f64,
    /// Lowest `min_temperature` of the month.
    pub min: f64,
}

/// Every record of one month, kept for the daily mini lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyDetail {
    pub key: MonthKey,
    pub records: Vec<DailyRecord>,
    /// Mean of `max_temperature` over the month.
    pub mean_max: f64,
    pub max: f64,
    pub min: f64,
}

/// Pooled `[min, max]` of every max and min temperature in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureDomain {
    pub min: f64,
    pub max: f64,
}

impl TemperatureDomain {
    /// Compute the domain over all records, dated or not.
    ///
    /// Returns `None` when no finite temperature exists.
    pub fn from_records(records: &[DailyRecord]) -> Option<Self> {
        records
            .iter()
            .flat_map(|r| r.temperatures())
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Self>, v| match acc {
                None => Some(TemperatureDomain { min: v, max: v }),
                Some(d) => Some(TemperatureDomain {
                    min: d.min.min(v),
                    max: d.max.max(v),
                }),
            })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// The `i`-th of `n` values sampled evenly from `min` to `max`, inclusive.
    pub fn sample(&self, i: usize, n: usize) -> f64 {
        if n <= 1 {
            return self.min;
        }
        self.min + self.span() * (i as f64 / (n - 1) as f64)
    }
}

fn poisoned_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn poisoned_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Distinct years of all dated records, in first-seen order.
pub fn distinct_years(records: &[DailyRecord]) -> Vec<i32> {
    let mut years: Vec<i32> = Vec::new();
    for year in records.iter().filter_map(|r| r.year) {
        if !years.contains(&year) {
            years.push(year);
        }
    }
    years
}

/// The `count` most recent distinct years, ascending.
///
/// When fewer years are present, all of them are returned.
pub fn recent_years(records: &[DailyRecord], count: usize) -> Vec<i32> {
    let mut years = distinct_years(records);
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.truncate(count);
    years.reverse();
    years
}

/// Group dated records by year, then by month within the year.
///
/// Both levels keep first-seen order.
fn group_by_month(records: &[DailyRecord]) -> Vec<(MonthKey, Vec<&DailyRecord>)> {
    let mut year_order: Vec<i32> = Vec::new();
    let mut by_year: HashMap<i32, Vec<(u32, Vec<&DailyRecord>)>> = HashMap::new();
    for record in records {
        let Some(key) = record.key() else {
            continue;
        };
        let months = by_year.entry(key.year).or_insert_with(|| {
            year_order.push(key.year);
            Vec::new()
        });
        match months.iter_mut().find(|(m, _)| *m == key.month) {
            Some((_, members)) => members.push(record),
            None => months.push((key.month, vec![record])),
        }
    }

    let mut groups = Vec::new();
    for year in year_order {
        if let Some(months) = by_year.remove(&year) {
            for (month, members) in months {
                groups.push((MonthKey::new(year, month), members));
            }
        }
    }
    groups
}

/// Per-month `max` of max temperatures and `min` of min temperatures.
pub fn monthly_extremes(records: &[DailyRecord]) -> Vec<MonthlyExtremes> {
    group_by_month(records)
        .into_iter()
        .map(|(key, members)| MonthlyExtremes {
            key,
            max: members
                .iter()
                .map(|r| r.max_temperature)
                .fold(f64::NEG_INFINITY, poisoned_max),
            min: members
                .iter()
                .map(|r| r.min_temperature)
                .fold(f64::INFINITY, poisoned_min),
        })
        .collect()
}

/// Per-month member lists restricted to `years`, keyed for lookup.
///
/// Months without records have no entry.
pub fn monthly_details(records: &[DailyRecord], years: &[i32]) -> BTreeMap<MonthKey, MonthlyDetail> {
    group_by_month(records)
        .into_iter()
        .filter(|(key, _)| years.contains(&key.year))
        .map(|(key, members)| {
            let count = members.len() as f64;
            let sum_max: f64 = members.iter().map(|r| r.max_temperature).sum();
            let detail = MonthlyDetail {
                key,
                mean_max: sum_max / count,
                max: members
                    .iter()
                    .map(|r| r.max_temperature)
                    .fold(f64::NEG_INFINITY, poisoned_max),
                min: members
                    .iter()
                    .map(|r| r.min_temperature)
                    .fold(f64::INFINITY, poisoned_min),
                records: members.into_iter().cloned().collect(),
            };
            (key, detail)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_records;

    const TWO_DAYS: &str = r#"date,max_temperature,min_temperature
2020-01-05,10,2
2020-01-20,15,-1
"#;

    fn records(csv: &str) -> Vec<DailyRecord> {
        parse_records(csv).unwrap()
    }

    #[test]
    fn monthly_extremes_two_day_scenario() {
        let extremes = monthly_extremes(&records(TWO_DAYS));
        assert_eq!(extremes.len(), 1);
        assert_eq!(extremes[0].key, MonthKey::new(2020, 0));
        assert_eq!(extremes[0].max, 15.0);
        assert_eq!(extremes[0].min, -1.0);
    }

    #[test]
    fn domain_pools_max_and_min() {
        let domain = TemperatureDomain::from_records(&records(TWO_DAYS)).unwrap();
        assert_eq!(domain, TemperatureDomain { min: -1.0, max: 15.0 });
        assert_eq!(domain.sample(0, 10), -1.0);
        assert_eq!(domain.sample(9, 10), 15.0);
    }

    #[test]
    fn domain_includes_undated_rows_and_skips_nan() {
        let csv = "date,max_temperature,min_temperature\nbad,40,1\n2020-01-01,abc,5\n";
        let domain = TemperatureDomain::from_records(&records(csv)).unwrap();
        assert_eq!(domain, TemperatureDomain { min: 1.0, max: 40.0 });
    }

    #[test]
    fn domain_of_empty_dataset() {
        assert_eq!(TemperatureDomain::from_records(&[]), None);
    }

    #[test]
    fn monthly_extremes_first_seen_order() {
        let csv = r#"date,max_temperature,min_temperature
2019-03-01,5,1
2018-12-01,3,0
2019-01-01,4,-2
2018-12-02,6,-4
"#;
        let keys: Vec<MonthKey> = monthly_extremes(&records(csv)).iter().map(|e| e.key).collect();
        assert_eq!(
            keys,
            vec![
                MonthKey::new(2019, 2),
                MonthKey::new(2019, 0),
                MonthKey::new(2018, 11),
            ]
        );
    }

    #[test]
    fn monthly_extremes_excludes_undated() {
        let csv = "date,max_temperature,min_temperature\n??,99,-99\n2020-05-01,20,10\n";
        let extremes = monthly_extremes(&records(csv));
        assert_eq!(extremes.len(), 1);
        assert_eq!(extremes[0].max, 20.0);
        assert_eq!(extremes[0].min, 10.0);
    }

    #[test]
    fn two_digit_year_adds_no_year() {
        let csv = "date,max_temperature,min_temperature\n20-01-05,1,0\n2020-01-05,2,1\n";
        let data = records(csv);
        assert_eq!(distinct_years(&data), vec![2020]);
        assert_eq!(monthly_extremes(&data).len(), 1);
    }

    #[test]
    fn nan_poisons_group() {
        let csv = "date,max_temperature,min_temperature\n2020-05-01,20,x\n2020-05-02,21,9\n2020-06-01,25,12\n";
        let extremes = monthly_extremes(&records(csv));
        assert_eq!(extremes[0].max, 21.0);
        assert!(extremes[0].min.is_nan());
        assert_eq!(extremes[1].min, 12.0);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let data = records(TWO_DAYS);
        assert_eq!(monthly_extremes(&data), monthly_extremes(&data));
        let years = recent_years(&data, 10);
        assert_eq!(monthly_details(&data, &years), monthly_details(&data, &years));
    }

    #[test]
    fn recent_years_window() {
        let mut csv = String::from("date,max_temperature,min_temperature\n");
        for year in (2000..2015).rev() {
            csv.push_str(&format!("{}-06-01,20,10\n", year));
        }
        let data = records(&csv);
        assert_eq!(recent_years(&data, 10), (2005..2015).collect::<Vec<_>>());
        assert_eq!(distinct_years(&data).first(), Some(&2014));
    }

    #[test]
    fn recent_years_fewer_than_window() {
        let csv = "date,max_temperature,min_temperature\n2012-01-01,1,0\n2010-01-01,1,0\n2011-01-01,1,0\n";
        assert_eq!(recent_years(&records(csv), 10), vec![2010, 2011, 2012]);
    }

    #[test]
    fn monthly_details_mean_and_filter() {
        let csv = r#"date,max_temperature,min_temperature
2019-01-01,4,0
2020-01-05,10,2
2020-01-20,15,-1
2020-02-01,8,1
"#;
        let details = monthly_details(&records(csv), &[2020]);
        assert_eq!(details.len(), 2);
        assert!(!details.contains_key(&MonthKey::new(2019, 0)));
        let january = &details[&MonthKey::new(2020, 0)];
        assert_eq!(january.records.len(), 2);
        assert_eq!(january.mean_max, 12.5);
        assert_eq!(january.max, 15.0);
        assert_eq!(january.min, -1.0);
        assert!(!details.contains_key(&MonthKey::new(2020, 2)));
    }
}
