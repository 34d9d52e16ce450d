//! `summary` subcommand: print the monthly aggregates.

use crate::source::load_records;
use crate::{ChartKind, OutputFormat};
use log::info;
use serde::Serialize;
use std::io::Write;
use thm_data::aggregate::{self, TemperatureDomain};
use thm_data::dates::month_name;
use thm_data::DailyRecord;

/// One output row per `(year, month)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub year: i32,
    /// One-based month
    pub month: u32,
    pub month_name: String,
    pub days: usize,
    pub max: f64,
    pub min: f64,
    /// Only computed for the lines chart
    pub mean_max: Option<f64>,
}

#[derive(Debug, Serialize)]
struct SummaryDocument<'a> {
    domain: Option<TemperatureDomain>,
    months: &'a [SummaryRow],
}

/// Aggregate rows in the order the chart would draw them.
pub fn summary_rows(records: &[DailyRecord], kind: ChartKind) -> Vec<SummaryRow> {
    match kind {
        ChartKind::Extremes => {
            let mut days = std::collections::HashMap::new();
            for key in records.iter().filter_map(|r| r.key()) {
                *days.entry(key).or_insert(0usize) += 1;
            }
            aggregate::monthly_extremes(records)
                .into_iter()
                .map(|e| SummaryRow {
                    year: e.key.year,
                    month: e.key.month + 1,
                    month_name: month_name(e.key.month).unwrap_or_default().to_string(),
                    days: days.get(&e.key).copied().unwrap_or(0),
                    max: e.max,
                    min: e.min,
                    mean_max: None,
                })
                .collect()
        }
        ChartKind::Lines => {
            let years = aggregate::recent_years(records, 10);
            aggregate::monthly_details(records, &years)
                .into_values()
                .map(|d| SummaryRow {
                    year: d.key.year,
                    month: d.key.month + 1,
                    month_name: month_name(d.key.month).unwrap_or_default().to_string(),
                    days: d.records.len(),
                    max: d.max,
                    min: d.min,
                    mean_max: Some(d.mean_max),
                })
                .collect()
        }
    }
}

pub fn write_summary<W: Write>(
    out: W,
    rows: &[SummaryRow],
    domain: Option<TemperatureDomain>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => {
            let doc = SummaryDocument {
                domain,
                months: rows,
            };
            serde_json::to_writer_pretty(out, &doc)?;
        }
    }
    Ok(())
}

pub async fn run_summary(input: &str, kind: ChartKind, format: OutputFormat) -> anyhow::Result<()> {
    let records = load_records(input).await?;
    let domain = TemperatureDomain::from_records(&records);
    if let Some(d) = domain {
        info!("Temperature domain: [{}, {}]", d.min, d.max);
    }
    let rows = summary_rows(&records, kind);
    info!("Summarised {} months", rows.len());
    let stdout = std::io::stdout();
    write_summary(stdout.lock(), &rows, domain, format)?;
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
