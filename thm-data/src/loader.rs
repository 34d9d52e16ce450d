//! CSV loading of daily temperature records.
//!
//! # CSV Format
//!
//! Headers are required and must include `date`, `max_temperature` and
//! `min_temperature`, in any order. Other columns are ignored.
//!
//! ```text
//! date,max_temperature,min_temperature
//! 2020-01-05,10,2
//! 2020-01-20,15,-1
//! ```
//!
//! Rows are never rejected for bad values: a malformed date leaves the
//! record undated and a malformed temperature becomes `NaN`.

use crate::record::DailyRecord;
use anyhow::Context;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub const DATE_COLUMN: &str = "date";
pub const MAX_COLUMN: &str = "max_temperature";
pub const MIN_COLUMN: &str = "min_temperature";

/// Parse daily records from a CSV string.
pub fn parse_records(csv_data: &str) -> anyhow::Result<Vec<DailyRecord>> {
    read_records(csv_data.as_bytes())
}

/// Parse daily records from any reader yielding CSV bytes.
///
/// Records keep their order of appearance. Lines the CSV reader cannot
/// frame at all (e.g. invalid UTF-8) are skipped and counted.
pub fn read_records<R: Read>(reader: R) -> anyhow::Result<Vec<DailyRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers().context("failed to read CSV header row")?.clone();
    let column = |name: &str| -> anyhow::Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV is missing required column `{}`", name))
    };
    let date_idx = column(DATE_COLUMN)?;
    let max_idx = column(MAX_COLUMN)?;
    let min_idx = column(MIN_COLUMN)?;

    let mut records = Vec::new();
    let mut undated = 0u32;
    let mut skipped = 0u32;
    for result in rdr.records() {
        let r = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("loader: skipping unreadable row: {}", e);
                skipped += 1;
                continue;
            }
        };
        // A missing field behaves like an unparseable one
        let date = r.get(date_idx).unwrap_or("");
        let record = DailyRecord::parse(
            date,
            r.get(max_idx).unwrap_or("NaN"),
            r.get(min_idx).unwrap_or("NaN"),
        );
        if record.date.is_none() {
            undated += 1;
        }
        records.push(record);
    }
    log::info!(
        "loader: Loaded {} daily records ({} undated), skipped {} unreadable rows",
        records.len(),
        undated,
        skipped
    );
    Ok(records)
}

/// Load daily records from a file; `.gz` files are decompressed on the fly.
pub fn load_path(path: &Path) -> anyhow::Result<Vec<DailyRecord>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let is_gzip = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);
    if is_gzip {
        read_records(GzDecoder::new(reader))
            .with_context(|| format!("failed to load {}", path.display()))
    } else {
        read_records(reader).with_context(|| format!("failed to load {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const SAMPLE_CSV: &str = r#"date,max_temperature,min_temperature
2020-01-05,10,2
2020-01-20,15,-1
2020-02-01,8,0
"#;

    #[test]
    fn parse_records_preserves_order() {
        let records = parse_records(SAMPLE_CSV).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].day, Some(5));
        assert_eq!(records[1].day, Some(20));
        assert_eq!(records[2].month, Some(1));
    }

    #[test]
    fn parse_records_ignores_extra_columns_and_order() {
        let csv = "station,min_temperature,date,max_temperature\nX,3,2021-07-04,31\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, Some(2021));
        assert_eq!(records[0].month, Some(6));
        assert_eq!(records[0].max_temperature, 31.0);
        assert_eq!(records[0].min_temperature, 3.0);
    }

    #[test]
    fn parse_records_degrades_bad_rows() {
        let csv = "date,max_temperature,min_temperature\nnot-a-date,10,2\n2020-01-01,abc,1\n2020-01-02,9\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].key(), None);
        assert_eq!(records[0].max_temperature, 10.0);
        assert!(records[1].max_temperature.is_nan());
        assert_eq!(records[1].min_temperature, 1.0);
        // short row: missing min column
        assert!(records[2].min_temperature.is_nan());
    }

    #[test]
    fn parse_records_requires_columns() {
        let err = parse_records("date,max_temperature\n2020-01-01,3\n").unwrap_err();
        assert!(err.to_string().contains("min_temperature"));
    }

    #[test]
    fn parse_records_empty_body() {
        let records = parse_records("date,max_temperature,min_temperature\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn load_path_reads_gzip() {
        let dir = std::env::temp_dir().join(format!("thm-data-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("temperature_daily.csv.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let records = load_path(&path).unwrap();
        assert_eq!(records.len(), 3);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_path_missing_file_is_error() {
        let err = load_path(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(err.to_string().contains("failed to open"));
    }
}
