//! Fetching the daily temperature CSV from a path or URL.

use anyhow::Context;
use flate2::read::GzDecoder;
use log::info;
use std::path::Path;
use thm_data::{loader, DailyRecord};

pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Load records from a local file or an http(s) URL.
///
/// Inputs ending in `.gz` are gunzipped in either case.
pub async fn load_records(input: &str) -> anyhow::Result<Vec<DailyRecord>> {
    if !is_url(input) {
        return loader::load_path(Path::new(input));
    }

    info!("Fetching {}", input);
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;
    let response = client
        .get(input)
        .send()
        .await
        .with_context(|| format!("request to {} failed", input))?
        .error_for_status()?;
    let body = response.bytes().await?;
    let records = if input.ends_with(".gz") {
        loader::read_records(GzDecoder::new(body.as_ref()))
    } else {
        loader::read_records(body.as_ref())
    };
    records.with_context(|| format!("failed to load {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_urls() {
        assert!(is_url("https://example.org/temperature_daily.csv"));
        assert!(is_url("http://localhost:8000/t.csv"));
        assert!(!is_url("fixtures/temperature_daily.csv"));
        assert!(!is_url("/tmp/https.csv"));
    }

    #[tokio::test]
    async fn load_records_from_path() {
        let dir = std::env::temp_dir().join(format!("thm-cmd-source-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("daily.csv");
        std::fs::write(&path, "date,max_temperature,min_temperature\n2020-01-05,10,2\n").unwrap();

        let records = load_records(path.to_str().unwrap()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, Some(2020));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
