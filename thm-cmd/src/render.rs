//! `render` subcommand: draw a heatmap into an SVG file.

use crate::source::load_records;
use crate::ChartKind;
use anyhow::Context;
use log::info;
use std::path::Path;
use thm_chart::{svg, Chart, ChartConfig, ChartSession, DisplayMode};
use thm_data::DailyRecord;

/// Resolve the chart config: a JSON file if given, otherwise the preset.
pub fn resolve_config(kind: ChartKind, config_path: Option<&str>) -> anyhow::Result<ChartConfig> {
    match config_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path))?;
            ChartConfig::from_json(&json).with_context(|| format!("invalid config {}", path))
        }
        None => Ok(kind.config()),
    }
}

/// Render `records` with `config` in `mode` and write the SVG to `output`.
pub fn render_to_file(
    records: &[DailyRecord],
    config: ChartConfig,
    mode: DisplayMode,
    output: &Path,
) -> anyhow::Result<usize> {
    let session = ChartSession::with_mode(Chart::new(records, config), mode);
    let scene = session.scene();
    std::fs::write(output, svg::to_svg(scene))
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(scene.cells.len())
}

pub async fn run_render(
    input: &str,
    output: &str,
    kind: ChartKind,
    mode: DisplayMode,
    config_path: Option<&str>,
) -> anyhow::Result<()> {
    let config = resolve_config(kind, config_path)?;
    let records = load_records(input).await?;
    info!(
        "Rendering {} chart from {} records",
        config.container_id,
        records.len()
    );
    let cells = render_to_file(&records, config, mode, Path::new(output))?;
    info!("Wrote {} cells to {}", cells, output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use thm_chart::CellMetric;
    use thm_data::loader::parse_records;

    const SAMPLE_CSV: &str = r#"date,max_temperature,min_temperature
2020-01-05,10,2
2020-01-20,15,-1
2020-02-03,12,0
"#;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("thm-cmd-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn resolve_config_presets() {
        let config = resolve_config(ChartKind::Lines, None).unwrap();
        assert_eq!(config.metric, CellMetric::MeanMax);
        assert_eq!(config.container_id, "chart-2");
    }

    #[test]
    fn resolve_config_from_file() {
        let dir = temp_dir("config");
        let path = dir.join("chart.json");
        std::fs::write(&path, r#"{"container_id":"custom","padding":0.15}"#).unwrap();
        let config = resolve_config(ChartKind::Lines, path.to_str()).unwrap();
        assert_eq!(config.container_id, "custom");
        assert_eq!(config.padding, 0.15);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn render_to_file_writes_svg() {
        let dir = temp_dir("render");
        let output = dir.join("chart.svg");
        let records = parse_records(SAMPLE_CSV).unwrap();
        let cells = render_to_file(
            &records,
            ChartConfig::monthly_extremes("chart-1"),
            DisplayMode::Min,
            &output,
        )
        .unwrap();
        assert_eq!(cells, 2);
        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("Currently showing: Min Temperature"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
