//! Command implementations for the THM CLI.
//!
//! Provides subcommands for rendering the heatmaps to SVG and for printing
//! the monthly aggregates behind them. Input may be a local CSV (optionally
//! gzip-compressed) or an http(s) URL.

use clap::{Subcommand, ValueEnum};
use thm_chart::{ChartConfig, DisplayMode};

pub mod render;
pub mod source;
pub mod summary;

/// Which of the two heatmaps to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Monthly max/min over every year
    Extremes,
    /// Monthly mean max with daily lines, last ten years
    Lines,
}

impl ChartKind {
    pub fn config(self) -> ChartConfig {
        match self {
            ChartKind::Extremes => ChartConfig::monthly_extremes("chart-1"),
            ChartKind::Lines => ChartConfig::monthly_lines("chart-2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Max,
    Min,
}

impl From<ModeArg> for DisplayMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Max => DisplayMode::Max,
            ModeArg::Min => DisplayMode::Min,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a heatmap to an SVG file
    Render {
        /// Path or http(s) URL of the daily temperature CSV
        #[arg(short = 'i', long)]
        input: String,

        /// Output path for the SVG
        #[arg(short = 'o', long)]
        output: String,

        #[arg(long, value_enum, default_value_t = ChartKind::Extremes)]
        chart: ChartKind,

        /// Which monthly extreme colors the cells (extremes chart only)
        #[arg(long, value_enum, default_value_t = ModeArg::Max)]
        mode: ModeArg,

        /// JSON chart config; replaces the preset selected by --chart
        #[arg(long)]
        config: Option<String>,
    },

    /// Print the monthly aggregates behind a heatmap
    Summary {
        /// Path or http(s) URL of the daily temperature CSV
        #[arg(short = 'i', long)]
        input: String,

        #[arg(long, value_enum, default_value_t = ChartKind::Extremes)]
        chart: ChartKind,

        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            input,
            output,
            chart,
            mode,
            config,
        } => render::run_render(&input, &output, chart, mode.into(), config.as_deref()).await,
        Command::Summary {
            input,
            chart,
            format,
        } => summary::run_summary(&input, chart, format).await,
    }
}
