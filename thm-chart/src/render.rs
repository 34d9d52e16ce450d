//! The parameterised heatmap chart.
//!
//! [`Chart::new`] aggregates the records and builds every scale and both
//! grid axes once. [`Chart::render`] is a pure function of the
//! [`ChartState`] and is re-run whenever that state changes.

use crate::color::{Rgb, SequentialScale};
use crate::config::{CellMetric, ChartConfig};
use crate::curve::monotone_x;
use crate::format::format_tick;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{
    Axis, AxisOrient, Cell, Controls, Legend, LineKey, LinePath, Rect, Scene, Series, Swatch,
    Tick, TooltipContent,
};
use crate::state::{ChartState, DisplayMode, Point};
use std::collections::BTreeMap;
use thm_data::aggregate::{self, MonthlyDetail, MonthlyExtremes, TemperatureDomain};
use thm_data::dates::MONTH_NAMES;
use thm_data::{DailyRecord, MonthKey};

pub const MAX_LINE_COLOR: Rgb = Rgb::from_hex(0x08519c);
pub const MIN_LINE_COLOR: Rgb = Rgb::from_hex(0x238b45);
pub const TOGGLE_LABEL: &str = "Toggle Max/Min";

const SWATCH_WIDTH: f64 = 20.0;
const SWATCH_HEIGHT: f64 = 10.0;
const LEGEND_OFFSET: Point = Point { x: 20.0, y: 10.0 };
const LINE_KEY_GAP: f64 = 30.0;
const LINE_KEY_SPACING: f64 = 20.0;
/// Cell-local x domain of the daily lines.
const DAY_DOMAIN: (f64, f64) = (1.0, 31.0);

type Pick = fn(&DailyRecord) -> f64;

const SERIES: [(Series, Rgb, &str, Pick); 2] = [
    (
        Series::DailyMax,
        MAX_LINE_COLOR,
        "Daily max temperature",
        pick_max,
    ),
    (
        Series::DailyMin,
        MIN_LINE_COLOR,
        "Daily min temperature",
        pick_min,
    ),
];

fn pick_max(r: &DailyRecord) -> f64 {
    r.max_temperature
}

fn pick_min(r: &DailyRecord) -> f64 {
    r.min_temperature
}

#[derive(Debug, Clone)]
pub struct Chart {
    config: ChartConfig,
    domain: TemperatureDomain,
    color: SequentialScale,
    x: BandScale<i32>,
    y: BandScale<u32>,
    legend_scale: LinearScale,
    x_axis: Axis,
    y_axis: Axis,
    extremes: Vec<MonthlyExtremes>,
    details: BTreeMap<MonthKey, MonthlyDetail>,
}

impl Chart {
    pub fn new(records: &[DailyRecord], config: ChartConfig) -> Self {
        let domain = TemperatureDomain::from_records(records).unwrap_or(TemperatureDomain {
            min: 0.0,
            max: 0.0,
        });
        let years = match config.year_window {
            Some(n) => aggregate::recent_years(records, n),
            None => aggregate::distinct_years(records),
        };
        let layout = config.layout;
        let x = BandScale::new(years.clone(), (0.0, layout.inner_width()), config.padding);
        let y = BandScale::new((0..12).collect(), (0.0, layout.inner_height()), config.padding);

        let extremes = match config.metric {
            CellMetric::Extremes => aggregate::monthly_extremes(records)
                .into_iter()
                .filter(|e| x.contains(&e.key.year))
                .collect(),
            CellMetric::MeanMax => Vec::new(),
        };
        let details = if config.metric == CellMetric::MeanMax || config.show_mini_lines {
            aggregate::monthly_details(records, &years)
        } else {
            BTreeMap::new()
        };

        let x_axis = Axis {
            orient: AxisOrient::Top,
            origin: Point::default(),
            range: x.range(),
            ticks: years
                .iter()
                .filter_map(|year| {
                    x.center(year).map(|offset| Tick {
                        offset,
                        label: year.to_string(),
                    })
                })
                .collect(),
        };
        let y_axis = Axis {
            orient: AxisOrient::Left,
            origin: Point::default(),
            range: y.range(),
            ticks: (0..12u32)
                .filter_map(|month| {
                    y.center(&month).map(|offset| Tick {
                        offset,
                        label: MONTH_NAMES[month as usize].to_string(),
                    })
                })
                .collect(),
        };

        log::debug!(
            "chart {}: {} years, domain [{}, {}]",
            config.container_id,
            years.len(),
            domain.min,
            domain.max
        );

        Chart {
            legend_scale: LinearScale::new((domain.min, domain.max), (config.legend_height, 0.0)),
            color: SequentialScale::new(domain),
            domain,
            x,
            y,
            x_axis,
            y_axis,
            extremes,
            details,
            config,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn domain(&self) -> TemperatureDomain {
        self.domain
    }

    pub fn color_scale(&self) -> &SequentialScale {
        &self.color
    }

    pub fn x_scale(&self) -> &BandScale<i32> {
        &self.x
    }

    pub fn y_scale(&self) -> &BandScale<u32> {
        &self.y
    }


    /// Draw the chart for the given state.
    pub fn render(&self, state: &ChartState) -> Scene {
        let cells = match self.config.metric {
            CellMetric::Extremes => self
                .extremes
                .iter()
                .filter_map(|e| {
                    let value = match state.mode {
                        DisplayMode::Max => e.max,
                        DisplayMode::Min => e.min,
                    };
                    self.cell(e.key, value, e.max, e.min)
                })
                .collect(),
            CellMetric::MeanMax => {
                let mut cells = Vec::new();
                for &year in self.x.domain() {
                    for month in 0..12 {
                        // months without records are left empty
                        if let Some(detail) = self.details.get(&MonthKey::new(year, month)) {
                            cells.extend(self.cell(
                                detail.key,
                                detail.mean_max,
                                detail.max,
                                detail.min,
                            ));
                        }
                    }
                }
                cells
            }
        };
        log::debug!("chart {}: rendered {} cells", self.config.container_id, cells.len());

        let layout = self.config.layout;
        Scene {
            container_id: self.config.container_id.clone(),
            width: layout.outer_width(),
            height: layout.outer_height(),
            margin: layout.margin,
            x_axis: self.x_axis.clone(),
            y_axis: self.y_axis.clone(),
            cells,
            legend: self.legend(),
            controls: self.config.show_toggle.then(|| Controls {
                status: state.mode.status_text(),
                button: TOGGLE_LABEL.to_string(),
            }),
        }
    }

    fn cell(&self, key: MonthKey, value: f64, max: f64, min: f64) -> Option<Cell> {
        let rect = Rect {
            x: self.x.position(&key.year)?,
            y: self.y.position(&key.month)?,
            width: self.x.bandwidth(),
            height: self.y.bandwidth(),
        };
        let lines = if self.config.show_mini_lines {
            self.lines(key)
        } else {
            Vec::new()
        };
        Some(Cell {
            key,
            rect,
            fill: self.color.color(value),
            value,
            lines,
            tooltip: TooltipContent {
                label: key.to_string(),
                max,
                min,
            },
        })
    }

    /// Daily max and min lines in cell-local coordinates.
    ///
    /// Non-finite readings are left out of the line.
    fn lines(&self, key: MonthKey) -> Vec<LinePath> {
        let Some(detail) = self.details.get(&key) else {
            return Vec::new();
        };
        let local_x = LinearScale::new(DAY_DOMAIN, (0.0, self.x.bandwidth()));
        let local_y = LinearScale::new((self.domain.min, self.domain.max), (self.y.bandwidth(), 0.0));

        let mut days: Vec<(u32, &DailyRecord)> = detail
            .records
            .iter()
            .filter_map(|r| r.day.map(|day| (day, r)))
            .collect();
        days.sort_by_key(|(day, _)| *day);

        SERIES
            .iter()
            .filter_map(|&(series, stroke, _, pick)| {
                let points: Vec<(f64, f64)> = days
                    .iter()
                    .filter(|(_, r)| pick(r).is_finite())
                    .map(|&(day, r)| (local_x.scale(day as f64), local_y.scale(pick(r))))
                    .collect();
                let d = monotone_x(&points);
                (!d.is_empty()).then_some(LinePath { series, stroke, d })
            })
            .collect()
    }

    fn legend(&self) -> Legend {
        let n = self.config.legend_swatches;
        let swatches = (0..n)
            .map(|i| {
                let value = self.domain.sample(i, n);
                Swatch {
                    value,
                    rect: Rect {
                        x: 0.0,
                        y: self.legend_scale.scale(value),
                        width: SWATCH_WIDTH,
                        height: SWATCH_HEIGHT,
                    },
                    fill: self.color.color(value),
                }
            })
            .collect();

        let count = self.config.legend_ticks;
        let step = self.legend_scale.tick_step(count);
        let axis = Axis {
            orient: AxisOrient::Right,
            origin: Point::new(SWATCH_WIDTH, 0.0),
            range: (0.0, self.config.legend_height),
            ticks: self
                .legend_scale
                .ticks(count)
                .into_iter()
                .map(|v| Tick {
                    offset: self.legend_scale.scale(v),
                    label: format_tick(v, step),
                })
                .collect(),
        };

        let line_keys = if self.config.show_mini_lines {
            SERIES
                .iter()
                .enumerate()
                .map(|(i, &(_, color, label, _))| LineKey {
                    label: label.to_string(),
                    color,
                    at: Point::new(
                        0.0,
                        self.config.legend_height + LINE_KEY_GAP + i as f64 * LINE_KEY_SPACING,
                    ),
                })
                .collect()
        } else {
            Vec::new()
        };

        Legend {
            origin: Point::new(
                self.config.layout.inner_width() + LEGEND_OFFSET.x,
                LEGEND_OFFSET.y,
            ),
            swatches,
            axis,
            line_keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thm_data::loader::parse_records;

    const TWO_DAYS: &str = r#"date,max_temperature,min_temperature
2020-01-05,10,2
2020-01-20,15,-1
"#;

    fn records(csv: &str) -> Vec<DailyRecord> {
        parse_records(csv).unwrap()
    }

    /// Twelve years, a few readings per month, March missing in 2015.
    fn decade_csv() -> String {
        let mut csv = String::from("date,max_temperature,min_temperature\n");
        for year in 2008..2020 {
            for month in 1..=12 {
                if year == 2015 && month == 3 {
                    continue;
                }
                for day in [3, 11, 19, 27] {
                    let max = 10.0 + month as f64 + day as f64 / 10.0;
                    csv.push_str(&format!(
                        "{}-{:02}-{:02},{},{}\n",
                        year,
                        month,
                        day,
                        max,
                        max - 8.0
                    ));
                }
            }
        }
        csv
    }

    #[test]
    fn extremes_cell_uses_display_mode() {
        let chart = Chart::new(&records(TWO_DAYS), ChartConfig::monthly_extremes("chart-1"));
        let color = chart.color_scale();
        let max_scene = chart.render(&ChartState::new(DisplayMode::Max));
        let cell = max_scene.cell(MonthKey::new(2020, 0)).unwrap();
        assert_eq!(cell.fill, color.color(15.0));
        assert_eq!(cell.tooltip.max, 15.0);
        assert_eq!(cell.tooltip.min, -1.0);

        let min_scene = chart.render(&ChartState::new(DisplayMode::Min));
        assert_eq!(min_scene.cell(MonthKey::new(2020, 0)).unwrap().fill, color.color(-1.0));
    }

    #[test]
    fn legend_samples_domain_evenly() {
        let chart = Chart::new(&records(TWO_DAYS), ChartConfig::monthly_extremes("chart-1"));
        assert_eq!(chart.domain(), TemperatureDomain { min: -1.0, max: 15.0 });
        let legend = chart.render(&ChartState::default()).legend;
        assert_eq!(legend.swatches.len(), 10);
        assert_eq!(legend.swatches[0].value, -1.0);
        assert_eq!(legend.swatches[9].value, 15.0);
        assert_eq!(legend.swatches[0].rect.y, 100.0);
        assert_eq!(legend.swatches[9].rect.y, 0.0);
        let labels: Vec<&str> = legend.axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "5", "10", "15"]);
        assert_eq!(legend.origin, Point::new(840.0, 10.0));
        assert!(legend.line_keys.is_empty());
    }

    #[test]
    fn toggle_twice_restores_fills() {
        let data = records(&decade_csv());
        let chart = Chart::new(&data, ChartConfig::monthly_extremes("chart-1"));
        let mut state = ChartState::default();
        let original = chart.render(&state);
        state.mode = state.mode.toggled();
        let toggled = chart.render(&state);
        assert_ne!(original.cells, toggled.cells);
        assert_eq!(original.x_axis, toggled.x_axis);
        assert_eq!(original.y_axis, toggled.y_axis);
        state.mode = state.mode.toggled();
        assert_eq!(chart.render(&state), original);
    }

    #[test]
    fn every_cell_is_on_the_grid() {
        let data = records(&decade_csv());
        for config in [
            ChartConfig::monthly_extremes("chart-1"),
            ChartConfig::monthly_lines("chart-2"),
        ] {
            let chart = Chart::new(&data, config);
            let scene = chart.render(&ChartState::default());
            for cell in &scene.cells {
                assert!(chart.x_scale().contains(&cell.key.year));
                assert!(cell.key.month < 12);
                assert_eq!(cell.rect.x, chart.x_scale().position(&cell.key.year).unwrap());
                assert_eq!(cell.rect.y, chart.y_scale().position(&cell.key.month).unwrap());
            }
        }
    }

    #[test]
    fn fills_stay_within_domain_colors() {
        let data = records(&decade_csv());
        let chart = Chart::new(&data, ChartConfig::monthly_lines("chart-2"));
        let domain = chart.domain();
        let scene = chart.render(&ChartState::default());
        for cell in &scene.cells {
            let clamped = cell.value.clamp(domain.min, domain.max);
            assert_eq!(cell.fill, chart.color_scale().color(clamped));
        }
    }

    #[test]
    fn extremes_chart_spans_all_years() {
        let data = records(&decade_csv());
        let chart = Chart::new(&data, ChartConfig::monthly_extremes("chart-1"));
        assert_eq!(chart.x_scale().domain().len(), 12);
        let scene = chart.render(&ChartState::default());
        assert_eq!(scene.cells.len(), 12 * 12 - 1);
        assert_eq!(scene.x_axis.ticks.len(), 12);
        assert_eq!(scene.y_axis.ticks[0].label, "January");
        assert_eq!(
            scene.controls.as_ref().map(|c| c.status.as_str()),
            Some("Currently showing: Max Temperature")
        );
    }

    #[test]
    fn lines_chart_uses_last_ten_years() {
        let data = records(&decade_csv());
        let chart = Chart::new(&data, ChartConfig::monthly_lines("chart-2"));
        assert_eq!(chart.x_scale().domain(), (2010..2020).collect::<Vec<_>>().as_slice());
        let scene = chart.render(&ChartState::default());
        assert!(scene.controls.is_none());
        assert_eq!(scene.legend.line_keys.len(), 2);
        // March 2015 has no records: no cell and so no lines there
        assert!(scene.cell(MonthKey::new(2015, 2)).is_none());
        assert_eq!(scene.cells.len(), 10 * 12 - 1);
        for cell in &scene.cells {
            assert_eq!(cell.lines.len(), 2);
            assert!(cell.lines.iter().all(|l| l.d.starts_with('M')));
        }
    }

    #[test]
    fn lines_chart_mean_max_background() {
        let data = records(&decade_csv());
        let chart = Chart::new(&data, ChartConfig::monthly_lines("chart-2"));
        let scene = chart.render(&ChartState::default());
        let cell = scene.cell(MonthKey::new(2019, 0)).unwrap();
        // January maxes: 11.3, 12.1, 12.9, 13.7
        assert!((cell.value - 12.5).abs() < 1e-9);
        assert_eq!(cell.fill, chart.color_scale().color(cell.value));
    }

    #[test]
    fn lines_chart_with_few_years_uses_all_ascending() {
        let csv = "date,max_temperature,min_temperature\n2021-05-01,20,10\n2019-05-01,22,11\n2020-05-01,21,9\n";
        let chart = Chart::new(&records(csv), ChartConfig::monthly_lines("chart-2"));
        assert_eq!(chart.x_scale().domain(), &[2019, 2020, 2021]);
        let scene = chart.render(&ChartState::default());
        assert_eq!(scene.cells.len(), 3);
        // a single reading per month draws as a bare point
        assert!(scene.cells[0].lines[0].d.starts_with('M'));
        assert!(!scene.cells[0].lines[0].d.contains('C'));
    }

    #[test]
    fn nan_month_renders_without_fill() {
        let csv = "date,max_temperature,min_temperature\n2020-01-01,oops,1\n2020-02-01,5,1\n";
        let chart = Chart::new(&records(csv), ChartConfig::monthly_extremes("chart-1"));
        let scene = chart.render(&ChartState::default());
        assert_eq!(scene.cell(MonthKey::new(2020, 0)).unwrap().fill, None);
        assert!(scene.cell(MonthKey::new(2020, 1)).unwrap().fill.is_some());
    }

    #[test]
    fn empty_dataset_renders_empty_grid() {
        let chart = Chart::new(&[], ChartConfig::monthly_extremes("chart-1"));
        let scene = chart.render(&ChartState::default());
        assert!(scene.cells.is_empty());
        assert!(scene.x_axis.ticks.is_empty());
        assert_eq!(scene.legend.swatches.len(), 10);
        assert_eq!(scene.width, 1100.0);
        assert_eq!(scene.height, 600.0);
    }
}
