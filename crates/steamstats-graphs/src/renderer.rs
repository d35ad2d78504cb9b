//! PNG renderers for the line and grouped bar charts.

use crate::traits::GraphRenderer;
use crate::utils::GraphUtils;
use async_trait::async_trait;
use plotters::prelude::*;
use serde::Serialize;
use std::path::Path;
use steamstats_common::{format_player_count, AggregatedRow, Result, SeriesPoint};
use steamstats_config::OutputConfig;
use tracing::info;

/// Horizontal span of one bar chart category, in chart coordinates.
const CATEGORY_WIDTH: i32 = 100;

/// Share of a category covered by its bars, in percent.
const GROUP_FILL_PERCENT: i32 = 80;

/// Image size and colours shared by both renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Background colour, `#RRGGBB`.
    pub background_color: String,
    /// Line chart stroke colour, `#RRGGBB`.
    pub line_color: String,
    /// Font family for all text.
    pub font_family: String,
    /// Caption font size.
    pub title_font_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 640,
            background_color: "#ffffff".to_string(),
            line_color: "#3db9cc".to_string(),
            font_family: "sans-serif".to_string(),
            title_font_size: 24,
        }
    }
}

impl From<&OutputConfig> for ChartStyle {
    fn from(config: &OutputConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            ..Self::default()
        }
    }
}

/// Everything the line chart draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartData {
    /// Caption.
    pub title: String,
    /// X axis description.
    pub x_desc: String,
    /// Y axis description.
    pub y_desc: String,
    /// Points in plotting order.
    pub points: Vec<SeriesPoint>,
    /// Tick text per point.
    pub ticks: Vec<String>,
}

/// One bar series: the alias it reads from each row and its fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarSeries {
    /// Key into [`AggregatedRow::series_values`].
    pub alias: String,
    /// Fill colour, `#RRGGBB`.
    pub color: String,
}

/// Everything the grouped bar chart draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartData {
    /// Caption.
    pub title: String,
    /// X axis description.
    pub x_desc: String,
    /// Y axis description.
    pub y_desc: String,
    /// One category per row.
    pub rows: Vec<AggregatedRow>,
    /// Tick text per row.
    pub ticks: Vec<String>,
    /// Bars drawn within each category, in legend order.
    pub series: Vec<BarSeries>,
}

/// Parse a colour string (hex format) to `RGBColor`, black when malformed.
pub fn parse_color(color: &str) -> RGBColor {
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    BLACK
}

fn coord(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

fn tick_at(ticks: &[String], index: i32) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|index| ticks.get(index))
        .cloned()
        .unwrap_or_default()
}

fn draw_line_chart(style: &ChartStyle, data: &LineChartData, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&parse_color(&style.background_color))?;

    let x_max = coord(data.points.len().saturating_sub(1)).max(1);
    let y_max =
        GraphUtils::axis_ceiling(GraphUtils::max_value(data.points.iter().map(|p| p.value)));

    let font = style.font_family.as_str();
    let mut chart = ChartBuilder::on(&root)
        .caption(&data.title, (font, style.title_font_size))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0..x_max, 0f64..y_max)?;

    let x_formatter = |x: &i32| tick_at(&data.ticks, *x);
    let y_formatter = |y: &f64| format_player_count(*y);
    chart
        .configure_mesh()
        .x_labels(data.points.len().max(2))
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .x_desc(data.x_desc.as_str())
        .y_desc(data.y_desc.as_str())
        .label_style((font, 14))
        .draw()?;

    let color = parse_color(&style.line_color);
    let points: Vec<(i32, f64)> = data
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| (coord(index), point.value))
        .collect();
    chart.draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?;
    chart.draw_series(
        points
            .into_iter()
            .map(|point| Circle::new(point, 3, color.filled())),
    )?;

    root.present()?;
    Ok(())
}

fn draw_bar_chart(style: &ChartStyle, data: &BarChartData, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&parse_color(&style.background_color))?;

    let categories = coord(data.rows.len()).max(1);
    let half = CATEGORY_WIDTH / 2;
    let x_range = -half..categories.saturating_mul(CATEGORY_WIDTH) - half;
    let y_max = GraphUtils::axis_ceiling(GraphUtils::max_value(
        data.rows
            .iter()
            .flat_map(|row| row.series_values.values().copied()),
    ));

    let font = style.font_family.as_str();
    let mut chart = ChartBuilder::on(&root)
        .caption(&data.title, (font, style.title_font_size))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, 0f64..y_max)?;

    let x_formatter = |x: &i32| {
        if x % CATEGORY_WIDTH == 0 {
            tick_at(&data.ticks, x / CATEGORY_WIDTH)
        } else {
            String::new()
        }
    };
    let y_formatter = |y: &f64| format_player_count(*y);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.rows.len() + 1)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .x_desc(data.x_desc.as_str())
        .y_desc(data.y_desc.as_str())
        .label_style((font, 14))
        .draw()?;

    let group_width = CATEGORY_WIDTH * GROUP_FILL_PERCENT / 100;
    let bar_width = (group_width / coord(data.series.len()).max(1)).max(1);

    for (series_index, series) in data.series.iter().enumerate() {
        let color = parse_color(&series.color);
        let offset = coord(series_index).saturating_mul(bar_width) - group_width / 2;
        let bars = data.rows.iter().enumerate().filter_map(|(row_index, row)| {
            let value = row.value(&series.alias)?;
            let left = coord(row_index).saturating_mul(CATEGORY_WIDTH) + offset;
            Some(Rectangle::new(
                [(left, 0.0), (left + bar_width - 1, value)],
                color.filled(),
            ))
        });

        chart
            .draw_series(bars)?
            .label(series.alias.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((font, 14))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Draws a single-game series as a line with point markers.
#[derive(Debug, Clone, Default)]
pub struct LineChartRenderer {
    style: ChartStyle,
}

impl LineChartRenderer {
    /// Creates a renderer with the given style.
    pub const fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// Style in use.
    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }
}

#[async_trait]
impl GraphRenderer for LineChartRenderer {
    type Data = LineChartData;

    async fn render_to_file(&self, data: &LineChartData, path: &Path) -> Result<()> {
        draw_line_chart(&self.style, data, path)?;
        info!("Rendered line chart to {}", path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "line"
    }

    fn description(&self) -> &'static str {
        "Players of one game per month"
    }
}

/// Draws aggregated rows as grouped bars, one colour per alias.
#[derive(Debug, Clone, Default)]
pub struct BarChartRenderer {
    style: ChartStyle,
}

impl BarChartRenderer {
    /// Creates a renderer with the given style.
    pub const fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// Style in use.
    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }
}

#[async_trait]
impl GraphRenderer for BarChartRenderer {
    type Data = BarChartData;

    async fn render_to_file(&self, data: &BarChartData, path: &Path) -> Result<()> {
        draw_bar_chart(&self.style, data, path)?;
        info!("Rendered bar chart to {}", path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "bar"
    }

    fn description(&self) -> &'static str {
        "Average players of the compared games, grouped by month"
    }
}
