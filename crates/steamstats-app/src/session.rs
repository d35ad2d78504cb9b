//! Dashboard session: the selections, the loaded dataset and the chosen output.

use crate::cli::OutputFormat;
use crate::error::AppResult;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use steamstats_common::{format_player_count, truncate_string, ChartView, SeriesMetric};
use steamstats_config::{Config, DashboardConfig};
use steamstats_graphs::{
    BarChartData, BarChartRenderer, ChartStyle, Dashboard, DashboardOptions, DatasetLoader,
    GraphRenderer, GraphUtils, LineChartData, LineChartRenderer, LoadStatus, LoadedDataset,
};
use steamstats_i18n::{Locale, LocaleTable};
use tracing::{info, warn};

/// Widest game column in text output.
const TEXT_COLUMN_WIDTH: usize = 12;

/// What the user is looking at. Owned by the front end, never by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Game of the line chart.
    pub game: String,
    /// Year text of the line chart.
    pub year: String,
    /// Year text of the comparison bar chart.
    pub comparison_year: String,
    /// Display language.
    pub locale: Locale,
    /// Line chart metric.
    pub metric: SeriesMetric,
    /// Visible charts.
    pub view: ChartView,
}

impl Selection {
    /// Initial selection from configuration; unknown languages fall back to English.
    pub fn from_config(dashboard: &DashboardConfig, comparison_year: &str) -> Self {
        let locale = Locale::from_code(&dashboard.language).unwrap_or_else(|| {
            warn!(
                "Unsupported language '{}', using {}",
                dashboard.language,
                Locale::default()
            );
            Locale::default()
        });

        Self {
            game: dashboard.default_game.clone(),
            year: dashboard.default_year.clone(),
            comparison_year: comparison_year.to_string(),
            locale,
            metric: dashboard.metric,
            view: dashboard.view,
        }
    }

    /// Display strings of the selected language.
    pub const fn table(&self) -> &'static LocaleTable {
        self.locale.table()
    }

    /// Replaces a game the dataset does not contain with its first game.
    pub fn resolve_game(&mut self, options: &DashboardOptions) {
        if options.games.is_empty() || options.games.contains(&self.game) {
            return;
        }
        let fallback = options.games[0].clone();
        warn!("Game '{}' not in dataset, showing '{}'", self.game, fallback);
        self.game = fallback;
    }
}

/// Chart data as written by the JSON output.
#[derive(Debug, Serialize)]
struct ChartReport<'a> {
    language: &'static str,
    status: &'a LoadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<LineChartData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bar: Option<BarChartData>,
}

/// A loaded dashboard with its current selection.
#[derive(Debug, Clone)]
pub struct Session {
    dashboard: Dashboard,
    status: LoadStatus,
    selection: Selection,
    style: ChartStyle,
    output_dir: PathBuf,
}

impl Session {
    /// Loads the configured dataset and prepares the initial selection.
    pub async fn start(config: &Config) -> Self {
        let loaded = DatasetLoader::from_config(&config.dataset).load().await;
        Self::from_loaded(config, loaded)
    }

    /// Builds a session around an already loaded dataset.
    pub fn from_loaded(config: &Config, loaded: LoadedDataset) -> Self {
        let dashboard = Dashboard::from_config(loaded.store, &config.comparison);
        let mut selection = Selection::from_config(&config.dashboard, &config.comparison.year);
        selection.resolve_game(&dashboard.options());

        Self {
            dashboard,
            status: loaded.status,
            selection,
            style: ChartStyle::from(&config.output),
            output_dir: PathBuf::from(&config.output.dir),
        }
    }

    /// The dashboard facade.
    pub const fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Outcome of the dataset load.
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Current selection.
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Mutable selection; charts follow it on the next call.
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Line chart for the current selection.
    pub fn line_chart(&self) -> LineChartData {
        let selection = &self.selection;
        self.dashboard.line_chart(
            &selection.game,
            &selection.year,
            selection.metric,
            selection.table(),
        )
    }

    /// Comparison bar chart for the current selection.
    pub fn bar_chart(&self) -> BarChartData {
        self.dashboard
            .bar_chart(&self.selection.comparison_year, self.selection.table())
    }

    /// Writes the visible charts in `format`; PNG paths are returned.
    pub async fn output<W: Write>(
        &self,
        format: OutputFormat,
        out: &mut W,
    ) -> AppResult<Vec<PathBuf>> {
        match format {
            OutputFormat::Png => {
                let paths = self.render_png(&self.output_dir).await?;
                for path in &paths {
                    writeln!(out, "{}", path.display())?;
                }
                Ok(paths)
            }
            OutputFormat::Json => {
                self.write_json(out)?;
                Ok(Vec::new())
            }
            OutputFormat::Text => {
                self.write_text(out)?;
                Ok(Vec::new())
            }
        }
    }

    /// Renders the visible charts as PNG files under `dir`.
    pub async fn render_png(&self, dir: &Path) -> AppResult<Vec<PathBuf>> {
        tokio::fs::create_dir_all(dir).await?;
        let selection = &self.selection;
        let mut paths = Vec::new();

        if selection.view.shows_line() {
            let path = dir.join(GraphUtils::chart_file_name(
                "line",
                &selection.game,
                &selection.year,
            ));
            LineChartRenderer::new(self.style.clone())
                .render_to_file(&self.line_chart(), &path)
                .await?;
            paths.push(path);
        }

        if selection.view.shows_bar() {
            let path = dir.join(GraphUtils::chart_file_name(
                "bar",
                "comparison",
                &selection.comparison_year,
            ));
            BarChartRenderer::new(self.style.clone())
                .render_to_file(&self.bar_chart(), &path)
                .await?;
            paths.push(path);
        }

        info!("Wrote {} chart(s) to {}", paths.len(), dir.display());
        Ok(paths)
    }

    /// Writes the visible charts' data as pretty JSON.
    pub fn write_json<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let view = self.selection.view;
        let report = ChartReport {
            language: self.selection.locale.code(),
            status: &self.status,
            line: view.shows_line().then(|| self.line_chart()),
            bar: view.shows_bar().then(|| self.bar_chart()),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }

    /// Writes the visible charts as plain-text tables.
    pub fn write_text<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let table = self.selection.table();
        writeln!(out, "{}", table.page_title)?;
        if let LoadStatus::Failed { reason } = &self.status {
            writeln!(out, "{reason}")?;
        }

        if self.selection.view.shows_line() {
            let chart = self.line_chart();
            writeln!(out, "\n{}", chart.title)?;
            for (tick, point) in chart.ticks.iter().zip(&chart.points) {
                writeln!(out, "  {tick:<8} {:>10}", format_player_count(point.value))?;
            }
        }

        if self.selection.view.shows_bar() {
            let chart = self.bar_chart();
            writeln!(out, "\n{}", chart.title)?;
            write!(out, "  {:<8}", table.month)?;
            for series in &chart.series {
                let heading = truncate_string(&series.alias, TEXT_COLUMN_WIDTH);
                write!(out, " {heading:>width$}", width = TEXT_COLUMN_WIDTH)?;
            }
            writeln!(out)?;
            for (tick, row) in chart.ticks.iter().zip(&chart.rows) {
                write!(out, "  {tick:<8}")?;
                for series in &chart.series {
                    let cell = row
                        .value(&series.alias)
                        .map_or_else(|| "-".to_string(), format_player_count);
                    write!(out, " {cell:>width$}", width = TEXT_COLUMN_WIDTH)?;
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Writes the selector options, one game per line, then the years.
    pub fn write_options<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let table = self.selection.table();
        let options = self.dashboard.options();

        writeln!(out, "{}", table.game_select)?;
        for game in &options.games {
            writeln!(out, "  {game}")?;
        }
        let years: Vec<String> = options.years.iter().map(ToString::to_string).collect();
        writeln!(out, "{} {}", table.year_select, years.join(", "))?;
        Ok(())
    }
}
