//! Read-only dashboard facade handed to the presentation side.

use crate::aggregation::{build_aggregation, GameWhitelist};
use crate::renderer::{BarChartData, BarSeries, LineChartData};
use crate::series::build_series_for;
use crate::store::{DashboardOptions, RecordStore};
use steamstats_common::{AggregatedRow, SeriesMetric, SeriesPoint};
use steamstats_config::ComparisonConfig;
use steamstats_i18n::LocaleTable;

/// Bar colours used when the whitelist does not come with its own.
const DEFAULT_PALETTE: [&str; 8] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
];

/// The loaded dataset plus the comparison whitelist.
///
/// Every chart structure is recomputed from the store on each call.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: RecordStore,
    whitelist: GameWhitelist,
    bar_series: Vec<BarSeries>,
}

impl Dashboard {
    /// Creates a dashboard whose bars take colours from the default palette.
    pub fn new(store: RecordStore, whitelist: GameWhitelist) -> Self {
        let bar_series = whitelist
            .aliases()
            .into_iter()
            .zip(DEFAULT_PALETTE.iter().cycle())
            .map(|(alias, color)| BarSeries {
                alias: alias.to_string(),
                color: (*color).to_string(),
            })
            .collect();

        Self {
            store,
            whitelist,
            bar_series,
        }
    }

    /// Creates a dashboard from the comparison section, colours included.
    pub fn from_config(store: RecordStore, comparison: &ComparisonConfig) -> Self {
        let whitelist = GameWhitelist::from(comparison);
        let bar_series = comparison
            .games
            .iter()
            .map(|game| BarSeries {
                alias: game.alias.clone().unwrap_or_else(|| game.name.clone()),
                color: game.color.clone(),
            })
            .collect();

        Self {
            store,
            whitelist,
            bar_series,
        }
    }

    /// The underlying store.
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The comparison whitelist.
    pub const fn whitelist(&self) -> &GameWhitelist {
        &self.whitelist
    }

    /// Selector options.
    pub fn options(&self) -> DashboardOptions {
        self.store.options()
    }

    /// Average-player series for the line chart.
    pub fn build_series(&self, game: &str, year_text: &str) -> Vec<SeriesPoint> {
        self.build_series_for(game, year_text, SeriesMetric::AvgPlayers)
    }

    /// Series of any metric for the line chart.
    pub fn build_series_for(
        &self,
        game: &str,
        year_text: &str,
        metric: SeriesMetric,
    ) -> Vec<SeriesPoint> {
        build_series_for(self.store.records(), game, year_text, metric)
    }

    /// Whitelisted rows for the bar chart.
    pub fn build_aggregation(&self, year_text: &str) -> Vec<AggregatedRow> {
        build_aggregation(self.store.records(), &self.whitelist, year_text)
    }

    /// Localised line chart for one game and year.
    pub fn line_chart(
        &self,
        game: &str,
        year_text: &str,
        metric: SeriesMetric,
        table: &LocaleTable,
    ) -> LineChartData {
        let points = self.build_series_for(game, year_text, metric);
        let ticks = points
            .iter()
            .map(|point| table.month_tick(&point.label).to_string())
            .collect();

        LineChartData {
            title: table.line_chart_title(game, year_text, metric),
            x_desc: table.month.to_string(),
            y_desc: table.metric_label(metric).to_string(),
            points,
            ticks,
        }
    }

    /// Localised comparison bar chart for one year.
    pub fn bar_chart(&self, year_text: &str, table: &LocaleTable) -> BarChartData {
        let rows = self.build_aggregation(year_text);
        let ticks = rows
            .iter()
            .map(|row| table.month_tick(&row.period_key).to_string())
            .collect();

        BarChartData {
            title: table.bar_chart_title(year_text, self.whitelist.len()),
            x_desc: table.month.to_string(),
            y_desc: table.avg_players.to_string(),
            rows,
            ticks,
            series: self.bar_series.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::CsvSchema;
    use steamstats_common::test_utils::csv_fixtures::sample_csv;
    use steamstats_i18n::locale_table;

    fn dashboard() -> Dashboard {
        Dashboard::from_config(
            RecordStore::from_csv(&sample_csv(), &CsvSchema::default()),
            &ComparisonConfig::default(),
        )
    }

    #[test]
    fn test_options() {
        let options = dashboard().options();
        assert_eq!(options.games.len(), 4);
        assert_eq!(options.years, vec![2020, 2021]);
    }

    #[test]
    fn test_line_chart_is_localised() {
        let chart = dashboard().line_chart("Dota 2", "2021", SeriesMetric::AvgPlayers, locale_table("cn"));

        assert_eq!(chart.title, "2021里 Dota 2 的平均玩家");
        assert_eq!(chart.ticks, vec!["一月", "二月"]);
        assert_eq!(chart.y_desc, "平均玩家");
        assert_eq!(chart.points.len(), 2);
    }

    #[test]
    fn test_bar_chart_uses_configured_colours() {
        let chart = dashboard().bar_chart("2020", locale_table("en"));

        assert_eq!(chart.title, "2020 Average players for the top 3 games");
        assert_eq!(chart.ticks, vec!["Jan", "Mar", "Apr"]);
        assert_eq!(
            chart.series,
            vec![
                BarSeries {
                    alias: "CSGO".to_string(),
                    color: "#6060d6".to_string()
                },
                BarSeries {
                    alias: "Dota2".to_string(),
                    color: "#b53840".to_string()
                },
                BarSeries {
                    alias: "PUBG".to_string(),
                    color: "#c49331".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_default_palette_cycles() {
        let whitelist = GameWhitelist::new((0..10).map(|index| {
            crate::aggregation::WhitelistEntry::aliased(format!("Game {index}"), format!("G{index}"))
        }));
        let chart = Dashboard::new(RecordStore::empty(), whitelist).bar_chart("2020", locale_table("en"));

        assert_eq!(chart.series.len(), 10);
        assert_eq!(chart.series[8].color, chart.series[0].color);
        assert!(chart.rows.is_empty());
    }

    #[test]
    fn test_builders_are_idempotent() {
        let dashboard = dashboard();
        assert_eq!(
            dashboard.build_series("Dota 2", "2020"),
            dashboard.build_series("Dota 2", "2020")
        );
        assert_eq!(
            dashboard.build_aggregation("2020"),
            dashboard.build_aggregation("2020")
        );
    }
}
