//! Default values matching the Valve player-data CSV layout and the stock dashboard.

use crate::schema::{
    ColumnsConfig, ComparisonConfig, ComparisonGame, Config, DashboardConfig, DatasetConfig,
    OutputConfig,
};
use steamstats_common::{ChartView, LoggingConfig, SeriesMetric};

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            dashboard: DashboardConfig::default(),
            comparison: ComparisonConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: "data/Valve_Player_Data.csv".to_string(),
            columns: ColumnsConfig::default(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            period_label: "Month_Year".to_string(),
            date: "Date".to_string(),
            game_name: "Game_Name".to_string(),
            avg_players: "Avg_players".to_string(),
            peak_players: "Peak_Players".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_game: "Counter Strike: Global Offensive".to_string(),
            default_year: "2021".to_string(),
            language: "en".to_string(),
            metric: SeriesMetric::AvgPlayers,
            view: ChartView::Both,
        }
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            year: "2020".to_string(),
            games: vec![
                ComparisonGame::new("Counter Strike: Global Offensive", "CSGO", "#6060d6"),
                ComparisonGame::new("Dota 2", "Dota2", "#b53840"),
                ComparisonGame::new("PUBG: Battlegrounds", "PUBG", "#c49331"),
            ],
        }
    }
}

impl ComparisonGame {
    /// Creates a whitelist entry with an alias.
    pub fn new(name: impl Into<String>, alias: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
            color: color.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "charts".to_string(),
            width: 1024,
            height: 640,
        }
    }
}
