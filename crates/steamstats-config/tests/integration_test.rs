//! Integration tests for steamstats-config crate.

use steamstats_common::test_utils::write_temp_file;
use steamstats_common::{ChartView, LogFormat, SeriesMetric, StatsError};
use steamstats_config::{Config, ConfigError, ConfigLoader};

const FULL_CONFIG: &str = r##"
dataset:
  path: "data/players.csv"
  date_format: "%d/%m/%Y"
  columns:
    period_label: "Month"
    date: "Day"
    game_name: "Game"
    avg_players: "Average"
    peak_players: "Peak"

dashboard:
  default_game: "Dota 2"
  default_year: "2019"
  language: "cn"
  metric: peak_players
  view: bar

comparison:
  year: "2019"
  games:
    - name: "Dota 2"
      alias: "Dota2"
      color: "#b53840"
    - name: "Team Fortress 2"
      color: "#cf6a32"

output:
  dir: "out"
  width: 800
  height: 600

logging:
  level: "debug"
  format: json
"##;

#[test]
fn test_load_full_config_from_file() {
    let file = write_temp_file(FULL_CONFIG);
    let config = ConfigLoader::load_config(file.path()).unwrap();

    assert_eq!(config.dataset.date_format, "%d/%m/%Y");
    assert_eq!(config.dataset.columns.avg_players, "Average");
    assert_eq!(config.dashboard.metric, SeriesMetric::PeakPlayers);
    assert_eq!(config.dashboard.view, ChartView::Bar);
    assert_eq!(config.comparison.games.len(), 2);
    assert_eq!(config.comparison.games[1].alias, None);
    assert_eq!(config.output.width, 800);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_invalid_values_fail_validation() {
    let file = write_temp_file("output:\n  width: 5\n");
    let result = ConfigLoader::load_config(file.path());

    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_config_error_converts_to_stats_error() {
    let file = write_temp_file("comparison:\n  games: []\n");
    let err = ConfigLoader::load_config(file.path()).unwrap_err();
    let stats_error: StatsError = err.into();

    assert!(stats_error.to_string().starts_with("Configuration error"));
}

#[test]
fn test_serialized_defaults_load_back() {
    let yaml = serde_yaml::to_string(&steamstats_config::Config::default()).unwrap();
    let parsed = ConfigLoader::parse(&yaml).unwrap();

    assert_eq!(parsed, steamstats_config::Config::default());
}

#[test]
fn test_example_file_matches_defaults() {
    let config = ConfigLoader::parse(include_str!("../../../steamstats.example.yaml")).unwrap();

    assert!(config.validate_all().is_ok());
    assert_eq!(config, Config::default());
}
