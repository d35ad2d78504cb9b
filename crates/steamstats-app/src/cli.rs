//! Command line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use steamstats_common::{ChartView, SeriesMetric};
use steamstats_config::Config;

/// What the session writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// PNG images in the output directory.
    #[default]
    Png,
    /// Chart data as JSON on stdout.
    Json,
    /// A plain-text table on stdout.
    Text,
}

/// Command line arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Steam concurrent-player charts from a CSV dataset", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "STEAMSTATS_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Dataset CSV path
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Game shown in the line chart
    #[arg(short, long)]
    pub game: Option<String>,

    /// Year text matched against period labels
    #[arg(short, long)]
    pub year: Option<String>,

    /// Display language code (en, cn, fr)
    #[arg(short = 'L', long)]
    pub language: Option<String>,

    /// Line chart metric (avg or peak)
    #[arg(short, long)]
    pub metric: Option<SeriesMetric>,

    /// Charts to produce (line, bar or both)
    #[arg(short, long)]
    pub view: Option<ChartView>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Directory for PNG output
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print the available games and years, then exit
    #[arg(long)]
    pub list_options: bool,

    /// Log level
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Copies the flags that override configuration values into `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(path) = &self.data {
            config.dataset.path = path.display().to_string();
        }
        if let Some(game) = &self.game {
            config.dashboard.default_game.clone_from(game);
        }
        if let Some(year) = &self.year {
            config.dashboard.default_year.clone_from(year);
        }
        if let Some(language) = &self.language {
            config.dashboard.language.clone_from(language);
        }
        if let Some(metric) = self.metric {
            config.dashboard.metric = metric;
        }
        if let Some(view) = self.view {
            config.dashboard.view = view;
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.display().to_string();
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "steamstats",
            "--game",
            "Dota 2",
            "--year",
            "2020",
            "--metric",
            "peak",
            "--view",
            "bar",
            "--format",
            "json",
            "-L",
            "fr",
        ])
        .unwrap();

        assert_eq!(args.game.as_deref(), Some("Dota 2"));
        assert_eq!(args.metric, Some(SeriesMetric::PeakPlayers));
        assert_eq!(args.view, Some(ChartView::Bar));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.language.as_deref(), Some("fr"));
    }

    #[test]
    fn test_rejects_unknown_metric() {
        assert!(Args::try_parse_from(["steamstats", "--metric", "median"]).is_err());
    }

    #[test]
    fn test_apply_to_config() {
        let args = Args {
            data: Some(PathBuf::from("players.csv")),
            year: Some("2019".to_string()),
            view: Some(ChartView::Line),
            ..Args::default()
        };
        let mut config = Config::default();

        args.apply_to(&mut config);

        assert_eq!(config.dataset.path, "players.csv");
        assert_eq!(config.dashboard.default_year, "2019");
        assert_eq!(config.dashboard.view, ChartView::Line);
        assert_eq!(config.dashboard.language, "en");
    }
}
