//! Configuration schema definitions using serde with validation attributes.

use serde::{Deserialize, Serialize};
use steamstats_common::{ChartView, LoggingConfig, SeriesMetric};
use validator::Validate;

/// Main configuration structure for Steam Stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Dataset location and layout.
    #[validate(nested)]
    pub dataset: DatasetConfig,
    /// Initial selections of the dashboard.
    #[validate(nested)]
    pub dashboard: DashboardConfig,
    /// Bar chart comparison set.
    #[validate(nested)]
    pub comparison: ComparisonConfig,
    /// Rendered chart output.
    #[validate(nested)]
    pub output: OutputConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Where the CSV lives and how to read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the CSV file.
    #[validate(length(min = 1, message = "Dataset path cannot be empty"))]
    pub path: String,
    /// Header names of the required columns.
    #[validate(nested)]
    pub columns: ColumnsConfig,
    /// `chrono` format of the date column.
    #[validate(length(min = 1, message = "Date format cannot be empty"))]
    pub date_format: String,
}

/// Header names of the columns the parser reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ColumnsConfig {
    /// Month-year label column.
    #[validate(length(min = 1, message = "Column name cannot be empty"))]
    pub period_label: String,
    /// Date column.
    #[validate(length(min = 1, message = "Column name cannot be empty"))]
    pub date: String,
    /// Game name column.
    #[validate(length(min = 1, message = "Column name cannot be empty"))]
    pub game_name: String,
    /// Average players column.
    #[validate(length(min = 1, message = "Column name cannot be empty"))]
    pub avg_players: String,
    /// Peak players column.
    #[validate(length(min = 1, message = "Column name cannot be empty"))]
    pub peak_players: String,
}

/// Selections the dashboard starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DashboardConfig {
    /// Game shown in the line chart.
    pub default_game: String,
    /// Year text matched against period labels.
    pub default_year: String,
    /// Language code of the locale table ("en", "cn", "fr").
    #[validate(length(min = 1, message = "Language code cannot be empty"))]
    pub language: String,
    /// Value plotted by the line chart.
    pub metric: SeriesMetric,
    /// Which chart(s) to produce.
    pub view: ChartView,
}

/// Games compared side by side in the bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Year text matched against period labels.
    #[validate(length(min = 1, message = "Comparison year cannot be empty"))]
    pub year: String,
    /// Whitelisted games.
    #[validate(
        length(min = 1, max = 8, message = "Comparison needs between 1 and 8 games"),
        nested
    )]
    pub games: Vec<ComparisonGame>,
}

/// One whitelisted game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ComparisonGame {
    /// Game name exactly as in the dataset.
    #[validate(length(min = 1, message = "Game name cannot be empty"))]
    pub name: String,
    /// Short legend name; the game name is used when absent.
    #[serde(default)]
    pub alias: Option<String>,
    /// Bar colour as `#RRGGBB`.
    #[validate(custom(function = "crate::validation::validate_hex_color", message = "Color must be #RRGGBB"))]
    pub color: String,
}

/// Rendered chart output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory PNG files are written to.
    #[validate(length(min = 1, message = "Output directory cannot be empty"))]
    pub dir: String,
    /// Image width in pixels.
    #[validate(range(min = 320, max = 4096, message = "Width must be between 320 and 4096"))]
    pub width: u32,
    /// Image height in pixels.
    #[validate(range(min = 240, max = 4096, message = "Height must be between 240 and 4096"))]
    pub height: u32,
}
