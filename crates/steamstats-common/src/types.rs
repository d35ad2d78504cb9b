//! Player-record data model and chart-ready output shapes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Calendar date of a record, or the explicit marker for an unparseable one.
///
/// `Invalid` is declared first so that the derived ordering places invalid
/// dates before every valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordDate {
    /// The source text could not be parsed with the configured format.
    Invalid,
    /// A parsed calendar date.
    Valid(NaiveDate),
}

impl RecordDate {
    /// Returns `true` for a parsed date.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The underlying date, if valid.
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Valid(date) => Some(*date),
            Self::Invalid => None,
        }
    }

    /// Calendar year of a valid date.
    pub fn year(&self) -> Option<i32> {
        self.as_date().map(|date| date.year())
    }
}

impl From<Option<NaiveDate>> for RecordDate {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Self::Invalid, Self::Valid)
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(date) => write!(f, "{date}"),
            Self::Invalid => f.write_str("invalid date"),
        }
    }
}

/// One month of concurrent-player statistics for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Month-year label as it appears in the source, e.g. "January 2021".
    pub period_label: String,
    /// Date column of the source row.
    pub date: RecordDate,
    /// Game name, trimmed.
    pub game_name: String,
    /// Average concurrent players, never negative.
    pub avg_players: f64,
    /// Peak concurrent players.
    pub peak_players: u64,
}

/// One point of the line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Period label shown on the x axis.
    pub label: String,
    /// Plotted value.
    pub value: f64,
}

/// One x-axis category of the grouped bar chart.
///
/// `series_values` is keyed by game alias; a month where only some games have
/// data carries only those keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRow {
    /// Period label shared by every value in the row.
    pub period_key: String,
    /// Alias to average players.
    pub series_values: BTreeMap<String, f64>,
}

impl AggregatedRow {
    /// Creates a row with no values yet.
    pub fn new(period_key: impl Into<String>) -> Self {
        Self {
            period_key: period_key.into(),
            series_values: BTreeMap::new(),
        }
    }

    /// Value for `alias`, if present in this period.
    pub fn value(&self, alias: &str) -> Option<f64> {
        self.series_values.get(alias).copied()
    }
}

/// Which record field a series plots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesMetric {
    /// `avg_players`
    #[default]
    AvgPlayers,
    /// `peak_players`
    PeakPlayers,
}

impl SeriesMetric {
    /// Reads this metric from a record.
    #[allow(clippy::cast_precision_loss)]
    pub fn value_of(self, record: &PlayerRecord) -> f64 {
        match self {
            Self::AvgPlayers => record.avg_players,
            Self::PeakPlayers => record.peak_players as f64,
        }
    }
}

impl FromStr for SeriesMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avg" | "average" | "avg_players" => Ok(Self::AvgPlayers),
            "peak" | "peak_players" => Ok(Self::PeakPlayers),
            other => Err(format!("unknown metric '{other}' (expected avg or peak)")),
        }
    }
}

/// Which chart the presentation side shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartView {
    /// Single-game time series.
    #[default]
    Line,
    /// Whitelisted games grouped by month.
    Bar,
    /// Both charts.
    Both,
}

impl ChartView {
    /// Whether the line chart is visible.
    pub const fn shows_line(self) -> bool {
        matches!(self, Self::Line | Self::Both)
    }

    /// Whether the bar chart is visible.
    pub const fn shows_bar(self) -> bool {
        matches!(self, Self::Bar | Self::Both)
    }
}

impl FromStr for ChartView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            "both" => Ok(Self::Both),
            other => Err(format!("unknown chart view '{other}' (expected line, bar or both)")),
        }
    }
}
