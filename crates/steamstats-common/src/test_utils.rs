//! Test utilities and shared fixtures for Steam Stats.
//!
//! Available to other crates' tests through the `testing` feature.

use crate::{PlayerRecord, RecordDate};
use chrono::NaiveDate;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call multiple times.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Builds a record with a valid first-of-month date derived from `year`/`month`.
pub fn record(game: &str, label: &str, year: i32, month: u32, avg: f64) -> PlayerRecord {
    PlayerRecord {
        period_label: label.to_string(),
        date: RecordDate::from(NaiveDate::from_ymd_opt(year, month, 1)),
        game_name: game.to_string(),
        avg_players: avg,
        peak_players: 0,
    }
}

/// Builds a record whose date column did not parse.
pub fn record_with_invalid_date(game: &str, label: &str, avg: f64) -> PlayerRecord {
    PlayerRecord {
        period_label: label.to_string(),
        date: RecordDate::Invalid,
        game_name: game.to_string(),
        avg_players: avg,
        peak_players: 0,
    }
}

/// CSV fixtures in the Valve player-data layout.
pub mod csv_fixtures {
    /// Header line shared by the fixtures.
    pub const HEADER: &str = "Month_Year,Date,Game_Name,Avg_players,Peak_Players";

    /// Small dataset: three games across 2020 and 2021, rows deliberately out of order.
    pub fn sample_csv() -> String {
        [
            HEADER,
            "February 2021,2021-02-01,Dota 2,\"400,000\",\"800,000\"",
            "January 2021,2021-01-01,Dota 2,\"500,000\",\"900,000\"",
            "March 2020,2020-03-01,PUBG: Battlegrounds,100000,\"300,000\"",
            "March 2020,2020-03-01,Counter Strike: Global Offensive,200000,\"1,000,000\"",
            "January 2020,2020-01-01,Dota 2,\"410,000.5\",\"700,000\"",
            "January 2020,2020-01-01,Team Fortress 2,\"60,000\",\"90,000\"",
            "April 2020,2020-04-01,Counter Strike: Global Offensive,\"750,000\",\"1,300,000\"",
        ]
        .join("\n")
    }

    /// Rows with dirty numeric and date fields.
    pub fn dirty_csv() -> String {
        [
            HEADER,
            "May 2019,not a date,Dota 2,,",
            "June 2019,2019-06-01,  Dota 2  ,abc,12.9",
            "",
            "July 2019,2019-07-01,,\"1,234,567\",-5",
        ]
        .join("\n")
    }
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "testing")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Writes `contents` to a temporary file that is removed when dropped.
#[cfg(feature = "testing")]
pub fn write_temp_file(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary file");
    file
}

/// Property-based testing strategies.
#[cfg(feature = "testing")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Game names drawn from a small pool so that duplicates are common.
    pub fn game_name_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec![
            "Dota 2",
            "PUBG: Battlegrounds",
            "Counter Strike: Global Offensive",
            "Team Fortress 2",
            "Rust",
        ])
        .prop_map(str::to_string)
    }

    /// Month-year labels for 2012..=2021.
    pub fn period_strategy() -> impl Strategy<Value = (i32, u32)> {
        (2012i32..=2021, 1u32..=12)
    }
}
