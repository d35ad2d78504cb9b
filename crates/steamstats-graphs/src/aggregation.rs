//! Whitelisted comparison: month bucketing and pivot into bar chart rows.

use chrono::NaiveDate;
use std::collections::HashMap;
use steamstats_common::{AggregatedRow, PlayerRecord};
use steamstats_config::ComparisonConfig;
use tracing::{debug, instrument};

/// One whitelisted game and the key it appears under in aggregated rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistEntry {
    /// Exact game name as it appears in the data.
    pub name: String,
    /// Short series key; the name itself when unset.
    pub alias: Option<String>,
}

impl WhitelistEntry {
    /// Entry with an alias.
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    /// Series key of this entry.
    pub fn key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Games compared in the bar chart, in legend order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameWhitelist {
    entries: Vec<WhitelistEntry>,
}

impl GameWhitelist {
    /// Builds a whitelist from entries.
    pub fn new(entries: impl IntoIterator<Item = WhitelistEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Entries in legend order.
    pub fn entries(&self) -> &[WhitelistEntry] {
        &self.entries
    }

    /// Number of games.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no game is whitelisted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry whose name equals `game_name`.
    pub fn get(&self, game_name: &str) -> Option<&WhitelistEntry> {
        self.entries.iter().find(|entry| entry.name == game_name)
    }

    /// Returns `true` if `game_name` is whitelisted.
    pub fn contains(&self, game_name: &str) -> bool {
        self.get(game_name).is_some()
    }

    /// Series key for `game_name`; names outside the alias table keep their name.
    pub fn alias_for<'a>(&'a self, game_name: &'a str) -> &'a str {
        self.get(game_name).map_or(game_name, WhitelistEntry::key)
    }

    /// Series keys in legend order.
    pub fn aliases(&self) -> Vec<&str> {
        self.entries.iter().map(WhitelistEntry::key).collect()
    }
}

impl Default for GameWhitelist {
    fn default() -> Self {
        Self::new([
            WhitelistEntry::aliased("Counter Strike: Global Offensive", "CSGO"),
            WhitelistEntry::aliased("Dota 2", "Dota2"),
            WhitelistEntry::aliased("PUBG: Battlegrounds", "PUBG"),
        ])
    }
}

impl From<&ComparisonConfig> for GameWhitelist {
    fn from(config: &ComparisonConfig) -> Self {
        Self::new(config.games.iter().map(|game| WhitelistEntry {
            name: game.name.clone(),
            alias: game.alias.clone(),
        }))
    }
}

/// First day of the month named by a "Month YYYY" label.
pub fn period_start(period_label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {period_label}"), "%d %B %Y").ok()
}

/// Pivots whitelisted records whose label contains `year_text` into one row per period.
///
/// Values are average players keyed by alias. A repeated (game, period) pair
/// keeps the last value. Rows are ordered by the month their label names;
/// labels that do not name a month come first in source order.
#[instrument(skip(records, whitelist), fields(records = records.len(), games = whitelist.len()))]
pub fn build_aggregation(
    records: &[PlayerRecord],
    whitelist: &GameWhitelist,
    year_text: &str,
) -> Vec<AggregatedRow> {
    let mut rows: Vec<AggregatedRow> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|record| {
        whitelist.contains(&record.game_name) && record.period_label.contains(year_text)
    }) {
        let slot = *slots.entry(record.period_label.as_str()).or_insert_with(|| {
            rows.push(AggregatedRow::new(record.period_label.clone()));
            rows.len() - 1
        });

        let alias = whitelist.alias_for(&record.game_name);
        if let Some(previous) = rows[slot]
            .series_values
            .insert(alias.to_string(), record.avg_players)
        {
            debug!(
                "Duplicate {} row for {}, replacing {} with {}",
                alias, record.period_label, previous, record.avg_players
            );
        }
    }

    rows.sort_by_cached_key(|row| period_start(&row.period_key));
    debug!("Aggregated {} periods", rows.len());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_records, CsvSchema};
    use proptest::prelude::*;
    use steamstats_common::test_utils::property_testing::{game_name_strategy, period_strategy};
    use steamstats_common::test_utils::{csv_fixtures, record};
    use steamstats_config::ComparisonGame;

    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    #[test]
    fn test_march_2020_end_to_end() {
        let records = vec![
            record("PUBG: Battlegrounds", "March 2020", 2020, 3, 100_000.0),
            record("Counter Strike: Global Offensive", "March 2020", 2020, 3, 200_000.0),
        ];

        let rows = build_aggregation(&records, &GameWhitelist::default(), "2020");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].period_key, "March 2020");
        assert_eq!(rows[0].series_values.len(), 2);
        assert_eq!(rows[0].value("PUBG"), Some(100_000.0));
        assert_eq!(rows[0].value("CSGO"), Some(200_000.0));
    }

    #[test]
    fn test_sample_rows_sorted_by_month() {
        let records = parse_records(&csv_fixtures::sample_csv(), &CsvSchema::default());

        let rows = build_aggregation(&records, &GameWhitelist::default(), "2020");
        let keys: Vec<&str> = rows.iter().map(|row| row.period_key.as_str()).collect();

        assert_eq!(keys, vec!["January 2020", "March 2020", "April 2020"]);
        // Team Fortress 2 is not whitelisted
        assert_eq!(rows[0].series_values.len(), 1);
        assert_eq!(rows[0].value("Dota2"), Some(410_000.5));
        assert_eq!(rows[2].value("CSGO"), Some(750_000.0));
        assert_eq!(rows[2].value("PUBG"), None);
    }

    #[test]
    fn test_last_write_wins() {
        let records = vec![
            record("Dota 2", "May 2020", 2020, 5, 1.0),
            record("Dota 2", "May 2020", 2020, 5, 2.0),
        ];

        let rows = build_aggregation(&records, &GameWhitelist::default(), "2020");
        assert_eq!(rows[0].value("Dota2"), Some(2.0));
    }

    #[test]
    fn test_unparseable_labels_sort_first() {
        let records = vec![
            record("Dota 2", "February 2020", 2020, 2, 1.0),
            record("Dota 2", "Q3 2020", 2020, 7, 1.0),
            record("Dota 2", "January 2020", 2020, 1, 1.0),
        ];

        let rows = build_aggregation(&records, &GameWhitelist::default(), "2020");
        let keys: Vec<&str> = rows.iter().map(|row| row.period_key.as_str()).collect();
        assert_eq!(keys, vec!["Q3 2020", "January 2020", "February 2020"]);
    }

    #[test]
    fn test_alias_falls_back_to_name() {
        let whitelist = GameWhitelist::new([
            WhitelistEntry::aliased("Dota 2", "Dota2"),
            WhitelistEntry {
                name: "Rust".to_string(),
                alias: None,
            },
        ]);

        assert_eq!(whitelist.alias_for("Dota 2"), "Dota2");
        assert_eq!(whitelist.alias_for("Rust"), "Rust");
        assert_eq!(whitelist.alias_for("Team Fortress 2"), "Team Fortress 2");
        assert_eq!(whitelist.aliases(), vec!["Dota2", "Rust"]);

        let rows = build_aggregation(
            &[record("Rust", "June 2020", 2020, 6, 9.0)],
            &whitelist,
            "2020",
        );
        assert_eq!(rows[0].value("Rust"), Some(9.0));
    }

    #[test]
    fn test_whitelist_from_config() {
        let config = ComparisonConfig {
            year: "2019".to_string(),
            games: vec![ComparisonGame::new("Rust", "RST", "#000000")],
        };

        let whitelist = GameWhitelist::from(&config);
        assert_eq!(whitelist.len(), 1);
        assert!(whitelist.contains("Rust"));
        assert!(!whitelist.contains("Dota 2"));
    }

    #[test]
    fn test_empty_input() {
        assert!(build_aggregation(&[], &GameWhitelist::default(), "2020").is_empty());
        assert!(build_aggregation(
            &[record("Dota 2", "May 2020", 2020, 5, 1.0)],
            &GameWhitelist::new([]),
            "2020"
        )
        .is_empty());
    }

    #[test]
    fn test_period_start() {
        assert_eq!(
            period_start("March 2020"),
            NaiveDate::from_ymd_opt(2020, 3, 1)
        );
        assert_eq!(period_start("Q1 2020"), None);
        assert_eq!(period_start(""), None);
    }

    proptest! {
        #[test]
        fn prop_aliases_stay_in_whitelist_and_rows_sorted(
            rows in prop::collection::vec((game_name_strategy(), period_strategy()), 0..80),
            year in 2012i32..=2021,
        ) {
            let records: Vec<PlayerRecord> = rows
                .iter()
                .map(|(name, (y, m))| {
                    let label = format!("{} {y}", MONTHS[*m as usize - 1]);
                    record(name, &label, *y, *m, f64::from(*m))
                })
                .collect();
            let whitelist = GameWhitelist::default();
            let year_text = year.to_string();

            let first = build_aggregation(&records, &whitelist, &year_text);
            let second = build_aggregation(&records, &whitelist, &year_text);
            prop_assert_eq!(&first, &second);

            let aliases = whitelist.aliases();
            for row in &first {
                prop_assert!(row.series_values.keys().all(|key| aliases.contains(&key.as_str())));
                prop_assert!(row.period_key.contains(&year_text));
            }

            let starts: Vec<Option<NaiveDate>> =
                first.iter().map(|row| period_start(&row.period_key)).collect();
            prop_assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
