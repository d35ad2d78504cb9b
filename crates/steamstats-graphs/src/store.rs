//! Immutable record store and selector option derivation.

use crate::parser::{parse_records, CsvSchema};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use steamstats_common::PlayerRecord;

/// The parsed dataset. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<PlayerRecord>,
}

/// Values offered by the game and year selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardOptions {
    /// Distinct game names in first-seen order.
    pub games: Vec<String>,
    /// Distinct calendar years, ascending.
    pub years: Vec<i32>,
}

impl RecordStore {
    /// Wraps parsed records.
    pub const fn new(records: Vec<PlayerRecord>) -> Self {
        Self { records }
    }

    /// A store with no records, used when loading fails.
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parses `text` and wraps the result.
    pub fn from_csv(text: &str, schema: &CsvSchema) -> Self {
        Self::new(parse_records(text, schema))
    }

    /// All records in source order.
    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Game names in order of first appearance, without duplicates.
    pub fn distinct_games(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|record| seen.insert(record.game_name.as_str()))
            .map(|record| record.game_name.clone())
            .collect()
    }

    /// Years of the valid dates, ascending and deduplicated.
    pub fn distinct_years(&self) -> Vec<i32> {
        self.records
            .iter()
            .filter_map(|record| record.date.year())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Both selector lists.
    pub fn options(&self) -> DashboardOptions {
        DashboardOptions {
            games: self.distinct_games(),
            years: self.distinct_years(),
        }
    }
}

impl From<Vec<PlayerRecord>> for RecordStore {
    fn from(records: Vec<PlayerRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use steamstats_common::test_utils::property_testing::{game_name_strategy, period_strategy};
    use steamstats_common::test_utils::{csv_fixtures, record, record_with_invalid_date};

    #[test]
    fn test_distinct_games_first_seen_order() {
        let store = RecordStore::new(vec![
            record("Dota 2", "January 2020", 2020, 1, 1.0),
            record("Rust", "January 2020", 2020, 1, 1.0),
            record("Dota 2", "February 2020", 2020, 2, 1.0),
            record("PUBG: Battlegrounds", "January 2020", 2020, 1, 1.0),
        ]);

        assert_eq!(
            store.distinct_games(),
            vec!["Dota 2", "Rust", "PUBG: Battlegrounds"]
        );
    }

    #[test]
    fn test_distinct_years_skip_invalid_dates() {
        let store = RecordStore::new(vec![
            record("Dota 2", "January 2021", 2021, 1, 1.0),
            record_with_invalid_date("Dota 2", "Someday 1999", 1.0),
            record("Dota 2", "March 2019", 2019, 3, 1.0),
            record("Rust", "January 2021", 2021, 1, 1.0),
        ]);

        assert_eq!(store.distinct_years(), vec![2019, 2021]);
    }

    #[test]
    fn test_options_from_sample() {
        let store = RecordStore::from_csv(&csv_fixtures::sample_csv(), &CsvSchema::default());

        assert_eq!(store.len(), 7);
        assert_eq!(
            store.options(),
            DashboardOptions {
                games: vec![
                    "Dota 2".to_string(),
                    "PUBG: Battlegrounds".to_string(),
                    "Counter Strike: Global Offensive".to_string(),
                    "Team Fortress 2".to_string(),
                ],
                years: vec![2020, 2021],
            }
        );
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::empty();

        assert!(store.is_empty());
        assert_eq!(store.options(), DashboardOptions::default());
    }

    proptest! {
        #[test]
        fn prop_distinct_games_unique_and_first_seen(
            rows in prop::collection::vec((game_name_strategy(), period_strategy()), 0..60)
        ) {
            let records: Vec<_> = rows
                .iter()
                .map(|(game, (year, month))| record(game, &format!("{month} {year}"), *year, *month, 1.0))
                .collect();
            let store = RecordStore::new(records);
            let games = store.distinct_games();

            let unique: HashSet<&String> = games.iter().collect();
            prop_assert_eq!(unique.len(), games.len());

            let mut expected: Vec<&String> = Vec::new();
            for (game, _) in &rows {
                if !expected.contains(&game) {
                    expected.push(game);
                }
            }
            prop_assert_eq!(games.iter().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn prop_distinct_years_sorted(
            periods in prop::collection::vec(period_strategy(), 0..60)
        ) {
            let records: Vec<_> = periods
                .iter()
                .map(|(year, month)| record("Dota 2", "label", *year, *month, 1.0))
                .collect();
            let years = RecordStore::new(records).distinct_years();

            prop_assert!(years.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
