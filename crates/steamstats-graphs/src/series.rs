//! Single-game time series for the line chart.

use steamstats_common::{PlayerRecord, SeriesMetric, SeriesPoint};
use tracing::{debug, instrument};

/// Average-player series of `game` for periods whose label contains `year_text`.
pub fn build_series(records: &[PlayerRecord], game: &str, year_text: &str) -> Vec<SeriesPoint> {
    build_series_for(records, game, year_text, SeriesMetric::AvgPlayers)
}

/// Series of `metric` for `game`, ordered by date.
///
/// Game names match exactly and never match an empty name. The year is a
/// substring match on the period label. Records with an invalid date come
/// first; ties keep source order.
#[instrument(skip(records), fields(records = records.len()))]
pub fn build_series_for(
    records: &[PlayerRecord],
    game: &str,
    year_text: &str,
    metric: SeriesMetric,
) -> Vec<SeriesPoint> {
    let mut matching: Vec<&PlayerRecord> = records
        .iter()
        .filter(|record| {
            !record.game_name.is_empty()
                && record.game_name == game
                && record.period_label.contains(year_text)
        })
        .collect();
    matching.sort_by_key(|record| record.date);

    debug!("Series has {} points", matching.len());
    matching
        .into_iter()
        .map(|record| SeriesPoint {
            label: record.period_label.clone(),
            value: metric.value_of(record),
        })
        .collect()
}
